//! Miscellaneous macros used across the crate that needed a home

macro_rules! setters {
    ( $(
        $name:ident $( ( $($pname:ident: $ptype:ty),* $(,)? ) )?  => $field:ident = $value:expr
    ),* $(,)? ) => {
        $(
            #[must_use]
            pub fn $name(mut self $( , $( $pname: $ptype ),* )?) -> Self {
                self.$field = $value;
                self
            }
        )*
    };
}

macro_rules! abbrev_debug {
    (
        $class:ident;
        $( write $always:ident, )*
        $( ignore $ignore:ident, )*
        $( if $sometimes:ident != $default:expr, )*
    ) => {
        impl core::fmt::Debug for $class {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!(stringify!($class), " {{ "))?;
                $(
                    write!(f, concat!(stringify!($always), ": {:?}, "), self.$always)?;
                )*
                $(
                    write!(f, concat!(stringify!($ignore), ": .., "))?;
                )*
                $(
                    if self.$sometimes != $default {
                        write!(f, concat!(stringify!($sometimes), ": {:?}, "), self.$sometimes)?;
                    }
                )*
                write!(f, ".. }}")
            }
        }
    }
}

pub(crate) use {abbrev_debug, setters};
