//! The `Point` and `Size` types.

use core::{
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::{Error, Result};

/// A cell position, with `Point(0, 0)` at the top left and `Point(0, 1)` just below it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize)]
pub struct Point(pub usize, pub usize);

/// A width and height, in cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize)]
pub struct Size(pub usize, pub usize);

fn non_negative(what: &'static str, v: i64) -> Result<usize> {
    usize::try_from(v).map_err(|_| Error::invalid(format!("{} must be non-negative, got {}", what, v)))
}

impl Point {
    /// The X component
    pub const fn x(&self) -> usize {
        self.0
    }

    /// The Y component
    pub const fn y(&self) -> usize {
        self.1
    }

    /// Build a point from signed components, rejecting negative ones.
    pub fn try_new(x: i64, y: i64) -> Result<Self> {
        Ok(Self(non_negative("x", x)?, non_negative("y", y)?))
    }
}

impl Size {
    /// The width
    pub const fn w(&self) -> usize {
        self.0
    }

    /// The height
    pub const fn h(&self) -> usize {
        self.1
    }

    /// Build a size from signed components, rejecting negative ones.
    pub fn try_new(w: i64, h: i64) -> Result<Self> {
        Ok(Self(non_negative("width", w)?, non_negative("height", h)?))
    }

    /// How many cells this covers.
    pub const fn area(&self) -> usize {
        self.0 * self.1
    }
}

macro_rules! xy_op {
    ( $( $trait:ident($fn:ident) => $op:tt $assn_op:tt for $( $ty:ident ),+ );* $(;)? ) => { $( $(
        impl $trait for $ty {
            type Output = $ty;
            fn $fn(self, rhs: $ty) -> $ty {
                $ty(self.0 $op rhs.0, self.1 $op rhs.1)
            }
        }

        impl $trait<(usize, usize)> for $ty {
            type Output = $ty;
            fn $fn(self, rhs: (usize, usize)) -> $ty {
                $ty(self.0 $op rhs.0, self.1 $op rhs.1)
            }
        }

        paste::paste! {
            impl [< $trait Assign >] for $ty {
                fn [< $fn _assign >] (&mut self, rhs: $ty) {
                    self.0 $assn_op rhs.0;
                    self.1 $assn_op rhs.1;
                }
            }
            impl [< $trait Assign >] <(usize, usize)> for $ty {
                fn [< $fn _assign >] (&mut self, rhs: (usize, usize)) {
                    self.0 $assn_op rhs.0;
                    self.1 $assn_op rhs.1;
                }
            }
        }
    )+ )* };
}

xy_op! {
    Add(add) => + += for Point, Size;
    Sub(sub) => - -= for Point, Size;
}

/// The cell just past the far corner of a box at `self` with size `rhs`.
impl Add<Size> for Point {
    type Output = Point;
    fn add(self, rhs: Size) -> Point {
        Point(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.0, self.1)
    }
}

impl fmt::Debug for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size({}x{})", self.0, self.1)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.1)
    }
}

impl From<(usize, usize)> for Point {
    fn from(f: (usize, usize)) -> Point {
        Point(f.0, f.1)
    }
}

impl From<(usize, usize)> for Size {
    fn from(f: (usize, usize)) -> Size {
        Size(f.0, f.1)
    }
}
