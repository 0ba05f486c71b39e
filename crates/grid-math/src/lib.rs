#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library of 2D math primitives for grid systems."]
#![doc = ""]
#![doc = "This crate provides float world positions (`Vect2`), integer cell coordinates (`Vect2Int`),"]
#![doc = "and the floor helper used to map a world position onto a cell."]

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use libm::floorf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2‑D point or vector in world units.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Vect2 {
    /// World‑frame x component.
    pub x: f32,
    /// World‑frame y component.
    pub y: f32,
}

impl Vect2 {
    /// The zero vector.
    pub const ZERO: Vect2 = Vect2::new(0.0, 0.0);

    /// Construct a new vector.
    ///
    /// # Arguments
    ///
    /// * `x`: x component in world units.
    /// * `y`: y component in world units.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Vect2 { x, y }
    }

    /// Overwrite both components in place.
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Returns true if both components are finite (not NaN or infinite).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Floors both components onto the integer lattice.
    ///
    /// Uses floor, not truncation: `-0.5` maps to `-1`.
    pub fn floor_to_int(self) -> Vect2Int {
        Vect2Int::new(floor_to_int(self.x), floor_to_int(self.y))
    }

    /// Squared euclidean length.
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }
}

impl fmt::Display for Vect2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl Add for Vect2 {
    type Output = Vect2;

    fn add(self, rhs: Vect2) -> Vect2 {
        Vect2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vect2 {
    fn add_assign(&mut self, rhs: Vect2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vect2 {
    type Output = Vect2;

    fn sub(self, rhs: Vect2) -> Vect2 {
        Vect2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vect2 {
    fn sub_assign(&mut self, rhs: Vect2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vect2 {
    type Output = Vect2;

    fn mul(self, rhs: f32) -> Vect2 {
        Vect2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vect2 {
    type Output = Vect2;

    fn div(self, rhs: f32) -> Vect2 {
        Vect2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vect2 {
    type Output = Vect2;

    fn neg(self) -> Vect2 {
        Vect2::new(-self.x, -self.y)
    }
}

impl From<Vect2Int> for Vect2 {
    fn from(v: Vect2Int) -> Self {
        Vect2::new(v.x as f32, v.y as f32)
    }
}

/// An integer 2‑D vector, used for cell coordinates.
///
/// Components are signed so that positions below or left of a grid origin
/// produce negative coordinates rather than wrapping.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Vect2Int {
    /// x component.
    pub x: i32,
    /// y component.
    pub y: i32,
}

impl Vect2Int {
    /// The zero coordinate.
    pub const ZERO: Vect2Int = Vect2Int::new(0, 0);

    /// Construct a new integer vector.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Vect2Int { x, y }
    }

    /// Overwrite both components in place.
    pub fn set(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

impl fmt::Display for Vect2Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vect2Int {
    type Output = Vect2Int;

    fn add(self, rhs: Vect2Int) -> Vect2Int {
        Vect2Int::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vect2Int {
    type Output = Vect2Int;

    fn sub(self, rhs: Vect2Int) -> Vect2Int {
        Vect2Int::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Vect2Int {
    fn from((x, y): (i32, i32)) -> Self {
        Vect2Int::new(x, y)
    }
}

/// Floor a float to the nearest integer towards negative infinity.
///
/// Values outside the `i32` range saturate. NaN maps to `i32::MIN`, so it
/// never lands on a valid cell index.
///
/// # Arguments
///
/// * `value`: The value to floor.
pub fn floor_to_int(value: f32) -> i32 {
    if value.is_nan() {
        return i32::MIN;
    }
    floorf(value) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_floor_to_int() {
        assert_eq!(floor_to_int(0.0), 0);
        assert_eq!(floor_to_int(1.5), 1);
        assert_eq!(floor_to_int(1.999), 1);
        assert_eq!(floor_to_int(2.0), 2);
        // Floor, not truncation
        assert_eq!(floor_to_int(-0.5), -1);
        assert_eq!(floor_to_int(-1.0), -1);
        assert_eq!(floor_to_int(-1.01), -2);
    }

    #[test]
    fn test_floor_to_int_saturates() {
        assert_eq!(floor_to_int(f32::MAX), i32::MAX);
        assert_eq!(floor_to_int(f32::MIN), i32::MIN);
        assert_eq!(floor_to_int(f32::INFINITY), i32::MAX);
        assert_eq!(floor_to_int(f32::NEG_INFINITY), i32::MIN);
    }

    #[test]
    fn test_floor_to_int_nan_is_min() {
        assert_eq!(floor_to_int(f32::NAN), i32::MIN);
        assert_eq!(floor_to_int(-f32::NAN), i32::MIN);
        assert_eq!(Vect2::new(f32::NAN, 1.5).floor_to_int(), Vect2Int::new(i32::MIN, 1));
    }

    #[test]
    fn test_vect2_ops() {
        let a = Vect2::new(1.0, 2.0);
        let b = Vect2::new(0.5, -1.0);
        assert_eq!(a + b, Vect2::new(1.5, 1.0));
        assert_eq!(a - b, Vect2::new(0.5, 3.0));
        assert_eq!(a * 2.0, Vect2::new(2.0, 4.0));
        assert_eq!(a / 2.0, Vect2::new(0.5, 1.0));
        assert_eq!(-a, Vect2::new(-1.0, -2.0));

        let mut c = a;
        c += b;
        c -= a;
        assert!((c.x - b.x).abs() < EPSILON);
        assert!((c.y - b.y).abs() < EPSILON);
        assert!((Vect2::new(3.0, 4.0).length_squared() - 25.0).abs() < EPSILON);
    }

    #[test]
    fn test_vect2_set_and_floor() {
        let mut v = Vect2::ZERO;
        v.set(-0.25, 3.75);
        assert_eq!(v, Vect2::new(-0.25, 3.75));
        assert_eq!(v.floor_to_int(), Vect2Int::new(-1, 3));
    }

    #[test]
    fn test_vect2_is_finite() {
        assert!(Vect2::new(1.0, -1.0).is_finite());
        assert!(!Vect2::new(f32::NAN, 0.0).is_finite());
        assert!(!Vect2::new(0.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_vect2int() {
        let mut c = Vect2Int::from((2, 3));
        assert_eq!(c + Vect2Int::new(1, -1), Vect2Int::new(3, 2));
        assert_eq!(c - Vect2Int::new(2, 3), Vect2Int::ZERO);
        c.set(-4, 5);
        assert_eq!(c, Vect2Int::new(-4, 5));
        assert_eq!(Vect2::from(c), Vect2::new(-4.0, 5.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Vect2::new(1.0, 2.5)), "(1.00, 2.50)");
        assert_eq!(format!("{}", Vect2Int::new(-1, 7)), "(-1, 7)");
    }
}
