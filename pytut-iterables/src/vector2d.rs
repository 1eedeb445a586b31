//! A two-component vector with value semantics.
//!
//! `Vector2d` demonstrates the special-method surface of a small class:
//! construction that normalizes to float, component iteration (what makes
//! unpacking work), two display forms, equality by value, a magnitude, and
//! Python's truthiness rule made explicit.

use std::fmt;

/// A 2D vector of two f64 components, immutable after construction.
///
/// # Python equivalent
/// ```python
/// class Vector2d:
///     def __init__(self, x, y):
///         self.x = float(x)
///         self.y = float(y)
/// ```
///
/// # Example
/// ```
/// use pytut_iterables::Vector2d;
/// let v = Vector2d::new(3, 4);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v, (3.0, 4.0));
/// assert!(v.is_truthy());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Vector2d {
    x: f64,
    y: f64,
}

impl Vector2d {
    /// Converting both components to float at construction catches
    /// unsuitable arguments early, so `new(3, 4)` and `new(3.0, 4.0)` build
    /// the same value.
    pub fn new(x: impl Into<f64>, y: impl Into<f64>) -> Self {
        Vector2d {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Scalar magnitude, `__abs__` in the original.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Python's `__bool__`, derived from the magnitude: only the zero
    /// vector is falsy.
    pub fn is_truthy(&self) -> bool {
        self.magnitude() != 0.0
    }
}

/// Component iteration is what makes unpacking work: `x, y = vector`.
impl IntoIterator for Vector2d {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.x, self.y].into_iter()
    }
}

/// `__str__`: the ordered pair, `(3.0, 4.0)`.
impl fmt::Display for Vector2d {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

/// `__repr__`: the constructor form, `Vector2d(3.0, 4.0)`.
impl fmt::Debug for Vector2d {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Vector2d({:?}, {:?})", self.x, self.y)
    }
}

/// The original compares by value against any pair of the same numbers
/// (`Vector2d(3, 4) == (3, 4)` is True there); the tuple case is kept.
impl PartialEq<(f64, f64)> for Vector2d {
    fn eq(&self, other: &(f64, f64)) -> bool {
        (self.x, self.y) == *other
    }
}

impl PartialEq<Vector2d> for (f64, f64) {
    fn eq(&self, other: &Vector2d) -> bool {
        other == self
    }
}
