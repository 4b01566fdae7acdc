use crate::{Bounds, Point, Rectangle};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use log::trace;
use ordered_float::OrderedFloat;
use std::{
    f64::consts::PI,
    fmt,
    hash::{Hash, Hasher},
    ops,
};

/// An immutable 2D vector of `f64` components.
///
/// Every operation returns a new `Vector`. Binary operations accept anything
/// `Into<Vector>`, so another vector, an `(x, y)` pair, an `[x, y]` array, a
/// [`Point`](struct.Point.html) or a single uniform `f64` are interchangeable.
///
/// # Example
///
/// ```
/// use vector_rect::Vector;
///
/// let v = Vector::new(1.0, 2.0).add((3.0, 4.0)).multiply(0.5);
/// assert!(v.equals((2.0, 3.0)));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };
    pub const ONE: Vector = Vector { x: 1.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns a vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns an identical `Vector` but with the input `x`.
    #[inline]
    pub fn set_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    /// Returns an identical `Vector` but with the input `y`.
    #[inline]
    pub fn set_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    /// Transforms both components at once.
    ///
    /// ```
    /// # use vector_rect::Vector;
    /// let swapped = Vector::new(1.0, 2.0).map(|x, y| (y, x));
    /// assert_eq!(swapped, Vector::new(2.0, 1.0));
    /// ```
    #[inline]
    pub fn map<F, V>(self, f: F) -> Self
    where
        F: FnOnce(f64, f64) -> V,
        V: Into<Vector>,
    {
        f(self.x, self.y).into()
    }

    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn add<V: Into<Vector>>(self, other: V) -> Self {
        self.zip_with(other.into(), |a, b| a + b)
    }

    #[inline]
    pub fn subtract<V: Into<Vector>>(self, other: V) -> Self {
        self.zip_with(other.into(), |a, b| a - b)
    }

    /// Component-wise division. Dividing by zero yields infinite or NaN
    /// components, it never panics.
    #[inline]
    pub fn divide<V: Into<Vector>>(self, other: V) -> Self {
        self.zip_with(other.into(), |a, b| a / b)
    }

    /// Component-wise (Hadamard) product. A single `f64` scales both components.
    #[inline]
    pub fn multiply<V: Into<Vector>>(self, other: V) -> Self {
        self.zip_with(other.into(), |a, b| a * b)
    }

    #[inline]
    pub fn dot<V: Into<Vector>>(self, other: V) -> f64 {
        let other: Vector = other.into();
        self.x * other.x + self.y * other.y
    }

    /// 2D scalar cross product, `x1 * y2 - y1 * x2`.
    #[inline]
    pub fn cross<V: Into<Vector>>(self, other: V) -> f64 {
        let other: Vector = other.into();
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector in the same direction.
    ///
    /// A zero-length vector has no direction, so the result has NaN components.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            trace!("Normalizing zero-length vector {}", self);
        }
        self.divide(length)
    }

    /// Rotates counterclockwise about the origin.
    pub fn rotate_radians(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotates counterclockwise about the origin.
    #[inline]
    pub fn rotate_degrees(self, degrees: f64) -> Self {
        self.rotate_radians(degrees * PI / 180.0)
    }

    /// Returns true if this point lies inside the rectangle, edges included.
    ///
    /// ```
    /// # use vector_rect::{Bounds, Vector};
    /// let bounds = Bounds { x: 0.0, y: 0.0, width: 2.0, height: 3.0 };
    /// assert!(Vector::new(1.0, 2.0).is_in_rectangle(bounds));
    /// assert!(Vector::new(2.0, 3.0).is_in_rectangle(bounds));
    /// assert!(!Vector::new(2.1, 3.0).is_in_rectangle(bounds));
    /// ```
    pub fn is_in_rectangle<R: Into<Rectangle>>(self, rect: R) -> bool {
        let rect: Rectangle = rect.into();
        let Bounds {
            x,
            y,
            width,
            height,
        } = rect.to_bounds();

        x <= self.x && self.x <= x + width && y <= self.y && self.y <= y + height
    }

    /// Exact component-wise equality, no tolerance.
    #[inline]
    pub fn equals<V: Into<Vector>>(self, other: V) -> bool {
        let other: Vector = other.into();
        self == other
    }

    #[inline]
    fn zip_with(self, other: Vector, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(f(self.x, other.x), f(self.y, other.y))
    }
}

impl From<f64> for Vector {
    #[inline]
    fn from(v: f64) -> Self {
        Self::splat(v)
    }
}

impl From<(f64, f64)> for Vector {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for Vector {
    #[inline]
    fn from(Point { x, y }: Point) -> Self {
        Self::new(x, y)
    }
}

impl From<&Point> for Vector {
    #[inline]
    fn from(p: &Point) -> Self {
        (*p).into()
    }
}

/// Takes the record's `x` & `y`, ignoring its size.
impl From<Bounds> for Vector {
    #[inline]
    fn from(b: Bounds) -> Self {
        Self::new(b.x, b.y)
    }
}

impl From<&Vector> for Vector {
    #[inline]
    fn from(v: &Vector) -> Self {
        *v
    }
}

impl From<Vector> for (f64, f64) {
    #[inline]
    fn from(v: Vector) -> Self {
        (v.x, v.y)
    }
}

impl From<Vector> for [f64; 2] {
    #[inline]
    fn from(v: Vector) -> Self {
        [v.x, v.y]
    }
}

impl From<Vector> for Point {
    #[inline]
    fn from(v: Vector) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl<V: Into<Vector>> ops::Add<V> for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: V) -> Vector {
        Vector::add(self, rhs)
    }
}

impl<V: Into<Vector>> ops::Sub<V> for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: V) -> Vector {
        self.subtract(rhs)
    }
}

impl<V: Into<Vector>> ops::Mul<V> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: V) -> Vector {
        self.multiply(rhs)
    }
}

impl<V: Into<Vector>> ops::Div<V> for Vector {
    type Output = Vector;

    #[inline]
    fn div(self, rhs: V) -> Vector {
        self.divide(rhs)
    }
}

impl ops::Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let ord_floats: &[OrderedFloat<_>] = &[self.x.into(), self.y.into()];
        ord_floats.hash(state);
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Vector {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}
