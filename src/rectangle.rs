use crate::{Bounds, CssError, CssFormat, CssRect, CssStyle, Projection, Vector};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use log::debug;
use std::{
    convert::TryFrom,
    fmt,
    hash::{Hash, Hasher},
};

/// An immutable axis-aligned rectangle described by an `origin` & a `dimension`.
///
/// The dimension may be negative, it is never clamped or normalized.
///
/// # Example
///
/// ```
/// use vector_rect::{Bounds, Rectangle};
///
/// let rect = Rectangle::new((1.0, 2.0), (3.0, 4.0));
/// assert_eq!(
///     rect.to_bounds(),
///     Bounds { x: 1.0, y: 2.0, width: 3.0, height: 4.0 }
/// );
/// assert_eq!(rect.css_style().to_string(), "left: 1px; top: 2px; width: 3px; height: 4px;");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rectangle {
    origin: Vector,
    dimension: Vector,
}

impl Rectangle {
    #[inline]
    pub fn new<O: Into<Vector>, D: Into<Vector>>(origin: O, dimension: D) -> Self {
        Self {
            origin: origin.into(),
            dimension: dimension.into(),
        }
    }

    /// Top-left position.
    #[inline]
    pub fn origin(self) -> Vector {
        self.origin
    }

    /// `(width, height)` size.
    #[inline]
    pub fn dimension(self) -> Vector {
        self.dimension
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.origin.x()
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.origin.y()
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.dimension.x()
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.dimension.y()
    }

    /// Returns an identical `Rectangle` but with the input `origin`.
    #[inline]
    pub fn set_origin<V: Into<Vector>>(self, origin: V) -> Self {
        Self {
            origin: origin.into(),
            ..self
        }
    }

    /// Returns an identical `Rectangle` but with the input `dimension`.
    #[inline]
    pub fn set_dimension<V: Into<Vector>>(self, dimension: V) -> Self {
        Self {
            dimension: dimension.into(),
            ..self
        }
    }

    /// Replaces both fields using `f(origin, dimension) -> (origin, dimension)`.
    ///
    /// ```
    /// # use vector_rect::Rectangle;
    /// let grown = Rectangle::new((1.0, 1.0), (2.0, 2.0))
    ///     .map(|origin, dimension| (origin.subtract(1.0), dimension.add(2.0)));
    /// assert_eq!(grown, Rectangle::new((0.0, 0.0), (4.0, 4.0)));
    /// ```
    #[inline]
    pub fn map<F, O, D>(self, f: F) -> Self
    where
        F: FnOnce(Vector, Vector) -> (O, D),
        O: Into<Vector>,
        D: Into<Vector>,
    {
        let (origin, dimension) = f(self.origin, self.dimension);
        Self::new(origin, dimension)
    }

    /// Exact equality of both origin & dimension.
    #[inline]
    pub fn equals<R: Into<Rectangle>>(self, other: R) -> bool {
        let other: Rectangle = other.into();
        self == other
    }

    /// Returns true if the point lies inside, edges included.
    ///
    /// Same test as [`Vector::is_in_rectangle`](struct.Vector.html#method.is_in_rectangle).
    #[inline]
    pub fn contains<V: Into<Vector>>(self, point: V) -> bool {
        let point: Vector = point.into();
        point.is_in_rectangle(self)
    }

    /// Projects into an `{x, y, width, height}` record.
    #[inline]
    pub fn to_bounds(self) -> Bounds {
        Bounds {
            x: self.origin.x(),
            y: self.origin.y(),
            width: self.dimension.x(),
            height: self.dimension.y(),
        }
    }

    /// Projects into a numeric `{left, top, width, height}` record.
    #[inline]
    pub fn to_css(self) -> CssRect {
        CssRect {
            left: self.origin.x(),
            top: self.origin.y(),
            width: self.dimension.x(),
            height: self.dimension.y(),
        }
    }

    /// Projects into CSS lengths using the default [`CssFormat`](struct.CssFormat.html),
    /// ie `"3px"`.
    #[inline]
    pub fn css_style(self) -> CssStyle {
        CssFormat::default().format(self)
    }

    /// Projects into a record with caller chosen field names, assigned in
    /// origin x, origin y, width, height order.
    ///
    /// ```
    /// # use vector_rect::Rectangle;
    /// let rect = Rectangle::new((1.0, 2.0), (3.0, 4.0));
    /// let projection = rect.project(["x0", "y0", "w", "h"]);
    /// assert_eq!(projection.get("w"), Some(3.0));
    /// assert_eq!(projection.get("width"), None);
    /// ```
    #[inline]
    pub fn project<'a>(self, names: [&'a str; 4]) -> Projection<'a> {
        Projection::new(names, self)
    }

    /// Reads a rectangle back out of CSS lengths.
    ///
    /// All four lengths must share a unit, the unit itself is discarded.
    pub fn from_css(style: &CssStyle) -> Result<Self, CssError> {
        let unit = style.left.unit;
        for length in &[style.top, style.width, style.height] {
            if length.unit != unit {
                debug!("Rejecting `{}`, lengths mix {:?} & {:?}", style, unit, length.unit);
                return Err(CssError::MixedUnits {
                    expected: unit,
                    found: length.unit,
                });
            }
        }

        Ok(Self::new(
            (style.left.value, style.top.value),
            (style.width.value, style.height.value),
        ))
    }
}

impl<O: Into<Vector>, D: Into<Vector>> From<(O, D)> for Rectangle {
    #[inline]
    fn from((origin, dimension): (O, D)) -> Self {
        Self::new(origin, dimension)
    }
}

impl From<Bounds> for Rectangle {
    #[inline]
    fn from(b: Bounds) -> Self {
        Self::new((b.x, b.y), (b.width, b.height))
    }
}

impl From<&Bounds> for Rectangle {
    #[inline]
    fn from(b: &Bounds) -> Self {
        (*b).into()
    }
}

impl From<&Rectangle> for Rectangle {
    #[inline]
    fn from(r: &Rectangle) -> Self {
        *r
    }
}

impl From<Rectangle> for Bounds {
    #[inline]
    fn from(r: Rectangle) -> Self {
        r.to_bounds()
    }
}

impl TryFrom<&CssStyle> for Rectangle {
    type Error = CssError;

    fn try_from(style: &CssStyle) -> Result<Self, CssError> {
        Self::from_css(style)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.origin, self.dimension)
    }
}

impl Hash for Rectangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.dimension.hash(state);
    }
}

impl AbsDiffEq for Rectangle {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        Vector::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.origin.abs_diff_eq(&other.origin, epsilon)
            && self.dimension.abs_diff_eq(&other.dimension, epsilon)
    }
}

impl RelativeEq for Rectangle {
    fn default_max_relative() -> f64 {
        Vector::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.origin.relative_eq(&other.origin, epsilon, max_relative)
            && self
                .dimension
                .relative_eq(&other.dimension, epsilon, max_relative)
    }
}

impl UlpsEq for Rectangle {
    fn default_max_ulps() -> u32 {
        Vector::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.origin.ulps_eq(&other.origin, epsilon, max_ulps)
            && self.dimension.ulps_eq(&other.dimension, epsilon, max_ulps)
    }
}
