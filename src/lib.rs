//! Immutable 2D [`Vector`](struct.Vector.html) & [`Rectangle`](struct.Rectangle.html)
//! values.
//!
//! Every operation returns a new value. Operands are accepted in any shape that
//! converts into the target type: a vector, an `(x, y)` pair, an `[x, y]` array,
//! a [`Point`](struct.Point.html) record or a single uniform `f64`.
//!
//! # Example
//!
//! ```
//! use vector_rect::*;
//!
//! // e.g. the bounding box of a UI element
//! let bounds = Bounds { x: 10.0, y: 20.0, width: 100.0, height: 50.0 };
//!
//! let center = vector(bounds).add(rectangle(bounds).dimension().divide(2.0));
//! assert!(center.equals((60.0, 45.0)));
//! assert!(center.is_in_rectangle(bounds));
//!
//! let moved = rectangle(bounds).map(|origin, dimension| (origin.add((5.0, 0.0)), dimension));
//! assert_eq!(
//!     moved.to_css(),
//!     CssRect { left: 15.0, top: 20.0, width: 100.0, height: 50.0 }
//! );
//! assert_eq!(
//!     moved.css_style().to_string(),
//!     "left: 15px; top: 20px; width: 100px; height: 50px;"
//! );
//! ```
mod css;
mod projection;
mod rectangle;
mod record;
mod vector;

pub use self::{css::*, projection::*, rectangle::*, record::*, vector::*};

/// Creates a [`Vector`](struct.Vector.html) from any supported shape.
///
/// ```
/// use vector_rect::{vector, Point, Vector};
///
/// let v = Vector::new(1.0, 2.0);
/// assert_eq!(vector((1.0, 2.0)), v);
/// assert_eq!(vector([1.0, 2.0]), v);
/// assert_eq!(vector(Point { x: 1.0, y: 2.0 }), v);
/// assert_eq!(vector(3.0), Vector::new(3.0, 3.0));
/// ```
#[inline]
pub fn vector<V: Into<Vector>>(v: V) -> Vector {
    v.into()
}

/// Creates a [`Rectangle`](struct.Rectangle.html) from an `(origin, dimension)` pair or a
/// [`Bounds`](struct.Bounds.html) record.
///
/// ```
/// use vector_rect::{rectangle, Bounds, Rectangle};
///
/// let rect = Rectangle::new((1.0, 2.0), (3.0, 4.0));
/// assert_eq!(rectangle(((1.0, 2.0), (3.0, 4.0))), rect);
/// assert_eq!(
///     rectangle(Bounds { x: 1.0, y: 2.0, width: 3.0, height: 4.0 }),
///     rect
/// );
/// ```
#[inline]
pub fn rectangle<R: Into<Rectangle>>(r: R) -> Rectangle {
    r.into()
}
