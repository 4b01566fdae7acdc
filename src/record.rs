//! Plain data records used to move positions & boxes in and out of the library.
//!
//! A host UI layer adapts its own bounding box results into these, after which
//! they can be handed straight to [`vector`](fn.vector.html) or
//! [`rectangle`](fn.rectangle.html).

/// A position record with public `x` & `y` fields.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A box record in the shape of a typical UI bounding box query result.
///
/// `width` & `height` are not required to be positive.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
