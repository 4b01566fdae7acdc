use crate::Rectangle;
use std::{fmt, iter::FromIterator};

/// Numeric `{left, top, width, height}` record for positioning UI elements.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CssRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rectangle> for CssRect {
    #[inline]
    fn from(rect: Rectangle) -> Self {
        rect.to_css()
    }
}

impl From<CssRect> for Rectangle {
    #[inline]
    fn from(css: CssRect) -> Self {
        Rectangle::new((css.left, css.top), (css.width, css.height))
    }
}

/// A read-only view of a [`Rectangle`](struct.Rectangle.html) under caller chosen
/// field names.
///
/// Built with [`Rectangle::project`](struct.Rectangle.html#method.project).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection<'a> {
    fields: [(&'a str, f64); 4],
}

impl<'a> Projection<'a> {
    pub(crate) fn new([x, y, width, height]: [&'a str; 4], rect: Rectangle) -> Self {
        Self {
            fields: [
                (x, rect.x()),
                (y, rect.y()),
                (width, rect.width()),
                (height, rect.height()),
            ],
        }
    }

    /// Value of the named field. With duplicate names the first wins.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|&(_, value)| value)
    }

    /// `(name, value)` pairs in origin x, origin y, width, height order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        self.fields.iter().copied()
    }

    /// Collects the fields into any `(name, value)` collection, eg a `HashMap`.
    pub fn collect<C: FromIterator<(&'a str, f64)>>(&self) -> C {
        self.iter().collect()
    }
}

impl fmt::Display for Projection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, (name, value)) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}: {}", name, value)?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_css_shortcut() {
        let rect = Rectangle::new((1.0, 2.0), (3.0, 4.0));
        let css = CssRect::from(rect);
        assert_eq!(
            css,
            CssRect {
                left: 1.0,
                top: 2.0,
                width: 3.0,
                height: 4.0,
            }
        );
        assert_eq!(Rectangle::from(css), rect);
    }

    #[test]
    fn projection_lookup() {
        let rect = Rectangle::new((1.0, 2.0), (3.0, 4.0));
        let projection = rect.project(["left", "top", "w", "h"]);

        assert_eq!(projection.get("left"), Some(1.0));
        assert_eq!(projection.get("top"), Some(2.0));
        assert_eq!(projection.get("w"), Some(3.0));
        assert_eq!(projection.get("h"), Some(4.0));
        assert_eq!(projection.get("width"), None);
    }

    #[test]
    fn projection_duplicate_name_first_wins() {
        let rect = Rectangle::new((1.0, 2.0), (3.0, 4.0));
        let projection = rect.project(["a", "a", "b", "b"]);
        assert_eq!(projection.get("a"), Some(1.0));
        assert_eq!(projection.get("b"), Some(3.0));
    }

    #[test]
    fn projection_collect() {
        let rect = Rectangle::new((1.0, 2.0), (3.0, 4.0));
        let projection = rect.project(["x", "y", "width", "height"]);

        let map: HashMap<_, _> = projection.collect();
        assert_eq!(map.len(), 4);
        assert_eq!(map["height"], 4.0);

        let pairs: Vec<_> = projection.iter().collect();
        assert_eq!(
            pairs,
            vec![("x", 1.0), ("y", 2.0), ("width", 3.0), ("height", 4.0)]
        );
    }

    #[test]
    fn projection_display() {
        let rect = Rectangle::new((1.0, 2.0), (3.0, 4.5));
        assert_eq!(
            rect.project(["x", "y", "width", "height"]).to_string(),
            "{ x: 1, y: 2, width: 3, height: 4.5 }"
        );
    }
}
