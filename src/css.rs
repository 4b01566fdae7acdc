//! CSS length strings for rectangle projections.
use crate::Rectangle;
use log::debug;
use std::{error::Error, fmt, str::FromStr};

/// Unit suffix of a [`CssLength`](struct.CssLength.html).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssUnit {
    /// `px`
    Px,
    /// `em`
    Em,
    /// `rem`
    Rem,
    /// `%`
    Percent,
    /// Unitless, eg `0`.
    None,
}

impl CssUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            CssUnit::Px => "px",
            CssUnit::Em => "em",
            CssUnit::Rem => "rem",
            CssUnit::Percent => "%",
            CssUnit::None => "",
        }
    }
}

impl Default for CssUnit {
    #[inline]
    fn default() -> Self {
        CssUnit::Px
    }
}

/// A number with a unit, displayed like `"3px"`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CssLength {
    pub value: f64,
    pub unit: CssUnit,
}

impl CssLength {
    #[inline]
    pub fn new(value: f64, unit: CssUnit) -> Self {
        Self { value, unit }
    }

    #[inline]
    pub fn px(value: f64) -> Self {
        Self::new(value, CssUnit::Px)
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for CssLength {
    type Err = CssError;

    /// Parses `"3px"`, `"-1.5em"`, `"50%"` or a bare number like `"0"`.
    fn from_str(s: &str) -> Result<Self, CssError> {
        let s = s.trim();
        if s.is_empty() {
            debug!("Rejecting empty css length");
            return Err(CssError::MissingValue);
        }

        let (number, unit) = split_unit(s).map_err(|e| {
            debug!("Rejecting css length `{}`, unknown unit", s);
            e
        })?;

        if number.is_empty() {
            debug!("Rejecting css length `{}`, no value", s);
            return Err(CssError::MissingValue);
        }
        let value = number.parse::<f64>().map_err(|_| {
            debug!("Rejecting css length `{}`, bad number", s);
            CssError::InvalidNumber {
                input: number.to_owned(),
            }
        })?;
        if !value.is_finite() {
            debug!("Rejecting css length `{}`, not finite", s);
            return Err(CssError::InvalidNumber {
                input: number.to_owned(),
            });
        }

        Ok(Self { value, unit })
    }
}

/// Splits a trimmed length into its numeric part & unit.
///
/// Known suffixes are stripped first so non-finite numbers like `infpx` keep their
/// number intact and fail as numbers, not units.
fn split_unit(s: &str) -> Result<(&str, CssUnit), CssError> {
    // `rem` before `em`
    for &unit in &[CssUnit::Rem, CssUnit::Px, CssUnit::Em, CssUnit::Percent] {
        if let Some(number) = s.strip_suffix(unit.suffix()) {
            return Ok((number, unit));
        }
    }

    let number = s.trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
    if number.is_empty() || number.len() == s.len() {
        // no unit at all, or nothing but letters eg `inf`
        return Ok((s, CssUnit::None));
    }
    Err(CssError::UnknownUnit {
        unit: s[number.len()..].to_owned(),
    })
}

/// The CSS shortcut projection of a rectangle as `{left, top, width, height}` lengths.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CssStyle {
    pub left: CssLength,
    pub top: CssLength,
    pub width: CssLength,
    pub height: CssLength,
}

impl CssStyle {
    /// Parses each length with [`CssLength::from_str`](struct.CssLength.html).
    pub fn parse(left: &str, top: &str, width: &str, height: &str) -> Result<Self, CssError> {
        Ok(Self {
            left: left.parse()?,
            top: top.parse()?,
            width: width.parse()?,
            height: height.parse()?,
        })
    }
}

/// Inline style declaration, eg `left: 1px; top: 2px; width: 3px; height: 4px;`.
impl fmt::Display for CssStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left: {}; top: {}; width: {}; height: {};",
            self.left, self.top, self.width, self.height
        )
    }
}

/// Formatting settings for converting a [`Rectangle`](struct.Rectangle.html) into a
/// [`CssStyle`](struct.CssStyle.html).
///
/// # Example
///
/// ```
/// use vector_rect::{CssFormat, CssUnit, Rectangle};
///
/// let style = CssFormat::default()
///     .unit(CssUnit::Em)
///     .precision(2)
///     .format(Rectangle::new((1.0 / 3.0, 0.5), (2.0, 10.0)));
///
/// assert_eq!(style.to_string(), "left: 0.33em; top: 0.5em; width: 2em; height: 10em;");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CssFormat {
    /// Unit attached to every length. Defaults to `px`.
    pub unit: CssUnit,
    /// Maximum decimal places, values are rounded to fit. Defaults to unlimited.
    pub precision: Option<u8>,
}

impl Default for CssFormat {
    #[inline]
    fn default() -> Self {
        Self {
            unit: CssUnit::default(),
            precision: None,
        }
    }
}

impl CssFormat {
    /// Returns an identical `CssFormat` but with the input `unit`.
    #[inline]
    pub fn unit(self, unit: CssUnit) -> Self {
        Self { unit, ..self }
    }

    /// Returns an identical `CssFormat` but rounding to `decimals` places.
    #[inline]
    pub fn precision(self, decimals: u8) -> Self {
        Self {
            precision: Some(decimals),
            ..self
        }
    }

    pub fn format<R: Into<Rectangle>>(&self, rect: R) -> CssStyle {
        let rect: Rectangle = rect.into();
        let css = rect.to_css();
        CssStyle {
            left: self.length(css.left),
            top: self.length(css.top),
            width: self.length(css.width),
            height: self.length(css.height),
        }
    }

    fn length(&self, value: f64) -> CssLength {
        let value = match self.precision {
            Some(decimals) => {
                let scale = 10_f64.powi(i32::from(decimals));
                let scaled = value * scale;
                if scaled.is_finite() {
                    scaled.round() / scale
                } else {
                    // already too large to carry any decimals
                    value
                }
            }
            None => value,
        };
        // `-0px` -> `0px`
        let value = if value == 0.0 { 0.0 } else { value };
        CssLength::new(value, self.unit)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CssError {
    /// Length has no numeric part.
    MissingValue,
    /// Numeric part could not be read as a finite number.
    InvalidNumber { input: String },
    /// Suffix is not a supported unit.
    UnknownUnit { unit: String },
    /// Lengths of one style disagree on unit.
    MixedUnits { expected: CssUnit, found: CssUnit },
}

impl fmt::Display for CssError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssError::MissingValue => write!(f, "Css length is missing a value"),
            CssError::InvalidNumber { input } => write!(f, "Invalid css number `{}`", input),
            CssError::UnknownUnit { unit } => write!(f, "Unknown css unit `{}`", unit),
            CssError::MixedUnits { expected, found } => write!(
                f,
                "Mixed css units, expected `{}` found `{}`",
                expected.suffix(),
                found.suffix()
            ),
        }
    }
}

impl Error for CssError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn length_display() {
        assert_eq!(CssLength::px(3.0).to_string(), "3px");
        assert_eq!(CssLength::new(-1.5, CssUnit::Em).to_string(), "-1.5em");
        assert_eq!(CssLength::new(2.0, CssUnit::Rem).to_string(), "2rem");
        assert_eq!(CssLength::new(50.0, CssUnit::Percent).to_string(), "50%");
        assert_eq!(CssLength::new(0.0, CssUnit::None).to_string(), "0");
    }

    #[test]
    fn length_parse() {
        assert_eq!("3px".parse::<CssLength>(), Ok(CssLength::px(3.0)));
        assert_eq!(" -1.5em ".parse::<CssLength>(), Ok(CssLength::new(-1.5, CssUnit::Em)));
        assert_eq!("2rem".parse::<CssLength>(), Ok(CssLength::new(2.0, CssUnit::Rem)));
        assert_eq!("50%".parse::<CssLength>(), Ok(CssLength::new(50.0, CssUnit::Percent)));
        assert_eq!("0".parse::<CssLength>(), Ok(CssLength::new(0.0, CssUnit::None)));
        assert_eq!("1e2px".parse::<CssLength>(), Ok(CssLength::px(100.0)));
    }

    #[test]
    fn length_parse_errors() {
        let _ = env_logger::try_init();

        assert_eq!("".parse::<CssLength>(), Err(CssError::MissingValue));
        assert_eq!("px".parse::<CssLength>(), Err(CssError::MissingValue));
        assert_eq!(
            "3pt".parse::<CssLength>(),
            Err(CssError::UnknownUnit { unit: "pt".into() })
        );
        assert_eq!(
            "3.1.2px".parse::<CssLength>(),
            Err(CssError::InvalidNumber {
                input: "3.1.2".into()
            })
        );
        assert_eq!(
            "- 3px".parse::<CssLength>(),
            Err(CssError::InvalidNumber { input: "- 3".into() })
        );
    }

    #[test]
    fn style_display() {
        let style = CssFormat::default().format(Rectangle::new((1.0, 2.0), (3.0, 4.0)));
        assert_eq!(
            style.to_string(),
            "left: 1px; top: 2px; width: 3px; height: 4px;"
        );
    }

    #[test]
    fn format_settings() {
        let rect = Rectangle::new((0.125, 2.0), (1.0 / 3.0, -4.0));

        let style = CssFormat::default().precision(1).format(rect);
        assert_eq!(style.top, CssLength::px(2.0));
        assert_eq!(style.width, CssLength::px(0.3));
        assert_eq!(style.height, CssLength::px(-4.0));

        let style = CssFormat::default()
            .unit(CssUnit::Percent)
            .precision(0)
            .format(rect);
        assert_eq!(style.to_string(), "left: 0%; top: 2%; width: 0%; height: -4%;");

        let style = CssFormat::default().unit(CssUnit::Rem).format(rect);
        assert_eq!(style.left, CssLength::new(0.125, CssUnit::Rem));
    }

    #[test]
    fn format_precision_keeps_huge_values() {
        let rect = Rectangle::new((1e300, -1e300), (1.0, 1.0));
        let style = CssFormat::default().precision(10).format(rect);

        assert_eq!(style.left, CssLength::px(1e300));
        assert_eq!(style.top, CssLength::px(-1e300));

        let parsed = CssStyle::parse(
            &style.left.to_string(),
            &style.top.to_string(),
            &style.width.to_string(),
            &style.height.to_string(),
        );
        assert_eq!(parsed.and_then(|s| Rectangle::from_css(&s)), Ok(rect));
    }

    #[test]
    fn format_no_negative_zero() {
        let rect = Rectangle::new((-0.001, -0.0), (1.0, 1.0));

        let style = CssFormat::default().precision(2).format(rect);
        assert_eq!(style.left.to_string(), "0px");
        assert!(style.left.value.is_sign_positive());
        assert_eq!(style.top.to_string(), "0px");

        let style = CssFormat::default().format(rect);
        assert_eq!(style.left.to_string(), "-0.001px");
        assert_eq!(style.top.to_string(), "0px");
    }

    #[test]
    fn length_parse_non_finite() {
        let _ = env_logger::try_init();

        assert_eq!(
            "infpx".parse::<CssLength>(),
            Err(CssError::InvalidNumber {
                input: "inf".into()
            })
        );
        assert_eq!(
            "NaNem".parse::<CssLength>(),
            Err(CssError::InvalidNumber {
                input: "NaN".into()
            })
        );
        assert_eq!(
            "inf".parse::<CssLength>(),
            Err(CssError::InvalidNumber {
                input: "inf".into()
            })
        );
        assert_eq!(
            "1e999rem".parse::<CssLength>(),
            Err(CssError::InvalidNumber {
                input: "1e999".into()
            })
        );
        assert_eq!("%".parse::<CssLength>(), Err(CssError::MissingValue));
    }

    #[test]
    fn style_parse_round_trip() {
        let rect = Rectangle::new((1.0, 2.5), (3.0, 4.0));
        let style = rect.css_style();
        let parsed = CssStyle::parse(
            &style.left.to_string(),
            &style.top.to_string(),
            &style.width.to_string(),
            &style.height.to_string(),
        );
        assert_eq!(parsed, Ok(style));
        assert_eq!(parsed.and_then(|s| Rectangle::from_css(&s)), Ok(rect));
    }

    #[test]
    fn style_parse_error_propagates() {
        assert_eq!(
            CssStyle::parse("1px", "2px", "3px", "4vw"),
            Err(CssError::UnknownUnit { unit: "vw".into() })
        );
    }

    #[test]
    fn error_display() {
        assert_eq!(
            CssError::MixedUnits {
                expected: CssUnit::Px,
                found: CssUnit::Em,
            }
            .to_string(),
            "Mixed css units, expected `px` found `em`"
        );
        assert_eq!(
            CssError::UnknownUnit { unit: "pt".into() }.to_string(),
            "Unknown css unit `pt`"
        );
    }
}
