//! Rendering arrays as separated strings.

use std::fmt;

/// Renders a single element.
///
/// Any closure `Fn(&T) -> String` is a formatter.
pub trait Formatter<T: ?Sized> {
    fn format(&self, value: &T) -> String;
}

/// The default formatter: lower-case hexadecimal, no prefix, no padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexFormatter;

impl<T: fmt::LowerHex + ?Sized> Formatter<T> for HexFormatter {
    fn format(&self, value: &T) -> String {
        format!("{value:x}")
    }
}

/// Formats through `fmt::Display`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayFormatter;

impl<T: fmt::Display + ?Sized> Formatter<T> for DisplayFormatter {
    fn format(&self, value: &T) -> String {
        value.to_string()
    }
}

impl<T: ?Sized, F> Formatter<T> for F
where
    F: Fn(&T) -> String,
{
    fn format(&self, value: &T) -> String {
        self(value)
    }
}

/// Joins the hexadecimal rendering of every element with `separator`.
///
/// # Examples
/// ```
/// assert_eq!(array_ops::to_string(&[10u8, 255, 0], " "), "a ff 0");
/// ```
pub fn to_string<T: fmt::LowerHex>(src: &[T], separator: &str) -> String {
    to_string_with(src, separator, &HexFormatter)
}

/// Joins `fmtr.format(element)` for every element with `separator`.
///
/// An empty slice yields an empty string.
pub fn to_string_with<T, F>(src: &[T], separator: &str, fmtr: &F) -> String
where
    F: Formatter<T> + ?Sized,
{
    let mut out = String::new();
    for (i, item) in src.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&fmtr.format(item));
    }
    out
}
