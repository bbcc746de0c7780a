//! Color handling for Paytrail charts
//!
//! This module provides the [`Color`] type which wraps `DynamicColor` from the
//! color crate so chart styles can be written as CSS color strings.

use std::str::FromStr;

use color::DynamicColor;

/// A parsed CSS color used for strokes, fills and text.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#2c8592"`,
    /// `"rgb(44, 133, 146)"` or `"teal"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use paytrail_core::color::Color;
    ///
    /// let stroke = Color::new("#2c8592").unwrap();
    /// let fill = Color::new("yellowgreen").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns a copy of this color with the given alpha (0.0 to 1.0).
    ///
    /// # Examples
    ///
    /// ```
    /// use paytrail_core::color::Color;
    ///
    /// let white = Color::new("white").unwrap();
    /// assert_eq!(white.with_alpha(0.98).alpha(), 0.98);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}
