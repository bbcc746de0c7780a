//! Text rendering definitions for chart captions.
//!
//! - [`TextDefinition`] - Reusable text style (size, weight, color)
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//!
//! Text is centered on its x position and sits on its baseline: a caption
//! rendered at `y = 185` sits with its glyph baseline on 185. Multi-line
//! content is split into `<tspan>` rows.
//!
//! # Quick Start
//!
//! ```
//! # use paytrail_core::draw::{Drawable, FontWeight, Text, TextDefinition};
//! # use paytrail_core::geometry::Point;
//! let mut style = TextDefinition::new();
//! style.set_font_size(16.0);
//! style.set_font_weight(FontWeight::Bold);
//!
//! let text = Text::new(&style, "150,000");
//! let output = text.render_to_layers(Point::new(940.0, 52.0));
//! assert!(!output.is_empty());
//! ```

use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::Point,
};

/// Line height as a multiple of the font size for multi-line text.
const LINE_HEIGHT_FACTOR: f32 = 1.2;
const FONT_FAMILY: &str = "sans-serif";

/// Font weight of a caption.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    SemiBold,
    Bold,
}

impl FontWeight {
    /// Returns the numeric CSS weight
    pub fn to_svg_value(self) -> u16 {
        match self {
            Self::Normal => 400,
            Self::SemiBold => 600,
            Self::Bold => 700,
        }
    }
}

/// Defines the visual style for text elements.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font size | `12` |
/// | Weight | [`FontWeight::Normal`] |
/// | Text color | `None` (SVG default, typically black) |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_size: f32,
    font_weight: FontWeight,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.font_weight = weight;
    }

    /// Sets the fill color of the text. `None` leaves the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            font_weight: FontWeight::Normal,
            color: None,
        }
    }
}

/// A renderable text element combining content with styling.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
    rotation: Option<f32>,
    layer: RenderLayer,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
            rotation: None,
            layer: RenderLayer::Caption,
        }
    }

    /// Rotates the text by `degrees` around its own position.
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if self.content.is_empty() {
            return output;
        }

        let definition = self.definition;
        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("font-family", FONT_FAMILY)
            .set("font-size", definition.font_size())
            .set("font-weight", definition.font_weight().to_svg_value());

        if let Some(color) = definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        if let Some(degrees) = self.rotation {
            rendered_text = rendered_text.set(
                "transform",
                format!("rotate({} {} {})", degrees, position.x(), position.y()),
            );
        }

        let line_height = definition.font_size() * LINE_HEIGHT_FACTOR;
        for (idx, line) in self.content.lines().enumerate() {
            let dy = if idx == 0 { 0.0 } else { line_height };
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("dy", dy)
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        output.add_to_layer(self.layer, Box::new(rendered_text));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(output: LayeredOutput) -> String {
        output.render().iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::default();
        assert_eq!(def.font_size(), 12.0);
        assert_eq!(def.font_weight(), FontWeight::Normal);
        assert!(def.color().is_none());
    }

    #[test]
    fn test_font_weight_values() {
        assert_eq!(FontWeight::Normal.to_svg_value(), 400);
        assert_eq!(FontWeight::SemiBold.to_svg_value(), 600);
        assert_eq!(FontWeight::Bold.to_svg_value(), 700);
    }

    #[test]
    fn test_text_renders_content_and_style() {
        let mut def = TextDefinition::new();
        def.set_font_weight(FontWeight::Bold);
        def.set_color(Some(Color::new("#333333").unwrap()));

        let text = Text::new(&def, "150,000");
        let svg = render_to_string(text.render_to_layers(Point::new(940.0, 52.0)));
        assert!(svg.contains("150,000"));
        assert!(svg.contains("font-weight=\"700\""));
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("font-family=\"sans-serif\""));
        assert!(svg.contains("data-layer=\"caption\""));
    }

    #[test]
    fn test_text_rotation_uses_own_position() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "End of Year").with_rotation(-90.0);
        let svg = render_to_string(text.render_to_layers(Point::new(15.0, 160.0)));
        assert!(svg.contains("rotate(-90 15 160)"));
    }

    #[test]
    fn test_multiline_text_uses_tspans() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "first\nsecond");
        let svg = render_to_string(text.render_to_layers(Point::new(0.0, 0.0)));
        assert_eq!(svg.matches("<tspan").count(), 2);
    }

    #[test]
    fn test_empty_text_renders_nothing() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "");
        assert!(text.render_to_layers(Point::default()).is_empty());
    }
}
