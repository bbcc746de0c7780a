//! SVG rendering of a [`Scene`].
//!
//! The scene is translated into `paytrail_core::draw` primitives, collected in
//! a [`LayeredOutput`] and emitted as one `<g data-layer>` group per layer:
//! background, path, points, captions, tooltip, arrows.

use log::{debug, info};
use svg::Document;

use paytrail_core::{
    color::Color,
    draw::{
        Circle, Drawable, FontWeight, LayeredOutput, Polygon, Polyline, PositionedDrawable, Rectangle,
        RenderLayer, StrokeDefinition, Text, TextDefinition,
    },
    geometry::{Point, Size},
};

use crate::{
    config::StyleConfig,
    export,
    layout::{Annotation, AnnotationRole, FlankArrow, TerminalCallout, TextAnnotation},
    scene::{Scene, Tooltip},
};

/// Outline width of point markers.
const POINT_OUTLINE_WIDTH: f32 = 2.0;
const TOOLTIP_OUTLINE_WIDTH: f32 = 1.0;
const TOOLTIP_OPACITY: f32 = 0.98;

/// Colors resolved from a [`StyleConfig`].
#[derive(Debug, Clone)]
struct Palette {
    stroke: Color,
    point_fill: Color,
    text: Color,
    muted_text: Color,
    arrowhead: Color,
    tooltip_fill: Color,
    background: Color,
}

impl Palette {
    fn from_style(style: &StyleConfig) -> Result<Self, export::Error> {
        Ok(Self {
            stroke: style.stroke_color().map_err(export::Error::Render)?,
            point_fill: style.point_fill_color().map_err(export::Error::Render)?,
            text: style.text_color().map_err(export::Error::Render)?,
            muted_text: style.muted_text_color().map_err(export::Error::Render)?,
            arrowhead: style.arrowhead_color().map_err(export::Error::Render)?,
            tooltip_fill: style.tooltip_fill_color().map_err(export::Error::Render)?,
            background: style.background_color().map_err(export::Error::Render)?,
        })
    }
}

/// Builder for the [`Svg`] exporter.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Resolves the style colors.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if a configured color is invalid.
    pub fn build(self) -> Result<Svg, export::Error> {
        let default_style = StyleConfig::default();
        let palette = Palette::from_style(self.style.unwrap_or(&default_style))?;
        debug!(palette:?; "SVG palette resolved");
        Ok(Svg { palette })
    }
}

/// Renders scenes to SVG documents.
#[derive(Debug)]
pub struct Svg {
    palette: Palette,
}

impl Svg {
    /// Renders the scene into an SVG document sized to the canvas.
    pub fn render_scene(&self, scene: &Scene<'_>) -> Document {
        let geometry = scene.geometry();
        let (width, height) = (geometry.width(), geometry.height());

        let mut output = LayeredOutput::new();
        output.merge(
            Rectangle::new(Size::new(width, height))
                .with_fill(self.palette.background)
                .render_to_layers(Point::default()),
        );
        output.merge(self.render_path(scene));
        output.merge(self.render_points(scene));

        for annotation in scene.annotations() {
            output.merge(match annotation {
                Annotation::Text(text) => self.render_text(text, RenderLayer::Caption),
                Annotation::Callout(callout) => self.render_callout(callout, scene),
                Annotation::FlankArrow(arrow) => self.render_flank_arrow(arrow, scene),
            });
        }

        if let Some(tooltip) = scene.tooltip() {
            output.merge(self.render_tooltip(tooltip, scene));
        }

        debug!(nodes_count = output.len(); "Scene translated to layers");

        output.render().into_iter().fold(
            Document::new()
                .set("width", width)
                .set("height", height)
                .set("viewBox", (0.0, 0.0, width, height)),
            |doc, node| doc.add(node),
        )
    }

    fn render_path(&self, scene: &Scene<'_>) -> LayeredOutput {
        let stroke = StrokeDefinition::rounded(self.palette.stroke, scene.geometry().stroke_width());
        Polyline::new(scene.path().vertices(), stroke).render_to_layers(Point::default())
    }

    fn render_points(&self, scene: &Scene<'_>) -> LayeredOutput {
        let geometry = scene.geometry();
        let mut output = LayeredOutput::new();

        for point in scene.points() {
            let marker = Circle::new(geometry.dot_radius())
                .with_fill(self.palette.point_fill)
                .with_stroke(StrokeDefinition::new(
                    self.palette.stroke,
                    POINT_OUTLINE_WIDTH,
                ));
            let hit_region = Circle::new(geometry.hit_radius());

            for circle in [marker, hit_region] {
                let positioned = PositionedDrawable::new(circle).with_position(point.position());
                output.merge(positioned.render_to_layers());
            }
        }

        output
    }

    fn render_text(&self, text: &TextAnnotation, layer: RenderLayer) -> LayeredOutput {
        let color = match text.role() {
            AnnotationRole::Subtitle => self.palette.muted_text,
            _ => self.palette.text,
        };

        let mut definition = TextDefinition::new();
        definition.set_font_size(text.font_size());
        definition.set_font_weight(text.font_weight());
        definition.set_color(Some(color));

        let mut drawable = Text::new(&definition, text.content()).with_layer(layer);
        if let Some(degrees) = text.rotation() {
            drawable = drawable.with_rotation(degrees);
        }
        drawable.render_to_layers(text.position())
    }

    fn render_callout(&self, callout: &TerminalCallout, scene: &Scene<'_>) -> LayeredOutput {
        let stroke = StrokeDefinition::new(self.palette.stroke, scene.geometry().stroke_width());

        let mut output = Polyline::new(callout.connector().to_vec(), stroke)
            .with_layer(RenderLayer::Arrow)
            .render_to_layers(Point::default());
        output.merge(
            Polygon::new(callout.arrowhead().to_vec(), self.palette.arrowhead)
                .render_to_layers(Point::default()),
        );
        output.merge(self.render_text(callout.value(), RenderLayer::Arrow));
        output.merge(self.render_text(callout.caption(), RenderLayer::Caption));
        output
    }

    fn render_flank_arrow(&self, arrow: &FlankArrow, scene: &Scene<'_>) -> LayeredOutput {
        let stroke = StrokeDefinition::new(self.palette.stroke, scene.geometry().stroke_width());

        let mut output = Polyline::new(arrow.shaft().to_vec(), stroke)
            .with_layer(RenderLayer::Arrow)
            .render_to_layers(Point::default());
        output.merge(
            Polygon::new(arrow.head().to_vec(), self.palette.stroke)
                .render_to_layers(Point::default()),
        );
        output
    }

    fn render_tooltip(&self, tooltip: &Tooltip, scene: &Scene<'_>) -> LayeredOutput {
        let bounds = tooltip.bounds();

        let mut output = Rectangle::new(bounds.to_size())
            .with_corner_radius(tooltip.corner_radius())
            .with_fill(self.palette.tooltip_fill.with_alpha(TOOLTIP_OPACITY))
            .with_stroke(StrokeDefinition::new(
                self.palette.stroke,
                TOOLTIP_OUTLINE_WIDTH,
            ))
            .with_layer(RenderLayer::Tooltip)
            .render_to_layers(bounds.min_point());

        let mut definition = TextDefinition::new();
        definition.set_font_size(scene.geometry().small_font_size());
        definition.set_font_weight(FontWeight::Bold);
        definition.set_color(Some(self.palette.text));

        output.merge(
            Text::new(&definition, tooltip.content())
                .with_layer(RenderLayer::Tooltip)
                .render_to_layers(tooltip.text_position()),
        );
        output
    }
}

impl export::Exporter for Svg {
    fn export_scene(&self, scene: &Scene<'_>) -> Result<String, export::Error> {
        let document = self.render_scene(scene);
        info!(points_count = scene.points().len(); "SVG document rendered");
        Ok(document.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        TimelineBuilder,
        export::Exporter,
        identifier::Id,
        semantic::{DataPoint, sample_schedule},
        tooltip::TooltipController,
    };

    fn export(points: &[DataPoint], tooltip: &TooltipController) -> String {
        let builder = TimelineBuilder::default();
        let scene = builder.layout(points, tooltip);
        SvgBuilder::new()
            .build()
            .unwrap()
            .export_scene(&scene)
            .unwrap()
    }

    #[test]
    fn test_layers_in_z_order() {
        let mut tooltip = TooltipController::new();
        tooltip.tap(Id::new("90"));
        let svg = export(&sample_schedule(), &tooltip);

        let order: Vec<_> = [
            "background",
            "path",
            "point",
            "caption",
            "tooltip",
            "arrow",
        ]
        .iter()
        .map(|layer| {
            svg.find(&format!("data-layer=\"{layer}\""))
                .unwrap_or_else(|| panic!("missing layer {layer}"))
        })
        .collect();
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_document_contents() {
        let svg = export(&sample_schedule(), &TooltipController::new());

        assert!(svg.contains("<svg"));
        assert!(svg.contains("viewBox=\"0 0 980 280\""));
        assert!(svg.contains("150,000"));
        assert!(svg.contains("ชำระเบี้ยครบ"));
        assert!(svg.contains("rotate(-90 15 160)"));
        assert_eq!(svg.matches("<circle").count(), 20);
        assert!(!svg.contains("data-layer=\"tooltip\""));
    }

    #[test]
    fn test_empty_scene_has_decorations_only() {
        let svg = export(&[], &TooltipController::new());

        assert!(!svg.contains("<circle"));
        assert!(!svg.contains("data-layer=\"path\""));
        assert!(svg.contains("data-layer=\"arrow\""));
        assert!(svg.contains("data-layer=\"caption\""));
    }

    #[test]
    fn test_invalid_color_is_render_error() {
        let style = StyleConfig::default().with_point_fill_color("definitely-not-a-color");
        let result = SvgBuilder::new().with_style(&style).build();

        assert!(matches!(result, Err(export::Error::Render(_))));
    }
}
