//! Basic vector shapes: point markers, tooltip boxes, arrowheads and paths.

use svg::node::element::{self as svg_element, path::Data};

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

fn format_points(vertices: &[Point], offset: Point) -> String {
    vertices
        .iter()
        .map(|v| {
            let p = v.add_point(offset);
            format!("{},{}", p.x(), p.y())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A circle centered on the render position.
///
/// A circle with neither fill nor stroke is still emitted with a transparent
/// fill, which makes it usable as an invisible tap target.
#[derive(Debug, Clone)]
pub struct Circle {
    radius: f32,
    fill: Option<Color>,
    stroke: Option<StrokeDefinition>,
    layer: RenderLayer,
}

impl Circle {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            fill: None,
            stroke: None,
            layer: RenderLayer::Point,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }
}

impl Drawable for Circle {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut circle = svg_element::Circle::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", self.radius);

        circle = match self.fill {
            Some(fill) => circle
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha()),
            None => circle.set("fill", "transparent"),
        };

        if let Some(stroke) = &self.stroke {
            circle = apply_stroke!(circle, stroke);
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(self.layer, Box::new(circle));
        output
    }
}

/// A rectangle whose top-left corner is the render position.
#[derive(Debug, Clone)]
pub struct Rectangle {
    size: Size,
    corner_radius: f32,
    fill: Option<Color>,
    stroke: Option<StrokeDefinition>,
    layer: RenderLayer,
}

impl Rectangle {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            corner_radius: 0.0,
            fill: None,
            stroke: None,
            layer: RenderLayer::Background,
        }
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }
}

impl Drawable for Rectangle {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut rect = svg_element::Rectangle::new()
            .set("x", position.x())
            .set("y", position.y())
            .set("width", self.size.width())
            .set("height", self.size.height());

        if self.corner_radius > 0.0 {
            rect = rect
                .set("rx", self.corner_radius)
                .set("ry", self.corner_radius);
        }

        rect = match self.fill {
            Some(fill) => rect
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha()),
            None => rect.set("fill", "none"),
        };

        if let Some(stroke) = &self.stroke {
            rect = apply_stroke!(rect, stroke);
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(self.layer, Box::new(rect));
        output
    }
}

/// A filled polygon, used for arrowheads.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point>,
    fill: Color,
    layer: RenderLayer,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>, fill: Color) -> Self {
        Self {
            vertices,
            fill,
            layer: RenderLayer::Arrow,
        }
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

impl Drawable for Polygon {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if self.vertices.len() < 3 {
            return output;
        }

        let polygon = svg_element::Polygon::new()
            .set("points", format_points(&self.vertices, position))
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());

        output.add_to_layer(self.layer, Box::new(polygon));
        output
    }
}

/// An open polyline rendered as an SVG `<path>` with no fill.
///
/// # Examples
///
/// ```
/// use paytrail_core::draw::{Drawable, Polyline, StrokeDefinition};
/// use paytrail_core::geometry::Point;
///
/// let line = Polyline::new(
///     vec![Point::new(40.0, 160.0), Point::new(140.0, 160.0)],
///     StrokeDefinition::default(),
/// );
/// let svg: String = line
///     .render_to_layers(Point::default())
///     .render()
///     .iter()
///     .map(|node| node.to_string())
///     .collect();
/// assert!(svg.contains("M40,160 L140,160"));
/// ```
#[derive(Debug, Clone)]
pub struct Polyline {
    vertices: Vec<Point>,
    stroke: StrokeDefinition,
    layer: RenderLayer,
}

impl Polyline {
    pub fn new(vertices: Vec<Point>, stroke: StrokeDefinition) -> Self {
        Self {
            vertices,
            stroke,
            layer: RenderLayer::Path,
        }
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    /// Builds the SVG path data, translated by `offset`.
    ///
    /// Returns `None` when there are no vertices.
    pub fn path_data(&self, offset: Point) -> Option<Data> {
        let (first, rest) = self.vertices.split_first()?;
        let first = first.add_point(offset);
        let data = rest
            .iter()
            .fold(Data::new().move_to((first.x(), first.y())), |data, v| {
                let p = v.add_point(offset);
                data.line_to((p.x(), p.y()))
            });
        Some(data)
    }
}

impl Drawable for Polyline {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let Some(data) = self.path_data(position) else {
            return output;
        };

        let path = svg_element::Path::new()
            .set("d", data)
            .set("fill", "none");
        let path = apply_stroke!(path, &self.stroke);

        output.add_to_layer(self.layer, Box::new(path));
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
    fn test_circle_without_fill_is_transparent() {
        let svg = render_to_string(Circle::new(16.0).render_to_layers(Point::new(1.0, 2.0)));
        assert!(svg.contains("fill=\"transparent\""));
        assert!(svg.contains("r=\"16\""));
        assert!(svg.contains("data-layer=\"point\""));
    }

    #[test]
    fn test_circle_with_fill_and_stroke() {
        let circle = Circle::new(8.0)
            .with_fill(Color::new("#c9e04a").unwrap())
            .with_stroke(StrokeDefinition::new(Color::new("#2c8592").unwrap(), 2.0));
        let svg = render_to_string(circle.render_to_layers(Point::new(40.0, 160.0)));

        assert!(svg.contains("stroke-width=\"2\""));
        assert!(!svg.contains("transparent"));
    }

    #[test]
    fn test_rectangle_rounded_corners() {
        let rect = Rectangle::new(Size::new(80.0, 30.0))
            .with_corner_radius(6.0)
            .with_fill(Color::new("white").unwrap())
            .with_layer(RenderLayer::Tooltip);
        let svg = render_to_string(rect.render_to_layers(Point::new(10.0, 20.0)));

        assert!(svg.contains("rx=\"6\""));
        assert!(svg.contains("width=\"80\""));
        assert!(svg.contains("data-layer=\"tooltip\""));
    }

    #[test]
    fn test_polygon_requires_three_vertices() {
        let degenerate = Polygon::new(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
            Color::default(),
        );
        assert!(degenerate.render_to_layers(Point::default()).is_empty());

        let triangle = Polygon::new(
            vec![
                Point::new(50.0, 80.0),
                Point::new(65.0, 75.0),
                Point::new(65.0, 85.0),
            ],
            Color::default(),
        );
        let svg = render_to_string(triangle.render_to_layers(Point::default()));
        assert!(svg.contains("points=\"50,80 65,75 65,85\""));
    }

    #[test]
    fn test_polyline_empty_renders_nothing() {
        let line = Polyline::new(Vec::new(), StrokeDefinition::default());
        assert!(line.path_data(Point::default()).is_none());
        assert!(line.render_to_layers(Point::default()).is_empty());
    }

    #[test]
    fn test_polyline_translated_by_position() {
        let line = Polyline::new(
            vec![Point::new(0.0, 0.0), Point::new(10.0, 5.0)],
            StrokeDefinition::default(),
        );
        let svg = render_to_string(line.render_to_layers(Point::new(5.0, 5.0)));
        assert!(svg.contains("M5,5 L15,10"));
    }
}
