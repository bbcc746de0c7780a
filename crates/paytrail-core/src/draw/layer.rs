//! Layer-based rendering system for SVG output.
//!
//! Drawables tag each SVG node with a [`RenderLayer`]; [`LayeredOutput`]
//! collects the nodes and emits one `<g data-layer="…">` group per layer in
//! z-order.
//!
//! # Example
//!
//! ```
//! # use paytrail_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Circle, Path};
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(RenderLayer::Point, Box::new(Circle::new()));
//! output.add_to_layer(RenderLayer::Path, Box::new(Path::new()));
//!
//! // The path group is emitted before the point group.
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use log::trace;
use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background - renders first
    Background,
    /// The timeline path
    Path,
    /// Point markers
    Point,
    /// Titles, axis label and point captions
    Caption,
    /// The active tooltip
    Tooltip,
    /// Callout connector, arrowheads and flank arrows - renders last
    Arrow,
}

impl RenderLayer {
    /// Returns the name used for the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Path => "path",
            Self::Point => "point",
            Self::Caption => "caption",
            Self::Tooltip => "tooltip",
            Self::Arrow => "arrow",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends all nodes from another output.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of nodes collected across all layers.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g>` element carrying a `data-layer`
    /// attribute. The sort is stable, so nodes keep their insertion order
    /// inside a layer.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());
        let mut current_count = 0usize;

        for (layer, node) in self.items {
            if layer != current_layer {
                trace!(layer = current_layer.name(), nodes = current_count; "Closing layer group");
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
                current_count = 0;
            }

            current_group = current_group.add(node);
            current_count += 1;
        }

        trace!(layer = current_layer.name(), nodes = current_count; "Closing layer group");
        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
