//! Paytrail - timeline charts for premium-payment schedules.
//!
//! Layout and SVG rendering for a horizontal chart of policy years: labeled
//! points on a shared baseline, joined by a path that is straight on regular
//! segments and zigzags on irregular ones, with an arrow callout on the final
//! payment and a tap-toggled tooltip.

pub mod config;
pub mod i18n;
pub mod layout;
pub mod scene;
pub mod semantic;
pub mod tooltip;

mod error;
mod export;

pub use paytrail_core::{color, draw, geometry, identifier};

pub use error::PaytrailError;

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;
use layout::{AnnotationPlanner, ChartGeometry, PathBuilder};
use scene::Scene;
use semantic::DataPoint;
use tooltip::TooltipController;

/// Builder for laying out and rendering Paytrail charts.
///
/// # Examples
///
/// ```rust
/// use paytrail::{TimelineBuilder, config::AppConfig, semantic, tooltip::TooltipController};
///
/// let points = semantic::sample_schedule();
/// let builder = TimelineBuilder::new(AppConfig::default().with_language("en"));
///
/// let scene = builder.layout(&points, &TooltipController::new());
/// assert_eq!(scene.points().len(), 10);
///
/// let svg = builder.render_svg(&scene).expect("Failed to render");
/// assert!(svg.contains("Premium Payment Finished"));
/// ```
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    config: AppConfig,
}

impl TimelineBuilder {
    /// Create a new timeline builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Lay out `points` into a renderable scene.
    ///
    /// Layout is infallible: an empty slice yields a scene with only the
    /// static decorations, and unsupported configuration values are clamped.
    /// The tooltip of `tooltip`'s active point is included when that point
    /// has tooltip content.
    pub fn layout<'a>(&self, points: &'a [DataPoint], tooltip: &TooltipController) -> Scene<'a> {
        info!(points_count = points.len(); "Laying out timeline");
        let chart = self.config.chart();

        let geometry = ChartGeometry::resolve(chart, points.len());
        let placement = layout::place_points(points, &geometry);
        let path = PathBuilder::new(chart.segments(), geometry.amplitude()).build(&placement);
        trace!(path:% = path; "Path data");

        let language = self.config.language();
        debug!(language:% = language; "Planning annotations");
        let annotations = AnnotationPlanner::new(&geometry, language).plan(&placement);

        let tooltip = scene::plan_tooltip(&placement, tooltip);
        debug!(tooltip_visible = tooltip.is_some(); "Layout complete");

        Scene::new(geometry, placement, path, annotations, tooltip)
    }

    /// Render a laid-out scene to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `PaytrailError::Export` if a configured style color is invalid.
    pub fn render_svg(&self, scene: &Scene<'_>) -> Result<String, PaytrailError> {
        let exporter = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .build()?;

        let svg = exporter.export_scene(scene)?;
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Render a laid-out scene and write the SVG to `path`.
    ///
    /// # Errors
    ///
    /// Returns `PaytrailError::Export` for invalid style colors or when the
    /// file cannot be written.
    pub fn write_svg(&self, scene: &Scene<'_>, path: impl AsRef<Path>) -> Result<(), PaytrailError> {
        let exporter = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .build()?;

        exporter.export_to_file(scene, path.as_ref())?;
        Ok(())
    }
}
