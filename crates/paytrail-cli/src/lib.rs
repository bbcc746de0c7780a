//! CLI logic for the Paytrail timeline renderer.
//!
//! This module contains the core CLI logic: load configuration and schedule,
//! replay taps, lay out the chart and write the SVG.

pub mod dataset;
pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::{info, warn};

use paytrail::{
    PaytrailError, TimelineBuilder, identifier::Id, semantic, tooltip::TooltipController,
};

/// Run the Paytrail CLI application
///
/// Renders the schedule named by `args.input`, or the built-in sample
/// schedule when no input is given, and writes the SVG to `args.output`.
///
/// # Errors
///
/// Returns `PaytrailError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Schedule parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), PaytrailError> {
    info!(
        input_path:? = args.input,
        output_path = args.output;
        "Rendering timeline"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = config::apply_overrides(app_config, args)?;

    let points = match &args.input {
        Some(path) => dataset::load_schedule(path)?,
        None => {
            info!("No input schedule given, rendering the sample schedule");
            semantic::sample_schedule()
        }
    };

    let builder = TimelineBuilder::new(app_config);

    let mut tooltip = TooltipController::new();
    for tap in &args.taps {
        tooltip.tap(Id::new(tap));
    }

    let scene = builder.layout(&points, &tooltip);
    let unmatched = tooltip
        .active()
        .filter(|id| scene.placement().get(*id).is_none());
    if let Some(id) = unmatched {
        warn!(id:% = id; "Tapped id matches no point");
    }

    builder.write_svg(&scene, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
