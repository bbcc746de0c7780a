//! Paytrail Core Types and Definitions
//!
//! This crate provides the renderer-facing building blocks shared by the
//! Paytrail timeline chart engine. It includes:
//!
//! - **Identifiers**: String-interned point identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Layered SVG drawables for paths, shapes and text ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
