//! langscope: statistics and projection engine for the programming-language
//! ecosystem dataset.
//!
//! Numeric work (descriptive statistics, Pearson correlation, regression,
//! domain fitting) lives in [`core`]. Chart builders in [`api`] turn records
//! into declarative [`render::ChartScene`] draw lists that any
//! [`render::Renderer`] can paint.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod insights;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, RenderStyle};
pub use error::{VizError, VizResult};
