mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;
mod scene;

pub use frame::RenderFrame;
pub use layer_stack::CanvasLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, FillStyle, LinePrimitive, PolygonPrimitive, RectPrimitive,
    TextHAlign, TextPrimitive,
};
pub use scene::{ChartKind, ChartScene, LayerPrimitives};

use crate::error::VizResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from statistics and projection.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> VizResult<()>;

    fn render_scene(&mut self, scene: &ChartScene) -> VizResult<()> {
        self.render(&scene.flatten())
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
