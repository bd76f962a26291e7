use crate::error::VizResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless consumers.
///
/// It still validates frame content so invalid geometry is caught without a
/// graphics context.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_primitive_count: usize,
    pub last_polygon_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> VizResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_primitive_count = frame.primitive_count();
        self.last_polygon_count = frame.polygons.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
