use cairo::{Context, Format, ImageSurface, LinearPattern};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{VizError, VizResult};
use crate::render::{
    ChartScene, Color, FillStyle, RectPrimitive, RenderFrame, Renderer, TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub polygons_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can paint into an external Cairo context (for example a
/// host toolkit draw callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame)
    -> VizResult<()>;

    /// Paints `scene` one layer at a time in canonical layer order.
    fn render_scene_on_cairo_context(
        &mut self,
        context: &Context,
        scene: &ChartScene,
    ) -> VizResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Supports offscreen image-surface rendering through `Renderer::render` and
/// in-place rendering on an external context through `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> VizResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(VizError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(0.0, 0.0, 0.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> VizResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn clear(&self, context: &Context) -> VizResult<()> {
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> VizResult<()> {
        frame.validate()?;
        self.clear(context)?;
        self.last_stats = paint_frame(context, frame)?;
        Ok(())
    }

    /// Paints layer by layer so a ring in `Grid` never covers a `Series` polygon.
    fn render_scene_with_context(
        &mut self,
        context: &Context,
        scene: &ChartScene,
    ) -> VizResult<()> {
        scene.validate()?;
        self.clear(context)?;
        let mut total = CairoRenderStats::default();
        for layer in &scene.layers {
            let frame = RenderFrame {
                viewport: scene.viewport,
                rects: layer.rects.clone(),
                polygons: layer.polygons.clone(),
                lines: layer.lines.clone(),
                circles: layer.circles.clone(),
                texts: layer.texts.clone(),
            };
            let stats = paint_frame(context, &frame)?;
            total.rects_drawn += stats.rects_drawn;
            total.polygons_drawn += stats.polygons_drawn;
            total.lines_drawn += stats.lines_drawn;
            total.circles_drawn += stats.circles_drawn;
            total.texts_drawn += stats.texts_drawn;
        }
        self.last_stats = total;
        Ok(())
    }
}

fn paint_frame(context: &Context, frame: &RenderFrame) -> VizResult<CairoRenderStats> {
    let mut stats = CairoRenderStats::default();

    for rect in &frame.rects {
        append_rect_path(context, *rect);
        match rect.fill {
            FillStyle::Solid(color) => apply_color(context, color),
            FillStyle::LinearGradient { from, to } => {
                let pattern = LinearPattern::new(
                    rect.x,
                    rect.y,
                    rect.x + rect.width,
                    rect.y + rect.height,
                );
                pattern.add_color_stop_rgba(0.0, from.red, from.green, from.blue, from.alpha);
                pattern.add_color_stop_rgba(1.0, to.red, to.green, to.blue, to.alpha);
                context
                    .set_source(&pattern)
                    .map_err(|err| map_backend_error("failed to set gradient", err))?;
            }
        }
        if rect.border_width > 0.0 {
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            apply_color(context, rect.border_color);
            context.set_line_width(rect.border_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
        } else {
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        }
        stats.rects_drawn += 1;
    }

    for polygon in &frame.polygons {
        context.new_path();
        for (index, (x, y)) in polygon.points.iter().enumerate() {
            if index == 0 {
                context.move_to(*x, *y);
            } else {
                context.line_to(*x, *y);
            }
        }
        context.close_path();
        if let Some(fill) = polygon.fill_color {
            apply_color(context, fill);
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill polygon", err))?;
        }
        if let Some(stroke) = polygon.stroke_color {
            apply_color(context, stroke);
            context.set_line_width(polygon.stroke_width);
            context
                .stroke_preserve()
                .map_err(|err| map_backend_error("failed to stroke polygon", err))?;
        }
        context.new_path();
        stats.polygons_drawn += 1;
    }

    for line in &frame.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for circle in &frame.circles {
        context.new_path();
        context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
        if let Some(fill) = circle.fill_color {
            apply_color(context, fill);
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill circle", err))?;
        }
        if let Some(stroke) = circle.stroke_color {
            apply_color(context, stroke);
            context.set_line_width(circle.stroke_width);
            context
                .stroke_preserve()
                .map_err(|err| map_backend_error("failed to stroke circle", err))?;
        }
        context.new_path();
        stats.circles_drawn += 1;
    }

    for text in &frame.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description =
            FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(context, text.color);
        context.move_to(x, text.y - f64::from(text_height) / 2.0);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(stats)
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> VizResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }

    fn render_scene(&mut self, scene: &ChartScene) -> VizResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_scene_with_context(&context, scene)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> VizResult<()> {
        self.render_with_context(context, frame)
    }

    fn render_scene_on_cairo_context(
        &mut self,
        context: &Context,
        scene: &ChartScene,
    ) -> VizResult<()> {
        self.render_scene_with_context(context, scene)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> VizError {
    VizError::InvalidData(format!("{prefix}: {err}"))
}
