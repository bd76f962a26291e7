use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::VizResult;

use super::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame,
    TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Radar,
    Scatter,
    Heatmap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub rects: Vec<RectPrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            polygons: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.rects.len()
            + self.polygons.len()
            + self.lines.len()
            + self.circles.len()
            + self.texts.len()
    }
}

/// Declarative, layered draw-instruction list produced by a chart builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScene {
    pub chart: ChartKind,
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl ChartScene {
    #[must_use]
    pub fn new(chart: ChartKind, viewport: Viewport) -> Self {
        Self {
            chart,
            viewport,
            layers: CanvasLayerKind::CANONICAL
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> &mut LayerPrimitives {
        let position = match self.layers.iter().position(|layer| layer.kind == kind) {
            Some(position) => position,
            None => {
                self.layers.push(LayerPrimitives::empty(kind));
                self.layers.len() - 1
            }
        };
        &mut self.layers[position]
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_circle(&mut self, kind: CanvasLayerKind, circle: CirclePrimitive) {
        self.layer_mut(kind).circles.push(circle);
    }

    pub fn push_polygon(&mut self, kind: CanvasLayerKind, polygon: PolygonPrimitive) {
        self.layer_mut(kind).polygons.push(polygon);
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    /// Number of primitives in layers that carry record-derived shapes.
    #[must_use]
    pub fn data_primitive_count(&self) -> usize {
        self.layers
            .iter()
            .filter(|layer| layer.kind.is_data_layer())
            .map(LayerPrimitives::primitive_count)
            .sum()
    }

    #[must_use]
    pub fn chrome_primitive_count(&self) -> usize {
        self.layers
            .iter()
            .filter(|layer| !layer.kind.is_data_layer())
            .map(LayerPrimitives::primitive_count)
            .sum()
    }

    /// Collapses layers into one frame grouped by primitive type.
    ///
    /// Layer order survives only within each primitive type. Backends that
    /// must keep layer order on screen paint the layers one by one.
    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            frame.rects.extend(layer.rects.iter().copied());
            frame.polygons.extend(layer.polygons.iter().cloned());
            frame.lines.extend(layer.lines.iter().copied());
            frame.circles.extend(layer.circles.iter().copied());
            frame.texts.extend(layer.texts.iter().cloned());
        }
        frame
    }

    pub fn validate(&self) -> VizResult<()> {
        self.flatten().validate()
    }
}
