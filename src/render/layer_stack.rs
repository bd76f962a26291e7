use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Series,
    Overlay,
    Axis,
}

impl CanvasLayerKind {
    /// Paint order, bottom to top.
    pub const CANONICAL: [Self; 5] = [
        Self::Background,
        Self::Grid,
        Self::Series,
        Self::Overlay,
        Self::Axis,
    ];

    /// Layers that carry record-derived shapes. Everything else is chrome that
    /// is drawn even when there is no data.
    #[must_use]
    pub fn is_data_layer(self) -> bool {
        matches!(self, Self::Series | Self::Overlay)
    }
}
