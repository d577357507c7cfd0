use serde::{Deserialize, Serialize};

/// Every view mutation a key binding can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewCommand {
    ShiftLeft,
    ShiftRight,
    ShiftUp,
    ShiftDown,
    ZoomIn,
    ZoomOut,
    /// Restores the bounds captured at construction.
    ResetView,
    /// Restores the grid width captured at construction.
    ResetWidth,
}

impl ViewCommand {
    pub const ALL: [Self; 8] = [
        Self::ShiftLeft,
        Self::ShiftRight,
        Self::ShiftUp,
        Self::ShiftDown,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::ResetView,
        Self::ResetWidth,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ShiftLeft => "shift_left",
            Self::ShiftRight => "shift_right",
            Self::ShiftUp => "shift_up",
            Self::ShiftDown => "shift_down",
            Self::ZoomIn => "zoom_in",
            Self::ZoomOut => "zoom_out",
            Self::ResetView => "reset_view",
            Self::ResetWidth => "reset_width",
        }
    }
}
