use serde::{Deserialize, Serialize};

/// Marker rendered for a single board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellMark {
    Safe,
    Unsafe,
}

impl CellMark {
    pub const fn is_safe(self) -> bool {
        matches!(self, Self::Safe)
    }
}

impl Default for CellMark {
    fn default() -> Self {
        Self::Unsafe
    }
}
