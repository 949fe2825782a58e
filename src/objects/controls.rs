use serde::{Deserialize, Serialize};

/// Level-triggered intent flags, written by the input layer before each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Carried for game logic; the engine itself never reads it.
    pub action: bool,
}

impl Controls {
    pub fn none() -> Self {
        Self::default()
    }
}
