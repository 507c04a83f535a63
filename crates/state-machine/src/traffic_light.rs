//! Traffic light cycle.
//!
//! Each color is a state whose only operation is [`TrafficLight::advance`]:
//! ```text
//! Red ──► Green ──► Yellow ──► Red ...
//! ```
//! The cycle has no terminal state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LightColor {
    #[default]
    Red,
    Green,
    Yellow,
}

impl LightColor {
    /// Returns the color that follows this one.
    pub fn next(self) -> LightColor {
        match self {
            LightColor::Red => LightColor::Green,
            LightColor::Green => LightColor::Yellow,
            LightColor::Yellow => LightColor::Red,
        }
    }

    /// How long the light stays on this color, in seconds.
    pub fn duration_secs(self) -> u64 {
        match self {
            LightColor::Red => 30,
            LightColor::Green => 25,
            LightColor::Yellow => 5,
        }
    }

    /// What drivers should do while this color is showing.
    pub fn instruction(self) -> &'static str {
        match self {
            LightColor::Red => "stop",
            LightColor::Green => "go",
            LightColor::Yellow => "prepare to stop",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LightColor::Red => "Red",
            LightColor::Green => "Green",
            LightColor::Yellow => "Yellow",
        }
    }
}

impl std::fmt::Display for LightColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The color showing after an advance, with its timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LightPhase {
    pub color: LightColor,
    pub duration_secs: u64,
    pub instruction: &'static str,
}

impl From<LightColor> for LightPhase {
    fn from(color: LightColor) -> Self {
        Self {
            color,
            duration_secs: color.duration_secs(),
            instruction: color.instruction(),
        }
    }
}

/// A traffic light cycling through its three colors.
#[derive(Debug, Clone, Default)]
pub struct TrafficLight {
    color: LightColor,
    transitions: u64,
}

impl TrafficLight {
    /// Creates a light showing red.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(color: LightColor) -> Self {
        Self {
            color,
            transitions: 0,
        }
    }

    /// Returns the phase currently showing.
    pub fn current(&self) -> LightPhase {
        self.color.into()
    }

    /// Moves to the next color and returns the phase now active.
    pub fn advance(&mut self) -> LightPhase {
        let from = self.color;
        self.color = from.next();
        self.transitions += 1;
        tracing::debug!(%from, to = %self.color, "traffic light advanced");
        self.current()
    }

    /// Number of advances since creation.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }
}
