use crate::constants::{STRATEGY_CAPTURE, STRATEGY_GLOBAL};
use std::str::FromStr;

/// How host events reach the drag controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputStrategy {
    /// Mouse/touch down on the dial, move/up tracked on the document.
    #[default]
    Global,
    /// Pointer events on the knob with `setPointerCapture`.
    Capture,
}

impl InputStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            InputStrategy::Global => STRATEGY_GLOBAL,
            InputStrategy::Capture => STRATEGY_CAPTURE,
        }
    }
}

impl FromStr for InputStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STRATEGY_GLOBAL => Ok(InputStrategy::Global),
            STRATEGY_CAPTURE => Ok(InputStrategy::Capture),
            other => Err(anyhow::anyhow!(
                "unknown input strategy `{}` (expected `{}` or `{}`)",
                other,
                STRATEGY_GLOBAL,
                STRATEGY_CAPTURE
            )),
        }
    }
}
