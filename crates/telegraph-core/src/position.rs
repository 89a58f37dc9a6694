//! The ten engine orders printed on the telegraph dial.
//!
//! Positions are ordered astern to ahead, which is also ascending angle
//! order. The resolver scans [`TelegraphPosition::ALL`] front to back, so
//! this order decides exact ties.

use crate::error::ParsePositionError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TelegraphPosition {
    FullAstern,
    HalfAstern,
    SlowAstern,
    DeadSlowAstern,
    #[default]
    Stop,
    DeadSlowAhead,
    SlowAhead,
    HalfAhead,
    FullAhead,
    FinishedWithEngines,
}

impl TelegraphPosition {
    pub const ALL: [TelegraphPosition; 10] = [
        TelegraphPosition::FullAstern,
        TelegraphPosition::HalfAstern,
        TelegraphPosition::SlowAstern,
        TelegraphPosition::DeadSlowAstern,
        TelegraphPosition::Stop,
        TelegraphPosition::DeadSlowAhead,
        TelegraphPosition::SlowAhead,
        TelegraphPosition::HalfAhead,
        TelegraphPosition::FullAhead,
        TelegraphPosition::FinishedWithEngines,
    ];

    /// Canonical snap angle in degrees, clockwise from north.
    pub const fn angle(self) -> f32 {
        match self {
            TelegraphPosition::FullAstern => -135.0,
            TelegraphPosition::HalfAstern => -100.0,
            TelegraphPosition::SlowAstern => -65.0,
            TelegraphPosition::DeadSlowAstern => -30.0,
            TelegraphPosition::Stop => 0.0,
            TelegraphPosition::DeadSlowAhead => 30.0,
            TelegraphPosition::SlowAhead => 65.0,
            TelegraphPosition::HalfAhead => 100.0,
            TelegraphPosition::FullAhead => 135.0,
            TelegraphPosition::FinishedWithEngines => 180.0,
        }
    }

    /// Text shown on the dial face and in the readout.
    pub const fn label(self) -> &'static str {
        match self {
            TelegraphPosition::FullAstern => "FULL ASTERN",
            TelegraphPosition::HalfAstern => "HALF ASTERN",
            TelegraphPosition::SlowAstern => "SLOW ASTERN",
            TelegraphPosition::DeadSlowAstern => "DEAD SLOW ASTERN",
            TelegraphPosition::Stop => "STOP",
            TelegraphPosition::DeadSlowAhead => "DEAD SLOW AHEAD",
            TelegraphPosition::SlowAhead => "SLOW AHEAD",
            TelegraphPosition::HalfAhead => "HALF AHEAD",
            TelegraphPosition::FullAhead => "FULL AHEAD",
            TelegraphPosition::FinishedWithEngines => "FINISHED WITH ENGINES",
        }
    }

    /// Stable kebab-case identifier, e.g. `dead-slow-ahead`.
    pub const fn key(self) -> &'static str {
        match self {
            TelegraphPosition::FullAstern => "full-astern",
            TelegraphPosition::HalfAstern => "half-astern",
            TelegraphPosition::SlowAstern => "slow-astern",
            TelegraphPosition::DeadSlowAstern => "dead-slow-astern",
            TelegraphPosition::Stop => "stop",
            TelegraphPosition::DeadSlowAhead => "dead-slow-ahead",
            TelegraphPosition::SlowAhead => "slow-ahead",
            TelegraphPosition::HalfAhead => "half-ahead",
            TelegraphPosition::FullAhead => "full-ahead",
            TelegraphPosition::FinishedWithEngines => "finished-with-engines",
        }
    }
}

impl fmt::Display for TelegraphPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TelegraphPosition {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TelegraphPosition::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| ParsePositionError(s.to_string()))
    }
}
