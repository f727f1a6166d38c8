use serde::{Deserialize, Serialize};

/// Named thresholds that can be picked instead of writing out both maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PenaltyPreset {
    None,
    FailOnErrors,
    FailOnWarnings,
}

/// Maximum tolerated errors and warnings. Negative values behave as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Penalty {
    pub max_errors: i64,
    pub max_warnings: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Counts {
    pub errors: u64,
    pub warnings: u64,
}

impl Counts {
    pub const fn new(errors: u64, warnings: u64) -> Self {
        Self { errors, warnings }
    }

    pub fn is_zero(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }
}

impl Penalty {
    pub fn new(max_errors: i64, max_warnings: i64) -> Self {
        Self {
            max_errors,
            max_warnings,
        }
    }

    pub fn from_preset(preset: PenaltyPreset) -> Self {
        match preset {
            PenaltyPreset::None => Self::new(i64::MAX, i64::MAX),
            PenaltyPreset::FailOnErrors => Self::new(0, i64::MAX),
            PenaltyPreset::FailOnWarnings => Self::new(0, 0),
        }
    }

    pub fn clamped_max_errors(&self) -> u64 {
        clamp(self.max_errors)
    }

    pub fn clamped_max_warnings(&self) -> u64 {
        clamp(self.max_warnings)
    }

    /// How far `totals` exceed the clamped maxima, floored at zero per kind.
    pub fn overage(&self, totals: Counts) -> Counts {
        Counts {
            errors: totals.errors.saturating_sub(self.clamped_max_errors()),
            warnings: totals.warnings.saturating_sub(self.clamped_max_warnings()),
        }
    }
}

fn clamp(value: i64) -> u64 {
    value.max(0) as u64
}
