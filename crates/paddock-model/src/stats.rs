use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Lowest allowed value for an individual rating.
pub const RATING_MIN: u8 = 1;
/// Highest allowed value for an individual rating.
pub const RATING_MAX: u8 = 100;

/// The pure recompute function for the composite rating: the arithmetic
/// mean of the five sub-ratings.
pub fn mean_overall(ratings: [u8; 5]) -> f64 {
    let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    f64::from(sum) / 5.0
}

/// A driver's five sub-ratings plus the derived composite.
///
/// The composite `overall` is stored, not computed on demand, and the
/// ratings are private: the only way to change them is to build a new
/// block, which recomputes the mean. The stored value can therefore never
/// go stale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatBlock {
    racecraft: u8,
    overtaking: u8,
    iq: u8,
    focus: u8,
    potential: u8,
    overall: f64,
}

impl StatBlock {
    /// Build a rating block, validating each rating against
    /// [`RATING_MIN`]..=[`RATING_MAX`].
    pub fn new(racecraft: u8, overtaking: u8, iq: u8, focus: u8, potential: u8) -> Result<Self> {
        for (name, value) in [
            ("racecraft", racecraft),
            ("overtaking", overtaking),
            ("iq", iq),
            ("focus", focus),
            ("potential", potential),
        ] {
            if !(RATING_MIN..=RATING_MAX).contains(&value) {
                return Err(ModelError::RatingOutOfRange {
                    rating: name,
                    value,
                });
            }
        }
        Ok(Self {
            racecraft,
            overtaking,
            iq,
            focus,
            potential,
            overall: mean_overall([racecraft, overtaking, iq, focus, potential]),
        })
    }

    pub fn racecraft(&self) -> u8 {
        self.racecraft
    }

    pub fn overtaking(&self) -> u8 {
        self.overtaking
    }

    pub fn iq(&self) -> u8 {
        self.iq
    }

    pub fn focus(&self) -> u8 {
        self.focus
    }

    pub fn potential(&self) -> u8 {
        self.potential
    }

    /// Derived composite rating: mean of the five sub-ratings at the time
    /// of the last edit.
    pub fn overall(&self) -> f64 {
        self.overall
    }

    /// The five sub-ratings in declaration order.
    pub fn ratings(&self) -> [u8; 5] {
        [
            self.racecraft,
            self.overtaking,
            self.iq,
            self.focus,
            self.potential,
        ]
    }
}
