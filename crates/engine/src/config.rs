use serde::{Deserialize, Serialize};

/// Combo bonus step: magnitudes up to `up_to` (inclusive) earn
/// `multiplier * magnitude`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboTier {
    pub up_to: u32,
    pub multiplier: u32,
}

impl ComboTier {
    pub const fn new(up_to: u32, multiplier: u32) -> Self {
        Self { up_to, multiplier }
    }
}

/// Rules for the player-visible score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Flat bonus when the previous move also cleared.
    pub streak_bonus: u32,
    /// Checked in order; the last tier should cover every magnitude.
    pub combo_tiers: [ComboTier; 4],
}

impl ScoreConfig {
    pub fn standard() -> Self {
        Self {
            streak_bonus: 9,
            combo_tiers: [
                ComboTier::new(2, 18),
                ComboTier::new(4, 36),
                // unverified against real games; override with with_tier_multiplier
                ComboTier::new(7, 54),
                ComboTier::new(u32::MAX, 72),
            ],
        }
    }

    /// Replace the multiplier of one tier, counted from 0.
    ///
    /// Panics if `tier` is not below the number of tiers.
    pub fn with_tier_multiplier(mut self, tier: usize, multiplier: u32) -> Self {
        assert!(
            tier < self.combo_tiers.len(),
            "combo tier {tier} out of range"
        );
        self.combo_tiers[tier].multiplier = multiplier;
        self
    }

    pub fn combo_bonus(&self, magnitude: u32) -> u32 {
        if magnitude == 0 {
            return 0;
        }
        self.combo_tiers
            .iter()
            .find(|tier| magnitude <= tier.up_to)
            .map_or(0, |tier| tier.multiplier * magnitude)
    }
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self::standard()
    }
}
