/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Sanity a fresh play session starts with.
    pub starting_sanity: u32,
    /// Encounters opened below this sanity narrate a low-sanity warning.
    pub low_sanity_warning: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Upper bound of the sanity meter.
    pub const MAX_SANITY: u32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_SANITY: u32 = Self::MAX_SANITY;
    pub const DEFAULT_LOW_SANITY_WARNING: u32 = 50;

    pub fn new() -> Self {
        Self {
            starting_sanity: Self::DEFAULT_STARTING_SANITY,
            low_sanity_warning: Self::DEFAULT_LOW_SANITY_WARNING,
        }
    }

    pub fn with_starting_sanity(mut self, starting_sanity: u32) -> Self {
        self.starting_sanity = starting_sanity.min(Self::MAX_SANITY);
        self
    }

    pub fn with_low_sanity_warning(mut self, low_sanity_warning: u32) -> Self {
        self.low_sanity_warning = low_sanity_warning;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
