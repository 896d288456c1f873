use crate::constants::{DEFAULT_SPEED_TIER, SPEED_LABELS, SPEED_PRESETS_MS};
use std::time::Duration;

/// One of the five auto-advance presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeedTier(usize);

impl SpeedTier {
    pub const SLOWEST: SpeedTier = SpeedTier(0);
    pub const FASTEST: SpeedTier = SpeedTier(SPEED_PRESETS_MS.len() - 1);

    /// Tier by index, `None` outside the preset table
    pub fn new(index: usize) -> Option<SpeedTier> {
        (index < SPEED_PRESETS_MS.len()).then_some(SpeedTier(index))
    }

    /// Tier whose label matches, e.g. `"2x"` or `"0.5"`
    pub fn from_label(label: &str) -> Option<SpeedTier> {
        let label = label.trim().trim_end_matches(['x', 'X', '×']);
        SPEED_LABELS
            .iter()
            .position(|l| l.trim_end_matches('x') == label)
            .map(SpeedTier)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn interval(self) -> Duration {
        Duration::from_millis(SPEED_PRESETS_MS[self.0])
    }

    pub fn label(self) -> &'static str {
        SPEED_LABELS[self.0]
    }

    pub fn faster(self) -> SpeedTier {
        SpeedTier((self.0 + 1).min(Self::FASTEST.0))
    }

    pub fn slower(self) -> SpeedTier {
        SpeedTier(self.0.saturating_sub(1))
    }
}

impl Default for SpeedTier {
    fn default() -> Self {
        SpeedTier(DEFAULT_SPEED_TIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_x() {
        let tier = SpeedTier::default();
        assert_eq!(tier.label(), "1x");
        assert_eq!(tier.interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(SpeedTier::new(5), None);
        assert_eq!(SpeedTier::FASTEST.faster(), SpeedTier::FASTEST);
        assert_eq!(SpeedTier::SLOWEST.slower(), SpeedTier::SLOWEST);
        assert_eq!(SpeedTier::SLOWEST.interval(), Duration::from_millis(1000));
        assert_eq!(SpeedTier::FASTEST.interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_from_label() {
        assert_eq!(SpeedTier::from_label("2x"), SpeedTier::new(3));
        assert_eq!(SpeedTier::from_label("0.25"), Some(SpeedTier::SLOWEST));
        assert_eq!(SpeedTier::from_label("3x"), None);
    }
}
