//! Per-word display delays.

use core::time::Duration;

const MICROS_PER_MINUTE: u64 = 60_000_000;

/// Trailing marks that earn the punctuation pause.
pub const PAUSE_MARKS: [char; 5] = ['.', ',', ';', '!', '?'];

/// How the punctuation and long-word extensions combine when a word
/// qualifies for both.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ExtensionMode {
    /// The long-word factor replaces the punctuation factor.
    #[default]
    LongWordOverrides,
    /// Both factors apply, multiplied.
    Compose,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PacingConfig {
    /// Delay percentage for words ending in one of [`PAUSE_MARKS`].
    pub punctuation_pct: u16,
    /// Delay percentage for words longer than `long_word_chars`.
    pub long_word_pct: u16,
    pub long_word_chars: usize,
    pub extension_mode: ExtensionMode,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            punctuation_pct: 150,
            long_word_pct: 120,
            long_word_chars: 10,
            extension_mode: ExtensionMode::LongWordOverrides,
        }
    }
}

impl PacingConfig {
    fn extension_pct(&self, word: &str) -> u64 {
        let punctuation = word
            .chars()
            .next_back()
            .is_some_and(|last| PAUSE_MARKS.contains(&last));
        let long_word = word.chars().count() > self.long_word_chars;

        let punctuation_pct = self.punctuation_pct.max(100) as u64;
        let long_word_pct = self.long_word_pct.max(100) as u64;

        match (punctuation, long_word, self.extension_mode) {
            (true, true, ExtensionMode::Compose) => punctuation_pct * long_word_pct / 100,
            (_, true, _) => long_word_pct,
            (true, false, _) => punctuation_pct,
            (false, false, _) => 100,
        }
    }
}

/// Time budget for one word at `wpm`, before extensions.
pub fn base_delay(wpm: u16) -> Duration {
    Duration::from_micros(MICROS_PER_MINUTE / wpm.max(1) as u64)
}

/// Display duration for `word` at `wpm`. Always non-zero.
pub fn word_delay(word: &str, wpm: u16, config: &PacingConfig) -> Duration {
    let base_us = MICROS_PER_MINUTE / wpm.max(1) as u64;
    Duration::from_micros(base_us * config.extension_pct(word) / 100)
}

/// Rounds a delay up to whole milliseconds for a millisecond scheduler.
pub fn delay_ms_ceil(delay: Duration) -> u64 {
    (delay.as_micros().div_ceil(1_000) as u64).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_WPM: u16 = 60;
    const MAX_WPM: u16 = 1500;

    #[test]
    fn plain_word_gets_base_delay() {
        let config = PacingConfig::default();
        assert_eq!(word_delay("Hello", 300, &config), Duration::from_millis(200));
        assert_eq!(base_delay(300), Duration::from_millis(200));
    }

    #[test]
    fn trailing_punctuation_extends_delay() {
        let config = PacingConfig::default();
        assert_eq!(word_delay("world.", 300, &config), Duration::from_millis(300));
        for word in ["wait,", "so;", "stop!", "why?"] {
            assert_eq!(word_delay(word, 300, &config), Duration::from_millis(300));
        }
        assert_eq!(word_delay("a.b", 300, &config), Duration::from_millis(200));
        assert_eq!(word_delay("quote:", 300, &config), Duration::from_millis(200));
    }

    #[test]
    fn long_word_extends_delay() {
        let config = PacingConfig::default();
        // Ten chars is not long yet.
        assert_eq!(word_delay("technology", 300, &config), Duration::from_millis(200));
        assert_eq!(word_delay("technologies", 300, &config), Duration::from_millis(240));
    }

    #[test]
    fn long_word_factor_overrides_punctuation_by_default() {
        let config = PacingConfig::default();
        assert_eq!(word_delay("technologies.", 300, &config), Duration::from_millis(240));
    }

    #[test]
    fn compose_mode_multiplies_factors() {
        let config = PacingConfig {
            extension_mode: ExtensionMode::Compose,
            ..PacingConfig::default()
        };
        assert_eq!(word_delay("technologies.", 300, &config), Duration::from_millis(360));
        assert_eq!(word_delay("world.", 300, &config), Duration::from_millis(300));
    }

    #[test]
    fn long_word_threshold_counts_chars() {
        let config = PacingConfig::default();
        // Ten chars, twenty bytes.
        assert_eq!(word_delay("ñññññññññn", 300, &config), Duration::from_millis(200));
    }

    #[test]
    fn shortening_percentages_are_raised_to_base() {
        let config = PacingConfig {
            punctuation_pct: 50,
            long_word_pct: 0,
            ..PacingConfig::default()
        };
        assert_eq!(word_delay("end.", 300, &config), Duration::from_millis(200));
        assert_eq!(word_delay("technologies", 300, &config), Duration::from_millis(200));
    }

    #[test]
    fn delay_strictly_decreases_with_rate() {
        let config = PacingConfig::default();
        for word in ["Hello", "world.", "technologies", "technologies."] {
            let mut previous = word_delay(word, MIN_WPM, &config);
            assert!(previous > Duration::ZERO);
            for wpm in MIN_WPM + 1..=MAX_WPM {
                let delay = word_delay(word, wpm, &config);
                assert!(delay > Duration::ZERO);
                assert!(delay < previous, "{word} at {wpm} wpm");
                previous = delay;
            }
        }
    }

    #[test]
    fn zero_rate_is_treated_as_one() {
        let config = PacingConfig::default();
        assert_eq!(word_delay("x", 0, &config), Duration::from_secs(60));
    }

    #[test]
    fn ceil_rounds_partial_milliseconds_up() {
        assert_eq!(delay_ms_ceil(Duration::from_micros(40_026)), 41);
        assert_eq!(delay_ms_ceil(Duration::from_millis(200)), 200);
        assert_eq!(delay_ms_ceil(Duration::ZERO), 1);
    }
}
