//! Indicator-line pattern for the active measurement mode.
//!
//! Three lines show the mode cumulatively: PM1.0 lights the first line
//! only, PM2.5 the first two, PM10 all three.

use konis_protocol::PmMode;

/// Number of indicator lines
pub const LINE_COUNT: usize = 3;

/// Lines to light for the given mode, cumulative from the first
pub fn indicator_lines(mode: PmMode) -> [bool; LINE_COUNT] {
    match mode {
        PmMode::Pm1_0 => [true, false, false],
        PmMode::Pm2_5 => [true, true, false],
        PmMode::Pm10 => [true, true, true],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_pattern() {
        assert_eq!(indicator_lines(PmMode::Pm1_0), [true, false, false]);
        assert_eq!(indicator_lines(PmMode::Pm2_5), [true, true, false]);
        assert_eq!(indicator_lines(PmMode::Pm10), [true, true, true]);
    }

    #[test]
    fn test_pattern_follows_mode_cycle() {
        // Walking the full mode cycle from power-on yields the three
        // distinct patterns and returns to the starting one
        let mut mode = PmMode::default();
        let start = indicator_lines(mode);

        let mut seen = heapless::Vec::<[bool; LINE_COUNT], 3>::new();
        for _ in 0..3 {
            seen.push(indicator_lines(mode)).unwrap();
            mode = mode.next();
        }

        assert_eq!(indicator_lines(mode), start);
        assert!(seen.contains(&[true, false, false]));
        assert!(seen.contains(&[true, true, false]));
        assert!(seen.contains(&[true, true, true]));
    }
}
