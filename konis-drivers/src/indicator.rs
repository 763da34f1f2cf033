//! Indicator LED bank.
//!
//! Three lines showing the active measurement mode cumulatively.

use embedded_hal::digital::OutputPin;

use konis_core::indicator::LINE_COUNT;

/// Bank of mode indicator LEDs
pub struct IndicatorLeds<P> {
    lines: [P; LINE_COUNT],
}

impl<P: OutputPin> IndicatorLeds<P> {
    /// Take ownership of the indicator pins
    pub fn new(lines: [P; LINE_COUNT]) -> Self {
        Self { lines }
    }

    /// Rewrite all lines from the given pattern
    pub fn show(&mut self, pattern: [bool; LINE_COUNT]) -> Result<(), P::Error> {
        for (line, on) in self.lines.iter_mut().zip(pattern) {
            if on {
                line.set_high()?;
            } else {
                line.set_low()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use konis_core::indicator::indicator_lines;
    use konis_protocol::PmMode;

    #[derive(Debug, Clone, Copy)]
    struct MockPin {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = core::convert::Infallible;
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }
    }

    #[test]
    fn test_show_rewrites_every_line() {
        let mut leds = IndicatorLeds::new([MockPin { high: false }; LINE_COUNT]);

        leds.show(indicator_lines(PmMode::Pm10)).unwrap();
        assert!(leds.lines.iter().all(|pin| pin.high));

        // Switching back down clears the lines no longer in the pattern
        leds.show(indicator_lines(PmMode::Pm1_0)).unwrap();
        assert!(leds.lines[0].high);
        assert!(!leds.lines[1].high);
        assert!(!leds.lines[2].high);
    }
}
