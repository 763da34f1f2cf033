//! Buzzer tone output.
//!
//! Square-wave tone generation by toggling a GPIO line. Playing a tone
//! runs to completion before returning; once started it cannot be cut
//! short, so the calling task is held for the tone's full duration.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use konis_core::alarm::TonePlan;

/// GPIO-driven buzzer
pub struct Buzzer<P, D> {
    pin: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Buzzer<P, D> {
    /// Take ownership of the buzzer pin and a delay source
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    /// Play one tone to completion
    pub async fn play(&mut self, plan: &TonePlan) -> Result<(), P::Error> {
        for _ in 0..plan.cycles {
            self.pin.set_high()?;
            self.delay.delay_us(plan.half_period_us).await;
            self.pin.set_low()?;
            self.delay.delay_us(plan.half_period_us).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    struct MockPin {
        high: bool,
        rising_edges: u32,
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = core::convert::Infallible;
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) -> Result<(), Self::Error> {
            if !self.high {
                self.rising_edges += 1;
            }
            self.high = true;
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }
    }

    /// Delay source that only records the requested time
    struct MockDelay {
        total_us: u64,
    }

    impl DelayNs for MockDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.total_us += ns as u64 / 1_000;
        }
    }

    #[test]
    fn test_warning_tone_pulse_train() {
        let pin = MockPin {
            high: false,
            rising_edges: 0,
        };
        let delay = MockDelay { total_us: 0 };
        let mut buzzer = Buzzer::new(pin, delay);

        block_on(buzzer.play(&TonePlan::warning())).unwrap();

        // 2 kHz for 300 ms: 600 full cycles, 300 ms of delays, line left low
        assert_eq!(buzzer.pin.rising_edges, 600);
        assert_eq!(buzzer.delay.total_us, 300_000);
        assert!(!buzzer.pin.high);
    }
}
