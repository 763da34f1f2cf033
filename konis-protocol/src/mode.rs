//! Measurement mode selection.
//!
//! The indicator shows one concentration field at a time; the mode decides
//! which field of the frame is extracted and which indicator lines are lit.

/// Active particulate-matter measurement mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PmMode {
    /// Particles with diameter <= 1.0 um
    Pm1_0,
    /// Particles with diameter <= 2.5 um
    Pm2_5,
    /// Particles with diameter <= 10 um
    Pm10,
}

impl PmMode {
    /// Cyclic successor: PM1.0 -> PM2.5 -> PM10 -> PM1.0
    pub const fn next(self) -> Self {
        match self {
            PmMode::Pm1_0 => PmMode::Pm2_5,
            PmMode::Pm2_5 => PmMode::Pm10,
            PmMode::Pm10 => PmMode::Pm1_0,
        }
    }

    /// Frame offset of this mode's "standard" concentration field
    pub const fn field_offset(self) -> usize {
        match self {
            PmMode::Pm1_0 => 8,
            PmMode::Pm2_5 => 10,
            PmMode::Pm10 => 12,
        }
    }
}

impl Default for PmMode {
    /// The device powers on showing PM2.5
    fn default() -> Self {
        PmMode::Pm2_5
    }
}
