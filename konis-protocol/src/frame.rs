//! Frame layout and decoding for the PMS7003 serial output.
//!
//! Frame format (32 bytes total):
//! - HEADER (2 bytes): 0x42 0x4D synchronization pair
//! - PAYLOAD (28 bytes): big-endian u16 fields at fixed offsets
//! - CHECKSUM (2 bytes): big-endian sum of the preceding 30 bytes
//!
//! Consumed fields (offsets from the start of the frame):
//! - bytes 8-9: PM1.0 standard concentration
//! - bytes 10-11: PM2.5 standard concentration
//! - bytes 12-13: PM10 standard concentration
//!
//! The checksum at bytes 30-31 is NOT verified: any corruption in the
//! payload silently yields a wrong reading. Header validation is the only
//! integrity check performed.

use heapless::Vec;

use crate::mode::PmMode;

/// First header byte of every frame
pub const HEADER_HI: u8 = 0x42;

/// Second header byte of every frame
pub const HEADER_LO: u8 = 0x4D;

/// Total frame size in bytes, header and checksum included
pub const FRAME_LEN: usize = 32;

/// Errors that can occur while decoding a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// A header byte did not match the expected 0x42 0x4D pair
    Sync,
}

/// A complete, header-validated sensor frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: [u8; FRAME_LEN],
}

impl Frame {
    /// Validate the header of a raw 32-byte buffer and wrap it
    pub fn from_bytes(bytes: [u8; FRAME_LEN]) -> Result<Self, FrameError> {
        if bytes[0] != HEADER_HI || bytes[1] != HEADER_LO {
            return Err(FrameError::Sync);
        }
        Ok(Self { bytes })
    }

    /// The concentration field selected by `mode`, in ug/m3
    ///
    /// Total over the mode enum; the full u16 range [0, 65535] is possible
    /// and callers saturate for display.
    pub fn measurement(&self, mode: PmMode) -> u16 {
        self.field_be(mode.field_offset())
    }

    /// Big-endian u16 at the given frame offset
    fn field_be(&self, offset: usize) -> u16 {
        u16::from_be_bytes([self.bytes[offset], self.bytes[offset + 1]])
    }

    /// Raw frame contents
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.bytes
    }
}

/// State machine for decoding frames one byte at a time
///
/// A header mismatch is reported immediately via `Err(FrameError::Sync)`
/// rather than silently skipped, so callers decide the recovery policy:
/// abandoning the attempt gives the single-read semantics of the sensor
/// link driver, while feeding the next byte anyway rescans the stream.
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    state: DecodeState,
    buffer: Vec<u8, FRAME_LEN>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    /// Waiting for the 0x42 header byte
    SeekHigh,
    /// Got 0x42, waiting for 0x4D
    SeekLow,
    /// Header matched, reading the remaining 30 bytes
    ReadingBody,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    /// Create a new decoder waiting for a header
    pub fn new() -> Self {
        Self {
            state: DecodeState::SeekHigh,
            buffer: Vec::new(),
        }
    }

    /// Reset the decoder state
    pub fn reset(&mut self) {
        self.state = DecodeState::SeekHigh;
        self.buffer.clear();
    }

    /// Feed a single byte to the decoder
    ///
    /// Returns `Ok(Some(frame))` when a complete frame is decoded,
    /// `Ok(None)` when more bytes are needed, or `Err(FrameError::Sync)`
    /// when the byte breaks header synchronization.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            DecodeState::SeekHigh => {
                if byte != HEADER_HI {
                    return Err(FrameError::Sync);
                }
                self.buffer.clear();
                // Cannot fail: buffer was just cleared
                let _ = self.buffer.push(byte);
                self.state = DecodeState::SeekLow;
                Ok(None)
            }
            DecodeState::SeekLow => {
                if byte != HEADER_LO {
                    self.reset();
                    return Err(FrameError::Sync);
                }
                let _ = self.buffer.push(byte);
                self.state = DecodeState::ReadingBody;
                Ok(None)
            }
            DecodeState::ReadingBody => {
                // Cannot overflow: the buffer is drained at FRAME_LEN below
                let _ = self.buffer.push(byte);
                if self.buffer.len() < FRAME_LEN {
                    return Ok(None);
                }

                let mut bytes = [0u8; FRAME_LEN];
                bytes.copy_from_slice(&self.buffer);
                self.reset();

                // Header already validated byte-by-byte
                Ok(Some(Frame { bytes }))
            }
        }
    }
}
