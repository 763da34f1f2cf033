//! PMS7003 Sensor Serial Protocol
//!
//! This crate defines the receive-only UART protocol between the PMS7003
//! particulate-matter sensor and the Konis indicator. The sensor pushes
//! fixed-size binary frames without being polled:
//!
//! ```text
//! ┌────────┬────────┬─────────────────────────────┬──────────┐
//! │ 0x42   │ 0x4D   │ PAYLOAD                     │ CHECKSUM │
//! │ 1B     │ 1B     │ 28B (big-endian u16 fields) │ 2B       │
//! └────────┴────────┴─────────────────────────────┴──────────┘
//! ```
//!
//! Only the three "standard" concentration fields (PM1.0, PM2.5, PM10) are
//! consumed. The trailing checksum is not verified.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod mode;

pub use frame::{Frame, FrameDecoder, FrameError, FRAME_LEN, HEADER_HI, HEADER_LO};
pub use mode::PmMode;
