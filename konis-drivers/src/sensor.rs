//! PMS7003 sensor link driver.
//!
//! The sensor streams frames continuously; the driver only receives. A
//! single read attempt either yields a complete frame or fails on the
//! first header byte that does not match - no bytes beyond the mismatch
//! are consumed and no resynchronization is attempted within the call.
//! There is no timeout: a silent sensor suspends the caller indefinitely.

use embedded_io_async::{Read, ReadExactError};

use konis_protocol::{Frame, FrameDecoder, FrameError, PmMode};

/// Errors produced by the sensor link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError<E> {
    /// Frame decoding failed (header mismatch)
    Frame(FrameError),
    /// The byte stream ended; only possible with non-UART transports
    Closed,
    /// Transport-level read error
    Io(E),
}

impl<E> From<FrameError> for LinkError<E> {
    fn from(err: FrameError) -> Self {
        LinkError::Frame(err)
    }
}

impl<E> From<ReadExactError<E>> for LinkError<E> {
    fn from(err: ReadExactError<E>) -> Self {
        match err {
            ReadExactError::UnexpectedEof => LinkError::Closed,
            ReadExactError::Other(e) => LinkError::Io(e),
        }
    }
}

/// Receive-only driver for a PMS7003 on a serial link
pub struct Pms7003<R> {
    rx: R,
    decoder: FrameDecoder,
}

impl<R: Read> Pms7003<R> {
    /// Wrap a serial receiver
    pub fn new(rx: R) -> Self {
        Self {
            rx,
            decoder: FrameDecoder::new(),
        }
    }

    /// Block until one byte arrives from the link
    async fn receive_byte(&mut self) -> Result<u8, LinkError<R::Error>> {
        let mut byte = [0u8; 1];
        self.rx.read_exact(&mut byte).await?;
        Ok(byte[0])
    }

    /// Read one complete frame
    ///
    /// Fails immediately when a header byte does not match; the stream is
    /// left positioned right after the offending byte.
    pub async fn read_frame(&mut self) -> Result<Frame, LinkError<R::Error>> {
        self.decoder.reset();
        loop {
            let byte = self.receive_byte().await?;
            if let Some(frame) = self.decoder.feed(byte)? {
                return Ok(frame);
            }
        }
    }

    /// Read one frame and extract the field for the given mode
    pub async fn read_measurement(&mut self, mode: PmMode) -> Result<u16, LinkError<R::Error>> {
        Ok(self.read_frame().await?.measurement(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use konis_protocol::{FRAME_LEN, HEADER_HI, HEADER_LO};

    /// Mock serial receiver delivering one byte per read, like a UART
    struct SliceRx<'a> {
        data: &'a [u8],
        pos: usize,
    }

    impl<'a> SliceRx<'a> {
        fn new(data: &'a [u8]) -> Self {
            Self { data, pos: 0 }
        }
    }

    impl embedded_io_async::ErrorType for SliceRx<'_> {
        type Error = core::convert::Infallible;
    }

    impl Read for SliceRx<'_> {
        async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            if self.pos >= self.data.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.data[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    fn raw_frame(pm1_0: u16, pm2_5: u16, pm10: u16) -> [u8; FRAME_LEN] {
        let mut bytes = [0u8; FRAME_LEN];
        bytes[0] = HEADER_HI;
        bytes[1] = HEADER_LO;
        bytes[8..10].copy_from_slice(&pm1_0.to_be_bytes());
        bytes[10..12].copy_from_slice(&pm2_5.to_be_bytes());
        bytes[12..14].copy_from_slice(&pm10.to_be_bytes());
        bytes
    }

    #[test]
    fn test_read_measurement_per_mode() {
        let bytes = raw_frame(26, 50, 75);

        for (mode, expected) in [
            (PmMode::Pm1_0, 26),
            (PmMode::Pm2_5, 50),
            (PmMode::Pm10, 75),
        ] {
            let mut link = Pms7003::new(SliceRx::new(&bytes));
            let value = block_on(link.read_measurement(mode)).unwrap();
            assert_eq!(value, expected);
        }
    }

    #[test]
    fn test_first_byte_mismatch_consumes_one_byte() {
        let mut bytes = raw_frame(1, 2, 3);
        bytes[0] = 0x00;

        let mut link = Pms7003::new(SliceRx::new(&bytes));
        let result = block_on(link.read_frame());

        assert_eq!(result, Err(LinkError::Frame(FrameError::Sync)));
        assert_eq!(link.rx.pos, 1);
    }

    #[test]
    fn test_second_byte_mismatch_consumes_two_bytes() {
        let mut bytes = raw_frame(1, 2, 3);
        bytes[1] = 0x00;

        let mut link = Pms7003::new(SliceRx::new(&bytes));
        let result = block_on(link.read_frame());

        assert_eq!(result, Err(LinkError::Frame(FrameError::Sync)));
        assert_eq!(link.rx.pos, 2);
    }

    #[test]
    fn test_failed_attempt_then_clean_frame() {
        // One junk byte, then a full frame: the first call fails, the
        // second call (next poll cycle) succeeds
        let frame = raw_frame(0, 120, 0);
        let mut stream = [0u8; FRAME_LEN + 1];
        stream[0] = 0x13;
        stream[1..].copy_from_slice(&frame);

        let mut link = Pms7003::new(SliceRx::new(&stream));
        assert!(block_on(link.read_frame()).is_err());

        let value = block_on(link.read_measurement(PmMode::Pm2_5)).unwrap();
        assert_eq!(value, 120);
    }

    #[test]
    fn test_truncated_stream_reports_closed() {
        let bytes = raw_frame(1, 2, 3);

        let mut link = Pms7003::new(SliceRx::new(&bytes[..10]));
        let result = block_on(link.read_frame());

        assert_eq!(result, Err(LinkError::Closed));
    }
}
