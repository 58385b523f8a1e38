//! Byte sinks the field encoder streams into.

use alloy_primitives::Keccak256;
use alloy_rlp::BufMut;
use core::{convert::Infallible, fmt};

/// A byte sink for the field encoder.
///
/// The encoder writes each field with one or more [RlpSink::put] calls and stops at the first
/// error, leaving whatever was already written in the sink.
pub trait RlpSink {
    /// The error returned when the sink rejects a write.
    type Error;

    /// Writes all of `bytes` to the sink.
    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// An [RlpSink] over an in-memory [BufMut]. Writes never fail.
pub struct BufSink<'a>(pub &'a mut dyn BufMut);

impl fmt::Debug for BufSink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BufSink").field(&self.0.remaining_mut()).finish()
    }
}

impl RlpSink for BufSink<'_> {
    type Error = Infallible;

    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.0.put_slice(bytes);
        Ok(())
    }
}

impl RlpSink for Keccak256 {
    type Error = Infallible;

    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.update(bytes);
        Ok(())
    }
}

/// An [RlpSink] over a [std::io::Write] implementation.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> RlpSink for IoSink<W> {
    type Error = std::io::Error;

    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.0.write_all(bytes)
    }
}

#[cfg(all(test, feature = "std"))]
mod test {
    use super::*;
    use std::io;

    /// A writer that accepts `budget` bytes and then fails.
    struct ShortWriter {
        budget: usize,
        written: usize,
    }

    impl io::Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written + buf.len() > self.budget {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
            }
            self.written += buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_buf_sink_appends() {
        let mut buf = Vec::new();
        let mut sink = BufSink(&mut buf);
        sink.put(&[0x01, 0x02]).unwrap();
        sink.put(&[0x03]).unwrap();
        assert_eq!(buf, [0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_io_sink_surfaces_write_error() {
        let mut sink = IoSink(ShortWriter { budget: 2, written: 0 });
        sink.put(&[0x01, 0x02]).unwrap();
        let err = sink.put(&[0x03]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
        assert_eq!(sink.0.written, 2);
    }
}
