//! `std::io` adapters.
//!
//! Reading drains buffered bytes. Writing follows the buffer's policy: a full
//! bounded buffer reports [`io::ErrorKind::WouldBlock`], an overwrite buffer
//! accepts everything.

use std::io::{self, Read, Write};

use crate::config::Fifo;
use crate::policy::Policy;
use crate::ring_buffer::RingBuffer;

impl<S, P> Read for RingBuffer<S, P>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
    P: Policy,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_into(buf))
    }
}

impl<S, P> Write for RingBuffer<S, P>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
    P: Policy,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        match self.push_available(buf) {
            0 => Err(io::Error::new(
                io::ErrorKind::WouldBlock,
                "ring buffer is full",
            )),
            written => Ok(written),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for Fifo {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_into(buf))
    }
}

impl Write for Fifo {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Bounded(buffer) => buffer.write(buf),
            Self::Overwrite(buffer) => buffer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
