//! Simulated UART loopback through a receive FIFO with tracing enabled.
//!
//! ```bash
//! RUST_LOG=bytefifo=trace cargo run -p bytefifo --example serial_loopback --features tracing
//! ```

use std::io::{Read, Write};

use bytefifo::{FifoConfig, FifoError, OverflowMode};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FifoError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bytefifo=debug")),
        )
        .with_target(true)
        .init();

    let mut rx = FifoConfig::new(16).build()?;
    let frame = b"AT+STATUS?\r\nAT+RESET\r\n";

    // The receive queue is smaller than the frame; the excess is refused.
    let accepted = rx.write(frame).unwrap_or(0);
    tracing::info!(accepted, offered = frame.len(), "bounded receive");
    if let Err(error) = rx.push_block(&frame[accepted..]) {
        tracing::warn!(%error, code = error.code(), "receive overrun");
    }

    let mut line = Vec::new();
    rx.read_to_end(&mut line).unwrap_or_default();
    tracing::info!(line = %String::from_utf8_lossy(&line), "drained");

    let mut history = FifoConfig::new(8)
        .overflow(OverflowMode::Overwrite)
        .build()?;
    history.push_block(frame)?;
    let tail: Vec<u8> = history.iter().collect();
    tracing::info!(tail = %String::from_utf8_lossy(&tail), "last bytes seen");

    rx.reset();
    Ok(())
}
