//! Received command buffer
//!
//! The transport copies at most [`MAX_COMMAND_LEN`] bytes of one bus write
//! into a [`CommandBuffer`]. Surplus bytes of an over-long write are dropped,
//! the same way a fixed receive buffer would drop them.

use heapless::Vec;

/// Maximum number of bytes kept from one bus write
pub const MAX_COMMAND_LEN: usize = 8;

/// One received command: opcode byte followed by parameter bytes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandBuffer {
    bytes: Vec<u8, MAX_COMMAND_LEN>,
}

impl CommandBuffer {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Copy a received write into a buffer, truncating to [`MAX_COMMAND_LEN`]
    pub fn from_slice(data: &[u8]) -> Self {
        let len = data.len().min(MAX_COMMAND_LEN);
        let mut bytes = Vec::new();
        // Cannot fail: `len` never exceeds the capacity
        let _ = bytes.extend_from_slice(&data[..len]);
        Self { bytes }
    }

    /// Append one received byte
    ///
    /// Returns `false` once the buffer is full; the byte is dropped.
    pub fn push(&mut self, byte: u8) -> bool {
        self.bytes.push(byte).is_ok()
    }

    /// The opcode byte, if anything was received
    pub fn opcode(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    /// Parameter byte `n` (1-based, byte 0 is the opcode)
    pub fn byte(&self, n: usize) -> Option<u8> {
        self.bytes.get(n).copied()
    }

    /// Number of bytes received
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if no byte was received
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw received bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CommandBuffer {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=[u8]:x}", self.as_bytes())
    }
}
