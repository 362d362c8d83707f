//! Shift register output abstraction

/// Chain of serial-in parallel-out registers
///
/// Each implementation documents which register `bytes[0]` lands in. The
/// outputs change only once the whole slice has been shifted, so a partially
/// updated pattern is never visible.
pub trait ShiftOutput {
    /// Error type for shift operations
    type Error;

    /// Shift out every byte and latch the result
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}
