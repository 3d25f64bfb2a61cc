use thiserror::Error;

/// The two ways a `Cpu::step` can fail. Everything else (register wrap,
/// memory wrap, page crossing, stack wrap) is a normal outcome with
/// defined semantics, not an error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// A status flag was set to something other than the literal 0 or 1.
    /// `index` is the bit position (0=Carry .. 7=Negative) of the flag
    /// that was being written.
    #[error("status bit {index} can only be set to 0 or 1")]
    StatusBitError { index: u8 },

    /// Dispatch found an empty opcode table slot.
    #[error("unknown opcode {opcode:#04x} at PC {pc:#06x}")]
    UnknownOpcode { opcode: u8, pc: u16 },
}
