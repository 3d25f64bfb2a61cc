use std::sync::OnceLock;

use crate::cpu::Cpu;
use crate::instructions::{jump, logical, mov};
use crate::memory::Memory;
use crate::mode::{Mode, Operand};

/// A mnemonic's behavior: reads or writes through `operand`, returns any
/// cycles beyond the opcode's base count (page-cross penalties are
/// accounted for by the driver already, except for the branch-taken
/// penalty which only some mnemonics incur).
pub type Handler = fn(&mut Cpu, &mut Memory, Operand, bool) -> u8;

/// The 56 official 6502 mnemonics. Unofficial/illegal opcodes have no
/// variant here; their opcode-table slots are simply empty.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    LDA, LDX, LDY, STA, STX, STY,
    TAX, TAY, TXA, TYA, TSX, TXS,
    PHA, PLA, PHP, PLP,
    ORA, AND, EOR, ADC, SBC, CMP, CPX, CPY,
    DEC, DEX, DEY, INC, INX, INY,
    ASL, ROL, LSR, ROR, BIT,
    BPL, BMI, BVC, BVS, BCC, BCS, BNE, BEQ,
    BRK, RTI, JSR, RTS, JMP,
    CLC, SEC, CLD, SED, CLI, SEI, CLV, NOP,
}

impl Mnemonic {
    /// The canonical three-letter name, as used in disassembly listings
    /// and logging.
    pub fn name(self) -> &'static str {
        use Mnemonic::*;
        match self {
            LDA => "LDA", LDX => "LDX", LDY => "LDY",
            STA => "STA", STX => "STX", STY => "STY",
            TAX => "TAX", TAY => "TAY", TXA => "TXA", TYA => "TYA",
            TSX => "TSX", TXS => "TXS",
            PHA => "PHA", PLA => "PLA", PHP => "PHP", PLP => "PLP",
            ORA => "ORA", AND => "AND", EOR => "EOR",
            ADC => "ADC", SBC => "SBC",
            CMP => "CMP", CPX => "CPX", CPY => "CPY",
            DEC => "DEC", DEX => "DEX", DEY => "DEY",
            INC => "INC", INX => "INX", INY => "INY",
            ASL => "ASL", ROL => "ROL", LSR => "LSR", ROR => "ROR",
            BIT => "BIT",
            BPL => "BPL", BMI => "BMI", BVC => "BVC", BVS => "BVS",
            BCC => "BCC", BCS => "BCS", BNE => "BNE", BEQ => "BEQ",
            BRK => "BRK", RTI => "RTI", JSR => "JSR", RTS => "RTS", JMP => "JMP",
            CLC => "CLC", SEC => "SEC", CLD => "CLD", SED => "SED",
            CLI => "CLI", SEI => "SEI", CLV => "CLV", NOP => "NOP",
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Disassembly-metadata lookup, kept free-standing (rather than only a
/// method) for hosts that want a plain function pointer.
pub fn mnemonic_name(mnemonic: Mnemonic) -> &'static str {
    mnemonic.name()
}

/// One populated slot of the 256-entry opcode table.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeEntry {
    pub mnemonic: Mnemonic,
    pub mode: Mode,
    /// Instruction length in bytes, including the opcode itself. Carried
    /// as disassembly metadata; the driver does not use it to advance
    /// PC - addressing-mode resolution already consumes operand bytes.
    pub bytes: u8,
    pub base_cycles: u8,
    pub handler: Handler,
}

impl OpcodeEntry {
    /// A short disassembly string such as `"LDA A9 00"` - the mnemonic
    /// name followed by its raw instruction bytes (opcode plus operand
    /// bytes), read starting at `pc`. For a host's debug log line, not
    /// a full disassembler.
    pub fn disassemble(&self, memory: &Memory, pc: u16) -> String {
        let mut out = mnemonic_name(self.mnemonic).to_string();
        for byte in memory.read_range(pc, pc.wrapping_add(self.bytes as u16)) {
            out.push_str(&format!(" {byte:02X}"));
        }
        out
    }
}

/// The full 256-slot dispatch table, indexed by opcode byte. Unofficial
/// opcodes are left as `None`.
pub type OpcodeTable = [Option<OpcodeEntry>; 256];

static OPCODE_TABLE: OnceLock<OpcodeTable> = OnceLock::new();

/// The lazily-built, immutable opcode table shared by every `Cpu`.
pub fn opcode_table() -> &'static OpcodeTable {
    OPCODE_TABLE.get_or_init(build_opcode_table)
}

fn build_opcode_table() -> OpcodeTable {
    let mut table: OpcodeTable = [None; 256];

    macro_rules! op {
        ($code:literal, $mnemonic:ident, $mode:ident, $bytes:literal, $cycles:literal, $handler:expr) => {
            table[$code as usize] = Some(OpcodeEntry {
                mnemonic: Mnemonic::$mnemonic,
                mode: Mode::$mode,
                bytes: $bytes,
                base_cycles: $cycles,
                handler: $handler,
            });
        };
    }

    use Mnemonic::*;

    // Loads
    op!(0xA9, LDA, Immediate, 2, 2, mov::lda);
    op!(0xA5, LDA, ZeroPage, 2, 3, mov::lda);
    op!(0xB5, LDA, ZeroPageX, 2, 4, mov::lda);
    op!(0xAD, LDA, Absolute, 3, 4, mov::lda);
    op!(0xBD, LDA, AbsoluteX, 3, 4, mov::lda);
    op!(0xB9, LDA, AbsoluteY, 3, 4, mov::lda);
    op!(0xA1, LDA, IndirectX, 2, 6, mov::lda);
    op!(0xB1, LDA, IndirectY, 2, 5, mov::lda);

    op!(0xA2, LDX, Immediate, 2, 2, mov::ldx);
    op!(0xA6, LDX, ZeroPage, 2, 3, mov::ldx);
    op!(0xB6, LDX, ZeroPageY, 2, 4, mov::ldx);
    op!(0xAE, LDX, Absolute, 3, 4, mov::ldx);
    op!(0xBE, LDX, AbsoluteY, 3, 4, mov::ldx);

    op!(0xA0, LDY, Immediate, 2, 2, mov::ldy);
    op!(0xA4, LDY, ZeroPage, 2, 3, mov::ldy);
    op!(0xB4, LDY, ZeroPageX, 2, 4, mov::ldy);
    op!(0xAC, LDY, Absolute, 3, 4, mov::ldy);
    op!(0xBC, LDY, AbsoluteX, 3, 4, mov::ldy);

    // Stores
    op!(0x85, STA, ZeroPage, 2, 3, mov::sta);
    op!(0x95, STA, ZeroPageX, 2, 4, mov::sta);
    op!(0x8D, STA, Absolute, 3, 4, mov::sta);
    op!(0x9D, STA, AbsoluteX, 3, 5, mov::sta);
    op!(0x99, STA, AbsoluteY, 3, 5, mov::sta);
    op!(0x81, STA, IndirectX, 2, 6, mov::sta);
    op!(0x91, STA, IndirectY, 2, 6, mov::sta);

    op!(0x86, STX, ZeroPage, 2, 3, mov::stx);
    op!(0x96, STX, ZeroPageY, 2, 4, mov::stx);
    op!(0x8E, STX, Absolute, 3, 4, mov::stx);

    op!(0x84, STY, ZeroPage, 2, 3, mov::sty);
    op!(0x94, STY, ZeroPageX, 2, 4, mov::sty);
    op!(0x8C, STY, Absolute, 3, 4, mov::sty);

    // Register transfers and stack
    op!(0xAA, TAX, Implied, 1, 2, mov::tax);
    op!(0xA8, TAY, Implied, 1, 2, mov::tay);
    op!(0x8A, TXA, Implied, 1, 2, mov::txa);
    op!(0x98, TYA, Implied, 1, 2, mov::tya);
    op!(0xBA, TSX, Implied, 1, 2, mov::tsx);
    op!(0x9A, TXS, Implied, 1, 2, mov::txs);
    op!(0x48, PHA, Implied, 1, 3, mov::pha);
    op!(0x68, PLA, Implied, 1, 4, mov::pla);
    op!(0x08, PHP, Implied, 1, 3, mov::php);
    op!(0x28, PLP, Implied, 1, 4, mov::plp);

    // Logical / arithmetic
    op!(0x09, ORA, Immediate, 2, 2, logical::ora);
    op!(0x05, ORA, ZeroPage, 2, 3, logical::ora);
    op!(0x15, ORA, ZeroPageX, 2, 4, logical::ora);
    op!(0x0D, ORA, Absolute, 3, 4, logical::ora);
    op!(0x1D, ORA, AbsoluteX, 3, 4, logical::ora);
    op!(0x19, ORA, AbsoluteY, 3, 4, logical::ora);
    op!(0x01, ORA, IndirectX, 2, 6, logical::ora);
    op!(0x11, ORA, IndirectY, 2, 5, logical::ora);

    op!(0x29, AND, Immediate, 2, 2, logical::and_);
    op!(0x25, AND, ZeroPage, 2, 3, logical::and_);
    op!(0x35, AND, ZeroPageX, 2, 4, logical::and_);
    op!(0x2D, AND, Absolute, 3, 4, logical::and_);
    op!(0x3D, AND, AbsoluteX, 3, 4, logical::and_);
    op!(0x39, AND, AbsoluteY, 3, 4, logical::and_);
    op!(0x21, AND, IndirectX, 2, 6, logical::and_);
    op!(0x31, AND, IndirectY, 2, 5, logical::and_);

    op!(0x49, EOR, Immediate, 2, 2, logical::eor);
    op!(0x45, EOR, ZeroPage, 2, 3, logical::eor);
    op!(0x55, EOR, ZeroPageX, 2, 4, logical::eor);
    op!(0x4D, EOR, Absolute, 3, 4, logical::eor);
    op!(0x5D, EOR, AbsoluteX, 3, 4, logical::eor);
    op!(0x59, EOR, AbsoluteY, 3, 4, logical::eor);
    op!(0x41, EOR, IndirectX, 2, 6, logical::eor);
    op!(0x51, EOR, IndirectY, 2, 5, logical::eor);

    op!(0x69, ADC, Immediate, 2, 2, logical::adc);
    op!(0x65, ADC, ZeroPage, 2, 3, logical::adc);
    op!(0x75, ADC, ZeroPageX, 2, 4, logical::adc);
    op!(0x6D, ADC, Absolute, 3, 4, logical::adc);
    op!(0x7D, ADC, AbsoluteX, 3, 4, logical::adc);
    op!(0x79, ADC, AbsoluteY, 3, 4, logical::adc);
    op!(0x61, ADC, IndirectX, 2, 6, logical::adc);
    op!(0x71, ADC, IndirectY, 2, 5, logical::adc);

    op!(0xE9, SBC, Immediate, 2, 2, logical::sbc);
    op!(0xE5, SBC, ZeroPage, 2, 3, logical::sbc);
    op!(0xF5, SBC, ZeroPageX, 2, 4, logical::sbc);
    op!(0xED, SBC, Absolute, 3, 4, logical::sbc);
    op!(0xFD, SBC, AbsoluteX, 3, 4, logical::sbc);
    op!(0xF9, SBC, AbsoluteY, 3, 4, logical::sbc);
    op!(0xE1, SBC, IndirectX, 2, 6, logical::sbc);
    op!(0xF1, SBC, IndirectY, 2, 5, logical::sbc);

    op!(0xC9, CMP, Immediate, 2, 2, logical::cmp);
    op!(0xC5, CMP, ZeroPage, 2, 3, logical::cmp);
    op!(0xD5, CMP, ZeroPageX, 2, 4, logical::cmp);
    op!(0xCD, CMP, Absolute, 3, 4, logical::cmp);
    op!(0xDD, CMP, AbsoluteX, 3, 4, logical::cmp);
    op!(0xD9, CMP, AbsoluteY, 3, 4, logical::cmp);
    op!(0xC1, CMP, IndirectX, 2, 6, logical::cmp);
    op!(0xD1, CMP, IndirectY, 2, 5, logical::cmp);

    op!(0xE0, CPX, Immediate, 2, 2, logical::cpx);
    op!(0xE4, CPX, ZeroPage, 2, 3, logical::cpx);
    op!(0xEC, CPX, Absolute, 3, 4, logical::cpx);

    op!(0xC0, CPY, Immediate, 2, 2, logical::cpy);
    op!(0xC4, CPY, ZeroPage, 2, 3, logical::cpy);
    op!(0xCC, CPY, Absolute, 3, 4, logical::cpy);

    op!(0xC6, DEC, ZeroPage, 2, 5, logical::dec);
    op!(0xD6, DEC, ZeroPageX, 2, 6, logical::dec);
    op!(0xCE, DEC, Absolute, 3, 6, logical::dec);
    op!(0xDE, DEC, AbsoluteX, 3, 7, logical::dec);
    op!(0xCA, DEX, Implied, 1, 2, logical::dex);
    op!(0x88, DEY, Implied, 1, 2, logical::dey);

    op!(0xE6, INC, ZeroPage, 2, 5, logical::inc);
    op!(0xF6, INC, ZeroPageX, 2, 6, logical::inc);
    op!(0xEE, INC, Absolute, 3, 6, logical::inc);
    op!(0xFE, INC, AbsoluteX, 3, 7, logical::inc);
    op!(0xE8, INX, Implied, 1, 2, logical::inx);
    op!(0xC8, INY, Implied, 1, 2, logical::iny);

    op!(0x0A, ASL, Accumulator, 1, 2, logical::asl);
    op!(0x06, ASL, ZeroPage, 2, 5, logical::asl);
    op!(0x16, ASL, ZeroPageX, 2, 6, logical::asl);
    op!(0x0E, ASL, Absolute, 3, 6, logical::asl);
    op!(0x1E, ASL, AbsoluteX, 3, 7, logical::asl);

    op!(0x2A, ROL, Accumulator, 1, 2, logical::rol);
    op!(0x26, ROL, ZeroPage, 2, 5, logical::rol);
    op!(0x36, ROL, ZeroPageX, 2, 6, logical::rol);
    op!(0x2E, ROL, Absolute, 3, 6, logical::rol);
    op!(0x3E, ROL, AbsoluteX, 3, 7, logical::rol);

    op!(0x4A, LSR, Accumulator, 1, 2, logical::lsr);
    op!(0x46, LSR, ZeroPage, 2, 5, logical::lsr);
    op!(0x56, LSR, ZeroPageX, 2, 6, logical::lsr);
    op!(0x4E, LSR, Absolute, 3, 6, logical::lsr);
    op!(0x5E, LSR, AbsoluteX, 3, 7, logical::lsr);

    op!(0x6A, ROR, Accumulator, 1, 2, logical::ror);
    op!(0x66, ROR, ZeroPage, 2, 5, logical::ror);
    op!(0x76, ROR, ZeroPageX, 2, 6, logical::ror);
    op!(0x6E, ROR, Absolute, 3, 6, logical::ror);
    op!(0x7E, ROR, AbsoluteX, 3, 7, logical::ror);

    op!(0x24, BIT, ZeroPage, 2, 3, logical::bit);
    op!(0x2C, BIT, Absolute, 3, 4, logical::bit);

    // Branches
    op!(0x10, BPL, Relative, 2, 2, jump::bpl);
    op!(0x30, BMI, Relative, 2, 2, jump::bmi);
    op!(0x50, BVC, Relative, 2, 2, jump::bvc);
    op!(0x70, BVS, Relative, 2, 2, jump::bvs);
    op!(0x90, BCC, Relative, 2, 2, jump::bcc);
    op!(0xB0, BCS, Relative, 2, 2, jump::bcs);
    op!(0xD0, BNE, Relative, 2, 2, jump::bne);
    op!(0xF0, BEQ, Relative, 2, 2, jump::beq);

    // Control flow and flags
    op!(0x00, BRK, Implied, 1, 7, jump::brk);
    op!(0x40, RTI, Implied, 1, 6, jump::rti);
    op!(0x20, JSR, Absolute, 3, 6, jump::jsr);
    op!(0x60, RTS, Implied, 1, 6, jump::rts);
    op!(0x4C, JMP, Absolute, 3, 3, jump::jmp);
    op!(0x6C, JMP, Indirect, 3, 5, jump::jmp);

    op!(0x18, CLC, Implied, 1, 2, jump::clc);
    op!(0x38, SEC, Implied, 1, 2, jump::sec);
    op!(0xD8, CLD, Implied, 1, 2, jump::cld);
    op!(0xF8, SED, Implied, 1, 2, jump::sed);
    op!(0x58, CLI, Implied, 1, 2, jump::cli);
    op!(0x78, SEI, Implied, 1, 2, jump::sei);
    op!(0xB8, CLV, Implied, 1, 2, jump::clv);
    op!(0xEA, NOP, Implied, 1, 2, jump::nop);

    table
}
