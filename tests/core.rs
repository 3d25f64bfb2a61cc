//! End-to-end scenarios driving the public `Cpu::step` API directly,
//! rather than exercising individual mnemonic handlers.

use mos6502::memory::InterruptVector;
use mos6502::{Cpu, Memory, StatusFlag};

/// `Cpu::step` traces each instruction through the `log` facade; wiring
/// `env_logger` here lets `RUST_LOG=mos6502=trace cargo test -- --nocapture`
/// show it. Safe to call once per test - `try_init` no-ops on repeats.
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn brk_pushes_three_bytes_and_vectors_through_irq_brk() {
    init_logger();
    let mut cpu = Cpu::new();
    let mut memory = Memory::new();
    cpu.set_pc(0x8000);
    memory.write_byte(0x8000, 0x00); // BRK
    memory.write_word(InterruptVector::IrqOrBrk as u16, 0x9000);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.get_flag(StatusFlag::InterruptDisable), 1);

    // Three bytes were pushed starting at 0x01FF downward; the status
    // byte is the last of the three, at 0x01FD.
    let pushed_status = memory.read_byte(0x01FD);
    assert_eq!(pushed_status & StatusFlag::Break.mask(), StatusFlag::Break.mask());
}

#[test]
fn lda_immediate_sets_zero_and_advances_pc() {
    init_logger();
    let mut cpu = Cpu::new();
    let mut memory = Memory::new();
    cpu.set_pc(0x8000);
    memory.write_byte(0x8000, 0xA9); // LDA #imm
    memory.write_byte(0x8001, 0x00);

    let outcome = cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.get_flag(StatusFlag::Zero), 1);
    assert_eq!(cpu.get_flag(StatusFlag::Negative), 0);
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(outcome.cycles, 2);
}

#[test]
fn adc_immediate_signals_signed_overflow() {
    init_logger();
    let mut cpu = Cpu::new();
    let mut memory = Memory::new();
    cpu.set_a(0x50);
    cpu.set_pc(0x8000);
    memory.write_byte(0x8000, 0x69); // ADC #imm
    memory.write_byte(0x8001, 0x50);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0xA0);
    assert_eq!(cpu.get_flag(StatusFlag::Carry), 0);
    assert_eq!(cpu.get_flag(StatusFlag::Overflow), 1);
    assert_eq!(cpu.get_flag(StatusFlag::Negative), 1);
    assert_eq!(cpu.get_flag(StatusFlag::Zero), 0);
}

#[test]
fn branch_taken_across_a_page_boundary_costs_four_cycles() {
    init_logger();
    let mut cpu = Cpu::new();
    let mut memory = Memory::new();
    cpu.set_pc(0x80FD);
    cpu.set_flag(StatusFlag::Zero, 1).unwrap();
    memory.write_byte(0x80FD, 0xF0); // BEQ
    memory.write_byte(0x80FE, 0x04); // +4

    let outcome = cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.pc(), 0x8103);
    assert_eq!(outcome.cycles, 4);
}

#[test]
fn jsr_rts_round_trips_to_the_instruction_after_jsr() {
    init_logger();
    let mut cpu = Cpu::new();
    let mut memory = Memory::new();
    let sp_before = cpu.sp();
    cpu.set_pc(0x8000);
    memory.write_byte(0x8000, 0x20); // JSR
    memory.write_word(0x8001, 0x9000);
    memory.write_byte(0x9000, 0x60); // RTS

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.pc(), 0x9000);

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), sp_before);
}

#[test]
fn indirect_y_page_cross_adds_a_cycle() {
    init_logger();
    let mut cpu = Cpu::new();
    let mut memory = Memory::new();
    cpu.set_pc(0x8000);
    cpu.set_y(0x20);
    memory.write_byte(0x8000, 0xB1); // LDA (zp),Y
    memory.write_byte(0x8001, 0x10);
    memory.write_word(0x0010, 0x12F0);
    memory.write_byte(0x1310, 0x42);

    let outcome = cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(outcome.cycles, 6); // base 5 + 1 for the page cross
}

#[test]
fn unknown_opcode_reports_the_faulting_pc() {
    init_logger();
    let mut cpu = Cpu::new();
    let mut memory = Memory::new();
    cpu.set_pc(0x8000);
    memory.write_byte(0x8000, 0x02); // unofficial, unpopulated slot

    let err = cpu.step(&mut memory).unwrap_err();
    assert_eq!(
        err,
        mos6502::CpuError::UnknownOpcode {
            opcode: 0x02,
            pc: 0x8000
        }
    );
}

#[test]
fn register_values_stay_in_range_after_a_long_run() {
    init_logger();
    let mut cpu = Cpu::new();
    let mut memory = Memory::new();
    cpu.set_pc(0x8000);
    // INX repeated past the u8 boundary, then an infinite branch back.
    memory.write_range(0x8000, &[0xE8; 300]);
    for _ in 0..300 {
        cpu.step(&mut memory).unwrap();
    }
    assert_eq!(cpu.x(), 300u32 as u8);
    assert_eq!(cpu.sr() & StatusFlag::Unused.mask(), StatusFlag::Unused.mask());
}
