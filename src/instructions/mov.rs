//! Loads, stores, register transfers, and the stack-touching
//! instructions that move a byte without transforming it arithmetically.

use crate::cpu::Cpu;
use crate::memory::Memory;
use crate::mode::Operand;
use crate::status::StatusFlag;

pub fn lda(cpu: &mut Cpu, memory: &mut Memory, operand: Operand, _page_crossed: bool) -> u8 {
    let value = operand.read(cpu, memory);
    cpu.set_a(value);
    cpu.set_flags_nz(value);
    0
}

pub fn ldx(cpu: &mut Cpu, memory: &mut Memory, operand: Operand, _page_crossed: bool) -> u8 {
    let value = operand.read(cpu, memory);
    cpu.set_x(value);
    cpu.set_flags_nz(value);
    0
}

pub fn ldy(cpu: &mut Cpu, memory: &mut Memory, operand: Operand, _page_crossed: bool) -> u8 {
    let value = operand.read(cpu, memory);
    cpu.set_y(value);
    cpu.set_flags_nz(value);
    0
}

pub fn sta(cpu: &mut Cpu, memory: &mut Memory, operand: Operand, _page_crossed: bool) -> u8 {
    operand.write(cpu, memory, cpu.a());
    0
}

pub fn stx(cpu: &mut Cpu, memory: &mut Memory, operand: Operand, _page_crossed: bool) -> u8 {
    operand.write(cpu, memory, cpu.x());
    0
}

pub fn sty(cpu: &mut Cpu, memory: &mut Memory, operand: Operand, _page_crossed: bool) -> u8 {
    operand.write(cpu, memory, cpu.y());
    0
}

pub fn tax(cpu: &mut Cpu, _memory: &mut Memory, _operand: Operand, _page_crossed: bool) -> u8 {
    cpu.set_x(cpu.a());
    cpu.set_flags_nz(cpu.x());
    0
}

pub fn tay(cpu: &mut Cpu, _memory: &mut Memory, _operand: Operand, _page_crossed: bool) -> u8 {
    cpu.set_y(cpu.a());
    cpu.set_flags_nz(cpu.y());
    0
}

pub fn txa(cpu: &mut Cpu, _memory: &mut Memory, _operand: Operand, _page_crossed: bool) -> u8 {
    cpu.set_a(cpu.x());
    cpu.set_flags_nz(cpu.a());
    0
}

pub fn tya(cpu: &mut Cpu, _memory: &mut Memory, _operand: Operand, _page_crossed: bool) -> u8 {
    cpu.set_a(cpu.y());
    cpu.set_flags_nz(cpu.a());
    0
}

pub fn tsx(cpu: &mut Cpu, _memory: &mut Memory, _operand: Operand, _page_crossed: bool) -> u8 {
    cpu.set_x(cpu.sp());
    cpu.set_flags_nz(cpu.x());
    0
}

/// Unlike the other transfers, TXS does not touch the status flags -
/// the stack pointer isn't an observable "value" in that sense.
pub fn txs(cpu: &mut Cpu, _memory: &mut Memory, _operand: Operand, _page_crossed: bool) -> u8 {
    cpu.set_sp(cpu.x());
    0
}

pub fn pha(cpu: &mut Cpu, memory: &mut Memory, _operand: Operand, _page_crossed: bool) -> u8 {
    cpu.push_byte(memory, cpu.a());
    0
}

pub fn pla(cpu: &mut Cpu, memory: &mut Memory, _operand: Operand, _page_crossed: bool) -> u8 {
    let value = cpu.pop_byte(memory);
    cpu.set_a(value);
    cpu.set_flags_nz(value);
    0
}

/// The byte pushed by PHP always has Break and Unused set to 1, even
/// though Break has no backing flip-flop - this is what a real 6502
/// does when it pushes status for a software-initiated push.
pub fn php(cpu: &mut Cpu, memory: &mut Memory, _operand: Operand, _page_crossed: bool) -> u8 {
    let pushed = cpu.sr() | StatusFlag::Break.mask();
    cpu.push_byte(memory, pushed);
    0
}

pub fn plp(cpu: &mut Cpu, memory: &mut Memory, _operand: Operand, _page_crossed: bool) -> u8 {
    let byte = cpu.pop_byte(memory);
    cpu.restore_sr(byte);
    0
}
