//! Engine transition-rule tests.
//!
//! Each supported opcode is executed in isolation and the whole machine state
//! is checked against the expected effect: the rule's mutation happens and
//! nothing else changes. Also covers the fatal-fault policy (abort, no
//! partial continuation) and the inert `addi` behaviour with its toggle.

use pretty_assertions::assert_eq;
use rvi_core::core::regfile::RegisterFile;
use rvi_core::{Config, Fault, Instruction, Machine, Reg};

/// Expected register file: zeros except the given assignments.
fn regs_with(assignments: &[(Reg, i128)]) -> RegisterFile {
    let mut regs = RegisterFile::new();
    for &(reg, val) in assignments {
        regs.write(reg, val);
    }
    regs
}

/// `li` writes the immediate and nothing else.
#[test]
fn li_writes_exactly_one_register() {
    let mut machine = Machine::default();
    assert_eq!(machine.step(&Instruction::Li { dst: Reg::A5, imm: -3 }), Ok(()));
    assert_eq!(machine.regs, regs_with(&[(Reg::A5, -3)]));
}

/// `mv` copies the source value; the source keeps it.
#[test]
fn mv_copies_between_registers() {
    let mut machine = Machine::default();
    machine.regs.write(Reg::T0, 11);
    assert_eq!(machine.step(&Instruction::Mv { dst: Reg::A1, src: Reg::T0 }), Ok(()));
    assert_eq!(machine.regs, regs_with(&[(Reg::T0, 11), (Reg::A1, 11)]));
}

/// `add` sums its two sources into the destination.
#[test]
fn add_sums_sources() {
    let mut machine = Machine::default();
    machine.regs.write(Reg::A1, 5);
    machine.regs.write(Reg::A2, 3);
    let inst = Instruction::Add { dst: Reg::A0, src1: Reg::A1, src2: Reg::A2 };
    assert_eq!(machine.step(&inst), Ok(()));
    assert_eq!(
        machine.regs,
        regs_with(&[(Reg::A0, 8), (Reg::A1, 5), (Reg::A2, 3)])
    );
}

/// `sub` subtracts the second source from the first.
#[test]
fn sub_subtracts_sources() {
    let mut machine = Machine::default();
    machine.regs.write(Reg::T1, 5);
    machine.regs.write(Reg::T2, 8);
    let inst = Instruction::Sub { dst: Reg::T1, src1: Reg::T1, src2: Reg::T2 };
    assert_eq!(machine.step(&inst), Ok(()));
    assert_eq!(machine.regs, regs_with(&[(Reg::T1, -3), (Reg::T2, 8)]));
}

/// `rem` follows the host remainder sign convention.
#[test]
fn rem_uses_host_remainder() {
    let mut machine = Machine::default();
    machine.regs.write(Reg::T0, -17);
    machine.regs.write(Reg::T1, 5);
    let inst = Instruction::Rem { dst: Reg::T0, src1: Reg::T0, src2: Reg::T1 };
    assert_eq!(machine.step(&inst), Ok(()));
    assert_eq!(machine.regs.read(Reg::T0), -2);
}

/// `rem` with a zero divisor faults and leaves the destination unchanged.
#[test]
fn rem_by_zero_faults_without_mutation() {
    let mut machine = Machine::default();
    machine.regs.write(Reg::A0, 17);
    let before = machine.regs.clone();
    let inst = Instruction::Rem { dst: Reg::A0, src1: Reg::A0, src2: Reg::A1 };
    assert_eq!(machine.step(&inst), Err(Fault::DivisionByZero));
    assert_eq!(machine.regs, before);
}

/// `sw` mutates exactly one memory cell and no register.
#[test]
fn sw_writes_memory_only() {
    let mut machine = Machine::default();
    machine.regs.write(Reg::A0, 9);
    let regs_before = machine.regs.clone();
    assert_eq!(machine.step(&Instruction::Sw { src: Reg::A0, offset: 8 }), Ok(()));
    assert_eq!(machine.regs, regs_before);
    assert_eq!(machine.mem.load(8), Ok(9));
    assert_eq!(machine.mem.load(4), Ok(0));
}

/// `lw` reads the cell its offset resolves to.
#[test]
fn lw_reads_memory() {
    let mut machine = Machine::default();
    assert_eq!(machine.mem.store(-4, 21), Ok(()));
    assert_eq!(machine.step(&Instruction::Lw { dst: Reg::T5, offset: -4 }), Ok(()));
    assert_eq!(machine.regs, regs_with(&[(Reg::T5, 21)]));
}

/// A stack access past the buffer is a fatal out-of-bounds fault.
#[test]
fn oob_stack_access_faults() {
    let mut machine = Machine::default();
    let result = machine.step(&Instruction::Sw { src: Reg::A0, offset: 400 });
    assert_eq!(
        result,
        Err(Fault::OutOfBoundsMemoryAccess {
            offset: 400,
            index: 1072,
            capacity: 1024
        })
    );
}

/// `addi` never changes any register or memory cell by default.
#[test]
fn addi_is_inert_by_default() {
    let mut machine = Machine::default();
    machine.regs.write(Reg::A0, 40);
    let regs_before = machine.regs.clone();
    let mem_before = machine.mem.clone();
    let inst = Instruction::Addi { dst: Reg::A0, src: Reg::A0, imm: 100 };
    assert_eq!(machine.step(&inst), Ok(()));
    assert_eq!(machine.regs, regs_before);
    assert_eq!(machine.mem, mem_before);
}

/// The `full_addi` switch enables the full add-immediate semantics.
#[test]
fn addi_with_full_semantics_enabled() {
    let config = Config { full_addi: true, ..Config::default() };
    let mut machine = Machine::new(&config);
    machine.regs.write(Reg::A1, 40);
    let inst = Instruction::Addi { dst: Reg::A0, src: Reg::A1, imm: 2 };
    assert_eq!(machine.step(&inst), Ok(()));
    assert_eq!(machine.regs, regs_with(&[(Reg::A0, 42), (Reg::A1, 40)]));
}

/// An unknown opcode leaves all state unchanged and execution continues.
#[test]
fn unknown_opcode_is_skipped() {
    let mut machine = Machine::default();
    machine.regs.write(Reg::A0, 1);
    let regs_before = machine.regs.clone();
    let mem_before = machine.mem.clone();
    assert_eq!(machine.step(&Instruction::Unknown("jal".to_string())), Ok(()));
    assert_eq!(machine.regs, regs_before);
    assert_eq!(machine.mem, mem_before);

    // The next instruction executes normally.
    assert_eq!(machine.step(&Instruction::Li { dst: Reg::A1, imm: 2 }), Ok(()));
    assert_eq!(machine.regs.read(Reg::A1), 2);
}

/// `execute` aborts at the first fault, keeping every earlier effect.
#[test]
fn execute_aborts_on_first_fault() {
    let mut machine = Machine::default();
    let program = vec![
        Instruction::Li { dst: Reg::A0, imm: 1 },
        Instruction::Rem { dst: Reg::A0, src1: Reg::A0, src2: Reg::A1 },
        Instruction::Li { dst: Reg::A0, imm: 99 },
    ];
    assert_eq!(machine.execute(program), Err(Fault::DivisionByZero));
    assert_eq!(machine.regs.read(Reg::A0), 1, "effects before the fault stay committed");
}

/// Decoding happens per line, so a malformed line aborts mid-run.
#[test]
fn run_lines_aborts_at_malformed_line() {
    let mut machine = Machine::default();
    let lines = ["li a0, 7", "li a1, oops", "li a0, 99"];
    assert!(matches!(
        machine.run_lines(lines),
        Err(Fault::MalformedOperand(_))
    ));
    assert_eq!(machine.regs.read(Reg::A0), 7);
    assert_eq!(machine.regs.read(Reg::A1), 0);
}

/// `snapshot` resolves names against the recognized set.
#[test]
fn snapshot_by_name() {
    let mut machine = Machine::default();
    machine.regs.write(Reg::A0, 5);
    assert_eq!(machine.snapshot("a0"), Ok(5));
    assert_eq!(
        machine.snapshot("sp"),
        Err(Fault::UnknownRegister("sp".to_string()))
    );
}
