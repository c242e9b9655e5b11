use dotmatrix_core::core::Irq;
use dotmatrix_core::cpu::Sm83;
mod common;
use common::TestBus;

#[test]
fn test_interrupt_not_taken_without_ime() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    bus.interrupts.write_enable(0x01);
    bus.interrupts.request(Irq::VBlank);
    bus.load(0, &[0x00]); // NOP

    cpu.step(&mut bus);
    assert_eq!(cpu.pc, 0x0001, "without IME the NOP just runs");
    assert_eq!(bus.interrupts.read_flags() & 0x01, 0x01, "IF bit stays set");
}

#[test]
fn test_interrupt_not_taken_when_masked() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.ime = true;
    bus.interrupts.write_enable(0x00);
    bus.interrupts.request(Irq::VBlank);
    bus.load(0, &[0x00]);

    cpu.step(&mut bus);
    assert_eq!(cpu.pc, 0x0001, "IE gates the request");
}

#[test]
fn test_vblank_dispatch() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.ime = true;
    cpu.pc = 0x1234;
    cpu.sp = 0xD000;
    bus.interrupts.write_enable(0x01);
    bus.interrupts.request(Irq::VBlank);

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 20, "interrupt dispatch costs 20 T-cycles");
    assert_eq!(cpu.pc, 0x0040);
    assert!(!cpu.ime, "IME cleared on entry");
    assert_eq!(bus.interrupts.read_flags() & 0x01, 0, "IF bit acknowledged");
    assert_eq!(bus.memory[0xCFFE], 0x34, "old PC pushed");
    assert_eq!(bus.memory[0xCFFF], 0x12);
}

#[test]
fn test_interrupt_priority_order() {
    // All five pending: lowest bit wins, then the next on each step.
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.ime = true;
    cpu.sp = 0xD000;
    bus.interrupts.write_enable(0x1F);
    for irq in [Irq::VBlank, Irq::Stat, Irq::Timer, Irq::Serial, Irq::Joypad] {
        bus.interrupts.request(irq);
    }

    for vector in [0x0040u16, 0x0048, 0x0050, 0x0058, 0x0060] {
        cpu.ime = true;
        cpu.step(&mut bus);
        assert_eq!(cpu.pc, vector);
        cpu.pc = 0; // park PC back on a NOP field
    }
    assert_eq!(bus.interrupts.pending(), 0);
}

#[test]
fn test_ei_is_delayed_one_instruction() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.sp = 0xD000;
    bus.interrupts.write_enable(0x01);
    bus.interrupts.request(Irq::VBlank);
    bus.load(0, &[0xFB, 0x00, 0x00]); // EI; NOP; NOP

    cpu.step(&mut bus);
    assert!(!cpu.ime, "EI has not landed yet");

    cpu.step(&mut bus);
    assert!(cpu.ime, "IME set after the following instruction");
    assert_eq!(cpu.pc, 0x0002, "that instruction still executed");

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 20);
    assert_eq!(cpu.pc, 0x0040, "interrupt vectored at the next boundary");
}

#[test]
fn test_di_cancels_pending_ei() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0xFB, 0xF3, 0x00]); // EI; DI; NOP

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert!(!cpu.ime, "DI wins over the in-flight EI");
}

// --- HALT ---

#[test]
fn test_halt_waits_for_pending() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x76, 0x00]); // HALT; NOP

    cpu.step(&mut bus);
    assert!(cpu.halted);

    for _ in 0..8 {
        let cycles = cpu.step(&mut bus);
        assert_eq!(cycles, 4, "halted CPU idles in 4-cycle units");
    }
    assert_eq!(cpu.pc, 0x0001, "no fetch while halted");
}

#[test]
fn test_halt_wakes_without_ime_and_skips_vector() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    bus.interrupts.write_enable(0x04);
    bus.load(0, &[0x76, 0x3C]); // HALT; INC A

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert!(cpu.halted);

    bus.interrupts.request(Irq::Timer);
    cpu.step(&mut bus);
    assert!(!cpu.halted);
    assert_eq!(cpu.a, 1, "execution resumed at the next instruction");
    assert_eq!(bus.interrupts.read_flags() & 0x04, 0x04, "no vectoring, IF intact");
}

#[test]
fn test_halt_wakes_and_vectors_with_ime() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.ime = true;
    cpu.sp = 0xD000;
    bus.interrupts.write_enable(0x04);
    bus.load(0, &[0x76, 0x00]); // HALT

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert!(cpu.halted);

    bus.interrupts.request(Irq::Timer);
    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 20);
    assert_eq!(cpu.pc, 0x0050);
}

#[test]
fn test_halt_ignores_masked_requests() {
    // (IE & IF) is the wake condition, not IF alone.
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    bus.interrupts.write_enable(0x01);
    bus.load(0, &[0x76]);

    cpu.step(&mut bus);
    bus.interrupts.request(Irq::Timer); // enabled mask is VBlank only
    cpu.step(&mut bus);
    assert!(cpu.halted, "masked request does not wake HALT");
}

// --- STOP ---

#[test]
fn test_stop_stalls_until_joypad() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    bus.interrupts.write_enable(0x10);
    bus.load(0, &[0x10, 0x00, 0x3C]); // STOP; (pad); INC A

    cpu.step(&mut bus);
    assert!(cpu.stopped);

    for _ in 0..4 {
        assert_eq!(cpu.step(&mut bus), 4);
    }
    assert!(cpu.stopped);

    bus.interrupts.request(Irq::Joypad);
    cpu.step(&mut bus);
    assert!(!cpu.stopped, "joypad interrupt ends STOP");
}
