use dotmatrix_core::cpu::Sm83;
mod common;
use common::TestBus;

// --- LD r, r' ---

#[test]
fn test_ld_b_c() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.c = 0x42;
    bus.load(0, &[0x41]); // LD B, C

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 4);
    assert_eq!(cpu.b, 0x42);
}

#[test]
fn test_ld_r_r_whole_block() {
    // Every register-to-register move copies the right source.
    let values = [0x10u8, 0x21, 0x32, 0x43, 0x54, 0x65, 0x87];
    for opcode in 0x40..=0x7F_u8 {
        if opcode == 0x76 || opcode & 0x07 == 6 || (opcode >> 3) & 0x07 == 6 {
            continue; // HALT and (HL) forms covered separately
        }
        let mut cpu = Sm83::new();
        let mut bus = TestBus::new();
        cpu.b = values[0];
        cpu.c = values[1];
        cpu.d = values[2];
        cpu.e = values[3];
        cpu.h = values[4];
        cpu.l = values[5];
        cpu.a = values[6];
        bus.load(0, &[opcode]);

        cpu.step(&mut bus);

        let src = [cpu.b, cpu.c, cpu.d, cpu.e, cpu.h, cpu.l, 0, cpu.a][(opcode & 0x07) as usize];
        let dst_index = (opcode >> 3) & 0x07;
        let dst = [cpu.b, cpu.c, cpu.d, cpu.e, cpu.h, cpu.l, 0, cpu.a][dst_index as usize];
        assert_eq!(dst, src, "opcode {opcode:02X}");
    }
}

#[test]
fn test_ld_r_hl_and_back() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.set_hl(0xC080);
    bus.memory[0xC080] = 0x99;
    bus.load(0, &[0x46, 0x70]); // LD B, (HL); LD (HL), B

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 8);
    assert_eq!(cpu.b, 0x99);

    bus.memory[0xC080] = 0;
    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 8);
    assert_eq!(bus.memory[0xC080], 0x99);
}

// --- Immediates ---

#[test]
fn test_ld_r_d8() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x3E, 0x77]); // LD A, 0x77

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 8);
    assert_eq!(cpu.a, 0x77);
    assert_eq!(cpu.pc, 2);
}

#[test]
fn test_ld_hl_d8_indirect() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.set_hl(0xC500);
    bus.load(0, &[0x36, 0x5A]); // LD (HL), 0x5A

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 12);
    assert_eq!(bus.memory[0xC500], 0x5A);
}

#[test]
fn test_ld_rr_d16() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x01, 0xCD, 0xAB, 0x31, 0xFE, 0xFF]); // LD BC, 0xABCD; LD SP, 0xFFFE

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 12);
    assert_eq!(cpu.bc(), 0xABCD);

    cpu.step(&mut bus);
    assert_eq!(cpu.sp, 0xFFFE);
}

// --- Indirect A loads/stores ---

#[test]
fn test_ld_bc_de_indirect() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.a = 0x11;
    cpu.set_bc(0xC001);
    cpu.set_de(0xC002);
    bus.load(0, &[0x02, 0x12]); // LD (BC), A; LD (DE), A

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(bus.memory[0xC001], 0x11);
    assert_eq!(bus.memory[0xC002], 0x11);
}

#[test]
fn test_ld_hl_increment_decrement() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.a = 0xAB;
    cpu.set_hl(0xC010);
    bus.load(0, &[0x22, 0x32]); // LD (HL+), A; LD (HL-), A

    cpu.step(&mut bus);
    assert_eq!(bus.memory[0xC010], 0xAB);
    assert_eq!(cpu.hl(), 0xC011);

    cpu.step(&mut bus);
    assert_eq!(bus.memory[0xC011], 0xAB);
    assert_eq!(cpu.hl(), 0xC010);
}

#[test]
fn test_ld_a_hl_increment() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.set_hl(0xC020);
    bus.memory[0xC020] = 0x34;
    bus.memory[0xC021] = 0x56;
    bus.load(0, &[0x2A, 0x3A]); // LD A, (HL+); LD A, (HL-)

    cpu.step(&mut bus);
    assert_eq!(cpu.a, 0x34);
    cpu.step(&mut bus);
    assert_eq!(cpu.a, 0x56);
    assert_eq!(cpu.hl(), 0xC020);
}

#[test]
fn test_ld_a16_sp_little_endian() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.sp = 0xFFF8;
    bus.load(0, &[0x08, 0x00, 0xC1]); // LD (0xC100), SP

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 20);
    assert_eq!(bus.memory[0xC100], 0xF8);
    assert_eq!(bus.memory[0xC101], 0xFF);
}

// --- High page ---

#[test]
fn test_ldh_write_and_read() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.a = 0x91;
    bus.load(0, &[0xE0, 0x40, 0xF0, 0x40]); // LDH (0x40), A; LDH A, (0x40)

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 12);
    assert_eq!(bus.memory[0xFF40], 0x91);

    cpu.a = 0;
    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 12);
    assert_eq!(cpu.a, 0x91);
}

#[test]
fn test_ld_c_indirect_high_page() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.a = 0x3C;
    cpu.c = 0x85;
    bus.load(0, &[0xE2, 0xF2]); // LD (C), A; LD A, (C)

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 8);
    assert_eq!(bus.memory[0xFF85], 0x3C);

    cpu.a = 0;
    cpu.step(&mut bus);
    assert_eq!(cpu.a, 0x3C);
}

// --- Absolute ---

#[test]
fn test_ld_a16_a_roundtrip() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.a = 0x66;
    bus.load(0, &[0xEA, 0x00, 0xD0, 0xFA, 0x00, 0xD0]); // LD (0xD000), A; LD A, (0xD000)

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 16);
    assert_eq!(bus.memory[0xD000], 0x66);

    cpu.a = 0;
    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 16);
    assert_eq!(cpu.a, 0x66);
}

// --- SP transfers ---

#[test]
fn test_ld_sp_hl() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.set_hl(0xCFFF);
    bus.load(0, &[0xF9]); // LD SP, HL

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 8);
    assert_eq!(cpu.sp, 0xCFFF);
}

#[test]
fn test_ld_hl_sp_plus_offset() {
    let mut cpu = Sm83::new();
    let mut bus = TestBus::new();
    cpu.sp = 0xFFF8;
    bus.load(0, &[0xF8, 0x08]); // LD HL, SP+8

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 12);
    assert_eq!(cpu.hl(), 0x0000);
    assert_eq!(cpu.sp, 0xFFF8, "SP itself is untouched");
    assert_eq!(cpu.f, 0x30, "H and C from the low-byte addition");
}
