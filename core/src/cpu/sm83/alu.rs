use crate::core::bus::Bus;
use crate::cpu::sm83::{Flag, Sm83};

impl Sm83 {
    // --- 8-bit arithmetic helpers ---

    fn do_add(&mut self, val: u8, carry_in: bool) {
        let a = self.a;
        let carry = (carry_in && self.flag(Flag::C)) as u8;
        let result = a.wrapping_add(val).wrapping_add(carry);
        let h = (a & 0x0F) + (val & 0x0F) + carry > 0x0F;
        let c = (a as u16) + (val as u16) + (carry as u16) > 0xFF;
        self.a = result;
        self.set_flags(result == 0, false, h, c);
    }

    fn do_sub(&mut self, val: u8, carry_in: bool) {
        let a = self.a;
        let carry = (carry_in && self.flag(Flag::C)) as u8;
        let result = a.wrapping_sub(val).wrapping_sub(carry);
        let h = (a & 0x0F) < (val & 0x0F) + carry;
        let c = (a as u16) < (val as u16) + (carry as u16);
        self.a = result;
        self.set_flags(result == 0, true, h, c);
    }

    fn do_cp(&mut self, val: u8) {
        let a = self.a;
        let result = a.wrapping_sub(val);
        let h = (a & 0x0F) < (val & 0x0F);
        self.set_flags(result == 0, true, h, a < val);
    }

    fn perform_alu_op(&mut self, op: u8, val: u8) {
        match op {
            0 => self.do_add(val, false), // ADD
            1 => self.do_add(val, true),  // ADC
            2 => self.do_sub(val, false), // SUB
            3 => self.do_sub(val, true),  // SBC
            4 => {
                // AND
                self.a &= val;
                self.set_flags(self.a == 0, false, true, false);
            }
            5 => {
                // XOR
                self.a ^= val;
                self.set_flags(self.a == 0, false, false, false);
            }
            6 => {
                // OR
                self.a |= val;
                self.set_flags(self.a == 0, false, false, false);
            }
            7 => self.do_cp(val), // CP
            _ => unreachable!(),
        }
    }

    // --- Instructions ---

    /// ALU A, r — ADD/ADC/SUB/SBC/AND/XOR/OR/CP.
    /// Opcode mask: 10 xxx rrr
    pub(crate) fn op_alu_r<B: Bus>(&mut self, opcode: u8, bus: &mut B) {
        let alu_op = (opcode >> 3) & 0x07;
        let val = self.get_reg8(bus, opcode & 0x07);
        self.perform_alu_op(alu_op, val);
    }

    /// ALU A, d8.
    /// Opcode mask: 11 xxx 110
    pub(crate) fn op_alu_d8<B: Bus>(&mut self, opcode: u8, bus: &mut B) {
        let alu_op = (opcode >> 3) & 0x07;
        let val = self.fetch8(bus);
        self.perform_alu_op(alu_op, val);
    }

    /// INC r. H is set when the low nibble wraps to zero; C untouched.
    /// Opcode mask: 00 rrr 100
    pub(crate) fn op_inc_r<B: Bus>(&mut self, opcode: u8, bus: &mut B) {
        let r = (opcode >> 3) & 0x07;
        let result = self.get_reg8(bus, r).wrapping_add(1);
        self.set_reg8(bus, r, result);
        self.set_flags(result == 0, false, result & 0x0F == 0x00, self.flag(Flag::C));
    }

    /// DEC r. H is set on a borrow out of bit 4; C untouched.
    /// Opcode mask: 00 rrr 101
    pub(crate) fn op_dec_r<B: Bus>(&mut self, opcode: u8, bus: &mut B) {
        let r = (opcode >> 3) & 0x07;
        let result = self.get_reg8(bus, r).wrapping_sub(1);
        self.set_reg8(bus, r, result);
        self.set_flags(result == 0, true, result & 0x0F == 0x0F, self.flag(Flag::C));
    }

    /// INC rr — no flags.
    pub(crate) fn op_inc_rr(&mut self, opcode: u8) {
        let rp = (opcode >> 4) & 0x03;
        self.set_rp(rp, self.get_rp(rp).wrapping_add(1));
    }

    /// DEC rr — no flags.
    pub(crate) fn op_dec_rr(&mut self, opcode: u8) {
        let rp = (opcode >> 4) & 0x03;
        self.set_rp(rp, self.get_rp(rp).wrapping_sub(1));
    }

    /// ADD HL, rr. Z preserved; H from bit 11, C from bit 15.
    pub(crate) fn op_add_hl_rr(&mut self, opcode: u8) {
        let val = self.get_rp((opcode >> 4) & 0x03);
        let hl = self.hl();
        let result = (hl as u32) + (val as u32);
        let h = (hl & 0x0FFF) + (val & 0x0FFF) > 0x0FFF;
        self.set_hl(result as u16);
        self.set_flags(self.flag(Flag::Z), false, h, result > 0xFFFF);
    }

    /// Shared rule for ADD SP,r8 and LD HL,SP+r8: H and C come from the
    /// unsigned low-byte addition of SP and the offset.
    pub(crate) fn sp_plus_offset(&mut self, offset: i8) -> u16 {
        let sp = self.sp;
        let val = offset as u8;
        let h = (sp & 0x0F) + (val as u16 & 0x0F) > 0x0F;
        let c = (sp & 0xFF) + (val as u16 & 0xFF) > 0xFF;
        self.set_flags(false, false, h, c);
        sp.wrapping_add(offset as i16 as u16)
    }

    /// ADD SP, r8 (signed).
    pub(crate) fn op_add_sp_r8<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus) as i8;
        self.sp = self.sp_plus_offset(offset);
    }

    /// DAA — BCD-correct A after an ADD/ADC (N=0) or SUB/SBC (N=1).
    pub(crate) fn op_daa(&mut self) {
        let n = self.flag(Flag::N);
        let h = self.flag(Flag::H);
        let mut c = self.flag(Flag::C);
        let mut a = self.a;

        if !n {
            if c || a > 0x99 {
                a = a.wrapping_add(0x60);
                c = true;
            }
            if h || a & 0x0F > 0x09 {
                a = a.wrapping_add(0x06);
            }
        } else {
            if c {
                a = a.wrapping_sub(0x60);
            }
            if h {
                a = a.wrapping_sub(0x06);
            }
        }

        self.a = a;
        self.set_flags(a == 0, n, false, c);
    }

    /// CPL — complement A.
    pub(crate) fn op_cpl(&mut self) {
        self.a = !self.a;
        self.set_flags(self.flag(Flag::Z), true, true, self.flag(Flag::C));
    }

    /// CCF — invert carry.
    pub(crate) fn op_ccf(&mut self) {
        self.set_flags(self.flag(Flag::Z), false, false, !self.flag(Flag::C));
    }

    /// SCF — set carry.
    pub(crate) fn op_scf(&mut self) {
        self.set_flags(self.flag(Flag::Z), false, false, true);
    }
}
