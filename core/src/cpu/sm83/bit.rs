use crate::core::bus::Bus;
use crate::cpu::sm83::{Flag, Sm83};

/// Total T-cycles for a CB-prefixed opcode: 8 for register forms, 16 for
/// (HL) forms, except BIT n,(HL) at 12 (no write-back cycle).
fn cb_cycles(opcode: u8) -> u32 {
    if opcode & 0x07 == 6 {
        if (0x40..=0x7F).contains(&opcode) { 12 } else { 16 }
    } else {
        8
    }
}

impl Sm83 {
    // --- Rotate/shift helpers; each returns the result and sets flags
    //     with C = the outbound bit. ---

    fn do_rlc(&mut self, val: u8) -> u8 {
        let carry = val & 0x80 != 0;
        let result = val.rotate_left(1);
        self.set_flags(result == 0, false, false, carry);
        result
    }

    fn do_rrc(&mut self, val: u8) -> u8 {
        let carry = val & 0x01 != 0;
        let result = val.rotate_right(1);
        self.set_flags(result == 0, false, false, carry);
        result
    }

    fn do_rl(&mut self, val: u8) -> u8 {
        let carry = val & 0x80 != 0;
        let result = (val << 1) | self.flag(Flag::C) as u8;
        self.set_flags(result == 0, false, false, carry);
        result
    }

    fn do_rr(&mut self, val: u8) -> u8 {
        let carry = val & 0x01 != 0;
        let result = (val >> 1) | ((self.flag(Flag::C) as u8) << 7);
        self.set_flags(result == 0, false, false, carry);
        result
    }

    fn do_sla(&mut self, val: u8) -> u8 {
        let carry = val & 0x80 != 0;
        let result = val << 1;
        self.set_flags(result == 0, false, false, carry);
        result
    }

    fn do_sra(&mut self, val: u8) -> u8 {
        let carry = val & 0x01 != 0;
        let result = (val >> 1) | (val & 0x80);
        self.set_flags(result == 0, false, false, carry);
        result
    }

    fn do_swap(&mut self, val: u8) -> u8 {
        let result = val.rotate_left(4);
        self.set_flags(result == 0, false, false, false);
        result
    }

    fn do_srl(&mut self, val: u8) -> u8 {
        let carry = val & 0x01 != 0;
        let result = val >> 1;
        self.set_flags(result == 0, false, false, carry);
        result
    }

    // --- Accumulator rotates (primary map). Same as the CB forms but Z
    //     is forced clear. ---

    pub(crate) fn op_rlca(&mut self) {
        self.a = self.do_rlc(self.a);
        self.f &= !(Flag::Z as u8);
    }

    pub(crate) fn op_rrca(&mut self) {
        self.a = self.do_rrc(self.a);
        self.f &= !(Flag::Z as u8);
    }

    pub(crate) fn op_rla(&mut self) {
        self.a = self.do_rl(self.a);
        self.f &= !(Flag::Z as u8);
    }

    pub(crate) fn op_rra(&mut self) {
        self.a = self.do_rr(self.a);
        self.f &= !(Flag::Z as u8);
    }

    /// CB prefix: fetch the sub-opcode and dispatch. The quadrant in bits
    /// 6-7 picks rotate/shift, BIT, RES, or SET; bits 3-5 the operation or
    /// bit number; bits 0-2 the register.
    pub(crate) fn op_cb_prefix<B: Bus>(&mut self, cycles: &mut u32, bus: &mut B) {
        let opcode = self.fetch8(bus);
        *cycles = cb_cycles(opcode);

        let r = opcode & 0x07;
        let n = (opcode >> 3) & 0x07;

        match opcode >> 6 {
            0 => {
                let val = self.get_reg8(bus, r);
                let result = match n {
                    0 => self.do_rlc(val),
                    1 => self.do_rrc(val),
                    2 => self.do_rl(val),
                    3 => self.do_rr(val),
                    4 => self.do_sla(val),
                    5 => self.do_sra(val),
                    6 => self.do_swap(val),
                    7 => self.do_srl(val),
                    _ => unreachable!(),
                };
                self.set_reg8(bus, r, result);
            }
            // BIT n, r — Z from the tested bit, C untouched.
            1 => {
                let val = self.get_reg8(bus, r);
                self.set_flags(val & (1 << n) == 0, false, true, self.flag(Flag::C));
            }
            // RES n, r
            2 => {
                let val = self.get_reg8(bus, r);
                self.set_reg8(bus, r, val & !(1 << n));
            }
            // SET n, r
            3 => {
                let val = self.get_reg8(bus, r);
                self.set_reg8(bus, r, val | (1 << n));
            }
            _ => unreachable!(),
        }
    }
}
