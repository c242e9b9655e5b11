use crate::core::bus::Bus;
use crate::cpu::sm83::Sm83;

impl Sm83 {
    /// JR r8 — signed relative jump.
    pub(crate) fn op_jr<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus) as i8;
        self.pc = self.pc.wrapping_add(offset as i16 as u16);
    }

    /// JR cc, r8 — taken adds 4 T-cycles.
    pub(crate) fn op_jr_cc<B: Bus>(&mut self, opcode: u8, cycles: &mut u32, bus: &mut B) {
        let offset = self.fetch8(bus) as i8;
        if self.condition((opcode >> 3) & 0x03) {
            self.pc = self.pc.wrapping_add(offset as i16 as u16);
            *cycles += 4;
        }
    }

    /// JP a16.
    pub(crate) fn op_jp_a16<B: Bus>(&mut self, bus: &mut B) {
        self.pc = self.fetch16(bus);
    }

    /// JP cc, a16 — taken adds 4 T-cycles.
    pub(crate) fn op_jp_cc_a16<B: Bus>(&mut self, opcode: u8, cycles: &mut u32, bus: &mut B) {
        let target = self.fetch16(bus);
        if self.condition((opcode >> 3) & 0x03) {
            self.pc = target;
            *cycles += 4;
        }
    }

    /// CALL a16 — push the return address, jump.
    pub(crate) fn op_call_a16<B: Bus>(&mut self, bus: &mut B) {
        let target = self.fetch16(bus);
        self.push16(bus, self.pc);
        self.pc = target;
    }

    /// CALL cc, a16 — taken adds 12 T-cycles.
    pub(crate) fn op_call_cc_a16<B: Bus>(&mut self, opcode: u8, cycles: &mut u32, bus: &mut B) {
        let target = self.fetch16(bus);
        if self.condition((opcode >> 3) & 0x03) {
            self.push16(bus, self.pc);
            self.pc = target;
            *cycles += 12;
        }
    }

    /// RET.
    pub(crate) fn op_ret<B: Bus>(&mut self, bus: &mut B) {
        self.pc = self.pop16(bus);
    }

    /// RET cc — taken adds 12 T-cycles.
    pub(crate) fn op_ret_cc<B: Bus>(&mut self, opcode: u8, cycles: &mut u32, bus: &mut B) {
        if self.condition((opcode >> 3) & 0x03) {
            self.pc = self.pop16(bus);
            *cycles += 12;
        }
    }

    /// RETI — return and re-enable interrupts immediately.
    pub(crate) fn op_reti<B: Bus>(&mut self, bus: &mut B) {
        self.pc = self.pop16(bus);
        self.ime = true;
    }

    /// RST n — push PC, jump to the fixed vector in bits 3-5.
    pub(crate) fn op_rst<B: Bus>(&mut self, opcode: u8, bus: &mut B) {
        self.push16(bus, self.pc);
        self.pc = (opcode & 0x38) as u16;
    }
}
