use crate::core::bus::Bus;
use crate::cpu::sm83::Sm83;

impl Sm83 {
    /// LD r, r' (0x40-0x7F; 0x76 is HALT and never reaches here).
    pub(crate) fn op_ld_r_r<B: Bus>(&mut self, opcode: u8, bus: &mut B) {
        let val = self.get_reg8(bus, opcode & 0x07);
        self.set_reg8(bus, (opcode >> 3) & 0x07, val);
    }

    /// LD r, d8.
    pub(crate) fn op_ld_r_d8<B: Bus>(&mut self, opcode: u8, bus: &mut B) {
        let val = self.fetch8(bus);
        self.set_reg8(bus, (opcode >> 3) & 0x07, val);
    }

    /// LD rr, d16.
    pub(crate) fn op_ld_rr_d16<B: Bus>(&mut self, opcode: u8, bus: &mut B) {
        let val = self.fetch16(bus);
        self.set_rp((opcode >> 4) & 0x03, val);
    }

    /// LD (HL+), A.
    pub(crate) fn op_ld_hli_a<B: Bus>(&mut self, bus: &mut B) {
        let hl = self.hl();
        bus.write(hl, self.a);
        self.set_hl(hl.wrapping_add(1));
    }

    /// LD (HL-), A.
    pub(crate) fn op_ld_hld_a<B: Bus>(&mut self, bus: &mut B) {
        let hl = self.hl();
        bus.write(hl, self.a);
        self.set_hl(hl.wrapping_sub(1));
    }

    /// LD A, (HL+).
    pub(crate) fn op_ld_a_hli<B: Bus>(&mut self, bus: &mut B) {
        let hl = self.hl();
        self.a = bus.read(hl);
        self.set_hl(hl.wrapping_add(1));
    }

    /// LD A, (HL-).
    pub(crate) fn op_ld_a_hld<B: Bus>(&mut self, bus: &mut B) {
        let hl = self.hl();
        self.a = bus.read(hl);
        self.set_hl(hl.wrapping_sub(1));
    }

    /// LD (a16), SP.
    pub(crate) fn op_ld_a16_sp<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        bus.write16(addr, self.sp);
    }

    /// LDH (a8), A — write into the 0xFF00 page.
    pub(crate) fn op_ldh_a8_a<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus);
        bus.write(0xFF00 + offset as u16, self.a);
    }

    /// LDH A, (a8).
    pub(crate) fn op_ldh_a_a8<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus);
        self.a = bus.read(0xFF00 + offset as u16);
    }

    /// LD (a16), A.
    pub(crate) fn op_ld_a16_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        bus.write(addr, self.a);
    }

    /// LD A, (a16).
    pub(crate) fn op_ld_a_a16<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        self.a = bus.read(addr);
    }

    /// LD HL, SP+r8 — flags as ADD SP,r8, result into HL.
    pub(crate) fn op_ld_hl_sp_r8<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus) as i8;
        let result = self.sp_plus_offset(offset);
        self.set_hl(result);
    }
}
