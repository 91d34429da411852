use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    pub(super) fn exec_alu_reg_group<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let operation = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);

        self.exec_alu_operation(operation, value);

        if src == 6 { 8 } else { 4 }
    }

    pub(super) fn exec_alu_imm<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));

        let operation = (opcode >> 3) & 0x07;
        let value = self.fetch8(bus);
        self.exec_alu_operation(operation, value);
        8
    }

    /// Shared ALU op selector: 0=ADD, 1=ADC, 2=SUB, 3=SBC, 4=AND,
    /// 5=XOR, 6=OR, 7=CP.
    fn exec_alu_operation(&mut self, operation: u8, value: u8) {
        match operation {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            7 => self.alu_cp(value),
            _ => unreachable!(),
        }
    }

    /// RLCA / RLA / RRCA / RRA.
    ///
    /// Unlike the CB-prefixed rotates these always clear Z.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let a = self.regs.a;
        let (result, carry) = match opcode {
            // RLCA: bit 7 to carry and bit 0.
            0x07 => (a.rotate_left(1), (a & 0x80) != 0),
            // RRCA: bit 0 to carry and bit 7.
            0x0F => (a.rotate_right(1), (a & 0x01) != 0),
            // RLA: rotate left through carry.
            0x17 => {
                let carry_in = self.flag(Flag::C) as u8;
                ((a << 1) | carry_in, (a & 0x80) != 0)
            }
            // RRA: rotate right through carry.
            0x1F => {
                let carry_in = if self.flag(Flag::C) { 0x80 } else { 0 };
                ((a >> 1) | carry_in, (a & 0x01) != 0)
            }
            _ => unreachable!(),
        };

        self.regs.a = result;
        self.set_flags(false, false, false, carry);
        4
    }

    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let rp = (opcode >> 4) & 0x03;
        let value = self.regs.read16(rp);
        self.alu_add16_hl(value);
        8
    }

    pub(super) fn exec_add_sp_r8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        16
    }

    pub(super) fn exec_ld_hl_sp_r8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        12
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        self.alu_daa();
        4
    }

    pub(super) fn exec_cpl(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        let zero = self.flag(Flag::Z);
        let carry = self.flag(Flag::C);
        self.set_flags(zero, true, true, carry);
        4
    }

    pub(super) fn exec_scf(&mut self) -> u32 {
        let zero = self.flag(Flag::Z);
        self.set_flags(zero, false, false, true);
        4
    }

    pub(super) fn exec_ccf(&mut self) -> u32 {
        let zero = self.flag(Flag::Z);
        let carry = self.flag(Flag::C);
        self.set_flags(zero, false, false, !carry);
        4
    }
}
