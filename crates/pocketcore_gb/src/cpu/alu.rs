use super::{Cpu, Flag};

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = (use_carry && self.flag(Flag::C)) as u8;

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = u16::from(a) + u16::from(value) + u16::from(carry_in);
        let result = full as u8;

        self.regs.a = result;
        self.set_flags(result == 0, false, half > 0x0F, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = (use_carry && self.flag(Flag::C)) as i16;

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in;
        let full = a as i16 - value as i16 - carry_in;
        let result = full as u8;

        self.regs.a = result;
        self.set_flags(result == 0, true, half < 0, full < 0);
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;
        self.set_flags(result == 0, false, true, false);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;
        self.set_flags(result == 0, false, false, false);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;
        self.set_flags(result == 0, false, false, false);
    }

    /// Compare A with `value`, setting flags as if `A - value` was
    /// performed. A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        let a = self.regs.a;
        let half = (a & 0x0F) < (value & 0x0F);
        let carry = a < value;
        self.set_flags(a == value, true, half, carry);
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// Uses C, H and N to pick a correction value, then applies it in
    /// the direction N indicates. Z tracks the adjusted result, H is
    /// cleared, N is preserved, C reflects the 0x60 correction.
    pub(super) fn alu_daa(&mut self) {
        let subtract = self.flag(Flag::N);
        let mut adjust: u8 = if self.flag(Flag::C) { 0x60 } else { 0x00 };
        if self.flag(Flag::H) {
            adjust |= 0x06;
        }

        let mut a = self.regs.a;
        if !subtract {
            // After an addition.
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            // After a subtraction.
            a = a.wrapping_sub(adjust);
        }

        self.regs.a = a;
        self.set_flags(a == 0, subtract, false, adjust >= 0x60);
    }

    /// 8-bit increment helper used by INC r and INC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        let carry = self.flag(Flag::C);
        self.set_flags(result == 0, false, (value & 0x0F) == 0x0F, carry);
        result
    }

    /// 8-bit decrement helper used by DEC r and DEC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        let carry = self.flag(Flag::C);
        self.set_flags(result == 0, true, (value & 0x0F) == 0x00, carry);
        result
    }

    /// 16-bit add helper for `ADD HL,rr`.
    ///
    /// Z is unaffected; N is cleared; H is the carry out of bit 11 and
    /// C the carry out of bit 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let zero = self.flag(Flag::Z);
        let half = (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF;
        let carry = u32::from(hl) + u32::from(value) > 0xFFFF;

        self.regs.set_hl(hl.wrapping_add(value));
        self.set_flags(zero, false, half, carry);
    }

    /// 16-bit add helper for instructions that add a signed 8-bit
    /// immediate to a 16-bit base (ADD SP,r8 and LD HL,SP+r8).
    ///
    /// Z and N are cleared; H and C come from the low byte of the base
    /// plus the raw unsigned immediate, even when the offset is
    /// negative.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        let half = (base & 0x000F) + u16::from(imm8 & 0x0F) > 0x000F;
        let carry = (base & 0x00FF) + u16::from(imm8) > 0x00FF;
        self.set_flags(false, false, half, carry);
        base.wrapping_add(offset)
    }
}
