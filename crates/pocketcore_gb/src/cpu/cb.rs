use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Handle CB-prefixed instructions (rotates, shifts and bit ops).
    ///
    /// The CB byte decodes as x = op[7:6], y = op[5:3], z = op[2:0]:
    /// x=0 selects the rotate/shift bank with y as the operation, x=1
    /// is BIT y,r, x=2 RES y,r, x=3 SET y,r, always with z as the
    /// operand index. The decode is total; there is no unknown CB
    /// opcode.
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let cb = self.fetch8(bus);
        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;

        match x {
            0 => {
                // Rotates and shifts.
                let value = self.read_reg8(bus, z);
                let cycles = if z == 6 { 16 } else { 8 };

                let (result, carry) = match y {
                    // RLC r
                    0 => (value.rotate_left(1), (value & 0x80) != 0),
                    // RRC r
                    1 => (value.rotate_right(1), (value & 0x01) != 0),
                    // RL r
                    2 => {
                        let carry_in = self.flag(Flag::C) as u8;
                        ((value << 1) | carry_in, (value & 0x80) != 0)
                    }
                    // RR r
                    3 => {
                        let carry_in = if self.flag(Flag::C) { 0x80 } else { 0 };
                        ((value >> 1) | carry_in, (value & 0x01) != 0)
                    }
                    // SLA r
                    4 => (value << 1, (value & 0x80) != 0),
                    // SRA r: arithmetic shift keeps the sign bit.
                    5 => ((value >> 1) | (value & 0x80), (value & 0x01) != 0),
                    // SWAP r: nibble exchange, carry always cleared.
                    6 => ((value << 4) | (value >> 4), false),
                    // SRL r
                    7 => (value >> 1, (value & 0x01) != 0),
                    _ => unreachable!(),
                };

                self.set_flags(result == 0, false, false, carry);
                self.write_reg8(bus, z, result);
                cycles
            }
            1 => {
                // BIT y, r: Z from the tested bit, C preserved.
                let value = self.read_reg8(bus, z);
                let bit_set = (value & (1 << y)) != 0;
                let carry = self.flag(Flag::C);
                self.set_flags(!bit_set, false, true, carry);

                if z == 6 {
                    12
                } else {
                    8
                }
            }
            2 => {
                // RES y, r: no flags.
                let value = self.read_reg8(bus, z);
                self.write_reg8(bus, z, value & !(1 << y));
                if z == 6 {
                    16
                } else {
                    8
                }
            }
            3 => {
                // SET y, r: no flags.
                let value = self.read_reg8(bus, z);
                self.write_reg8(bus, z, value | (1 << y));
                if z == 6 {
                    16
                } else {
                    8
                }
            }
            _ => unreachable!(),
        }
    }
}
