use super::{Bus, Cpu};

impl Cpu {
    /// Execute a single instruction and return the number of T-cycles
    /// taken (one machine cycle = 4 T-cycles).
    ///
    /// The returned count already includes any conditional-branch or
    /// indirect-(HL) extra cycles, and for CB-prefixed opcodes the cost
    /// of the CB bank (the prefix itself contributes nothing). Hosts
    /// feed this value into their own peripheral tick functions.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let opcode = self.fetch8(bus);
        self.exec_opcode(bus, opcode)
    }
}
