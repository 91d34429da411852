use typed_builder::TypedBuilder;

use super::{Cpu, Registers};

/// Post-boot register state used to construct a [`Cpu`].
///
/// The defaults match the state the DMG hands to cartridge code at
/// 0x0100 once the boot ROM has run: A=0x01, F=0xB0, SP=0xFFFE,
/// PC=0x0100, IME clear, remaining registers zero. Hosts that model a
/// different entry state (boot ROM execution, reference-core lockstep)
/// override individual fields through the builder.
#[derive(Clone, Copy, Debug, TypedBuilder)]
pub struct BootState {
    #[builder(default = 0x01)]
    pub a: u8,
    #[builder(default = 0xB0)]
    pub f: u8,
    #[builder(default)]
    pub b: u8,
    #[builder(default)]
    pub c: u8,
    #[builder(default)]
    pub d: u8,
    #[builder(default)]
    pub e: u8,
    #[builder(default)]
    pub h: u8,
    #[builder(default)]
    pub l: u8,
    #[builder(default = 0xFFFE)]
    pub sp: u16,
    #[builder(default = 0x0100)]
    pub pc: u16,
    #[builder(default = false)]
    pub ime: bool,
}

impl Default for BootState {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Create a CPU in the post-boot state.
    pub fn new() -> Self {
        Self::with_boot_state(BootState::default())
    }

    /// Create a CPU with an explicit post-boot register state.
    pub fn with_boot_state(state: BootState) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
        };
        cpu.apply_boot_state(state);
        cpu
    }

    /// Reset the CPU to the default post-boot state.
    pub fn reset(&mut self) {
        self.apply_boot_state(BootState::default());
    }

    fn apply_boot_state(&mut self, state: BootState) {
        self.regs.a = state.a;
        // Lower 4 bits of F are always zero, whatever the host asked for.
        self.regs.f = state.f & 0xF0;
        self.regs.b = state.b;
        self.regs.c = state.c;
        self.regs.d = state.d;
        self.regs.e = state.e;
        self.regs.h = state.h;
        self.regs.l = state.l;
        self.regs.sp = state.sp;
        self.regs.pc = state.pc;
        self.ime = state.ime;
    }
}
