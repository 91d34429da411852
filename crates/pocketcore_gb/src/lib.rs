//! Sharp LR35902 (Game Boy DMG) CPU interpreter core.
//!
//! The crate provides the CPU itself (`cpu`) and a fixed-region memory
//! bus plus a small composition type (`machine`). Peripherals such as
//! the PPU, timers and joypad are expected to live in the embedding
//! host, driven by the cycle counts `Cpu::step` reports.

pub mod cpu;
pub mod machine;

pub use cpu::{BootState, Bus, Cpu, Flag, Registers};
pub use machine::{GameBoy, Mmu};
