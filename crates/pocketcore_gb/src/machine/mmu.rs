use crate::cpu::Bus;

const ROM_SIZE: usize = 0x8000;
const VRAM_SIZE: usize = 0x2000;
const ERAM_SIZE: usize = 0x2000;
const WRAM_SIZE: usize = 0x2000;
const OAM_SIZE: usize = 0xA0;
const IO_SIZE: usize = 0x80;
const HRAM_SIZE: usize = 0x7F;

/// Fixed-region memory bus for the DMG address space.
///
/// The 64 KiB space is partitioned into per-region backing arrays:
///
/// - `0x0000..=0x7FFF` cartridge ROM (writes discarded)
/// - `0x8000..=0x9FFF` VRAM
/// - `0xA000..=0xBFFF` external RAM
/// - `0xC000..=0xDFFF` work RAM
/// - `0xE000..=0xFDFF` echo RAM (unwired here: reads 0xFF, writes discarded)
/// - `0xFE00..=0xFE9F` OAM
/// - `0xFEA0..=0xFEFF` unusable (reads 0xFF, writes discarded)
/// - `0xFF00..=0xFF7F` IO registers (flat storage to this core)
/// - `0xFF80..=0xFFFE` HRAM
/// - `0xFFFF`          IE
///
/// Every address reads to a byte and every write either stores or is
/// discarded, so no access can fail. Bank-switched cartridges need an
/// MBC mapper in front of the ROM and external RAM windows; this bus
/// models only the flat 32 KiB case.
pub struct Mmu {
    rom: [u8; ROM_SIZE],
    vram: [u8; VRAM_SIZE],
    eram: [u8; ERAM_SIZE],
    wram: [u8; WRAM_SIZE],
    oam: [u8; OAM_SIZE],
    io: [u8; IO_SIZE],
    hram: [u8; HRAM_SIZE],
    ie: u8,
}

impl Default for Mmu {
    fn default() -> Self {
        Self {
            rom: [0; ROM_SIZE],
            vram: [0; VRAM_SIZE],
            eram: [0; ERAM_SIZE],
            wram: [0; WRAM_SIZE],
            oam: [0; OAM_SIZE],
            io: [0; IO_SIZE],
            hram: [0; HRAM_SIZE],
            ie: 0,
        }
    }
}

impl Mmu {
    /// Create a zero-filled bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a flat cartridge image into the ROM region.
    ///
    /// Called once at startup. Images larger than the 32 KiB window are
    /// truncated; they would need an MBC mapper to be reachable anyway.
    pub fn load_cartridge(&mut self, rom: &[u8]) {
        let len = rom.len().min(ROM_SIZE);
        if rom.len() > ROM_SIZE {
            log::warn!(
                "cartridge image is {} bytes; truncating to the {} byte ROM window (no MBC)",
                rom.len(),
                ROM_SIZE
            );
        }
        self.rom[..len].copy_from_slice(&rom[..len]);
        log::info!("loaded {len} byte cartridge image");
    }
}

impl Bus for Mmu {
    fn read8(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF => self.rom[addr as usize],
            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize],
            0xA000..=0xBFFF => self.eram[(addr - 0xA000) as usize],
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize],
            0xE000..=0xFDFF => 0xFF,
            0xFE00..=0xFE9F => self.oam[(addr - 0xFE00) as usize],
            0xFEA0..=0xFEFF => 0xFF,
            0xFF00..=0xFF7F => self.io[(addr - 0xFF00) as usize],
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize],
            0xFFFF => self.ie,
        }
    }

    fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            // ROM and the echo/unusable holes swallow writes.
            0x0000..=0x7FFF => {}
            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize] = value,
            0xA000..=0xBFFF => self.eram[(addr - 0xA000) as usize] = value,
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize] = value,
            0xE000..=0xFDFF => {}
            0xFE00..=0xFE9F => self.oam[(addr - 0xFE00) as usize] = value,
            0xFEA0..=0xFEFF => {}
            0xFF00..=0xFF7F => self.io[(addr - 0xFF00) as usize] = value,
            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize] = value,
            0xFFFF => self.ie = value,
        }
    }
}
