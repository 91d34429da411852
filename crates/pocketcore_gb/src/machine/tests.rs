use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use super::{GameBoy, Mmu};
use crate::cpu::Bus;

#[test]
fn rom_region_discards_writes() {
    let mut mmu = Mmu::new();
    mmu.load_cartridge(&[0x11, 0x22, 0x33]);
    mmu.write8(0x0000, 0xAA);
    mmu.write8(0x7FFF, 0xBB);
    assert_eq!(mmu.read8(0x0000), 0x11);
    assert_eq!(mmu.read8(0x7FFF), 0x00);
}

#[test]
fn ram_regions_read_back_writes() {
    let mut mmu = Mmu::new();
    for addr in [0x8000u16, 0x9FFF, 0xA000, 0xBFFF, 0xC000, 0xDFFF] {
        mmu.write8(addr, 0x5A);
        assert_eq!(mmu.read8(addr), 0x5A, "addr 0x{addr:04X}");
    }
}

#[test]
fn echo_region_is_unwired() {
    let mut mmu = Mmu::new();
    // Writes are discarded, reads see open bus, and WRAM is untouched.
    mmu.write8(0xE000, 0x42);
    assert_eq!(mmu.read8(0xE000), 0xFF);
    assert_eq!(mmu.read8(0xFDFF), 0xFF);
    assert_eq!(mmu.read8(0xC000), 0x00);
}

#[test]
fn unusable_region_reads_open_bus() {
    let mut mmu = Mmu::new();
    mmu.write8(0xFEA0, 0x42);
    mmu.write8(0xFEFF, 0x42);
    assert_eq!(mmu.read8(0xFEA0), 0xFF);
    assert_eq!(mmu.read8(0xFEFF), 0xFF);
}

#[test]
fn oam_io_hram_and_ie_are_backed() {
    let mut mmu = Mmu::new();
    for addr in [0xFE00u16, 0xFE9F, 0xFF00, 0xFF7F, 0xFF80, 0xFFFE, 0xFFFF] {
        mmu.write8(addr, 0xA5);
        assert_eq!(mmu.read8(addr), 0xA5, "addr 0x{addr:04X}");
    }
}

#[test]
fn fresh_bus_is_zero_filled() {
    let mut mmu = Mmu::new();
    for addr in [0x0000u16, 0x8000, 0xA000, 0xC000, 0xFE00, 0xFF00, 0xFF80, 0xFFFF] {
        assert_eq!(mmu.read8(addr), 0x00, "addr 0x{addr:04X}");
    }
}

#[test]
fn oversize_cartridge_is_truncated_at_rom_window() {
    let mut image = vec![0u8; 0x9000];
    image[0x7FFF] = 0xAB;
    image[0x8000] = 0xCD;

    let mut mmu = Mmu::new();
    mmu.load_cartridge(&image);
    assert_eq!(mmu.read8(0x7FFF), 0xAB);
    // Nothing may spill past the ROM window into VRAM.
    assert_eq!(mmu.read8(0x8000), 0x00);
}

#[test]
fn machine_runs_program_from_rom() {
    // At 0x0100:
    //   LD A, 0x42
    //   LD (0xC000), A
    //   XOR A
    //   LD A, (0xC000)
    let mut image = vec![0u8; 0x0200];
    image[0x0100..0x0109].copy_from_slice(&[0x3E, 0x42, 0xEA, 0x00, 0xC0, 0xAF, 0xFA, 0x00, 0xC0]);

    let mut gb = GameBoy::new();
    gb.load_rom(&image);

    let cycles = gb.run_steps(4);
    assert_eq!(cycles, 8 + 16 + 4 + 16);
    assert_eq!(gb.cpu.regs.a, 0x42);
    assert_eq!(gb.mmu.read8(0xC000), 0x42);
    assert_eq!(gb.cpu.regs.pc, 0x0109);
}

#[test]
fn machine_stack_lives_in_hram_through_the_bus() {
    // PUSH BC at the post-boot SP of 0xFFFE lands in HRAM.
    let mut image = vec![0u8; 0x0200];
    image[0x0100..0x0102].copy_from_slice(&[0xC5, 0xC1]);

    let mut gb = GameBoy::new();
    gb.load_rom(&image);
    gb.cpu.regs.set_bc(0xBEEF);

    assert_eq!(gb.step(), 16);
    assert_eq!(gb.mmu.read8(0xFFFD), 0xBE);
    assert_eq!(gb.mmu.read8(0xFFFC), 0xEF);

    gb.cpu.regs.set_bc(0x0000);
    assert_eq!(gb.step(), 12);
    assert_eq!(gb.cpu.regs.bc(), 0xBEEF);
    assert_eq!(gb.cpu.regs.sp, 0xFFFE);
}

#[test]
fn reset_clears_bus_and_registers() {
    let mut gb = GameBoy::new();
    gb.mmu.write8(0xC000, 0x42);
    gb.cpu.regs.pc = 0x4000;
    gb.reset();
    assert_eq!(gb.mmu.read8(0xC000), 0x00);
    assert_eq!(gb.cpu.regs.pc, 0x0100);
}

// ---------------------------------------------------------------------------
// blargg cpu_instrs conformance
//
// The individual cpu_instrs ROMs are 32 KiB and run on a flat bus, so
// they exercise this core end-to-end without an MBC. They report
// through external RAM: a status byte at 0xA000 (0x80 while running,
// 0x00 on pass), the signature DE B0 61 at 0xA001..0xA004, and
// NUL-terminated result text from 0xA004. The ROMs are optional assets;
// the test skips when they are not checked in.

static BLARGG_DIR: OnceCell<Option<PathBuf>> = OnceCell::new();

fn blargg_rom_dir() -> Option<&'static Path> {
    BLARGG_DIR
        .get_or_init(|| {
            // Support both workspace-root and crate-relative working
            // directories.
            let candidates = [
                PathBuf::from("assets/roms/blargg/cpu_instrs/individual"),
                PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                    .join("../../assets/roms/blargg/cpu_instrs/individual"),
            ];
            candidates.into_iter().find(|path| path.is_dir())
        })
        .as_deref()
}

fn blargg_signature_present(gb: &mut GameBoy) -> bool {
    gb.mmu.read8(0xA001) == 0xDE && gb.mmu.read8(0xA002) == 0xB0 && gb.mmu.read8(0xA003) == 0x61
}

fn blargg_result_text(gb: &mut GameBoy) -> String {
    let mut text = String::new();
    for addr in 0xA004u16..0xB000 {
        let byte = gb.mmu.read8(addr);
        if byte == 0 {
            break;
        }
        text.push(byte as char);
    }
    text
}

/// Run a loaded blargg ROM to completion and return (status, text).
fn run_blargg_rom(gb: &mut GameBoy, name: &str) -> (u8, String) {
    const MAX_TCYCLES: u64 = 500_000_000;

    let mut elapsed = 0u64;
    while elapsed < MAX_TCYCLES {
        elapsed += gb.run_steps(0x10000);
        let status = gb.mmu.read8(0xA000);
        if blargg_signature_present(gb) && status != 0x80 {
            return (status, blargg_result_text(gb));
        }
    }
    panic!("{name} did not finish within {MAX_TCYCLES} T-cycles");
}

#[test]
fn blargg_cpu_instrs_individual_roms_pass() {
    let Some(dir) = blargg_rom_dir() else {
        eprintln!("blargg cpu_instrs ROMs not present; skipping conformance run");
        return;
    };

    let mut roms: Vec<PathBuf> = std::fs::read_dir(dir)
        .expect("listing blargg ROM directory")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "gb"))
        .collect();
    roms.sort();
    assert!(!roms.is_empty(), "blargg ROM directory is empty");

    for path in roms {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        // 02-interrupts needs interrupt dispatch, which lives outside
        // this core.
        if name.contains("interrupts") {
            continue;
        }

        let rom = std::fs::read(&path).expect("reading blargg ROM");
        let mut gb = GameBoy::new();
        gb.load_rom(&rom);

        let (status, text) = run_blargg_rom(&mut gb, &name);
        assert_eq!(status, 0, "{name} failed: {text}");
        assert!(text.contains("Passed"), "{name} output: {text}");
    }
}
