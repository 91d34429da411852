use std::path::PathBuf;

use anyhow::{Context, Result};
use pocketcore_gb::GameBoy;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("Usage: cpu_run <rom_path> [instructions]");
        std::process::exit(2);
    });
    let instructions: u64 = args
        .next()
        .as_deref()
        .unwrap_or("10000000")
        .parse()
        .unwrap_or_else(|_| {
            eprintln!("Invalid instruction count; expected an integer.");
            std::process::exit(2);
        });

    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read ROM '{}'", rom_path.display()))?;

    let mut gb = GameBoy::new();
    gb.load_rom(&rom);

    let cycles = gb.run_steps(instructions);

    let regs = &gb.cpu.regs;
    println!("Ran {instructions} instructions ({cycles} T-cycles)");
    println!(
        "AF=0x{:04X} BC=0x{:04X} DE=0x{:04X} HL=0x{:04X} SP=0x{:04X} PC=0x{:04X} IME={}",
        regs.af(),
        regs.bc(),
        regs.de(),
        regs.hl(),
        regs.sp,
        regs.pc,
        gb.cpu.ime,
    );

    Ok(())
}
