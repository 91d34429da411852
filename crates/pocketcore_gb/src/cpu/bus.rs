/// Abstraction over the memory bus (cartridge, RAM and IO).
///
/// The CPU's only window on the address space. Every 16-bit address
/// yields a byte on read and every write either stores or is silently
/// discarded, so neither operation can fail. Hosts advance their own
/// peripherals from the cycle count returned by `Cpu::step`; the test
/// suite substitutes flat or scripted buses through this trait.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}
