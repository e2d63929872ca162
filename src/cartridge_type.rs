use tracing::warn;

pub const INVALID_TYPE: &str = "Invalid Type";

const CARTRIDGE_TYPE_COUNT: usize = 0x23;

// Indexed by the byte at 0x147. "0xNN ???" entries are reserved codes.
static CARTRIDGE_TYPES: [&str; CARTRIDGE_TYPE_COUNT] = [
  "ROM ONLY",
  "MBC1",
  "MBC1+RAM",
  "MBC1+RAM+BATTERY",
  "0x04 ???",
  "MBC2",
  "MBC2+BATTERY",
  "0x07 ???",
  "ROM+RAM 1",
  "ROM+RAM+BATTERY 1",
  "0x0A ???",
  "MMM01",
  "MMM01+RAM",
  "MMM01+RAM+BATTERY",
  "0x0E ???",
  "MBC3+TIMER+BATTERY",
  "MBC3+TIMER+RAM+BATTERY 2",
  "MBC3",
  "MBC3+RAM 2",
  "MBC3+RAM+BATTERY 2",
  "0x14 ???",
  "0x15 ???",
  "0x16 ???",
  "0x17 ???",
  "0x18 ???",
  "MBC5",
  "MBC5+RAM",
  "MBC5+RAM+BATTERY",
  "MBC5+RUMBLE",
  "MBC5+RUMBLE+RAM",
  "MBC5+RUMBLE+RAM+BATTERY",
  "0x1F ???",
  "MBC6",
  "0x21 ???",
  "MBC7+SENSOR+RUMBLE+RAM+BATTERY",
];

pub const MAX_CARTRIDGE_TYPE: u8 = (CARTRIDGE_TYPE_COUNT - 1) as u8;

pub fn resolve_cartridge_type(type_byte: u8) -> &'static str {
  match CARTRIDGE_TYPES.get(type_byte as usize) {
    Some(name) => *name,
    None => {
      warn!("cartridge type {:#04x} is out of range", type_byte);
      INVALID_TYPE
    }
  }
}
