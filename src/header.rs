//! Fixed-offset view of the cartridge header at `0x100..0x150`.

use crate::error::{Error, Result};
use tracing::warn;

pub const HEADER_START: usize = 0x100;
pub const HEADER_END: usize = 0x150;
pub const HEADER_SIZE: usize = HEADER_END - HEADER_START;

pub const TITLE_SIZE: usize = 16;

// Field offsets, relative to HEADER_START.
const ENTRY_POINT: usize = 0x00;
const LOGO: usize = 0x04;
const TITLE: usize = 0x34;
const NEW_LICENSEE: usize = 0x44;
const SGB_FLAG: usize = 0x46;
const CARTRIDGE_TYPE: usize = 0x47;
const ROM_SIZE: usize = 0x48;
const RAM_SIZE: usize = 0x49;
const DESTINATION: usize = 0x4a;
const OLD_LICENSEE: usize = 0x4b;
const ROM_VERSION: usize = 0x4c;
const HEADER_CHECKSUM: usize = 0x4d;
const GLOBAL_CHECKSUM: usize = 0x4e;

// 32 KB << 26 is the last size that fits in a u32.
const MAX_ROM_SIZE_SHIFT: u8 = 26;

pub const NINTENDO_LOGO: [u8; 48] = [
  0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
  0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
  0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartridgeHeader {
  pub entry_point: [u8; 4],
  pub logo: [u8; 48],
  // Note: On CGB the title contains a manufacturer's code and flag.
  pub title: [u8; TITLE_SIZE],
  /// Two ASCII digits, not a binary value. Low byte first.
  pub new_licensee: [u8; 2],
  pub sgb_flag: u8,
  pub cartridge_type: u8,
  pub rom_size: u8,
  pub ram_size: u8,
  pub destination: u8,
  /// 0x33 means "use `new_licensee` instead".
  pub old_licensee: u8,
  pub rom_version: u8,
  pub header_checksum: u8,
  pub global_checksum: [u8; 2],
}

impl CartridgeHeader {
  pub fn new() -> CartridgeHeader {
    CartridgeHeader {
      entry_point: [0, 0xc3, 0x50, 0x01], // NOP; JP 0x150;
      logo: NINTENDO_LOGO,
      title: [0; TITLE_SIZE],
      new_licensee: [0; 2],
      sgb_flag: 0,
      cartridge_type: 0,
      rom_size: 0,
      ram_size: 0,
      destination: 0,
      old_licensee: 0,
      rom_version: 0,
      header_checksum: 0,
      global_checksum: [0; 2],
    }
  }

  /// Title text up to the first NUL. Non-ASCII bytes are replaced.
  pub fn title_str(&self) -> String {
    let len = self
      .title
      .iter()
      .position(|&b| b == 0)
      .unwrap_or(TITLE_SIZE);
    String::from_utf8_lossy(&self.title[..len]).into_owned()
  }

  /// Physical ROM size in KB, `None` if the size byte is too large to represent.
  pub fn rom_size_kb(&self) -> Option<u32> {
    if self.rom_size > MAX_ROM_SIZE_SHIFT {
      return None;
    }
    Some(32 << self.rom_size)
  }

  pub fn new_licensee_code_value(&self) -> u16 {
    u16::from_le_bytes(self.new_licensee)
  }

  pub fn serialise(&self) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE);
    out.extend_from_slice(&self.entry_point);
    out.extend_from_slice(&self.logo);
    out.extend_from_slice(&self.title);
    out.extend_from_slice(&self.new_licensee);
    out.push(self.sgb_flag);
    out.push(self.cartridge_type);
    out.push(self.rom_size);
    out.push(self.ram_size);
    out.push(self.destination);
    out.push(self.old_licensee);
    out.push(self.rom_version);
    out.push(self.header_checksum);
    out.extend_from_slice(&self.global_checksum);
    return out;
  }
}

impl Default for CartridgeHeader {
  fn default() -> CartridgeHeader {
    CartridgeHeader::new()
  }
}

pub(crate) fn header_region(rom: &[u8]) -> Result<&[u8]> {
  rom.get(HEADER_START..HEADER_END).ok_or_else(|| {
    warn!("ROM image is {} bytes, too short for a header", rom.len());
    Error::TruncatedImage {
      len: rom.len(),
      required: HEADER_END,
    }
  })
}

fn field<const N: usize>(region: &[u8], offset: usize) -> [u8; N] {
  let mut out = [0; N];
  out.copy_from_slice(&region[offset..offset + N]);
  out
}

/// Copies the header fields out of `rom`.
///
/// The last title byte is always forced to zero in the returned copy so the
/// title is NUL terminated; `rom` itself is left untouched.
pub fn read_header(rom: &[u8]) -> Result<CartridgeHeader> {
  let region = header_region(rom)?;
  let mut header = CartridgeHeader {
    entry_point: field(region, ENTRY_POINT),
    logo: field(region, LOGO),
    title: field(region, TITLE),
    new_licensee: field(region, NEW_LICENSEE),
    sgb_flag: region[SGB_FLAG],
    cartridge_type: region[CARTRIDGE_TYPE],
    rom_size: region[ROM_SIZE],
    ram_size: region[RAM_SIZE],
    destination: region[DESTINATION],
    old_licensee: region[OLD_LICENSEE],
    rom_version: region[ROM_VERSION],
    header_checksum: region[HEADER_CHECKSUM],
    global_checksum: field(region, GLOBAL_CHECKSUM),
  };
  header.title[TITLE_SIZE - 1] = 0;
  Ok(header)
}

/// Stores `header` at `0x100` in `rom`, byte for byte.
pub fn write_header(rom: &mut [u8], header: &CartridgeHeader) -> Result<()> {
  let len = rom.len();
  let region = rom
    .get_mut(HEADER_START..HEADER_END)
    .ok_or(Error::TruncatedImage {
      len,
      required: HEADER_END,
    })?;
  region.copy_from_slice(&header.serialise());
  Ok(())
}

#[cfg(test)]
mod test {
  use super::*;

  fn rom_with(offset: usize, bytes: &[u8]) -> Vec<u8> {
    let mut rom = vec![0; HEADER_END];
    rom[offset..offset + bytes.len()].copy_from_slice(bytes);
    rom
  }

  #[test]
  fn truncated() {
    let rom = vec![0; HEADER_END - 1];
    assert_eq!(
      read_header(&rom),
      Err(Error::TruncatedImage {
        len: HEADER_END - 1,
        required: HEADER_END,
      })
    );
    assert!(read_header(&[]).is_err());
  }

  #[test]
  fn exact_length() {
    assert!(read_header(&vec![0; HEADER_END]).is_ok());
  }

  #[test]
  fn field_offsets() {
    let mut rom = vec![0; 0x8000];
    for (i, b) in rom[HEADER_START..HEADER_END].iter_mut().enumerate() {
      *b = i as u8;
    }
    let header = read_header(&rom).unwrap();
    assert_eq!(header.entry_point, [0x00, 0x01, 0x02, 0x03]);
    assert_eq!(header.logo[0], 0x04);
    assert_eq!(header.logo[47], 0x33);
    assert_eq!(header.title[0], 0x34);
    assert_eq!(header.title[14], 0x42);
    assert_eq!(header.new_licensee, [0x44, 0x45]);
    assert_eq!(header.sgb_flag, 0x46);
    assert_eq!(header.cartridge_type, 0x47);
    assert_eq!(header.rom_size, 0x48);
    assert_eq!(header.ram_size, 0x49);
    assert_eq!(header.destination, 0x4a);
    assert_eq!(header.old_licensee, 0x4b);
    assert_eq!(header.rom_version, 0x4c);
    assert_eq!(header.header_checksum, 0x4d);
    assert_eq!(header.global_checksum, [0x4e, 0x4f]);
  }

  #[test]
  fn title_terminator_forced() {
    let rom = rom_with(0x134, b"ABCDEFGHIJKLMNOP");
    let header = read_header(&rom).unwrap();
    assert_eq!(header.title[15], 0);
    assert_eq!(header.title_str(), "ABCDEFGHIJKLMNO");
    // Only the copy is terminated.
    assert_eq!(rom[0x143], b'P');
  }

  #[test]
  fn title_stops_at_nul() {
    let rom = rom_with(0x134, b"TETRIS\0\0JUNK");
    assert_eq!(read_header(&rom).unwrap().title_str(), "TETRIS");
  }

  #[test]
  fn rom_size() {
    let mut header = CartridgeHeader::new();
    assert_eq!(header.rom_size_kb(), Some(32));
    header.rom_size = 0x05;
    assert_eq!(header.rom_size_kb(), Some(1024));
    header.rom_size = 26;
    assert_eq!(header.rom_size_kb(), Some(1 << 31));
    header.rom_size = 27;
    assert_eq!(header.rom_size_kb(), None);
    header.rom_size = 0xff;
    assert_eq!(header.rom_size_kb(), None);
  }

  #[test]
  fn new_licensee_little_endian() {
    let rom = rom_with(0x144, b"01");
    let header = read_header(&rom).unwrap();
    assert_eq!(header.new_licensee_code_value(), 0x3130);
  }

  #[test]
  fn write_then_read() {
    let mut header = CartridgeHeader::new();
    header.title[..4].copy_from_slice(b"ZELD");
    header.cartridge_type = 0x13;
    header.old_licensee = 0x33;
    header.new_licensee = *b"01";
    header.header_checksum = 0xaa;
    header.global_checksum = [0x12, 0x34];
    assert_eq!(header.serialise().len(), HEADER_SIZE);

    let mut rom = vec![0xff; 0x8000];
    write_header(&mut rom, &header).unwrap();
    assert_eq!(&rom[0x104..0x134], &NINTENDO_LOGO[..]);
    assert_eq!(rom[0x147], 0x13);
    assert_eq!(rom[0x14d], 0xaa);
    assert_eq!(rom[0x150], 0xff);
    assert_eq!(read_header(&rom).unwrap(), header);
  }

  #[test]
  fn write_truncated() {
    let mut rom = vec![0; 0x14f];
    assert!(write_header(&mut rom, &CartridgeHeader::new()).is_err());
  }
}
