//! Publisher lookup.
//!
//! Cartridges name their publisher with the single byte at `0x14b`. When that
//! byte is `0x33` the publisher is instead given by the two ASCII characters at
//! `0x144..0x146`, which are read as a decimal number.

use lazy_static::lazy_static;
use tracing::{debug, warn};

pub const NEW_LICENSEE_FLAG: u8 = 0x33;
pub const MAX_LICENSEE_CODE: u8 = 0xa4;
pub const INVALID_LICENSEE: &str = "Invalid Licensee Code";

const KNOWN_LICENSEES: &[(u8, &str)] = &[
  (0x00, "None"),
  (0x01, "Nintendo R&D1"),
  (0x08, "Capcom"),
  (0x13, "Electronic Arts"),
  (0x18, "Hudson Soft"),
  (0x19, "b-ai"),
  (0x20, "kss"),
  (0x22, "pow"),
  (0x24, "PCM Complete"),
  (0x25, "san-x"),
  (0x28, "Kemco Japan"),
  (0x29, "seta"),
  (0x30, "Viacom"),
  (0x31, "Nintendo"),
  (0x32, "Bandai"),
  (0x33, "Ocean/Acclaim"),
  (0x34, "Konami"),
  (0x35, "Hector"),
  (0x37, "Taito"),
  (0x38, "Hudson"),
  (0x39, "Banpresto"),
  (0x41, "Ubi Soft"),
  (0x42, "Atlus"),
  (0x44, "Malibu"),
  (0x45, "Electronic Arts - New Code"),
  (0x46, "angel"),
  (0x47, "Bullet-Proof"),
  (0x49, "irem"),
  (0x50, "Absolute"),
  (0x51, "Acclaim"),
  (0x52, "Activision"),
  (0x53, "American sammy"),
  (0x54, "Konami"),
  (0x55, "Hi tech entertainment"),
  (0x56, "LJN"),
  (0x57, "Matchbox"),
  (0x58, "Mattel"),
  (0x59, "Milton Bradley"),
  (0x60, "Titus"),
  (0x61, "Virgin"),
  (0x64, "LucasArts"),
  (0x67, "Ocean"),
  (0x69, "Electronic Arts"),
  (0x70, "Infogrames"),
  (0x71, "Interplay"),
  (0x72, "Broderbund"),
  (0x73, "sculptured"),
  (0x75, "sci"),
  (0x78, "THQ"),
  (0x79, "Accolade"),
  (0x80, "misawa"),
  (0x83, "lozc"),
  (0x86, "Tokuma Shoten Intermedia"),
  (0x87, "Tsukuda Original"),
  (0x91, "Chunsoft"),
  (0x92, "Video system"),
  (0x93, "Ocean/Acclaim"),
  (0x95, "Varie"),
  (0x96, "Yonezawa/s-pal"),
  (0x97, "Kaneko"),
  (0x99, "Pack in soft"),
  (0xa4, "Konami (Yu-Gi-Oh!)"),
];

lazy_static! {
  // Every code up to MAX_LICENSEE_CODE has an entry; gaps get a placeholder.
  static ref LICENSEE_NAMES: Vec<String> = {
    let mut names: Vec<String> = (0..=MAX_LICENSEE_CODE)
      .map(|code| format!("0x{:02X} ???", code))
      .collect();
    for &(code, name) in KNOWN_LICENSEES {
      names[code as usize] = name.to_string();
    }
    names
  };
}

fn is_space(b: u8) -> bool {
  b == b' ' || (b'\t'..=b'\r').contains(&b)
}

/// Reads `digits` the way C's `strtoul(s, NULL, 10)` reads a NUL-terminated
/// string: leading whitespace and one sign are accepted, parsing stops at the
/// first non-digit and no digits at all gives 0. Truncated to 8 bits.
fn parse_decimal(digits: &[u8]) -> u8 {
  let mut chars = digits
    .iter()
    .copied()
    .take_while(|&b| b != 0)
    .skip_while(|&b| is_space(b))
    .peekable();
  let negative = chars.peek() == Some(&b'-');
  if let Some(b'-') | Some(b'+') = chars.peek() {
    chars.next();
  }
  let mut value: u8 = 0;
  for b in chars {
    if !b.is_ascii_digit() {
      break;
    }
    value = value.wrapping_mul(10).wrapping_add(b - b'0');
  }
  if negative {
    value.wrapping_neg()
  } else {
    value
  }
}

/// Resolves the publisher code.
///
/// `new_code` is the raw pair from `0x144`, low byte first. It is only
/// consulted when `old_code` is `NEW_LICENSEE_FLAG`.
pub fn decode_licensee_code(old_code: u8, new_code: [u8; 2]) -> u8 {
  if old_code != NEW_LICENSEE_FLAG {
    return old_code;
  }
  let code = parse_decimal(&new_code);
  debug!(
    "new licensee code {:?} decoded to {:#04x}",
    String::from_utf8_lossy(&new_code),
    code
  );
  code
}

pub fn resolve_licensee_name(code: u8) -> &'static str {
  match LICENSEE_NAMES.get(code as usize) {
    Some(name) => name.as_str(),
    None => {
      warn!("licensee code {:#04x} is out of range", code);
      INVALID_LICENSEE
    }
  }
}
