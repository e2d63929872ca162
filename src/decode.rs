use crate::cartridge_type::resolve_cartridge_type;
use crate::checksum::is_checksum_valid;
use crate::error::Result;
use crate::header::{read_header, CartridgeHeader};
use crate::licensee::{decode_licensee_code, resolve_licensee_name};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedCartridgeInfo {
  pub cartridge_type_name: String,
  pub licensee_code: u8,
  pub licensee_name: String,
  pub checksum_valid: bool,
}

/// Raw header fields alongside their decoded names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cartridge {
  pub header: CartridgeHeader,
  pub info: DecodedCartridgeInfo,
}

pub fn decode(rom: &[u8]) -> Result<Cartridge> {
  let header = read_header(rom)?;
  let licensee_code = decode_licensee_code(header.old_licensee, header.new_licensee);
  let info = DecodedCartridgeInfo {
    cartridge_type_name: resolve_cartridge_type(header.cartridge_type).to_string(),
    licensee_code,
    licensee_name: resolve_licensee_name(licensee_code).to_string(),
    checksum_valid: is_checksum_valid(rom)?,
  };
  debug!("decoded {:?}: {:?}", header.title_str(), info);
  Ok(Cartridge { header, info })
}
