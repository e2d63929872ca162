pub mod cartridge_type;
pub mod checksum;
pub mod decode;
pub mod error;
pub mod header;
pub mod licensee;

pub use crate::cartridge_type::resolve_cartridge_type;
pub use crate::checksum::{compute_header_checksum, is_checksum_valid};
pub use crate::decode::{decode, Cartridge, DecodedCartridgeInfo};
pub use crate::error::{Error, Result};
pub use crate::header::{read_header, CartridgeHeader};
pub use crate::licensee::{decode_licensee_code, resolve_licensee_name};
