//! A 48-bit MAC address value type.
//!
//! [`MacAddress`] parses loosely formatted text (any punctuation between
//! the hex digits is ignored) and derives the OUI, the NIC specifier, the
//! Modified EUI-64 identifier and the integer form of an address.
mod error;
mod mac;
pub mod parse;
#[cfg(feature = "serde")]
mod serde_impl;

mod utils;

pub use error::*;
pub use mac::*;
pub use parse::ParseMode;

pub type Result<T> = std::result::Result<T, error::Error>;
