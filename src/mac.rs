//! The [`MacAddress`] value type.
use std::fmt;
use std::str::FromStr;

use crate::parse::{parse_with, ParseMode};
use crate::utils::hex::{HexSlice, HexWords};
use crate::{Error, Result};

/// Bit 0 of the first octet: Individual/Group.
const GROUP_BIT: u8 = 0x01;

/// Bit 1 of the first octet: Universal/Local.
const UL_BIT: u8 = 0x02;

/// Largest value [`MacAddress::to_u64`] can produce.
const MAX_U48: u64 = (1 << 48) - 1;

/// A 48-bit hardware address, stored as six octets in transmission order.
///
/// ```
/// use macaddr::MacAddress;
///
/// let mac: MacAddress = "3C-97-0E-7E-52-12".parse().unwrap();
///
/// assert_eq!(mac.to_string(), "3c:97:0e:7e:52:12");
/// assert_eq!(mac.oui(), "3c:97:0e");
/// assert_eq!(mac.eui64(), "3e97:eff:fe7e:5212");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// `00:00:00:00:00:00`
    pub const ZERO: MacAddress = MacAddress([0x00; 6]);

    /// `ff:ff:ff:ff:ff:ff`
    pub const BROADCAST: MacAddress = MacAddress([0xff; 6]);

    pub const fn new(octets: [u8; 6]) -> Self {
        MacAddress(octets)
    }

    /// Parses with [`ParseMode::Lenient`], so a final lone hex digit is
    /// accepted as the last octet.
    pub fn parse_lenient(input: &str) -> Result<Self> {
        parse_with(input, ParseMode::Lenient)
    }

    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Big-endian packing of the six octets, octet 0 most significant.
    pub fn to_u64(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, octet| acc << 8 | u64::from(*octet))
    }

    /// Organizationally Unique Identifier: the first three octets.
    pub fn oui(&self) -> String {
        HexSlice::new(&self.0[..3]).to_string()
    }

    /// Network Interface Controller specifier: the last three octets.
    pub fn nic(&self) -> String {
        HexSlice::new(&self.0[3..]).to_string()
    }

    /// Modified EUI-64 bytes: the U/L bit of octet 0 is set and
    /// `ff:fe` is inserted between the OUI and the NIC specifier.
    pub fn eui64_octets(&self) -> [u8; 8] {
        let [a, b, c, d, e, f] = self.0;
        [a | UL_BIT, b, c, 0xff, 0xfe, d, e, f]
    }

    /// Modified EUI-64 identifier as used for IPv6 interface identifiers.
    ///
    /// Groups are written without leading zeros, so `3c:97:0e:7e:52:12`
    /// gives `3e97:eff:fe7e:5212`.
    pub fn eui64(&self) -> String {
        HexWords::new(&self.eui64_octets()).to_string()
    }

    /// Whether the Individual/Group bit is set (multicast).
    pub const fn is_group(&self) -> bool {
        self.0[0] & GROUP_BIT == GROUP_BIT
    }

    pub const fn is_individual(&self) -> bool {
        !self.is_group()
    }

    /// Whether the U/L bit is set.
    ///
    /// This is the reverse of the IEEE 802 reading, where a set U/L bit
    /// marks a *locally* administered address. Existing callers depend on
    /// it; use [`MacAddress::is_ieee_universal`] for the IEEE meaning.
    pub const fn is_universally_administered(&self) -> bool {
        self.0[0] & UL_BIT == UL_BIT
    }

    /// Negation of [`MacAddress::is_universally_administered`].
    pub const fn is_locally_administered(&self) -> bool {
        !self.is_universally_administered()
    }

    /// IEEE 802: a set U/L bit marks a locally administered address.
    pub const fn is_ieee_local(&self) -> bool {
        self.0[0] & UL_BIT == UL_BIT
    }

    /// IEEE 802: a clear U/L bit marks a universally administered address.
    pub const fn is_ieee_universal(&self) -> bool {
        !self.is_ieee_local()
    }

    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&HexSlice::new(&self.0), f)
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacAddress({self})")
    }
}

impl FromStr for MacAddress {
    type Err = Error;

    /// Parses with [`ParseMode::Strict`].
    fn from_str(s: &str) -> Result<Self> {
        parse_with(s, ParseMode::Strict)
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(octets: [u8; 6]) -> Self {
        MacAddress(octets)
    }
}

impl From<MacAddress> for [u8; 6] {
    fn from(mac: MacAddress) -> [u8; 6] {
        mac.0
    }
}

impl From<MacAddress> for u64 {
    fn from(mac: MacAddress) -> u64 {
        mac.to_u64()
    }
}

impl TryFrom<&[u8]> for MacAddress {
    type Error = Error;

    fn try_from(octets: &[u8]) -> Result<Self> {
        <[u8; 6]>::try_from(octets)
            .map(MacAddress)
            .map_err(|_| Error::InvalidOctetCount(octets.len()))
    }
}

impl TryFrom<u64> for MacAddress {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        if value > MAX_U48 {
            return Err(Error::IntegerOverflow(value));
        }

        let bytes = value.to_be_bytes();
        let mut octets = [0u8; 6];
        octets.copy_from_slice(&bytes[2..]);

        Ok(MacAddress(octets))
    }
}
