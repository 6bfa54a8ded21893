use std::fmt::Display;

/// Formats bytes as zero padded lowercase hex, separated by `:`.
pub(crate) struct HexSlice<'a>(&'a [u8]);

impl<'a> HexSlice<'a> {
    pub(crate) fn new<T>(data: &'a T) -> HexSlice<'a>
    where
        T: ?Sized + AsRef<[u8]> + 'a,
    {
        HexSlice(data.as_ref())
    }
}

impl<'a> Display for HexSlice<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, byte) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ":{byte:02x}")?;
            } else {
                write!(f, "{byte:02x}")?;
            }
        }
        Ok(())
    }
}

/// Formats bytes as 16-bit big-endian groups separated by `:`, the way
/// IPv6 interface identifiers are written: lowercase, no leading zeros.
///
/// An odd trailing byte forms a group of its own.
pub(crate) struct HexWords<'a>(&'a [u8]);

impl<'a> HexWords<'a> {
    pub(crate) fn new<T>(data: &'a T) -> HexWords<'a>
    where
        T: ?Sized + AsRef<[u8]> + 'a,
    {
        HexWords(data.as_ref())
    }
}

impl<'a> Display for HexWords<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, pair) in self.0.chunks(2).enumerate() {
            let word = pair
                .iter()
                .fold(0u16, |word, byte| word << 8 | u16::from(*byte));

            if index > 0 {
                write!(f, ":{word:x}")?;
            } else {
                write!(f, "{word:x}")?;
            }
        }
        Ok(())
    }
}
