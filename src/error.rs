/// Reasons a MAC address could not be built from its input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Failed to parse `{chunk}` at offset `{offset}` as hexadecimal")]
    InvalidHexDigit { chunk: String, offset: usize },
    #[error("Expected `{expected}` hex digits. Received `{found}`")]
    InvalidLength { expected: usize, found: usize },
    #[error("Expected 6 octets. Received `{0}`")]
    InvalidOctetCount(usize),
    #[error("Integer `{0:#x}` does not fit in 48 bits")]
    IntegerOverflow(u64),
}

