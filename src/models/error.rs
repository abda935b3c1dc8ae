use super::AddressFamily;

/// Reasons a prefix cannot be built or has become invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefixError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("invalid prefix length: {0}")]
    InvalidPrefixLength(String),
    #[error("prefix length {len} is out of range (0-{max})")]
    PrefixLengthOutOfRange { len: u32, max: u8 },
    #[error("invalid subnet mask: {0}")]
    InvalidMask(String),
    #[error("subnet mask {mask} is not an {expected} mask")]
    MaskFamilyMismatch { mask: String, expected: AddressFamily },
    #[error("metric {metric} is out of range ({min}-{max})")]
    MetricOutOfRange { metric: u32, min: u32, max: u32 },
}
