//! Route prefix: an address block plus the metric it is reached with.
//!
//! Provides [`Prefix`] together with the accessors the summarizer relies on:
//! network, broadcast and mask are always derived from the stored address and
//! prefix length, never cached.

use super::addr::{all_ones, broadcast_addr, cut_addr, get_cidr_mask, ip_bits, mask_to_len};
use super::{AddressFamily, PrefixError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::net::IpAddr;

/// Lowest accepted route metric.
pub const MIN_METRIC: u32 = 0;
/// Highest accepted route metric.
pub const MAX_METRIC: u32 = 65535;

/// How the second half of `address/xxx` should be read by [`Prefix::parse`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MaskKind {
    /// Decimal prefix length, e.g. `24`.
    PrefixLength,
    /// Subnet mask in the address's own notation, e.g. `255.255.255.0` or `ffff:ffff::`.
    SubnetMask,
    /// Try a prefix length first, then a subnet mask.
    Unspecified,
}

/// A route prefix with its metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "PrefixRecord", try_from = "PrefixRecord")]
pub struct Prefix {
    family: AddressFamily,
    /// Address as given, host bits included.
    bits: u128,
    len: u8,
    metric: u32,
    /// Set when `set_metric` was called with an out-of-range value.
    rejected_metric: Option<u32>,
}

impl Prefix {
    /// Build a prefix from an address, a prefix length and a metric.
    pub fn new(addr: IpAddr, len: u8, metric: u32) -> Result<Prefix, PrefixError> {
        let family = AddressFamily::of(&addr);
        check_len(family, len as u32)?;
        check_metric(metric)?;
        Ok(Prefix {
            family,
            bits: ip_bits(&addr),
            len,
            metric,
            rejected_metric: None,
        })
    }

    /// Parse a prefix from presentation-form address text and either a prefix
    /// length or a subnet mask.
    ///
    /// # Examples
    /// ```
    /// use acrs::models::{MaskKind, Prefix};
    /// let p = Prefix::parse("10.1.2.3", "255.255.0.0", MaskKind::Unspecified, 0).unwrap();
    /// assert_eq!(p.cidr(), "10.1.0.0/16");
    /// ```
    pub fn parse(
        address: &str,
        len_or_mask: &str,
        kind: MaskKind,
        metric: u32,
    ) -> Result<Prefix, PrefixError> {
        let addr: IpAddr = address
            .trim()
            .parse()
            .map_err(|_| PrefixError::InvalidAddress(address.to_string()))?;
        let family = AddressFamily::of(&addr);
        let len_or_mask = len_or_mask.trim();

        let len = match kind {
            MaskKind::PrefixLength => parse_prefix_len(family, len_or_mask)?,
            MaskKind::SubnetMask => parse_subnet_mask(family, len_or_mask)?,
            MaskKind::Unspecified => match parse_prefix_len(family, len_or_mask) {
                Ok(len) => len,
                Err(len_err) => match parse_subnet_mask(family, len_or_mask) {
                    Ok(len) => len,
                    Err(_) if is_decimal(len_or_mask) => return Err(len_err),
                    Err(mask_err) => return Err(mask_err),
                },
            },
        };

        Prefix::new(addr, len, metric)
    }

    /// True while the prefix length and metric are both in range.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Explain why the prefix is invalid, if it is.
    pub fn validate(&self) -> Result<(), PrefixError> {
        check_len(self.family, self.len as u32)?;
        match self.rejected_metric {
            Some(metric) => check_metric(metric),
            None => check_metric(self.metric),
        }
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// The address exactly as it was given, host bits included.
    pub fn address(&self) -> IpAddr {
        self.family.to_ip(self.bits)
    }

    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    pub fn metric(&self) -> u32 {
        self.metric
    }

    /// Change the prefix length. Out-of-range lengths leave the prefix untouched.
    pub fn set_prefix_len(&mut self, len: u8) -> Result<(), PrefixError> {
        check_len(self.family, len as u32)?;
        self.len = len;
        Ok(())
    }

    /// Change the metric.
    ///
    /// An out-of-range metric keeps the previous value but marks the whole
    /// prefix invalid until a valid metric is set again.
    pub fn set_metric(&mut self, metric: u32) -> Result<(), PrefixError> {
        match check_metric(metric) {
            Ok(()) => {
                self.metric = metric;
                self.rejected_metric = None;
                Ok(())
            }
            Err(e) => {
                self.rejected_metric = Some(metric);
                Err(e)
            }
        }
    }

    /// Shorten the prefix by one bit so it also covers its former sibling.
    pub(crate) fn absorb_sibling(&mut self) {
        debug_assert!(self.len > 0, "a /0 has no sibling to absorb");
        self.len -= 1;
    }

    pub fn mask_bits(&self) -> u128 {
        self.derive(get_cidr_mask(self.width(), self.len))
    }

    pub fn hostmask_bits(&self) -> u128 {
        !self.mask_bits() & all_ones(self.width())
    }

    pub fn network_bits(&self) -> u128 {
        self.derive(cut_addr(self.width(), self.bits, self.len))
    }

    pub fn broadcast_bits(&self) -> u128 {
        self.derive(broadcast_addr(self.width(), self.bits, self.len))
    }

    /// Network address: the address with all host bits cleared.
    pub fn network(&self) -> IpAddr {
        self.family.to_ip(self.network_bits())
    }

    /// Highest address in the block.
    pub fn broadcast(&self) -> IpAddr {
        self.family.to_ip(self.broadcast_bits())
    }

    pub fn mask(&self) -> IpAddr {
        self.family.to_ip(self.mask_bits())
    }

    pub fn hostmask(&self) -> IpAddr {
        self.family.to_ip(self.hostmask_bits())
    }

    /// `NETWORK/PREFLEN` without the metric.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.network(), self.len)
    }

    /// True when `other` lies entirely within this prefix's block.
    pub fn contains(&self, other: &Prefix) -> bool {
        self.family == other.family
            && other.len >= self.len
            && other.network_bits() & self.mask_bits() == self.network_bits()
    }

    /// True when `self` and `upper` are the lower and upper halves of the same
    /// one-bit-shorter parent block.
    pub fn is_lower_sibling_of(&self, upper: &Prefix) -> bool {
        if self.family != upper.family || self.len != upper.len || self.len == 0 {
            return false;
        }
        let parent_mask = self.derive(get_cidr_mask(self.width(), self.len - 1));
        let lower = self.network_bits();
        let upper = upper.network_bits();
        lower != upper && lower & parent_mask == lower && upper & parent_mask == lower
    }

    fn width(&self) -> u8 {
        self.family.width()
    }

    // Prefix length is range-checked on every write, so mask calculations cannot fail.
    fn derive(&self, bits: Result<u128, PrefixError>) -> u128 {
        bits.unwrap_or_else(|e| panic!("Error deriving address bits for {}: {}", self.len, e))
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{} in {}", self.network(), self.len, self.metric)
    }
}

impl PartialOrd for Prefix {
    fn partial_cmp(&self, other: &Prefix) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Prefix {
    fn cmp(&self, other: &Prefix) -> Ordering {
        self.family
            .cmp(&other.family)
            .then_with(|| self.network_bits().cmp(&other.network_bits()))
            .then_with(|| self.len.cmp(&other.len))
            .then_with(|| self.metric.cmp(&other.metric))
            .then_with(|| self.bits.cmp(&other.bits))
            .then_with(|| self.rejected_metric.cmp(&other.rejected_metric))
    }
}

/// Serialized form of a [`Prefix`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PrefixRecord {
    /// `NETWORK/PREFLEN` (a subnet mask is also accepted after the slash).
    pub prefix: String,
    #[serde(default)]
    pub metric: u32,
}

impl From<Prefix> for PrefixRecord {
    fn from(prefix: Prefix) -> PrefixRecord {
        PrefixRecord {
            prefix: prefix.cidr(),
            metric: prefix.metric,
        }
    }
}

impl TryFrom<PrefixRecord> for Prefix {
    type Error = PrefixError;

    fn try_from(record: PrefixRecord) -> Result<Prefix, PrefixError> {
        let (addr, len_or_mask) = record
            .prefix
            .split_once('/')
            .ok_or_else(|| PrefixError::InvalidPrefixLength(record.prefix.clone()))?;
        Prefix::parse(addr, len_or_mask, MaskKind::Unspecified, record.metric)
    }
}

fn is_decimal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn check_len(family: AddressFamily, len: u32) -> Result<(), PrefixError> {
    if len > family.width() as u32 {
        return Err(PrefixError::PrefixLengthOutOfRange {
            len,
            max: family.width(),
        });
    }
    Ok(())
}

fn check_metric(metric: u32) -> Result<(), PrefixError> {
    if !(MIN_METRIC..=MAX_METRIC).contains(&metric) {
        return Err(PrefixError::MetricOutOfRange {
            metric,
            min: MIN_METRIC,
            max: MAX_METRIC,
        });
    }
    Ok(())
}

fn parse_prefix_len(family: AddressFamily, text: &str) -> Result<u8, PrefixError> {
    if !is_decimal(text) {
        return Err(PrefixError::InvalidPrefixLength(text.to_string()));
    }
    let len: u32 = text.parse().unwrap_or(u32::MAX);
    check_len(family, len)?;
    Ok(len as u8)
}

fn parse_subnet_mask(family: AddressFamily, text: &str) -> Result<u8, PrefixError> {
    let mask = match family.parse_ip(text) {
        Some(mask) => mask,
        None if text.parse::<IpAddr>().is_ok() => {
            return Err(PrefixError::MaskFamilyMismatch {
                mask: text.to_string(),
                expected: family,
            })
        }
        None => return Err(PrefixError::InvalidMask(text.to_string())),
    };
    mask_to_len(family.width(), ip_bits(&mask)).ok_or_else(|| PrefixError::InvalidMask(text.to_string()))
}
