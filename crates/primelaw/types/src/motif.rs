//! Motif and domain labels
//!
//! Every prime gap carries a canonical two-part label: a family tag plus an
//! optional sub-index. The unit motifs `U0` (the degenerate seed gap 0) and
//! `U1` (the 2 -> 3 step) have no sub-index. Every other gap between odd
//! primes is even and factors as 2^k * odd:
//!
//! - pure powers of two, gap = 2^(x+1), are labelled `E1.x`
//! - everything else, gap = 2^k * (2x + 3), is labelled `E{k+1}.x`
//!
//! The mapping is one-to-one: a label always decodes back to the gap it was
//! derived from. Stripping the sub-index yields the motif's domain.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::ParseLabelError;

/// Canonical motif label for a prime gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motif {
    /// Unit motifs `U0` and `U1`.
    Unit(u8),
    /// Even-gap motifs `E{family}.{sub}`.
    Even { family: u32, sub: u64 },
}

impl Motif {
    /// Seed motif for the degenerate gap 0 at index 1.
    pub const SEED: Motif = Motif::Unit(0);

    /// Classify a gap into its canonical motif.
    ///
    /// Returns `None` for odd gaps greater than 1: those cannot occur
    /// between odd primes and have no label.
    pub fn from_gap(gap: u64) -> Option<Self> {
        match gap {
            0 => Some(Self::Unit(0)),
            1 => Some(Self::Unit(1)),
            g if g % 2 == 1 => None,
            g => {
                let k = g.trailing_zeros();
                let odd = g >> k;
                if odd == 1 {
                    // Pure power of two: 2^(x+1) -> E1.x
                    Some(Self::Even {
                        family: 1,
                        sub: u64::from(k - 1),
                    })
                } else {
                    // 2^k * (2x + 3) -> E{k+1}.x
                    Some(Self::Even {
                        family: k + 1,
                        sub: (odd - 3) / 2,
                    })
                }
            }
        }
    }

    /// Decode the label back to its gap.
    ///
    /// Returns `None` if the label is not canonical (unit index above 1,
    /// family 0) or the decoded gap would overflow a `u64`.
    pub fn gap(&self) -> Option<u64> {
        match *self {
            Self::Unit(n) if n <= 1 => Some(u64::from(n)),
            Self::Unit(_) => None,
            Self::Even { family: 0, .. } => None,
            Self::Even { family: 1, sub } => {
                if sub >= 63 {
                    return None;
                }
                Some(1u64 << (sub + 1))
            }
            Self::Even { family, sub } => {
                let pow = 1u64.checked_shl(family - 1)?;
                let odd = sub.checked_mul(2)?.checked_add(3)?;
                odd.checked_mul(pow)
            }
        }
    }

    /// The coarser domain this motif belongs to: the family tag with the
    /// sub-index stripped.
    pub fn domain(&self) -> Domain {
        match *self {
            Self::Unit(n) => Domain::Unit(n),
            Self::Even { family, .. } => Domain::Even(family),
        }
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Unit(n) => write!(f, "U{n}"),
            Self::Even { family, sub } => write!(f, "E{family}.{sub}"),
        }
    }
}

impl FromStr for Motif {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLabelError(s.to_string());
        if let Some(n) = s.strip_prefix('U') {
            let n: u8 = n.parse().map_err(|_| err())?;
            if n > 1 {
                return Err(err());
            }
            return Ok(Self::Unit(n));
        }
        let body = s.strip_prefix('E').ok_or_else(err)?;
        let (family, sub) = body.split_once('.').ok_or_else(err)?;
        let motif = Self::Even {
            family: family.parse().map_err(|_| err())?,
            sub: sub.parse().map_err(|_| err())?,
        };
        // Reject labels that do not decode to a gap (family 0, overflow).
        if motif.gap().is_none() {
            return Err(err());
        }
        Ok(motif)
    }
}

impl Serialize for Motif {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Motif {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Domain label: a motif family with sub-index detail removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Unit domains `U0` and `U1` (each unit motif is its own domain).
    Unit(u8),
    /// Even-gap domains `E{family}`.
    Even(u32),
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Unit(n) => write!(f, "U{n}"),
            Self::Even(family) => write!(f, "E{family}"),
        }
    }
}

impl FromStr for Domain {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLabelError(s.to_string());
        if let Some(n) = s.strip_prefix('U') {
            let n: u8 = n.parse().map_err(|_| err())?;
            if n > 1 {
                return Err(err());
            }
            return Ok(Self::Unit(n));
        }
        let family = s.strip_prefix('E').ok_or_else(err)?;
        let family: u32 = family.parse().map_err(|_| err())?;
        if family == 0 {
            return Err(err());
        }
        Ok(Self::Even(family))
    }
}

impl Serialize for Domain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Domain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
