use core::fmt;
use std::str::FromStr;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlaceKind {
    Spot,
    Food,
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spot => write!(f, "Spot"),
            Self::Food => write!(f, "Food"),
        }
    }
}

impl PlaceKind {
    pub fn prefix(&self) -> char {
        match self {
            Self::Spot => 's',
            Self::Food => 'f',
        }
    }
}

/// Position of a record in its city's spot or food list. Written as `s1`,
/// `f3`, ... (1-based) on the command line and in output.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct PlaceId {
    pub kind: PlaceKind,
    pub index: usize,
}

impl PlaceId {
    pub fn spot(index: usize) -> Self {
        Self {
            kind: PlaceKind::Spot,
            index,
        }
    }

    pub fn food(index: usize) -> Self {
        Self {
            kind: PlaceKind::Food,
            index,
        }
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.index + 1)
    }
}

impl fmt::Debug for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for PlaceId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let kind = match s.chars().next().map(|x| x.to_ascii_lowercase()) {
            Some('s') => PlaceKind::Spot,
            Some('f') => PlaceKind::Food,
            _ => bail!("Place ids look like s1 or f2, got: {s:?}"),
        };
        let number: usize = s[1..]
            .parse()
            .with_context(|| format!("Invalid place number in {s:?}"))?;
        if number == 0 {
            bail!("Place numbers start at 1: {s:?}");
        }

        Ok(Self {
            kind,
            index: number - 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_place_id() {
        assert_eq!("s1".parse::<PlaceId>().unwrap(), PlaceId::spot(0));
        assert_eq!("F5".parse::<PlaceId>().unwrap(), PlaceId::food(4));
        assert!("s0".parse::<PlaceId>().is_err());
        assert!("x1".parse::<PlaceId>().is_err());
        assert!("s".parse::<PlaceId>().is_err());
        assert!("".parse::<PlaceId>().is_err());
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(PlaceId::spot(2).to_string(), "s3");
        assert_eq!(PlaceId::food(0).to_string(), "f1");
    }

    #[test]
    fn spots_order_before_foods() {
        assert!(PlaceId::spot(4) < PlaceId::food(0));
    }

    #[test]
    fn serializes_as_string() {
        assert_eq!(serde_json::to_string(&PlaceId::food(1)).unwrap(), "\"f2\"");
        let id: PlaceId = serde_json::from_str("\"s4\"").unwrap();
        assert_eq!(id, PlaceId::spot(3));
    }
}
