use core::fmt;
use std::str::FromStr;

use anyhow::bail;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

mod category;
mod place;

pub use category::Category;
pub use place::{PlaceId, PlaceKind};

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum CityId {
    Seoul,
    Busan,
    Jeju,
    Gyeongju,
    Jeonju,
    Suwon,
    Gangneung,
    Sokcho,
    Daegu,
    Yeosu,
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CityId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match CityId::all().into_iter().find(|x| x.slug() == s) {
            Some(x) => Ok(x),
            None => bail!("Unknown city: {s}"),
        }
    }
}

impl CityId {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Seoul,
            Self::Busan,
            Self::Jeju,
            Self::Gyeongju,
            Self::Jeonju,
            Self::Suwon,
            Self::Gangneung,
            Self::Sokcho,
            Self::Daegu,
            Self::Yeosu,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Seoul => "Seoul",
            Self::Busan => "Busan",
            Self::Jeju => "Jeju",
            Self::Gyeongju => "Gyeongju",
            Self::Jeonju => "Jeonju",
            Self::Suwon => "Suwon",
            Self::Gangneung => "Gangneung",
            Self::Sokcho => "Sokcho",
            Self::Daegu => "Daegu",
            Self::Yeosu => "Yeosu",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Seoul => "seoul",
            Self::Busan => "busan",
            Self::Jeju => "jeju",
            Self::Gyeongju => "gyeongju",
            Self::Jeonju => "jeonju",
            Self::Suwon => "suwon",
            Self::Gangneung => "gangneung",
            Self::Sokcho => "sokcho",
            Self::Daegu => "daegu",
            Self::Yeosu => "yeosu",
        }
    }
}
