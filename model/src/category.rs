use core::fmt;

use serde::{Deserialize, Serialize};

/// Tag shown next to every catalog entry. Restaurants reuse some of the
/// attraction tags (a pizza place can be a "hot place").
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    History,
    NightView,
    Shopping,
    Nature,
    Activity,
    Noodles,
    Korean,
    StreetFood,
    Cafe,
    Barbecue,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::History => "역사/문화",
            Self::NightView => "야경/뷰",
            Self::Shopping => "쇼핑/핫플",
            Self::Nature => "힐링/자연",
            Self::Activity => "체험/액티비티",
            Self::Noodles => "국수/면",
            Self::Korean => "전통한식",
            Self::StreetFood => "길거리음식",
            Self::Cafe => "카페/디저트",
            Self::Barbecue => "바베큐/고기",
        }
    }

    pub fn english(&self) -> &'static str {
        match self {
            Self::History => "History & Culture",
            Self::NightView => "Night View",
            Self::Shopping => "Shopping & Hot Places",
            Self::Nature => "Nature & Healing",
            Self::Activity => "Activities",
            Self::Noodles => "Noodles",
            Self::Korean => "Traditional Korean",
            Self::StreetFood => "Street Food",
            Self::Cafe => "Cafe & Dessert",
            Self::Barbecue => "Barbecue",
        }
    }
}
