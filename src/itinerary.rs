use std::{collections::BTreeSet, fmt};

use thiserror::Error;

use crate::{
    catalog::{City, Place},
    map::{Icon, MapView, Marker},
    CityId, PlaceId, PlaceKind,
};

pub const MAP_ZOOM: u8 = 12;

#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    #[error("{0} is not in the {1} catalog")]
    Unknown(PlaceId, CityId),
    #[error("{0} is not a {1}")]
    WrongKind(PlaceId, PlaceKind),
    #[error("{0} appears more than once in the order")]
    Duplicate(PlaceId),
    #[error("{0} is in the order but was not selected")]
    NotSelected(PlaceId),
    #[error("{0} was selected but is missing from the order")]
    Missing(PlaceId),
}

/// Chosen spots and restaurants plus the order to visit them in. `order`
/// must be a permutation of `spots ∪ foods`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub spots: BTreeSet<PlaceId>,
    pub foods: BTreeSet<PlaceId>,
    pub order: Vec<PlaceId>,
}

impl Selection {
    /// Everything in the city, spots first, in catalog order.
    pub fn all(city: &City) -> Self {
        Self::from_order(
            city.place_ids(PlaceKind::Spot)
                .into_iter()
                .chain(city.place_ids(PlaceKind::Food))
                .collect(),
        )
    }

    /// The order doubles as the selection.
    pub fn from_order(order: Vec<PlaceId>) -> Self {
        let (spots, foods) = order.iter().partition(|x| x.kind == PlaceKind::Spot);
        Self {
            spots,
            foods,
            order,
        }
    }

    /// Selected ids before any reordering: spots, then restaurants.
    pub fn selected(&self) -> impl Iterator<Item = PlaceId> + '_ {
        self.spots.iter().chain(&self.foods).copied()
    }

    pub fn contains(&self, id: &PlaceId) -> bool {
        self.spots.contains(id) || self.foods.contains(id)
    }
}

pub struct Itinerary {
    pub city: &'static City,
    pub stops: Vec<Place>,
}

impl Itinerary {
    pub fn build(city: &'static City, selection: &Selection) -> Result<Self, OrderError> {
        for (ids, kind) in [
            (&selection.spots, PlaceKind::Spot),
            (&selection.foods, PlaceKind::Food),
        ] {
            for id in ids {
                if id.kind != kind {
                    return Err(OrderError::WrongKind(*id, kind));
                }
                if city.place(*id).is_none() {
                    return Err(OrderError::Unknown(*id, city.id));
                }
            }
        }

        let mut seen = BTreeSet::new();
        let mut stops = Vec::with_capacity(selection.order.len());
        for id in &selection.order {
            if !seen.insert(*id) {
                return Err(OrderError::Duplicate(*id));
            }
            if !selection.contains(id) {
                return Err(OrderError::NotSelected(*id));
            }
            stops.push(city.place(*id).ok_or(OrderError::Unknown(*id, city.id))?);
        }

        if let Some(id) = selection.selected().find(|x| !seen.contains(x)) {
            return Err(OrderError::Missing(id));
        }

        Ok(Self { city, stops })
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn map_view(&self) -> MapView {
        MapView {
            center: self.city.center(),
            zoom: MAP_ZOOM,
            markers: self
                .stops
                .iter()
                .map(|x| {
                    let icon = match x.kind() {
                        PlaceKind::Spot => Icon::Star,
                        PlaceKind::Food => Icon::RedPin,
                    };
                    Marker::new(x.point, x.name, icon)
                })
                .collect(),
            route: true,
        }
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📋 Your Final Itinerary")?;
        writeln!(f, "City: {}", self.city.name)?;
        for (i, x) in self.stops.iter().enumerate() {
            write!(f, "{}. {}", i + 1, x.label())?;
            if let Some(rating) = x.rating {
                write!(f, " ⭐{rating:.1}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
