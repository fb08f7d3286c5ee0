use geo::Point;
use itertools::Itertools;

use crate::{CityId, Category, PlaceId, PlaceKind};

mod cities;

pub use cities::CITIES;

pub struct City {
    pub id: CityId,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub spots: &'static [Spot],
    pub foods: &'static [Food],
}

pub struct Spot {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub category: Category,
}

pub struct Food {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub rating: f32,
    pub category: Category,
}

const fn spot(name: &'static str, lat: f64, lng: f64, category: Category) -> Spot {
    Spot {
        name,
        lat,
        lng,
        category,
    }
}

const fn food(name: &'static str, lat: f64, lng: f64, rating: f32, category: Category) -> Food {
    Food {
        name,
        lat,
        lng,
        rating,
        category,
    }
}

/// A catalog record resolved by id, whichever list it came from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Place {
    pub id: PlaceId,
    pub name: &'static str,
    pub point: Point,
    pub category: Category,
    pub rating: Option<f32>,
}

impl Place {
    pub fn kind(&self) -> PlaceKind {
        self.id.kind
    }

    pub fn label(&self) -> String {
        format!("{} [{}]", self.name, self.category)
    }
}

pub fn city(id: CityId) -> &'static City {
    &CITIES[id as usize]
}

impl City {
    pub fn center(&self) -> Point {
        Point::new(self.lng, self.lat)
    }

    pub fn place(&self, id: PlaceId) -> Option<Place> {
        match id.kind {
            PlaceKind::Spot => self.spots.get(id.index).map(|x| Place {
                id,
                name: x.name,
                point: Point::new(x.lng, x.lat),
                category: x.category,
                rating: None,
            }),
            PlaceKind::Food => self.foods.get(id.index).map(|x| Place {
                id,
                name: x.name,
                point: Point::new(x.lng, x.lat),
                category: x.category,
                rating: Some(x.rating),
            }),
        }
    }

    pub fn place_ids(&self, kind: PlaceKind) -> Vec<PlaceId> {
        let len = match kind {
            PlaceKind::Spot => self.spots.len(),
            PlaceKind::Food => self.foods.len(),
        };
        (0..len).map(|index| PlaceId { kind, index }).collect()
    }

    pub fn places(&self, kind: PlaceKind) -> Vec<Place> {
        self.place_ids(kind)
            .into_iter()
            .flat_map(|x| self.place(x))
            .collect()
    }
}

fn listing(place: &Place) -> String {
    let mut line = format!("- {} {} ({})", place.id, place.label(), place.category.english());
    if let Some(rating) = place.rating {
        line.push_str(&format!(" ⭐{rating:.1}"));
    }
    line
}

pub fn print() {
    for id in CityId::all() {
        let city = city(id);
        println!("# {} ({})", city.name, id.slug());
        for (heading, kind) in [("Spots", PlaceKind::Spot), ("Restaurants", PlaceKind::Food)] {
            println!("## {heading}");
            for x in city.places(kind) {
                println!("{}", listing(&x));
            }
        }
        println!();
    }
    println!(
        "Cities: {}",
        CityId::all().iter().map(|x| x.slug()).join(", ")
    );
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_matches_ids() {
        for id in CityId::all() {
            assert_eq!(city(id).id, id);
        }
    }

    #[test]
    fn names_are_unique_within_a_city() {
        for x in &CITIES {
            let mut names = HashSet::new();
            for place in x.places(PlaceKind::Spot).iter().chain(&x.places(PlaceKind::Food)) {
                assert!(names.insert(place.name), "duplicate {} in {}", place.name, x.name);
            }
            assert_eq!(names.len(), 10);
        }
    }

    #[test]
    fn lookup_by_id() {
        let seoul = city(CityId::Seoul);
        let palace = seoul.place(PlaceId::spot(0)).unwrap();
        assert_eq!(palace.name, "경복궁 (Gyeongbokgung Palace)");
        assert_eq!(palace.point.y(), 37.5796);
        assert_eq!(palace.point.x(), 126.977);
        assert_eq!(palace.rating, None);
        assert_eq!(palace.label(), "경복궁 (Gyeongbokgung Palace) [역사/문화]");

        let bbq = seoul.place(PlaceId::food(4)).unwrap();
        assert_eq!(bbq.kind(), PlaceKind::Food);
        assert_eq!(bbq.rating, Some(4.6));

        assert!(seoul.place(PlaceId::food(5)).is_none());
    }

    #[test]
    fn coordinates_are_in_korea() {
        for x in &CITIES {
            for place in x.places(PlaceKind::Spot).iter().chain(&x.places(PlaceKind::Food)) {
                assert!((33.0..39.0).contains(&place.point.y()), "{}", place.name);
                assert!((126.0..130.0).contains(&place.point.x()), "{}", place.name);
            }
        }
    }

    #[test]
    fn listing_shows_english_category_and_rating() {
        let seoul = city(CityId::Seoul);
        assert_eq!(
            listing(&seoul.place(PlaceId::spot(0)).unwrap()),
            "- s1 경복궁 (Gyeongbokgung Palace) [역사/문화] (History & Culture)"
        );
        assert!(listing(&seoul.place(PlaceId::food(4)).unwrap()).ends_with(" ⭐4.6"));
    }
}
