use std::fmt;

use anyhow::Result;
use geo::Point;
use inquire::{
    validator::Validation, Autocomplete, Confirm, InquireError, MultiSelect, Select, Text,
};

use crate::{
    catalog::{self, City},
    itinerary::Selection,
    utils::parse_location,
    CityId, PlaceId, PlaceKind,
};

struct CityChoice(&'static City);

impl fmt::Display for CityChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name)
    }
}

#[derive(Clone)]
struct PlaceChoice {
    id: PlaceId,
    label: String,
}

impl fmt::Display for PlaceChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn choices(city: &City, ids: &[PlaceId]) -> Vec<PlaceChoice> {
    ids.iter()
        .flat_map(|id| city.place(*id))
        .map(|x| PlaceChoice {
            id: x.id,
            label: match x.rating {
                Some(rating) => format!("{} ⭐{rating:.1}", x.label()),
                None => x.label(),
            },
        })
        .collect()
}

pub fn pick_city() -> Result<CityId> {
    let options = CityId::all()
        .into_iter()
        .map(|x| CityChoice(catalog::city(x)))
        .collect();
    let choice = Select::new("Choose a city:", options).prompt()?;
    Ok(choice.0.id)
}

fn pick_places(city: &City, kind: PlaceKind, message: &str) -> Result<Vec<PlaceId>> {
    let options = choices(city, &city.place_ids(kind));
    if options.is_empty() {
        return Ok(Vec::new());
    }
    let picked = MultiSelect::new(message, options)
        .with_all_selected_by_default()
        .with_help_message("space to toggle, enter to confirm")
        .prompt()?;
    Ok(picked.into_iter().map(|x| x.id).collect())
}

/// Asks for the next stop until one is left. Starts from the order the
/// places were picked in.
pub fn pick_order(city: &City, selected: Vec<PlaceId>) -> Result<Vec<PlaceId>> {
    if selected.len() < 2 {
        return Ok(selected);
    }

    let mut remaining = choices(city, &selected);
    println!("Current order:");
    for (i, x) in remaining.iter().enumerate() {
        println!("  {}. {x}", i + 1);
    }
    if !Confirm::new("Reorder stops?").with_default(false).prompt()? {
        return Ok(selected);
    }

    let mut order = Vec::with_capacity(remaining.len());
    while remaining.len() > 1 {
        let next = Select::new(&format!("Stop {}:", order.len() + 1), remaining.clone()).prompt()?;
        remaining.retain(|x| x.id != next.id);
        order.push(next.id);
    }
    order.extend(remaining.into_iter().map(|x| x.id));
    Ok(order)
}

pub fn pick_selection(city: &City) -> Result<Selection> {
    let spots = pick_places(city, PlaceKind::Spot, "Tourist attractions:")?;
    let foods = pick_places(city, PlaceKind::Food, "Restaurants (⭐3.5+):")?;
    let combined = spots.iter().chain(&foods).copied().collect();
    let order = pick_order(city, combined)?;

    Ok(Selection {
        spots: spots.into_iter().collect(),
        foods: foods.into_iter().collect(),
        order,
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Search,
    SetLocation,
    ClearLocation,
    WriteMap,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Search => "🔍 Search places",
            Self::SetLocation => "📍 Set my location",
            Self::ClearLocation => "✖ Forget my location",
            Self::WriteMap => "🗺️ Write the map",
            Self::Quit => "Quit",
        })
    }
}

fn cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Esc and ctrl-c both mean quit.
pub fn pick_action(located: bool) -> Result<Action> {
    let mut options = vec![Action::Search, Action::SetLocation];
    if located {
        options.push(Action::ClearLocation);
    }
    options.extend([Action::WriteMap, Action::Quit]);

    match Select::new("What next?", options).prompt() {
        Ok(x) => Ok(x),
        Err(err) if cancelled(&err) => Ok(Action::Quit),
        Err(err) => Err(err.into()),
    }
}

/// `None` when the prompt is cancelled.
pub fn ask_location() -> Result<Option<Point>> {
    let answer = Text::new("Your location (lat,lng):")
        .with_help_message("e.g. 37.5665,126.9780")
        .with_validator(|input: &str| {
            Ok::<_, inquire::CustomUserError>(match parse_location(input) {
                Ok(_) => Validation::Valid,
                Err(err) => Validation::Invalid(err.to_string().into()),
            })
        })
        .prompt();
    match answer {
        Ok(x) => Ok(Some(parse_location(&x)?)),
        Err(err) if cancelled(&err) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// `None` when the prompt is cancelled.
pub fn ask_query(history: &[String]) -> Result<Option<String>> {
    let answer = Text::new("Search for a place:")
        .with_autocomplete(QueryAutocomplete {
            queries: history.to_vec(),
        })
        .prompt();
    match answer {
        Ok(x) => Ok(Some(x)),
        Err(err) if cancelled(&err) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Suggests earlier queries of this session, most recent first.
#[derive(Clone)]
struct QueryAutocomplete {
    queries: Vec<String>,
}

impl QueryAutocomplete {
    fn matches(&self, input: &str) -> Vec<String> {
        let input = input.trim();
        if input.is_empty() {
            return Vec::new();
        }
        let mut suggestions: Vec<String> = Vec::new();
        for x in self.queries.iter().rev() {
            if x.starts_with(input) && !suggestions.contains(x) {
                suggestions.push(x.clone());
            }
        }
        suggestions
    }
}

impl Autocomplete for QueryAutocomplete {
    fn get_suggestions(
        &mut self,
        input: &str,
    ) -> std::result::Result<Vec<String>, inquire::CustomUserError> {
        Ok(self.matches(input))
    }

    fn get_completion(
        &mut self,
        input: &str,
        highlighted_suggestion: Option<String>,
    ) -> std::result::Result<inquire::autocompletion::Replacement, inquire::CustomUserError> {
        if let Some(x) = highlighted_suggestion {
            return Ok(Some(x));
        }
        Ok(self.matches(input).into_iter().next())
    }
}
