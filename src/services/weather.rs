use geo::Point;
use serde::Deserialize;
use tracing::{debug, warn};
use ureq::Agent;

use crate::{
    http::{self, FetchError},
    utils::capitalize,
};

pub const ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Clone, Debug, PartialEq)]
pub struct Weather {
    /// Celsius.
    pub temperature: f64,
    pub description: String,
    pub icon: String,
}

impl Weather {
    pub fn icon_url(&self) -> String {
        format!("http://openweathermap.org/img/wn/{}@2x.png", self.icon)
    }
}

pub struct WeatherClient {
    agent: Agent,
    key: Option<String>,
    endpoint: String,
}

impl WeatherClient {
    pub fn new(agent: Agent, key: Option<String>) -> Self {
        Self {
            agent,
            key,
            endpoint: ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn current(&self, point: Point) -> Option<Weather> {
        let key = self.key.as_deref()?;
        match self.fetch(key, point) {
            Ok(weather) => weather,
            Err(err) => {
                warn!(%err, "weather lookup failed");
                None
            }
        }
    }

    fn fetch(&self, key: &str, point: Point) -> Result<Option<Weather>, FetchError> {
        debug!(lat = point.y(), lng = point.x(), "fetching weather");
        let response: RawWeather = http::get_json(
            self.agent
                .get(&self.endpoint)
                .query("lat", &point.y().to_string())
                .query("lon", &point.x().to_string())
                .query("appid", key)
                .query("units", "metric"),
        )?;
        Ok(response.refine())
    }
}

#[derive(Deserialize)]
struct RawWeather {
    main: RawMain,
    #[serde(default)]
    weather: Vec<RawCondition>,
}

#[derive(Deserialize)]
struct RawMain {
    temp: f64,
}

#[derive(Deserialize)]
struct RawCondition {
    description: String,
    icon: String,
}

impl RawWeather {
    fn refine(self) -> Option<Weather> {
        let condition = self.weather.into_iter().next()?;
        Some(Weather {
            temperature: self.main.temp,
            description: condition.description,
            icon: condition.icon,
        })
    }
}

pub fn describe(weather: Option<&Weather>) -> Vec<String> {
    match weather {
        Some(x) => vec![
            format!("🌡️ {:?}°C  {}", x.temperature, capitalize(&x.description)),
            format!("   {}", x.icon_url()),
        ],
        None => vec!["☁️ Weather info unavailable".to_string()],
    }
}
