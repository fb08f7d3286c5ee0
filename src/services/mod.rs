pub mod exchange;
pub mod weather;

pub use exchange::ExchangeClient;
pub use weather::WeatherClient;
