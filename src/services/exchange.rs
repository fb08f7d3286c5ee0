use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::{debug, warn};
use ureq::Agent;

use crate::{
    config::EXCHANGE_API_KEY,
    http::{self, FetchError},
    utils::thousands,
};

pub const ENDPOINT: &str = "https://v6.exchangerate-api.com/v6";

pub struct ExchangeClient {
    agent: Agent,
    key: Option<String>,
    endpoint: String,
}

impl ExchangeClient {
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

    /// KRW per USD, or `None` when there is no key or the call fails.
    pub fn usd_to_krw(&self) -> Option<f64> {
        let key = self.key.as_deref()?;
        match self.fetch(key) {
            Ok(rate) => rate,
            Err(err) => {
                warn!(%err, "exchange rate lookup failed");
                None
            }
        }
    }

    fn fetch(&self, key: &str) -> Result<Option<f64>, FetchError> {
        debug!("fetching USD rates");
        let response: RatesResponse =
            http::get_json(self.agent.get(&format!("{}/{key}/latest/USD", self.endpoint)))?;
        Ok(response.conversion_rates.get("KRW").copied())
    }
}

#[derive(Deserialize)]
struct RatesResponse {
    #[serde(default)]
    conversion_rates: BTreeMap<String, f64>,
}

pub fn describe(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("💰 Exchange rate: 1 USD ≈ {} KRW", thousands(rate)),
        None => format!("💰 Exchange rate unavailable (check {EXCHANGE_API_KEY})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{closed_port, serve_once};

    fn client(endpoint: String) -> ExchangeClient {
        ExchangeClient::new(http::agent(), Some("key".to_string())).with_endpoint(endpoint)
    }

    #[test]
    fn reads_krw() {
        let url = serve_once(
            200,
            r#"{"result": "success", "base_code": "USD", "conversion_rates": {"USD": 1, "KRW": 1382.4512, "JPY": 149.8}}"#,
        );
        let rate = client(url).usd_to_krw();
        assert_eq!(rate, Some(1382.4512));
        assert_eq!(describe(rate), "💰 Exchange rate: 1 USD ≈ 1,382 KRW");
    }

    #[test]
    fn non_200_is_unavailable() {
        let url = serve_once(403, r#"{"result": "error", "error-type": "invalid-key"}"#);
        let rate = client(url).usd_to_krw();
        assert_eq!(rate, None);
        assert_eq!(
            describe(rate),
            "💰 Exchange rate unavailable (check EXCHANGE_API_KEY)"
        );
    }

    #[test]
    fn missing_field_or_network_is_unavailable() {
        let url = serve_once(200, r#"{"result": "success"}"#);
        assert_eq!(client(url).usd_to_krw(), None);
        assert_eq!(client(closed_port()).usd_to_krw(), None);
    }

    #[test]
    fn no_key_no_request() {
        let client = ExchangeClient::new(http::agent(), None).with_endpoint(closed_port());
        assert_eq!(client.usd_to_krw(), None);
    }
}
