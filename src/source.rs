use std::time::Duration;

use feriados_parser::{parse_holidays, Holiday};
use log::{debug, info};
use reqwest::{Client, Response};

use crate::Error;

pub const DEFAULT_BASE_URL: &str = "https://www.argentina.gob.ar/interior";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

const PAGE_PREFIX: &str = "feriados-nacionales-";

pub fn holidays_url(base_url: &str, year: i32) -> String {
    format!("{}/{PAGE_PREFIX}{year}", base_url.trim_end_matches('/'))
}

/// Inverse of [`holidays_url`].
pub fn year_from_url(url: &str) -> Option<i32> {
    let year = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()?
        .strip_prefix(PAGE_PREFIX)?;

    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    year.parse().ok()
}

/// The government page listing one year's holidays.
pub struct Source {
    client: Client,
    base_url: String,
}

impl Source {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout)
    }

    pub fn with_base_url<S: Into<String>>(base_url: S, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn url(&self, year: i32) -> String {
        holidays_url(&self.base_url, year)
    }

    /// Single GET, no retries. Non-2xx answers and empty bodies are errors.
    pub async fn fetch_page(&self, year: i32) -> Result<String, Error> {
        let url = self.url(year);
        info!("Fetching {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(Response::error_for_status);

        let body = match response {
            Ok(response) => response.text().await,
            Err(err) => Err(err),
        }
        .map_err(|source| Error::Fetch {
            url: url.clone(),
            source,
        })?;

        debug!("Received {} bytes", body.len());

        if body.trim().is_empty() {
            return Err(Error::EmptyBody { url });
        }

        Ok(body)
    }

    pub async fn holidays(&self, year: i32) -> Result<Vec<Holiday>, Error> {
        let page = self.fetch_page(year).await?;
        Ok(parse_holidays(page, year)?)
    }
}
