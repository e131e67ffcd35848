//! HTTP source for the live results endpoint.

use tracing::{debug, info};

use crate::Result;
use crate::ResultsError;
use crate::source::ResultsSource;
use crate::wire::RawResult;

/// Source that issues one `GET` against a fixed results endpoint.
///
/// No parameters, no authentication headers. A non-2xx status or a body that
/// is not a JSON array of records is an error; both end the load.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Create a source for the given endpoint URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), url: url.into() }
    }

    /// The endpoint this source reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl ResultsSource for HttpSource {
    async fn fetch(&mut self) -> Result<Vec<RawResult>> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResultsError::status(status.as_u16()));
        }

        let records: Vec<RawResult> = response.json().await?;
        info!("Fetched {} raw records from {}", records.len(), self.url);
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("endpoint {}", self.url)
    }
}
