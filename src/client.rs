use url::Url;

use crate::error::Result;
use crate::model::Mapping;
use crate::routes;

/// Talks to the service's save endpoint.
#[derive(Debug, Clone)]
pub struct SaveClient {
    http: reqwest::Client,
    save_url: Url,
}

impl SaveClient {
    /// Client for the service at `base`; only its origin is used.
    pub fn new(base: &Url) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base)
    }

    pub fn with_client(http: reqwest::Client, base: &Url) -> Result<Self> {
        let save_url = routes::save_url(&base.origin().ascii_serialization())?;
        Ok(Self { http, save_url })
    }

    pub fn save_url(&self) -> &Url {
        &self.save_url
    }

    /// Posts one mapping. Anything other than a 2xx answer is an error;
    /// the response body is ignored.
    pub async fn save(&self, mapping: &Mapping) -> Result<()> {
        tracing::debug!(
            source = %mapping.source,
            destination = %mapping.destination,
            "posting mapping"
        );

        self.http
            .post(self.save_url.clone())
            .json(mapping)
            .send()
            .await?
            .error_for_status()?;

        if mapping.is_removal() {
            tracing::info!(source = %mapping.source, "mapping removed");
        } else {
            tracing::info!(source = %mapping.source, destination = %mapping.destination, "mapping saved");
        }
        Ok(())
    }

    /// Posts each mapping in order, stopping at the first failure.
    pub async fn save_all(&self, mappings: &[Mapping]) -> Result<usize> {
        for mapping in mappings {
            self.save(mapping).await?;
        }
        Ok(mappings.len())
    }
}
