use crate::core::{AddressResolver, DirectoryPayload, NormalizedPostalCode, ResolverError};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_DIRECTORY_URL: &str = "https://viacep.com.br";

/// Resolver backed by a ViaCEP-compatible HTTP directory.
#[derive(Debug, Clone)]
pub struct ViaCepResolver {
    client: Client,
    base_url: String,
}

impl ViaCepResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn lookup_url(&self, code: &NormalizedPostalCode) -> String {
        format!("{}/ws/{}/json/", self.base_url, code)
    }
}

#[async_trait]
impl AddressResolver for ViaCepResolver {
    async fn resolve(
        &self,
        code: &NormalizedPostalCode,
    ) -> std::result::Result<DirectoryPayload, ResolverError> {
        let url = self.lookup_url(code);
        tracing::debug!("Making directory request to: {}", url);
        let response = self.client.get(&url).send().await?;

        tracing::debug!("Directory response status: {}", response.status());
        if !response.status().is_success() {
            return Err(ResolverError::Status(response.status().as_u16()));
        }

        // Body read errors are transport failures; only JSON errors are decode failures.
        let body = response.bytes().await?;
        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(|e| ResolverError::Decode(e.to_string()))?;

        DirectoryPayload::try_from(value)
    }
}
