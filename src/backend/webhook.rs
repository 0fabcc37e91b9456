use crate::backend::traits::PropertyBackend;
use crate::backend::types::{decode_list, BackendError, DeleteRequest};
use crate::config::{ApiConfig, Endpoint};
use crate::models::Property;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Backend reached through the automation platform's webhooks
pub struct WebhookBackend {
    client: Client,
    config: ApiConfig,
}

impl WebhookBackend {
    pub fn new(config: ApiConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(BackendError::Client)?;

        Ok(Self { client, config })
    }

    async fn post_json<T>(&self, endpoint: Endpoint, body: &T) -> Result<(), BackendError>
    where
        T: Serialize + ?Sized + Sync,
    {
        let url = self.config.endpoint(endpoint);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| BackendError::Transport { endpoint, source })?;

        // Only delivery matters; the webhook's reply is not part of the contract.
        if !response.status().is_success() {
            warn!("{:?} endpoint returned status: {}", endpoint, response.status());
        }

        Ok(())
    }
}

#[async_trait]
impl PropertyBackend for WebhookBackend {
    async fn list_all(&self) -> Result<Vec<Property>, BackendError> {
        let endpoint = Endpoint::ListAll;
        let url = self.config.endpoint(endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| BackendError::Transport { endpoint, source })?;

        if !response.status().is_success() {
            warn!("List endpoint returned status: {}", response.status());
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| BackendError::Transport { endpoint, source })?;

        debug!("Downloaded {} bytes", body.len());

        let properties = decode_list(&body)?;
        info!("Fetched {} properties", properties.len());
        Ok(properties)
    }

    async fn create(&self, property: &Property) -> Result<(), BackendError> {
        self.post_json(Endpoint::Create, property).await
    }

    async fn update(&self, property: &Property) -> Result<(), BackendError> {
        self.post_json(Endpoint::Update, property).await
    }

    async fn delete(&self, id: &str) -> Result<(), BackendError> {
        self.post_json(Endpoint::Delete, &DeleteRequest { id }).await
    }

    fn backend_name(&self) -> &'static str {
        "n8n webhooks"
    }
}
