use crate::backend::BackendError;
use crate::models::Property;
use async_trait::async_trait;

/// Remote system of record for the property catalog.
/// Writes report success purely on delivery; their response bodies are ignored.
#[async_trait]
pub trait PropertyBackend: Send + Sync {
    /// Fetch every property
    async fn list_all(&self) -> Result<Vec<Property>, BackendError>;

    async fn create(&self, property: &Property) -> Result<(), BackendError>;

    async fn update(&self, property: &Property) -> Result<(), BackendError>;

    async fn delete(&self, id: &str) -> Result<(), BackendError>;

    /// Get the name of the backend, for logs
    fn backend_name(&self) -> &'static str;
}
