pub mod traits;
pub mod types;
pub mod webhook;

pub use traits::PropertyBackend;
pub use types::BackendError;
pub use webhook::WebhookBackend;
