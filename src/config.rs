use std::time::Duration;

pub const DEFAULT_RELAY: &str = "https://corsproxy.io/?";

const WEBHOOK_BASE: &str = "https://n8n-nikki-j977.onrender.com/webhook";

/// Remote operations exposed by the webhook backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ListAll,
    Create,
    Update,
    Delete,
}

/// Where and how the backend is reached
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Prefix prepended to every endpoint URL; `None` calls endpoints directly
    pub relay: Option<String>,
    pub list_url: String,
    pub create_url: String,
    pub update_url: String,
    pub delete_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            relay: Some(DEFAULT_RELAY.to_string()),
            list_url: format!("{WEBHOOK_BASE}/a4fe9fac-7c6d-4ca1-8de0-83c240fa7ec5"),
            create_url: format!("{WEBHOOK_BASE}/411ba450-22c1-46e9-8eca-272d1b101d26"),
            update_url: format!("{WEBHOOK_BASE}/5a94a757-311c-4b99-82c6-6f72b5c1f898"),
            delete_url: format!("{WEBHOOK_BASE}/a10b094c-bcb8-493f-b74d-4eed90276286"),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Full URL for an endpoint, relay prefix included
    pub fn endpoint(&self, endpoint: Endpoint) -> String {
        let target = match endpoint {
            Endpoint::ListAll => &self.list_url,
            Endpoint::Create => &self.create_url,
            Endpoint::Update => &self.update_url,
            Endpoint::Delete => &self.delete_url,
        };
        match &self.relay {
            Some(relay) => format!("{relay}{target}"),
            None => target.clone(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn endpoints_go_through_relay_by_default() {
        let config = ApiConfig::default();
        assert_eq!(
            config.endpoint(Endpoint::ListAll),
            "https://corsproxy.io/?https://n8n-nikki-j977.onrender.com/webhook/a4fe9fac-7c6d-4ca1-8de0-83c240fa7ec5"
        );
    }

    #[test]
    fn endpoints_skip_relay_when_disabled() {
        let config = ApiConfig {
            relay: None,
            delete_url: "http://localhost:5678/webhook/delete".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(
            config.endpoint(Endpoint::Delete),
            "http://localhost:5678/webhook/delete"
        );
    }
}
