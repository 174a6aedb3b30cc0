//! Application Context
//!
//! API clients shared with every page via the Leptos Context API.

use leptos::prelude::*;
use ecoleta_core::config::{DEFAULT_API_URL, DEFAULT_IBGE_URL};
use ecoleta_core::{ApiConfig, HttpCollectionApi, IbgeClient};

/// Clients built once at startup
#[derive(Clone)]
pub struct AppServices {
    pub collection: HttpCollectionApi,
    pub geography: IbgeClient,
}

impl AppServices {
    pub fn new(config: ApiConfig) -> Self {
        let client = reqwest::Client::new();
        Self {
            collection: HttpCollectionApi::new(client.clone(), config.clone()),
            geography: IbgeClient::new(client, config),
        }
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<AppServices, LocalStorage>,
}

impl AppContext {
    pub fn new(services: AppServices) -> Self {
        Self {
            services: StoredValue::new_local(services),
        }
    }

    /// Internal collection API client
    pub fn collection(&self) -> HttpCollectionApi {
        self.services.with_value(|s| s.collection.clone())
    }

    /// IBGE client
    pub fn geography(&self) -> IbgeClient {
        self.services.with_value(|s| s.geography.clone())
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Base URLs from `ECOLETA_API_URL` / `ECOLETA_IBGE_URL` at build time
pub fn config_from_env() -> ApiConfig {
    resolve_config(option_env!("ECOLETA_API_URL"), option_env!("ECOLETA_IBGE_URL"))
}

fn resolve_config(api_url: Option<&str>, ibge_url: Option<&str>) -> ApiConfig {
    let api_url = api_url.unwrap_or(DEFAULT_API_URL);
    let ibge_url = ibge_url.unwrap_or(DEFAULT_IBGE_URL);
    match ApiConfig::new(api_url, ibge_url) {
        Ok(config) => config,
        Err(e) => {
            log::error!("[CONFIG] {} (api={}, ibge={}), using defaults", e, api_url, ibge_url);
            ApiConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_config_overrides() {
        let config = resolve_config(Some("https://api.ecoleta.dev"), None);
        assert_eq!(config.api_url.as_str(), "https://api.ecoleta.dev/");
        assert_eq!(config.ibge_url.as_str(), DEFAULT_IBGE_URL);
    }

    #[test]
    fn test_resolve_config_falls_back_on_invalid_url() {
        let config = resolve_config(Some("::nope"), None);
        assert_eq!(config, ApiConfig::default());
    }
}
