//! API Configuration
//!
//! Base URLs for the collection API and the IBGE localidades service.

use url::Url;

use crate::error::ApiResult;

pub const DEFAULT_API_URL: &str = "http://localhost:3333/";
pub const DEFAULT_IBGE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades/";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Collection API root, always ends with `/`
    pub api_url: Url,
    /// IBGE localidades root, always ends with `/`
    pub ibge_url: Url,
}

impl ApiConfig {
    pub fn new(api_url: &str, ibge_url: &str) -> ApiResult<Self> {
        Ok(Self {
            api_url: parse_base(api_url)?,
            ibge_url: parse_base(ibge_url)?,
        })
    }

    /// Resolve an endpoint under the collection API root
    pub fn api_endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.api_url.join(path)?)
    }

    /// Resolve an endpoint under the IBGE root
    pub fn ibge_endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.ibge_url.join(path)?)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default api url is valid"),
            ibge_url: Url::parse(DEFAULT_IBGE_URL).expect("default ibge url is valid"),
        }
    }
}

/// `Url::join` replaces the last segment unless the base ends with `/`
fn parse_base(raw: &str) -> ApiResult<Url> {
    let raw = raw.trim();
    if raw.ends_with('/') {
        Ok(Url::parse(raw)?)
    } else {
        Ok(Url::parse(&format!("{}/", raw))?)
    }
}
