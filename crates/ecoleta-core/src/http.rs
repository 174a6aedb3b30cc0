//! HTTP Clients
//!
//! reqwest implementations of `CollectionApi` and `GeographyApi`.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::api::{CollectionApi, GeographyApi};
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{IbgeCity, IbgeUf, Item};
use crate::payload::PointPayload;

/// Client for the internal collection API
#[derive(Debug, Clone)]
pub struct HttpCollectionApi {
    client: Client,
    config: ApiConfig,
}

impl HttpCollectionApi {
    pub fn new(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait(?Send)]
impl CollectionApi for HttpCollectionApi {
    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        let url = self.config.api_endpoint("itens")?;
        get_json(&self.client, url).await
    }

    async fn create_point(&self, payload: PointPayload) -> ApiResult<()> {
        let url = self.config.api_endpoint("points")?;
        log::debug!("[HTTP] POST {} ({:?})", url, payload.field_names());
        let form = payload.into_multipart()?;
        let response = self.client.post(url).multipart(form).send().await?;
        // Body is not consumed
        check_status(response)?;
        Ok(())
    }
}

/// Client for the IBGE localidades service
#[derive(Debug, Clone)]
pub struct IbgeClient {
    client: Client,
    config: ApiConfig,
}

impl IbgeClient {
    pub fn new(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    fn cities_url(&self, uf: &str) -> ApiResult<Url> {
        let uf = utf8_percent_encode(uf, NON_ALPHANUMERIC);
        self.config.ibge_endpoint(&format!("estados/{}/municipios", uf))
    }
}

#[async_trait(?Send)]
impl GeographyApi for IbgeClient {
    async fn list_ufs(&self) -> ApiResult<Vec<String>> {
        let url = self.config.ibge_endpoint("estados")?;
        let ufs: Vec<IbgeUf> = get_json(&self.client, url).await?;
        Ok(ufs.into_iter().map(|uf| uf.sigla).collect())
    }

    async fn list_cities(&self, uf: &str) -> ApiResult<Vec<String>> {
        let url = self.cities_url(uf)?;
        let cities: Vec<IbgeCity> = get_json(&self.client, url).await?;
        Ok(cities.into_iter().map(|city| city.nome).collect())
    }
}

async fn get_json<T: DeserializeOwned>(client: &Client, url: Url) -> ApiResult<T> {
    log::debug!("[HTTP] GET {}", url);
    let response = check_status(client.get(url).send().await?)?;
    Ok(response.json::<T>().await?)
}

fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            url: response.url().to_string(),
            status: status.as_u16(),
        })
    }
}
