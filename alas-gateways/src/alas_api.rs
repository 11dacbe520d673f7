use alas_boundary::SearchRequest;
use alas_core::{
    entities::PalletCode,
    gateways::search::{DeliveryOrderSearch, SearchError},
};
use reqwest::{blocking::Client, StatusCode};

pub const DEFAULT_BASE_URL: &str = "https://api.alasxpress.com";

const SEARCH_PATH: &str = "/delivery/delivery-orders/cl/_search";

/// Client of the Alas delivery API.
#[derive(Debug, Clone)]
pub struct AlasApi {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl AlasApi {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::with_client(Client::new(), base_url, username, password)
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}{SEARCH_PATH}", self.base_url.trim_end_matches('/'))
    }
}

impl DeliveryOrderSearch for AlasApi {
    fn search_delivery_orders(
        &self,
        pallet_codes: &[PalletCode],
        page_number: u32,
        page_size: u32,
        source_fields: &[&str],
    ) -> Result<Vec<u8>, SearchError> {
        let request = SearchRequest {
            pallet_codes: pallet_codes.iter().map(ToString::to_string).collect(),
            page_number,
            page_size,
            source_fields: source_fields.iter().map(ToString::to_string).collect(),
        };
        let url = self.search_url();
        log::debug!("POST {url} (page {page_number}, size {page_size})");
        let response = self
            .client
            .post(&url)
            .json(&request)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .map_err(|err| SearchError::Connection(err.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .map_err(|err| SearchError::Transport(err.to_string()))?;
        if status != StatusCode::OK {
            log::warn!("Search request failed with status {status}");
            return Err(SearchError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(body.to_vec())
    }
}
