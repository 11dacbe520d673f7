use crate::entities::PalletCode;
use thiserror::Error;

/// Read access to the delivery order search endpoint.
///
/// Implementations return the raw response body and leave
/// decoding to the caller.
pub trait DeliveryOrderSearch {
    fn search_delivery_orders(
        &self,
        pallet_codes: &[PalletCode],
        page_number: u32,
        page_size: u32,
        source_fields: &[&str],
    ) -> Result<Vec<u8>, SearchError>;
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Unable to connect to the API: {0}")]
    Connection(String),
    #[error("Unexpected status code {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Unable to read the API response: {0}")]
    Transport(String),
}
