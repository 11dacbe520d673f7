pub mod prelude {
    use std::cell::RefCell;

    pub use alas_core::gateways::search::{DeliveryOrderSearch, SearchError};

    use crate::PalletCode;

    #[derive(Debug, Clone)]
    pub struct SearchCall {
        pub pallet_codes: Vec<String>,
        pub page_number: u32,
        pub page_size: u32,
        pub source_fields: Vec<String>,
    }

    /// Replays canned responses in order and records every request.
    pub struct FakeSearch {
        responses: RefCell<Vec<Result<&'static str, SearchError>>>,
        calls: RefCell<Vec<SearchCall>>,
    }

    impl FakeSearch {
        pub fn new(mut responses: Vec<Result<&'static str, SearchError>>) -> Self {
            responses.reverse();
            Self {
                responses: RefCell::new(responses),
                calls: RefCell::new(vec![]),
            }
        }

        pub fn calls(&self) -> Vec<SearchCall> {
            self.calls.borrow().clone()
        }
    }

    impl DeliveryOrderSearch for FakeSearch {
        fn search_delivery_orders(
            &self,
            pallet_codes: &[PalletCode],
            page_number: u32,
            page_size: u32,
            source_fields: &[&str],
        ) -> Result<Vec<u8>, SearchError> {
            self.calls.borrow_mut().push(SearchCall {
                pallet_codes: pallet_codes.iter().map(ToString::to_string).collect(),
                page_number,
                page_size,
                source_fields: source_fields.iter().map(ToString::to_string).collect(),
            });
            self.responses
                .borrow_mut()
                .pop()
                .expect("Unexpected search request")
                .map(|body| body.as_bytes().to_vec())
        }
    }
}
