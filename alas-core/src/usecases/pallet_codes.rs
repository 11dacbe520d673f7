use super::prelude::*;
use crate::util::validate;

pub fn parse_pallet_codes(input: &str) -> Result<Vec<PalletCode>> {
    let codes = validate::pallet_codes(input);
    if codes.is_empty() {
        return Err(Error::NoValidInput);
    }
    Ok(codes)
}
