use crate::entities::PalletCode;

/// Split comma separated user input into pallet codes.
///
/// Blank tokens are dropped; order and duplicates are preserved.
pub fn pallet_codes(input: &str) -> Vec<PalletCode> {
    input
        .split(',')
        .filter_map(|token| token.parse().ok())
        .collect()
}
