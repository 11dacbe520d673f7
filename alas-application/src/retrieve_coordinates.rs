use super::*;
use alas_boundary::{DeliveryOrderResult, SearchTotal};
use gateways::search::DeliveryOrderSearch;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub const SOURCE_FIELDS: &[&str] = &["vehicle_location", "destination.geo_location"];

#[derive(Debug)]
pub enum Retrieval {
    /// The API does not know any order of the given pallets.
    NoOrders,
    /// Orders were found but none of them has a location.
    NoValidCoordinates { total: u32 },
    Exported(ExportSummary),
}

#[derive(Debug)]
pub struct ExportSummary {
    pub pallet_codes: Vec<PalletCode>,
    pub total: u32,
    pub count: usize,
    pub annotated_file: PathBuf,
    pub clean_file: PathBuf,
    /// The annotated file has been written even if this is set.
    pub clean_file_error: Option<io::Error>,
}

/// Fetch the destinations of all orders on the given pallets,
/// sort them and write the annotated and the clean coordinate list
/// into `output_dir`.
pub fn retrieve_coordinates<S>(search: &S, output_dir: &Path, input: &str) -> Result<Retrieval>
where
    S: DeliveryOrderSearch,
{
    let pallet_codes = usecases::parse_pallet_codes(input)?;
    info!("Searching orders of {} pallet(s)", pallet_codes.len());

    let body = search.search_delivery_orders(&pallet_codes, 0, 1, SOURCE_FIELDS)?;
    let SearchTotal { total } = serde_json::from_slice(&body)?;
    if total == 0 {
        info!("No orders found");
        return Ok(Retrieval::NoOrders);
    }

    let body = search.search_delivery_orders(&pallet_codes, 0, total, SOURCE_FIELDS)?;
    let DeliveryOrderResult { items, .. } = serde_json::from_slice(&body)?;
    debug!("Received {} of {total} orders", items.len());

    let coords = usecases::collect_coordinates(
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.into_coord_info(index)),
    );
    if coords.is_empty() {
        info!("None of the {total} orders has a valid location");
        return Ok(Retrieval::NoValidCoordinates { total });
    }

    let usecases::CoordinateExport {
        file_names,
        annotated,
        clean,
        count,
    } = usecases::export_coordinates(&pallet_codes, &coords);

    let annotated_file = output_dir.join(&file_names.annotated);
    fs::write(&annotated_file, annotated)?;
    info!("Wrote {count} coordinates to {}", annotated_file.display());

    let clean_file = output_dir.join(&file_names.clean);
    let clean_file_error = fs::write(&clean_file, clean).err();
    if let Some(err) = &clean_file_error {
        warn!("Unable to write {}: {err}", clean_file.display());
    }

    Ok(Retrieval::Exported(ExportSummary {
        pallet_codes,
        total,
        count,
        annotated_file,
        clean_file,
        clean_file_error,
    }))
}
