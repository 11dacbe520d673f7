use super::prelude::*;
use crate::coord_list;

const FILE_EXT: &str = ".txt";
const CLEAN_SUFFIX: &str = "_clean";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFileNames {
    pub annotated: String,
    pub clean: String,
}

/// The two text serializations of one retrieval.
#[derive(Debug, Clone)]
pub struct CoordinateExport {
    pub file_names: ExportFileNames,
    pub annotated: String,
    pub clean: String,
    pub count: usize,
}

pub fn export_file_names(pallet_codes: &[PalletCode]) -> ExportFileNames {
    let stem = match pallet_codes {
        [code] => format!("coordenadas_{code}"),
        codes => format!("coordenadas_multiple_{}_pallets", codes.len()),
    };
    ExportFileNames {
        annotated: format!("{stem}{FILE_EXT}"),
        clean: format!("{stem}{CLEAN_SUFFIX}{FILE_EXT}"),
    }
}

/// Serialize sorted coordinates for the given pallets.
pub fn export_coordinates(pallet_codes: &[PalletCode], coords: &[CoordInfo]) -> CoordinateExport {
    let file_names = export_file_names(pallet_codes);
    let annotated = coord_list::format_annotated(coords);
    let clean = coord_list::format_clean(coords.iter().map(|c| &c.pos));
    CoordinateExport {
        file_names,
        annotated,
        clean,
        count: coords.len(),
    }
}
