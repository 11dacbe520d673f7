use super::*;
use crate::error::AppError;
use gateways::map::MapDocumentFormatter;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug)]
pub struct MapSummary {
    pub html_file: PathBuf,
    pub count: usize,
}

/// `coordenadas_x_clean.txt` becomes `coordenadas_x_clean.html`,
/// any other name gets the `.html` extension appended.
pub fn html_file_path(source: &Path) -> PathBuf {
    if source.extension().is_some_and(|ext| ext == "txt") {
        return source.with_extension("html");
    }
    let mut path = source.as_os_str().to_owned();
    path.push(".html");
    PathBuf::from(path)
}

/// Draw the points of a clean coordinate list file on an HTML map
/// next to the source file.
pub fn render_map<F>(formatter: &F, source: &Path) -> Result<MapSummary>
where
    F: MapDocumentFormatter,
{
    if !source.exists() {
        return Err(AppError::NotFound(source.to_path_buf()));
    }
    let text = fs::read_to_string(source)?;
    let points = coord_list::parse_coordinate_list(&text)
        .into_iter()
        .map(|p| p.pos)
        .collect();
    let req = usecases::prepare_map(points)?;
    debug!(
        "Centering map of {} points at ({}, {})",
        req.points.len(),
        req.center.latitude,
        req.center.longitude
    );
    let html = formatter.map_document(&req)?;
    let html_file = html_file_path(source);
    fs::write(&html_file, html)?;
    info!("Wrote map to {}", html_file.display());
    Ok(MapSummary {
        html_file,
        count: req.points.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use alas_gateways::map::LeafletMap;
    use usecases::MapRenderRequest;

    struct CenterOnly;

    impl MapDocumentFormatter for CenterOnly {
        fn map_document(&self, req: &MapRenderRequest) -> anyhow::Result<String> {
            Ok(format!(
                "{} {} {}",
                req.points.len(),
                req.center.latitude,
                req.center.longitude
            ))
        }
    }

    struct Broken;

    impl MapDocumentFormatter for Broken {
        fn map_document(&self, _: &MapRenderRequest) -> anyhow::Result<String> {
            Err(anyhow::anyhow!("template error"))
        }
    }

    #[test]
    fn replace_txt_extension() {
        assert_eq!(
            html_file_path(Path::new("out/coordenadas_pl1_clean.txt")),
            PathBuf::from("out/coordenadas_pl1_clean.html")
        );
        assert_eq!(
            html_file_path(Path::new("points.csv")),
            PathBuf::from("points.csv.html")
        );
        assert_eq!(
            html_file_path(Path::new("points")),
            PathBuf::from("points.html")
        );
    }

    #[test]
    fn render_centroid_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("coordenadas_pl1_clean.txt");
        fs::write(&source, "[(0.0000000, 0.0000000), (2.0000000, 2.0000000)]").unwrap();

        let summary = render_map(&CenterOnly, &source).unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(
            summary.html_file,
            dir.path().join("coordenadas_pl1_clean.html")
        );
        assert_eq!(fs::read_to_string(&summary.html_file).unwrap(), "2 1 1");
    }

    #[test]
    fn render_leaflet_map() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("coordenadas_pl1_clean.txt");
        fs::write(&source, "[(-33.4489123, -70.6692655)]").unwrap();

        let summary = render_map(&LeafletMap::default(), &source).unwrap();
        let html = fs::read_to_string(&summary.html_file).unwrap();
        assert!(html.contains("const center = [-33.4489123, -70.6692655];"));
        assert!(html.contains("[-33.4489123, -70.6692655],"));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("nope.txt");
        let err = render_map(&CenterOnly, &source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!dir.path().join("nope.html").exists());
    }

    #[test]
    fn file_without_valid_points() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("garbage.txt");
        fs::write(&source, "[(a, b)]").unwrap();
        let err = render_map(&CenterOnly, &source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyResult);
        assert!(!dir.path().join("garbage.html").exists());
    }

    #[test]
    fn plot_only_finite_points() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("coordenadas_pl1_clean.txt");
        fs::write(&source, "[(1e400, 2.0), (3.0, 4.0)]").unwrap();
        let summary = render_map(&LeafletMap::default(), &source).unwrap();
        assert_eq!(summary.count, 1);
        let html = fs::read_to_string(&summary.html_file).unwrap();
        assert!(html.contains("const center = [3, 4];"));
        assert!(!html.contains("[inf,"));
        assert!(!html.contains("NaN"));
    }

    #[test]
    fn template_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("coordenadas_pl1_clean.txt");
        fs::write(&source, "[(1.0, 2.0)]").unwrap();
        let err = render_map(&Broken, &source).unwrap_err();
        assert!(matches!(err, AppError::Render(_)));
        assert!(!dir.path().join("coordenadas_pl1_clean.html").exists());
    }
}
