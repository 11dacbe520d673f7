use alas_core::{
    entities::GeoPoint, gateways::map::MapDocumentFormatter, usecases::MapRenderRequest,
};
use askama::Template;

const DEFAULT_TITLE: &str = "Mapa de Coordenadas";

/// Interactive Leaflet map with numbered markers and a connecting line.
#[derive(Debug, Clone)]
pub struct LeafletMap {
    title: String,
}

impl Default for LeafletMap {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl LeafletMap {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[derive(Template)]
#[template(path = "map.html")]
struct LeafletMapTemplate<'a> {
    title: &'a str,
    center: &'a GeoPoint,
    points: &'a [GeoPoint],
}

impl MapDocumentFormatter for LeafletMap {
    fn map_document(&self, req: &MapRenderRequest) -> anyhow::Result<String> {
        let tpl = LeafletMapTemplate {
            title: &self.title,
            center: &req.center,
            points: &req.points,
        };
        Ok(tpl.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> MapRenderRequest {
        MapRenderRequest {
            points: vec![
                GeoPoint::from_lat_lon(0.0, 0.0),
                GeoPoint::from_lat_lon(2.0, 2.0),
                GeoPoint::from_lat_lon(-33.4489123, -70.6692655),
            ],
            center: GeoPoint::from_lat_lon(1.0, 1.0),
        }
    }

    #[test]
    fn embed_center_and_points() {
        let html = LeafletMap::default().map_document(&request()).unwrap();
        assert!(html.contains("const center = [1, 1];"));
        assert!(html.contains("[0, 0],"));
        assert!(html.contains("[2, 2],"));
        assert!(html.contains("[-33.4489123, -70.6692655],"));
        assert!(html.contains("<title>Mapa de Coordenadas</title>"));
        assert!(html.contains("3 puntos"));
    }

    #[test]
    fn keep_point_order() {
        let html = LeafletMap::default().map_document(&request()).unwrap();
        let first = html.find("[0, 0],").unwrap();
        let second = html.find("[2, 2],").unwrap();
        let third = html.find("[-33.4489123, -70.6692655],").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn escape_title() {
        let html = LeafletMap::with_title("<Pallet & Co>")
            .map_document(&request())
            .unwrap();
        assert!(html.contains("&lt;Pallet &amp; Co&gt;"));
    }
}
