use crate::usecases::MapRenderRequest;

pub trait MapDocumentFormatter {
    /// Render a self-contained HTML document showing all points.
    fn map_document(&self, req: &MapRenderRequest) -> anyhow::Result<String>;
}
