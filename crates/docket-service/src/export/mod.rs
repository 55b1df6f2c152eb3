//! Secondary-format exports written next to the canonical text file.

pub mod docx;
pub mod pdf;

use std::fmt::Debug;

use docket_core::config::ExportConfig;
use docket_core::result::AppResult;
use docket_entity::document::DocumentFormat;

pub use docx::DocxExporter;
pub use pdf::PdfExporter;

/// The fields an exporter renders.
#[derive(Debug, Clone, Copy)]
pub struct ExportDocument<'a> {
    /// Document title.
    pub title: &'a str,
    /// Header-formatted creation date.
    pub date: &'a str,
    /// Body text.
    pub body: &'a str,
}

/// Renders a document into a sibling file format.
pub trait Exporter: Send + Sync + Debug + 'static {
    /// The format this exporter produces.
    fn format(&self) -> DocumentFormat;

    /// Render the document to bytes.
    fn render(&self, doc: &ExportDocument<'_>) -> AppResult<Vec<u8>>;
}

/// Exporters enabled by configuration, in write order.
pub fn enabled_exporters(config: &ExportConfig) -> Vec<Box<dyn Exporter>> {
    let mut exporters: Vec<Box<dyn Exporter>> = Vec::new();
    if config.docx_enabled {
        exporters.push(Box::new(DocxExporter::new()));
    }
    if config.pdf_enabled {
        exporters.push(Box::new(PdfExporter::new()));
    }
    exporters
}
