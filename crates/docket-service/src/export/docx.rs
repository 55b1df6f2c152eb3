//! Word document export.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};

use docket_core::error::AppError;
use docket_core::result::AppResult;
use docket_entity::document::DocumentFormat;

use super::{ExportDocument, Exporter};

/// Title size in half-points.
const TITLE_SIZE: usize = 40;

/// Writes a `.docx` with the title as a heading and one paragraph per body line.
#[derive(Debug, Clone, Default)]
pub struct DocxExporter;

impl DocxExporter {
    /// Creates a new DOCX exporter.
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for DocxExporter {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn render(&self, doc: &ExportDocument<'_>) -> AppResult<Vec<u8>> {
        let mut docx = Docx::new()
            .add_paragraph(
                Paragraph::new().add_run(Run::new().add_text(doc.title).bold().size(TITLE_SIZE)),
            )
            .add_paragraph(
                Paragraph::new().add_run(Run::new().add_text(format!("Date: {}", doc.date)).italic()),
            );

        for line in doc.body.lines() {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
        }

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| AppError::export(format!("Failed to pack DOCX: {e}")))?;

        Ok(buf.into_inner())
    }
}
