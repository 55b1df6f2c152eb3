//! PDF export using the standard Helvetica fonts.
//!
//! The standard fonts only cover WinAnsi (Latin-1) text, so documents
//! with other characters fail to export and surface as a save warning.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};

use docket_core::error::AppError;
use docket_core::result::AppResult;
use docket_entity::document::DocumentFormat;

use super::{ExportDocument, Exporter};

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 50;
const TITLE_SIZE: i64 = 16;
const BODY_SIZE: i64 = 12;
const LINE_HEIGHT: i64 = 16;
/// Characters per body line before wrapping.
const WRAP_WIDTH: usize = 85;

/// One laid-out line of text.
struct Line {
    font: &'static str,
    size: i64,
    text: Vec<u8>,
}

/// Writes an A4 `.pdf` with a bold title, the date, and the wrapped body.
#[derive(Debug, Clone, Default)]
pub struct PdfExporter;

impl PdfExporter {
    /// Creates a new PDF exporter.
    pub fn new() -> Self {
        Self
    }
}

/// Encode text as Latin-1 bytes for the standard fonts.
fn latin1(text: &str) -> AppResult<Vec<u8>> {
    text.chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(b) => Ok(b),
            Err(_) => Err(AppError::export(format!(
                "Character '{c}' is not supported by the PDF font"
            ))),
        })
        .collect()
}

/// Split a line into chunks of at most `width` characters.
fn wrap(line: &str, width: usize) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }
    let chars: Vec<char> = line.chars().collect();
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

fn layout(doc: &ExportDocument<'_>) -> AppResult<Vec<Line>> {
    let mut lines = vec![
        Line {
            font: "F2",
            size: TITLE_SIZE,
            text: latin1(doc.title)?,
        },
        Line {
            font: "F1",
            size: BODY_SIZE,
            text: latin1(&format!("Date: {}", doc.date))?,
        },
        Line {
            font: "F1",
            size: BODY_SIZE,
            text: Vec::new(),
        },
    ];

    for raw in doc.body.lines() {
        for chunk in wrap(raw, WRAP_WIDTH) {
            lines.push(Line {
                font: "F1",
                size: BODY_SIZE,
                text: latin1(&chunk)?,
            });
        }
    }

    Ok(lines)
}

fn page_content(lines: &[Line]) -> Content {
    let mut operations = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    for line in lines {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![line.font.into(), line.size.into()],
        ));
        operations.push(Operation::new("Td", vec![MARGIN.into(), y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(line.text.clone(), StringFormat::Literal)],
        ));
        operations.push(Operation::new("ET", vec![]));
        y -= LINE_HEIGHT;
    }

    Content { operations }
}

impl Exporter for PdfExporter {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn render(&self, doc: &ExportDocument<'_>) -> AppResult<Vec<u8>> {
        let lines = layout(doc)?;
        let per_page = ((PAGE_HEIGHT - 2 * MARGIN) / LINE_HEIGHT) as usize;

        let mut pdf = Document::with_version("1.5");
        let pages_id = pdf.new_object_id();

        let regular_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = pdf.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular_id,
                "F2" => bold_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for chunk in lines.chunks(per_page) {
            let encoded = page_content(chunk)
                .encode()
                .map_err(|e| AppError::export(format!("Failed to encode PDF content: {e}")))?;
            let content_id = pdf.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = pdf.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        };
        pdf.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        pdf.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        pdf.save_to(&mut buf)
            .map_err(|e| AppError::export(format!("Failed to write PDF: {e}")))?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_core::error::ErrorKind;

    #[test]
    fn test_render_latin_document() {
        let bytes = PdfExporter::new()
            .render(&ExportDocument {
                title: "Plan",
                date: "01 Jan. 2024",
                body: "first line\nsecond line, café",
            })
            .unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_long_body_spans_pages() {
        let body = "line\n".repeat(200);
        let bytes = PdfExporter::new()
            .render(&ExportDocument {
                title: "Long",
                date: "01 Jan. 2024",
                body: &body,
            })
            .unwrap();
        let parsed = Document::load_mem(&bytes).unwrap();
        assert!(parsed.get_pages().len() >= 2);
    }

    #[test]
    fn test_non_latin_text_is_an_export_error() {
        let err = PdfExporter::new()
            .render(&ExportDocument {
                title: "Отчёт",
                date: "01 Jan. 2024",
                body: "",
            })
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Export);
    }

    #[test]
    fn test_wrap_splits_long_lines() {
        let line = "x".repeat(200);
        let parts = wrap(&line, 85);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].len(), 30);
        assert_eq!(wrap("", 85), vec![String::new()]);
    }
}
