//! The tagged header format of a document's canonical text file.
//!
//! ```text
//! Title: <title>
//! Date: <date>
//! ========================================
//!
//! <body>
//! ```
//!
//! Header lines are `key: value` pairs up to the first line made only of
//! `=`. One blank line after that separator is skipped and the remainder
//! is the body, verbatim.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Title used when a file carries no title line.
pub const DEFAULT_TITLE: &str = "Untitled";
/// Date used when a file carries no date line.
pub const DEFAULT_DATE: &str = "Unknown";
/// Preview used when a file has no body segment at all.
pub const EMPTY_PREVIEW: &str = "Empty document";
/// Number of body characters shown in a listing preview.
pub const PREVIEW_CHARS: usize = 100;

const SEPARATOR_WIDTH: usize = 40;
const TITLE_KEYS: [&str; 2] = ["Title", "Заголовок"];
const DATE_KEYS: [&str; 2] = ["Date", "Дата"];

/// Format a creation date the way it is written into the header.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b. %Y").to_string()
}

/// Today's date in local time, header-formatted.
pub fn today() -> String {
    format_date(Local::now().date_naive())
}

/// Render the full canonical text of a document.
///
/// Fields are written verbatim; a `title` or `date` containing a line
/// break does not survive [`ParsedDocument::parse`]. See [`is_single_line`].
pub fn serialize(title: &str, date: &str, body: &str) -> String {
    format!(
        "Title: {}\nDate: {}\n{}\n\n{}",
        title,
        date,
        "=".repeat(SEPARATOR_WIDTH),
        body
    )
}

/// Whether `value` can be stored as a header field.
pub fn is_single_line(value: &str) -> bool {
    !value.contains(['\r', '\n'])
}

fn is_separator(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == '=')
}

/// A document's canonical text split into header fields and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// The title, or [`DEFAULT_TITLE`].
    pub title: String,
    /// The creation date string, or [`DEFAULT_DATE`].
    pub date: String,
    /// The body after the separator; `None` when no separator was found.
    pub body: Option<String>,
}

impl ParsedDocument {
    /// Parse canonical text. Never fails; missing parts take defaults.
    pub fn parse(text: &str) -> Self {
        let mut title: Option<String> = None;
        let mut date: Option<String> = None;
        let mut body = None;
        let mut offset = 0;

        for raw in text.split_inclusive('\n') {
            offset += raw.len();
            let line = raw.trim_end_matches(['\n', '\r']);

            if is_separator(line) {
                let rest = &text[offset..];
                let rest = rest
                    .strip_prefix("\r\n")
                    .or_else(|| rest.strip_prefix('\n'))
                    .unwrap_or(rest);
                body = Some(rest.to_string());
                break;
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.strip_prefix(' ').unwrap_or(value);
            let key = key.trim();

            if title.is_none() && TITLE_KEYS.contains(&key) {
                title = Some(value.to_string());
            } else if date.is_none() && DATE_KEYS.contains(&key) {
                date = Some(value.to_string());
            }
        }

        Self {
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            date: date.unwrap_or_else(|| DEFAULT_DATE.to_string()),
            body,
        }
    }

    /// The body text, empty when there is none.
    pub fn content(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    /// Listing preview: the first characters of the body followed by `...`.
    pub fn preview(&self) -> String {
        match &self.body {
            Some(body) => {
                let mut preview: String = body.chars().take(PREVIEW_CHARS).collect();
                preview.push_str("...");
                preview
            }
            None => EMPTY_PREVIEW.to_string(),
        }
    }
}
