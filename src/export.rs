//! JSON export of the stored notes.
//!
//! The export walks the valid note files (the same filter `count` uses),
//! splits each into its `Fecha:` header and body, and writes one JSON
//! array to a file in the working directory. The document keeps the
//! field names of the on-disk format: `nombre`, `fecha`, `contenido`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{NotaError, Result};
use crate::store::{is_valid_note_file, NoteStore, NOTE_EXT};

/// Default file the export is written to, relative to the working
/// directory rather than the store directory.
pub const DEFAULT_EXPORT_FILE: &str = "notas.json";

const HEADER_PREFIX: &str = "Fecha:";

/// One exported note, serialized with the document's field names.
#[derive(Debug, Serialize)]
pub struct ExportedNote {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "contenido")]
    pub content: String,
}

/// What an export produced. The `Display` impl is a one-line summary a
/// frontend can show as-is.
#[derive(Debug)]
pub struct ExportSummary {
    pub exported: usize,
    pub path: PathBuf,
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exported {} notes to '{}'",
            self.exported,
            self.path.display()
        )
    }
}

impl NoteStore {
    /// Export every valid note file to [`DEFAULT_EXPORT_FILE`].
    pub fn export_to_json(&self) -> Result<ExportSummary> {
        self.export_to_json_at(DEFAULT_EXPORT_FILE)
    }

    /// Export every valid note file as a JSON array to `path`.
    ///
    /// Backup and export files are skipped. Notes whose first line
    /// carries the `Fecha:` header contribute that date and the content
    /// from the third line on; headerless files are exported with an
    /// empty date and their whole trimmed content as the body.
    pub fn export_to_json_at<P: AsRef<Path>>(&self, path: P) -> Result<ExportSummary> {
        let mut notes = Vec::new();
        for entry in fs::read_dir(self.dir()).map_err(NotaError::Io)? {
            let entry = entry.map_err(NotaError::Io)?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            if !is_valid_note_file(&file_name) {
                continue;
            }
            let content = fs::read_to_string(entry.path()).map_err(NotaError::Io)?;
            let name = file_name
                .strip_suffix(NOTE_EXT)
                .unwrap_or(&file_name)
                .to_string();
            notes.push(parse_stored_note(name, &content));
        }

        fs::write(path.as_ref(), to_pretty_json(&notes)?).map_err(NotaError::Io)?;

        Ok(ExportSummary {
            exported: notes.len(),
            path: path.as_ref().to_path_buf(),
        })
    }
}

/// Split stored content into its `Fecha:` header and body.
fn parse_stored_note(name: String, content: &str) -> ExportedNote {
    let lines: Vec<&str> = content.lines().collect();
    match lines.first().and_then(|line| line.strip_prefix(HEADER_PREFIX)) {
        Some(date) => {
            // Line 1 is the blank separator; the body starts at line 2.
            let body = if lines.len() > 2 {
                lines[2..].join("\n")
            } else {
                String::new()
            };
            ExportedNote {
                name,
                date: date.trim().to_string(),
                content: body,
            }
        }
        None => ExportedNote {
            name,
            date: String::new(),
            content: content.trim().to_string(),
        },
    }
}

/// Four-space pretty printing, with non-ASCII characters written
/// literally rather than `\u`-escaped.
fn to_pretty_json(notes: &[ExportedNote]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    notes
        .serialize(&mut ser)
        .map_err(NotaError::Serialization)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_body() {
        let note = parse_stored_note("x".into(), "Fecha: 2024-07-01 09:30:00\n\nhello\nworld");
        assert_eq!(note.date, "2024-07-01 09:30:00");
        assert_eq!(note.content, "hello\nworld");
    }

    #[test]
    fn header_only_file_has_empty_body() {
        let note = parse_stored_note("x".into(), "Fecha: 2024-07-01 09:30:00");
        assert_eq!(note.date, "2024-07-01 09:30:00");
        assert_eq!(note.content, "");
    }

    #[test]
    fn headerless_file_becomes_trimmed_body_with_empty_date() {
        let note = parse_stored_note("x".into(), "  just some text\n");
        assert_eq!(note.date, "");
        assert_eq!(note.content, "just some text");
    }

    #[test]
    fn pretty_json_uses_four_space_indent_and_literal_utf8() {
        let notes = vec![ExportedNote {
            name: "café".into(),
            date: "".into(),
            content: "mañana".into(),
        }];
        let json = String::from_utf8(to_pretty_json(&notes).unwrap()).unwrap();
        assert!(json.contains("\n    {"));
        assert!(json.contains("\"nombre\": \"café\""));
        assert!(json.contains("mañana"));
        assert!(!json.contains("\\u"));
    }
}
