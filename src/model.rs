use chrono::Local;

use crate::error::{NotaError, Result};

/// Format of the creation timestamp, as it appears in the `Fecha:` header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A note held in memory before it is persisted.
///
/// The creation timestamp is captured once, when the note is built, and
/// stays fixed afterwards; editing a stored note never refreshes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    name: String,
    body: String,
    created_at: String,
}

impl Note {
    /// Build a note from a raw name and body.
    ///
    /// Both inputs are trimmed. The name must be non-empty after trimming
    /// and must not contain path separators, since it is used verbatim as
    /// the file stem.
    pub fn new(name: &str, body: &str) -> Result<Self> {
        let name = name.trim();
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            body: body.trim().to_string(),
            created_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// The stored text form: a `Fecha:` header line, a blank line, then
    /// the body. Pure function of the note's fields.
    pub fn render(&self) -> String {
        format!("Fecha: {}\n\n{}", self.created_at, self.body)
    }
}

/// Name check shared by `Note::new` and the store operations that take a
/// raw name. A name that resolves outside the note directory is rejected
/// rather than sandboxed.
pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(NotaError::Validation("name is empty".to_string()));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(NotaError::Validation(format!(
            "name contains a path separator: {:?}",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn trims_name_and_body() {
        let note = Note::new("  groceries  ", "  milk and eggs  ").unwrap();
        assert_eq!(note.name(), "groceries");
        assert_eq!(note.body(), "milk and eggs");
    }

    #[test]
    fn allows_empty_body() {
        let note = Note::new("empty", "   ").unwrap();
        assert_eq!(note.body(), "");
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            Note::new("   ", "body"),
            Err(NotaError::Validation(_))
        ));
    }

    #[test]
    fn rejects_path_separators_in_name() {
        assert!(Note::new("../escape", "body").is_err());
        assert!(Note::new("a/b", "body").is_err());
        assert!(Note::new("a\\b", "body").is_err());
    }

    #[test]
    fn timestamp_uses_fixed_format() {
        let note = Note::new("x", "y").unwrap();
        assert!(NaiveDateTime::parse_from_str(note.created_at(), TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn render_puts_blank_line_between_header_and_body() {
        let note = Note::new("x", "two\nlines").unwrap();
        let rendered = note.render();
        assert_eq!(
            rendered,
            format!("Fecha: {}\n\ntwo\nlines", note.created_at())
        );
    }
}
