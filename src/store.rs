//! The note directory and every file operation on it.
//!
//! A [`NoteStore`] owns one flat directory. Each note is a single
//! `<name>.txt` file; editing a note keeps the previous content in a
//! sibling `<name>_bak.txt`, one generation deep. Nothing else reads or
//! writes that directory.
//!
//! The store is the error boundary of the crate: filesystem trouble comes
//! back as [`NotaError`](crate::error::NotaError) values the caller must
//! check, never as panics. Operations with a yes/no outcome (`delete`) or
//! a checked rejection (`edit`) encode that in their return type.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NotaError, Result};
use crate::model::{validate_name, Note};

/// Default directory notes are kept in, relative to the working directory.
pub const DEFAULT_NOTES_DIR: &str = "notas";

pub(crate) const NOTE_EXT: &str = ".txt";
const BACKUP_SUFFIX: &str = "_bak";
const MIN_EDIT_BODY_CHARS: usize = 5;

/// Outcome of a [`NoteStore::edit`] call.
///
/// Rejections say which check failed; the `Display` impl renders a
/// message a frontend can show as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditStatus {
    /// The note was rewritten. Its previous content lives at the returned
    /// backup path until the next edit overwrites it.
    Applied { backup: PathBuf },
    /// The name was empty after trimming, or contained a path separator.
    RejectedName,
    /// The new body was shorter than five characters after trimming.
    RejectedBody,
    /// No note file with that name exists.
    NotFound,
}

impl EditStatus {
    pub fn applied(&self) -> bool {
        matches!(self, EditStatus::Applied { .. })
    }
}

impl fmt::Display for EditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditStatus::Applied { backup } => {
                write!(f, "Note edited, previous content kept at {}", backup.display())
            }
            EditStatus::RejectedName => {
                write!(f, "The note name cannot be empty or contain path separators")
            }
            EditStatus::RejectedBody => {
                write!(f, "The new content is too short (minimum 5 characters)")
            }
            EditStatus::NotFound => write!(f, "No note with that name exists"),
        }
    }
}

/// Owns a flat directory of note files and performs all file-level
/// operations on it. Each instance is independent; tests point one at a
/// temporary directory.
pub struct NoteStore {
    dir: PathBuf,
}

impl NoteStore {
    /// Open a store rooted at `dir`, creating the directory and any
    /// missing parents if needed.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(NotaError::Io)?;
        }
        Ok(Self { dir })
    }

    /// Open a store at the default location, [`DEFAULT_NOTES_DIR`].
    pub fn open_default() -> Result<Self> {
        Self::new(DEFAULT_NOTES_DIR)
    }

    /// Open the store named by `config.notes_dir`.
    pub fn from_config(config: &crate::config::NotasConfig) -> Result<Self> {
        Self::new(config.notes_dir.as_str())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn note_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}{}", name, NOTE_EXT))
    }

    fn backup_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}{}{}", name, BACKUP_SUFFIX, NOTE_EXT))
    }

    /// Write `note` to `<dir>/<name>.txt` in its rendered form, replacing
    /// any previous file of the same name. No backup is taken here; only
    /// `edit` does that. Returns the resolved path so a frontend can
    /// trace where the note landed.
    pub fn save(&self, note: &Note) -> Result<PathBuf> {
        let path = self.note_path(note.name());
        fs::write(&path, note.render()).map_err(NotaError::Io)?;
        Ok(path)
    }

    /// Full stored content of a note, `Fecha:` header included.
    ///
    /// A missing note is the distinct error kind
    /// [`NotaError::NotFound`]; the caller decides how to render it.
    pub fn read(&self, name: &str) -> Result<String> {
        validate_name(name)?;
        let path = self.note_path(name);
        if !path.exists() {
            return Err(NotaError::NotFound(name.to_string()));
        }
        fs::read_to_string(path).map_err(NotaError::Io)
    }

    /// Names of all stored notes: immediate `.txt` entries with the
    /// suffix stripped. Order follows directory enumeration and is not
    /// guaranteed to be sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(NotaError::Io)? {
            let entry = entry.map_err(NotaError::Io)?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            if let Some(stem) = file_name.strip_suffix(NOTE_EXT) {
                names.push(stem.to_string());
            }
        }
        Ok(names)
    }

    /// Names of notes whose content contains `term`, matched
    /// case-insensitively.
    ///
    /// Every directory entry is scanned, not just `.txt` files, so backup
    /// and export files can match too. Each matched name is reported with
    /// its last four characters removed, whatever its extension was; a
    /// match in `x_bak.txt` therefore comes back as `x_bak`. Entries that
    /// cannot be read as text are skipped.
    pub fn search(&self, term: &str) -> Result<Vec<String>> {
        let term = term.to_lowercase();
        let mut matches = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(NotaError::Io)? {
            let entry = entry.map_err(NotaError::Io)?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            let content = match fs::read_to_string(entry.path()) {
                Ok(content) => content,
                Err(_) => continue,
            };
            if content.to_lowercase().contains(&term) {
                matches.push(strip_last_four(&file_name).to_string());
            }
        }
        Ok(matches)
    }

    /// Replace a note's content, keeping the previous content in a
    /// single-generation backup.
    ///
    /// Validation runs before any filesystem access: the name must be
    /// non-empty and separator-free, the new body at least five
    /// characters after trimming. On success the current file is copied
    /// verbatim to `<name>_bak.txt` (overwriting any prior backup) and
    /// `<name>.txt` is rewritten with `new_body` exactly as given. The
    /// new content is not re-rendered, so an edited note consists of the
    /// body alone, without the `Fecha:` header `save` produces.
    pub fn edit(&self, name: &str, new_body: &str) -> Result<EditStatus> {
        if name.trim().is_empty() || name.contains('/') || name.contains('\\') {
            return Ok(EditStatus::RejectedName);
        }
        if new_body.trim().chars().count() < MIN_EDIT_BODY_CHARS {
            return Ok(EditStatus::RejectedBody);
        }

        let path = self.note_path(name);
        if !path.exists() {
            return Ok(EditStatus::NotFound);
        }

        let backup = self.backup_path(name);
        fs::copy(&path, &backup).map_err(NotaError::Io)?;
        fs::write(&path, new_body).map_err(NotaError::Io)?;
        Ok(EditStatus::Applied { backup })
    }

    /// Remove a note file. `Ok(false)` when no such note exists, so
    /// deleting twice is harmless.
    pub fn delete(&self, name: &str) -> Result<bool> {
        validate_name(name)?;
        let path = self.note_path(name);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path).map_err(NotaError::Io)?;
        Ok(true)
    }

    /// Number of valid note files: `.txt` entries whose names contain
    /// neither `_bak` nor, case-insensitively, `export`.
    pub fn count(&self) -> Result<usize> {
        let mut total = 0;
        for entry in fs::read_dir(&self.dir).map_err(NotaError::Io)? {
            let entry = entry.map_err(NotaError::Io)?;
            if is_valid_note_file(&entry.file_name().to_string_lossy()) {
                total += 1;
            }
        }
        Ok(total)
    }
}

/// A countable (and exportable) note file: `.txt`, not a backup, not an
/// export artifact. The `_bak` check is case-sensitive, the `export`
/// check is not.
pub(crate) fn is_valid_note_file(name: &str) -> bool {
    name.ends_with(NOTE_EXT)
        && !name.contains(BACKUP_SUFFIX)
        && !name.to_lowercase().contains("export")
}

/// Drops the last four characters of a file name, the width of a `.txt`
/// suffix. Search applies this to every match regardless of its actual
/// extension; names shorter than four characters collapse to the empty
/// string.
fn strip_last_four(name: &str) -> &str {
    match name.char_indices().rev().nth(3) {
        Some((idx, _)) => &name[..idx],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_note_file_filter() {
        assert!(is_valid_note_file("a.txt"));
        assert!(!is_valid_note_file("a_bak.txt"));
        assert!(!is_valid_note_file("export1.txt"));
        assert!(!is_valid_note_file("Export2.txt"));
        assert!(!is_valid_note_file("a.md"));
    }

    #[test]
    fn test_strip_last_four() {
        assert_eq!(strip_last_four("a.txt"), "a");
        assert_eq!(strip_last_four("x_bak.txt"), "x_bak");
        assert_eq!(strip_last_four("a.md"), "");
        assert_eq!(strip_last_four("ab"), "");
        assert_eq!(strip_last_four("café.txt"), "café");
    }

    #[test]
    fn test_edit_status_applied() {
        let status = EditStatus::Applied {
            backup: PathBuf::from("x_bak.txt"),
        };
        assert!(status.applied());
        assert!(!EditStatus::RejectedBody.applied());
        assert!(!EditStatus::NotFound.applied());
    }
}
