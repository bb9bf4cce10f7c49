use std::fs::{self, File};
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::errors::Result;
use crate::note::{Note, NoteId, NoteRecord};
use crate::query;
use crate::{selection_fail, validation_fail};

/// default backing file, relative to the working directory
pub static DEFAULT_FILE: &str = "notes.json";

/// In-memory notes mirrored to a single JSON file. Every successful mutation
/// rewrites the whole file.
#[derive(Debug)]
pub struct NoteStore {
    path: PathBuf,
    notes: Vec<Note>,
    next_id: u64,
}

impl NoteStore {
    /// An empty store backed by `path`. Nothing is read or written.
    pub fn empty<P: Into<PathBuf>>(path: P) -> NoteStore {
        NoteStore {
            path: path.into(),
            notes: vec![],
            next_id: 0,
        }
    }

    /// Load the notes at `path`. A missing file gives an empty store; so does
    /// an unreadable or malformed one, which is logged and left as it is.
    pub fn load<P: Into<PathBuf>>(path: P) -> NoteStore {
        let mut store = NoteStore::empty(path);
        match read_records(&store.path) {
            Ok(Some(records)) => {
                for rec in records {
                    let id = store.issue_id();
                    store.notes.push(rec.into_note(id));
                }
                log::info!("loaded {} notes from {}", store.notes.len(), store.path.display());
            }
            Ok(None) => {
                log::info!("no notes file at {}, starting fresh", store.path.display());
            }
            Err(e) => {
                log::warn!("could not read notes from {}: {}; starting fresh",
                           store.path.display(),
                           e);
            }
        }
        store
    }

    /// Write every note, in order, over the backing file.
    pub fn save(&self) -> Result<()> {
        let mut buf = Vec::new();
        {
            let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
            self.notes.serialize(&mut ser)?;
        }
        let mut file = File::create(&self.path)?;
        file.write_all(&buf)?;
        log::info!("saved {} notes to {}", self.notes.len(), self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Note> {
        self.notes.get(position)
    }

    pub fn get_by_id(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// current position of the note with `id`
    pub fn position_of(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    pub fn titles(&self) -> Vec<&str> {
        self.notes.iter().map(|n| n.title.as_str()).collect()
    }

    /// Append a note built from raw form input and save.
    pub fn add(&mut self, title: &str, content: &str, tags: &str) -> Result<NoteId> {
        check_title(title)?;
        let id = self.issue_id();
        self.notes.push(Note::new(id, title, content, tags));
        self.save()?;
        Ok(id)
    }

    /// Replace the fields of the note at `position` and save.
    pub fn update(&mut self, position: usize, title: &str, content: &str, tags: &str) -> Result<()> {
        let id = match self.notes.get(position) {
            Some(n) => n.id,
            None => return selection_fail!(format!("no note at position {}", position)),
        };
        self.update_by_id(id, title, content, tags)
    }

    pub fn update_by_id(&mut self, id: NoteId, title: &str, content: &str, tags: &str) -> Result<()> {
        let pos = match self.position_of(id) {
            Some(p) => p,
            None => return selection_fail!(format!("note {} doesn't exist", id)),
        };
        check_title(title)?;
        self.notes[pos].replace(title, content, tags);
        self.save()
    }

    /// Remove the note at `position`; later notes move up by one.
    pub fn delete(&mut self, position: usize) -> Result<Note> {
        if position >= self.notes.len() {
            return selection_fail!(format!("no note at position {}", position));
        }
        let removed = self.notes.remove(position);
        self.save()?;
        Ok(removed)
    }

    pub fn delete_by_id(&mut self, id: NoteId) -> Result<Note> {
        match self.position_of(id) {
            Some(p) => self.delete(p),
            None => selection_fail!(format!("note {} doesn't exist", id)),
        }
    }

    pub fn search(&self, term: &str) -> Vec<&Note> {
        query::search(&self.notes, term)
    }

    pub fn search_regex(&self, re: &Regex) -> Vec<&Note> {
        query::search_regex(&self.notes, re)
    }

    fn issue_id(&mut self) -> NoteId {
        let id = NoteId(self.next_id);
        self.next_id += 1;
        id
    }
}

fn check_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return validation_fail!("title cannot be empty");
    }
    Ok(())
}

/// `Ok(None)` when there is no file at `path`
fn read_records(path: &Path) -> Result<Option<Vec<NoteRecord>>> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(ref e) if e.kind() == IoErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let records: Vec<NoteRecord> = serde_json::from_str(&contents)?;
    Ok(Some(records))
}
