use std::fmt;
use std::io::{self, Write};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::lineformat::LineFormat;
use crate::utils::format_field;

/// timestamp format written to and read from the notes file
pub static TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Identifier handed out by a `NoteStore` when a note enters it. It is not
/// written to disk and only stays meaningful for the store that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(pub(crate) u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single note
#[derive(Serialize, Clone, Debug)]
pub struct Note {
    #[serde(skip)]
    pub(crate) id: NoteId,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub timestamp: String,
}

// ids are process-local, two notes are equal when everything persisted is
impl PartialEq for Note {
    fn eq(&self, other: &Note) -> bool {
        self.title == other.title
            && self.content == other.content
            && self.tags == other.tags
            && self.timestamp == other.timestamp
    }
}

/// On-disk shape of a note; `tags` and `timestamp` may be missing or null.
#[derive(Deserialize, Debug)]
pub(crate) struct NoteRecord {
    title: String,
    content: String,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    timestamp: Option<String>,
}

impl NoteRecord {
    pub(crate) fn into_note(self, id: NoteId) -> Note {
        let timestamp = match self.timestamp {
            Some(t) if !t.is_empty() => t,
            _ => now_timestamp(),
        };
        Note {
            id,
            title: self.title,
            content: self.content,
            tags: self.tags.unwrap_or_default(),
            timestamp,
        }
    }
}

impl Note {
    pub(crate) fn new(id: NoteId, title: &str, content: &str, tags: &str) -> Note {
        Note {
            id,
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            tags: split_tags(tags),
            timestamp: now_timestamp(),
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    /// tags as they'd be typed back into a form, `"a, b"`
    pub fn tag_line(&self) -> String {
        self.tags.join(", ")
    }

    pub fn touched_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp).ok()
    }

    pub(crate) fn replace(&mut self, title: &str, content: &str, tags: &str) {
        self.title = title.trim().to_string();
        self.content = content.trim().to_string();
        self.tags = split_tags(tags);
        self.timestamp = now_timestamp();
    }

    /// print a note as a listing line
    pub fn print(&self, position: usize, line_format: &LineFormat) -> Result<()> {
        self.write(&mut io::stdout(), position, line_format)
    }

    pub fn write<T: Write>(&self,
                           output: &mut T,
                           position: usize,
                           line_format: &LineFormat)
                           -> Result<()> {
        let colsep = " ".repeat(line_format.colsep);
        write!(output,
               "{}",
               format_field(&position.to_string(), line_format.position_width, false))?;
        write!(output, "{}", colsep)?;
        if !self.content.is_empty() && line_format.title_width > 4 {
            write!(output,
                   "{}",
                   format_field(&self.title, line_format.title_width - 4, true))?;
            write!(output, "{}", format_field(" (+)", 4, false))?;
        } else {
            write!(output,
                   "{}",
                   format_field(&self.title, line_format.title_width, true))?;
        }
        if line_format.tags_width != 0 {
            write!(output, "{}", colsep)?;
            write!(output,
                   "{}",
                   format_field(&self.tag_line(), line_format.tags_width, true))?;
        }
        write!(output, "{}", colsep)?;
        writeln!(output,
                 "{}",
                 format_field(&self.timestamp, line_format.timestamp_width, false)
                     .trim_end())?;
        Ok(())
    }
}

/// Split a comma separated tag input into trimmed, non-empty tags.
pub fn split_tags(input: &str) -> Vec<String> {
    input.split(',')
         .map(str::trim)
         .filter(|t| !t.is_empty())
         .map(String::from)
         .collect()
}

pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FMT).to_string()
}

pub fn parse_timestamp(ts: &str) -> Result<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(ts, TIMESTAMP_FMT)?)
}
