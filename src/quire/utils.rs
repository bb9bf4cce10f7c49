use std::env::var;
use std::fs;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crossterm::{
    execute,
    style::{Attribute, SetAttribute},
    tty::IsTty,
};
use tempfile::Builder;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::errors::{Error, ErrorKind, Result};
use crate::lineformat::LineFormat;
use crate::note::Note;
use crate::store::DEFAULT_FILE;
use crate::specific_fail_str;

/// How a listing should be ordered and printed
#[derive(Default, Clone, Copy, Debug)]
pub struct ListFlags {
    pub condensed: bool,
    pub datesort: bool,
    pub reverse: bool,
    pub yaml: bool,
}

pub fn stdout_is_tty() -> bool {
    stdout().is_tty()
}

pub fn interactive() -> bool {
    stdout().is_tty() && stdin().is_tty()
}

pub fn termsize() -> usize {
    if let Ok((cols, _rows)) = crossterm::terminal::size() {
        cols as usize
    } else {
        0
    }
}

/// Open `$VISUAL` (or `$EDITOR`, or vi) on a temporary file holding
/// `contents` and return what the user saved.
pub fn drop_to_editor(contents: &str) -> Result<String> {
    let mut tmpfile = Builder::new()
        .prefix("quire")
        .suffix(".txt")
        .rand_bytes(5)
        .tempfile()?;
    tmpfile.write_all(contents.as_bytes())?;
    tmpfile.flush()?;

    let editor = var("VISUAL").or_else(|_| var("EDITOR")).unwrap_or_else(|_| "vi".to_string());

    let status = Command::new(&editor)
        .arg(tmpfile.path())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| Error {
            kind: ErrorKind::Generic,
            desc: format!("failed to start editor '{}'", editor),
            detail: Some(e.to_string()),
        })?;

    if !status.success() {
        return specific_fail_str!("the editor process failed");
    }
    Ok(fs::read_to_string(tmpfile.path())?)
}

pub fn pretty_line(bold: &str, plain: &str, tty: bool) -> Result<()> {
    let mut stdout = stdout();
    if tty {
        execute!(stdout, SetAttribute(Attribute::Bold))?;
    }
    print!("{}", bold);
    if tty {
        execute!(stdout, SetAttribute(Attribute::Reset))?;
    }
    print!("{}", plain);
    Ok(())
}

/// Pad `value` to `width` terminal columns, cutting it with `...` when
/// `truncate` is set and it doesn't fit.
pub fn format_field(value: &str, width: usize, truncate: bool) -> String {
    let field = if value.width() > width && width > 3 && truncate {
        clip(value, width - 3) + "..."
    } else {
        clip(value, width)
    };
    let pad = width.saturating_sub(field.width());
    field + &" ".repeat(pad)
}

/// longest prefix of `value` that fits in `width` columns
fn clip(value: &str, width: usize) -> String {
    let mut used = 0;
    value.chars()
         .take_while(|c| {
             used += c.width().unwrap_or(0);
             used <= width
         })
         .collect()
}

fn print_header(line_format: &LineFormat) -> Result<()> {
    let mut stdout = stdout();
    let colsep = " ".repeat(line_format.colsep);
    let tty = stdout_is_tty();
    let tags = if line_format.tags_width == 0 {
        String::new()
    } else {
        format_field("tags", line_format.tags_width, false) + &colsep
    };

    if tty {
        execute!(stdout, SetAttribute(Attribute::Bold))?;
    }
    print!("{1}{0}{2}{0}{3}{4}\n{5}\n",
           colsep,
           format_field("pos", line_format.position_width, false),
           format_field("title", line_format.title_width, false),
           tags,
           "last touched",
           "-".repeat(line_format.line_width()));
    if tty {
        execute!(stdout, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Order `rows` (position, note) by the listing flags and cut to `limit`
/// (0 means no limit).
pub fn sort_rows<'a>(mut rows: Vec<(usize, &'a Note)>,
                     limit: usize,
                     flags: ListFlags)
                     -> Vec<(usize, &'a Note)> {
    if flags.datesort {
        // unparseable timestamps sort first
        rows.sort_by_key(|(_, n)| n.touched_at());
    }
    if flags.reverse {
        rows.reverse();
    }
    if limit != 0 && limit < rows.len() {
        rows.truncate(limit);
    }
    rows
}

pub fn sorted_print(rows: Vec<(usize, &Note)>, limit: usize, flags: ListFlags) -> Result<()> {
    let rows = sort_rows(rows, limit, flags);

    if flags.yaml {
        let notes: Vec<&Note> = rows.iter().map(|(_, n)| *n).collect();
        print!("{}", serde_yaml::to_string(&notes)?);
        return Ok(());
    }

    let max_width = if stdout_is_tty() {
        Some(termsize()).filter(|w| *w > 0)
    } else {
        None
    };
    let line_format = LineFormat::new(&rows, flags.condensed, max_width);
    if !flags.condensed {
        print_header(&line_format)?;
    }
    for (pos, n) in rows.iter() {
        n.print(*pos, &line_format)?;
    }
    Ok(())
}

/// Resolve the backing file: an explicit path wins; otherwise `~/.quire`, if
/// it is a file, holds the path; otherwise `notes.json` in the working
/// directory.
pub fn find_notes_file(file: &Option<String>) -> Result<PathBuf> {
    if let Some(f) = file {
        return Ok(PathBuf::from(f));
    }
    if let Some(home) = dirs::home_dir() {
        let pointer = home.join(".quire");
        if pointer.is_file() {
            let contents = fs::read_to_string(&pointer)?;
            let trimmed = contents.trim();
            if trimmed.is_empty() {
                return specific_fail_str!("~/.quire is a file but is empty. It should contain the path to a notes file.");
            }
            log::debug!("notes file from {}: {}", pointer.display(), trimmed);
            return Ok(PathBuf::from(trimmed));
        }
    }
    Ok(PathBuf::from(DEFAULT_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::NoteId;

    fn dated(title: &str, ts: &str) -> Note {
        let mut n = Note::new(NoteId(0), title, "", "");
        n.timestamp = ts.to_string();
        n
    }

    #[test]
    fn format_field_pads_and_truncates() {
        assert_eq!(format_field("ab", 4, true), "ab  ");
        assert_eq!(format_field("abcdefgh", 6, true), "abc...");
        assert_eq!(format_field("abcdefgh", 6, false), "abcdef");
        assert_eq!(format_field("héllo wörld", 8, true), "héllo...");
    }

    #[test]
    fn format_field_counts_wide_characters_as_two_columns() {
        assert_eq!(format_field("日本語ノート", 8, true), "日本... ");
        assert_eq!(format_field("日本語", 5, false), "日本 ");
        assert_eq!(format_field("日本", 6, true), "日本  ");
        assert_eq!(format_field("日本語ノート", 8, true).width(), 8);
    }

    #[test]
    fn sort_rows_by_date_then_reverse_and_limit() {
        let a = dated("a", "2024-03-01 00:00:00");
        let b = dated("b", "2023-01-01 00:00:00");
        let c = dated("c", "not a date");
        let rows = vec![(0, &a), (1, &b), (2, &c)];

        let flags = ListFlags { datesort: true, ..Default::default() };
        let sorted = sort_rows(rows.clone(), 0, flags);
        let order: Vec<usize> = sorted.iter().map(|(p, _)| *p).collect();
        assert_eq!(order, vec![2, 1, 0]);

        let flags = ListFlags { datesort: true, reverse: true, ..Default::default() };
        let sorted = sort_rows(rows.clone(), 2, flags);
        let order: Vec<usize> = sorted.iter().map(|(p, _)| *p).collect();
        assert_eq!(order, vec![0, 1]);

        let sorted = sort_rows(rows, 5, ListFlags::default());
        assert_eq!(sorted.len(), 3);
    }

    #[test]
    fn explicit_file_wins() {
        let path = find_notes_file(&Some("/tmp/elsewhere.json".to_string())).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/elsewhere.json"));
    }
}
