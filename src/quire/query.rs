//! Title and tag search over a collection of notes.
//!
//! Matching never looks at note content, and results keep the order of the
//! collection they were taken from.

use regex::{Regex, RegexBuilder};

use crate::errors::Result;
use crate::note::Note;

/// Does `term` occur, ignoring case, in the title or in any single tag?
pub fn matches(note: &Note, term: &str) -> bool {
    let term = term.to_lowercase();
    matches_lowered(note, &term)
}

fn matches_lowered(note: &Note, term: &str) -> bool {
    note.title.to_lowercase().contains(term) ||
    note.tags.iter().any(|t| t.to_lowercase().contains(term))
}

/// Notes whose title or any tag contains `term`, case-insensitively. An empty
/// term matches every note.
pub fn search<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    let term = term.to_lowercase();
    notes.iter().filter(|n| matches_lowered(n, &term)).collect()
}

/// Compile a case-insensitive search pattern.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

/// Notes whose title or any tag matches `re`.
pub fn search_regex<'a>(notes: &'a [Note], re: &Regex) -> Vec<&'a Note> {
    notes.iter()
         .filter(|n| re.is_match(&n.title) || n.tags.iter().any(|t| re.is_match(t)))
         .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::NoteId;

    fn seed() -> Vec<Note> {
        vec![Note::new(NoteId(0), "Groceries", "eggs and flour", "home, food"),
             Note::new(NoteId(1), "Report", "", "Work")]
    }

    fn titles(found: Vec<&Note>) -> Vec<&str> {
        found.into_iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn tag_match_finds_report_only() {
        let notes = seed();
        assert_eq!(titles(search(&notes, "wor")), vec!["Report"]);
    }

    #[test]
    fn title_match_keeps_collection_order() {
        let notes = seed();
        assert_eq!(titles(search(&notes, "o")), vec!["Groceries", "Report"]);
    }

    #[test]
    fn empty_term_matches_everything() {
        let notes = seed();
        assert_eq!(titles(search(&notes, "")), vec!["Groceries", "Report"]);
    }

    #[test]
    fn case_is_ignored_on_both_sides() {
        let notes = seed();
        assert_eq!(titles(search(&notes, "GROC")), vec!["Groceries"]);
        assert_eq!(titles(search(&notes, "WoRk")), vec!["Report"]);
        assert!(matches(&notes[1], "work"));
    }

    #[test]
    fn content_is_not_searched() {
        let notes = seed();
        assert!(search(&notes, "flour").is_empty());
    }

    #[test]
    fn tags_are_matched_one_at_a_time() {
        // "me, f" only exists in the joined tag line
        let notes = seed();
        assert!(search(&notes, "me, f").is_empty());
    }

    #[test]
    fn regex_search_on_titles_and_tags() {
        let notes = seed();
        let re = compile_pattern("^rep").unwrap();
        assert_eq!(titles(search_regex(&notes, &re)), vec!["Report"]);
        let re = compile_pattern("^(food|work)$").unwrap();
        assert_eq!(titles(search_regex(&notes, &re)), vec!["Groceries", "Report"]);
        let re = compile_pattern("flour").unwrap();
        assert!(search_regex(&notes, &re).is_empty());
    }

    #[test]
    fn bad_pattern_is_an_error() {
        assert!(compile_pattern("(unclosed").is_err());
    }
}
