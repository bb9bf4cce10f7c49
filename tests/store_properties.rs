//! Property tests for the note store against a real file in a temp dir.

use proptest::prelude::*;
use quire::{Note, NoteStore};
use tempfile::TempDir;

fn expected_tags(input: &str) -> Vec<String> {
    input.split(',')
         .map(|t| t.trim().to_string())
         .filter(|t| !t.is_empty())
         .collect()
}

fn store_with(dir: &TempDir, titles: &[String]) -> NoteStore {
    let mut store = NoteStore::load(dir.path().join("notes.json"));
    for (i, t) in titles.iter().enumerate() {
        store.add(t, &format!("content {}", i), "x, y").unwrap();
    }
    store
}

fn titles() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_add_appends_one_note(
        existing in titles(),
        title in " {0,3}[A-Za-z][A-Za-z ]{0,12}",
        content in "\\PC{0,30}",
        tags in "[a-z ,]{0,30}"
    ) {
        let dir = TempDir::new().unwrap();
        let mut store = store_with(&dir, &existing);
        let before = store.len();

        store.add(&title, &content, &tags).unwrap();

        prop_assert_eq!(store.len(), before + 1);
        let last = store.get(before).unwrap();
        prop_assert_eq!(&last.title, title.trim());
        prop_assert_eq!(&last.content, content.trim());
        prop_assert_eq!(&last.tags, &expected_tags(&tags));
    }

    #[test]
    fn prop_blank_title_changes_nothing(
        existing in titles(),
        title in "[ \t\n]{0,5}"
    ) {
        let dir = TempDir::new().unwrap();
        let mut store = store_with(&dir, &existing);
        let before: Vec<Note> = store.notes().to_vec();

        let err = store.add(&title, "body", "t").unwrap_err();

        prop_assert!(err.is_validation());
        prop_assert_eq!(store.notes(), &before[..]);
    }

    #[test]
    fn prop_out_of_range_update_and_delete_change_nothing(
        existing in titles(),
        past_end in 0usize..10
    ) {
        let dir = TempDir::new().unwrap();
        let mut store = store_with(&dir, &existing);
        let before: Vec<Note> = store.notes().to_vec();
        let position = store.len() + past_end;

        prop_assert!(store.update(position, "new", "", "").unwrap_err().is_selection());
        prop_assert!(store.delete(position).unwrap_err().is_selection());
        prop_assert_eq!(store.notes(), &before[..]);
    }

    #[test]
    fn prop_update_touches_only_its_note(
        existing in prop::collection::vec("[a-z]{1,8}", 1..8),
        pick in any::<prop::sample::Index>(),
        title in "[A-Z][a-z]{0,8}"
    ) {
        let dir = TempDir::new().unwrap();
        let mut store = store_with(&dir, &existing);
        let before: Vec<Note> = store.notes().to_vec();
        let position = pick.index(store.len());
        let id = store.get(position).unwrap().id();

        store.update(position, &title, "", "new").unwrap();

        prop_assert_eq!(store.len(), before.len());
        prop_assert_eq!(store.position_of(id), Some(position));
        for (i, n) in store.notes().iter().enumerate() {
            if i == position {
                prop_assert_eq!(&n.title, &title);
                prop_assert!(n.content.is_empty());
                prop_assert_eq!(&n.tags, &vec!["new".to_string()]);
            } else {
                prop_assert_eq!(n, &before[i]);
            }
        }
    }

    #[test]
    fn prop_delete_shifts_later_notes_left(
        existing in prop::collection::vec("[a-z]{1,8}", 1..8),
        pick in any::<prop::sample::Index>()
    ) {
        let dir = TempDir::new().unwrap();
        let mut store = store_with(&dir, &existing);
        let before: Vec<Note> = store.notes().to_vec();
        let position = pick.index(store.len());

        let removed = store.delete(position).unwrap();

        prop_assert_eq!(&removed, &before[position]);
        prop_assert_eq!(store.len(), before.len() - 1);
        prop_assert_eq!(&store.notes()[..position], &before[..position]);
        prop_assert_eq!(&store.notes()[position..], &before[position + 1..]);
    }

    #[test]
    fn prop_save_then_load_round_trips(
        notes in prop::collection::vec(
            ("[a-z]{1,6}[ \\PC]{0,10}", "\\PC{0,40}", "[\\PC]{0,20}"), 1..6)
    ) {
        let dir = TempDir::new().unwrap();
        let mut store = NoteStore::load(dir.path().join("notes.json"));
        for (title, content, tags) in &notes {
            store.add(title, content, tags).unwrap();
        }

        let loaded = NoteStore::load(store.path());

        prop_assert_eq!(loaded.notes(), store.notes());
    }

    #[test]
    fn prop_empty_search_returns_everything(existing in titles()) {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, &existing);
        let found: Vec<&str> = store.search("").iter().map(|n| n.title.as_str()).collect();
        prop_assert_eq!(found, store.titles());
    }
}
