//! quire keeps short titled notes with tags in a single JSON file.
//!
//! The library side is [`NoteStore`] (load, save, add, update, delete) and the
//! title/tag search in [`query`]. [`run`] is the command line front end built
//! on top of them.

pub mod args;
pub mod errors;
pub mod lineformat;
pub mod note;
pub mod query;
pub mod store;
pub mod utils;

use std::collections::BTreeSet;

use clap::Parser;

use args::{Cli, Commands, ListArgs};
use errors::Result;
use utils::{pretty_line, sorted_print, ListFlags};

pub use note::{Note, NoteId};
pub use store::NoteStore;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = utils::find_notes_file(&cli.file)?;
    let mut store = NoteStore::load(path);
    execute(&cli, &mut store)
}

/// Carry out one parsed command against `store`.
pub fn execute(cli: &Cli, store: &mut NoteStore) -> Result<()> {
    match &cli.command {
        Some(Commands::Add { title, content, tags, editor }) => {
            let content = if *editor && utils::interactive() {
                utils::drop_to_editor(content)?
            } else {
                content.clone()
            };
            let id = store.add(title, &content, tags)?;
            if let Some(pos) = store.position_of(id) {
                println!("added note {}", pos);
            }
        }
        Some(Commands::Update { position, title, content, tags, editor }) => {
            let current = match store.get(*position) {
                Some(n) => n.clone(),
                None => return selection_fail!(format!("no note at position {}", position)),
            };
            let title = title.clone().unwrap_or(current.title.clone());
            let mut content = content.clone().unwrap_or(current.content.clone());
            if *editor && utils::interactive() {
                content = utils::drop_to_editor(&content)?;
            }
            let tags = tags.clone().unwrap_or_else(|| current.tag_line());
            store.update(*position, &title, &content, &tags)?;
            println!("updated note {}", position);
        }
        Some(Commands::Delete { position }) => {
            store.delete(*position)?;
            println!("deleted note {}", position);
        }
        Some(Commands::Search { term, regex, list }) => {
            let found = if *regex {
                let re = query::compile_pattern(term)?;
                store.search_regex(&re)
            } else {
                store.search(term)
            };
            let rows: Vec<(usize, &Note)> = found.into_iter()
                                                 .filter_map(|n| {
                                                     store.position_of(n.id()).map(|p| (p, n))
                                                 })
                                                 .collect();
            if !rows.is_empty() {
                sorted_print(rows, list.limit.unwrap_or(0), list_flags(list, false, false))?;
            } else if list.yaml {
                println!("[]");
            } else {
                println!("nothing found");
            }
        }
        Some(Commands::List { datesort, reverse, list }) => {
            list_notes(store, list, *datesort, *reverse)?;
        }
        Some(Commands::Info) => {
            info(store)?;
        }
        None => {
            if let Some(pos) = cli.position {
                view_note(store, pos)?;
            } else {
                list_notes(store, &ListArgs::default(), false, false)?;
            }
        }
    }
    Ok(())
}

fn list_flags(list: &ListArgs, datesort: bool, reverse: bool) -> ListFlags {
    ListFlags {
        condensed: list.condensed,
        datesort,
        reverse,
        yaml: list.yaml,
    }
}

fn list_notes(store: &NoteStore, list: &ListArgs, datesort: bool, reverse: bool) -> Result<()> {
    if !store.is_empty() {
        let rows: Vec<(usize, &Note)> = store.notes().iter().enumerate().collect();
        sorted_print(rows,
                     list.limit.unwrap_or(0),
                     list_flags(list, datesort, reverse))?;
    } else if list.yaml {
        println!("[]");
    } else {
        println!("no notes yet");
    }
    Ok(())
}

/// print every field of the note at `position`
fn view_note(store: &NoteStore, position: usize) -> Result<()> {
    let note = match store.get(position) {
        Some(n) => n,
        None => return selection_fail!(format!("no note at position {}", position)),
    };
    let tty = utils::stdout_is_tty();
    pretty_line("title\n-----\n", &format!("{}\n\n", note.title), tty)?;
    if !note.content.is_empty() {
        pretty_line("content\n-------\n", &format!("{}\n\n", note.content), tty)?;
    }
    if !note.tags.is_empty() {
        pretty_line("tags\n----\n", &format!("{}\n\n", note.tag_line()), tty)?;
    }
    pretty_line("last touched\n------------\n", &format!("{}\n", note.timestamp), tty)?;
    Ok(())
}

fn info(store: &NoteStore) -> Result<()> {
    let tty = utils::stdout_is_tty();
    let tags: BTreeSet<&str> = store.notes()
                                    .iter()
                                    .flat_map(|n| n.tags.iter().map(String::as_str))
                                    .collect();
    pretty_line("file: ", &format!("{}\n", store.path().display()), tty)?;
    pretty_line("notes: ", &format!("{}\n", store.len()), tty)?;
    pretty_line("tags: ", &format!("{}\n", tags.len()), tty)?;

    let dated = store.notes().iter().filter(|n| n.touched_at().is_some());
    let oldest = dated.clone().min_by_key(|n| n.touched_at());
    let newest = dated.max_by_key(|n| n.touched_at());
    if let (Some(o), Some(n)) = (oldest, newest) {
        pretty_line("note ages: ",
                    &format!("oldest: {}, newest: {}\n", o.timestamp, n.timestamp),
                    tty)?;
    }
    Ok(())
}
