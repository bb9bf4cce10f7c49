use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "quire")]
#[command(version)]
#[command(about = "a small note keeper with tags and search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// View the note at this position
    #[arg(required = false)]
    pub position: Option<usize>,

    /// Notes file to use (defaults to the path in ~/.quire, then ./notes.json)
    #[arg(short, long, env = "QUIRE_FILE", global = true)]
    pub file: Option<String>,
}

/// Listing options shared by `list` and `search`
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Limit results
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output as YAML
    #[arg(long)]
    pub yaml: bool,

    /// Condensed output
    #[arg(short, long)]
    pub condensed: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new note
    Add {
        /// Title of the note
        title: String,

        /// Content of the note
        #[arg(default_value = "")]
        content: String,

        /// Comma separated tags
        #[arg(short, long, default_value = "")]
        tags: String,

        /// Use editor to write the content
        #[arg(short, long)]
        editor: bool,
    },

    /// Update the note at a position; fields not given are kept
    Update {
        /// Position of the note to update
        position: usize,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,

        /// New comma separated tags
        #[arg(short = 'g', long)]
        tags: Option<String>,

        /// Use editor to change the content
        #[arg(short, long)]
        editor: bool,
    },

    /// Delete the note at a position
    #[command(visible_alias = "del", alias = "rm")]
    Delete {
        /// Position of the note to delete
        position: usize,
    },

    /// Search titles and tags
    Search {
        /// Text to look for (case-insensitive)
        term: String,

        /// Treat the term as a regular expression
        #[arg(short, long)]
        regex: bool,

        #[command(flatten)]
        list: ListArgs,
    },

    /// List notes (default if no command)
    List {
        /// Sort by last touched
        #[arg(short, long)]
        datesort: bool,

        /// Reverse sort
        #[arg(short, long)]
        reverse: bool,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Show information about the notes file
    Info,
}
