use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(version, about = "Keep short text notes in a local slot")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a .jotter directory in the current directory
    Init,

    /// Create a new note
    New {
        /// Note title
        #[arg(long, short = 't')]
        title: Option<String>,

        /// Note content
        #[arg(long, short = 'c', conflicts_with = "stdin")]
        content: Option<String>,

        /// Read content from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes, newest first
    List {
        /// Only show notes whose title or content contains this text
        #[arg(long, short = 'f')]
        filter: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Show {
        /// Position in the list (like "2") or id prefix
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit an existing note
    Edit {
        /// Position in the list (like "2") or id prefix
        id: String,

        /// New title
        #[arg(long, short = 't')]
        title: Option<String>,

        /// New content
        #[arg(long, short = 'c', conflicts_with = "stdin")]
        content: Option<String>,

        /// Read new content from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Position in the list (like "2") or id prefix
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Search notes by title and content, ignoring case
    Search {
        /// Text to look for
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
