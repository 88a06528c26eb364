use clap::{Parser, Subcommand};
use todoz::model::Filter;

#[derive(Parser, Debug)]
#[command(name = "todoz", version)]
#[command(about = "A small todo list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a todo
    #[command(alias = "a")]
    Add {
        /// Text of the todo
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List todos
    #[command(alias = "ls")]
    List {
        /// Which todos to show: all, active or completed
        filter: Option<Filter>,
    },

    /// Mark todos as completed, or back to active
    #[command(alias = "done")]
    Toggle {
        /// Indexes or id prefixes of the todos (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        todos: Vec<String>,
    },

    /// Replace the text of a todo
    #[command(alias = "e")]
    Edit {
        /// Index or id prefix of the todo
        todo: String,

        /// New text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete one or more todos
    #[command(alias = "rm")]
    Delete {
        /// Indexes or id prefixes of the todos (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        todos: Vec<String>,
    },

    /// Delete every completed todo
    Clear,

    /// Print where the todo list is stored
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, default-filter)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
