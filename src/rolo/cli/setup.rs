use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rolo", bin_name = "rolo", version)]
#[command(about = "A small, ordered contact book for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact
    #[command(alias = "a")]
    Add {
        name: String,
        email: String,
        phone: String,
    },

    /// List contacts
    #[command(alias = "ls")]
    List {
        /// Only show contacts whose name or email contains this
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search contacts by name or email
    Search { term: String },

    /// Edit a contact
    #[command(alias = "e")]
    Edit {
        /// Contact number (e.g. 1)
        index: String,

        /// New name (skips prompting)
        #[arg(long)]
        name: Option<String>,

        /// New email (skips prompting)
        #[arg(long)]
        email: Option<String>,

        /// New phone (skips prompting)
        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete {
        /// Contact number (e.g. 1)
        index: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Move a contact onto another one's position, as a drag and drop would
    #[command(alias = "mv")]
    Move {
        /// Number of the contact to move
        from: String,

        /// Number of the contact to drop it on
        to: String,
    },

    /// Print the contact list as HTML
    Render {
        /// Only render contacts whose name or email contains this
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, message-ttl)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
