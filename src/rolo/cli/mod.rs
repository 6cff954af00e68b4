//! # CLI Behavior
//!
//! This is **one possible UI client** for rolo, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Numbering
//!
//! Contacts are shown and addressed 1-based (`rolo edit 1` is the first contact).
//! Numbers are always canonical: `rolo list -s ada` may show only `3.`, and
//! `rolo delete 3` deletes that same contact.
//!
//! ## Naked Execution (`rolo`)
//!
//! Running `rolo` with no arguments defaults to `rolo list`.
//!
//! ## Prompts
//!
//! `delete` asks for confirmation unless `--yes` is given. `edit` prompts for each
//! field, showing the current value; an empty answer keeps it. Passing
//! `--name/--email/--phone` skips the prompts.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, dispatch, per-command handlers
//! - `print`: Output formatting (tables, colors, messages)
//! - `prompt`: Terminal implementations of the library's surfaces
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styles

mod commands;
mod print;
mod prompt;
pub mod setup;
mod styles;

pub use commands::run;
