//! `mdgrid` - markdown pipe tables out of chat messages
//!
//! Finds the first pipe table in a block of text (typically an assistant
//! reply), parses it into headers and rows, and splits the surrounding prose
//! off so each part can be displayed on its own.
//!
//! # Modules
//!
//! - [`table`]: detection and extraction (`has_table`, `parse_table`, `find_table`)
//! - [`message`]: chat messages and the before / table / after split
//! - [`render`]: grids, messages and transcripts for the terminal
//! - [`transcript`]: JSON chat transcripts
//! - [`config`]: optional `~/.config/mdgrid/config.toml`
//!
//! # Example
//!
//! ```rust
//! use mdgrid::message::split_around_table;
//!
//! let reply = "See table:\n\n| Name | Age |\n| --- | --- |\n| Alice | 30 |\n\nDone.";
//! let split = split_around_table(reply).unwrap();
//!
//! assert_eq!(split.before, Some("See table:"));
//! assert_eq!(split.table.headers, ["Name", "Age"]);
//! assert_eq!(split.after, Some("Done."));
//! ```

pub mod config;
pub mod error;
pub mod message;
pub mod render;
pub mod table;
pub mod transcript;

pub use config::{Config, GridStyle, OutputFormat};
pub use error::{Error, Result};
pub use message::{split_around_table, Block, ChatMode, Message, Role, TableSplit};
pub use render::{render_message, render_table, render_transcript, RenderOptions};
pub use table::{find_table, has_table, parse_table, TableData, TableMatch};
