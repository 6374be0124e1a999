//! Chat messages and their split into prose and table blocks.
//!
//! An assistant reply such as
//!
//! ```text
//! See table:
//!
//! | Name | Age |
//! | --- | --- |
//! | Alice | 30 |
//!
//! Done.
//! ```
//!
//! becomes `[Prose("See table:"), Table(..), Prose("Done.")]`. The split uses
//! the byte span from [`find_table`], so what is rendered as a grid is
//! exactly what was parsed.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::{find_table, TableData};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Assistant => f.write_str("assistant"),
        }
    }
}

/// Context the assistant answered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChatMode {
    /// Answers grounded in the active workspace's documents.
    #[default]
    Workspace,
    /// No document context.
    General,
    /// Isolated Q&A over uploaded files.
    TempDocs,
}

impl ChatMode {
    /// Human-readable label, e.g. `temp docs`.
    pub fn label(self) -> &'static str {
        match self {
            ChatMode::Workspace => "workspace",
            ChatMode::General => "general",
            ChatMode::TempDocs => "temp docs",
        }
    }
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default = "new_message_id")]
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub mode: ChatMode,
    /// Documents the answer was drawn from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

fn new_message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: new_message_id(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            mode: ChatMode::default(),
            sources: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ChatMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources = sources.into_iter().map(Into::into).collect();
        self
    }

    /// Whether tables in this message are drawn as grids.
    ///
    /// Assistant messages always are; user messages only when `user_tables`.
    pub fn renders_tables(&self, user_tables: bool) -> bool {
        self.role == Role::Assistant || user_tables
    }

    /// Split the content into displayable blocks.
    pub fn blocks(&self, user_tables: bool) -> Vec<Block> {
        if self.renders_tables(user_tables) {
            blocks(&self.content)
        } else {
            vec![Block::Prose(self.content.clone())]
        }
    }
}

/// A displayable piece of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum Block {
    /// Text shown verbatim.
    Prose(String),
    /// A table shown as a grid.
    Table(TableData),
}

/// A text divided around its first table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSplit<'a> {
    /// Trimmed text before the table, `None` when blank.
    pub before: Option<&'a str>,
    pub table: TableData,
    /// The exact source of the table.
    pub source: &'a str,
    /// Trimmed text after the table, `None` when blank. Later tables stay here as text.
    pub after: Option<&'a str>,
}

impl TableSplit<'_> {
    pub fn into_blocks(self) -> Vec<Block> {
        let mut blocks = Vec::with_capacity(3);
        if let Some(before) = self.before {
            blocks.push(Block::Prose(before.to_string()));
        }
        blocks.push(Block::Table(self.table));
        if let Some(after) = self.after {
            blocks.push(Block::Prose(after.to_string()));
        }
        blocks
    }
}

/// Divide `text` into before / table / after, or `None` if it has no table.
pub fn split_around_table(text: &str) -> Option<TableSplit<'_>> {
    let found = find_table(text)?;

    Some(TableSplit {
        before: non_blank(found.before()),
        source: found.as_str(),
        after: non_blank(found.after()),
        table: found.into_data(),
    })
}

/// Split `text` into blocks; text without a table is a single prose block.
pub fn blocks(text: &str) -> Vec<Block> {
    match split_around_table(text) {
        Some(split) => split.into_blocks(),
        None => vec![Block::Prose(text.to_string())],
    }
}

fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
