//! Terminal rendering of tables, messages and transcripts.
//!
//! Prose is printed verbatim. Tables are drawn with comfy-table: one header
//! cell per column and one cell per row/column pair. Ragged rows are the
//! renderer's problem, not the extractor's: short rows get empty trailing
//! cells and long rows widen the grid.

use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{ContentArrangement, Table};

use crate::config::{Config, GridStyle};
use crate::message::{Block, Message};
use crate::table::TableData;

/// Options shared by every render function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum grid width; cells wrap to fit. `None` keeps natural width.
    pub width: Option<u16>,
    pub style: GridStyle,
    /// Draw tables in user messages as grids too.
    pub user_tables: bool,
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            width: config.width,
            style: config.style,
            user_tables: config.user_tables,
        }
    }
}

/// Draw a table as a grid. No trailing newline.
pub fn render_table(data: &TableData, options: &RenderOptions) -> String {
    let preset = match options.style {
        GridStyle::Utf8 => UTF8_FULL,
        GridStyle::Ascii => ASCII_FULL,
        GridStyle::Markdown => return data.to_markdown().trim_end().to_string(),
    };

    let mut table = Table::new();
    table.load_preset(preset);

    if let Some(width) = options.width {
        table.set_width(width);
        table.set_content_arrangement(ContentArrangement::Dynamic);
    }

    table.set_header(&data.headers);
    for row in &data.rows {
        table.add_row(row);
    }

    table.to_string()
}

/// Render blocks separated by blank lines.
pub fn render_blocks(blocks: &[Block], options: &RenderOptions) -> String {
    blocks
        .iter()
        .map(|block| match block {
            Block::Prose(text) => text.clone(),
            Block::Table(data) => render_table(data, options),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render one message: role line, content, sources, then `HH:MM:SS • mode`.
pub fn render_message(message: &Message, options: &RenderOptions) -> String {
    let mut out = format!("{}:\n", message.role);
    out.push_str(&render_blocks(&message.blocks(options.user_tables), options));
    out.push('\n');

    if !message.sources.is_empty() {
        out.push_str("sources: ");
        out.push_str(&message.sources.join(", "));
        out.push('\n');
    }

    out.push_str(&format!(
        "{} • {}",
        message.timestamp.format("%H:%M:%S"),
        message.mode.label()
    ));
    out
}

/// Render a whole transcript, one message after another.
pub fn render_transcript(messages: &[Message], options: &RenderOptions) -> String {
    messages
        .iter()
        .map(|message| render_message(message, options))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::message::{ChatMode, Role};
    use crate::table::parse_table;

    const TABLE: &str = "| Name | Age |\n| --- | --- |\n| Alice | 30 |\n| Bob | 25 |\n";

    fn people() -> TableData {
        parse_table(TABLE).unwrap()
    }

    #[test]
    fn grid_contains_every_cell() {
        let grid = render_table(&people(), &RenderOptions::default());
        for cell in ["Name", "Age", "Alice", "30", "Bob", "25"] {
            assert!(grid.contains(cell), "missing {cell} in\n{grid}");
        }
        assert!(grid.contains('│'));
    }

    #[test]
    fn ascii_grid_uses_plain_characters() {
        let options = RenderOptions {
            style: GridStyle::Ascii,
            ..RenderOptions::default()
        };
        let grid = render_table(&people(), &options);
        assert!(grid.contains("+-"));
        assert!(grid.is_ascii());
    }

    #[test]
    fn markdown_style_renders_normalised_table() {
        let options = RenderOptions {
            style: GridStyle::Markdown,
            ..RenderOptions::default()
        };
        assert_eq!(render_table(&people(), &options), TABLE.trim_end());
    }

    #[test]
    fn width_limit_wraps_cells() {
        let data = TableData {
            headers: vec!["Topic".into(), "Summary".into()],
            rows: vec![vec![
                "Rust".into(),
                "a language empowering everyone to build reliable and efficient software".into(),
            ]],
        };
        let options = RenderOptions {
            width: Some(40),
            ..RenderOptions::default()
        };
        let grid = render_table(&data, &options);
        assert!(grid.lines().count() > 5);
        for line in grid.lines() {
            assert!(line.chars().count() <= 40, "line too wide: {line}");
        }
    }

    #[test]
    fn ragged_rows_render() {
        let data = parse_table("| A | B | C |\n|---|---|---|\n| 1 |\n| 1 | 2 | 3 | 4 |\n").unwrap();
        let grid = render_table(&data, &RenderOptions::default());
        assert!(grid.contains('4'));
        let widths: Vec<usize> = grid.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn blocks_are_separated_by_blank_lines() {
        let blocks = vec![
            Block::Prose("Before".to_string()),
            Block::Table(people()),
            Block::Prose("After".to_string()),
        ];
        let out = render_blocks(&blocks, &RenderOptions::default());
        assert!(out.starts_with("Before\n\n"));
        assert!(out.ends_with("\n\nAfter"));
    }

    #[test]
    fn message_has_role_sources_and_footer() {
        let mut message = Message::new(Role::Assistant, format!("See table:\n\n{TABLE}\nDone."))
            .with_mode(ChatMode::TempDocs)
            .with_sources(["Document_1.pdf", "Research_Notes.md"]);
        message.timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 5).unwrap();

        let out = render_message(&message, &RenderOptions::default());
        assert!(out.starts_with("assistant:\nSee table:\n\n"));
        assert!(out.contains("Alice"));
        assert!(out.contains("\n\nDone.\n"));
        assert!(out.contains("sources: Document_1.pdf, Research_Notes.md\n"));
        assert!(out.ends_with("09:30:05 • temp docs"));
    }

    #[test]
    fn user_message_keeps_raw_table() {
        let message = Message::new(Role::User, TABLE);
        let out = render_message(&message, &RenderOptions::default());
        assert!(out.contains("| Alice | 30 |"));
        assert!(!out.contains('│'));
    }

    #[test]
    fn options_follow_config() {
        let config = Config {
            width: Some(60),
            style: GridStyle::Ascii,
            user_tables: true,
            ..Config::default()
        };
        let options = RenderOptions::from(&config);
        assert_eq!(options.width, Some(60));
        assert_eq!(options.style, GridStyle::Ascii);
        assert!(options.user_tables);
    }

    #[test]
    fn transcript_joins_messages() {
        let messages = vec![
            Message::new(Role::User, "Show me ages"),
            Message::new(Role::Assistant, TABLE),
        ];
        let out = render_transcript(&messages, &RenderOptions::default());
        assert!(out.starts_with("user:\nShow me ages\n"));
        assert!(out.contains("\n\nassistant:\n"));
    }
}
