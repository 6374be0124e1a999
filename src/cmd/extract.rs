use std::path::Path;

use anyhow::Result;

use mdgrid::{parse_table, render_table, Config, OutputFormat, RenderOptions};

use super::input::read_input;

/// Print the first table in the input.
///
/// A missing table is a normal outcome, not an error: `null` in JSON,
/// `No table found` otherwise.
pub fn cmd_extract(file: Option<&Path>, format: OutputFormat, config: &Config) -> Result<()> {
    let text = read_input(file)?;
    let table = parse_table(&text);

    match (format, table) {
        (OutputFormat::Json, table) => {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        (OutputFormat::Markdown, Some(table)) => {
            print!("{}", table.to_markdown());
        }
        (OutputFormat::Text, Some(table)) => {
            println!("{}", render_table(&table, &RenderOptions::from(config)));
        }
        (OutputFormat::Markdown | OutputFormat::Text, None) => {
            println!("No table found");
        }
    }

    Ok(())
}
