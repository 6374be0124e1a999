use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use mdgrid::render::{render_blocks, render_transcript};
use mdgrid::{transcript, Block, Config, GridStyle, Message, OutputFormat, RenderOptions, Role};

use super::input::read_input;

/// A message together with the blocks it renders as.
#[derive(Serialize)]
struct RenderedMessage<'a> {
    #[serde(flatten)]
    message: &'a Message,
    blocks: Vec<Block>,
}

fn options_for(format: OutputFormat, config: &Config) -> RenderOptions {
    let mut options = RenderOptions::from(config);
    if format == OutputFormat::Markdown {
        options.style = GridStyle::Markdown;
    }
    options
}

/// Render a single message read from the input.
pub fn cmd_render(
    file: Option<&Path>,
    role: Role,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let message = Message::new(role, read_input(file)?);
    let options = options_for(format, config);
    let blocks = message.blocks(options.user_tables);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
    } else {
        println!("{}", render_blocks(&blocks, &options));
    }

    Ok(())
}

/// Render every message of a JSON transcript.
pub fn cmd_transcript(file: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let messages = transcript::load_path(file)
        .with_context(|| format!("failed to load transcript {}", file.display()))?;
    let options = options_for(format, config);

    if format == OutputFormat::Json {
        let rendered: Vec<RenderedMessage<'_>> = messages
            .iter()
            .map(|message| RenderedMessage {
                message,
                blocks: message.blocks(options.user_tables),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        println!("{}", render_transcript(&messages, &options));
    }

    Ok(())
}
