use std::path::Path;

use anyhow::Result;

use super::input::read_input;

/// Print `true` if the input contains a table, `false` otherwise.
pub fn cmd_detect(file: Option<&Path>) -> Result<()> {
    let text = read_input(file)?;
    println!("{}", mdgrid::has_table(&text));
    Ok(())
}
