use crate::model::TOPICS;
use anyhow::Result;
use std::io::Write;

pub fn write_tags<W: Write>(out: &mut W) -> Result<()> {
    for topic in TOPICS {
        writeln!(out, "{}", topic)?;
    }
    Ok(())
}

pub fn print_tags() -> Result<()> {
    let stdout = std::io::stdout();
    write_tags(&mut stdout.lock())
}
