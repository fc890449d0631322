//! Output formatting for material listings.

use core::str::FromStr;
use std::io::Write;

use stockroom_inventory::Material;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned, numbered columns.
    #[default]
    Table,
    /// A JSON array of materials.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format `{other}` (expected `table` or `json`)")),
        }
    }
}

pub fn render_materials<W: Write>(
    out: &mut W,
    materials: &[Material],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => render_table(out, materials),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, materials)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn render_table<W: Write>(out: &mut W, materials: &[Material]) -> anyhow::Result<()> {
    if materials.is_empty() {
        writeln!(out, "No materials to be displayed!")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<3} {:>20} {:>20} {:>20} {:>30}",
        "NR", "NAME", "SUPPLIER", "QUANTITY", "EXPIRATION_DATE"
    )?;
    for (i, m) in materials.iter().enumerate() {
        writeln!(
            out,
            "{:<3} {:>20} {:>20} {:>20.4} {:>30}",
            i + 1,
            m.name(),
            m.supplier(),
            m.quantity(),
            m.expiration().to_string()
        )?;
    }
    Ok(())
}
