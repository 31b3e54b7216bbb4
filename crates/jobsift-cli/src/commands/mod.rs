//! CLI command implementations.

pub mod filter;
pub mod info;
pub mod serve;

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use jobsift::{AliasTable, Catalog, ColumnBindings, SemanticCategory};

/// Build an alias table from repeated `--alias category=column` flags.
pub fn alias_table(specs: &[String]) -> Result<AliasTable, Box<dyn std::error::Error>> {
    let mut table = AliasTable::default();
    for spec in specs {
        let (category, alias) = AliasTable::parse_spec(spec)?;
        table = table.with_alias(category, alias);
    }
    Ok(table)
}

/// Load a data file and attach the configured aliases.
pub fn load_catalog(file: &Path, aliases: &[String]) -> Result<Catalog, Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let table = alias_table(aliases)?;
    Ok(Catalog::load(file)?.with_aliases(table))
}

/// Write which column each category resolved to.
pub fn print_bindings(out: &mut impl Write, bindings: &ColumnBindings) -> std::io::Result<()> {
    for category in SemanticCategory::ALL {
        match bindings.get(category) {
            Some(column) => writeln!(out, "  {:10} {}", category.to_string(), column.name.green())?,
            None => writeln!(out, "  {:10} {}", category.to_string(), "(not found)".dimmed())?,
        }
    }
    Ok(())
}
