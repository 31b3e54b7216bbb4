//! Info command - print dataset shape and filter options.

use std::path::PathBuf;

use colored::Colorize;

pub fn run(file: PathBuf, aliases: Vec<String>, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = super::load_catalog(&file, &aliases)?;

    if verbose {
        if let Some(source) = catalog.source() {
            eprintln!("{}", "Source:".yellow().bold());
            eprintln!("  File:    {}", source.path.display());
            eprintln!("  Format:  {}", source.format);
            eprintln!("  Size:    {} bytes", source.size_bytes);
            eprintln!("  Hash:    {}", source.hash);
            eprintln!("  Loaded:  {}", source.loaded_at.to_rfc3339());
        }
        eprintln!("{}", "Columns:".yellow().bold());
        super::print_bindings(&mut std::io::stderr(), &catalog.bindings())?;
        eprintln!();
    }

    println!("{}", serde_json::to_string_pretty(&catalog.info())?);
    Ok(())
}
