//! Filter command - run a structured filter offline.

use std::path::PathBuf;

use colored::Colorize;
use jobsift::FilterRequest;

pub fn run(
    file: PathBuf,
    request: FilterRequest,
    aliases: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if request.is_empty() {
        return Err("No filters provided".into());
    }

    let catalog = super::load_catalog(&file, &aliases)?;
    let result = catalog.filter(&request);

    eprintln!(
        "Matched {} of {} postings{}",
        result.count.to_string().white().bold(),
        result.total_count,
        if result.count > result.results.len() {
            format!(" (showing first {})", result.results.len())
        } else {
            String::new()
        }
    );

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
