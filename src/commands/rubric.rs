//! Implements `hackcast rubric`: show and sanity-check the rubric
//! document judges score against.

use anyhow::Result;
use console::style;

use crate::config::Config;

/// Options for the rubric command
#[derive(Debug, Clone, Default)]
pub struct RubricOptions {
    /// Output the parsed rubric as JSON
    pub json: bool,
}

/// Execute the rubric command
pub fn execute_rubric(options: RubricOptions, config: &Config) -> Result<()> {
    let (rubric, _) = super::load_rubric(config)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&rubric)?);
        return Ok(());
    }

    println!("{}\n", style(&rubric.version).bold().underlined());
    for section in &rubric.sections {
        let weight = section
            .weight
            .map(|w| w.to_string())
            .unwrap_or_else(|| "—".to_string());
        println!("{} (weight {weight})", style(&section.name).bold());
        for criterion in &section.criteria {
            let max = criterion
                .max_points
                .map(|m| m.to_string())
                .unwrap_or_else(|| "—".to_string());
            println!("  - {:<34} {:>4} pts", criterion.name, max);
        }
        println!();
    }
    println!("Maximum score: {}", style(rubric.max_total()).bold());
    Ok(())
}
