//! Implements `hackcast init` for event setup.

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::catalog::seed::RUBRIC_DOCUMENT;
use crate::config::Config;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Force overwrite an existing config
    pub force: bool,
    /// Skip interactive prompts (use defaults + CLI args)
    pub yes: bool,
    /// Event name shown in headers
    pub event_name: Option<String>,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    let config_path = PathBuf::from("hackcast.config.json");

    if config_path.exists() && !options.force {
        eprintln!(
            "{} Config file already exists. Use --force to overwrite.",
            style("✗").red()
        );
        std::process::exit(1);
    }

    let mut config = Config::default();
    if let Some(name) = options.event_name {
        config.event_name = name;
    } else if !options.yes {
        println!("{} Hackcast Event Setup\n", style("→").cyan());
        config.event_name = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Event name")
            .default(config.event_name.clone())
            .interact_text()?;
    }

    config.save(&config_path)?;
    println!("{} Created {}", style("✓").green(), config_path.display());

    write_rubric_asset(&config, options.yes)?;

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Run {} to explore the project catalog",
        style("hackcast browse").cyan()
    );
    println!(
        "  2. Set {} to enable AI categorization, pre-scoring, and chat summaries",
        style("GEMINI_API_KEY").cyan()
    );
    println!(
        "  3. Judges run {} to open the scoring console",
        style("hackcast judge --role judge").cyan()
    );

    Ok(())
}

/// Write the rubric outline asset unless one is already in place
fn write_rubric_asset(config: &Config, yes: bool) -> Result<()> {
    let rubric_path = PathBuf::from(&config.rubric_path);
    if rubric_path.exists() {
        println!(
            "{} Keeping existing rubric document {}",
            style("→").dim(),
            rubric_path.display()
        );
        return Ok(());
    }

    let write = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Write the default rubric to {}?", rubric_path.display()))
            .default(true)
            .interact()?;
    if write {
        std::fs::write(&rubric_path, RUBRIC_DOCUMENT)?;
        println!("{} Created {}", style("✓").green(), rubric_path.display());
    }
    Ok(())
}
