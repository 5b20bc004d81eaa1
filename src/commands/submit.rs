//! Implements `hackcast submit`: the submission studio.
//!
//! Creates or edits a submission. The description can be auto-
//! categorized by the gateway; on any gateway failure the flow falls
//! back to manual category selection, never to an error.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::seed::CATEGORIES;
use crate::catalog::{NewProject, Project, ProjectStore, ProjectUpdate};
use crate::config::Config;
use crate::gateway::{Categorization, Gateway};
use crate::session::{User, UserRole};

/// Options for the submit command
#[derive(Debug, Clone, Default)]
pub struct SubmitOptions {
    /// Current user role
    pub role: UserRole,
    /// Project name (prompted when missing)
    pub name: Option<String>,
    /// One-line tagline
    pub tagline: Option<String>,
    /// Project description (prompted when missing)
    pub description: Option<String>,
    /// Skip AI categorization and pick categories manually
    pub no_ai: bool,
    /// Go live immediately after submitting
    pub go_live: bool,
    /// Edit an existing submission instead of creating one
    pub edit: Option<String>,
}

/// Execute the submit command
pub fn execute_submit(options: SubmitOptions, config: &Config) -> Result<()> {
    if !options.role.can_submit() {
        anyhow::bail!(
            "access denied: submitting requires the participant or organizer role \
             (try --role participant)"
        );
    }
    let user = User::for_role(options.role);
    let mut store = ProjectStore::seeded();

    if let Some(project_id) = options.edit.clone() {
        return edit_submission(&mut store, &project_id, &options);
    }

    let theme = ColorfulTheme::default();
    let name = match options.name.clone() {
        Some(name) => name,
        None => Input::with_theme(&theme)
            .with_prompt("Project name")
            .interact_text()?,
    };
    let tagline = match options.tagline.clone() {
        Some(tagline) => tagline,
        None => Input::with_theme(&theme)
            .with_prompt("Tagline")
            .allow_empty(true)
            .interact_text()?,
    };
    let description = match options.description.clone() {
        Some(description) => description,
        None => Input::with_theme(&theme)
            .with_prompt("Description")
            .interact_text()?,
    };

    if name.is_empty() || description.is_empty() {
        eprintln!(
            "{} A submission needs at least a name and a description.",
            style("✗").red()
        );
        std::process::exit(1);
    }

    let categorization = pick_categories(&options, config, &description)?;

    let project = store.add(NewProject {
        team_name: user.name.clone(),
        name,
        tagline,
        description,
        category_primary: categorization.category_primary,
        category_secondary: categorization.category_secondary,
    });
    let project_id = project.id.clone();
    print_card(project);

    if options.go_live {
        store.set_live(&project_id, true)?;
        println!(
            "{} Live stream created successfully! You can find it with {}.",
            style("✓").green(),
            style("hackcast browse --live").cyan()
        );
    } else {
        println!(
            "{} Draft saved for this session. Go live with {}.",
            style("✓").green(),
            style("hackcast submit --edit <id> --go-live").cyan()
        );
    }
    Ok(())
}

/// Categorize via the gateway, or manually when AI is skipped,
/// unconfigured, or failing
fn pick_categories(
    options: &SubmitOptions,
    config: &Config,
    description: &str,
) -> Result<Categorization> {
    if !options.no_ai {
        let gateway = Gateway::new(config.gateway.clone());
        if gateway.is_configured() {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("Categorizing with AI...");
            spinner.enable_steady_tick(std::time::Duration::from_millis(100));
            let result = gateway.categorize(description);
            spinner.finish_and_clear();

            match result {
                Ok(categorization) => {
                    println!(
                        "{} AI suggests: {} {}",
                        style("✓").green(),
                        style(&categorization.category_primary).cyan(),
                        if categorization.category_secondary.is_empty() {
                            String::new()
                        } else {
                            format!("(+ {})", categorization.category_secondary.join(", "))
                        }
                    );
                    let accept = Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt("Use these categories?")
                        .default(true)
                        .interact()?;
                    if accept {
                        return Ok(categorization);
                    }
                }
                Err(e) => {
                    tracing::debug!("categorization failed: {e}");
                    eprintln!(
                        "{} AI categorization unavailable; pick categories manually.",
                        style("⚠").yellow()
                    );
                }
            }
        } else {
            eprintln!(
                "{} GEMINI_API_KEY not set; pick categories manually.",
                style("⚠").yellow()
            );
        }
    }
    manual_categories()
}

/// Manual selection fallback: one primary, up to two secondary
fn manual_categories() -> Result<Categorization> {
    let theme = ColorfulTheme::default();
    let primary_idx = Select::with_theme(&theme)
        .with_prompt("Primary category")
        .items(CATEGORIES)
        .default(0)
        .interact()?;
    let secondary_pool: Vec<&&str> = CATEGORIES
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != primary_idx)
        .map(|(_, c)| c)
        .collect();
    let picked = MultiSelect::with_theme(&theme)
        .with_prompt("Secondary categories (up to two)")
        .items(&secondary_pool)
        .interact()?;
    let category_secondary: Vec<String> = picked
        .into_iter()
        .take(2)
        .map(|i| secondary_pool[i].to_string())
        .collect();
    Ok(Categorization {
        category_primary: CATEGORIES[primary_idx].to_string(),
        category_secondary,
    })
}

/// Edit an existing submission in place
fn edit_submission(store: &mut ProjectStore, project_id: &str, options: &SubmitOptions) -> Result<()> {
    let current = store
        .get(project_id)
        .ok_or_else(|| anyhow::anyhow!("unknown project: {project_id}"))?
        .clone();
    let theme = ColorfulTheme::default();

    let name: String = match options.name.clone() {
        Some(name) => name,
        None => Input::with_theme(&theme)
            .with_prompt("Project name")
            .default(current.name.clone())
            .interact_text()?,
    };
    let tagline: String = match options.tagline.clone() {
        Some(tagline) => tagline,
        None => Input::with_theme(&theme)
            .with_prompt("Tagline")
            .default(current.tagline.clone())
            .interact_text()?,
    };
    let description: String = match options.description.clone() {
        Some(description) => description,
        None => Input::with_theme(&theme)
            .with_prompt("Description")
            .default(current.description.clone())
            .interact_text()?,
    };

    let updated = store.update(
        project_id,
        ProjectUpdate {
            name: Some(name),
            tagline: Some(tagline),
            description: Some(description),
            ..Default::default()
        },
    )?;
    print_card(updated);

    if options.go_live {
        store.set_live(project_id, true)?;
        println!("{} {} is now live.", style("✓").green(), project_id);
    }
    Ok(())
}

fn print_card(project: &Project) {
    println!("\n{}", style(&project.name).bold().underlined());
    if !project.tagline.is_empty() {
        println!("{}", project.tagline);
    }
    println!(
        "team {}  |  {}{}",
        project.team_name,
        project.category_primary,
        if project.category_secondary.is_empty() {
            String::new()
        } else {
            format!(" (+ {})", project.category_secondary.join(", "))
        }
    );
    println!("id: {}\n", style(&project.id).dim());
}
