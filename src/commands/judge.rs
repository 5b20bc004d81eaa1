//! Implements `hackcast judge`: the judging console.
//!
//! Gated to judges and organizers. A session scores one project at a
//! time against the parsed rubric; switching projects discards the
//! score sheet. AI pre-scores are optional suggestions that human
//! entries always override, and a pre-score response that arrives
//! after the judge switched projects is discarded by the session's
//! generation check.

use anyhow::{anyhow, bail, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::{Project, ProjectStore};
use crate::config::Config;
use crate::gateway::Gateway;
use crate::rubric::Rubric;
use crate::scoring::{grand_total, section_totals};
use crate::session::{JudgeSession, UserRole};

/// Options for the judge command
#[derive(Debug, Clone, Default)]
pub struct JudgeOptions {
    /// Current user role (must be judge or organizer)
    pub role: UserRole,
    /// Preselect a project by id
    pub project: Option<String>,
    /// Fetch an AI pre-score before scoring
    pub ai: bool,
    /// Non-interactive score entries, `"Criterion=value"` each
    pub set: Vec<String>,
    /// Print totals and exit (non-interactive with --project)
    pub totals: bool,
}

/// Execute the judge command
pub fn execute_judge(options: JudgeOptions, config: &Config) -> Result<()> {
    if !options.role.can_judge() {
        bail!("access denied: this console is for judges and organizers only");
    }

    // A parse failure blocks judging for the session; it is never an
    // empty rubric.
    let (rubric, document) = super::load_rubric(config)?;

    let store = ProjectStore::seeded();
    let mut session = JudgeSession::new();

    let non_interactive = options.totals || !options.set.is_empty();
    if non_interactive {
        let project_id = options
            .project
            .clone()
            .ok_or_else(|| anyhow!("--set/--totals need --project <id>"))?;
        let project = store
            .get(&project_id)
            .ok_or_else(|| anyhow!("unknown project: {project_id}"))?;
        session.select_project(&project.id);
        if options.ai {
            fetch_pre_score(config, &mut session, project, &rubric, &document);
        }
        for entry in &options.set {
            let (criterion, value) = parse_set_entry(entry, &rubric)?;
            session.set_human_score(&criterion, value);
        }
        print_totals(&rubric, &session, project);
        return Ok(());
    }

    run_console(options, config, &store, &rubric, &document, &mut session)
}

/// Interactive console loop
fn run_console(
    options: JudgeOptions,
    config: &Config,
    store: &ProjectStore,
    rubric: &Rubric,
    document: &str,
    session: &mut JudgeSession,
) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{} (rubric {})\n", style("Judging Console").bold(), rubric.version);

    let mut current = match options.project {
        Some(id) => store
            .get(&id)
            .ok_or_else(|| anyhow!("unknown project: {id}"))?,
        None => select_project(store, &theme)?,
    };
    session.select_project(&current.id);
    if options.ai {
        fetch_pre_score(config, session, current, rubric, document);
    }

    loop {
        let actions = [
            "Score a criterion",
            "Show totals",
            "Get AI pre-score",
            "Switch project",
            "Done",
        ];
        let action = Select::with_theme(&theme)
            .with_prompt(format!("{} — {}", current.name, current.team_name))
            .items(&actions)
            .default(0)
            .interact()?;
        match action {
            0 => score_criterion(rubric, session, &theme)?,
            1 => print_totals(rubric, session, current),
            2 => fetch_pre_score(config, session, current, rubric, document),
            3 => {
                // Switching projects resets the score sheet and
                // invalidates any in-flight pre-score.
                current = select_project(store, &theme)?;
                session.select_project(&current.id);
            }
            _ => break,
        }
    }
    print_totals(rubric, session, current);
    Ok(())
}

fn select_project<'a>(store: &'a ProjectStore, theme: &ColorfulTheme) -> Result<&'a Project> {
    let labels: Vec<String> = store
        .all()
        .iter()
        .map(|p| format!("{} — {}", p.name, p.team_name))
        .collect();
    let index = Select::with_theme(theme)
        .with_prompt("Select a project to begin judging")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(&store.all()[index])
}

fn score_criterion(rubric: &Rubric, session: &mut JudgeSession, theme: &ColorfulTheme) -> Result<()> {
    let mut labels = Vec::new();
    let mut names = Vec::new();
    for section in &rubric.sections {
        for criterion in &section.criteria {
            let max = criterion
                .max_points
                .map(|m| m.to_string())
                .unwrap_or_else(|| "—".to_string());
            let current = crate::scoring::effective_score(session.scores(), &criterion.name);
            labels.push(format!(
                "{} / {}: {} (now {current})",
                section.name, criterion.name, max
            ));
            names.push(criterion.name.clone());
        }
    }
    let index = Select::with_theme(theme)
        .with_prompt("Criterion")
        .items(&labels)
        .default(0)
        .interact()?;
    // Values above max are accepted unchanged; clamping is pending a
    // product decision.
    let value: f64 = Input::with_theme(theme)
        .with_prompt(format!("Score for {}", names[index]))
        .interact_text()?;
    session.set_human_score(&names[index], value);

    if let Some(entry) = session.scores().get(&names[index]) {
        if let Some(ai) = &entry.ai {
            println!(
                "  {} AI suggested {} — {} (confidence {:.0}%)",
                style("ℹ").dim(),
                ai.score,
                ai.rationale,
                ai.confidence * 100.0
            );
        }
    }
    Ok(())
}

/// Fetch an AI pre-score with a spinner. Failure falls back to an
/// empty score set and a warning; it never aborts the session.
fn fetch_pre_score(
    config: &Config,
    session: &mut JudgeSession,
    project: &Project,
    rubric: &Rubric,
    document: &str,
) {
    let gateway = Gateway::new(config.gateway.clone());
    let generation = session.generation();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Generating AI Pre-score...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    let result = gateway.pre_score(project, rubric, document);
    spinner.finish_and_clear();

    match result {
        Ok(scores) => {
            if session.apply_ai_scores(generation, scores) {
                println!("{} AI pre-score applied.", style("✓").green());
            } else {
                println!(
                    "{} Pre-score arrived for a project no longer selected; discarded.",
                    style("⚠").yellow()
                );
            }
        }
        Err(e) => {
            tracing::debug!("pre-score failed: {e}");
            eprintln!(
                "{} AI pre-score unavailable; starting from an empty score sheet.",
                style("⚠").yellow()
            );
        }
    }
}

/// Parse a `"Criterion=value"` flag, validating the criterion exists
fn parse_set_entry(entry: &str, rubric: &Rubric) -> Result<(String, f64)> {
    let (name, value) = entry
        .split_once('=')
        .ok_or_else(|| anyhow!("expected Criterion=value, got {entry:?}"))?;
    let name = name.trim();
    let known = rubric
        .sections
        .iter()
        .flat_map(|s| s.criteria.iter())
        .any(|c| c.name == name);
    if !known {
        bail!("unknown criterion: {name}");
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| anyhow!("invalid score for {name}: {value:?}"))?;
    Ok((name.to_string(), value))
}

fn print_totals(rubric: &Rubric, session: &JudgeSession, project: &Project) {
    let totals = section_totals(rubric, session.scores());
    println!("\n{} — {}", style(&project.name).bold(), project.team_name);
    for section in &rubric.sections {
        if let Some(total) = totals.get(&section.name) {
            println!(
                "  {:<14} {:>5} / {}",
                section.name,
                total.total,
                total.max
            );
        }
    }
    println!(
        "  {:<14} {:>5} / {}\n",
        style("Total").bold(),
        grand_total(&totals),
        rubric.max_total()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::RUBRIC_DOCUMENT;

    #[test]
    fn test_parse_set_entry() {
        let rubric = Rubric::parse(RUBRIC_DOCUMENT).unwrap();
        let (name, value) = parse_set_entry("Code quality=7", &rubric).unwrap();
        assert_eq!(name, "Code quality");
        assert_eq!(value, 7.0);
    }

    #[test]
    fn test_parse_set_entry_unknown_criterion() {
        let rubric = Rubric::parse(RUBRIC_DOCUMENT).unwrap();
        assert!(parse_set_entry("Vibes=10", &rubric).is_err());
        assert!(parse_set_entry("no-equals", &rubric).is_err());
        assert!(parse_set_entry("Code quality=lots", &rubric).is_err());
    }
}
