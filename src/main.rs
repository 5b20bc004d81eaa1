#![forbid(unsafe_code)]
//! Hackcast Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hackcast::commands::{
    execute_browse, execute_init, execute_judge, execute_leaderboard, execute_rubric,
    execute_submit, execute_watch, BrowseOptions, InitOptions, JudgeOptions, LeaderboardOptions,
    RubricOptions, SubmitOptions, WatchOptions,
};
use hackcast::{Config, UserRole};

#[derive(Parser)]
#[command(name = "hackcast")]
#[command(about = "Live hackathon streaming and judging console")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = "hackcast.config.json")]
    config: PathBuf,

    /// Act as this user role for the session
    #[arg(short, long, global = true, value_enum, default_value_t = UserRole::Visitor)]
    role: UserRole,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize an event: write config and the rubric document
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Event name
        #[arg(long)]
        event_name: Option<String>,

        /// Skip interactive prompts (use defaults + CLI args)
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Discover projects: curated rails, or a filtered list
    Browse {
        /// Filter by category (repeatable; matches primary or secondary)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Show only live streams
        #[arg(long)]
        live: bool,

        /// Case-insensitive text search
        #[arg(long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Watch a project stream with live chat
    Watch {
        /// Project id
        project_id: String,

        /// Print the stream card and transcript, skip the chat loop
        #[arg(long)]
        no_chat: bool,
    },

    /// Submit or edit a project
    Submit {
        /// Project name
        #[arg(long)]
        name: Option<String>,

        /// One-line tagline
        #[arg(long)]
        tagline: Option<String>,

        /// Project description
        #[arg(long)]
        description: Option<String>,

        /// Skip AI categorization and pick categories manually
        #[arg(long)]
        no_ai: bool,

        /// Go live immediately
        #[arg(long)]
        go_live: bool,

        /// Edit an existing submission by id
        #[arg(long)]
        edit: Option<String>,
    },

    /// Open the judging console (judges and organizers only)
    Judge {
        /// Preselect a project by id
        #[arg(long)]
        project: Option<String>,

        /// Fetch an AI pre-score first
        #[arg(long)]
        ai: bool,

        /// Set a human score non-interactively, Criterion=value (repeatable)
        #[arg(long = "set")]
        set: Vec<String>,

        /// Print totals and exit (needs --project)
        #[arg(long)]
        totals: bool,
    },

    /// Show the leaderboard
    Leaderboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the scoring rubric
    Rubric {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load config; every command works with defaults before `init`.
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::from_env()
    };

    match cli.command {
        Commands::Init { force, event_name, yes } => {
            execute_init(InitOptions { force, yes, event_name })?;
        }

        Commands::Browse { categories, live, search, json } => {
            execute_browse(BrowseOptions { categories, live, search, json }, &config)?;
        }

        Commands::Watch { project_id, no_chat } => {
            execute_watch(WatchOptions { project_id, role: cli.role, no_chat }, &config)?;
        }

        Commands::Submit { name, tagline, description, no_ai, go_live, edit } => {
            execute_submit(
                SubmitOptions {
                    role: cli.role,
                    name,
                    tagline,
                    description,
                    no_ai,
                    go_live,
                    edit,
                },
                &config,
            )?;
        }

        Commands::Judge { project, ai, set, totals } => {
            execute_judge(
                JudgeOptions { role: cli.role, project, ai, set, totals },
                &config,
            )?;
        }

        Commands::Leaderboard { json } => {
            execute_leaderboard(LeaderboardOptions { json })?;
        }

        Commands::Rubric { json } => {
            execute_rubric(RubricOptions { json }, &config)?;
        }
    }

    Ok(())
}
