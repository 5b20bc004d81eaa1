//! Implements `hackcast watch <project-id>`: the stream page.
//!
//! Shows stream metadata and a live chat with simulated arrivals.
//! `/summarize` asks the gateway for a digest of the transcript; a
//! gateway failure surfaces as a generic error without ending the
//! session. Posting a new message invalidates any previous summary.

use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::ProjectStore;
use crate::chat::{ChatFeed, ChatMessage, ChatSimulator};
use crate::config::Config;
use crate::gateway::Gateway;
use crate::session::{User, UserRole};

/// Options for the watch command
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Project to watch
    pub project_id: String,
    /// Current user role
    pub role: UserRole,
    /// Print the stream card and seeded transcript, then exit without
    /// entering the chat loop
    pub no_chat: bool,
}

/// Execute the watch command
pub fn execute_watch(options: WatchOptions, config: &Config) -> Result<()> {
    let store = ProjectStore::seeded();
    let project = store
        .get(&options.project_id)
        .ok_or_else(|| anyhow!("unknown project: {}", options.project_id))?;

    let live = if project.is_live {
        style("● LIVE").red().to_string()
    } else {
        style("○ offline").dim().to_string()
    };
    println!("{} {}", style(&project.name).bold().underlined(), live);
    println!("{} — {}", project.team_name, project.tagline);
    println!(
        "{} on {}  |  {} viewers",
        project.stream_url, project.stream_platform, project.viewer_count
    );
    println!("repo: {}  demo: {}\n", project.repo_url, project.demo_url);

    let user = User::for_role(options.role);
    let mut feed = ChatFeed::seeded();
    for message in feed.messages() {
        print_message(message);
    }

    if options.no_chat {
        return Ok(());
    }

    println!(
        "\n{}",
        style("Type a message, /summarize for an AI chat digest, /quit to leave.").dim()
    );

    let gateway = Gateway::new(config.gateway.clone());
    let simulator = ChatSimulator::start();
    let mut summary: Option<String> = None;

    let stdin = std::io::stdin();
    loop {
        print!("{} ", style(">").cyan());
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        // Deliver anything the audience "said" while we were typing.
        for message in simulator.drain() {
            print_message(&message);
            feed.receive(message);
        }

        let line = line.trim();
        match line {
            "" => continue,
            "/quit" | "/q" => break,
            "/summarize" => {
                match summarize(&gateway, feed.messages()) {
                    Ok(text) => {
                        println!("\n{}\n{}\n", style("Chat summary").bold(), text);
                        summary = Some(text);
                    }
                    Err(e) => {
                        tracing::debug!("chat summary failed: {e}");
                        eprintln!(
                            "{} Failed to connect to the AI service for chat summary.",
                            style("✗").red()
                        );
                    }
                }
            }
            message => {
                // A new message makes any existing summary stale.
                if summary.take().is_some() {
                    println!("{}", style("(summary cleared — chat moved on)").dim());
                }
                feed.post(&user, message);
            }
        }
    }
    // Dropping the simulator cancels the arrival timer with the view.
    Ok(())
}

fn summarize(gateway: &Gateway, messages: &[ChatMessage]) -> crate::Result<String> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Summarizing chat...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    let result = gateway.summarize_chat(messages);
    spinner.finish_and_clear();
    result
}

fn print_message(message: &ChatMessage) {
    println!(
        "  {} {}: {}",
        style(&message.timestamp).dim(),
        style(&message.user.name).cyan(),
        message.message
    );
}
