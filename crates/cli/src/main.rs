use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::Level;

use folio_api::{ApiConfig, PortfolioClient};
use folio_content::cache::ContentCache;
use folio_content::contact::{ContactForm, Notice};
use folio_content::resolve::ResolvedContent;

/// Terminal client for the Folio portfolio backend.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print the resolved portfolio content.
    Content {
        /// Emit the resolved content as JSON instead of a text summary.
        #[arg(long)]
        json: bool,
    },
    /// Send a contact message to the portfolio backend.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Subject / project line of the message.
        #[arg(long)]
        project: String,
        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let client = PortfolioClient::new(ApiConfig::from_env()).context("configure backend client")?;

    match cli.command {
        // No subcommand => TUI
        None => folio_tui::run(client).await,
        Some(Command::Content { json }) => run_content(client, json).await,
        Some(Command::Contact {
            name,
            email,
            project,
            message,
        }) => run_contact(client, name, email, project, message).await,
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .try_init();
}

async fn run_content(client: PortfolioClient, json: bool) -> Result<()> {
    let cache = ContentCache::with_default_window(Arc::new(client));
    // Fetch failures degrade to the literal fallback copy, mirroring the UI.
    let resolved = match cache.get().await {
        Ok(content) => ResolvedContent::from_remote(Some(&content)),
        Err(error) => {
            tracing::warn!(error = %error, "content fetch failed; printing fallback copy");
            ResolvedContent::fallback()
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        print_summary(&resolved);
    }
    Ok(())
}

async fn run_contact(client: PortfolioClient, name: String, email: String, project: String, message: String) -> Result<()> {
    let mut form = ContactForm::new(name, email, project, message);

    match form.submit(&client).await {
        Notice::Success(text) => {
            println!("{text}");
            Ok(())
        }
        Notice::Error(text) => anyhow::bail!(text),
    }
}

fn print_summary(resolved: &ResolvedContent) {
    println!("{}", resolved.hero.heading);
    if let Some(highlight) = &resolved.hero.highlight {
        println!("{highlight}");
    }
    println!("{}", resolved.hero.subheading);
    println!("{}\n", resolved.hero.description);

    println!("## {}", resolved.about.heading);
    println!("{}\n", resolved.about.description);

    println!("## Skills");
    for group in &resolved.skills {
        let names: Vec<&str> = group.skills.iter().map(|skill| skill.name.as_str()).collect();
        if names.is_empty() {
            println!("- {} — {}", group.title, group.highlight);
        } else {
            println!("- {}: {}", group.title, names.join(", "));
        }
    }

    if !resolved.projects.is_empty() {
        println!("\n## Projects");
        for project in &resolved.projects {
            println!("- {} — {}", project.title, project.subtitle);
        }
    }

    println!("\n## Testimonials");
    for entry in &resolved.testimonials {
        println!("“{}” — {}, {}", entry.quote, entry.author_name, entry.author_role);
    }

    if !resolved.social_links.is_empty() {
        println!();
        for link in &resolved.social_links {
            println!("{}: {}", link.label, link.display);
        }
    }
}
