use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fidos_api::GitHubClient;
use fidos_core::{Config, Project, ProjectGallery};

#[derive(Parser)]
#[command(name = "fidos")]
#[command(version, about = "Portfolio project gallery built from GitHub repositories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Fetch and print the project gallery for an account
    Projects {
        /// GitHub username (falls back to the configured one)
        username: Option<String>,

        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Only show featured projects
        #[arg(long)]
        featured: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Subcommand)]
enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Set the default GitHub username
    SetUsername { username: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fidos=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Projects {
            username,
            json,
            featured,
        } => {
            let username = username
                .or_else(|| config.username.clone())
                .context("No username given and none configured. Try `fidos config set-username`")?;

            tracing::info!("Building gallery for {}", username);

            let client =
                GitHubClient::with_base_url(config.github.token.clone(), config.github.api_url.clone());
            let gallery = ProjectGallery::with_client(client);

            let mut projects = gallery.fetch_projects(&username).await?;
            if featured {
                projects.retain(|p| p.featured);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&projects)?);
            } else {
                print_table(&projects);
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("username: {}", config.username.as_deref().unwrap_or("(unset)"));
                println!("github.api_url: {}", config.github.api_url);
                println!(
                    "github.token: {}",
                    if config.github.token.is_some() {
                        "(set)"
                    } else {
                        "(unset)"
                    }
                );
            }
            ConfigAction::SetUsername { username } => {
                let mut config = config;
                config.username = Some(username.clone());
                config.save()?;
                println!("Default username set to {}", username);
            }
        },
    }

    Ok(())
}

fn print_table(projects: &[Project]) {
    if projects.is_empty() {
        println!("No projects found.");
        return;
    }

    for project in projects {
        let star = if project.featured { "*" } else { " " };
        println!(
            "{} [{:9}] {}  ({})",
            star,
            project.category.as_str(),
            project.title,
            project.year
        );
        println!("    {}", project.description);
        if !project.technologies.is_empty() {
            println!("    tech: {}", project.technologies.join(", "));
        }
        println!("    source: {}", project.source_url);
        if let Some(ref live) = project.live_url {
            println!("    live:   {}", live);
        }
    }
}
