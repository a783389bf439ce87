mod cli;

use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use standup_core::{AppConfig, StandupError};
use standup_domain::EntityStore;
use standup_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("STANDUP_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        // The TUI owns stdout, so terminal logging stays quiet.
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
        None => {
            let config = AppConfig::load();

            let selected_date = match cli.date {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| StandupError::InvalidDate(raw))?,
                None => Local::now().date_naive(),
            };

            let store = if cli.empty || !config.effective_seed_demo_data() {
                EntityStore::new()
            } else {
                EntityStore::demo()
            };
            tracing::info!(
                members = store.members().len(),
                sprints = store.sprints().len(),
                "starting standup tracker"
            );

            let mut app = App::new(
                store,
                selected_date,
                config.effective_recent_activity_limit(),
            );
            app.run().await?;
        }
    }

    Ok(())
}
