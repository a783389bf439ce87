use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "standup")]
#[command(about = "A terminal-based daily standup tracker", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Date the standup view opens on (YYYY-MM-DD, defaults to today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Start with an empty store instead of the demo fixture
    #[arg(long)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
