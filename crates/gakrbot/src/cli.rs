use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gakrbot")]
#[command(author, version, about = "GAKR assistant Telegram bot", long_about = None)]
pub struct Cli {
    /// User store file (overrides USER_DATA_PATH)
    #[arg(long, global = true)]
    pub data_file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot with long polling (default)
    Run,

    /// Print a user's stored statistics without contacting Telegram
    Stats {
        /// Telegram user id
        #[arg(short, long)]
        user: u64,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Store path from `--data-file`, falling back to the configured default
    pub fn data_path(&self) -> String {
        self.data_file
            .clone()
            .unwrap_or_else(|| gakrcore::config::USER_DATA_PATH.clone())
    }
}
