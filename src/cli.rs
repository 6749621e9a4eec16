use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kafedra-bot")]
#[command(author, version, about = "Telegram bot for university department info and events", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Print the resolved storage configuration and exit
    CheckConfig,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
