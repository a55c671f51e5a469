use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod chat;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address (defaults to CHATRELAY_HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Set the server port (defaults to PORT or 5000)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Start a chat session in the terminal
    Chat {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    /// The sub command to run, serving when none was given
    fn command(self) -> Command {
        self.command.unwrap_or(Command::Serve {
            host: None,
            port: None,
        })
    }
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command() {
        Command::Serve { host, port } => {
            serve::run(host, port).await?;
        }
        Command::Chat {} => {
            chat::run().await?;
        }
    }

    Ok(())
}
