use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::{CompletionRelay, TranscriptStore, next_turn};
use crate::core::AppConfig;

pub async fn run() -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let config = AppConfig::from_env()?;
    let relay = CompletionRelay::from_config(&config);
    let store = TranscriptStore::new();

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match next_turn(&store, &relay, &line).await {
                    Ok(reply) => println!("{}", reply),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
