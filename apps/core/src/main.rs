// Solace shaper CLI
// Runs the shaping pipelines on text from the command line and prints JSON.

use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use solace_core::shaping::{generate_follow_up_questions, EmotionClass};
use solace_core::{logging, ResponseShaper, ShaperConfig};

#[derive(Parser)]
#[command(name = "solace-shaper", version, about = "Inspect Solace's response-shaping pipelines")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decide whether a user message needs clarification.
    Assess {
        message: String,
        /// Recent conversation history or topic hints.
        #[arg(long, default_value = "")]
        context: String,
    },
    /// Split a model reply into labeled sections. Reads stdin when REPLY is omitted.
    Structure { reply: Option<String> },
    /// Show the follow-up questions chosen for a message.
    Questions {
        message: String,
        #[arg(long, default_value = "")]
        context: String,
    },
}

#[derive(Serialize)]
struct QuestionsOutput {
    emotion: EmotionClass,
    questions: Vec<String>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ShaperConfig::load().context("failed to load configuration")?;
    logging::init(&config)?;
    info!(min_message_chars = config.min_message_chars, "Shaper ready");

    let shaper = ResponseShaper::from_config(&config);

    match cli.command {
        Command::Assess { message, context } => print_json(&shaper.assess(&message, &context)),
        Command::Structure { reply } => {
            let reply = match reply {
                Some(reply) => reply,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read reply from stdin")?;
                    buf
                }
            };
            print_json(&shaper.structure(&reply))
        }
        Command::Questions { message, context } => print_json(&QuestionsOutput {
            emotion: EmotionClass::detect(&message),
            questions: generate_follow_up_questions(&message, &context),
        }),
    }
}
