//! Terminal driver for the Peace Bridge coaching engine.
//!
//! Reads one message per line from stdin and prints the bot's reply.
//! `/breathe` runs the breathing exercise, `/reset` starts over and
//! `/quit` exits. Logs go to stderr.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use peace_bridge::adapters::InMemoryTranscriptStore;
use peace_bridge::application::{
    BreathingExerciseCommand, BreathingExerciseHandler, ResetConversationCommand,
    ResetConversationHandler, SendMessageCommand, SendMessageHandler, StartConversationCommand,
    StartConversationHandler,
};
use peace_bridge::config::{AppConfig, ChatConfig, LoggingConfig};
use peace_bridge::domain::dialogue::RuleEngine;
use peace_bridge::ports::TranscriptStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let store: Arc<dyn TranscriptStore> = Arc::new(InMemoryTranscriptStore::new());
    let start = StartConversationHandler::new(store.clone());
    let send = SendMessageHandler::new(store.clone(), Arc::new(RuleEngine::new()));
    let breathe = BreathingExerciseHandler::new(store.clone());
    let reset = ResetConversationHandler::new(store);

    let started = start
        .handle(StartConversationCommand {
            greeting: config.chat.greeting.clone(),
        })
        .await?;
    let conversation_id = started.conversation_id;
    say(&config.chat, &started.greeting).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => continue,
            "/quit" => break,
            "/reset" => {
                let cmd = ResetConversationCommand {
                    conversation_id,
                    greeting: config.chat.greeting.clone(),
                };
                match reset.handle(cmd).await {
                    Ok(()) => say(&config.chat, &config.chat.greeting).await,
                    Err(e) => fail(&config.chat, &e).await,
                }
            }
            "/breathe" => match breathe.handle(BreathingExerciseCommand { conversation_id }).await {
                Ok(result) => {
                    for step in &result.steps {
                        say(&config.chat, step).await;
                    }
                }
                Err(e) => fail(&config.chat, &e).await,
            },
            message => {
                let cmd = SendMessageCommand {
                    conversation_id,
                    message: message.to_string(),
                };
                match send.handle(cmd).await {
                    Ok(result) if config.chat.output_json => {
                        let json = serde_json::to_string(&result.output)?;
                        say(&config.chat, &json).await;
                    }
                    Ok(result) => say(&config.chat, &result.output.reply).await,
                    Err(e) => fail(&config.chat, &e).await,
                }
            }
        }
    }

    tracing::info!(conversation_id = %conversation_id, "Session ended");
    Ok(())
}

fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn say(chat: &ChatConfig, text: &str) {
    if chat.typing_delay_ms > 0 {
        tokio::time::sleep(chat.typing_delay()).await;
    }
    println!("{text}\n");
}

async fn fail(chat: &ChatConfig, err: &dyn std::error::Error) {
    tracing::error!("Turn failed: {}", err);
    say(chat, &chat.fallback_message).await;
}
