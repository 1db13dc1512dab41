use ::telegram::{telegram, JobGate, Settings, State};
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    let _ = dotenv::dotenv();

    init_tracing();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load settings: {}", e);
            eprintln!("Please check your configuration in the .env file");
            std::process::exit(1);
        }
    };

    let bot = Bot::new(settings.bot_token.clone());

    if let Err(e) = telegram::set_bot_commands(&bot).await {
        tracing::warn!("Failed to register bot commands: {}", e);
    }

    let gate = JobGate::new(settings.max_concurrent_jobs);

    tracing::info!(
        "Bot started: {} conversion slots, {} player rewrites, {}",
        gate.capacity(),
        settings.rewrites.len(),
        if settings.auth_users.is_empty() {
            "open access".to_string()
        } else {
            format!("{} authorized users", settings.auth_users.len())
        }
    );

    Dispatcher::builder(bot, telegram::schema())
        .dependencies(dptree::deps![InMemStorage::<State>::new(), settings, gate])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

/// Set up the global tracing subscriber
///
/// `RUST_LOG` overrides the default `info` filter; `LOG_FORMAT=json`
/// switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
