pub mod callbacks;
pub mod commands;
pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod handlers;
pub mod jobs;
pub mod keyboards;
pub mod rate_limit;
pub mod telegram;
pub mod types;
pub mod utils;

pub use config::Settings;
pub use error::{BotError, BotResult};
pub use jobs::JobGate;
pub use teloxide::prelude::Dispatcher;
pub use types::{Command, HandlerResult, MyDialogue, State};
