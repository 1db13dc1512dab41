use crate::types::Command;
use crate::{callbacks, commands};
use teloxide::{
    dispatching::{dialogue, dialogue::InMemStorage, UpdateHandler},
    prelude::*,
    utils::command::BotCommands,
};

pub use crate::types::State;

/// Register bot commands in Telegram menu
pub async fn set_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

pub fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use dptree::case;

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(
            case![State::Start]
                .branch(case![Command::Start].endpoint(commands::start))
                .branch(case![Command::Help].endpoint(commands::help))
                .branch(case![Command::Menu].endpoint(commands::menu))
                .branch(case![Command::Html].endpoint(commands::request_html_file))
                .branch(case![Command::Text].endpoint(commands::request_text)),
        )
        .branch(case![Command::Cancel].endpoint(commands::cancel));

    let message_handler = Update::filter_message()
        .branch(command_handler)
        .branch(case![State::AwaitHtmlFile].endpoint(commands::receive_html_file))
        .branch(case![State::AwaitText].endpoint(commands::receive_text))
        .branch(case![State::AwaitFileName { text }].endpoint(commands::receive_file_name))
        .branch(dptree::endpoint(commands::invalid_state));

    // Handle callback queries from inline keyboards
    let callback_handler = Update::filter_callback_query()
        .endpoint(callbacks::handle_callback);

    dialogue::enter::<Update, InMemStorage<State>, State, _>()
        .branch(message_handler)
        .branch(callback_handler)
}
