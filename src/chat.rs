//! Discord side of the bot: messages, slash commands and topic buttons.

mod buttons;
mod commands;
mod handler;

pub use buttons::handle_button;
pub use commands::topic_commands;
pub use handler::handle_message;
