use teloxide::utils::command::BotCommands;

/// Slash commands registered with Telegram.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "choose a news category.")]
    Start,
    #[command(description = "show the category menu.")]
    Help,
    #[command(description = "fetch the latest headlines.")]
    News,
}
