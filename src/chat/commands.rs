//! Poise slash commands for browsing topics.

use poise::CreateReply;

use crate::bot::Data;
use crate::error::{BotError, Result};
use crate::keywords::{find_keyword, search_keywords};
use crate::messages::{TOPIC_NOT_FOUND_MESSAGE, help_message, welcome_message};

use super::buttons::keyword_buttons;

/// Context type for topic commands.
type Context<'a> = poise::Context<'a, Data, BotError>;

const AUTOCOMPLETE_LIMIT: usize = 25;

async fn autocomplete_topic(ctx: Context<'_>, partial: &str) -> Vec<String> {
    search_keywords(ctx.data().responder().store(), partial, AUTOCOMPLETE_LIMIT)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Apresenta a assistente e mostra os temas disponíveis.
#[poise::command(slash_command)]
pub async fn start(ctx: Context<'_>) -> Result<()> {
    let user = ctx.author();
    let name = user.global_name.as_deref().unwrap_or(&user.name);
    let store = ctx.data().responder().store();

    let reply = CreateReply::default()
        .content(welcome_message(name))
        .components(keyword_buttons(store));
    ctx.send(reply).await?;
    Ok(())
}

/// Lista todas as palavras-chave disponíveis.
#[poise::command(slash_command)]
pub async fn help(ctx: Context<'_>) -> Result<()> {
    ctx.say(help_message(ctx.data().responder().store())).await?;
    Ok(())
}

/// Mostra a resposta de um tema específico.
#[poise::command(slash_command)]
pub async fn tema(
    ctx: Context<'_>,
    #[description = "Palavra-chave do tema"]
    #[autocomplete = "autocomplete_topic"]
    tema: String,
) -> Result<()> {
    let store = ctx.data().responder().store();
    let response = find_keyword(store, &tema)
        .map_or(TOPIC_NOT_FOUND_MESSAGE, |entry| entry.response.as_str());

    ctx.say(response).await?;
    Ok(())
}

/// Get available topic commands.
#[must_use]
pub fn topic_commands() -> Vec<poise::Command<Data, BotError>> {
    vec![start(), help(), tema()]
}
