//! Free-text message handler.

use log::{debug, error, info};
use poise::serenity_prelude::{Context, Message as SerenityMessage, UserId};

use crate::bot::Data;
use crate::error::Result;

/// Answer direct messages and messages that mention the bot.
pub async fn handle_message(
    ctx: &Context,
    new_message: &SerenityMessage,
    data: &Data,
    bot_user_id: UserId,
) -> Result<()> {
    if new_message.author.bot {
        return Ok(());
    }

    let is_direct = new_message.guild_id.is_none();
    if !is_direct && !new_message.mentions_user_id(bot_user_id) {
        return Ok(());
    }

    let text = strip_mentions(&new_message.content);
    if text.is_empty() {
        debug!("Ignoring empty message from {}", new_message.author.tag());
        return Ok(());
    }

    info!(
        "Received message from {} in channel {}",
        new_message.author.tag(),
        new_message.channel_id
    );
    debug!("Message content: {text}");

    let reply = data.responder().dispatch(&text);

    if let Err(e) = deliver(ctx, new_message, reply).await {
        error!(
            "Error replying to {} in channel {}: {}",
            new_message.author.tag(),
            new_message.channel_id,
            e
        );
        new_message.reply(&ctx.http, e.user_message()).await?;
    }

    Ok(())
}

async fn deliver(ctx: &Context, new_message: &SerenityMessage, reply: &str) -> Result<()> {
    new_message.reply(&ctx.http, reply).await?;
    info!(
        "Replied to {} in channel {}",
        new_message.author.tag(),
        new_message.channel_id
    );
    Ok(())
}

/// Remove user mention tokens (`<@id>`, `<@!id>`) and trim.
fn strip_mentions(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find("<@") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let id = after.strip_prefix('!').unwrap_or(after);
        let digits = id.bytes().take_while(u8::is_ascii_digit).count();

        if digits > 0 && id[digits..].starts_with('>') {
            rest = &id[digits + 1..];
        } else {
            out.push_str("<@");
            rest = after;
        }
    }
    out.push_str(rest);

    out.trim().to_string()
}
