//! Topic buttons shown by `/start`.

use log::{debug, info};
use poise::serenity_prelude::{
    ButtonStyle, ComponentInteraction, Context, CreateActionRow, CreateButton,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::bot::Data;
use crate::error::Result;
use crate::keywords::KeywordStore;

const BUTTON_ID_PREFIX: &str = "topic:";

// Discord component limits.
const MAX_CUSTOM_ID_LEN: usize = 100;
const MAX_LABEL_LEN: usize = 80;
const BUTTONS_PER_ROW: usize = 5;
const MAX_ROWS: usize = 5;

fn button_id(keyword: &str) -> String {
    format!("{BUTTON_ID_PREFIX}{keyword}")
}

fn keyword_from_button_id(custom_id: &str) -> Option<&str> {
    custom_id.strip_prefix(BUTTON_ID_PREFIX)
}

fn fits_in_button(keyword: &str) -> bool {
    BUTTON_ID_PREFIX.len() + keyword.len() <= MAX_CUSTOM_ID_LEN
        && keyword.chars().count() <= MAX_LABEL_LEN
}

/// Keywords that get a button, alphabetically.
fn button_keywords(store: &KeywordStore) -> Vec<&str> {
    let keywords: Vec<&str> = store
        .sorted_keywords()
        .into_iter()
        .filter(|keyword| fits_in_button(keyword))
        .collect();

    let limit = BUTTONS_PER_ROW * MAX_ROWS;
    if keywords.len() > limit {
        debug!(
            "Only the first {limit} of {} keywords get a button",
            keywords.len()
        );
    }
    keywords.into_iter().take(limit).collect()
}

/// One button per keyword, five per row.
pub fn keyword_buttons(store: &KeywordStore) -> Vec<CreateActionRow> {
    button_keywords(store)
        .chunks(BUTTONS_PER_ROW)
        .map(|row| {
            CreateActionRow::Buttons(
                row.iter()
                    .map(|keyword| {
                        CreateButton::new(button_id(keyword))
                            .label(*keyword)
                            .style(ButtonStyle::Primary)
                    })
                    .collect(),
            )
        })
        .collect()
}

/// Answer a topic button press with the keyword's response.
pub async fn handle_button(
    ctx: &Context,
    component: &ComponentInteraction,
    data: &Data,
) -> Result<()> {
    let Some(keyword) = keyword_from_button_id(&component.data.custom_id) else {
        return Ok(());
    };
    debug!("Topic button '{keyword}' pressed by {}", component.user.tag());

    let response = data.responder().topic_response(keyword);
    let reply = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().content(response),
    );
    component.create_response(&ctx.http, reply).await?;

    info!(
        "Answered topic button '{keyword}' for {}",
        component.user.tag()
    );
    Ok(())
}
