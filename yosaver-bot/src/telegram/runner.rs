//! REPL runner: converts teloxide messages to core messages and hands each one to the
//! [`HandlerChain`] in its own task.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};
use yosaver_core::ToCoreMessage;

use super::adapters::TelegramMessageWrapper;
use crate::chain::HandlerChain;

/// Starts long polling with the given teloxide Bot and HandlerChain. Returns when polling stops
/// (Ctrl-C). Each message is processed in a spawned task so slow downloads never block polling.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(username = ?me.user.username, "Connected to Telegram"),
        Err(e) => warn!(error = %e, "get_me failed; polling anyway"),
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(
                        error = %e,
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Handler chain failed"
                    );
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
