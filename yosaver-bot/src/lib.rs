//! # YoSaver bot
//!
//! Accepts a YouTube link in a Telegram chat, picks the best progressive stream, downloads it to a
//! per-request temp directory and sends the file back as a video. A small HTTP liveness endpoint
//! runs alongside the bot.
//!
//! Flow per message: [`pipeline::link`] → [`pipeline::resolver`] → [`pipeline::selector`] →
//! [`pipeline::size_guard`] → [`pipeline::delivery`]; any failure becomes one user-facing text
//! ([`pipeline::PipelineError::user_message`]).

pub mod chain;
pub mod cli;
pub mod config;
pub mod handlers;
pub mod liveness;
pub mod pipeline;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
pub use chain::HandlerChain;
pub use handlers::{DownloadHandler, LoggingHandler, StartHandler, WELCOME_TEXT};
pub use pipeline::{DownloadPipeline, PipelineError, PipelineSettings};
pub use runner::{build_handler_chain, run_bot};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};

pub use yosaver_core::{
    init_tracing, Bot, Chat, CoreError, Handler, HandlerError, HandlerResponse, Message, Result,
    ToCoreMessage, ToCoreUser, User,
};
