//! # yosaver-core
//!
//! Core types and traits for the YoSaver bot: [`Bot`], [`Handler`], message and user types,
//! and tracing initialization. Transport-agnostic; the Telegram layer lives in `yosaver-bot`.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{CoreError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
