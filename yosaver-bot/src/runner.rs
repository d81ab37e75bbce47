//! Wires config, provider, pipeline and handlers, then runs the bot.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info, instrument};
use video_provider::{VideoProvider, YtDlpProvider};
use yosaver_core::{init_tracing, Bot};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::handlers::{DownloadHandler, LoggingHandler, StartHandler};
use crate::liveness;
use crate::pipeline::{DownloadPipeline, PipelineSettings};
use crate::telegram::{run_repl, TelegramBotAdapter};

/// Logging → /start → download. The download handler is last and answers everything else.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    provider: Arc<dyn VideoProvider>,
    settings: PipelineSettings,
) -> HandlerChain {
    let pipeline = Arc::new(DownloadPipeline::new(provider, bot.clone(), settings));

    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartHandler::new(bot.clone())))
        .add_handler(Arc::new(DownloadHandler::new(bot, pipeline)))
}

fn build_teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Runs the bot until polling stops. The liveness endpoint is started first and left running.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    if let Some(ref log_file) = config.log_file {
        if let Some(parent) = Path::new(log_file).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }
    init_tracing(config.log_file.as_deref())?;
    std::fs::create_dir_all(&config.download_dir)?;

    info!(
        max_file_size = config.max_file_size,
        download_dir = %config.download_dir.display(),
        ytdlp = %config.ytdlp_path,
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(&config);
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let provider: Arc<dyn VideoProvider> = Arc::new(YtDlpProvider::new(config.ytdlp_config()));
    let chain = build_handler_chain(bot, provider, config.pipeline_settings());

    let _liveness = liveness::spawn(config.liveness_addr);

    info!("Bot started successfully");
    run_repl(teloxide_bot, chain).await
}
