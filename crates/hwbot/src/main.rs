use std::{path::PathBuf, process::ExitCode, sync::Arc};

use tracing::{error, info};

use hwbot_core::{config::Config, logging, watcher::PollWatcher};
use hwbot_practicum::PracticumClient;
use hwbot_telegram::TelegramMessenger;

#[tokio::main]
async fn main() -> ExitCode {
    let cfg = Config::load();

    // Log sink settings come from the config when it loaded; the failure path
    // still gets a logged line through the defaults.
    let (log_file, max_bytes, backups) = match &cfg {
        Ok(c) => (c.log_file.clone(), c.log_max_bytes, c.log_backups),
        Err(_) => (PathBuf::from("work_bot.log"), 50_000_000, 5),
    };
    if let Err(e) = logging::init(&log_file, max_bytes, backups) {
        eprintln!("failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let cfg = match cfg {
        Ok(c) => Arc::new(c),
        Err(e) => {
            error!(error = %e, "missing startup credentials, the bot cannot run");
            return ExitCode::FAILURE;
        }
    };

    let source = match PracticumClient::new(&cfg) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            error!(error = %e, "failed to build the API client");
            return ExitCode::FAILURE;
        }
    };
    let messenger = Arc::new(TelegramMessenger::new(cfg.telegram_token.clone()));

    info!(endpoint = %cfg.endpoint, chat_id = cfg.telegram_chat_id.0, "homework status bot started");
    PollWatcher::new(cfg, source, messenger).run().await;

    ExitCode::SUCCESS
}
