use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{domain::ChatId, errors::Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Typed configuration for the bot.
///
/// Constructed once at startup and passed by reference to each component, so
/// there is no hidden global state and tests can substitute credentials and
/// endpoints freely.
#[derive(Clone, Debug)]
pub struct Config {
    // Credentials (required, opaque)
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: ChatId,

    // Polling
    pub endpoint: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,

    // Log sink
    pub log_file: PathBuf,
    pub log_max_bytes: u64,
    pub log_backups: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        // Required env vars; absence of any is a fatal precondition.
        let practicum_token = env_str("PRACTICUM_TOKEN")
            .and_then(non_empty)
            .ok_or_else(|| missing("PRACTICUM_TOKEN"))?;
        let telegram_token = env_str("TELEGRAM_TOKEN")
            .and_then(non_empty)
            .ok_or_else(|| missing("TELEGRAM_TOKEN"))?;
        let telegram_chat_id = env_str("TELEGRAM_CHAT_ID")
            .and_then(non_empty)
            .ok_or_else(|| missing("TELEGRAM_CHAT_ID"))?
            .trim()
            .parse::<i64>()
            .map(ChatId)
            .map_err(|e| Error::Config(format!("TELEGRAM_CHAT_ID is not a valid chat id: {e}")))?;

        let endpoint = env_str("ENDPOINT_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let poll_interval = Duration::from_secs(env_u64("POLL_INTERVAL_SECS").unwrap_or(600));
        let request_timeout = Duration::from_secs(env_u64("REQUEST_TIMEOUT_SECS").unwrap_or(30));

        let log_file =
            PathBuf::from(env_str("LOG_FILE").unwrap_or_else(|| "work_bot.log".to_string()));
        let log_max_bytes = env_u64("LOG_MAX_BYTES").unwrap_or(50_000_000);
        let log_backups = env_u64("LOG_BACKUPS").unwrap_or(5) as usize;

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            poll_interval,
            request_timeout,
            log_file,
            log_max_bytes,
            log_backups,
        })
    }
}

fn missing(key: &str) -> Error {
    Error::Config(format!("{key} environment variable is required"))
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
