//! The poll loop: fetch, validate, parse, compare, notify, sleep.
//!
//! One logical actor owns all mutable state (the rolling timestamp and the
//! three message strings), so there are no locks and nothing inside the loop
//! is fatal. Only a missing-credentials failure at startup stops the process,
//! and that happens before this loop is ever constructed.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::{
    config::Config,
    ports::{MessagingPort, StatusSource},
    response::{check_response, parse_status},
    Result,
};

pub struct PollWatcher {
    cfg: Arc<Config>,
    source: Arc<dyn StatusSource>,
    messenger: Arc<dyn MessagingPort>,

    /// Lower bound of the next poll window (epoch seconds).
    since: i64,
    /// Last status line computed from a valid response (logging only).
    status: String,
    /// Current candidate message, error reports included.
    message: String,
    /// Last message actually delivered; delivery is skipped while the
    /// candidate matches it, so repeated states are announced once.
    last_sent: String,
}

impl PollWatcher {
    pub fn new(
        cfg: Arc<Config>,
        source: Arc<dyn StatusSource>,
        messenger: Arc<dyn MessagingPort>,
    ) -> Self {
        Self {
            cfg,
            source,
            messenger,
            since: Utc::now().timestamp(),
            status: String::new(),
            message: String::new(),
            last_sent: String::new(),
        }
    }

    /// Run forever; the process stops only by external termination.
    pub async fn run(mut self) {
        info!(interval_secs = self.cfg.poll_interval.as_secs(), "poll loop started");
        loop {
            self.tick().await;
            sleep(self.cfg.poll_interval).await;
        }
    }

    /// One poll cycle, without the sleep.
    pub async fn tick(&mut self) {
        match self.poll_once().await {
            Ok(Some(line)) => {
                if self.status != line {
                    self.status = line.clone();
                    debug!("homework status updated");
                } else {
                    debug!("homework status unchanged");
                }
                self.message = line;
            }
            Ok(None) => {
                // Empty homework list: keep the previous message so nothing
                // new is announced.
                debug!("response contained an empty homework list");
            }
            Err(err) => {
                error!(error = %err, "poll cycle failed");
                self.message = err.user_text();
            }
        }

        if self.message != self.last_sent {
            match self
                .messenger
                .send_text(self.cfg.telegram_chat_id, &self.message)
                .await
            {
                Ok(()) => {
                    debug!("status message delivered");
                    self.last_sent = self.message.clone();
                }
                Err(err) => {
                    // last_sent stays behind, so the next cycle retries.
                    error!(error = %err, "delivery failed");
                }
            }
        }
    }

    async fn poll_once(&mut self) -> Result<Option<String>> {
        debug!(since = self.since, "requesting homework statuses");
        let payload = self.source.fetch_updates(self.since).await?;

        // The next window starts where this response ends. Read leniently
        // before validation, matching the upstream contract.
        if let Some(ts) = payload.get("current_date").and_then(Value::as_i64) {
            self.since = ts;
        }

        let homeworks = check_response(&payload)?;
        if homeworks.is_empty() {
            return Ok(None);
        }

        // Only the first record is consulted; the API returns newest first.
        let line = parse_status(&homeworks[0])?;
        Ok(Some(line))
    }
}
