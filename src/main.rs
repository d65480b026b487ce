#![allow(dead_code)]

use std::sync::Arc;

use cosmic::app::Settings;
use cosmic::iced::Limits;

mod application;
mod components;
mod localize;
mod message;
mod pages;

use taskly::api::HttpApiClient;
use taskly::config::TasklyConfig;
use taskly::store::{FileBackend, LocalStore};

use application::{Flags, Taskly};

/// Journal logger: taskly targets at info/debug (per config), everything else at warn.
struct FilteredJournal {
    inner: systemd_journal_logger::JournalLog,
}

impl log::Log for FilteredJournal {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        let target = metadata.target();
        if target.starts_with("taskly") || target.starts_with("application") || target.starts_with("pages") || target.starts_with("components") {
            let max = if taskly::debug_logging() { log::LevelFilter::Debug } else { log::LevelFilter::Info };
            metadata.level() <= max
        } else {
            metadata.level() <= log::LevelFilter::Warn
        }
    }
    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            self.inner.log(record);
        }
    }
    fn flush(&self) {
        self.inner.flush();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, _handle) = TasklyConfig::load();

    // Logs go to the systemd user journal (`journalctl --user -t taskly -f`).
    let journal = systemd_journal_logger::JournalLog::new()?
        .with_syslog_identifier("taskly".to_string());
    taskly::set_debug_logging(config.debug_logging);
    log::set_boxed_logger(Box::new(FilteredJournal { inner: journal }))?;
    // Global max must be Debug so taskly debug logs can pass through when toggled
    log::set_max_level(log::LevelFilter::Debug);

    localize::localize();

    let store = LocalStore::new(FileBackend::open(config.store_path()));

    // `--token <value>` seeds the store, e.g. right after signing in elsewhere.
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|a| a == "--token") {
        match args.get(pos + 1) {
            Some(token) => store.set_token(token)?,
            None => log::warn!("--token given without a value"),
        }
    }

    let api = HttpApiClient::new(&config.api_base(), store.clone())?;

    let mut settings = Settings::default();
    settings = settings.size_limits(Limits::NONE.min_width(640.0).min_height(400.0));

    let flags = Flags {
        config,
        store,
        api: Arc::new(api),
    };
    cosmic::app::run::<Taskly>(settings, flags)?;

    Ok(())
}
