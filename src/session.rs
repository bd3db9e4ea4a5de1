// Session controller: owns the log for the lifetime of the menu loop and
// implements the Running -> Exited state machine without touching the
// terminal. `ui` does the prompting and printing.

use crate::config::AppConfig;
use crate::record::{AddOutcome, FileLog, Record};
use crate::report::{write_summary, Summary};
use crate::store::{self, StoreError};
use anyhow::{Context, Result};

/// A parsed menu choice. Anything other than `1`..`5` is `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Search,
    Summarize,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Add,
            "2" => MenuChoice::View,
            "3" => MenuChoice::Search,
            "4" => MenuChoice::Summarize,
            "5" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Exited,
}

pub struct Session {
    config: AppConfig,
    log: FileLog,
    state: State,
}

impl Session {
    /// Load the primary store and start in `Running`.
    pub fn open(config: AppConfig) -> Result<Self, StoreError> {
        let records = store::load(&config.store_path)?;
        Ok(Session::with_log(config, FileLog::from_records(records)))
    }

    pub fn with_log(config: AppConfig, log: FileLog) -> Self {
        Session {
            config,
            log,
            state: State::Running,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn log(&self) -> &FileLog {
        &self.log
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn add(&mut self, name: &str) -> AddOutcome {
        self.log.add(name, self.config.cleanup_threshold)
    }

    pub fn search(&self, keyword: &str) -> Vec<&Record> {
        self.log.search(keyword)
    }

    pub fn summarize(&self) -> Result<Summary> {
        write_summary(&self.config.report_path, &self.log)
    }

    /// Save the store, regenerate the summary, write the backup and move to
    /// `Exited`. Any write failure leaves the session `Running`.
    pub fn exit(&mut self) -> Result<Summary> {
        let records = self.log.records();
        store::save(&self.config.store_path, records).context("Failed to save file log")?;
        let summary = self.summarize()?;
        store::save(&self.config.backup_path, records).context("Failed to write backup")?;
        log::info!("session closed with {} records", records.len());
        self.state = State::Exited;
        Ok(summary)
    }
}
