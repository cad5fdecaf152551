//! Play session timing and the check-and-finalize step run while a game is
//! open.

use std::process::Child;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::error::{LedgerError, SessionError};
use crate::ledger::{PlaytimeEntry, PlaytimeLedger};

/// Wall-clock start/end of one session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionTimer {
    started: Option<DateTime<Utc>>,
    stopped: Option<DateTime<Utc>>,
}

impl SessionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.start_at(Utc::now());
    }

    /// Start at an explicit instant. Clears any previous stop.
    pub fn start_at(&mut self, at: DateTime<Utc>) {
        self.started = Some(at);
        self.stopped = None;
    }

    pub fn stop(&mut self) -> Result<(), SessionError> {
        self.stop_at(Utc::now())
    }

    pub fn stop_at(&mut self, at: DateTime<Utc>) -> Result<(), SessionError> {
        if self.started.is_none() {
            return Err(SessionError::NotStarted);
        }
        self.stopped = Some(at);
        Ok(())
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started
    }

    pub fn stopped_at(&self) -> Option<DateTime<Utc>> {
        self.stopped
    }

    /// Elapsed whole minutes, rounded half-to-even.
    ///
    /// A clock that went backwards yields 0 rather than a negative duration.
    pub fn duration_minutes(&self) -> Result<u64, SessionError> {
        let start = self.started.ok_or(SessionError::NotStarted)?;
        let end = self.stopped.ok_or(SessionError::NotStopped)?;
        let millis = (end - start).num_milliseconds();
        if millis <= 0 {
            return Ok(0);
        }
        Ok((millis as f64 / 60_000.0).round_ties_even() as u64)
    }
}

/// Whether a game is merely available or currently being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Installed,
    Running,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Installed => write!(f, "installed"),
            Self::Running => write!(f, "running"),
        }
    }
}

/// Something whose exit can be polled without blocking.
pub trait Liveness {
    fn has_exited(&mut self) -> std::io::Result<bool>;
}

impl Liveness for Child {
    fn has_exited(&mut self) -> std::io::Result<bool> {
        Ok(self.try_wait()?.is_some())
    }
}

/// Result of one [`PlaySession::poll`].
#[derive(Debug)]
pub enum PollOutcome<P> {
    /// The process is still running; poll again later.
    Running(PlaySession<P>),
    /// The session was recorded in the ledger.
    Finished(SessionSummary),
}

/// What a finished session added to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub minutes: u64,
    pub entry: PlaytimeEntry,
}

/// One running game and its timer.
#[derive(Debug)]
pub struct PlaySession<P> {
    game_id: String,
    process: P,
    timer: SessionTimer,
}

impl<P: Liveness> PlaySession<P> {
    /// Begin timing `game_id` now.
    pub fn start(game_id: impl Into<String>, process: P) -> Self {
        Self::start_at(game_id, process, Utc::now())
    }

    pub fn start_at(game_id: impl Into<String>, process: P, at: DateTime<Utc>) -> Self {
        let mut timer = SessionTimer::new();
        timer.start_at(at);
        Self {
            game_id: game_id.into(),
            process,
            timer,
        }
    }

    /// Check the process; if it has exited, stop the timer and add the
    /// session to the ledger.
    pub fn poll(self, ledger: &Mutex<PlaytimeLedger>) -> Result<PollOutcome<P>, SessionError> {
        self.poll_at(ledger, Utc::now())
    }

    /// [`poll`](Self::poll) with an explicit "now".
    pub fn poll_at(
        mut self,
        ledger: &Mutex<PlaytimeLedger>,
        now: DateTime<Utc>,
    ) -> Result<PollOutcome<P>, SessionError> {
        if !self.process.has_exited().map_err(SessionError::Process)? {
            return Ok(PollOutcome::Running(self));
        }

        log::debug!("{}: game closed", self.game_id);
        self.timer.stop_at(now)?;
        let minutes = self.timer.duration_minutes()?;
        log::debug!("{}: session lasted {} minutes", self.game_id, minutes);

        let entry = ledger
            .lock()
            .map_err(|_| LedgerError::Poisoned)?
            .accumulate(&self.game_id, minutes, now.timestamp())?;

        Ok(PollOutcome::Finished(SessionSummary { minutes, entry }))
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
