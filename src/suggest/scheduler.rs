//! Automatic suggestion scheduling
//!
//! Decides when typing should turn into a suggestion request. Edits arm a
//! pause timer, Enter fires immediately for the finished line, and a manual
//! trigger bypasses both. Duplicate automatic requests are suppressed with a
//! single remembered [`AutoSuggestSignature`].
//!
//! All time-dependent methods take `now` explicitly; the event loop passes
//! `Instant::now()`.

use std::fmt;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::config::SuggestConfig;
use crate::editor::last_word;

/// What caused a suggestion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerReason {
    Pause,
    Enter,
    Manual,
}

impl TriggerReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerReason::Pause => "pause",
            TriggerReason::Enter => "enter",
            TriggerReason::Manual => "manual",
        }
    }
}

impl fmt::Display for TriggerReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(reason, trimmed basis)` of the most recent automatic request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoSuggestSignature {
    reason: TriggerReason,
    basis: String,
}

impl AutoSuggestSignature {
    pub fn new(reason: TriggerReason, line: &str) -> Self {
        Self {
            reason,
            basis: line.trim().to_string(),
        }
    }
}

impl fmt::Display for AutoSuggestSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.reason, self.basis)
    }
}

/// A request the scheduler has decided to issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestTrigger {
    pub reason: TriggerReason,
    /// Trimmed, never empty
    pub basis: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AutoDisabled,
    EmptyLine,
    Duplicate,
    CoveredByPause,
    Busy,
}

/// Outcome of an automatic trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Request(SuggestTrigger),
    Skip(SkipReason),
}

impl Decision {
    pub fn into_request(self) -> Option<SuggestTrigger> {
        match self {
            Decision::Request(trigger) => Some(trigger),
            Decision::Skip(_) => None,
        }
    }
}

/// Why a manual request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    #[error("Nothing to suggest for: select some text or move to a line with words")]
    EmptyBasis,

    #[error("A suggestion request is already running")]
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    PendingTimer,
    RequestInFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub pause_delay: Duration,
    pub enter_window: Duration,
    pub min_word_len: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::from(&SuggestConfig::default())
    }
}

impl From<&SuggestConfig> for SchedulerConfig {
    fn from(config: &SuggestConfig) -> Self {
        Self {
            pause_delay: Duration::from_millis(config.pause_ms),
            enter_window: Duration::from_secs(config.enter_window_secs),
            min_word_len: config.min_word_len,
        }
    }
}

#[derive(Debug, Clone)]
struct PauseMarker {
    line: String,
    at: Instant,
}

#[derive(Debug)]
pub struct SuggestScheduler {
    config: SchedulerConfig,
    auto_enabled: bool,
    deadline: Option<Instant>,
    in_flight: bool,
    last_signature: Option<AutoSuggestSignature>,
    last_pause: Option<PauseMarker>,
}

impl SuggestScheduler {
    pub fn new(config: SchedulerConfig, auto_enabled: bool) -> Self {
        Self {
            config,
            auto_enabled,
            deadline: None,
            in_flight: false,
            last_signature: None,
            last_pause: None,
        }
    }

    pub fn state(&self) -> SchedulerState {
        if self.in_flight {
            SchedulerState::RequestInFlight
        } else if self.deadline.is_some() {
            SchedulerState::PendingTimer
        } else {
            SchedulerState::Idle
        }
    }

    pub fn auto_enabled(&self) -> bool {
        self.auto_enabled
    }

    /// Turning automatic suggestions off also disarms a pending timer.
    pub fn set_auto_enabled(&mut self, enabled: bool) {
        self.auto_enabled = enabled;
        if !enabled {
            self.deadline = None;
        }
    }

    pub fn last_signature(&self) -> Option<&AutoSuggestSignature> {
        self.last_signature.as_ref()
    }

    /// Called after every buffer edit with the line now under the caret.
    ///
    /// Returns true when a pause timer was armed.
    pub fn on_edit(&mut self, caret_line: &str, now: Instant) -> bool {
        self.deadline = None;
        if !self.auto_enabled {
            return false;
        }

        let long_enough = last_word(caret_line)
            .is_some_and(|word| word.chars().count() >= self.config.min_word_len);
        if long_enough {
            self.deadline = Some(now + self.config.pause_delay);
        }
        long_enough
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Fires the pause timer against the current caret line.
    pub fn fire_pause(&mut self, caret_line: &str, now: Instant) -> Decision {
        self.deadline = None;
        if !self.auto_enabled {
            return Decision::Skip(SkipReason::AutoDisabled);
        }

        let basis = caret_line.trim();
        if basis.is_empty() {
            return Decision::Skip(SkipReason::EmptyLine);
        }
        if self.in_flight {
            return Decision::Skip(SkipReason::Busy);
        }

        let signature = AutoSuggestSignature::new(TriggerReason::Pause, basis);
        if self.last_signature.as_ref() == Some(&signature) {
            return Decision::Skip(SkipReason::Duplicate);
        }

        self.last_signature = Some(signature);
        self.last_pause = Some(PauseMarker {
            line: basis.to_string(),
            at: now,
        });
        self.in_flight = true;
        Decision::Request(SuggestTrigger {
            reason: TriggerReason::Pause,
            basis: basis.to_string(),
        })
    }

    /// Called when a line break was typed, with the line as it was before
    /// the break.
    pub fn on_enter(&mut self, line_before_break: &str, now: Instant) -> Decision {
        if !self.auto_enabled {
            return Decision::Skip(SkipReason::AutoDisabled);
        }

        let basis = line_before_break.trim();
        if basis.is_empty() {
            return Decision::Skip(SkipReason::EmptyLine);
        }

        if let Some(pause) = &self.last_pause
            && pause.line == basis
            && now.saturating_duration_since(pause.at) < self.config.enter_window
        {
            return Decision::Skip(SkipReason::CoveredByPause);
        }

        if self.in_flight {
            return Decision::Skip(SkipReason::Busy);
        }

        let signature = AutoSuggestSignature::new(TriggerReason::Enter, basis);
        if self.last_signature.as_ref() == Some(&signature) {
            return Decision::Skip(SkipReason::Duplicate);
        }

        self.last_signature = Some(signature);
        self.in_flight = true;
        Decision::Request(SuggestTrigger {
            reason: TriggerReason::Enter,
            basis: basis.to_string(),
        })
    }

    /// Explicit "suggest now". Ignores signatures but not the in-flight request.
    pub fn on_manual(&mut self, basis: &str) -> Result<SuggestTrigger, SuggestError> {
        let basis = basis.trim();
        if basis.is_empty() {
            return Err(SuggestError::EmptyBasis);
        }
        if self.in_flight {
            return Err(SuggestError::Busy);
        }

        self.deadline = None;
        self.in_flight = true;
        Ok(SuggestTrigger {
            reason: TriggerReason::Manual,
            basis: basis.to_string(),
        })
    }

    pub fn on_blur(&mut self) {
        self.disarm();
    }

    /// Drops a pending pause timer without firing it.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Success or failure, the scheduler goes back to accepting triggers.
    pub fn on_request_complete(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
