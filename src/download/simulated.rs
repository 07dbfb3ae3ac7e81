//! Simulated download progress

use super::catalog::Whitepaper;
use super::sink::DownloadSink;
use crate::timer::{Clock, TimerSet};
use rand::Rng;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    Idle,
    Running,
    Complete,
}

/// Pace of the simulated download
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressTimings {
    pub tick_interval: Duration,
    pub settle_delay: Duration,
    /// Smallest percent added per tick
    pub min_increment: f64,
    /// Largest percent added per tick
    pub max_increment: f64,
}

impl Default for ProgressTimings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(200),
            settle_delay: Duration::from_millis(500),
            min_increment: 5.0,
            max_increment: 15.0,
        }
    }
}

impl ProgressTimings {
    /// Why these timings cannot drive a download to completion, if they can't
    pub fn problem(&self) -> Option<&'static str> {
        if self.tick_interval.is_zero() {
            Some("tick interval must be positive")
        } else if !self.min_increment.is_finite() || !self.max_increment.is_finite() {
            Some("increments must be finite")
        } else if self.min_increment <= 0.0 {
            Some("increments must be positive")
        } else if self.max_increment < self.min_increment {
            Some("max increment is below min increment")
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProgressTimer {
    Tick,
    Settle,
}

/// Drives a fake progress bar to 100% and then saves the artifact once
///
/// `idle -> running -> complete`; starting again from `complete` runs a new
/// session from zero. Starting while running does nothing.
pub struct SimulatedDownload<C: Clock, R: Rng> {
    clock: C,
    rng: R,
    timings: ProgressTimings,
    artifact: &'static Whitepaper,
    sink: Box<dyn DownloadSink>,
    status: DownloadStatus,
    percent: f64,
    timers: TimerSet<ProgressTimer>,
    sessions: u64,
    saved_to: Option<PathBuf>,
}

impl<C: Clock, R: Rng> SimulatedDownload<C, R> {
    pub fn new(
        clock: C,
        rng: R,
        timings: ProgressTimings,
        artifact: &'static Whitepaper,
        sink: Box<dyn DownloadSink>,
    ) -> Self {
        let timings = match timings.problem() {
            Some(problem) => {
                tracing::warn!(problem, "invalid progress timings, using defaults");
                ProgressTimings::default()
            }
            None => timings,
        };
        Self {
            clock,
            rng,
            timings,
            artifact,
            sink,
            status: DownloadStatus::Idle,
            percent: 0.0,
            timers: TimerSet::new(),
            sessions: 0,
            saved_to: None,
        }
    }

    pub fn start(&mut self) {
        if self.status == DownloadStatus::Running {
            tracing::debug!(artifact = self.artifact.slug, "download already running");
            return;
        }
        let now = self.clock.now();
        self.sessions += 1;
        self.percent = 0.0;
        self.status = DownloadStatus::Running;
        self.saved_to = None;
        self.timers.cancel_all();
        self.timers
            .schedule(ProgressTimer::Tick, now + self.timings.tick_interval);
        tracing::info!(
            artifact = self.artifact.slug,
            session = self.sessions,
            "download started"
        );
    }

    /// Start a download of a different artifact. Ignored while running.
    pub fn start_with(&mut self, artifact: &'static Whitepaper) {
        if self.status == DownloadStatus::Running {
            tracing::debug!(artifact = artifact.slug, "download already running");
            return;
        }
        self.artifact = artifact;
        self.start();
    }

    /// Tear down a running session without saving anything
    pub fn cancel(&mut self) {
        if self.status != DownloadStatus::Running {
            return;
        }
        self.timers.cancel_all();
        self.status = DownloadStatus::Idle;
        self.percent = 0.0;
        tracing::info!(artifact = self.artifact.slug, "download cancelled");
    }

    /// Fire every timer that is due
    pub fn tick(&mut self) {
        let now = self.clock.now();
        while let Some((timer, at)) = self.timers.pop_due(now) {
            match timer {
                ProgressTimer::Tick => self.advance(at),
                ProgressTimer::Settle => self.finish(),
            }
        }
    }

    fn advance(&mut self, at: Instant) {
        let increment = self
            .rng
            .gen_range(self.timings.min_increment..=self.timings.max_increment);
        self.percent += increment;

        if self.percent >= 100.0 {
            self.percent = 100.0;
            self.timers
                .schedule(ProgressTimer::Settle, at + self.timings.settle_delay);
            tracing::debug!(artifact = self.artifact.slug, "download reached 100%");
        } else {
            self.timers
                .schedule(ProgressTimer::Tick, at + self.timings.tick_interval);
        }
    }

    fn finish(&mut self) {
        self.status = DownloadStatus::Complete;
        match self.sink.deliver(self.artifact) {
            Ok(path) => {
                tracing::info!(
                    artifact = self.artifact.slug,
                    path = %path.display(),
                    "download saved"
                );
                self.saved_to = Some(path);
            }
            Err(e) => {
                tracing::warn!(artifact = self.artifact.slug, error = %e, "download could not be saved");
            }
        }
    }

    pub fn status(&self) -> DownloadStatus {
        self.status
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn artifact(&self) -> &'static Whitepaper {
        self.artifact
    }

    pub fn saved_to(&self) -> Option<&Path> {
        self.saved_to.as_deref()
    }

    /// Number of sessions started so far
    pub fn sessions(&self) -> u64 {
        self.sessions
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
