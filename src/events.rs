// Host event stream - newline-delimited JSON events fed to a reporter

use crate::report::{Reporter, RunResult, RunStatus};
use crate::state::TestStatus;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::BufRead;
use thiserror::Error;
use tracing::{debug, warn};

/// One event emitted by the host test engine
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    TestEnd { name: String, status: TestStatus },
    RunEnd {
        #[serde(default)]
        status: Option<RunStatus>,
    },
}

#[derive(Debug, Error)]
#[error("invalid event on line {line}: {source}")]
pub struct EventError {
    pub line: usize,
    #[source]
    pub source: serde_json::Error,
}

/// Parse a single event line
pub fn parse_event(line: &str, line_number: usize) -> Result<HostEvent, EventError> {
    serde_json::from_str(line).map_err(|source| EventError {
        line: line_number,
        source,
    })
}

/// Feed every event from `input` to `reporter`.
///
/// Returns the number of test events delivered. If the stream ends without a
/// `run_end` event the run is finalized anyway.
pub fn drive<R: BufRead>(input: R, reporter: &mut dyn Reporter) -> Result<usize> {
    let mut delivered = 0;
    let mut ended = false;

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("Failed to read event line {}", line_number))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if ended {
            warn!("Ignoring event after run_end on line {}", line_number);
            continue;
        }

        let event = parse_event(line, line_number)?;

        match event {
            HostEvent::TestEnd { name, status } => {
                reporter.on_test_end(&name, status);
                delivered += 1;
            }
            HostEvent::RunEnd { status } => {
                debug!("run_end received on line {}", line_number);
                reporter.on_run_end(&RunResult { status })?;
                ended = true;
            }
        }
    }

    if !ended {
        warn!("Event stream ended without run_end; finalizing run");
        reporter.on_run_end(&RunResult::default())?;
    }

    Ok(delivered)
}
