//! Observation of job lifecycle and update outcomes.
//!
//! Jobs report what happened to them through a [`JobObserver`] instead of
//! writing to the logger directly, so callers can capture the outcome of an
//! update. [`LogObserver`] is the default and forwards to the `log` facade.

use log::Level;
use std::fmt;

/// Something that happened to a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobEvent {
    Created {
        job_name: String,
    },
    Updated {
        job_name: String,
        field: String,
        value: String,
    },
    /// The proposed value equals the current one.
    NotUpdated {
        job_name: String,
        field: String,
        value: String,
    },
    /// The update named a field the job does not have.
    InvalidAttribute {
        job_name: String,
        field: String,
    },
}

impl JobEvent {
    pub fn level(&self) -> Level {
        match self {
            JobEvent::InvalidAttribute { .. } => Level::Warn,
            _ => Level::Info,
        }
    }
}

impl fmt::Display for JobEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobEvent::Created { job_name } => write!(f, "Job {} created.", job_name),
            JobEvent::Updated {
                job_name,
                field,
                value,
            } => write!(f, "Job {} updated: {} = {}", job_name, field, value),
            JobEvent::NotUpdated {
                job_name,
                field,
                value,
            } => write!(f, "Job {} not updated: {} = {}", job_name, field, value),
            JobEvent::InvalidAttribute { job_name, field } => write!(
                f,
                "Cannot update {} in {}, not a valid attribute.",
                field, job_name
            ),
        }
    }
}

pub trait JobObserver {
    fn notify(&self, event: &JobEvent);
}

/// Writes every event to the `log` facade at the event's level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl JobObserver for LogObserver {
    fn notify(&self, event: &JobEvent) {
        log::log!(event.level(), "{}", event);
    }
}
