//! The job record shared by every job type and its validated update.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{job_error, Error, JobErrorKind};
use crate::job_observer::{JobEvent, JobObserver, LogObserver};
use crate::job_settings::JobSettings;
use crate::source::Source;
use crate::vocabulary::DEFAULT_JOB_STATUS;

/// A unit of work submitted to the service, tracked through its status.
///
/// Fields are read through accessors and only change through
/// [`BaseJob::job_update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseJob {
    display_name: String,
    job_name: String,
    #[serde(default = "default_job_status")]
    job_status: String,
    #[serde(default)]
    settings: JobSettings,
    source: Source,
    #[serde(default)]
    time_started: String,
    #[serde(default)]
    transcript_id: String,
}

fn default_job_status() -> String {
    DEFAULT_JOB_STATUS.to_string()
}

/// The fields a job update may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    DisplayName,
    JobName,
    JobStatus,
    Settings,
    Source,
    TimeStarted,
    TranscriptId,
}

impl JobField {
    pub const ALL: [JobField; 7] = [
        JobField::DisplayName,
        JobField::JobName,
        JobField::JobStatus,
        JobField::Settings,
        JobField::Source,
        JobField::TimeStarted,
        JobField::TranscriptId,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobField::DisplayName => "display_name",
            JobField::JobName => "job_name",
            JobField::JobStatus => "job_status",
            JobField::Settings => "settings",
            JobField::Source => "source",
            JobField::TimeStarted => "time_started",
            JobField::TranscriptId => "transcript_id",
        }
    }
}

impl fmt::Display for JobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct JobFieldParseError;

impl FromStr for JobField {
    type Err = JobFieldParseError;

    fn from_str(name: &str) -> Result<JobField, Self::Err> {
        JobField::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or(JobFieldParseError)
    }
}

/// A decoded update value, already checked against its field's type.
enum FieldValue {
    Text(String),
    Settings(JobSettings),
    Source(Source),
}

impl FieldValue {
    fn decode(field: JobField, value: &Value) -> Result<FieldValue, Error> {
        let invalid_type = || {
            job_error(
                JobErrorKind::InvalidType {
                    field: field.to_string(),
                },
                &format!("Invalid value for {}: {}", field, value),
            )
        };

        match field {
            JobField::Settings => {
                let known_keys = value.as_object().map_or(false, |settings| {
                    settings
                        .keys()
                        .all(|key| JobSettings::FIELDS.contains(&key.as_str()))
                });
                if !known_keys {
                    return Err(invalid_type());
                }
                serde_json::from_value(value.clone())
                    .map(FieldValue::Settings)
                    .map_err(|_| invalid_type())
            }
            JobField::Source => serde_json::from_value(value.clone())
                .map(FieldValue::Source)
                .map_err(|_| invalid_type()),
            _ => value
                .as_str()
                .map(|text| FieldValue::Text(text.to_string()))
                .ok_or_else(invalid_type),
        }
    }
}

/// Renders a proposed value the way update messages show it: strings bare,
/// everything else as compact JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl BaseJob {
    pub fn new(
        display_name: impl Into<String>,
        job_name: impl Into<String>,
        settings: JobSettings,
        source: Source,
        time_started: impl Into<String>,
        transcript_id: impl Into<String>,
    ) -> Self {
        let job = Self {
            display_name: display_name.into(),
            job_name: job_name.into(),
            job_status: default_job_status(),
            settings,
            source,
            time_started: time_started.into(),
            transcript_id: transcript_id.into(),
        };
        job.announce(&LogObserver);
        job
    }

    /// Reports the job's creation to `observer`.
    pub fn announce(&self, observer: &dyn JobObserver) {
        observer.notify(&JobEvent::Created {
            job_name: self.job_name.clone(),
        });
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    pub fn job_status(&self) -> &str {
        &self.job_status
    }

    pub fn settings(&self) -> &JobSettings {
        &self.settings
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn time_started(&self) -> &str {
        &self.time_started
    }

    pub fn transcript_id(&self) -> &str {
        &self.transcript_id
    }

    /// Updates the named fields, logging each outcome through [`LogObserver`].
    ///
    /// See [`BaseJob::job_update_observed`].
    pub fn job_update<I, K>(&mut self, updates: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        self.job_update_observed(updates, &LogObserver)
    }

    /// Updates the named fields and reports each outcome to `observer`.
    ///
    /// A field whose value differs is assigned and reported as updated; an
    /// equal value is reported as not updated. Unknown names are reported as
    /// invalid attributes and skipped. A value that does not fit its field is
    /// a type error, returned before any field is touched.
    pub fn job_update_observed<I, K>(
        &mut self,
        updates: I,
        observer: &dyn JobObserver,
    ) -> Result<(), Error>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut decoded = Vec::new();
        for (key, value) in updates {
            let key = key.as_ref().to_string();
            let typed = match key.parse::<JobField>() {
                Ok(field) => Some((field, FieldValue::decode(field, &value)?)),
                Err(_) => None,
            };
            decoded.push((key, typed, render(&value)));
        }

        for (key, typed, rendered) in decoded {
            let event = match typed {
                Some((field, value)) => {
                    let changed = self.assign(field, value);
                    if changed {
                        JobEvent::Updated {
                            job_name: self.job_name.clone(),
                            field: key,
                            value: rendered,
                        }
                    } else {
                        JobEvent::NotUpdated {
                            job_name: self.job_name.clone(),
                            field: key,
                            value: rendered,
                        }
                    }
                }
                None => JobEvent::InvalidAttribute {
                    job_name: self.job_name.clone(),
                    field: key,
                },
            };
            observer.notify(&event);
        }

        Ok(())
    }

    /// Stores `value` in `field`, returning whether the field changed.
    fn assign(&mut self, field: JobField, value: FieldValue) -> bool {
        match (field, value) {
            (JobField::Settings, FieldValue::Settings(settings)) => {
                replace_if_changed(&mut self.settings, settings)
            }
            (JobField::Source, FieldValue::Source(source)) => {
                replace_if_changed(&mut self.source, source)
            }
            (field, FieldValue::Text(text)) => {
                let slot = match field {
                    JobField::DisplayName => &mut self.display_name,
                    JobField::JobName => &mut self.job_name,
                    JobField::JobStatus => &mut self.job_status,
                    JobField::TimeStarted => &mut self.time_started,
                    JobField::TranscriptId => &mut self.transcript_id,
                    JobField::Settings | JobField::Source => return false,
                };
                replace_if_changed(slot, text)
            }
            _ => false,
        }
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

/// A job specialization with its own status vocabulary.
pub trait TypedJob {
    fn job_type(&self) -> &'static str;

    fn available_status(&self) -> &'static [&'static str];

    fn base(&self) -> &BaseJob;

    /// Whether the current status belongs to this job type's vocabulary.
    fn has_known_status(&self) -> bool {
        self.available_status().contains(&self.base().job_status())
    }
}
