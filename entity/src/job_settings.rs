use serde::{Deserialize, Deserializer, Serialize};

/// Flags controlling how the service runs a job.
///
/// Keys the service adds beyond these flags are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSettings {
    /// Delete the job's data from the service once it completes.
    pub ephemeral_data: bool,
    /// Comma-separated pipeline names. Records listing them as an array are
    /// joined on read.
    #[serde(deserialize_with = "pipeline_from_text_or_list")]
    pub pipeline: Option<String>,
    pub only_api: bool,
    pub split_long_utterances: bool,
}

impl JobSettings {
    pub const FIELDS: [&'static str; 4] = [
        "ephemeral_data",
        "pipeline",
        "only_api",
        "split_long_utterances",
    ];
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PipelineRepr {
    Text(String),
    List(Vec<String>),
}

fn pipeline_from_text_or_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(
        Option::<PipelineRepr>::deserialize(deserializer)?.map(|pipeline| match pipeline {
            PipelineRepr::Text(text) => text,
            PipelineRepr::List(names) => names.join(","),
        }),
    )
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            ephemeral_data: false,
            pipeline: None,
            only_api: true,
            split_long_utterances: false,
        }
    }
}
