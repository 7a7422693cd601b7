//! Input sources handed to the summarize and extract operations.
//!
//! A [`BaseSource`] only validates where the input lives (a local file or a
//! remote URL). The typed sources on top of it check the file format and load
//! the bytes that will be uploaded.

use log::*;
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::{not_implemented, source_error, Error, SourceErrorKind};
use crate::source::{Source, SourceKind};
use crate::vocabulary::{AVAILABLE_AUDIO_FORMATS, AVAILABLE_GENERIC_FORMATS};

/// Where a source's content lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Local {
        path: PathBuf,
        stem: String,
        /// File extension including the leading dot, empty when absent.
        suffix: String,
    },
    Remote(Url),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Local { .. } => write!(f, "local"),
            Origin::Remote(_) => write!(f, "remote"),
        }
    }
}

/// A validated local path or remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseSource {
    origin: Origin,
}

impl BaseSource {
    /// Exactly one of `filepath` and `url` must be provided. Empty values count
    /// as missing.
    pub fn new(filepath: Option<&Path>, url: Option<&str>) -> Result<Self, Error> {
        let filepath = filepath.filter(|p| !p.as_os_str().is_empty());
        let url = url.filter(|u| !u.is_empty());

        match (filepath, url) {
            (None, None) => Err(source_error(
                SourceErrorKind::MissingLocation,
                "Please provide either a local or a remote source, respectively `filepath` or `url`.",
            )),
            (Some(_), Some(_)) => Err(source_error(
                SourceErrorKind::ConflictingLocation,
                "Please provide either a local or a remote source, not both `filepath` and `url`.",
            )),
            (Some(path), None) => Self::local(path),
            (None, Some(url)) => Self::remote(url),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::new(Some(path.as_ref()), None)
    }

    pub fn from_url(url: &str) -> Result<Self, Error> {
        Self::new(None, Some(url))
    }

    fn local(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            warn!("Source file {} does not exist", path.display());
            return Err(source_error(
                SourceErrorKind::FileNotFound,
                &format!(
                    "File {} does not exist or is not accessible.",
                    path.display()
                ),
            ));
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let suffix = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        Ok(Self {
            origin: Origin::Local {
                path: path.to_path_buf(),
                stem,
                suffix,
            },
        })
    }

    fn remote(url: &str) -> Result<Self, Error> {
        let invalid = || {
            source_error(
                SourceErrorKind::InvalidUrl,
                &format!("Please provide a valid URL. {} is not valid.", url),
            )
        };

        let parsed = Url::parse(url).map_err(|err| {
            debug!("Failed to parse source URL {}: {:?}", url, err);
            invalid()
        })?;

        let web_scheme = matches!(parsed.scheme(), "http" | "https");
        if !web_scheme || parsed.host_str().is_none() {
            return Err(invalid());
        }

        Ok(Self {
            origin: Origin::Remote(parsed),
        })
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// File suffix of a local source, `None` for remote sources.
    pub fn suffix(&self) -> Option<&str> {
        match &self.origin {
            Origin::Local { suffix, .. } => Some(suffix),
            Origin::Remote(_) => None,
        }
    }

    /// File stem of a local source, `None` for remote sources.
    pub fn stem(&self) -> Option<&str> {
        match &self.origin {
            Origin::Local { stem, .. } => Some(stem),
            Origin::Remote(_) => None,
        }
    }

    /// Checks the suffix against `formats` and reads the file.
    fn load(&self, formats: &[&str]) -> Result<Vec<u8>, Error> {
        match &self.origin {
            Origin::Local { path, suffix, .. } => {
                if !formats.contains(&suffix.as_str()) {
                    return Err(source_error(
                        SourceErrorKind::UnsupportedFormat(suffix.clone()),
                        &format!("Please provide a valid file format. {} is not valid.", suffix),
                    ));
                }
                let bytes = std::fs::read(path)?;
                debug!("Loaded {} bytes from {}", bytes.len(), path.display());
                Ok(bytes)
            }
            Origin::Remote(_) => Err(not_implemented(
                "Loading files from URLs is not implemented yet.",
            )),
        }
    }
}

/// A transcript-like text or JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericSource {
    base: BaseSource,
    file_object: Vec<u8>,
}

impl GenericSource {
    pub fn new(base: BaseSource) -> Result<Self, Error> {
        let file_object = base.load(AVAILABLE_GENERIC_FORMATS)?;
        Ok(Self { base, file_object })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::new(BaseSource::from_path(path)?)
    }

    pub fn base(&self) -> &BaseSource {
        &self.base
    }

    pub fn file_object(&self) -> &[u8] {
        &self.file_object
    }
}

/// An audio recording to transcribe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSource {
    base: BaseSource,
    file_object: Vec<u8>,
}

impl AudioSource {
    pub fn new(base: BaseSource) -> Result<Self, Error> {
        let file_object = base.load(AVAILABLE_AUDIO_FORMATS)?;
        Ok(Self { base, file_object })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::new(BaseSource::from_path(path)?)
    }

    pub fn base(&self) -> &BaseSource {
        &self.base
    }

    pub fn file_object(&self) -> &[u8] {
        &self.file_object
    }
}

/// Any source that can be submitted to a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Generic(GenericSource),
    Audio(AudioSource),
}

impl InputSource {
    /// Builds the typed source for `kind`. Kinds without a loader yet fail
    /// once the base has been validated.
    pub fn from_kind(kind: SourceKind, base: BaseSource) -> Result<Self, Error> {
        match kind {
            SourceKind::Generic => Ok(InputSource::Generic(GenericSource::new(base)?)),
            SourceKind::Audio => Ok(InputSource::Audio(AudioSource::new(base)?)),
            other => Err(not_implemented(&format!(
                "{} is not implemented yet.",
                other.object_name()
            ))),
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            InputSource::Generic(_) => SourceKind::Generic,
            InputSource::Audio(_) => SourceKind::Audio,
        }
    }

    /// The descriptor recorded on jobs created from this source.
    pub fn descriptor(&self) -> Source {
        Source::new(self.kind().as_str())
    }

    pub fn base(&self) -> &BaseSource {
        match self {
            InputSource::Generic(source) => source.base(),
            InputSource::Audio(source) => source.base(),
        }
    }

    pub fn file_object(&self) -> &[u8] {
        match self {
            InputSource::Generic(source) => source.file_object(),
            InputSource::Audio(source) => source.file_object(),
        }
    }
}

impl From<GenericSource> for InputSource {
    fn from(source: GenericSource) -> Self {
        InputSource::Generic(source)
    }
}

impl From<AudioSource> for InputSource {
    fn from(source: AudioSource) -> Self {
        InputSource::Audio(source)
    }
}
