//! Reading simulation inputs from files.
//!
//! Two formats are supported:
//!
//! - Plain key=value text, one key per line:
//!   ```text
//!   Initial Position = 53
//!   Requests = 98,183,37,122,14,124,65,67
//!   ```
//!   `Initial Position` and `Requests` are required, `Lower Bound`, `Upper Bound`, `Direction` and `Policies`
//!   (comma-separated names) are optional. Keys are case-insensitive, blank lines and `#` comments are skipped.
//! - YAML with the fields of [`SimulationConfig`], used for files with `.yaml` or `.yml` extension.
//!
//! Missing disk bounds default to `[0, 199]`.

use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Cylinder, DiskDomain};
use crate::error::{ParseNameError, SchedulingError};
use crate::head::Direction;
use crate::policy::Policy;
use crate::request::RequestSet;

/// Lower disk bound used when the input doesn't specify it.
pub const DEFAULT_LOWER_BOUND: Cylinder = 0;
/// Upper disk bound used when the input doesn't specify it.
pub const DEFAULT_UPPER_BOUND: Cylinder = 199;

/// An error returned when the input can't be read.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file can't be read.
    #[error("failed to read input file {path}: {source}")]
    Io {
        /// Path to the file.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The YAML file is malformed.
    #[error("failed to parse YAML config {path}: {source}")]
    Yaml {
        /// Path to the file.
        path: PathBuf,
        /// Underlying error.
        source: serde_yaml::Error,
    },
    /// A line of the key=value input has no `=`.
    #[error("line {line}: expected `<key> = <value>`, got `{content}`")]
    MalformedLine {
        /// Line number, starting from 1.
        line: usize,
        /// Line content.
        content: String,
    },
    /// A value that must be an integer is not.
    #[error("line {line}: invalid integer `{value}` for {key}")]
    InvalidNumber {
        /// Line number, starting from 1.
        line: usize,
        /// Key as written in the input.
        key: String,
        /// Offending value.
        value: String,
        /// Underlying error.
        source: ParseIntError,
    },
    /// Unknown policy or direction name.
    #[error("line {line}: {source}")]
    InvalidName {
        /// Line number, starting from 1.
        line: usize,
        /// Underlying error.
        source: ParseNameError,
    },
    /// A required key is absent.
    #[error("missing required key `{0}`")]
    MissingKey(&'static str),
    /// Configured disk bounds don't form a valid domain.
    #[error(transparent)]
    Domain(#[from] SchedulingError),
}

/// Complete input of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Initial head position.
    pub initial_position: Cylinder,
    /// Pending requests in arrival order.
    #[serde(default)]
    pub requests: RequestSet,
    /// Lowest cylinder of the disk.
    #[serde(default = "default_lower_bound")]
    pub lower_bound: Cylinder,
    /// Highest cylinder of the disk.
    #[serde(default = "default_upper_bound")]
    pub upper_bound: Cylinder,
    /// Initial direction for SCAN and LOOK.
    #[serde(default)]
    pub direction: Direction,
    /// Policies to run, in reporting order.
    #[serde(default = "Policy::all")]
    pub policies: Vec<Policy>,
}

fn default_lower_bound() -> Cylinder {
    DEFAULT_LOWER_BOUND
}

fn default_upper_bound() -> Cylinder {
    DEFAULT_UPPER_BOUND
}

impl SimulationConfig {
    /// Creates config with default disk bounds, direction and all policies.
    pub fn new(initial_position: Cylinder, requests: RequestSet) -> Self {
        Self {
            initial_position,
            requests,
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,
            direction: Direction::default(),
            policies: Policy::all(),
        }
    }

    /// Loads config from a file, YAML for `.yaml`/`.yml` extensions and key=value text otherwise.
    ///
    /// Returns [`InputError::Domain`] if the configured disk bounds are invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        log::debug!(
            "Loading {} input from {}",
            if is_yaml { "YAML" } else { "key=value" },
            path.display()
        );
        if is_yaml {
            let config = Self::from_yaml_str(&content).map_err(|source| InputError::Yaml {
                path: path.to_path_buf(),
                source,
            })?;
            config.domain()?;
            Ok(config)
        } else {
            Self::from_key_value_str(&content)
        }
    }

    /// Parses YAML config.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Parses key=value text input.
    ///
    /// Returns [`InputError::Domain`] if the configured disk bounds are invalid.
    pub fn from_key_value_str(content: &str) -> Result<Self, InputError> {
        let mut initial_position = None;
        let mut requests = None;
        let mut config = Self::new(0, RequestSet::new());

        for (idx, raw_line) in content.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw_line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (key, value) = trimmed.split_once('=').ok_or_else(|| InputError::MalformedLine {
                line,
                content: trimmed.to_string(),
            })?;
            let key = key.trim();
            let value = value.trim();
            let parse_number = |s: &str| {
                s.parse::<Cylinder>().map_err(|source| InputError::InvalidNumber {
                    line,
                    key: key.to_string(),
                    value: s.to_string(),
                    source,
                })
            };

            match normalize_key(key).as_str() {
                "initial position" => initial_position = Some(parse_number(value)?),
                "requests" => {
                    requests = Some(
                        split_list(value)
                            .map(parse_number)
                            .collect::<Result<RequestSet, _>>()?,
                    )
                }
                "lower bound" => config.lower_bound = parse_number(value)?,
                "upper bound" => config.upper_bound = parse_number(value)?,
                "direction" => {
                    config.direction = value
                        .parse()
                        .map_err(|source| InputError::InvalidName { line, source })?
                }
                "policies" => {
                    config.policies = split_list(value)
                        .map(|name| name.parse().map_err(|source| InputError::InvalidName { line, source }))
                        .collect::<Result<Vec<Policy>, _>>()?
                }
                _ => log::warn!("Ignoring unknown key `{}` at line {}", key, line),
            }
        }

        config.initial_position = initial_position.ok_or(InputError::MissingKey("Initial Position"))?;
        config.requests = requests.ok_or(InputError::MissingKey("Requests"))?;
        config.domain()?;
        Ok(config)
    }

    /// Builds the disk domain from configured bounds.
    pub fn domain(&self) -> Result<DiskDomain, SchedulingError> {
        DiskDomain::new(self.lower_bound, self.upper_bound)
    }
}

fn normalize_key(key: &str) -> String {
    key.split(|c: char| c.is_whitespace() || c == '_')
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .join(" ")
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_original_format() {
        let config = SimulationConfig::from_key_value_str(
            "Initial Position = 53\nRequests = 98,183,37,122,14,124,65,67\n",
        )
        .unwrap();
        assert_eq!(config.initial_position, 53);
        assert_eq!(config.requests.as_slice(), &[98, 183, 37, 122, 14, 124, 65, 67]);
        assert_eq!(config.domain().unwrap(), DiskDomain::new(0, 199).unwrap());
        assert_eq!(config.direction, Direction::Up);
        assert_eq!(config.policies, Policy::all());
    }

    #[test]
    fn parse_optional_keys_and_comments() {
        let config = SimulationConfig::from_key_value_str(
            "# demo\n\ninitial_position=10\nrequests = 1, 2 ,3\nUpper Bound = 499\nDirection = down\nPolicies = scan, c-look\n",
        )
        .unwrap();
        assert_eq!(config.initial_position, 10);
        assert_eq!(config.requests.as_slice(), &[1, 2, 3]);
        assert_eq!(config.upper_bound, 499);
        assert_eq!(config.direction, Direction::Down);
        assert_eq!(config.policies, vec![Policy::Scan, Policy::CLook]);
    }

    #[test]
    fn empty_requests_are_allowed() {
        let config = SimulationConfig::from_key_value_str("Initial Position = 7\nRequests =\n").unwrap();
        assert!(config.requests.is_empty());
    }

    #[test]
    fn key_value_errors() {
        assert!(matches!(
            SimulationConfig::from_key_value_str("Requests = 1,2"),
            Err(InputError::MissingKey("Initial Position"))
        ));
        assert!(matches!(
            SimulationConfig::from_key_value_str("Initial Position = 1"),
            Err(InputError::MissingKey("Requests"))
        ));
        assert!(matches!(
            SimulationConfig::from_key_value_str("Initial Position = 1\nRequests = 1,x"),
            Err(InputError::InvalidNumber { line: 2, .. })
        ));
        assert!(matches!(
            SimulationConfig::from_key_value_str("Initial Position 1"),
            Err(InputError::MalformedLine { line: 1, .. })
        ));
        assert!(matches!(
            SimulationConfig::from_key_value_str("Initial Position = 1\nRequests = 1\nDirection = left"),
            Err(InputError::InvalidName { line: 3, .. })
        ));
    }

    #[test]
    fn invalid_bounds_are_input_errors() {
        let err = SimulationConfig::from_key_value_str("Initial Position = 1\nRequests = 1\nLower Bound = 200\n")
            .unwrap_err();
        assert!(matches!(
            err,
            InputError::Domain(SchedulingError::InvalidDomain {
                lower_bound: 200,
                upper_bound: DEFAULT_UPPER_BOUND
            })
        ));
        assert_eq!(
            err.to_string(),
            "invalid disk domain: lower bound 200 must be less than upper bound 199"
        );

        let path = std::env::temp_dir().join(format!("dslab-disk-scheduling-{}-bounds.yaml", std::process::id()));
        std::fs::write(&path, "initial_position: 5\nlower_bound: 10\nupper_bound: 10\n").unwrap();
        let err = SimulationConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, InputError::Domain(SchedulingError::InvalidDomain { .. })));
    }

    #[test]
    fn parse_yaml() {
        let config = SimulationConfig::from_yaml_str(
            "initial_position: 53\nrequests: [98, 183, 37]\nupper_bound: 299\ndirection: down\npolicies: [SSTF, c-scan]\n",
        )
        .unwrap();
        assert_eq!(config.initial_position, 53);
        assert_eq!(config.requests.as_slice(), &[98, 183, 37]);
        assert_eq!(config.lower_bound, DEFAULT_LOWER_BOUND);
        assert_eq!(config.upper_bound, 299);
        assert_eq!(config.direction, Direction::Down);
        assert_eq!(config.policies, vec![Policy::Sstf, Policy::CScan]);

        let minimal = SimulationConfig::from_yaml_str("initial_position: 5").unwrap();
        assert_eq!(minimal, SimulationConfig::new(5, RequestSet::new()));

        assert!(SimulationConfig::from_yaml_str("initial_position: 5\npolicies: [ELEVATOR]").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = SimulationConfig::load("/nonexistent/input_data.txt").unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }
}
