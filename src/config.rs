//! Generator configuration.
//!
//! The built-in defaults reproduce the canonical run: both Atlassian
//! descriptors, the `jira`/`confluence` product tokens, the `(apps)`
//! exclusion, the Jira custom labels, and the labeler file under `.github`.
//! A YAML document may override any subset of these fields; omitted fields
//! keep their defaults.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use regex::Regex;
use serde::Deserialize;

use crate::{
    custom::default_custom_labels,
    error::{self, Error},
    label::RawLabel,
};

/// Descriptor documents fetched by default, in fetch order.
pub const DEFAULT_SOURCES: [&str; 2] = [
    "https://developer.atlassian.com/cloud/jira/platform/swagger-v3.v3.json",
    "https://developer.atlassian.com/cloud/confluence/swagger.v3.json",
];
/// Product tokens searched for in descriptor URLs.
pub const DEFAULT_PRODUCTS: [&str; 2] = ["jira", "confluence",];
/// Tags naming application groupings rather than concrete resources.
pub const DEFAULT_EXCLUDE: &str = r"\(apps\)";
/// Labeler artifact the rendered rules are appended to.
pub const DEFAULT_OUTPUT: &str = ".github/labeler-issue-labels.yml";
/// Per-request timeout for descriptor fetches.
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;

/// Complete generator configuration.
///
/// # Examples
///
/// ```
/// use issuelabels::parse_config;
///
/// let config = parse_config("products: [jira]\ntimeout_secs: 5\n",).expect("valid configuration",);
/// assert_eq!(config.products, vec!["jira".to_owned()]);
/// assert_eq!(config.sources.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig
{
    /// Descriptor URLs fetched in order.
    pub sources:       Vec<String,>,
    /// Known product tokens; the leftmost one found in a URL names the product.
    pub products:      Vec<String,>,
    /// Pattern for tag names that are skipped.
    pub exclude:       String,
    /// Entries synthesized in addition to descriptor tags.
    pub custom_labels: Vec<RawLabel,>,
    /// Artifact the rendered document is appended to.
    pub output:        PathBuf,
    /// Timeout applied to each descriptor request, in seconds.
    #[serde(deserialize_with = "deserialize_timeout")]
    pub timeout_secs:  u64,
}

impl Default for GeneratorConfig
{
    fn default() -> Self
    {
        Self {
            sources:       DEFAULT_SOURCES.iter().map(|url| (*url).to_owned(),).collect(),
            products:      DEFAULT_PRODUCTS.iter().map(|product| (*product).to_owned(),).collect(),
            exclude:       DEFAULT_EXCLUDE.to_owned(),
            custom_labels: default_custom_labels(),
            output:        PathBuf::from(DEFAULT_OUTPUT,),
            timeout_secs:  DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeneratorConfig
{
    /// Returns the per-request timeout.
    pub fn timeout(&self,) -> Duration
    {
        Duration::from_secs(self.timeout_secs,)
    }

    /// Checks invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the timeout is zero, when the
    /// product list is empty or holds a blank token, when the exclusion
    /// pattern does not compile, or when a custom label lacks a product or
    /// name.
    pub fn validate(&self,) -> Result<(), Error,>
    {
        if self.timeout_secs == 0 {
            return Err(Error::validation("timeout_secs must be greater than zero",),);
        }

        if self.products.is_empty() {
            return Err(Error::validation("at least one product token is required",),);
        }

        if self.products.iter().any(|product| product.trim().is_empty(),) {
            return Err(Error::validation("product tokens must not be blank",),);
        }

        Regex::new(&self.exclude,).map_err(|source| {
            Error::validation(format!("exclude pattern `{}` is invalid: {source}", self.exclude),)
        },)?;

        for (index, entry,) in self.custom_labels.iter().enumerate() {
            if entry.product.trim().is_empty() || entry.name.trim().is_empty() {
                return Err(Error::validation(format!(
                    "custom label #{index} requires a product and a name"
                ),),);
            }
        }

        Ok((),)
    }
}

/// Loads and validates the configuration stored at `path`.
///
/// # Errors
///
/// Returns [`Error::ConfigIo`] when the file cannot be read,
/// [`Error::Config`] naming `path` when the YAML cannot be decoded, and
/// [`Error::Validation`] when invariants fail.
pub fn load_config(path: &Path,) -> Result<GeneratorConfig, Error,>
{
    let contents =
        fs::read_to_string(path,).map_err(|source| error::config_io_error(path, source,),)?;

    parse_config(&contents,).map_err(|error| match error {
        Error::Parse {
            source,
        } => Error::Config {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    },)
}

/// Parses and validates a configuration document.
///
/// An empty document yields [`GeneratorConfig::default`].
///
/// # Errors
///
/// Propagates [`Error::Parse`] and [`Error::Validation`].
pub fn parse_config(contents: &str,) -> Result<GeneratorConfig, Error,>
{
    if contents.trim().is_empty() {
        return Ok(GeneratorConfig::default(),);
    }

    let config: GeneratorConfig = serde_yaml::from_str(contents,)?;
    config.validate()?;
    Ok(config,)
}

fn deserialize_timeout<'de, D,>(deserializer: D,) -> Result<u64, D::Error,>
where
    D: serde::Deserializer<'de,>,
{
    let value = u64::deserialize(deserializer,)?;
    if value == 0 {
        return Err(serde::de::Error::custom("timeout_secs must be greater than zero",),);
    }
    Ok(value,)
}

#[cfg(test)]
mod tests
{
    use std::{fs, path::Path};

    use tempfile::tempdir;

    use super::{DEFAULT_OUTPUT, GeneratorConfig, load_config, parse_config};
    use crate::{Error, RawLabel};

    #[test]
    fn empty_document_yields_defaults()
    {
        let config = parse_config("  \n",).expect("empty configuration is valid",);
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.output, Path::new(DEFAULT_OUTPUT));
        assert_eq!(config.timeout().as_secs(), 2);
    }

    #[test]
    fn partial_document_keeps_remaining_defaults()
    {
        let yaml = r#"
output: labels.yml
custom_labels:
  - product: confluence
    name: Space permissions
"#;
        let config = parse_config(yaml,).expect("valid configuration",);

        assert_eq!(config.output, Path::new("labels.yml"));
        assert_eq!(config.custom_labels, vec![RawLabel::new("confluence", "Space permissions")]);
        assert_eq!(config.products, vec!["jira".to_owned(), "confluence".to_owned()]);
        assert_eq!(config.exclude, r"\(apps\)");
    }

    #[test]
    fn unknown_fields_are_rejected()
    {
        let error = parse_config("sourcez: []\n",).expect_err("unknown field",);
        assert!(matches!(error, Error::Parse { .. }));
    }

    #[test]
    fn zero_timeout_is_rejected()
    {
        let error = parse_config("timeout_secs: 0\n",).expect_err("zero timeout",);
        assert!(error.to_string().contains("timeout_secs must be greater than zero"));
    }

    #[test]
    fn empty_product_list_is_rejected()
    {
        let error = parse_config("products: []\n",).expect_err("no products",);
        match error {
            Error::Validation {
                message,
            } => assert_eq!(message, "at least one product token is required"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn invalid_exclude_pattern_is_rejected()
    {
        let error = parse_config("exclude: \"(apps\"\n",).expect_err("invalid pattern",);
        assert!(matches!(error, Error::Validation { .. }));
    }

    #[test]
    fn blank_custom_label_is_rejected()
    {
        let yaml = r#"
custom_labels:
  - product: jira
    name: "  "
"#;
        let error = parse_config(yaml,).expect_err("blank name",);
        assert!(error.to_string().contains("custom label #0"));
    }

    #[test]
    fn load_config_reads_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("issuelabels.yaml",);
        fs::write(&path, "sources:\n  - https://example.test/jira/swagger.json\n",)
            .expect("failed to write config",);

        let config = load_config(&path,).expect("valid configuration",);
        assert_eq!(config.sources, vec!["https://example.test/jira/swagger.json".to_owned()]);
    }

    #[test]
    fn load_config_names_the_file_on_decode_errors()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("broken-issuelabels.yaml",);
        fs::write(&path, "sourcez: []\n",).expect("failed to write config",);

        let error = load_config(&path,).expect_err("unknown field",);

        match &error {
            Error::Config {
                path: stored_path, ..
            } => assert_eq!(stored_path, &path),
            other => panic!("unexpected error variant: {other:?}"),
        }
        assert!(error.to_display_string().contains("broken-issuelabels.yaml"));
    }

    #[test]
    fn validate_rejects_zero_timeout_built_in_code()
    {
        let config = GeneratorConfig {
            timeout_secs: 0, ..GeneratorConfig::default()
        };

        let error = config.validate().expect_err("zero timeout",);
        match error {
            Error::Validation {
                message,
            } => assert_eq!(message, "timeout_secs must be greater than zero"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn load_config_reports_missing_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("missing.yaml",);

        let error = load_config(&path,).expect_err("missing file",);
        assert!(matches!(error, Error::ConfigIo { .. }));
    }
}
