// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Rendering of labeler rules.
///
/// The document is a fixed comment header followed by one YAML entry per
/// label. It is appended to the target artifact, never truncating it.
use std::{fmt::Write as _, fs::OpenOptions, io::Write as _, path::Path};

use regex::Regex;
use tracing::info;

use crate::{
    error::{self, Error},
    label::Label,
};

/// Comment block preceding the generated rules.
pub const HEADER: &str = "# Generated by issuelabels; DO NOT EDIT.
#
# ATLASSIAN Per-Resource Labeling
#
# Catch the following:
# 1. List items (* or -) with atlassian_XXX resource prefix (with or without backticks)
# 2. \"data atlassian_XXX\" or \"resource atlassian_XXX\"";

/// Labels ordered for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct TemplateData
{
    /// Labels sorted by resource name; ties keep insertion order.
    pub labels: Vec<Label,>,
}

impl TemplateData
{
    /// Stable-sorts `labels` by resource name.
    ///
    /// Duplicate resource names are kept.
    pub fn from_labels(mut labels: Vec<Label,>,) -> Self
    {
        labels.sort_by(|left, right| left.resource_name.cmp(&right.resource_name,),);
        Self {
            labels,
        }
    }
}

/// Checks that every pattern compiles and fits in a single-quoted YAML scalar.
///
/// # Errors
///
/// Returns [`Error::Template`] naming the first offending resource.
pub fn validate_labels(labels: &[Label],) -> Result<(), Error,>
{
    for label in labels {
        if label.regexp.contains('\'',) {
            return Err(Error::template(format!(
                "pattern for {} contains a single quote",
                label.resource_name
            ),),);
        }

        Regex::new(&label.regexp,).map_err(|source| {
            Error::template(format!("pattern for {} is invalid: {source}", label.resource_name),)
        },)?;
    }

    Ok((),)
}

/// Renders the header and one entry per label.
///
/// # Errors
///
/// Returns [`Error::Template`] when a label fails [`validate_labels`].
///
/// # Examples
///
/// ```
/// use issuelabels::{RawLabel, TemplateData, render};
///
/// let data = TemplateData::from_labels(vec![RawLabel::new("jira", "Projects",).synthesize()],);
/// let document = render(&data,).expect("valid labels",);
/// assert!(document.ends_with("\njira/projects:\n  - '((\\*|-)\\s*`?|(data|resource)\\s+\"?)atlassian_jira_project\\b'\n"));
/// ```
pub fn render(data: &TemplateData,) -> Result<String, Error,>
{
    validate_labels(&data.labels,)?;

    let mut document = String::from(HEADER,);
    for label in &data.labels {
        write!(document, "\n{}:\n  - '{}'", label.resource_name, label.regexp)
            .map_err(|source| Error::template(source.to_string(),),)?;
    }
    document.push('\n',);

    Ok(document,)
}

/// Appends `document` to `path`, creating the file when missing.
///
/// # Errors
///
/// Returns [`Error::Output`] when the file cannot be opened or written. A
/// failed write may leave a partial document behind.
pub fn append_to(path: &Path, document: &str,) -> Result<(), Error,>
{
    info!("Generating {}", path.display());

    let mut options = OpenOptions::new();
    options.append(true,).create(true,);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644,);
    }

    let mut file = options.open(path,).map_err(|source| error::output_error(path, source,),)?;
    file.write_all(document.as_bytes(),).map_err(|source| error::output_error(path, source,),)?;
    file.flush().map_err(|source| error::output_error(path, source,),)?;

    info!("Appended {} bytes to {}", document.len(), path.display());
    Ok((),)
}
