// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Hand-maintained labels for resources no descriptor advertises.
///
/// Entries flow through the same synthesizer as descriptor tags.
use crate::label::{Label, RawLabel};

/// Jira sub-resources that only exist as Terraform resources.
const JIRA_CUSTOM_NAMES: [&str; 2] =
    ["issue-field-configuration-items", "issue-field-configuration-schemes",];

/// Returns the built-in custom entries.
pub fn default_custom_labels() -> Vec<RawLabel,>
{
    JIRA_CUSTOM_NAMES.iter().map(|name| RawLabel::new("jira", name,),).collect()
}

/// Synthesizes labels for `entries`, preserving their order.
pub fn custom_labels(entries: &[RawLabel],) -> Vec<Label,>
{
    entries.iter().map(RawLabel::synthesize,).collect()
}
