// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Label synthesis from raw resource-group names.
//!
//! A raw name such as `"Issue Type Schemes"` yields two derived values: a
//! canonical resource name used as the labeler map key
//! (`jira/issuetypeschemes`) and a regular expression matching the singular
//! Terraform resource identifier (`atlassian_jira_issue_type_scheme`) in
//! issue text.
//!
//! Singularization is a fixed, ordered suffix heuristic tuned to the Atlassian
//! descriptor vocabulary. It is not a general English pluralization routine
//! and must keep producing the same tokens for the same inputs.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// Pattern fragment preceding the resource identifier: a list marker with an
/// optional backtick, or `data`/`resource` with an optional opening quote.
const REFERENCE_PREFIX: &str = r#"((\*|-)\s*`?|(data|resource)\s+"?)"#;
/// Provider prefix shared by every Terraform resource identifier.
const PROVIDER_PREFIX: &str = "atlassian";

/// Plural form recognized by the suffix classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub enum SuffixClass
{
    /// `propert[ies]`
    Ies,
    /// `workflow[s]`, `module[s]`, `issue[s]`
    S,
    /// `statu[ses]`
    Ses,
    /// `watch[es]`, `bush[es]`
    Es,
    /// Already singular or irregular.
    Singular,
}

struct SuffixRule
{
    class:   SuffixClass,
    pattern: Regex,
    strip:   &'static str,
    append:  &'static str,
}

impl SuffixRule
{
    fn new(class: SuffixClass, pattern: &str, strip: &'static str, append: &'static str,) -> Self
    {
        Self {
            class,
            pattern: Regex::new(pattern,).expect("suffix patterns are valid",),
            strip,
            append,
        }
    }
}

/// Suffix rules in evaluation order. The first matching rule wins even when a
/// later rule would describe the name more precisely.
static SUFFIX_RULES: LazyLock<[SuffixRule; 4],> = LazyLock::new(|| {
    [
        SuffixRule::new(SuffixClass::Ies, r".*ies$", "ies", "y",),
        SuffixRule::new(
            SuffixClass::S,
            r".*[^aeiou]s$|.*[aeiouy][^s]es$|.*[aeiou]{2}s$",
            "s",
            "",
        ),
        SuffixRule::new(SuffixClass::Ses, r".*ses$", "es", "",),
        // Unanchored: matches a consonant pair followed by `es` anywhere.
        SuffixRule::new(SuffixClass::Es, r".*[^aeiou]{2}es", "es", "",),
    ]
},);

/// Labeler entry for a single resource.
///
/// Both fields are derived purely from the `(product, name)` pair; equal
/// inputs always yield equal labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash,)]
pub struct Label
{
    /// Canonical key of the form `<product>/<name>` without spaces or hyphens.
    pub resource_name: String,
    /// Regular expression matching references to the singular resource.
    pub regexp:        String,
}

/// Product-qualified raw resource-group name awaiting synthesis.
///
/// # Examples
///
/// ```
/// use issuelabels::RawLabel;
///
/// let label = RawLabel::new("jira", "Workflows",).synthesize();
/// assert_eq!(label.resource_name, "jira/workflows");
/// assert!(label.regexp.ends_with("atlassian_jira_workflow\\b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize,)]
pub struct RawLabel
{
    /// Product identifier such as `jira` or `confluence`.
    pub product: String,
    /// Resource-group name as published, e.g. `"Issue Type Schemes"`.
    pub name:    String,
}

impl RawLabel
{
    /// Creates a raw label from borrowed parts.
    pub fn new(product: &str, name: &str,) -> Self
    {
        Self {
            product: product.to_owned(), name: name.to_owned(),
        }
    }

    /// Converts the raw name into a [`Label`].
    pub fn synthesize(&self,) -> Label
    {
        synthesize(&self.product, &self.name,)
    }
}

/// Builds the label for `name` published by `product`.
///
/// The function is total: empty or unusual names fall through to the
/// [`SuffixClass::Singular`] rule and produce a degenerate token.
pub fn synthesize(product: &str, name: &str,) -> Label
{
    let token = singular_token(name,);

    Label {
        resource_name: resource_name(product, name,),
        regexp:        reference_pattern(product, &token,),
    }
}

/// Returns the canonical `<product>/<name>` key: lowercased, with spaces and
/// hyphens removed. No singularization happens here.
///
/// # Examples
///
/// ```
/// use issuelabels::resource_name;
///
/// assert_eq!(resource_name("jira", "Issue Type Schemes"), "jira/issuetypeschemes");
/// ```
pub fn resource_name(product: &str, name: &str,) -> String
{
    let stripped = name.replace([' ', '-',], "",);
    format!("{product}/{}", stripped.to_lowercase())
}

/// Classifies `name` against the ordered suffix rules.
///
/// Matching runs on the name exactly as published, so casing matters.
pub fn classify(name: &str,) -> SuffixClass
{
    SUFFIX_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(name,),)
        .map_or(SuffixClass::Singular, |rule| rule.class,)
}

/// Derives the underscore-separated singular token used inside the pattern.
///
/// # Examples
///
/// ```
/// use issuelabels::singular_token;
///
/// assert_eq!(singular_token("Properties"), "property");
/// assert_eq!(singular_token("Statuses"), "status");
/// assert_eq!(singular_token("Issue Type Schemes"), "issue_type_scheme");
/// ```
pub fn singular_token(name: &str,) -> String
{
    let normalized = normalize(name,);

    let Some(rule,) = SUFFIX_RULES.iter().find(|rule| rule.pattern.is_match(name,),) else {
        return normalized;
    };

    match normalized.strip_suffix(rule.strip,) {
        Some(stem,) => format!("{stem}{}", rule.append),
        None => format!("{normalized}{}", rule.append),
    }
}

/// Builds the labeler pattern for `token` under `product`. The token is
/// inserted verbatim.
pub fn reference_pattern(product: &str, token: &str,) -> String
{
    format!(r"{REFERENCE_PREFIX}{PROVIDER_PREFIX}_{product}_{token}\b")
}

/// Separators become single underscores and the result is lowercased.
fn normalize(name: &str,) -> String
{
    name.replace(" - ", " ",)
        .replace('-', " ",)
        .replace(' ', "_",)
        .replace("__", "_",)
        .to_lowercase()
}
