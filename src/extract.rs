// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Extraction of resource-group names from descriptor documents.
///
/// Tags come from the top-level `tags` array. Each entry must carry a string
/// `name`; other fields are ignored.
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::{error::Error, fetch::Descriptor, label::RawLabel};

#[derive(Debug, Deserialize,)]
struct Tag
{
    name: String,
}

/// Turns descriptor documents into product-qualified raw names.
#[derive(Debug, Clone,)]
pub struct TagExtractor
{
    products: Regex,
    exclude:  Regex,
}

impl TagExtractor
{
    /// Builds an extractor recognizing `products` in URLs and skipping tags
    /// that match `exclude`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when `products` is empty or `exclude`
    /// does not compile.
    pub fn new<S: AsRef<str,>,>(products: &[S], exclude: &str,) -> Result<Self, Error,>
    {
        if products.is_empty() {
            return Err(Error::validation("at least one product token is required",),);
        }

        let alternation = products
            .iter()
            .map(|product| regex::escape(product.as_ref(),),)
            .collect::<Vec<_,>>()
            .join("|",);

        let products = Regex::new(&alternation,)
            .map_err(|source| Error::validation(format!("invalid product tokens: {source}"),),)?;
        let exclude = Regex::new(exclude,).map_err(|source| {
            Error::validation(format!("exclude pattern `{exclude}` is invalid: {source}"),)
        },)?;

        Ok(Self {
            products,
            exclude,
        },)
    }

    /// Returns the leftmost known product token occurring in `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProduct`] when no token occurs.
    pub fn product_for(&self, url: &str,) -> Result<String, Error,>
    {
        self.products.find(url,).map(|found| found.as_str().to_owned(),).ok_or_else(|| {
            Error::UnknownProduct {
                url: url.to_owned(),
            }
        },)
    }

    /// Returns `true` when `name` is an application grouping to skip.
    pub fn is_excluded(&self, name: &str,) -> bool
    {
        self.exclude.is_match(name,)
    }

    /// Extracts the non-excluded tags of `document`, in document order.
    ///
    /// # Errors
    ///
    /// * [`Error::UnknownProduct`] when `url` names no known product.
    /// * [`Error::Shape`] when `tags` is missing, is not an array, or holds an
    ///   entry without a string `name`.
    pub fn extract(&self, url: &str, document: &Descriptor,) -> Result<Vec<RawLabel,>, Error,>
    {
        let product = self.product_for(url,)?;

        let tags = document.get("tags",).ok_or_else(|| Error::shape(url, "missing `tags`",),)?;
        let tags = Vec::<Tag,>::deserialize(tags,)
            .map_err(|source| Error::shape(url, format!("invalid `tags`: {source}"),),)?;

        let mut names = Vec::with_capacity(tags.len(),);
        for tag in tags {
            if self.is_excluded(&tag.name,) {
                debug!("skipping excluded tag {:?}", tag.name);
                continue;
            }
            names.push(RawLabel {
                product: product.clone(), name: tag.name,
            },);
        }

        Ok(names,)
    }
}

#[cfg(test)]
mod tests
{
    use serde_json::json;

    use super::TagExtractor;
    use crate::{
        Error, RawLabel,
        config::{DEFAULT_EXCLUDE, DEFAULT_PRODUCTS},
        fetch::Descriptor,
    };

    const JIRA_URL: &str = "https://developer.atlassian.com/cloud/jira/platform/swagger-v3.v3.json";

    fn extractor() -> TagExtractor
    {
        TagExtractor::new(DEFAULT_PRODUCTS.as_slice(), DEFAULT_EXCLUDE,).expect("valid extractor",)
    }

    fn descriptor(value: serde_json::Value,) -> Descriptor
    {
        match value {
            serde_json::Value::Object(map,) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn product_comes_from_url()
    {
        let extractor = extractor();
        assert_eq!(extractor.product_for(JIRA_URL).expect("jira url"), "jira");
        assert_eq!(
            extractor
                .product_for("https://developer.atlassian.com/cloud/confluence/swagger.v3.json")
                .expect("confluence url"),
            "confluence"
        );
    }

    #[test]
    fn leftmost_product_token_wins()
    {
        let extractor = extractor();
        let product = extractor
            .product_for("https://example.test/confluence/mirror-of-jira.json",)
            .expect("known product",);
        assert_eq!(product, "confluence");
    }

    #[test]
    fn unknown_product_is_an_error()
    {
        let error = extractor().product_for("https://example.test/bitbucket.json",).unwrap_err();
        assert!(matches!(error, Error::UnknownProduct { .. }));
    }

    #[test]
    fn tags_are_extracted_in_document_order()
    {
        let document = descriptor(json!({
            "openapi": "3.0.1",
            "tags": [
                {"name": "Projects", "description": "Manage projects"},
                {"name": "Issue Type Schemes"},
                {"name": "Avatars"}
            ]
        }),);

        let names = extractor().extract(JIRA_URL, &document,).expect("valid document",);
        assert_eq!(
            names,
            vec![
                RawLabel::new("jira", "Projects"),
                RawLabel::new("jira", "Issue Type Schemes"),
                RawLabel::new("jira", "Avatars"),
            ]
        );
    }

    #[test]
    fn app_groupings_are_skipped()
    {
        let document = descriptor(json!({
            "tags": [
                {"name": "Dynamic modules"},
                {"name": "Issue custom field values (apps)"},
                {"name": "App properties"}
            ]
        }),);

        let names = extractor().extract(JIRA_URL, &document,).expect("valid document",);
        assert_eq!(names.len(), 2);
        assert!(names.iter().all(|raw| !raw.name.contains("(apps)")));
    }

    #[test]
    fn missing_tags_is_a_shape_error()
    {
        let document = descriptor(json!({"paths": {}}),);
        let error = extractor().extract(JIRA_URL, &document,).unwrap_err();
        match error {
            Error::Shape {
                url,
                message,
            } => {
                assert_eq!(url, JIRA_URL);
                assert_eq!(message, "missing `tags`");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn non_array_tags_is_a_shape_error()
    {
        let document = descriptor(json!({"tags": {"name": "Projects"}}),);
        let error = extractor().extract(JIRA_URL, &document,).unwrap_err();
        assert!(matches!(error, Error::Shape { .. }));
    }

    #[test]
    fn nameless_tag_is_a_shape_error()
    {
        let document = descriptor(json!({"tags": [{"name": "Projects"}, {"description": "x"}]}),);
        let error = extractor().extract(JIRA_URL, &document,).unwrap_err();
        assert!(error.to_string().contains("invalid `tags`"));
    }

    #[test]
    fn non_string_name_is_a_shape_error()
    {
        let document = descriptor(json!({"tags": [{"name": 42}]}),);
        let error = extractor().extract(JIRA_URL, &document,).unwrap_err();
        assert!(matches!(error, Error::Shape { .. }));
    }

    #[test]
    fn empty_product_list_is_rejected()
    {
        let error = TagExtractor::new::<&str,>(&[], DEFAULT_EXCLUDE,).unwrap_err();
        assert!(matches!(error, Error::Validation { .. }));
    }
}
