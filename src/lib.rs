//! Generator for issue labeler rules derived from Atlassian API descriptors.
//!
//! The library fetches the Jira and Confluence OpenAPI descriptors, turns
//! every resource group they declare into a [`Label`] pairing a canonical
//! resource name with a pattern matching the Terraform resource identifier,
//! and renders the sorted labels into the YAML document consumed by the
//! issue labeler workflow.

mod config;
mod custom;
mod error;
mod extract;
mod fetch;
mod label;
mod pipeline;
mod render;

pub use config::{
    DEFAULT_EXCLUDE, DEFAULT_OUTPUT, DEFAULT_PRODUCTS, DEFAULT_SOURCES, DEFAULT_TIMEOUT_SECS,
    GeneratorConfig, load_config, parse_config,
};
pub use custom::{custom_labels, default_custom_labels};
pub use error::{Error, config_io_error, output_error};
pub use extract::TagExtractor;
pub use fetch::{Descriptor, DescriptorFetcher};
pub use label::{
    Label, RawLabel, SuffixClass, classify, reference_pattern, resource_name, singular_token,
    synthesize,
};
pub use pipeline::{aggregate, collect, generate, synthesize_all};
pub use render::{HEADER, TemplateData, append_to, render, validate_labels};
