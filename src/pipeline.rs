// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// End-to-end label generation.
///
/// Sources are fetched one at a time in configured order. The first failure
/// aborts the run; nothing is aggregated from the sources fetched before it.
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::{
    config::GeneratorConfig,
    custom::custom_labels,
    error::Error,
    extract::TagExtractor,
    fetch::DescriptorFetcher,
    label::{Label, RawLabel},
    render::{self, TemplateData},
};

/// Concatenates descriptor labels and custom labels, then sorts them.
pub fn aggregate(descriptor_labels: Vec<Label,>, custom: Vec<Label,>,) -> TemplateData
{
    let mut labels = descriptor_labels;
    labels.extend(custom,);
    TemplateData::from_labels(labels,)
}

/// Synthesizes labels for raw names in order.
pub fn synthesize_all(raw: &[RawLabel],) -> Vec<Label,>
{
    raw.iter()
        .map(|entry| {
            let label = entry.synthesize();
            debug!("{} -> {}", entry.name, label.resource_name);
            label
        },)
        .collect()
}

/// Fetches every configured source and builds the sorted label set.
///
/// # Errors
///
/// Propagates the first fetch, decode, shape, or configuration error.
pub async fn collect(config: &GeneratorConfig,) -> Result<TemplateData, Error,>
{
    let fetcher = DescriptorFetcher::new(config.timeout(),)?;
    let extractor = TagExtractor::new(config.products.as_slice(), &config.exclude,)?;

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} [{elapsed_precise}] {msg}",)
            .unwrap_or_else(|_| ProgressStyle::default_spinner(),),
    );

    let mut descriptor_labels = Vec::new();
    for url in &config.sources {
        progress.set_message(format!("Fetching {url}..."),);
        let document = match fetcher.fetch(url,).await {
            Ok(document,) => document,
            Err(error,) => {
                progress.abandon_with_message(format!("Failed to fetch {url}"),);
                return Err(error,);
            }
        };

        let raw = match extractor.extract(url, &document,) {
            Ok(raw,) => raw,
            Err(error,) => {
                progress.abandon_with_message(format!("Failed to read tags from {url}"),);
                return Err(error,);
            }
        };
        info!("{} tags from {}", raw.len(), url);
        descriptor_labels.extend(synthesize_all(&raw,),);
    }

    let custom = custom_labels(&config.custom_labels,);
    info!("{} custom labels", custom.len());

    let data = aggregate(descriptor_labels, custom,);
    progress.finish_with_message(format!("Synthesized {} labels", data.labels.len()),);

    Ok(data,)
}

/// Runs the full pipeline and appends the rendered rules to the configured
/// output artifact.
///
/// # Errors
///
/// Propagates every pipeline error. Nothing is written unless all sources
/// were fetched and all labels rendered.
pub async fn generate(config: &GeneratorConfig,) -> Result<TemplateData, Error,>
{
    let data = collect(config,).await?;
    let document = render::render(&data,)?;
    render::append_to(&config.output, &document,)?;
    Ok(data,)
}
