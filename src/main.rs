//! Command-line interface for the issuelabels binary.
//!
//! Without arguments the binary fetches the built-in descriptors and appends
//! the generated rules to `.github/labeler-issue-labels.yml`.

use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

use clap::{ArgAction, Parser};
use issuelabels::{Error, GeneratorConfig, collect, generate, load_config, render};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line interface for generating issue labeler rules.
#[derive(Debug, Parser,)]
#[command(name = "issuelabels", version, about = "Generate issue labeler rules")]
struct Cli
{
    /// Optional YAML file overriding the built-in sources and labels.
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf,>,

    /// Artifact to append the rules to, overriding the configuration.
    #[arg(long = "output", value_name = "PATH")]
    output: Option<PathBuf,>,

    /// Print the rendered rules instead of appending them to the artifact.
    #[arg(long = "stdout", action = ArgAction::SetTrue)]
    stdout: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main(flavor = "current_thread")]
async fn main()
{
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info",),),
        )
        .with_writer(io::stderr,)
        .with_target(false,)
        .init();

    if let Err(error,) = run(Cli::parse(),).await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates configuration, fetch, render, and output errors.
async fn run(cli: Cli,) -> Result<(), Error,>
{
    let config = resolve_config(&cli,)?;

    if cli.stdout {
        let data = collect(&config,).await?;
        let document = render(&data,)?;
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        return write_document(&mut handle, &document,);
    }

    let data = generate(&config,).await?;
    info!("Wrote {} labels to {}", data.labels.len(), config.output.display());
    Ok((),)
}

fn resolve_config(cli: &Cli,) -> Result<GeneratorConfig, Error,>
{
    let mut config = match cli.config.as_deref() {
        Some(path,) => load_config(path,)?,
        None => GeneratorConfig::default(),
    };

    if let Some(output,) = cli.output.clone() {
        config.output = output;
    }

    Ok(config,)
}

fn write_document<W: Write,>(writer: &mut W, document: &str,) -> Result<(), Error,>
{
    writer
        .write_all(document.as_bytes(),)
        .map_err(|source| issuelabels::output_error(std::path::Path::new("<stdout>",), source,),)
}
