use std::path::{Path, PathBuf};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use logotrim::{Error, ProcessReport, ProcessingParams, process_logo};

use super::args::CliArgs;
use super::errors::AppError;

/// What happened to a single run. Every variant ends the process normally.
#[derive(Debug)]
pub enum RunOutcome {
    Processed(ProcessReport),
    InputMissing(PathBuf),
    Failed(String),
}

impl RunOutcome {
    pub fn message(&self) -> String {
        match self {
            RunOutcome::Processed(report) => {
                let dest = report
                    .output
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                format!("Logo processed and saved to {}", dest)
            }
            RunOutcome::InputMissing(path) => format!("Input not found at {}", path.display()),
            RunOutcome::Failed(msg) => format!("Error: {}", msg),
        }
    }
}

/// Run the pass and fold every library error into an outcome.
pub fn execute(input: &Path, output: &Path, params: &ProcessingParams) -> RunOutcome {
    match process_logo(input, output, params) {
        Ok(report) => {
            match report.bounding_box {
                Some(b) => info!("Trimmed to {}", b),
                None => info!("Image fully transparent, kept original size"),
            }
            RunOutcome::Processed(report)
        }
        Err(Error::InputNotFound { path }) => RunOutcome::InputMissing(path),
        Err(e) => {
            warn!("Processing {:?} failed: {}", input, e);
            RunOutcome::Failed(e.to_string())
        }
    }
}

fn resolve_params(args: &CliArgs) -> Result<ProcessingParams, AppError> {
    let mut params = match &args.params {
        Some(path) => ProcessingParams::from_json_file(path)?,
        None => ProcessingParams::default(),
    };
    if let Some(format) = args.format {
        params.format = format;
    }
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    let params = resolve_params(&args)?;
    let input = args.input.ok_or(AppError::MissingArgument {
        arg: "--input".to_string(),
    })?;
    let output = args.output.ok_or(AppError::MissingArgument {
        arg: "--output".to_string(),
    })?;

    info!(
        "Processing {:?} -> {:?} (threshold > {}, {})",
        input, output, params.threshold, params.format
    );
    let outcome = execute(&input, &output, &params);
    println!("{}", outcome.message());

    Ok(())
}
