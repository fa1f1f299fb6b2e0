use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use starstack_core::consts::DEFAULT_CENTROID_HALF_SIZE;
use starstack_core::pipeline::config::PipelineConfig;
use starstack_core::pipeline::run_pipeline;
use starstack_core::session::TomlSessionStore;

use super::composite::StackOptions;
use crate::picker::TerminalPicker;
use crate::progress::CliReporter;
use crate::summary::{print_composite_report, print_config_summary};

#[derive(Args)]
pub struct RunArgs {
    /// Directory containing the input frames
    pub input: PathBuf,

    /// Pipeline config file (TOML); overrides the other options
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Session file to write (a temp file is created when omitted)
    #[arg(long)]
    pub session: Option<PathBuf>,

    /// Half-size of the centroid window in pixels
    #[arg(long, default_value_t = DEFAULT_CENTROID_HALF_SIZE)]
    pub half_size: usize,

    #[command(flatten)]
    pub stack: StackOptions,

    /// Output file path
    #[arg(short, long, default_value = "composite.tif")]
    pub output: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        build_config_from_args(args)
    };

    let session_path = match (args.session.as_ref(), config.session.as_ref()) {
        (Some(path), _) | (None, Some(path)) => path.clone(),
        (None, None) => super::temp_session_path()?,
    };
    config.session = Some(session_path.clone());

    print_config_summary(&config);

    let mut picker = TerminalPicker::new();
    let mut store = TomlSessionStore::new(&session_path);
    let report = run_pipeline(&config, &mut picker, &mut store, &CliReporter::new())?;

    print_composite_report(&report);
    println!("\nOutput saved to {}", config.output.display());

    Ok(())
}

fn build_config_from_args(args: &RunArgs) -> PipelineConfig {
    let mut config = PipelineConfig::new(&args.input, &args.output);
    config.centroid.half_size = args.half_size;
    args.stack.apply(&mut config);
    config
}
