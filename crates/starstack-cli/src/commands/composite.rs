use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use starstack_core::align::BorderPolicy;
use starstack_core::pipeline::config::PipelineConfig;
use starstack_core::pipeline::run_composite_phase;
use starstack_core::session::TomlSessionStore;
use starstack_core::stack::CombineMethod;

use crate::progress::CliReporter;
use crate::summary::print_composite_report;

#[derive(Clone, Copy, ValueEnum)]
pub enum CombineMethodArg {
    Mean,
    Max,
    Min,
}

impl From<CombineMethodArg> for CombineMethod {
    fn from(arg: CombineMethodArg) -> Self {
        match arg {
            CombineMethodArg::Mean => CombineMethod::Mean,
            CombineMethodArg::Max => CombineMethod::Max,
            CombineMethodArg::Min => CombineMethod::Min,
        }
    }
}

/// Stacking options shared by `composite` and `run`.
#[derive(Args)]
pub struct StackOptions {
    /// How aligned frames are combined
    #[arg(long, value_enum, default_value = "mean")]
    pub method: CombineMethodArg,

    /// Value for pixels that map outside the source frame
    #[arg(long, default_value = "0.0")]
    pub border_value: f32,

    /// Repeat the nearest edge pixel instead of a constant border
    #[arg(long, conflicts_with = "border_value")]
    pub replicate_border: bool,
}

impl StackOptions {
    pub fn apply(&self, config: &mut PipelineConfig) {
        config.stacking.method = self.method.into();
        config.warp.border = if self.replicate_border {
            BorderPolicy::Replicate
        } else {
            BorderPolicy::Constant(self.border_value)
        };
    }
}

#[derive(Args)]
pub struct CompositeArgs {
    /// Session file written by `pick`
    #[arg(long)]
    pub session: PathBuf,

    #[command(flatten)]
    pub stack: StackOptions,

    /// Output file path
    #[arg(short, long, default_value = "composite.tif")]
    pub output: PathBuf,
}

pub fn run(args: &CompositeArgs) -> Result<()> {
    let mut config = PipelineConfig::new(PathBuf::new(), &args.output);
    config.session = Some(args.session.clone());
    args.stack.apply(&mut config);

    let mut store = TomlSessionStore::new(&args.session);
    let report = run_composite_phase(&config, &mut store, &CliReporter::new())?;

    print_composite_report(&report);
    println!("\nOutput saved to {}", config.output.display());

    Ok(())
}
