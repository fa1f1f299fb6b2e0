use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use starstack_core::consts::DEFAULT_CENTROID_HALF_SIZE;
use starstack_core::pipeline::config::PipelineConfig;
use starstack_core::pipeline::run_selection_phase;
use starstack_core::session::TomlSessionStore;

use crate::picker::TerminalPicker;
use crate::progress::CliReporter;
use crate::summary::print_selection_summary;

#[derive(Args)]
pub struct PickArgs {
    /// Directory containing the input frames
    pub input: PathBuf,

    /// Session file to write (a temp file is created when omitted)
    #[arg(long)]
    pub session: Option<PathBuf>,

    /// Half-size of the centroid window in pixels
    #[arg(long, default_value_t = DEFAULT_CENTROID_HALF_SIZE)]
    pub half_size: usize,
}

pub fn run(args: &PickArgs) -> Result<()> {
    let session_path = match args.session {
        Some(ref path) => path.clone(),
        None => super::temp_session_path()?,
    };

    let mut config = PipelineConfig::new(&args.input, PathBuf::new());
    config.centroid.half_size = args.half_size;
    config.session = Some(session_path.clone());

    let mut picker = TerminalPicker::new();
    let mut store = TomlSessionStore::new(&session_path);
    let picks = run_selection_phase(&config, &mut picker, &mut store, &CliReporter::new())?;

    print_selection_summary(&picks, &session_path);
    println!(
        "\nResume with: starstack composite --session {} -o composite.tif",
        session_path.display()
    );

    Ok(())
}
