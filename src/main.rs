use std::path::PathBuf;

use anyhow::{Context, Result};
use spectral_plot::data::synthetic::demo_frame;
use spectral_plot::state::AppState;
use spectral_plot::{run_viewer, ViewerConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => ViewerConfig::load(&path)?,
        None => ViewerConfig::default(),
    };
    log::debug!("viewer config: {config:?}");

    let (frame, derivative) = demo_frame(config.seed).context("building demo spectrum")?;
    let mut state = AppState::from_config(&config);
    state.set_dataset(frame, derivative);

    run_viewer(state, &config).map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
