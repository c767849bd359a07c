use anyhow::Result;

use gcode_rewind::config::Config;
use gcode_rewind::{driver, profile};

fn main() -> Result<()> {
    // Parse configuration from command line and environment
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.log_level),
    )
    .init();

    let profile = profile::load_profile(&config)?;
    log::info!(
        "machine Z range {} .. {} (informational only)",
        profile.machine_min_z,
        profile.machine_max_z
    );

    driver::run(&config, &profile)
}
