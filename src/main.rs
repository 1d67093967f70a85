use std::{env, path::PathBuf};

use anyhow::Context;
use log::info;

use stat_intuition::{config::AppConfig, run};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut config = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            info!("loading config from {}", path.display());
            AppConfig::from_path(&path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => AppConfig::default(),
    };

    if let Ok(seed) = env::var("SEED") {
        let seed = seed
            .parse()
            .with_context(|| format!("SEED must be an unsigned integer, got {seed:?}"))?;
        config.seed = Some(seed);
    }

    let report = run(&config)?;
    println!("{}", report.render(config.format)?);

    Ok(())
}
