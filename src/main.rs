use paretoplot::logging::init_tracing;
use paretoplot::{run_paretoplot, DemoConfig};
use tracing::{info, warn};

fn load_config() -> DemoConfig {
    let loaded = match std::env::var_os("PARETOPLOT_CONFIG") {
        Some(path) => DemoConfig::load_from_path(&path).map(Some),
        None => DemoConfig::load_from_default_path(),
    };
    match loaded {
        Ok(Some(cfg)) => {
            info!("loaded config file");
            cfg
        }
        Ok(None) => DemoConfig::default(),
        Err(e) => {
            warn!("ignoring config file: {e}");
            DemoConfig::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    let json = std::env::var("PARETOPLOT_LOG_JSON").is_ok_and(|v| v == "1");
    init_tracing(json);
    run_paretoplot(load_config(), None)
}
