use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging based on verbosity level
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_directives = if verbose {
        "vitality_source=debug,vitality=debug,info"
    } else {
        "vitality_source=info,vitality=info,warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::debug!("Verbose logging enabled");
    }

    Ok(())
}

/// Log a finished calculator run
pub fn log_calculation(calculator: &str, result: f64) {
    tracing::info!(calculator = calculator, result = result, "Calculation completed");
}

/// Log rejected user input
pub fn log_invalid_input(calculator: &str, reason: &str) {
    tracing::warn!(calculator = calculator, reason = reason, "Input rejected");
}

/// Log system information for debugging
pub fn log_system_info() {
    tracing::debug!(
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        version = env!("CARGO_PKG_VERSION"),
        "System information"
    );
}
