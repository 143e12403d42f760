use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for the CLI.
///
/// Logs go to stderr so they never mix with command output. `verbose`
/// forces DEBUG; otherwise the level comes from `RUST_LOG`, defaulting to
/// "warn".
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .compact();

    let filter_layer = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, warn};

    #[test]
    fn test_logging_init() {
        // Only the first init in a process succeeds.
        let _ = init(true);
        assert!(init(false).is_err());

        debug!("This is a debug message");
        warn!("This is a warning message");
    }
}
