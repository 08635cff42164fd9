use core::fmt;
use std::sync::Once;
use tracing_subscriber::{
    field::MakeExt, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
    EnvFilter,
};

/// The output format of the log
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, one line per event
    #[default]
    #[clap(name = "compact")]
    Compact,
    /// One JSON object per event
    #[clap(name = "json")]
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

static INIT: Once = Once::new();

/// Initialize logging for the process.
///
/// Events from the `log` crate are forwarded too. Only the first call has an effect.
pub fn init_tracing(name: &str, format: LogFormat) {
    INIT.call_once(|| init(format));
    log::debug!("{name}: logging initialized ({format})");
}

fn init(format: LogFormat) {
    const RUST_LOG: &str = "info";

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        eprintln!("RUST_LOG is unset, using default: '{RUST_LOG}'");
        EnvFilter::new(RUST_LOG)
    });

    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .map_fmt_fields(|f| f.debug_alt())
                    .with_ansi(true)
                    .with_level(true)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init(),
    };

    if let Err(err) = result {
        eprintln!("Error initializing logging: {:?}", err);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn format_names_round_trip() {
        for format in LogFormat::value_variants() {
            assert_eq!(
                LogFormat::from_str(&format.to_string(), false).as_ref(),
                Ok(format)
            );
        }
    }
}
