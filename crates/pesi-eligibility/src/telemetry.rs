use crate::config::TelemetryConfig;
use tracing::Subscriber;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter { value: String, source: ParseError },
    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global subscriber on stdout. `RUST_LOG` wins over the configured level when present.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    install(subscriber(config, std::io::stdout)?)
}

/// Same as [`init`] but logs to stderr, leaving stdout to command output.
pub fn init_stderr(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    install(subscriber(config, std::io::stderr)?)
}

/// Build the formatted subscriber without installing it.
pub fn subscriber<W>(
    config: &TelemetryConfig,
    writer: W,
) -> Result<impl Subscriber + Send + Sync + 'static, TelemetryError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter_for(&config.log_level)?,
    };

    Ok(tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(writer)
        .finish())
}

fn install(subscriber: impl Subscriber + Send + Sync + 'static) -> Result<(), TelemetryError> {
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| TelemetryError::Subscriber(Box::new(err)))
}

fn filter_for(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(log_level).map_err(|source| TelemetryError::EnvFilter {
        value: log_level.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_levels_and_directives() {
        assert!(filter_for("info").is_ok());
        assert!(filter_for("pesi_eligibility=debug,warn").is_ok());
    }

    #[test]
    fn subscriber_writes_events_to_the_given_writer() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl Write for Captured {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().expect("buffer lock").extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let config = TelemetryConfig {
            log_level: "info".to_string(),
        };
        let subscriber = subscriber(&config, move || writer.clone()).expect("subscriber builds");

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(batch = "north-west", "intake opened");
        });

        let output = String::from_utf8(captured.0.lock().expect("buffer lock").clone())
            .expect("utf8 log output");
        assert!(output.contains("intake opened"));
        assert!(output.contains("north-west"));
    }

    #[test]
    fn rejects_unknown_levels() {
        let err = filter_for("pesi_eligibility=loud").expect_err("invalid level");
        assert!(err.to_string().contains("pesi_eligibility=loud"));
    }
}
