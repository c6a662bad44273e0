//! Logger setup shared by the binaries and integration tests.
use std::io::Write;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Log to stderr, filtered by `RUST_LOG` or [DEFAULT_FILTER].
///
/// If called multiple times in the same process, only applies once.
pub fn log_to_stderr() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
        let res = env_logger::Builder::from_env(env)
            .target(env_logger::Target::Stderr)
            .format(|buf, record| {
                let now = time::OffsetDateTime::now_utc();

                writeln!(
                    buf,
                    "{} {} time={} target={}",
                    record.level(),
                    record.args(),
                    now,
                    record.target()
                )
            })
            .try_init();

        // A test harness may already have installed its own logger.
        if res.is_err() {
            log::debug!("Logger already installed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_calls_are_harmless() {
        log_to_stderr();
        log_to_stderr();
        log::info!("still logging");
    }
}
