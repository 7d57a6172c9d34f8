#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Route `tracing` events to `<log_dir>/braille-trace.jsonl`.
///
/// Only active with the `trace` feature; otherwise a no-op.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "braille-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard); // keep the writer alive for the process lifetime

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(
                        "braille_engine=debug,braille_core=debug,braille_session=debug",
                    )
                }),
            )
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}

#[cfg(test)]
mod tests {
    use super::*;

    // One test only: the subscriber is process-wide and installed once.
    #[test]
    fn init_twice_then_events_reach_log() {
        let dir = tempfile::tempdir().unwrap();
        init_tracing(dir.path());
        init_tracing(dir.path());

        #[cfg(feature = "trace")]
        {
            use std::collections::BTreeMap;
            use std::time::{Duration, Instant};

            use braille_core::CharacterMap;

            crate::BrailleEngine::from_toml(None, None).unwrap();
            let dup: BTreeMap<char, String> =
                [('x', "⠭".to_string()), ('*', "⠭".to_string())].into();
            CharacterMap::from_mappings(dup).unwrap();

            let path = dir.path().join("braille-trace.jsonl");
            let deadline = Instant::now() + Duration::from_secs(5);
            let mut log = String::new();
            while Instant::now() < deadline {
                log = std::fs::read_to_string(&path).unwrap_or_default();
                if log.contains("duplicate cell sequence") && log.contains("building engine") {
                    break;
                }
                std::thread::sleep(Duration::from_millis(20));
            }
            assert!(!log.is_empty(), "trace log is empty");
            assert!(log.contains("building engine"), "log: {log}");
            assert!(log.contains("duplicate cell sequence"), "log: {log}");
        }
    }
}
