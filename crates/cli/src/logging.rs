//! Tracing setup for the CLI.
//!
//! Without `RUST_LOG`, the configured level applies to this tool's own
//! crates while dependencies stay at `warn`.

use seo_helper_core::config::LoggingConfig;
use std::env;
use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const OWN_TARGETS: [&str; 2] = ["seo_helper_core", "seo_helper"];

/// Install the global subscriber: a compact stderr layer and, when
/// `logging.file` is set, an appending file layer.
///
/// The returned guard flushes the file layer when dropped; hold it until the
/// command finishes.
pub fn init(cfg: &LoggingConfig) -> io::Result<Option<WorkerGuard>> {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    let stderr_level = parse_level(&cfg.level).unwrap_or(LevelFilter::INFO);

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .with_filter(build_filter(stderr_level, rust_log.as_deref()));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(path) = &cfg.file else {
        registry.init();
        return Ok(None);
    };

    let file_level =
        cfg.file_level.as_deref().and_then(parse_level).unwrap_or(stderr_level);
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(build_filter(file_level, rust_log.as_deref()));

    registry.with(file_layer).init();
    Ok(Some(guard))
}

/// `RUST_LOG` wins when set; otherwise `level` for our crates, at most
/// `warn` for everything else.
fn build_filter(level: LevelFilter, rust_log: Option<&str>) -> EnvFilter {
    match rust_log.filter(|s| !s.trim().is_empty()) {
        Some(spec) => EnvFilter::builder().parse_lossy(spec),
        None => EnvFilter::new(default_directives(level)),
    }
}

fn default_directives(level: LevelFilter) -> String {
    let mut directives = level.min(LevelFilter::WARN).to_string();
    for target in OWN_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives.to_lowercase()
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `emit` under `filter` and return what was logged.
    fn logged(filter: EnvFilter, emit: impl FnOnce()) -> String {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(move || writer.clone())
                .with_ansi(false)
                .with_filter(filter),
        );
        tracing::subscriber::with_default(subscriber, emit);
        String::from_utf8(out.0.lock().unwrap().clone()).unwrap()
    }

    fn emit_sample_events() {
        tracing::info!(target: "seo_helper_core::processor", "processing file");
        tracing::warn!(target: "seo_helper_core::document::splitter", "unclosed front matter");
        tracing::info!(target: "ureq::unit", "dependency chatter");
        tracing::warn!(target: "ureq::unit", "dependency warning");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("error"), Some(LevelFilter::ERROR));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::WARN));
        assert_eq!(parse_level(" Info "), Some(LevelFilter::INFO));
        assert_eq!(parse_level("debug"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("trace"), Some(LevelFilter::TRACE));
        assert_eq!(parse_level("off"), Some(LevelFilter::OFF));
        assert_eq!(parse_level("invalid"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn default_directives_scope_level_to_own_crates() {
        assert_eq!(
            default_directives(LevelFilter::DEBUG),
            "warn,seo_helper_core=debug,seo_helper=debug"
        );
        assert_eq!(
            default_directives(LevelFilter::ERROR),
            "error,seo_helper_core=error,seo_helper=error"
        );
    }

    #[test]
    fn info_level_shows_per_file_events_but_not_dependency_info() {
        let out = logged(build_filter(LevelFilter::INFO, None), emit_sample_events);
        assert!(out.contains("processing file"));
        assert!(out.contains("unclosed front matter"));
        assert!(out.contains("dependency warning"));
        assert!(!out.contains("dependency chatter"));
    }

    #[test]
    fn warn_level_hides_per_file_events() {
        let level = parse_level("warn").unwrap();
        let out = logged(build_filter(level, None), emit_sample_events);
        assert!(!out.contains("processing file"));
        assert!(out.contains("unclosed front matter"));
    }

    #[test]
    fn rust_log_overrides_configured_level() {
        let out = logged(
            build_filter(LevelFilter::OFF, Some("seo_helper_core=info")),
            emit_sample_events,
        );
        assert!(out.contains("processing file"));
        assert!(!out.contains("dependency warning"));
    }

    #[test]
    fn blank_rust_log_falls_back_to_configured_level() {
        let out = logged(build_filter(LevelFilter::WARN, Some("  ")), emit_sample_events);
        assert!(!out.contains("processing file"));
        assert!(out.contains("unclosed front matter"));
    }
}
