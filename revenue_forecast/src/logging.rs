//! Root logger for the crate.
//!
//! Terminal output by default, JSON lines with `LOG_FORMAT=json`.
//! Filtered by `RUST_LOG`. Call [`flush`] before `process::exit`.

use once_cell::sync::Lazy;
pub use slog::*;
use std::sync::Mutex;

static ASYNC_GUARD: Mutex<Option<slog_async::AsyncGuard>> = Mutex::new(None);

fn wrap<D: Drain<Err = Never, Ok = ()> + Send + 'static>(drain: D) -> IgnoreResult<slog_async::Async> {
    let (drain, guard) = slog_async::Async::new(slog_envlogger::new(drain)).build_with_guard();
    if let Ok(mut slot) = ASYNC_GUARD.lock() {
        *slot = Some(guard);
    }
    // Records sent after `flush` are dropped rather than panicking.
    drain.ignore_res()
}

pub static DEFAULT: Lazy<Logger> = Lazy::new(|| {
    let mk_term = || {
        slog_term::FullFormat::new(slog_term::TermDecorator::new().stderr().build())
            .build()
            .fuse()
    };

    let mk_json = || slog_json::Json::default(std::io::stderr()).fuse();

    let format = std::env::var("LOG_FORMAT").unwrap_or_default();
    let drain = match format.as_str() {
        "json" => wrap(mk_json()),
        _ => wrap(mk_term()),
    };

    Logger::root(
        drain,
        o!(
            "crate" => env!("CARGO_PKG_NAME"),
            "version" => env!("CARGO_PKG_VERSION"),
        ),
    )
});

/// Write out buffered records and stop the async worker.
///
/// Returns `true` if a worker was running. Later records are discarded.
pub fn flush() -> bool {
    let guard = ASYNC_GUARD.lock().ok().and_then(|mut slot| slot.take());
    // Dropping the guard joins the worker after it drains the channel.
    guard.is_some()
}
