//! Logging integration for formlet.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-form spans.
//! The form engines emit `trace`-level events from `fill`.

use crate::settings::Settings;

/// Installs a global tracing subscriber configured from `settings`.
///
/// `settings.log_level` is an [`EnvFilter`](tracing_subscriber::EnvFilter)
/// directive such as "debug" or "formlet_forms=trace"; an unparsable
/// directive falls back to "info". Debug mode logs pretty, multi-line events
/// with source locations, otherwise one JSON object per event.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case that subscriber stays in place.
pub fn setup_logging(settings: &Settings) -> bool {
    let filter = tracing_subscriber::EnvFilter::try_new(&settings.log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if settings.debug {
        builder
            .pretty()
            .with_file(true)
            .with_line_number(true)
            .try_init()
    } else {
        builder.json().try_init()
    };
    installed.is_ok()
}

/// Creates a tracing span for evaluating a named form.
///
/// Enter this span around `fill` calls so the engine's trace events are
/// attributed to the form being filled.
///
/// # Examples
///
/// ```
/// use formlet_core::logging::form_span;
///
/// let span = form_span("sign_up");
/// let _guard = span.enter();
/// tracing::info!("filling form");
/// ```
pub fn form_span(name: &str) -> tracing::Span {
    tracing::info_span!("form", name = name)
}
