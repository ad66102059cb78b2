use time::macros::format_description;
use tracing::Level;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::time::LocalTime, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Initialize the tracing-subscriber registry for stdout logging.
pub fn init_tracing(tracing_level: Option<&str>, log_format: Option<&str>) {
    // Filters
    let level = match tracing_level {
        None => Level::INFO,
        Some("TRACE") => Level::TRACE,
        Some("DEBUG") => Level::DEBUG,
        Some("INFO") => Level::INFO,
        Some("WARN") => Level::WARN,
        Some("ERROR") => Level::ERROR,
        _ => Level::INFO,
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    // Stdout
    let log_format = log_format.unwrap_or("json");
    let timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ));

    let fmt_layer = if log_format == "pretty" {
        tracing_subscriber::fmt::layer()
            .with_ansi(true)
            .with_timer(timer)
            .with_target(false)
            .compact()
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_timer(timer)
            .with_target(false)
            .json()
            .flatten_event(true)
            .with_span_list(false)
            .boxed()
    };

    // Registry
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
