use prometheus::{register_counter, register_counter_vec, Counter, CounterVec};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

lazy_static! {
    pub static ref QUESTIONS_CREATED: Counter = register_counter!(
        "trivia_questions_created_total",
        "Number of questions created through the API"
    )
    .unwrap();
    pub static ref QUESTIONS_DELETED: Counter = register_counter!(
        "trivia_questions_deleted_total",
        "Number of questions deleted through the API"
    )
    .unwrap();
    pub static ref QUIZ_QUESTIONS_SERVED: CounterVec = register_counter_vec!(
        "trivia_quiz_questions_served_total",
        "Number of quiz questions handed out",
        &["category"]
    )
    .unwrap();
}

const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
const SPAN_EVENTS_VAR: &str = "INCLUDE_SPAN_EVENTS";

/// Filter used when `LOG_LEVEL` is unset or unparsable. sqlx logs every
/// statement at info.
pub const DEFAULT_FILTER: &str = "info,sqlx=warn";

fn span_events(flag: Option<&str>) -> FmtSpan {
    match flag {
        Some(value) if value.trim().eq_ignore_ascii_case("true") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::NONE,
    }
}

fn env_filter(directives: Option<&str>) -> anyhow::Result<EnvFilter> {
    match directives.map(EnvFilter::try_new) {
        Some(Ok(filter)) => Ok(filter),
        _ => Ok(EnvFilter::try_new(DEFAULT_FILTER)?),
    }
}

/// Installs the global subscriber. Fails if one is already set.
pub fn init_tracing() -> anyhow::Result<()> {
    let level = std::env::var(LOG_LEVEL_VAR).ok();
    let spans = std::env::var(SPAN_EVENTS_VAR).ok();

    let fmt_layer = fmt::layer().with_span_events(span_events(spans.as_deref()));
    tracing_subscriber::registry()
        .with(env_filter(level.as_deref())?)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}
