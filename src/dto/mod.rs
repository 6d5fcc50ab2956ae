use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod common;
pub mod control;
pub mod health;
pub mod sse;
pub mod theme;
pub mod timer;
pub mod validation;

fn format_unix_millis(millis: u64) -> String {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .ok()
        .and_then(|timestamp| timestamp.format(&Rfc3339).ok())
        .unwrap_or_else(|| "invalid-timestamp".into())
}
