use std::convert::Infallible;

use axum::{Router, extract::State, response::sse::Sse, routing::get};
use futures::Stream;
use tracing::info;

use crate::{services::sse_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/sse/events",
    tag = "sse",
    responses((status = 200, description = "Change event stream (event name = changed document key, data = full serialized document)", content_type = "text/event-stream", body = String))
)]
/// Stream every committed state change to a connected view.
///
/// Each open stream counts as a mounted clock consumer, so the timer ticks
/// exactly while at least one view is connected.
pub async fn events_stream(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<axum::response::sse::Event, Infallible>>> {
    let receiver = sse_service::subscribe(&state);
    state.ticker().acquire().await;
    info!("new SSE subscriber");
    sse_service::to_sse_stream(receiver, state)
}

/// Configure the SSE endpoint.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/sse/events", get(events_stream))
}
