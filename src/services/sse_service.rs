use std::{convert::Infallible, time::Duration};

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::{
    dto::sse::ServerEvent,
    state::SharedState,
    state::bus::ChangeEvent,
};

/// Subscribe to the shared change bus.
pub fn subscribe(state: &SharedState) -> broadcast::Receiver<ChangeEvent> {
    state.bus().subscribe()
}

/// Convert a change-bus receiver into an SSE response.
///
/// The subscriber counts as a mounted ticker consumer for as long as the
/// stream lives: the caller acquires before building the stream, and the
/// forwarder task releases once the client disconnects, so the clock ticks
/// exactly while at least one view is watching.
pub fn to_sse_stream(
    mut receiver: broadcast::Receiver<ChangeEvent>,
    state: SharedState,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    // small bounded channel between forwarder and response
    let (tx, rx) = mpsc::channel::<Result<Event, Infallible>>(8);

    // forwarder task: reads from the bus and pushes into the response channel
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = tx.closed() => break,
                recv_result = receiver.recv() => {
                    match recv_result {
                        Ok(change) => {
                            let payload = ServerEvent::from(change);
                            let mut event = Event::default().data(payload.data);
                            if let Some(name) = payload.event {
                                event = event.event(name);
                            }

                            if tx.send(Ok(event)).await.is_err() {
                                break;
                            }
                        }
                        Err(RecvError::Closed) => break,
                        Err(RecvError::Lagged(_)) => {
                            // Skip lagged messages but keep the stream alive.
                            continue;
                        }
                    }
                }
            }
        }

        // Own the state inside the spawned task so the consumer unmounts
        // even if the request context has already dropped.
        state.ticker().release().await;
        tracing::info!("SSE stream disconnected");
    });

    // response stream reads from mpsc; when client disconnects axum drops this stream
    let stream = ReceiverStream::new(rx);
    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}
