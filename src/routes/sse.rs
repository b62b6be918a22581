#![allow(clippy::unused_async)]

use crate::state::LadderState;
use axum::{
    extract::State,
    response::{
        Sse,
        sse::{Event, KeepAlive},
    },
};
use futures::{Stream, StreamExt};
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;

#[cfg(test)]
#[path = "sse_test.rs"]
mod sse_test;

///fired whenever the roster changes, so every list and profile on screen refetches itself
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SseEvent {
    Roster,
}

impl SseEvent {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Roster => "roster",
        }
    }
}

pub async fn sse_feed(
    State(state): State<LadderState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.subscribe_to_sse_feed();

    //lagged receivers just skip ahead, which is fine given every event means the same thing
    let stream = BroadcastStream::new(rx)
        .filter_map(|event| async move { event.ok() })
        .map(|event| Ok(Event::default().event(event.name()).data(event.name())));

    Sse::new(stream).keep_alive(KeepAlive::default())
}
