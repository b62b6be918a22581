use super::*;
use futures::StreamExt;
use tokio::sync::broadcast;

#[test]
fn roster_event_name_matches_the_client_triggers() {
    assert_eq!(SseEvent::Roster.name(), "roster");
}

#[tokio::test]
async fn broadcast_events_come_out_of_the_stream() {
    let (tx, rx) = broadcast::channel(1);
    let mut stream =
        Box::pin(BroadcastStream::new(rx).filter_map(|event| async move { event.ok() }));

    tx.send(SseEvent::Roster).unwrap();
    assert_eq!(stream.next().await, Some(SseEvent::Roster));
}
