//! WebSocket notification feed.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::debug;

use super::AppState;

/// Upgrades the connection and subscribes it to the notification feed.
///
/// `GET /productionplan/notifications`
pub async fn notifications(
    State(state): State<Arc<AppState>>,
    upgrade: WebSocketUpgrade,
) -> Response {
    let rx = state.subscribe();
    upgrade.on_upgrade(move |socket| forward_notifications(socket, rx))
}

/// Subscriber-side operations the forwarding loop needs.
///
/// Split out from `WebSocket` so the loop's exit and lag behavior can be
/// driven without a live connection.
trait SubscriberConn {
    /// Delivers one text payload; an error means the subscriber is gone.
    async fn deliver(&mut self, text: String) -> Result<(), ()>;

    /// Resolves once the subscriber has gone away (close frame, protocol
    /// error, or end of stream).
    async fn closed(&mut self);
}

impl SubscriberConn for WebSocket {
    async fn deliver(&mut self, text: String) -> Result<(), ()> {
        self.send(Message::Text(text.into())).await.map_err(|_| ())
    }

    async fn closed(&mut self) {
        // Subscribers are listen-only; inbound frames other than close are
        // ignored.
        loop {
            match self.recv().await {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => return,
                Some(Ok(_)) => {}
            }
        }
    }
}

/// Forwards broadcast messages to one subscriber until it disconnects.
///
/// Delivery is best-effort: a failed send means the subscriber is gone and
/// its subscription is silently released while the broadcast continues to
/// the rest. A subscriber that falls behind the channel capacity skips the
/// missed messages but stays connected.
async fn forward_notifications<C: SubscriberConn>(
    mut conn: C,
    mut rx: broadcast::Receiver<String>,
) {
    loop {
        tokio::select! {
            received = rx.recv() => match received {
                Ok(text) => {
                    if conn.deliver(text).await.is_err() {
                        debug!("notification subscriber disconnected");
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    debug!(skipped, "notification subscriber lagged");
                }
                Err(RecvError::Closed) => break,
            },
            () = conn.closed() => break,
        }
    }
}
