//! Console subscriber for the notification feed.
//!
//! Counterpart of the server's WebSocket endpoint: connects, then prints
//! every broadcast message until the server closes the connection.

use futures_util::StreamExt;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::{Error, Message};
use tracing::warn;

/// Connects to a notification feed and prints each message to stdout.
///
/// # Errors
///
/// Returns an error if the WebSocket connection cannot be established.
pub async fn run(url: &str) -> Result<(), Error> {
    run_with(url, |text| println!("{text}")).await
}

/// Connects to a notification feed and hands each text message to
/// `on_message` until the server closes the connection.
///
/// # Errors
///
/// Returns an error if the WebSocket connection cannot be established.
/// Errors after the connection is up end the stream but are not returned;
/// the feed is best-effort on both sides.
pub async fn run_with(url: &str, mut on_message: impl FnMut(&str)) -> Result<(), Error> {
    let (mut stream, _) = connect_async(url).await?;
    tracing::info!("subscribed to notification feed at {url}");

    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => on_message(text.as_str()),
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                warn!("notification feed error: {e}");
                break;
            }
        }
    }
    Ok(())
}
