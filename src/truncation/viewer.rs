//! Out-of-band surface for showing a truncated message in full.

use std::sync::mpsc;
use tracing::debug;

/// Request to present a message outside the cell it was truncated in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRequest {
    /// Full, untruncated message text.
    pub message: String,
    /// Keep whitespace and break lines verbatim when presenting.
    pub preformatted: bool,
}

impl ViewRequest {
    /// Request for preformatted text, as sent by the "view full" action.
    pub fn preformatted(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            preformatted: true,
        }
    }
}

/// Capability that presents a message to the user.
///
/// Fire-and-forget: the caller never learns whether or how the message was
/// shown. Injected into each detector at construction.
pub trait FullContentViewer {
    /// Present `request` to the user.
    fn display(&mut self, request: ViewRequest);
}

/// Channel viewer: requests are queued for the event loop to open in the
/// alert overlay.
impl FullContentViewer for mpsc::Sender<ViewRequest> {
    fn display(&mut self, request: ViewRequest) {
        if self.send(request).is_err() {
            debug!("View request dropped: alert receiver is gone");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_forwards_request() {
        let (mut tx, rx) = mpsc::channel();
        tx.display(ViewRequest::preformatted("boom"));

        let received = rx.try_recv().expect("request should be queued");
        assert_eq!(received.message, "boom");
        assert!(received.preformatted);
    }

    #[test]
    fn sender_with_dropped_receiver_does_not_panic() {
        let (mut tx, rx) = mpsc::channel::<ViewRequest>();
        drop(rx);
        tx.display(ViewRequest::preformatted("lost"));
    }
}
