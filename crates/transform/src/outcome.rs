//! Stage outcome
//!
//! What a stage hands back to its caller for one message: either exactly one
//! message to forward, or an acknowledgment that the message is fully
//! handled. The enum makes "both" and "neither" unrepresentable.

use sluice_protocol::Message;

/// Result of processing one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Propagate this message downstream; acknowledging it is the
    /// downstream's job
    Forward(Message),
    /// The message is consumed; nothing is propagated
    Ack,
}

impl Outcome {
    /// Check if this outcome is an acknowledgment
    #[inline]
    pub fn is_ack(&self) -> bool {
        matches!(self, Self::Ack)
    }

    /// The forwarded message, if any
    #[inline]
    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::Forward(msg) => Some(msg),
            Self::Ack => None,
        }
    }

    /// Messages to propagate downstream (zero or one)
    pub fn into_messages(self) -> Vec<Message> {
        match self {
            Self::Forward(msg) => vec![msg],
            Self::Ack => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward() {
        let msg = Message::from_slices(&["a"]);
        let outcome = Outcome::Forward(msg.clone());

        assert!(!outcome.is_ack());
        assert_eq!(outcome.message(), Some(&msg));
        assert_eq!(outcome.into_messages(), vec![msg]);
    }

    #[test]
    fn test_ack() {
        let outcome = Outcome::Ack;

        assert!(outcome.is_ack());
        assert!(outcome.message().is_none());
        assert!(outcome.into_messages().is_empty());
    }
}
