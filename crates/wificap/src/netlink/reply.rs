//! Collected replies of one generic netlink dump.

use super::error::{Error, Result};
use super::genl::GENL_ID_CTRL;
use super::genl::header::GENL_HDRLEN;
use super::message::{MessageIter, NlMsgHdr, NlMsgType, error_code};

/// Classification of one reply message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// End of the dump.
    Done,
    /// Kernel error with its (negative) errno.
    Error(i32),
    /// Error message carrying code 0.
    Ack,
    /// A message from the controller family.
    Control,
    /// Domain data.
    Data,
}

/// One raw kernel message.
#[derive(Debug, Clone)]
pub struct ReplyMessage {
    pub header: NlMsgHdr,
    pub payload: Vec<u8>,
    kind: ReplyKind,
}

impl ReplyMessage {
    /// Classify a message. ERROR messages must carry at least the code.
    pub fn new(header: NlMsgHdr, payload: Vec<u8>) -> Result<Self> {
        let kind = match header.nlmsg_type {
            NlMsgType::DONE => ReplyKind::Done,
            NlMsgType::ERROR => match error_code(&payload)? {
                0 => ReplyKind::Ack,
                code => ReplyKind::Error(code),
            },
            GENL_ID_CTRL => ReplyKind::Control,
            _ => ReplyKind::Data,
        };
        Ok(Self {
            header,
            payload,
            kind,
        })
    }

    pub fn kind(&self) -> ReplyKind {
        self.kind
    }

    /// Payload with the generic netlink header stripped.
    pub fn body(&self) -> Result<&[u8]> {
        self.payload.get(GENL_HDRLEN..).ok_or(Error::Truncated {
            expected: GENL_HDRLEN,
            actual: self.payload.len(),
        })
    }
}

/// Ordered messages answering one request.
#[derive(Debug, Clone, Default)]
pub struct ReplySequence {
    messages: Vec<ReplyMessage>,
}

impl ReplySequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse back-to-back netlink messages from a buffer.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut seq = Self::new();
        for item in MessageIter::new(data) {
            let (header, payload) = item?;
            seq.push(ReplyMessage::new(*header, payload.to_vec())?);
        }
        Ok(seq)
    }

    pub fn push(&mut self, message: ReplyMessage) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReplyMessage> {
        self.messages.iter()
    }

    /// Whether the sequence is terminated by DONE or an error.
    pub fn is_complete(&self) -> bool {
        self.messages
            .last()
            .is_some_and(|m| matches!(m.kind, ReplyKind::Done | ReplyKind::Error(_)))
    }

    /// First kernel error code anywhere in the sequence.
    pub fn first_error(&self) -> Option<i32> {
        self.messages.iter().find_map(|m| match m.kind {
            ReplyKind::Error(code) => Some(code),
            _ => None,
        })
    }

    /// Domain message bodies in order, with bookkeeping skipped.
    ///
    /// Any ERROR message in the sequence fails the whole dump with its code,
    /// even when data messages came before it.
    pub fn data_bodies(&self) -> Result<Vec<&[u8]>> {
        if let Some(code) = self.first_error() {
            return Err(Error::from_errno(code));
        }
        self.messages
            .iter()
            .filter(|m| m.kind == ReplyKind::Data)
            .map(ReplyMessage::body)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlink::fixtures;

    #[test]
    fn test_classification() {
        let mut raw = fixtures::data_message(1, &[]);
        raw.extend(fixtures::ack_message(1));
        raw.extend(fixtures::done_message(1));
        let seq = ReplySequence::from_bytes(&raw).unwrap();

        let kinds: Vec<_> = seq.iter().map(ReplyMessage::kind).collect();
        assert_eq!(kinds, vec![ReplyKind::Data, ReplyKind::Ack, ReplyKind::Done]);
        assert!(seq.is_complete());
        assert_eq!(seq.data_bodies().unwrap().len(), 1);
    }

    #[test]
    fn test_error_anywhere_fails() {
        let mut raw = fixtures::data_message(1, &[]);
        raw.extend(fixtures::data_message(1, &[]));
        raw.extend(fixtures::error_message(1, -libc::EPERM));
        let seq = ReplySequence::from_bytes(&raw).unwrap();

        assert_eq!(seq.first_error(), Some(-libc::EPERM));
        let err = seq.data_bodies().unwrap_err();
        assert_eq!(err.errno(), Some(libc::EPERM));
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_controller_messages_are_skipped() {
        let mut raw = fixtures::control_message(1);
        raw.extend(fixtures::data_message(1, &[1, 2, 3, 4]));
        raw.extend(fixtures::done_message(1));
        let seq = ReplySequence::from_bytes(&raw).unwrap();

        let bodies = seq.data_bodies().unwrap();
        assert_eq!(bodies, vec![&[1u8, 2, 3, 4][..]]);
    }

    #[test]
    fn test_truncated_error_payload() {
        let header = NlMsgHdr::new(NlMsgType::ERROR, 0);
        assert!(ReplyMessage::new(header, vec![0, 0]).is_err());
    }

    #[test]
    fn test_missing_genl_header() {
        let header = NlMsgHdr::new(0x20, 0);
        let msg = ReplyMessage::new(header, vec![1, 2]).unwrap();
        assert!(matches!(msg.body(), Err(Error::Truncated { .. })));
    }
}
