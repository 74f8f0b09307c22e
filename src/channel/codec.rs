//! Event frame codec.
//!
//! One event per frame; a frame is one line of JSON terminated by `\n`.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::MAX_FRAME_SIZE;
use crate::sync::{EventError, ListEvent};

/// Stateless encoder/decoder for channel frames.
///
/// Decoding is what a subscriber needs; encoding exists for the sending side
/// of the wire and for test harnesses standing in for the authority.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventCodec;

impl EventCodec {
    /// Decode one frame line into an event.
    ///
    /// `line` must not include the terminating newline. Oversized frames are
    /// rejected before parsing.
    pub fn decode<T: DeserializeOwned>(line: &str) -> Result<ListEvent<T>, EventError> {
        if line.len() > MAX_FRAME_SIZE {
            return Err(EventError::FrameTooLarge {
                size: line.len(),
                limit: MAX_FRAME_SIZE,
            });
        }
        Ok(serde_json::from_str(line)?)
    }

    /// Encode an event as a single frame line, terminating newline included.
    pub fn encode<T: Serialize>(event: &ListEvent<T>) -> Result<String, EventError> {
        let mut line = serde_json::to_string(event)?;
        line.push('\n');
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Item;

    #[test]
    fn test_decode_snapshot() {
        let frame = r#"{"event":"snapshot","data":[{"id":1,"name":"Dune","owner":"Herbert","price":12.0}]}"#;
        let event: ListEvent = EventCodec::decode(frame).unwrap();
        match event {
            ListEvent::Snapshot(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].id, 1);
            }
            other => panic!("expected snapshot, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_created() {
        let frame = r#"{"event":"created","data":{"id":5,"name":"Dune","owner":"Herbert","price":12.0}}"#;
        let event: ListEvent = EventCodec::decode(frame).unwrap();
        assert_eq!(event, ListEvent::Created(Item::new(5, "Dune", "Herbert", 12.0)));
    }

    #[test]
    fn test_decode_updated() {
        let frame = r#"{"event":"updated","data":{"id":5,"name":"Dune2","owner":"Herbert","price":15.0}}"#;
        let event: ListEvent = EventCodec::decode(frame).unwrap();
        assert_eq!(event, ListEvent::Updated(Item::new(5, "Dune2", "Herbert", 15.0)));
    }

    #[test]
    fn test_decode_deleted() {
        let frame = r#"{"event":"deleted","data":7}"#;
        let event: ListEvent = EventCodec::decode(frame).unwrap();
        assert_eq!(event, ListEvent::Deleted(7));
    }

    #[test]
    fn test_decode_unknown_kind_is_invalid() {
        let frame = r#"{"event":"renamed","data":7}"#;
        let result: Result<ListEvent, _> = EventCodec::decode(frame);
        assert!(matches!(result, Err(EventError::Invalid(_))));
    }

    #[test]
    fn test_decode_malformed_json_is_invalid() {
        let result: Result<ListEvent, _> = EventCodec::decode("{not json");
        assert!(matches!(result, Err(EventError::Invalid(_))));
    }

    #[test]
    fn test_decode_oversized_frame_is_rejected() {
        let frame = "x".repeat(MAX_FRAME_SIZE + 1);
        let result: Result<ListEvent, _> = EventCodec::decode(&frame);
        assert!(matches!(result, Err(EventError::FrameTooLarge { .. })));
    }

    #[test]
    fn test_encode_is_single_terminated_line() {
        let event: ListEvent = ListEvent::Deleted(3);
        let line = EventCodec::encode(&event).unwrap();
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_encode_decode_frame() {
        let event: ListEvent = ListEvent::Created(Item::new(5, "Dune", "Herbert", 12.0));
        let line = EventCodec::encode(&event).unwrap();
        let back: ListEvent = EventCodec::decode(line.trim_end()).unwrap();
        assert_eq!(event, back);
    }
}
