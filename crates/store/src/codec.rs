//! Versioned JSON encoding.
//!
//! Every file is an envelope `{"kind": ..., "version": 1, "payload": ...}`.
//! The header is checked before the payload is decoded, so a file from a newer
//! build reports its version instead of a field error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Leaderboard, Snapshot};
use crate::error::StoreError;

pub const FORMAT_VERSION: u32 = 1;

pub const SNAPSHOT_KIND: &str = "snapshot";
pub const LEADERBOARD_KIND: &str = "leaderboard";

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    kind: &'a str,
    version: u32,
    payload: &'a T,
}

#[derive(Deserialize)]
struct Envelope {
    kind: String,
    version: u32,
    payload: Value,
}

fn encode<T: Serialize>(kind: &str, payload: &T) -> Result<String, StoreError> {
    let envelope = EnvelopeRef {
        kind,
        version: FORMAT_VERSION,
        payload,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

fn decode<T: DeserializeOwned>(kind: &'static str, text: &str) -> Result<T, StoreError> {
    let envelope: Envelope = serde_json::from_str(text)?;
    if envelope.kind != kind {
        return Err(StoreError::UnexpectedKind {
            expected: kind,
            found: envelope.kind,
        });
    }
    if envelope.version != FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion(envelope.version));
    }
    Ok(serde_json::from_value(envelope.payload)?)
}

pub fn encode_snapshot(snapshot: &Snapshot) -> Result<String, StoreError> {
    encode(SNAPSHOT_KIND, snapshot)
}

/// Decode a snapshot. The result still has to pass `GameSession::from_snapshot`.
pub fn decode_snapshot(text: &str) -> Result<Snapshot, StoreError> {
    decode(SNAPSHOT_KIND, text)
}

pub fn encode_leaderboard(board: &Leaderboard) -> Result<String, StoreError> {
    encode(LEADERBOARD_KIND, board)
}

pub fn decode_leaderboard(text: &str) -> Result<Leaderboard, StoreError> {
    decode(LEADERBOARD_KIND, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameSession;

    #[test]
    fn snapshot_text_carries_the_envelope() {
        let snap = GameSession::with_seed(3).to_snapshot();
        let text = encode_snapshot(&snap).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["kind"], "snapshot");
        assert_eq!(value["version"], 1);
        assert_eq!(value["payload"]["board"].as_array().map(Vec::len), Some(22));
        assert_eq!(decode_snapshot(&text).unwrap(), snap);
    }

    #[test]
    fn newer_version_is_rejected() {
        let snap = GameSession::with_seed(3).to_snapshot();
        let text = encode_snapshot(&snap)
            .unwrap()
            .replace("\"version\": 1", "\"version\": 2");
        assert!(matches!(
            decode_snapshot(&text),
            Err(StoreError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn kinds_are_not_interchangeable() {
        let text = encode_leaderboard(&Leaderboard::new()).unwrap();
        match decode_snapshot(&text) {
            Err(StoreError::UnexpectedKind { expected, found }) => {
                assert_eq!(expected, "snapshot");
                assert_eq!(found, "leaderboard");
            }
            other => panic!("expected UnexpectedKind, got {other:?}"),
        }
    }

    #[test]
    fn garbage_is_a_json_error() {
        assert!(matches!(
            decode_leaderboard("not json"),
            Err(StoreError::Json(_))
        ));
    }

    #[test]
    fn leaderboard_payload_is_a_plain_list() {
        let mut board = Leaderboard::new();
        board.add("ann", 300);
        let text = encode_leaderboard(&board).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["payload"][0]["name"], "ann");
        assert_eq!(value["payload"][0]["score"], 300);
        assert_eq!(decode_leaderboard(&text).unwrap(), board);
    }
}
