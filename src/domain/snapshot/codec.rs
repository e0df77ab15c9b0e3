//! Snapshot codec - decision to portable text and back.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use serde_json::Value;

use super::{SnapshotDocument, SnapshotError};
use crate::domain::decision::Decision;

/// Encodes full decisions for storage (plain JSON) and for links (base64 JSON).
pub struct SnapshotCodec;

impl SnapshotCodec {
    /// Serializes a decision to the JSON blob kept in local storage.
    pub fn to_json(decision: &Decision) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(&SnapshotDocument::capture(decision))?)
    }

    /// Parses a stored JSON blob, tolerating per-field shape mismatches.
    pub fn from_json(json: &str) -> Result<Decision, SnapshotError> {
        if json.trim().is_empty() {
            return Err(SnapshotError::Empty);
        }
        let value: Value = serde_json::from_str(json)?;
        Ok(SnapshotDocument::from_value(&value)?.into_decision())
    }

    /// Encodes a decision into a URL-fragment-safe payload.
    pub fn encode(decision: &Decision) -> Result<String, SnapshotError> {
        let json = Self::to_json(decision)?;
        Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
    }

    /// Decodes a payload produced by [`Self::encode`].
    ///
    /// The standard padded alphabet is accepted too, as is the browser
    /// build's format, which percent-encodes the JSON before base64. Any
    /// failure leaves the caller's state alone: nothing is returned but the
    /// error.
    pub fn decode(payload: &str) -> Result<Decision, SnapshotError> {
        let payload = payload.trim();
        if payload.is_empty() {
            return Err(SnapshotError::Empty);
        }
        let bytes = match URL_SAFE_NO_PAD.decode(payload) {
            Ok(bytes) => bytes,
            Err(url_safe_err) => STANDARD.decode(payload).map_err(|_| url_safe_err)?,
        };
        let text = String::from_utf8(bytes)?;
        // Percent-encoded JSON opens with `%7B` instead of `{`.
        if text.trim_start().starts_with('%') {
            let json = urlencoding::decode(&text)?;
            return Self::from_json(&json);
        }
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Side, Weight};
    use proptest::prelude::*;

    fn sample() -> Decision {
        let mut d = Decision::new();
        d.set_topic("Take the job in Zürich? 🇨🇭");
        d.add_entry(Side::Supporting, "higher salary", Weight::clamped(10));
        d.add_entry(Side::Supporting, "mountains ⛰️", Weight::clamped(1));
        d.add_entry(Side::Opposing, "far from family", Weight::clamped(8));
        d.set_locked(Side::Supporting, true);
        d
    }

    #[test]
    fn round_trips_sample() {
        let d = sample();
        let payload = SnapshotCodec::encode(&d).unwrap();
        assert_eq!(SnapshotCodec::decode(&payload).unwrap(), d);
    }

    #[test]
    fn round_trips_empty_decision() {
        let d = Decision::new();
        let payload = SnapshotCodec::encode(&d).unwrap();
        assert_eq!(SnapshotCodec::decode(&payload).unwrap(), d);
    }

    #[test]
    fn payload_is_fragment_safe() {
        let payload = SnapshotCodec::encode(&sample()).unwrap();
        assert!(payload
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn decodes_standard_alphabet() {
        let d = sample();
        let json = SnapshotCodec::to_json(&d).unwrap();
        let padded = STANDARD.encode(json.as_bytes());
        assert_eq!(SnapshotCodec::decode(&padded).unwrap(), d);
    }

    #[test]
    fn decodes_browser_payload() {
        // btoa(encodeURIComponent(JSON.stringify(state)))
        let json = r#"{"topic":"Dog?","pros":[{"id":1718000000000,"text":"walks à deux","score":6}],"cons":[],"prosLocked":true,"consLocked":false}"#;
        let payload = STANDARD.encode(urlencoding::encode(json).as_bytes());

        let d = SnapshotCodec::decode(&payload).unwrap();

        assert_eq!(d.topic(), "Dog?");
        let pros = d.entries(Side::Supporting);
        assert_eq!(pros.len(), 1);
        assert_eq!(pros[0].id().as_str(), "1718000000000");
        assert_eq!(pros[0].text(), "walks à deux");
        assert_eq!(pros[0].weight().value(), 6);
        assert!(d.is_locked(Side::Supporting));
        assert!(!d.is_locked(Side::Opposing));
    }

    #[test]
    fn broken_percent_encoding_fails() {
        let payload = STANDARD.encode("%7B%22topic%22%3A%FF%7D");
        assert!(SnapshotCodec::decode(&payload).is_err());
    }

    #[test]
    fn garbage_fails() {
        assert!(matches!(SnapshotCodec::decode(""), Err(SnapshotError::Empty)));
        assert!(matches!(
            SnapshotCodec::decode("%%%not base64%%%"),
            Err(SnapshotError::Base64(_))
        ));
        let not_json = URL_SAFE_NO_PAD.encode("hello duck");
        assert!(matches!(
            SnapshotCodec::decode(&not_json),
            Err(SnapshotError::Json(_))
        ));
        let array = URL_SAFE_NO_PAD.encode("[1,2,3]");
        assert!(matches!(
            SnapshotCodec::decode(&array),
            Err(SnapshotError::NotAnObject)
        ));
        let bad_utf8 = URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0xfd]);
        assert!(matches!(
            SnapshotCodec::decode(&bad_utf8),
            Err(SnapshotError::Utf8(_))
        ));
    }

    #[test]
    fn from_json_rejects_blank() {
        assert!(matches!(SnapshotCodec::from_json("  "), Err(SnapshotError::Empty)));
    }

    fn arb_decision() -> impl Strategy<Value = Decision> {
        let entries = prop::collection::vec(("\\PC{1,24}", 1i64..=10), 0..6);
        (
            "\\PC{0,30}",
            entries.clone(),
            entries,
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(topic, pros, cons, pl, cl)| {
                let mut d = Decision::new();
                d.set_topic(topic);
                for (text, w) in pros {
                    d.add_entry(Side::Supporting, &text, Weight::clamped(w));
                }
                for (text, w) in cons {
                    d.add_entry(Side::Opposing, &text, Weight::clamped(w));
                }
                d.set_locked(Side::Supporting, pl);
                d.set_locked(Side::Opposing, cl);
                d
            })
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(d in arb_decision()) {
            let payload = SnapshotCodec::encode(&d).unwrap();
            prop_assert_eq!(SnapshotCodec::decode(&payload).unwrap(), d.clone());

            let json = SnapshotCodec::to_json(&d).unwrap();
            prop_assert_eq!(SnapshotCodec::from_json(&json).unwrap(), d);
        }
    }
}
