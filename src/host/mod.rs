//! The editor side of the host document protocol.
//!
//! The editor never talks to a transport directly; it only sees [`HostPort`],
//! so it can run against an in-memory fake in tests. The shipped transport is
//! a bounded crossbeam channel of [`EditorToHost`] envelopes drained by
//! whatever embeds the editor.

use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};

/// Envelopes the editor emits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EditorToHost {
    /// Sent once at startup: the editor can accept a value.
    #[serde(rename = "editor-ready")]
    EditorReady,

    /// Sent on commit, carrying the serialized pattern for one document field.
    #[serde(rename = "set-field-value")]
    SetFieldValue {
        #[serde(rename = "fieldId")]
        field_id: String,
        value: String,
    },
}

/// Envelopes the host may send, at any time, in any order.
///
/// Both parts are optional and handled independently: a message may carry a
/// field id, a value, both, or neither.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostToEditor {
    #[serde(rename = "editor-protocol")]
    EditorProtocol {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
}

impl HostToEditor {
    pub fn decode(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Narrow outbound port the editor core depends on.
pub trait HostPort {
    fn announce_ready(&self);
    fn commit_value(&self, field_id: &str, value: &str);
}

/// [`HostPort`] over a crossbeam channel.
pub struct ChannelHost {
    tx: Sender<EditorToHost>,
}

impl ChannelHost {
    pub fn new(tx: Sender<EditorToHost>) -> Self {
        Self { tx }
    }

    /// Port plus the receiving end the embedder drains.
    pub fn connect() -> (Self, Receiver<EditorToHost>) {
        let (tx, rx) = crossbeam_channel::bounded(64);
        (Self { tx }, rx)
    }

    fn send(&self, msg: EditorToHost) {
        if self.tx.try_send(msg).is_err() {
            log::warn!("drumgrid: host channel full or gone, dropping message");
        }
    }
}

impl HostPort for ChannelHost {
    fn announce_ready(&self) {
        self.send(EditorToHost::EditorReady);
    }

    fn commit_value(&self, field_id: &str, value: &str) {
        self.send(EditorToHost::SetFieldValue {
            field_id: field_id.to_string(),
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_envelope_wire_shape() {
        let json = serde_json::to_string(&EditorToHost::EditorReady).unwrap();
        assert_eq!(json, r#"{"type":"editor-ready"}"#);
    }

    #[test]
    fn set_field_value_wire_shape() {
        let msg = EditorToHost::SetFieldValue {
            field_id: "field-42".into(),
            value: "{}".into(),
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&msg).unwrap()).unwrap();
        assert_eq!(json["type"], "set-field-value");
        assert_eq!(json["fieldId"], "field-42");
        assert_eq!(json["value"], "{}");
    }

    #[test]
    fn inbound_decodes_with_any_subset_of_parts() {
        let both =
            HostToEditor::decode(r#"{"type":"editor-protocol","id":"f","value":"v"}"#).unwrap();
        let HostToEditor::EditorProtocol { id, value } = both;
        assert_eq!(id.as_deref(), Some("f"));
        assert_eq!(value.as_deref(), Some("v"));

        let HostToEditor::EditorProtocol { id, value } =
            HostToEditor::decode(r#"{"type":"editor-protocol","id":"f"}"#).unwrap();
        assert_eq!(id.as_deref(), Some("f"));
        assert_eq!(value, None);

        let HostToEditor::EditorProtocol { id, value } =
            HostToEditor::decode(r#"{"type":"editor-protocol"}"#).unwrap();
        assert_eq!(id, None);
        assert_eq!(value, None);
    }

    #[test]
    fn inbound_rejects_unknown_discriminator() {
        assert!(HostToEditor::decode(r#"{"type":"window-resize"}"#).is_err());
        assert!(HostToEditor::decode("not json").is_err());
    }

    #[test]
    fn editor_protocol_end_to_end() {
        use crate::editor::{Pattern, PatternEditor};
        use crate::shared::Voice;

        let (port, rx) = ChannelHost::connect();
        let mut editor = PatternEditor::new();
        editor.announce_ready(&port);

        let inbound =
            HostToEditor::decode(r#"{"type":"editor-protocol","id":"field-7"}"#).unwrap();
        editor.handle_message(&inbound);
        editor.toggle_cell(Voice::Kick, 0);
        editor.commit(&port);

        assert_eq!(rx.try_recv().unwrap(), EditorToHost::EditorReady);
        let EditorToHost::SetFieldValue { field_id, value } = rx.try_recv().unwrap() else {
            panic!("expected a set-field-value envelope");
        };
        assert_eq!(field_id, "field-7");
        assert!(Pattern::parse(&value).unwrap().is_active(Voice::Kick, 0));
    }

    #[test]
    fn channel_host_delivers_commits_in_order() {
        let (port, rx) = ChannelHost::connect();
        port.announce_ready();
        port.commit_value("field-1", "payload");
        assert_eq!(rx.try_recv().unwrap(), EditorToHost::EditorReady);
        assert_eq!(
            rx.try_recv().unwrap(),
            EditorToHost::SetFieldValue {
                field_id: "field-1".into(),
                value: "payload".into(),
            }
        );
        assert!(rx.try_recv().is_err());
    }
}
