use huddle::events::{ClientEvent, ServerEvent};
use serde_json::{json, Value};

#[test]
fn inbound_events_deserialize_from_their_wire_names() {
    let event: ClientEvent =
        serde_json::from_str(r#"{"type": "join room", "room": "standup"}"#).unwrap();
    match event {
        ClientEvent::JoinRoom { room } => assert_eq!(room, "standup"),
        other => panic!("unexpected event: {:?}", other),
    }

    let event: ClientEvent = serde_json::from_str(
        r#"{"type": "recognized text", "room": "standup", "text": "hello"}"#,
    )
    .unwrap();
    match event {
        ClientEvent::RecognizedText { room, text } => {
            assert_eq!(room, "standup");
            assert_eq!(text, "hello");
        }
        other => panic!("unexpected event: {:?}", other),
    }

    let event: ClientEvent =
        serde_json::from_str(r#"{"type": "get summary", "room": "standup"}"#).unwrap();
    assert!(matches!(event, ClientEvent::GetSummary { .. }));
}

#[test]
fn signal_payloads_pass_through_untouched() {
    let raw = r#"{
        "type": "signal",
        "to": "peer-b",
        "signal": {"sdp": "offer", "ice": [{"candidate": "c0"}]}
    }"#;

    let event: ClientEvent = serde_json::from_str(raw).unwrap();
    match event {
        ClientEvent::Signal { to, signal } => {
            assert_eq!(to, "peer-b");
            assert_eq!(signal, json!({"sdp": "offer", "ice": [{"candidate": "c0"}]}));
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn summary_reply_serializes_with_camel_case_fields() {
    let event = ServerEvent::SummaryReceived {
        room_code: "standup".to_string(),
        summary_text: "- a point".to_string(),
    };

    let value: Value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], "summary received");
    assert_eq!(value["roomCode"], "standup");
    assert_eq!(value["summaryText"], "- a point");
}

#[test]
fn membership_events_serialize_with_their_wire_names() {
    let value: Value = serde_json::to_value(ServerEvent::ExistingUsers {
        users: vec!["peer-a".to_string()],
    })
    .unwrap();
    assert_eq!(value["type"], "existing users");
    assert_eq!(value["users"], json!(["peer-a"]));

    let value: Value = serde_json::to_value(ServerEvent::UserJoined {
        id: "peer-b".to_string(),
    })
    .unwrap();
    assert_eq!(value["type"], "user joined");

    let value: Value = serde_json::to_value(ServerEvent::UserLeft {
        id: "peer-b".to_string(),
    })
    .unwrap();
    assert_eq!(value["type"], "user left");

    let value: Value = serde_json::to_value(ServerEvent::NewMessage {
        from: "peer-a".to_string(),
        text: "hello".to_string(),
    })
    .unwrap();
    assert_eq!(value["type"], "new message");
    assert_eq!(value["from"], "peer-a");
}
