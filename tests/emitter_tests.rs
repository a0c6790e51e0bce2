use novaquant_engine::domain::model::message::OutboundMessage;
use novaquant_engine::infrastructure::wire::emitter::ResponseEmitter;

/// Emit into an in-memory buffer and hand back the raw wire bytes as text.
async fn emit_to_string(messages: &[OutboundMessage]) -> String {
    let mut emitter = ResponseEmitter::new(Vec::new());
    for message in messages {
        emitter.emit(message).await.expect("emit should succeed");
    }
    String::from_utf8(emitter.writer).expect("wire output should be UTF-8")
}

#[tokio::test]
async fn test_ready_status_wire_shape() {
    let output = emit_to_string(&[OutboundMessage::EngineStatus {
        status: "ready".to_string(),
        ts_ms: 1700000000000,
    }])
    .await;

    assert_eq!(
        output,
        "{\"type\":\"engine_status\",\"status\":\"ready\",\"ts_ms\":1700000000000}\n"
    );
}

#[tokio::test]
async fn test_ack_wire_field_order() {
    let output = emit_to_string(&[OutboundMessage::Ack {
        order_id: "1".to_string(),
        symbol: "AAPL".to_string(),
        ts_ms: 1700000000001,
    }])
    .await;

    assert_eq!(
        output,
        "{\"type\":\"ack\",\"order_id\":\"1\",\"symbol\":\"AAPL\",\"ts_ms\":1700000000001}\n"
    );
}

#[tokio::test]
async fn test_fill_wire_field_order() {
    let output = emit_to_string(&[OutboundMessage::Fill {
        order_id: "1".to_string(),
        symbol: "AAPL".to_string(),
        side: "buy".to_string(),
        qty: 10.0,
        px: 150.5,
        ts_ms: 1700000000002,
    }])
    .await;

    // Whole quantities carry no fractional part on the wire.
    assert_eq!(
        output,
        "{\"type\":\"fill\",\"order_id\":\"1\",\"symbol\":\"AAPL\",\"side\":\"buy\",\"qty\":10,\"px\":150.5,\"ts_ms\":1700000000002}\n"
    );
}

#[tokio::test]
async fn test_reserved_characters_are_escaped() {
    let output = emit_to_string(&[OutboundMessage::Ack {
        order_id: "a\\b".to_string(),
        symbol: "AAP\"L\n\r\t".to_string(),
        ts_ms: 0,
    }])
    .await;

    assert_eq!(
        output,
        "{\"type\":\"ack\",\"order_id\":\"a\\\\b\",\"symbol\":\"AAP\\\"L\\n\\r\\t\",\"ts_ms\":0}\n"
    );
}

#[tokio::test]
async fn test_non_ascii_passes_through() {
    let output = emit_to_string(&[OutboundMessage::Ack {
        order_id: "ord-1".to_string(),
        symbol: "ÖMX-30".to_string(),
        ts_ms: 0,
    }])
    .await;

    assert!(
        output.contains("\"symbol\":\"ÖMX-30\""),
        "Non-ASCII bytes should pass through unmodified, got: {}",
        output
    );
}

#[tokio::test]
async fn test_whole_and_fractional_number_rendering() {
    let output = emit_to_string(&[
        OutboundMessage::Fill {
            order_id: "1".to_string(),
            symbol: "X".to_string(),
            side: "buy".to_string(),
            qty: 0.0,
            px: -3.0,
            ts_ms: 0,
        },
        OutboundMessage::Fill {
            order_id: "2".to_string(),
            symbol: "X".to_string(),
            side: "sell".to_string(),
            qty: 0.25,
            px: 150.5,
            ts_ms: 0,
        },
    ])
    .await;

    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].contains("\"qty\":0,\"px\":-3,"), "got: {}", lines[0]);
    assert!(lines[1].contains("\"qty\":0.25,\"px\":150.5,"), "got: {}", lines[1]);
}

#[tokio::test]
async fn test_each_message_is_one_line() {
    let ack = OutboundMessage::Ack {
        order_id: "1".to_string(),
        symbol: "AAPL".to_string(),
        ts_ms: 1,
    };
    let output = emit_to_string(&[ack.clone(), ack.clone(), ack]).await;

    assert_eq!(output.lines().count(), 3);
    assert!(output.ends_with('\n'), "Every record ends with a newline");
}

#[tokio::test]
async fn test_emitted_line_parses_back() {
    let output = emit_to_string(&[OutboundMessage::Fill {
        order_id: "round".to_string(),
        symbol: "TRIP\"".to_string(),
        side: "buy".to_string(),
        qty: 1.5,
        px: 2.0,
        ts_ms: 42,
    }])
    .await;

    let value: serde_json::Value = serde_json::from_str(output.trim_end()).expect("valid JSON");
    assert_eq!(value["type"], "fill");
    assert_eq!(value["symbol"], "TRIP\"");
    assert_eq!(value["qty"], 1.5);
    assert_eq!(value["px"], 2.0);
    assert_eq!(value["ts_ms"], 42);
}
