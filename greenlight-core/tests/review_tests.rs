//! End-to-end tests for the human review wrapper: the full decision table,
//! the malformed-response failures, and the outbound payload shape.

mod common;

use std::sync::Arc;

use common::{ScriptedHost, TransferTool};
use greenlight_core::{
    box_tool, with_human_review, DynTool, InterruptChannel, ReviewConfig, ReviewRequest,
    ReviewResponse, ReviewedTool, ToolResult,
};

// ===== Decision Table =====

#[tokio::test]
async fn test_accept_invokes_original_with_unmodified_args() {
    let host = ScriptedHost::new();
    host.push_response(ReviewResponse::accept());

    let tool = TransferTool::new();
    let wrapped = with_human_review(tool.clone(), host);

    let result = wrapped
        .execute_raw(serde_json::json!({"to": "alice", "amount": 500}))
        .await
        .unwrap();

    assert_eq!(result.as_text(), "transferred 500 to alice");
    assert_eq!(
        tool.calls(),
        vec![serde_json::json!({"to": "alice", "amount": 500})]
    );
}

#[tokio::test]
async fn test_edit_invokes_original_with_replacement_args() {
    let host = ScriptedHost::new();
    host.push_response(ReviewResponse::edit(
        serde_json::json!({"to": "escrow", "amount": 100}),
    ));

    let tool = TransferTool::new();
    let wrapped = with_human_review(tool.clone(), host);

    let result = wrapped
        .execute_raw(serde_json::json!({"to": "alice", "amount": 500}))
        .await
        .unwrap();

    // The original arguments never reach the tool.
    assert_eq!(result.as_text(), "transferred 100 to escrow");
    assert_eq!(
        tool.calls(),
        vec![serde_json::json!({"to": "escrow", "amount": 100})]
    );
}

#[tokio::test]
async fn test_edit_without_args_fails() {
    let host = ScriptedHost::new();
    host.push_raw(vec![serde_json::json!({"type": "edit"})]);

    let tool = TransferTool::new();
    let wrapped = with_human_review(tool.clone(), host);

    let err = wrapped
        .execute_raw(serde_json::json!({"to": "alice", "amount": 500}))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("'args'"));
    assert!(tool.calls().is_empty());
}

#[tokio::test]
async fn test_response_returns_string_payload_without_invoking() {
    let host = ScriptedHost::new();
    host.push_response(ReviewResponse::respond(serde_json::json!(
        "handled this manually, no transfer needed"
    )));

    let tool = TransferTool::new();
    let wrapped = with_human_review(tool.clone(), host);

    let result = wrapped
        .execute_raw(serde_json::json!({"to": "alice", "amount": 500}))
        .await
        .unwrap();

    assert_eq!(
        result,
        ToolResult::Text("handled this manually, no transfer needed".to_string())
    );
    assert!(tool.calls().is_empty());
}

#[tokio::test]
async fn test_response_returns_json_payload_verbatim() {
    let host = ScriptedHost::new();
    host.push_response(ReviewResponse::respond(
        serde_json::json!({"status": "rejected", "reason": "over limit"}),
    ));

    let tool = TransferTool::new();
    let wrapped = with_human_review(tool.clone(), host);

    let result = wrapped
        .execute_raw(serde_json::json!({"to": "alice", "amount": 500}))
        .await
        .unwrap();

    assert_eq!(
        result,
        ToolResult::Json(serde_json::json!({"status": "rejected", "reason": "over limit"}))
    );
    assert!(tool.calls().is_empty());
}

#[tokio::test]
async fn test_ignore_returns_fixed_notice() {
    let host = ScriptedHost::new();
    host.push_response(ReviewResponse::ignore());

    let tool = TransferTool::new();
    let wrapped = with_human_review(tool.clone(), host);

    let result = wrapped
        .execute_raw(serde_json::json!({"to": "alice", "amount": 500}))
        .await
        .unwrap();

    assert_eq!(
        result.as_text(),
        "Tool call 'transfer' was ignored by the user."
    );
    assert!(tool.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_tag_is_named_in_error() {
    let host = ScriptedHost::new();
    host.push_raw(vec![serde_json::json!({"type": "postpone"})]);

    let tool = TransferTool::new();
    let wrapped = with_human_review(tool.clone(), host);

    let err = wrapped
        .execute_raw(serde_json::json!({"to": "alice", "amount": 500}))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("postpone"));
    assert!(tool.calls().is_empty());
}

#[tokio::test]
async fn test_empty_response_list_fails() {
    // Exhausted script means the host answers with an empty batch.
    let host = ScriptedHost::new();

    let tool = TransferTool::new();
    let wrapped = with_human_review(tool.clone(), host);

    let err = wrapped
        .execute_raw(serde_json::json!({"to": "alice", "amount": 500}))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("did not return a response"));
    assert!(tool.calls().is_empty());
}

// ===== Outbound Payload =====

#[tokio::test]
async fn test_request_payload_matches_inbox_schema() {
    let host = ScriptedHost::new();
    host.push_response(ReviewResponse::accept());

    let wrapped = with_human_review(TransferTool::new(), host.clone());
    wrapped
        .execute_raw(serde_json::json!({"to": "alice", "amount": 500}))
        .await
        .unwrap();

    let payload = host.only_request();
    assert_eq!(payload["action_request"]["action"], "transfer");
    assert_eq!(
        payload["action_request"]["args"],
        serde_json::json!({"to": "alice", "amount": 500})
    );
    assert_eq!(payload["config"]["allow_accept"], true);
    assert_eq!(payload["config"]["allow_edit"], true);
    assert_eq!(payload["config"]["allow_respond"], true);
    assert_eq!(payload["config"]["allow_ignore"], true);
    assert_eq!(
        payload["description"],
        "Please review the tool call to 'transfer'."
    );
}

#[tokio::test]
async fn test_custom_config_reaches_the_payload() {
    let host = ScriptedHost::new();
    host.push_response(ReviewResponse::accept());

    let wrapped = ReviewedTool::new(box_tool(TransferTool::new()), host.clone())
        .with_config(ReviewConfig::default().with_edit(false).with_respond(false));

    wrapped
        .execute_raw(serde_json::json!({"to": "alice", "amount": 500}))
        .await
        .unwrap();

    let payload = host.only_request();
    assert_eq!(payload["config"]["allow_accept"], true);
    assert_eq!(payload["config"]["allow_edit"], false);
    assert_eq!(payload["config"]["allow_respond"], false);
    assert_eq!(payload["config"]["allow_ignore"], true);
}

#[tokio::test]
async fn test_wrapped_tool_preserves_metadata() {
    let host = ScriptedHost::new();
    let plain = box_tool(TransferTool::new());
    let wrapped = with_human_review(TransferTool::new(), host);

    assert_eq!(wrapped.name(), plain.name());
    assert_eq!(wrapped.description(), plain.description());
    assert_eq!(wrapped.input_schema(), plain.input_schema());
}

// ===== Channel Transport =====

#[tokio::test]
async fn test_review_over_interrupt_channel() {
    let (host, mut reviews) = InterruptChannel::new(4);

    let tool = TransferTool::new();
    let wrapped = with_human_review(tool.clone(), Arc::new(host));

    let reviewer = tokio::spawn(async move {
        let pending = reviews.recv().await.unwrap();

        // The payload parses back into the request type.
        let request: ReviewRequest =
            serde_json::from_value(pending.payloads[0].clone()).unwrap();
        assert_eq!(request.action_request.action, "transfer");

        let response = ReviewResponse::edit(serde_json::json!({"to": "audit", "amount": 1}));
        pending
            .respond(vec![serde_json::to_value(response).unwrap()])
            .unwrap();
    });

    let result = wrapped
        .execute_raw(serde_json::json!({"to": "alice", "amount": 500}))
        .await
        .unwrap();

    assert_eq!(result.as_text(), "transferred 1 to audit");
    assert_eq!(
        tool.calls(),
        vec![serde_json::json!({"to": "audit", "amount": 1})]
    );

    reviewer.await.unwrap();
}
