//! Human Review Walkthrough
//!
//! Wraps two tools with human review and drives them against an in-process
//! host that plays the reviewer:
//!
//! 1. **transfer** - the reviewer rewrites the arguments before approving
//! 2. **delete_record** - the reviewer skips the call entirely
//!
//! Run with: cargo run --example human_review

use std::sync::Arc;

use greenlight_core::{
    with_human_review, with_human_review_boxed, DynTool, FnTool, InterruptChannel, ReviewRequest,
    ReviewResponse, Tool, ToolError, ToolResult,
};
use schemars::JsonSchema;
use serde::Deserialize;

// =============================================================================
// Tool Definitions
// =============================================================================

/// Moves money - exactly the kind of call a human should see first
#[derive(Debug, Deserialize, JsonSchema)]
struct TransferInput {
    /// Destination account
    to: String,
    /// Amount in cents
    amount: u64,
}

struct TransferTool;

impl Tool for TransferTool {
    type Input = TransferInput;

    fn name(&self) -> &str {
        "transfer"
    }

    fn description(&self) -> &str {
        "Transfer funds between accounts"
    }

    async fn execute(&self, input: Self::Input) -> Result<ToolResult, ToolError> {
        Ok(format!("transferred {} to {}", input.amount, input.to).into())
    }
}

#[tokio::main]
async fn main() {
    let (host, mut reviews) = InterruptChannel::new(8);
    let host = Arc::new(host);

    let transfer = with_human_review(TransferTool, host.clone());
    let delete = with_human_review_boxed(
        Box::new(FnTool::new(
            "delete_record",
            "Delete a record by id",
            |input| async move { Ok(format!("deleted record {}", input["id"]).into()) },
        )),
        host,
    );

    // The reviewer: prints each request and answers by tool name.
    let reviewer = tokio::spawn(async move {
        while let Some(pending) = reviews.recv().await {
            for payload in &pending.payloads {
                let request: ReviewRequest = serde_json::from_value(payload.clone()).unwrap();
                println!(
                    "[inbox {} @ {}] {}",
                    pending.id,
                    pending.requested_at.format("%H:%M:%S"),
                    request.description
                );
                println!(
                    "[inbox {}]   args: {}",
                    pending.id, request.action_request.args
                );
            }

            let request: ReviewRequest =
                serde_json::from_value(pending.payloads[0].clone()).unwrap();
            let response = match request.action_request.action.as_str() {
                // Cap the amount before letting the transfer through.
                "transfer" => ReviewResponse::edit(serde_json::json!({
                    "to": request.action_request.args["to"],
                    "amount": 100,
                })),
                _ => ReviewResponse::ignore(),
            };

            pending
                .respond(vec![serde_json::to_value(response).unwrap()])
                .unwrap();
        }
    });

    let result = transfer
        .execute_raw(serde_json::json!({"to": "alice", "amount": 99_000}))
        .await
        .unwrap();
    println!("transfer      -> {}", result.as_text());

    let result = delete
        .execute_raw(serde_json::json!({"id": 42}))
        .await
        .unwrap();
    println!("delete_record -> {}", result.as_text());

    drop(transfer);
    drop(delete);
    reviewer.await.unwrap();
}
