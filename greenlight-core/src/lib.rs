//! # Greenlight
//!
//! Human-in-the-loop review for AI agent tool calls.
//!
//! Greenlight wraps an existing tool so that every invocation first suspends
//! and asks a human. The reviewer can accept the call, rewrite its arguments,
//! answer in place of the tool, or skip it entirely. The request and response
//! payloads follow the Agent Inbox schema, so any UI that speaks that shape
//! can act as the reviewer.
//!
//! The crate deliberately stops at the wrapper. Rendering requests, storing
//! pending approvals, timeouts, and resumption across process restarts all
//! belong to the host that implements [`Interrupter`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use greenlight_core::{
//!     with_human_review_boxed, DynTool, FnTool, InterruptChannel, ReviewResponse, ToolResult,
//! };
//!
//! # tokio_test::block_on(async {
//! // The host side of the suspend/resume transport.
//! let (host, mut reviews) = InterruptChannel::new(8);
//!
//! // Any tool; here a plain closure coerced into one.
//! let tool = FnTool::new("echo", "Echoes the input back", |input| async move {
//!     Ok(ToolResult::Json(input))
//! });
//! let tool = with_human_review_boxed(Box::new(tool), Arc::new(host));
//!
//! // A reviewer that approves everything.
//! tokio::spawn(async move {
//!     while let Some(pending) = reviews.recv().await {
//!         let approvals = vec![serde_json::to_value(ReviewResponse::accept()).unwrap()];
//!         let _ = pending.respond(approvals);
//!     }
//! });
//!
//! let result = tool
//!     .execute_raw(serde_json::json!({"message": "hi"}))
//!     .await
//!     .unwrap();
//! assert_eq!(result.as_text(), r#"{"message":"hi"}"#);
//! # });
//! ```
//!
//! ## Defining Tools
//!
//! Implement the [`Tool`] trait for typed tools with derived schemas, or use
//! [`FnTool`] to coerce a plain async callable:
//!
//! ```rust
//! use greenlight_core::{Tool, ToolError, ToolResult};
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct CalculatorInput {
//!     expression: String,
//! }
//!
//! struct Calculator;
//!
//! impl Tool for Calculator {
//!     type Input = CalculatorInput;
//!
//!     fn name(&self) -> &str { "calculator" }
//!     fn description(&self) -> &str { "Evaluate a math expression" }
//!
//!     fn execute(&self, input: Self::Input) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
//!         async move {
//!             let _ = input.expression;
//!             Ok(ToolResult::text("42"))
//!         }
//!     }
//! }
//! ```
//!
//! ## Review Decisions
//!
//! | Tag | Effect |
//! |-----|--------|
//! | `accept` | Run the original tool with the original arguments |
//! | `edit` | Run the original tool with the reviewer's replacement arguments |
//! | `response` | Return the reviewer's payload as the tool output |
//! | `ignore` | Return a fixed notice; the tool never runs |
//!
//! Anything else fails the call with an error naming the unrecognized tag.

pub mod interrupt;
pub mod review;
pub mod tool;

pub use interrupt::{InterruptChannel, InterruptError, Interrupter, PendingInterrupt};
pub use review::{
    with_human_review, with_human_review_boxed, ActionRequest, ReviewConfig, ReviewDecision,
    ReviewError, ReviewRequest, ReviewResponse, ReviewedTool,
};
pub use tool::{box_tool, DynTool, FnTool, Tool, ToolError, ToolResult};
