//! Human review for tool execution.
//!
//! This module provides the wrapper that puts a human between an agent and a
//! tool. Wrapping a tool changes nothing about its name, description, or
//! input schema; it changes what happens on invocation. The wrapped tool
//! suspends through an [`Interrupter`], hands the host a [`ReviewRequest`],
//! and resumes once the reviewer has decided:
//!
//! | Decision | Effect |
//! |----------|--------|
//! | `accept` | Run the original tool with the original arguments |
//! | `edit` | Run the original tool with the reviewer's replacement arguments |
//! | `response` | Return the reviewer's payload as the tool output; the tool never runs |
//! | `ignore` | Return a fixed notice that the call was skipped; the tool never runs |
//!
//! A malformed response fails the call immediately: no response at all, an
//! `edit` without replacement arguments, or an unrecognized decision tag.
//! There is no retry and no re-prompt; recovery is the host's business.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use greenlight_core::{
//!     with_human_review_boxed, DynTool, FnTool, InterruptChannel, ReviewResponse,
//! };
//!
//! # tokio_test::block_on(async {
//! let (host, mut reviews) = InterruptChannel::new(8);
//!
//! let tool = FnTool::new("send_email", "Send an email", |input| async move {
//!     Ok(format!("sent to {}", input["to"]).into())
//! });
//! let tool = with_human_review_boxed(Box::new(tool), Arc::new(host));
//!
//! // Host side: rewrite the recipient, then let the call through.
//! tokio::spawn(async move {
//!     let pending = reviews.recv().await.unwrap();
//!     let response = ReviewResponse::edit(serde_json::json!({"to": "audit@corp.example"}));
//!     pending
//!         .respond(vec![serde_json::to_value(response).unwrap()])
//!         .unwrap();
//! });
//!
//! let result = tool
//!     .execute_raw(serde_json::json!({"to": "ceo@corp.example"}))
//!     .await
//!     .unwrap();
//! assert_eq!(result.as_text(), r#"sent to "audit@corp.example""#);
//! # });
//! ```

mod types;

use std::sync::Arc;

use serde_json::Value;

use crate::interrupt::{InterruptError, Interrupter};
use crate::tool::{box_tool, DynTool, Tool, ToolError, ToolResult};

pub use types::{ActionRequest, ReviewConfig, ReviewDecision, ReviewRequest, ReviewResponse};

/// Errors raised while interpreting a reviewer's response.
///
/// All of these are fatal to the call in progress; none are retried.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    /// The host resumed the call with an empty response list.
    #[error("interrupt did not return a response")]
    EmptyResponse,

    /// An `edit` response arrived without nested replacement arguments.
    #[error("edit response received, but valid 'args' were not found in the response")]
    MissingEditArgs,

    /// The decision tag was none of the four known ones.
    #[error("unsupported interrupt response type received: '{0}'")]
    UnsupportedResponse(String),

    /// The response was not a recognizable response record.
    #[error("malformed interrupt response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The suspend/resume transport failed.
    #[error(transparent)]
    Interrupt(#[from] InterruptError),
}

impl From<ReviewError> for ToolError {
    fn from(err: ReviewError) -> Self {
        ToolError::Custom(err.to_string())
    }
}

/// A tool wrapped with human review.
///
/// Implements [`DynTool`], forwarding the inner tool's name, description, and
/// input schema unchanged so the wrapped tool is indistinguishable from the
/// original until it is invoked.
pub struct ReviewedTool {
    inner: Box<dyn DynTool>,
    host: Arc<dyn Interrupter>,
    config: ReviewConfig,
}

impl ReviewedTool {
    /// Wrap a boxed tool with the default review configuration (all four
    /// decisions offered).
    pub fn new(inner: Box<dyn DynTool>, host: Arc<dyn Interrupter>) -> Self {
        Self {
            inner,
            host,
            config: ReviewConfig::default(),
        }
    }

    /// Restrict which decisions the reviewer is offered.
    pub fn with_config(mut self, config: ReviewConfig) -> Self {
        self.config = config;
        self
    }

    async fn review(&self, input: Value) -> Result<ToolResult, ToolError> {
        let request = ReviewRequest::new(self.inner.name(), input.clone(), self.config);
        let payload = serde_json::to_value(&request)?;

        // One request payload in, so exactly one response record is expected back.
        let mut responses = self
            .host
            .interrupt(vec![payload])
            .await
            .map_err(ReviewError::from)?;

        if responses.is_empty() {
            return Err(ReviewError::EmptyResponse.into());
        }

        let response: ReviewResponse =
            serde_json::from_value(responses.remove(0)).map_err(ReviewError::MalformedResponse)?;

        match response.into_decision()? {
            ReviewDecision::Accept => self.inner.execute_raw(input).await,
            ReviewDecision::Edit { args } => self.inner.execute_raw(args).await,
            ReviewDecision::Respond { payload } => Ok(match payload {
                Value::String(s) => ToolResult::Text(s),
                other => ToolResult::Json(other),
            }),
            ReviewDecision::Ignore => Ok(ToolResult::Text(format!(
                "Tool call '{}' was ignored by the user.",
                self.inner.name()
            ))),
        }
    }
}

impl DynTool for ReviewedTool {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn description(&self) -> &str {
        self.inner.description()
    }

    fn input_schema(&self) -> Value {
        self.inner.input_schema()
    }

    fn execute_raw(
        &self,
        input: Value,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<ToolResult, ToolError>> + Send + '_>,
    > {
        Box::pin(self.review(input))
    }
}

/// Wrap a [`Tool`] so every invocation first asks a human.
///
/// The wrapped tool keeps the original's name, description, and input schema.
/// Use [`ReviewedTool::with_config()`] when the reviewer should be offered
/// fewer than the four default decisions.
pub fn with_human_review<T: Tool + 'static>(
    tool: T,
    host: Arc<dyn Interrupter>,
) -> Box<dyn DynTool> {
    Box::new(ReviewedTool::new(box_tool(tool), host))
}

/// Wrap an already-boxed [`DynTool`] (e.g. an [`crate::FnTool`]) with human review.
pub fn with_human_review_boxed(
    tool: Box<dyn DynTool>,
    host: Arc<dyn Interrupter>,
) -> Box<dyn DynTool> {
    Box::new(ReviewedTool::new(tool, host))
}
