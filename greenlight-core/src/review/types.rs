//! Review request/response shapes.
//!
//! These structs serialize to the exact field names the Agent Inbox UI
//! parses. They are a contract this crate conforms to, not one it designs;
//! renaming a field here breaks the frontend schema check.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ReviewError;

/// The action the agent wants to take, as shown to the reviewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    /// Tool name.
    pub action: String,

    /// The arguments the agent supplied for the call.
    pub args: Value,
}

/// Which decisions the reviewer is offered.
///
/// Defaults to all four actions enabled.
///
/// # Example
///
/// ```rust
/// use greenlight_core::ReviewConfig;
///
/// // Review-only: the human can accept or ignore, but not rewrite the call.
/// let config = ReviewConfig::default()
///     .with_edit(false)
///     .with_respond(false);
///
/// assert!(config.allow_accept);
/// assert!(!config.allow_edit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Offer "run the call as proposed".
    pub allow_accept: bool,

    /// Offer "rewrite the arguments, then run".
    pub allow_edit: bool,

    /// Offer "answer in place of the tool".
    pub allow_respond: bool,

    /// Offer "skip this call". The frontend schema checks for this key.
    pub allow_ignore: bool,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            allow_accept: true,
            allow_edit: true,
            allow_respond: true,
            allow_ignore: true,
        }
    }
}

impl ReviewConfig {
    /// Set whether accepting the call as-is is offered.
    pub fn with_accept(mut self, allow: bool) -> Self {
        self.allow_accept = allow;
        self
    }

    /// Set whether editing the arguments is offered.
    pub fn with_edit(mut self, allow: bool) -> Self {
        self.allow_edit = allow;
        self
    }

    /// Set whether responding in place of the tool is offered.
    pub fn with_respond(mut self, allow: bool) -> Self {
        self.allow_respond = allow;
        self
    }

    /// Set whether ignoring the call is offered.
    pub fn with_ignore(mut self, allow: bool) -> Self {
        self.allow_ignore = allow;
        self
    }
}

/// The outbound payload handed to the host when a reviewed tool suspends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// What the agent wants to run.
    pub action_request: ActionRequest,

    /// Which decisions the reviewer is offered.
    pub config: ReviewConfig,

    /// Human-readable prompt shown alongside the request.
    pub description: String,
}

impl ReviewRequest {
    /// Build the request for a tool call, with the standard prompt line.
    pub fn new(action: impl Into<String>, args: Value, config: ReviewConfig) -> Self {
        let action = action.into();
        let description = format!("Please review the tool call to '{}'.", action);
        Self {
            action_request: ActionRequest { action, args },
            config,
            description,
        }
    }
}

/// The inbound response produced by the reviewer.
///
/// The `type` tag is kept as a raw string so an unrecognized tag can be
/// reported by name; [`ReviewResponse::into_decision()`] performs the
/// interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewResponse {
    /// Decision tag: `accept`, `edit`, `response`, or `ignore`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Decision payload. For `edit` the replacement arguments are nested
    /// under an inner `args` key; for `response` this is the tool output.
    #[serde(default)]
    pub args: Option<Value>,
}

impl ReviewResponse {
    /// Run the call as proposed.
    pub fn accept() -> Self {
        Self {
            kind: "accept".to_string(),
            args: None,
        }
    }

    /// Run the call with replacement arguments.
    ///
    /// The arguments are nested under an inner `args` key, matching the shape
    /// the Agent Inbox sends.
    pub fn edit(args: Value) -> Self {
        Self {
            kind: "edit".to_string(),
            args: Some(serde_json::json!({ "args": args })),
        }
    }

    /// Answer in place of the tool; `payload` becomes the tool output.
    pub fn respond(payload: Value) -> Self {
        Self {
            kind: "response".to_string(),
            args: Some(payload),
        }
    }

    /// Skip the call.
    pub fn ignore() -> Self {
        Self {
            kind: "ignore".to_string(),
            args: None,
        }
    }

    /// Interpret the response as one of the four decisions.
    ///
    /// Fails with [`ReviewError::MissingEditArgs`] when an `edit` response
    /// carries no nested `args`, and [`ReviewError::UnsupportedResponse`] for
    /// any tag outside the four known ones.
    pub fn into_decision(self) -> Result<ReviewDecision, ReviewError> {
        match self.kind.as_str() {
            "accept" => Ok(ReviewDecision::Accept),
            "edit" => {
                let args = self
                    .args
                    .as_ref()
                    .and_then(|a| a.get("args"))
                    .cloned()
                    .ok_or(ReviewError::MissingEditArgs)?;
                Ok(ReviewDecision::Edit { args })
            }
            "response" => Ok(ReviewDecision::Respond {
                payload: self.args.unwrap_or(Value::Null),
            }),
            "ignore" => Ok(ReviewDecision::Ignore),
            other => Err(ReviewError::UnsupportedResponse(other.to_string())),
        }
    }
}

/// A reviewer's decision, interpreted from a [`ReviewResponse`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewDecision {
    /// Run the original tool with the original arguments.
    Accept,

    /// Run the original tool with these replacement arguments.
    Edit {
        /// The rewritten arguments.
        args: Value,
    },

    /// Return this payload as the tool output without running the tool.
    Respond {
        /// The reviewer-supplied output (JSON null when none was given).
        payload: Value,
    },

    /// Skip the call and report it as ignored.
    Ignore,
}
