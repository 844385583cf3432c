//! Common test utilities shared across test files.
//!
//! This module provides mock implementations and test helpers.
//! Items here may not be used by all test files, hence the module-level allow.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use greenlight_core::{
    InterruptError, Interrupter, ReviewResponse, Tool, ToolError, ToolResult,
};
use parking_lot::Mutex;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

// ===== Scripted Host =====

/// Interrupter double that replays scripted response batches in order.
///
/// Records every outbound request batch so tests can assert on the payload
/// shape. An exhausted script answers with an empty batch, which is exactly
/// the "host returned no response" failure mode.
pub struct ScriptedHost {
    script: Mutex<VecDeque<Vec<Value>>>,
    requests: Mutex<Vec<Vec<Value>>>,
}

impl ScriptedHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Queue a single-response batch for the next interrupt.
    pub fn push_response(&self, response: ReviewResponse) {
        self.push_raw(vec![serde_json::to_value(response).unwrap()]);
    }

    /// Queue an arbitrary response batch for the next interrupt.
    pub fn push_raw(&self, responses: Vec<Value>) {
        self.script.lock().push_back(responses);
    }

    /// All request batches seen so far.
    pub fn requests(&self) -> Vec<Vec<Value>> {
        self.requests.lock().clone()
    }

    /// The single payload of the single interrupt seen so far.
    pub fn only_request(&self) -> Value {
        let requests = self.requests.lock();
        assert_eq!(requests.len(), 1, "expected exactly one interrupt");
        assert_eq!(requests[0].len(), 1, "expected exactly one payload");
        requests[0][0].clone()
    }
}

#[async_trait]
impl Interrupter for ScriptedHost {
    async fn interrupt(&self, payloads: Vec<Value>) -> Result<Vec<Value>, InterruptError> {
        self.requests.lock().push(payloads);
        Ok(self.script.lock().pop_front().unwrap_or_default())
    }
}

// ===== Recording Tool =====

/// Input for the Transfer test tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TransferInput {
    /// Destination account
    pub to: String,
    /// Amount in cents
    pub amount: u64,
}

/// Test tool that records the arguments of every invocation.
#[derive(Clone, Default)]
pub struct TransferTool {
    calls: Arc<Mutex<Vec<Value>>>,
}

impl TransferTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments of every invocation so far, in order.
    pub fn calls(&self) -> Vec<Value> {
        self.calls.lock().clone()
    }
}

impl Tool for TransferTool {
    type Input = TransferInput;

    fn name(&self) -> &str {
        "transfer"
    }

    fn description(&self) -> &str {
        "Transfer funds between accounts"
    }

    async fn execute(&self, input: Self::Input) -> Result<ToolResult, ToolError> {
        self.calls
            .lock()
            .push(serde_json::json!({"to": input.to, "amount": input.amount}));
        Ok(format!("transferred {} to {}", input.amount, input.to).into())
    }
}
