use futures::future::BoxFuture;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result types that tools can return.
///
/// Reviewed tools exchange JSON with the host UI, so results are either plain
/// text or structured JSON. A `response` decision from a reviewer is delivered
/// through the same type: strings as [`ToolResult::Text`], everything else as
/// [`ToolResult::Json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolResult {
    /// Plain text response
    Text(String),

    /// Structured JSON data - use for complex responses
    Json(Value),
}

impl ToolResult {
    /// Create a JSON result from any serializable type
    pub fn json<T: Serialize>(value: T) -> Result<Self, serde_json::Error> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Create a text result from a string
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Get the text content if this is a Text variant, or convert to string description
    pub fn as_text(&self) -> String {
        match self {
            ToolResult::Text(s) => s.clone(),
            ToolResult::Json(v) => v.to_string(),
        }
    }

    /// Get a reference to the text content if this is a Text variant
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ToolResult::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Convert strings directly to ToolResult::Text
impl From<String> for ToolResult {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ToolResult {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Errors that can occur during tool execution
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

impl From<String> for ToolError {
    fn from(s: String) -> Self {
        Self::Custom(s)
    }
}

impl From<&str> for ToolError {
    fn from(s: &str) -> Self {
        Self::Custom(s.to_string())
    }
}

/// Trait for implementing tools that can be exposed to AI agents.
///
/// Tools define an input type with `#[derive(Deserialize, JsonSchema)]` to automatically
/// generate JSON schemas from Rust types. The name, description, and schema travel with
/// the tool through any wrapper, so a reviewer sees the same metadata the agent does.
///
/// # Example
///
/// ```rust
/// use greenlight_core::{Tool, ToolResult, ToolError};
/// use schemars::JsonSchema;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, JsonSchema)]
/// struct SendEmailInput {
///     /// Recipient address
///     to: String,
///     /// Message body
///     body: String,
/// }
///
/// struct SendEmail;
///
/// impl Tool for SendEmail {
///     type Input = SendEmailInput;
///
///     fn name(&self) -> &str { "send_email" }
///     fn description(&self) -> &str { "Send an email" }
///
///     fn execute(&self, input: Self::Input) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
///         async move {
///             Ok(format!("Sent to {}", input.to).into())  // Converts to ToolResult::Text
///         }
///     }
/// }
/// ```
pub trait Tool: Send + Sync {
    /// The input type for this tool. Must implement `Deserialize` and `JsonSchema`.
    type Input: DeserializeOwned + JsonSchema;

    /// The name of the tool (e.g., "read_file", "calculator")
    fn name(&self) -> &str;

    /// A description of what the tool does
    fn description(&self) -> &str;

    /// Execute the tool with typed input
    fn execute(
        &self,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send;

    /// Get the JSON schema for this tool's input.
    ///
    /// This is automatically implemented using the `JsonSchema` derive on `Input`.
    /// The schema is generated at runtime from the type definition.
    fn input_schema(&self) -> Value {
        let schema = schemars::schema_for!(Self::Input);
        serde_json::to_value(schema).expect("Failed to serialize schema")
    }
}

/// Object-safe trait for dynamic tool dispatch.
///
/// Users should implement [`Tool`] instead and use [`box_tool()`] to convert.
/// Wrappers such as [`crate::ReviewedTool`] operate at this level so they can
/// hold heterogeneous tools behind one type.
pub trait DynTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn input_schema(&self) -> Value;
    fn execute_raw(
        &self,
        input: Value,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<ToolResult, ToolError>> + Send + '_>,
    >;
}

/// Convert a `Tool` into a type-erased `Box<dyn DynTool>` for storage in collections.
pub fn box_tool<T: Tool + 'static>(tool: T) -> Box<dyn DynTool> {
    Box::new(ToolWrapper(tool))
}

/// Create a `Vec<Box<dyn DynTool>>` from heterogeneous tool types.
///
/// This macro boxes each tool and collects them into a vector, ready to be
/// wrapped with [`crate::with_human_review_boxed()`] or handed to a host
/// framework directly.
///
/// # Example
///
/// ```ignore
/// use greenlight_core::box_tools;
///
/// let tools = box_tools![SendEmail, DeleteRecord, Calculator];
/// ```
#[macro_export]
macro_rules! box_tools {
    ($($tool:expr),* $(,)?) => {
        vec![$($crate::tool::box_tool($tool)),*]
    };
}

/// Internal wrapper that implements DynTool for any Tool
struct ToolWrapper<T>(T);

impl<T: Tool + 'static> DynTool for ToolWrapper<T> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn description(&self) -> &str {
        self.0.description()
    }

    fn input_schema(&self) -> Value {
        self.0.input_schema()
    }

    fn execute_raw(
        &self,
        input: Value,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<ToolResult, ToolError>> + Send + '_>,
    > {
        Box::pin(async move {
            let typed_input: T::Input = serde_json::from_value(input)
                .map_err(|e| ToolError::Custom(format!("Failed to deserialize input: {}", e)))?;

            self.0.execute(typed_input).await
        })
    }
}

type FnToolFuture = BoxFuture<'static, Result<ToolResult, ToolError>>;

/// A plain async callable coerced into a [`DynTool`].
///
/// Use this when a tool is a closure rather than a dedicated type: the name,
/// description, and input schema are supplied at runtime instead of being
/// derived from a typed input struct. The schema defaults to an unconstrained
/// JSON object; set a real one with [`FnTool::with_schema()`].
///
/// # Example
///
/// ```rust
/// use greenlight_core::{DynTool, FnTool, ToolResult};
///
/// let tool = FnTool::new("echo", "Echoes the input back", |input| async move {
///     Ok(ToolResult::Json(input))
/// });
///
/// # tokio_test::block_on(async {
/// let result = tool.execute_raw(serde_json::json!({"message": "hi"})).await.unwrap();
/// assert_eq!(result.as_text(), r#"{"message":"hi"}"#);
/// # });
/// ```
pub struct FnTool {
    name: String,
    description: String,
    schema: Value,
    call: Box<dyn Fn(Value) -> FnToolFuture + Send + Sync>,
}

impl FnTool {
    /// Create a tool from an async callable.
    pub fn new<F, Fut>(name: impl Into<String>, description: impl Into<String>, call: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<ToolResult, ToolError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            schema: serde_json::json!({"type": "object"}),
            call: Box::new(move |input| Box::pin(call(input))),
        }
    }

    /// Set the JSON schema describing this tool's input.
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = schema;
        self
    }
}

impl DynTool for FnTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn input_schema(&self) -> Value {
        self.schema.clone()
    }

    fn execute_raw(
        &self,
        input: Value,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<ToolResult, ToolError>> + Send + '_>,
    > {
        (self.call)(input)
    }
}
