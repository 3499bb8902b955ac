//! JSON-RPC 2.0 communication layer for the host page.
//!
//! Implements bidirectional messaging between the Bevy scene and the page
//! embedding it via postMessage, supporting both request-response and
//! notification patterns.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Adding New RPC Methods
//!
//! Add a method case in `handle_rpc_request()` and a handler returning
//! `Result<serde_json::Value, RpcError>`. Handlers read and write scene state
//! through `RpcContext`, which the message system applies back to the world
//! after every request has been handled.
//!
//! ```rust,ignore
//! fn handle_your_method(params: &Value, context: &mut RpcContext) -> Result<Value, RpcError> {
//!     #[derive(Deserialize)]
//!     struct YourParams {
//!         field: String,
//!     }
//!
//!     let parsed = serde_json::from_value::<YourParams>(params.clone())
//!         .map_err(|_| RpcError::invalid_params("Expected 'field' parameter"))?;
//!
//!     Ok(json!({ "success": true, "result": parsed.field }))
//! }
//! ```
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//!
//! ## Existing Methods
//!
//! ### Diagnostics
//! - `get_fps`: Retrieve current frame rate
//! - `get_scroll_progress`: Raw and smoothed scroll progress plus the current section
//!
//! ### View Control
//! - `set_view_layout`: Switch between `authored`, `split` and `wire_only`
//! - `set_camera_target`: Move the point both view cameras look at
//!
//! ## Notifications
//!
//! - `loading_progress`: Per-model load state while loading
//! - `scene_ready`: Sent once when every model has loaded
//! - `asset_load_failed`: A model or the manifest could not be loaded
//! - `fps_update`: Frame rate, every half second

/// JSON-RPC 2.0 bidirectional communication system for the host page.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
