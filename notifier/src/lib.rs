//! GitHub Notifier - relays GitHub webhook events into Telegram channel topics.
//!
//! ## Architecture
//!
//! ```text
//! GitHub → POST /webhook/github → signature check → Dispatcher
//!        → EventKind::decode → ParsedPayload::render → Notifier → Telegram
//! ```

pub mod config;
pub mod delivery;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod github;
pub mod web;

// Re-export commonly used types
pub use config::{Config, TopicIds};
pub use delivery::{Category, MessageTransport, Notifier, TelegramTransport};
pub use dispatch::{DispatchResult, DispatchStatus, Dispatcher};
pub use error::{DeliveryError, SchemaError};
pub use github::{EventKind, ParsedPayload};
pub use web::AppState;
