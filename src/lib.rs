//! Client-side interaction core for the Brackish MUD web portal.
//!
//! Field sanitization and validation, password-strength feedback, per-flow
//! form state, the submission pipeline, and the intercepted transport live
//! here. A markup-binding layer owns rendering: it binds the state objects
//! in [`forms`], feeds input back through their setters, and injects a
//! [`PageHandle`] so the anti-forgery token and the reload signal stay in
//! the page's hands.

pub mod config;
pub mod errors;
pub mod fields;
pub mod forms;
pub mod logging;
pub mod transport;

pub use config::PortalConfig;
pub use errors::{ClientError, ErrorState};
pub use fields::RuleSchema;
pub use fields::password::Strength;
pub use transport::intercept::Disposition;
pub use transport::page::PageHandle;
pub use transport::{Exchange, Transport};
