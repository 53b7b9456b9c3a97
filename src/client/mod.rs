//! Frontend client: a typed API client and the UI state machine it drives.
//!
//! The state machine is independent of any rendering technology; the served
//! static page implements the same transitions in the browser.

pub mod api;
pub mod state;

pub use api::{ApiClient, ClientError};
pub use state::{SubmitAction, UiState, NOTICE_TTL};
