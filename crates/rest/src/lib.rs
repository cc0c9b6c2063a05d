//! Blocking REST plumbing shared by the parlance API clients.
//!
//! Provides the pieces a service client needs to perform a single
//! file-upload POST: connection settings ([`RestConfig`]), a chainable
//! request builder ([`RestClient`]), the raw response wrapper
//! ([`ApiResponse`]), and the [`HttpPoster`] transport seam with a
//! blocking reqwest implementation ([`ReqwestPoster`]).
//!
//! Everything here is synchronous: a call blocks the current thread until
//! the HTTP layer returns or fails. No retries, no caching, no shared
//! state across calls.

mod client;
mod config;
mod error;
mod mime;
mod poster;
mod response;

// Re-export public types
pub use client::RestClient;
pub use config::RestConfig;
pub use error::RestError;
pub use mime::content_type_for;
pub use poster::{FileUpload, HttpPoster, ReqwestPoster};
pub use response::ApiResponse;
