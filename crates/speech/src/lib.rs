//! Blocking client for a speech recognition REST endpoint.
//!
//! Uploads an audio file with authorization and context headers and parses
//! the JSON recognition envelope into an ordered attribute collection.
//! One call, one POST: no retries, no streaming, no state kept between
//! invocations.
//!
//! # Example
//!
//! ```no_run
//! use parlance_rest::RestConfig;
//! use parlance_speech::SpeechService;
//!
//! fn main() -> Result<(), parlance_speech::SpeechError> {
//!     let cfg = RestConfig::new("https://api.example.com/speech/v3/speechToText");
//!     let service = SpeechService::new(&cfg)?;
//!
//!     let response = service.send_request(
//!         std::path::Path::new("clip.wav"),
//!         "access-token",
//!         "Generic",
//!         None,
//!         None,
//!     )?;
//!
//!     for (name, value) in response.attributes() {
//!         println!("{}: {}", name, value);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod model;
mod parse;
mod service;

// Re-export public types
pub use error::SpeechError;
pub use model::SpeechResponse;
pub use parse::parse_success;
pub use service::SpeechService;
