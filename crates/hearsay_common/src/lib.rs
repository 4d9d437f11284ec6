//! Hearsay Common - Shared types and the QA engine.
//!
//! Everything in this crate is pure: no I/O, no async, no shared state.
//! The daemon crate (`hearsayd`) owns fetching and serving.

pub mod engine;
pub mod message;
pub mod protocol;

pub use engine::answer_question;
pub use message::MemberMessage;
pub use protocol::{AskResponse, HealthResponse, MemberCountsResponse};
