//! Typed items for a few common ConnectWise resources.
//!
//! Any route can be read into `serde_json::Value`; these structs cover the
//! resources the crate itself touches and a handful that are convenient to
//! have typed. Unknown fields are ignored, so partial `fields=` selections
//! deserialize as long as the required fields are present.

mod automate;
mod common;
mod manage;

pub use automate::*;
pub use common::*;
pub use manage::*;
