//! Data models for the Arteterapia backend.
//!
//! Field names serialize in camelCase to match the web client's JSON contract.

mod forum;
mod notice;
mod school;
mod user;

pub use forum::*;
pub use notice::*;
pub use school::*;
pub use user::*;
