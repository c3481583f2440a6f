//! Data models for the Dukaan admin panel.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod feedback;
mod issue;
mod panel;
mod stats;
mod user;

pub use feedback::*;
pub use issue::*;
pub use panel::*;
pub use stats::*;
pub use user::*;
