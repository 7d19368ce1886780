//! Small platform-agnostic helpers shared by every page.

pub mod format;
pub mod links;
