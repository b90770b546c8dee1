//! Domain Models
//!
//! Plain data types shared by the state managers, features and views.

pub mod contact;
pub mod content;
pub mod theme;
