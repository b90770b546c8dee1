//! Features - Interactive Page Slices
//!
//! Form state machines behind the contact section and the footer newsletter.

pub mod contact;
pub mod newsletter;
