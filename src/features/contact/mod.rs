//! Contact feature

mod controller;

pub use controller::{ContactController, StatusKind, SubmitOutcome, SubmitStatus};
