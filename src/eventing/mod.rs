//! Eventing - Change Notification
//!
//! Synchronous observer lists used by the preference managers, plus the events
//! recorded on the document.

pub mod app_event;
pub mod subscribers;

pub use app_event::SiteEvent;
pub use subscribers::{SubscriptionId, Subscribers};
