//! Order dispatcher for the lead-capture pipeline.
//!
//! This crate turns a submitted [`common::OrderRequest`] into exactly one
//! notification email:
//! - validation (presence, email shape, field lengths), first failure wins
//! - rendering of the notification subject and HTML body
//! - delivery through a [`mailer::EmailProvider`], never retried
//!
//! The dispatcher holds no mutable state and is safe to share across
//! concurrent requests.

pub mod dispatcher;
pub mod error;
pub mod notification;
pub mod validation;

pub use dispatcher::{ACCEPTED_MESSAGE, OrderDispatcher};
pub use error::{DispatchError, OrderError, OrderField};
pub use notification::{Notification, NotificationRenderer, NotificationSettings, subject_line};
pub use validation::{ValidatedOrder, validate};
