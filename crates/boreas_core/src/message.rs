//! Message types for generation requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a generation request.
///
/// Every request in this pipeline is one independent round trip, so a
/// message carries plain text rather than a multimodal content list.
///
/// # Examples
///
/// ```
/// use boreas_core::{Message, Role};
///
/// let message = Message::new(Role::User, "5.2  4.9".to_string());
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content(), "5.2  4.9");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// The text content of the message
    #[builder(setter(into))]
    content: String,
}
