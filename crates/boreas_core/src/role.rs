//! Role types for generation requests.

use serde::{Deserialize, Serialize};

/// Roles are the same for both the narrative and extraction collaborators.
///
/// # Examples
///
/// ```
/// use boreas_core::Role;
///
/// let user_role = Role::User;
/// let assistant_role = Role::Assistant;
/// assert_ne!(user_role, assistant_role);
///
/// // Display implementation
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages provide the fixed task framing
    System,
    /// User messages carry the per-window transcript
    User,
    /// Assistant messages are from the model
    Assistant,
}
