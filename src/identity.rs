//! Identity collaborator.
//!
//! Sign-in, sign-up and session management live with the identity provider;
//! the stores only read the current user when attaching identity to a
//! review or a group join.

use jiff::Timestamp;
use mockall::automock;
use serde::{Deserialize, Serialize};

/// Account type of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Street-food vendor buying raw materials.
    Vendor,
    /// Raw-material supplier selling to vendors.
    Supplier,
    /// Marketplace administrator.
    Admin,
}

/// The authenticated user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned account id.
    pub uid: String,
    /// Account email, when the provider exposes one.
    pub email: Option<String>,
    /// Display name, when the provider exposes one.
    pub display_name: Option<String>,
}

/// Business profile attached to a user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Name shown on reviews and group-buy listings.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Vendor, supplier or admin.
    pub user_type: UserType,
    /// Registered business name, if any.
    pub business_name: Option<String>,
    /// Neighbourhood or market the business operates from.
    pub location: Option<String>,
    /// Whether the marketplace has verified this account.
    pub verified: bool,
    /// When the profile was created.
    pub created_at: Timestamp,
}

/// Supplies the current user and profile to the stores.
#[automock]
pub trait IdentityProvider: Send + Sync {
    /// The signed-in user, or `None` when nobody is signed in.
    fn current_user(&self) -> Option<User>;

    /// The signed-in user's profile, or `None` when nobody is signed in.
    fn profile(&self) -> Option<UserProfile>;
}

/// An identity provider pinned to one signed-in user.
///
/// Real deployments adapt their auth layer to [`IdentityProvider`]; this
/// implementation covers tests and single-user tools.
#[derive(Debug, Clone)]
pub struct FixedIdentity {
    user: User,
    profile: UserProfile,
}

impl FixedIdentity {
    /// Creates a provider that always reports `user` and `profile`.
    #[must_use]
    pub fn new(user: User, profile: UserProfile) -> Self {
        Self { user, profile }
    }
}

impl IdentityProvider for FixedIdentity {
    fn current_user(&self) -> Option<User> {
        Some(self.user.clone())
    }

    fn profile(&self) -> Option<UserProfile> {
        Some(self.profile.clone())
    }
}
