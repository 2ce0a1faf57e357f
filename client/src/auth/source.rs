//! Observer interface over an OAuth credential provider.

use super::claims::UserClaims;

/// Token material currently held by a credential provider.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub token: Option<String>,
    /// Claims decoded from `token`, if it is a JWT.
    pub token_data: Option<UserClaims>,
}

impl Credentials {
    pub fn new(token: impl Into<String>, token_data: Option<UserClaims>) -> Self {
        Self {
            token: Some(token.into()),
            token_data,
        }
    }

    /// Non-empty token, if any.
    pub fn present_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.present_token().is_some()
    }
}

pub type CredentialsCallback = Box<dyn Fn(&Credentials)>;

/// An externally owned authentication context.
///
/// Implementations own token acquisition and storage; consumers only read
/// credentials and subscribe to changes.
pub trait CredentialSource {
    fn credentials(&self) -> Credentials;

    /// Register `callback` to run with the latest credentials whenever they
    /// change. Implementations may also invoke it once with the current value.
    fn on_credentials_changed(&self, callback: CredentialsCallback);

    /// Start the interactive login flow.
    fn login(&self);

    /// Discard provider-held credentials.
    fn logout(&self);

    fn is_authenticated(&self) -> bool {
        self.credentials().is_authenticated()
    }
}
