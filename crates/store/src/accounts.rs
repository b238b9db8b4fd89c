//! Account persistence: primary-key access plus the email equality filter
//! used by login and registration.

use storefront_auth::UserAccount;
use storefront_core::{DomainError, DomainResult, UserId};

use crate::document_store::{DocumentStore, InMemoryDocumentStore};

#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: InMemoryDocumentStore<UserId, UserAccount>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly registered account, enforcing email uniqueness.
    pub fn register(&self, account: UserAccount) -> DomainResult<()> {
        if self.find_by_email(account.email()).is_some() {
            return Err(DomainError::conflict("user with this email already exists"));
        }
        self.accounts.upsert(account.id(), account);
        Ok(())
    }

    pub fn get(&self, id: UserId) -> Option<UserAccount> {
        self.accounts.get(&id)
    }

    /// Equality filter over the stored email (already lowercased at
    /// registration); the probe is lowercased to match.
    pub fn find_by_email(&self, email: &str) -> Option<UserAccount> {
        let probe = email.trim().to_lowercase();
        self.accounts
            .list()
            .into_iter()
            .find(|account| account.email() == probe)
    }
}
