//! Registered account for the storefront.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, UserId};

use crate::password::PasswordHash;

/// A registered user account.
///
/// Invariants: email is stored trimmed and lowercased and must contain `@`;
/// email uniqueness is enforced by the account store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    id: UserId,
    name: String,
    email: String,
    password: PasswordHash,
    created_at: DateTime<Utc>,
}

impl UserAccount {
    pub fn register(
        id: UserId,
        name: &str,
        email: &str,
        password: &str,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        // Basic email check, matching what registration has always accepted.
        let email = email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("invalid email format"));
        }

        if password.is_empty() {
            return Err(DomainError::validation("password cannot be empty"));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            email,
            password: PasswordHash::new(password),
            created_at,
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password.verify(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_normalizes_name_and_email() {
        let account = UserAccount::register(
            UserId::new(),
            "  Alice Smith ",
            "  Alice@Example.COM ",
            "hunter2",
            Utc::now(),
        )
        .unwrap();

        assert_eq!(account.name(), "Alice Smith");
        assert_eq!(account.email(), "alice@example.com");
        assert!(account.verify_password("hunter2"));
        assert!(!account.verify_password("wrong"));
    }

    #[test]
    fn register_rejects_invalid_email() {
        for email in ["", "   ", "not-an-email"] {
            let err = UserAccount::register(UserId::new(), "Alice", email, "pw", Utc::now())
                .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "email {email:?}");
        }
    }

    #[test]
    fn register_rejects_blank_name_and_password() {
        let err = UserAccount::register(UserId::new(), "   ", "a@b.c", "pw", Utc::now())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = UserAccount::register(UserId::new(), "Alice", "a@b.c", "", Utc::now())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
