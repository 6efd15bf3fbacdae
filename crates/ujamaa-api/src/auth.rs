//! Registration and login.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use ujamaa_shared::auth::{hash_password, verify_password};
use ujamaa_shared::models::{User, UserRole};
use ujamaa_shared::views::UserView;

use crate::error::{ApiError, Result};
use crate::Platform;

impl Platform {
    /// Register a new user.  Emails are unique across the platform.
    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<UserView> {
        if !email.contains('@') {
            return Err(ApiError::Validation("invalid email address".into()));
        }
        if password.is_empty() {
            return Err(ApiError::Validation("password must not be empty".into()));
        }
        if self.store.find_user_by_email(email).is_some() {
            return Err(ApiError::Conflict(format!(
                "email {email} is already registered"
            )));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: hash_password(password),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role: UserRole::Member,
            ngo_id: None,
            created_at: Utc::now(),
        };
        let view = user.view();

        info!(user_id = %user.id, "user registered");
        self.store.put_user(user);
        self.store.save()?;

        Ok(view)
    }

    /// Authenticate by email and password.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller; both are `Unauthorized`.
    pub fn login(&self, email: &str, password: &str) -> Result<UserView> {
        let user = self
            .store
            .find_user_by_email(email)
            .ok_or(ApiError::Unauthorized)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(ApiError::Unauthorized);
        }

        Ok(user.view())
    }

    /// Resolve an acting user id, or fail with `Unauthorized`.
    pub(crate) fn require_actor(&self, actor: Uuid) -> Result<&User> {
        self.store.get_user(actor).ok_or(ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> (tempfile::TempDir, Platform) {
        let dir = tempfile::tempdir().unwrap();
        let p = Platform::open_at(dir.path().join("store.json")).unwrap();
        (dir, p)
    }

    #[test]
    fn register_then_login() {
        let (_dir, mut p) = platform();

        let view = p
            .register("neema@example.org", "hunter2x", "Neema", "Mushi")
            .unwrap();
        assert_eq!(view.email, "neema@example.org");

        let logged_in = p.login("neema@example.org", "hunter2x").unwrap();
        assert_eq!(logged_in.id, view.id);
    }

    #[test]
    fn duplicate_email_is_a_conflict() {
        let (_dir, mut p) = platform();

        p.register("dup@example.org", "pw123456", "A", "B").unwrap();
        let err = p
            .register("dup@example.org", "other-pw", "C", "D")
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[test]
    fn wrong_password_is_unauthorized() {
        let (_dir, mut p) = platform();

        p.register("x@example.org", "right-pw", "X", "Y").unwrap();
        assert!(matches!(
            p.login("x@example.org", "wrong-pw"),
            Err(ApiError::Unauthorized)
        ));
        assert!(matches!(
            p.login("nobody@example.org", "right-pw"),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn registration_view_has_no_credential() {
        let (_dir, mut p) = platform();
        let view = p
            .register("v@example.org", "pw123456", "V", "W")
            .unwrap();
        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("password"));
    }
}
