//! Accessors for [`User`] records.

use uuid::Uuid;

use ujamaa_shared::models::User;

use crate::store::DataStore;

impl DataStore {
    /// Insert or replace a user.
    pub fn put_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    /// Look up a user by id.  Absence is not an error.
    pub fn get_user(&self, id: Uuid) -> Option<&User> {
        self.users.get(&id)
    }

    /// Mutable access for the fields designed as mutable (role, ngo_id).
    pub fn get_user_mut(&mut self, id: Uuid) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    /// All users, newest first.
    pub fn list_users(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        users
    }

    /// Look up a user by email (case-insensitive).  Used by registration
    /// to enforce uniqueness and by login.
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use ujamaa_shared::models::UserRole;

    use super::*;

    fn user(email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: email.into(),
            password_hash: "s:d".into(),
            first_name: "Test".into(),
            last_name: "User".into(),
            role: UserRole::Member,
            ngo_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn email_lookup_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DataStore::open_at(dir.path().join("s.json")).unwrap();

        let u = user("Amina@Example.org");
        let id = u.id;
        store.put_user(u);

        assert_eq!(store.find_user_by_email("amina@example.org").map(|u| u.id), Some(id));
        assert!(store.find_user_by_email("nobody@example.org").is_none());
    }

    #[test]
    fn get_absent_user_reports_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = DataStore::open_at(dir.path().join("s.json")).unwrap();
        assert!(store.get_user(Uuid::new_v4()).is_none());
    }
}
