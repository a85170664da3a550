//! In-Memory User Repository Adapter
//!
//! Holds user profiles in a vector guarded by a single async mutex. Each
//! repository call takes the lock once for its whole duration, so operations
//! never interleave.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, RuleCode, UserId};
use crate::domain::user::{ProfilePatch, UserProfile};
use crate::ports::UserRepository;

const RESOURCE_TYPE: &str = "User";

/// In-memory record store for user profiles.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<UserProfile>>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `profiles` in the given order.
    ///
    /// Later duplicates of an ID are dropped.
    pub fn with_profiles(profiles: impl IntoIterator<Item = UserProfile>) -> Self {
        let mut users: Vec<UserProfile> = Vec::new();
        for profile in profiles {
            if users.iter().any(|u| u.id() == profile.id()) {
                tracing::warn!(user_id = %profile.id(), "Skipping duplicate seed profile");
                continue;
            }
            users.push(profile);
        }
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    fn not_found(id: &UserId) -> DomainError {
        DomainError::not_found(RESOURCE_TYPE, id.as_str())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<UserProfile>, DomainError> {
        Ok(self.users.lock().await.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.id() == id).cloned())
    }

    async fn insert(&self, profile: UserProfile) -> Result<UserProfile, DomainError> {
        let mut users = self.users.lock().await;
        if users.iter().any(|u| u.id() == profile.id()) {
            return Err(DomainError::business_rule(
                RuleCode::DuplicateUserId,
                format!("A user with ID '{}' already exists", profile.id()),
            ));
        }
        users.push(profile.clone());
        tracing::debug!(user_id = %profile.id(), count = users.len(), "User inserted");
        Ok(profile)
    }

    async fn replace(&self, id: &UserId, profile: UserProfile) -> Result<UserProfile, DomainError> {
        let mut users = self.users.lock().await;
        let existing = users
            .iter_mut()
            .find(|u| u.id() == id)
            .ok_or_else(|| Self::not_found(id))?;

        existing.replace_fields(profile);
        tracing::debug!(user_id = %id, "User replaced");
        Ok(existing.clone())
    }

    async fn patch_fields(
        &self,
        id: &UserId,
        patch: &ProfilePatch,
    ) -> Result<UserProfile, DomainError> {
        let mut users = self.users.lock().await;
        let existing = users
            .iter_mut()
            .find(|u| u.id() == id)
            .ok_or_else(|| Self::not_found(id))?;

        existing.apply_patch(patch)?;
        tracing::debug!(user_id = %id, "User patched");
        Ok(existing.clone())
    }

    async fn remove(&self, id: &UserId) -> Result<(), DomainError> {
        let mut users = self.users.lock().await;
        let pos = users
            .iter()
            .position(|u| u.id() == id)
            .ok_or_else(|| Self::not_found(id))?;

        users.remove(pos);
        tracing::debug!(user_id = %id, count = users.len(), "User removed");
        Ok(())
    }

    async fn len(&self) -> Result<usize, DomainError> {
        Ok(self.users.lock().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::sample_profiles;
    use proptest::prelude::*;

    fn seeded() -> InMemoryUserRepository {
        InMemoryUserRepository::with_profiles(sample_profiles().unwrap())
    }

    fn uid(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn profile(id: &str, name: &str, emoji: &str) -> UserProfile {
        UserProfile::new(id, name, emoji).unwrap()
    }

    fn assert_not_found_for(err: DomainError, id: &str) {
        match err {
            DomainError::NotFound {
                resource_type,
                resource_id,
            } => {
                assert_eq!(resource_type, "User");
                assert_eq!(resource_id, id);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Listing and lookup
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn list_all_preserves_insertion_order() {
        let repo = seeded();
        repo.insert(profile("10", "Ten", "🔟")).await.unwrap();

        let ids: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|u| u.id().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "10"]);
    }

    #[tokio::test]
    async fn with_profiles_drops_duplicate_ids() {
        let repo = InMemoryUserRepository::with_profiles(vec![
            profile("1", "First", "1️⃣"),
            profile("1", "Second", "2️⃣"),
        ]);

        let users = repo.list_all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].full_name(), "First");
    }

    #[tokio::test]
    async fn find_by_id_returns_none_when_absent() {
        let repo = seeded();
        assert!(repo.find_by_id(&uid("404")).await.unwrap().is_none());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Insert
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn insert_then_find_round_trips() {
        let repo = InMemoryUserRepository::new();
        let input = profile("abc", "Ada Lovelace", "🧮");
        repo.insert(input.clone()).await.unwrap();

        let found = repo.find_by_id(&uid("abc")).await.unwrap().unwrap();
        assert_eq!(found, input);
    }

    #[tokio::test]
    async fn insert_duplicate_fails_and_leaves_store_unchanged() {
        let repo = seeded();
        let before = repo.list_all().await.unwrap();

        let err = repo
            .insert(profile("2", "Impostor", "🎭"))
            .await
            .unwrap_err();

        match err {
            DomainError::BusinessRule { rule_code, .. } => {
                assert_eq!(rule_code, "DUPLICATE_USER_ID")
            }
            other => panic!("expected BusinessRule, got {:?}", other),
        }
        assert_eq!(repo.list_all().await.unwrap(), before);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Replace and patch
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn replace_keeps_original_id() {
        let repo = seeded();
        let updated = repo
            .replace(&uid("1"), profile("999", "Johnny", "🤠"))
            .await
            .unwrap();

        assert_eq!(updated.id().as_str(), "1");
        assert!(repo.find_by_id(&uid("999")).await.unwrap().is_none());
        let stored = repo.find_by_id(&uid("1")).await.unwrap().unwrap();
        assert_eq!(stored.full_name(), "Johnny");
        assert_eq!(stored.emoji(), "🤠");
    }

    #[tokio::test]
    async fn patch_fields_updates_only_given_field() {
        let repo = seeded();
        let patch = ProfilePatch {
            full_name: Some("Jane Doe".to_string()),
            emoji: None,
        };
        let updated = repo.patch_fields(&uid("2"), &patch).await.unwrap();

        assert_eq!(updated.full_name(), "Jane Doe");
        assert_eq!(updated.emoji(), "🚀");
    }

    #[tokio::test]
    async fn patch_fields_with_empty_patch_leaves_profile_unchanged() {
        let repo = seeded();
        let before = repo.find_by_id(&uid("1")).await.unwrap();

        let err = repo
            .patch_fields(&uid("1"), &ProfilePatch::default())
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(repo.find_by_id(&uid("1")).await.unwrap(), before);
    }

    #[tokio::test]
    async fn patch_fields_with_blank_emoji_leaves_profile_unchanged() {
        let repo = seeded();
        let patch = ProfilePatch {
            full_name: None,
            emoji: Some(String::new()),
        };

        let err = repo.patch_fields(&uid("1"), &patch).await.unwrap_err();

        assert!(err.is_validation());
        let stored = repo.find_by_id(&uid("1")).await.unwrap().unwrap();
        assert_eq!(stored.emoji(), "😀");
    }

    #[tokio::test]
    async fn patch_fields_reports_not_found_before_validation() {
        let repo = seeded();
        let err = repo
            .patch_fields(&uid("404"), &ProfilePatch::default())
            .await
            .unwrap_err();
        assert_not_found_for(err, "404");
    }

    // ════════════════════════════════════════════════════════════════════════
    // Remove
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn remove_keeps_relative_order_of_the_rest() {
        let repo = seeded();
        repo.remove(&uid("2")).await.unwrap();

        let ids: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|u| u.id().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn repeated_remove_reports_not_found_each_time() {
        let repo = seeded();
        repo.remove(&uid("3")).await.unwrap();

        assert_not_found_for(repo.remove(&uid("3")).await.unwrap_err(), "3");
        assert_not_found_for(repo.remove(&uid("3")).await.unwrap_err(), "3");
        assert_eq!(repo.len().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn concurrent_inserts_of_same_id_admit_exactly_one() {
        let repo = InMemoryUserRepository::new();
        let mut tasks = Vec::new();
        for i in 0..16 {
            let repo = repo.clone();
            tasks.push(tokio::spawn(async move {
                repo.insert(profile("same", &format!("Writer {}", i), "✍️"))
                    .await
                    .is_ok()
            }));
        }

        let mut successes = 0;
        for task in tasks {
            if task.await.unwrap() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(repo.len().await.unwrap(), 1);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Properties
    // ════════════════════════════════════════════════════════════════════════

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
    }

    proptest! {
        #[test]
        fn unknown_ids_surface_not_found_with_the_id(id in "[a-z0-9]{4,12}") {
            let rt = runtime();
            rt.block_on(async {
                let repo = seeded();
                let missing = uid(&id);

                assert!(repo.find_by_id(&missing).await.unwrap().is_none());
                assert_not_found_for(repo.remove(&missing).await.unwrap_err(), &id);
                assert_not_found_for(
                    repo.replace(&missing, profile(&id, "Name", "🙂")).await.unwrap_err(),
                    &id,
                );
                let patch = ProfilePatch { full_name: Some("Name".to_string()), emoji: None };
                assert_not_found_for(repo.patch_fields(&missing, &patch).await.unwrap_err(), &id);
                assert_eq!(repo.len().await.unwrap(), 3);
            });
        }

        #[test]
        fn create_then_get_returns_equal_profile(
            id in "[A-Za-z0-9_-]{1,16}",
            name in "[A-Za-z][A-Za-z ]{0,20}",
            emoji in "[😀🚀🎸🧮]",
        ) {
            let rt = runtime();
            rt.block_on(async {
                let repo = InMemoryUserRepository::new();
                let input = profile(&id, &name, &emoji);
                repo.insert(input.clone()).await.unwrap();
                let found = repo.find_by_id(&uid(&id)).await.unwrap();
                assert_eq!(found, Some(input));
            });
        }
    }
}
