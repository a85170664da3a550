//! Sample profiles used to seed a fresh store.

use crate::domain::foundation::DomainError;

use super::UserProfile;

const SAMPLE_USERS: [(&str, &str, &str); 3] = [
    ("1", "John Doe", "😀"),
    ("2", "Jane Smith", "🚀"),
    ("3", "Robert Johnson", "🎸"),
];

/// Returns the sample profiles in their listing order.
pub fn sample_profiles() -> Result<Vec<UserProfile>, DomainError> {
    SAMPLE_USERS
        .iter()
        .map(|(id, name, emoji)| UserProfile::new(*id, *name, *emoji))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_profiles_are_valid_and_ordered() {
        let profiles = sample_profiles().unwrap();
        let ids: Vec<_> = profiles.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
