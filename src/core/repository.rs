use serde::{Deserialize, Serialize};

/// Toggleable repository settings as reported by the API.
///
/// A field is `None` when the API omitted it, which happens for settings the
/// token is not allowed to read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySettings {
    pub delete_branch_on_merge: Option<bool>,
    pub allow_auto_merge: Option<bool>,
    pub allow_squash_merge: Option<bool>,
    pub allow_merge_commit: Option<bool>,
    pub allow_rebase_merge: Option<bool>,
    pub has_issues: Option<bool>,
    pub has_wiki: Option<bool>,
    pub has_projects: Option<bool>,
}

/// One entry of the local snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub id: u64,
    #[serde(default)]
    pub settings: RepositorySettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_without_settings_deserializes() {
        let repo: Repository = serde_json::from_str(r#"{"name":"demo","id":7}"#).unwrap();
        assert_eq!(repo.name, "demo");
        assert_eq!(repo.id, 7);
        assert_eq!(repo.settings, RepositorySettings::default());
    }

    #[test]
    fn test_repository_serializes_name_first() {
        let repo = Repository {
            name: "demo".to_string(),
            id: 1,
            settings: RepositorySettings::default(),
        };
        let json = serde_json::to_string(&repo).unwrap();
        assert!(json.starts_with(r#"{"name":"demo","id":1,"settings":{"#));
    }
}
