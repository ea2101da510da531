use serde_json::{Map, Value};

/// A repository setting that `alter` can switch on or off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    /// Word used on the command line, e.g. `auto_delete_head`
    pub subcommand: &'static str,
    /// Field name in the repository API payload
    pub field: &'static str,
    pub description: &'static str,
}

impl Setting {
    /// PATCH body that sets this field.
    pub fn body(&self, enabled: bool) -> Value {
        let mut body = Map::new();
        body.insert(self.field.to_string(), Value::Bool(enabled));
        Value::Object(body)
    }
}

pub struct SettingRegistry {
    settings: Vec<Setting>,
}

impl SettingRegistry {
    pub fn new(settings: Vec<Setting>) -> Self {
        Self { settings }
    }

    pub fn find(&self, subcommand: &str) -> Option<&Setting> {
        self.settings.iter().find(|s| s.subcommand == subcommand)
    }

    pub fn all(&self) -> &[Setting] {
        &self.settings
    }
}

pub fn default_registry() -> SettingRegistry {
    let settings = vec![
        Setting {
            subcommand: "auto_delete_head",
            field: "delete_branch_on_merge",
            description: "Delete head branches after pull requests are merged",
        },
        Setting {
            subcommand: "auto_merge",
            field: "allow_auto_merge",
            description: "Allow pull requests to be merged automatically",
        },
        Setting {
            subcommand: "squash_merge",
            field: "allow_squash_merge",
            description: "Allow squash-merging pull requests",
        },
        Setting {
            subcommand: "merge_commit",
            field: "allow_merge_commit",
            description: "Allow merging pull requests with a merge commit",
        },
        Setting {
            subcommand: "rebase_merge",
            field: "allow_rebase_merge",
            description: "Allow rebase-merging pull requests",
        },
        Setting {
            subcommand: "issues",
            field: "has_issues",
            description: "Enable the issues tab",
        },
        Setting {
            subcommand: "wiki",
            field: "has_wiki",
            description: "Enable the wiki",
        },
        Setting {
            subcommand: "projects",
            field: "has_projects",
            description: "Enable projects",
        },
    ];
    SettingRegistry::new(settings)
}
