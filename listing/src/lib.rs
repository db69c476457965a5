pub mod admin;
pub mod escape;
pub mod html;
pub mod resolver;
pub mod view;

/// Prefix for all browser-local override keys, so the site's slots cannot
/// collide with unrelated data stored under the same origin.
pub const STORAGE_PREFIX: &str = "demonlist";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Demons,
    Players,
    Records,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::Demons, Dataset::Players, Dataset::Records];

    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Demons => "demons",
            Dataset::Players => "players",
            Dataset::Records => "records",
        }
    }

    /// Key of this dataset's slot in the local override store.
    pub fn storage_key(&self) -> String {
        format!("{}_{}", STORAGE_PREFIX, self.name())
    }

    /// Path of the static resource backing this dataset.
    pub fn static_path(&self) -> String {
        format!("data/{}.json", self.name())
    }

    pub fn export_filename(&self) -> String {
        format!("{}.json", self.name())
    }
}

/// Duration in whole seconds, rendered as `m:ss`.
pub fn format_length(total_seconds: u64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
