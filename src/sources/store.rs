use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// The two configured source locations. Unset keys are omitted when
/// serialized so `GET /urls` mirrors exactly what was saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs_url: Option<String>,
}

impl SourceUrls {
    /// Merge these values over a base, key by key. A key present here wins;
    /// a key absent here keeps the base value.
    pub fn merge_over(self, base: &SourceUrls) -> SourceUrls {
        SourceUrls {
            users_url: self.users_url.or_else(|| base.users_url.clone()),
            logs_url: self.logs_url.or_else(|| base.logs_url.clone()),
        }
    }
}

/// Owned store for the saved source URLs, shared across requests.
#[derive(Debug, Default)]
pub struct SourceStore {
    inner: RwLock<SourceUrls>,
}

impl SourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the currently saved URLs.
    pub fn get(&self) -> SourceUrls {
        self.inner.read().clone()
    }

    /// Apply a partial update: each key present in `update` replaces the
    /// saved value. Returns the resulting saved URLs.
    pub fn update(&self, update: SourceUrls) -> SourceUrls {
        let mut saved = self.inner.write();
        if let Some(users_url) = update.users_url {
            saved.users_url = Some(users_url);
        }
        if let Some(logs_url) = update.logs_url {
            saved.logs_url = Some(logs_url);
        }
        saved.clone()
    }
}
