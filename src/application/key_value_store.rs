// Store trait for durable layout persistence
use async_trait::async_trait;

/// Key holding the JSON array of section ids.
pub const SECTION_ORDER_KEY: &str = "dashboard-section-order";

/// Key holding the JSON object of section id to visibility flag.
pub const SECTION_VISIBILITY_KEY: &str = "dashboard-section-visibility";

/// String-to-string storage that outlives the process.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key was never written or was removed
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Remove a key; removing a missing key succeeds
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}
