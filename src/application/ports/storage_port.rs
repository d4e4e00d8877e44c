use async_trait::async_trait;

#[async_trait]
pub trait StoragePort: Send + Sync {
    // Writes `bytes` under `filename` (resolving name collisions) and
    // returns the path the content can be read back from.
    async fn store(&self, filename: &str, bytes: &[u8]) -> anyhow::Result<String>;

    async fn read(&self, path: &str) -> anyhow::Result<Vec<u8>>;

    // A path that no longer exists is not an error; callers treat removal
    // as best-effort and log other failures.
    async fn delete(&self, path: &str) -> anyhow::Result<()>;
}
