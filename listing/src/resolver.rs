//! Resolves named datasets, preferring a local override over the static
//! remote resource.
//!
//! The storage and fetch sides are injected so that pages and tests can run
//! the same resolution logic against the browser or against in-memory
//! doubles.

use serde::de::DeserializeOwned;

use crate::Dataset;

/// Key-value slots holding raw JSON text per dataset.
///
/// Reads and writes are synchronous, mirroring the browser storage API. A
/// failing write is the implementation's problem to report; the resolver
/// only ever reads and removes.
pub trait OverrideStore {
    fn get(&self, dataset: Dataset) -> Option<String>;
    fn set(&self, dataset: Dataset, raw: &str);
    fn remove(&self, dataset: Dataset);
}

impl<S> OverrideStore for &S
where
    S: OverrideStore,
{
    fn get(&self, dataset: Dataset) -> Option<String> {
        S::get(self, dataset)
    }
    fn set(&self, dataset: Dataset, raw: &str) {
        S::set(self, dataset, raw)
    }
    fn remove(&self, dataset: Dataset) {
        S::remove(self, dataset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response.
    Request(String),
    /// The response carried a non-success status code.
    Status(u16),
}

impl core::fmt::Display for FetchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Request(msg) => write!(f, "request failed: {}", msg),
            Self::Status(code) => write!(f, "unexpected status {}", code),
        }
    }
}

#[async_trait::async_trait(?Send)]
pub trait RemoteSource {
    async fn fetch(&self, dataset: Dataset) -> Result<String, FetchError>;
}

#[async_trait::async_trait(?Send)]
impl<R> RemoteSource for &R
where
    R: RemoteSource,
{
    async fn fetch(&self, dataset: Dataset) -> Result<String, FetchError> {
        R::fetch(self, dataset).await
    }
}

/// All three datasets, as consumed by pages that need more than one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListData {
    pub demons: Vec<common::Demon>,
    pub players: Vec<common::Player>,
    pub records: Vec<common::Record>,
}

pub struct Resolver<S, R> {
    store: S,
    remote: R,
}

impl<S, R> Resolver<S, R>
where
    S: OverrideStore,
    R: RemoteSource,
{
    pub fn new(store: S, remote: R) -> Self {
        Self { store, remote }
    }

    /// Resolves one dataset.
    ///
    /// An override that parses wins outright. An override that no longer
    /// parses is discarded, so the next resolution goes straight to the
    /// remote. A remote that cannot be fetched or parsed yields an empty
    /// dataset; this never returns an error.
    pub async fn resolve<T>(&self, dataset: Dataset) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        if let Some(raw) = self.store.get(dataset) {
            match serde_json::from_str(&raw) {
                Ok(parsed) => return parsed,
                Err(e) => {
                    tracing::warn!("Discarding corrupt override for {}: {}", dataset.name(), e);
                    self.store.remove(dataset);
                }
            }
        }

        let body = match self.remote.fetch(dataset).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to fetch {}: {}", dataset.static_path(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::error!("Fetched {} is not valid JSON: {}", dataset.static_path(), e);
                Vec::new()
            }
        }
    }

    pub async fn demons(&self) -> Vec<common::Demon> {
        self.resolve(Dataset::Demons).await
    }

    pub async fn players(&self) -> Vec<common::Player> {
        self.resolve(Dataset::Players).await
    }

    pub async fn records(&self) -> Vec<common::Record> {
        self.resolve(Dataset::Records).await
    }

    pub async fn all(&self) -> ListData {
        ListData {
            demons: self.demons().await,
            players: self.players().await,
            records: self.records().await,
        }
    }
}
