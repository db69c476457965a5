use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use listing::resolver::{FetchError, OverrideStore, RemoteSource, Resolver};
use listing::Dataset;
use pretty_assertions::assert_eq;

#[derive(Default)]
struct MemoryStore {
    slots: RefCell<HashMap<Dataset, String>>,
}

impl OverrideStore for MemoryStore {
    fn get(&self, dataset: Dataset) -> Option<String> {
        self.slots.borrow().get(&dataset).cloned()
    }
    fn set(&self, dataset: Dataset, raw: &str) {
        self.slots.borrow_mut().insert(dataset, raw.to_owned());
    }
    fn remove(&self, dataset: Dataset) {
        self.slots.borrow_mut().remove(&dataset);
    }
}

#[derive(Default)]
struct StaticRemote {
    bodies: HashMap<Dataset, Result<String, FetchError>>,
    fetches: Cell<usize>,
}

impl StaticRemote {
    fn with(mut self, dataset: Dataset, body: &str) -> Self {
        self.bodies.insert(dataset, Ok(body.to_owned()));
        self
    }

    fn failing(mut self, dataset: Dataset, error: FetchError) -> Self {
        self.bodies.insert(dataset, Err(error));
        self
    }
}

#[async_trait::async_trait(?Send)]
impl RemoteSource for StaticRemote {
    async fn fetch(&self, dataset: Dataset) -> Result<String, FetchError> {
        self.fetches.set(self.fetches.get() + 1);
        self.bodies
            .get(&dataset)
            .cloned()
            .unwrap_or(Err(FetchError::Status(404)))
    }
}

const REMOTE_DEMONS: &str = r#"[{"id": "bloodbath", "name": "Bloodbath", "placement": 1}]"#;

#[tokio::test]
async fn override_takes_precedence() {
    let store = MemoryStore::default();
    store.set(
        Dataset::Demons,
        r#"[{"id": "edited", "name": "Edited", "placement": 2, "listPoints": 50}]"#,
    );
    let remote = StaticRemote::default().with(Dataset::Demons, REMOTE_DEMONS);

    let resolver = Resolver::new(&store, &remote);
    let demons: Vec<common::Demon> = resolver.resolve(Dataset::Demons).await;

    assert_eq!(1, demons.len());
    assert_eq!("edited", demons[0].id);
    assert_eq!(Some(50), demons[0].list_points);
    assert_eq!(0, remote.fetches.get());
}

#[tokio::test]
#[tracing_test::traced_test]
async fn corrupt_override_falls_back_and_is_discarded() {
    let store = MemoryStore::default();
    store.set(Dataset::Demons, "{bad json");
    let remote = StaticRemote::default().with(Dataset::Demons, REMOTE_DEMONS);

    let resolver = Resolver::new(&store, &remote);
    let demons: Vec<common::Demon> = resolver.resolve(Dataset::Demons).await;

    assert_eq!(1, demons.len());
    assert_eq!("bloodbath", demons[0].id);
    assert_eq!(None, store.get(Dataset::Demons));
    assert_eq!(1, remote.fetches.get());
    assert!(logs_contain("Discarding corrupt override for demons"));

    // The corrupt slot is gone, so resolving again only hits the remote.
    let again: Vec<common::Demon> = resolver.resolve(Dataset::Demons).await;
    assert_eq!(demons, again);
    assert_eq!(2, remote.fetches.get());
}

#[tokio::test]
async fn fetch_failure_yields_empty() {
    let store = MemoryStore::default();
    let remote = StaticRemote::default().failing(Dataset::Demons, FetchError::Status(500));

    let resolver = Resolver::new(&store, &remote);
    let demons: Vec<common::Demon> = resolver.resolve(Dataset::Demons).await;

    assert_eq!(Vec::<common::Demon>::new(), demons);
}

#[tokio::test]
async fn unparseable_remote_body_yields_empty() {
    let store = MemoryStore::default();
    let remote = StaticRemote::default().with(Dataset::Demons, "<html>504</html>");

    let resolver = Resolver::new(&store, &remote);
    let demons: Vec<common::Demon> = resolver.resolve(Dataset::Demons).await;

    assert_eq!(Vec::<common::Demon>::new(), demons);
}

#[tokio::test]
async fn all_resolves_every_dataset() {
    let store = MemoryStore::default();
    let remote = StaticRemote::default()
        .with(Dataset::Demons, REMOTE_DEMONS)
        .with(
            Dataset::Players,
            r#"[{"id": "p1", "name": "Zoink", "rank": 1, "country": "US"}]"#,
        )
        .with(
            Dataset::Records,
            r#"[{"demonID": "bloodbath", "playerID": "p1", "youtube": "https://yt.example/v"}]"#,
        );

    let resolver = Resolver::new(&store, &remote);
    let data = resolver.all().await;

    assert_eq!(3, remote.fetches.get());
    assert_eq!("Bloodbath", data.demons[0].name);
    assert_eq!(Some("US".to_owned()), data.players[0].country);
    assert_eq!("bloodbath", data.records[0].demon_id);
    assert_eq!("p1", data.records[0].player_id);
}
