/// Key derivation tests
///
/// Reads resolve references to recording keys (`i_` + normalized identifier),
/// while update and delete use the raw identifier. These tests pin down that
/// asymmetry.
use insightstore::{
    IdSequence, Insight, InsightDefinition, KeyDerivation, ObjRef, RecordStore, RecordWrapper,
    StoreConfig,
};

fn store(seed: Vec<(&str, Insight)>) -> RecordStore<Insight> {
    let seed = seed
        .into_iter()
        .map(|(key, insight)| (key.to_string(), RecordWrapper::new(insight)));
    RecordStore::with_parts(seed, StoreConfig::default(), IdSequence::new())
}

#[tokio::test]
async fn test_store_exposes_both_derivations() {
    let store = store(Vec::new());
    assert_eq!(store.read_keys(), &KeyDerivation::recording());
    assert_eq!(store.mutate_keys(), &KeyDerivation::Raw);
}

#[tokio::test]
async fn test_update_uses_raw_identifier() {
    // Seeded under its recording key only: reads work, updates do not.
    let store = store(vec![("i_rev", Insight::new("rev", "Revenue"))]);

    assert!(store.get(&ObjRef::identifier("rev")).await.is_ok());

    let err = store.update(Insight::new("rev", "Changed")).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(store.get(&ObjRef::identifier("rev")).await.unwrap().title, "Revenue");
}

#[tokio::test]
async fn test_delete_uses_raw_identifier() {
    let store = store(vec![("i_rev", Insight::new("rev", "Revenue"))]);

    assert!(store.delete(&ObjRef::identifier("rev")).await.is_err());
    assert!(store.contains_key("i_rev").await);

    store.delete(&ObjRef::locator("i_rev")).await.unwrap();
    assert!(!store.contains_key("i_rev").await);
}

#[tokio::test]
async fn test_created_records_invisible_to_get() {
    let store = store(vec![("i_seed", Insight::new("seed", "Seed"))]);

    let created = store.create(InsightDefinition::new("Ad hoc")).await;
    assert!(store.contains_key(&created.identifier).await);

    let err = store
        .get(&ObjRef::identifier(created.identifier.clone()))
        .await
        .unwrap_err();
    assert_eq!(err.message(), format!("No insight with ID: {}", created.identifier));

    let renamed = Insight {
        title: "Renamed".to_string(),
        ..created.clone()
    };
    store.update(renamed).await.unwrap();
    store
        .delete(&ObjRef::identifier(created.identifier))
        .await
        .unwrap();
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_custom_recording_prefix() {
    let seed = vec![(
        "dash_q1_sales".to_string(),
        RecordWrapper::new(Insight::new("q1.sales", "Q1")),
    )];
    let store: RecordStore<Insight> = RecordStore::with_parts(
        seed,
        StoreConfig::new().recording_prefix("dash_"),
        IdSequence::new(),
    );

    let insight = store.get(&ObjRef::identifier("q1.sales")).await.unwrap();
    assert_eq!(insight.title, "Q1");
}
