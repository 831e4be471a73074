use super::config::StoreConfig;
use super::keys::KeyDerivation;
use super::sequence::IdSequence;
use crate::core::{ObjRef, Record, RecordWrapper, Result, StoreError};
use crate::query::{QueryOptions, comparator};
use crate::result::RecordingPager;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Slots in insertion order plus a key index into them.
struct Entries<R> {
    slots: BTreeMap<u64, RecordWrapper<R>>,
    index: HashMap<String, u64>,
    next_slot: u64,
}

impl<R> Entries<R> {
    fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
            index: HashMap::new(),
            next_slot: 0,
        }
    }

    fn insert(&mut self, key: String, wrapper: RecordWrapper<R>) {
        if let Some(slot) = self.index.get(&key) {
            self.slots.insert(*slot, wrapper);
            return;
        }

        let slot = self.next_slot;
        self.next_slot += 1;
        self.slots.insert(slot, wrapper);
        self.index.insert(key, slot);
    }

    fn get(&self, key: &str) -> Option<&RecordWrapper<R>> {
        self.index.get(key).and_then(|slot| self.slots.get(slot))
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut RecordWrapper<R>> {
        match self.index.get(key) {
            Some(slot) => self.slots.get_mut(slot),
            None => None,
        }
    }

    fn remove(&mut self, key: &str) -> Option<RecordWrapper<R>> {
        let slot = self.index.remove(key)?;
        self.slots.remove(&slot)
    }

    fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// In-memory, identifier-keyed record store.
///
/// Emulates a remote backend's object API: every operation is async and resolves
/// without suspending on I/O. Records live in wrappers keyed by identifier; a
/// wrapper exists exactly while its record is present.
///
/// Key derivation is deliberately asymmetric: `get` resolves references through
/// [`KeyDerivation::Recording`], `update` and `delete` through
/// [`KeyDerivation::Raw`].
pub struct RecordStore<R: Record> {
    entries: RwLock<Entries<R>>,
    ids: IdSequence,
    config: StoreConfig,
    read_keys: KeyDerivation,
    mutate_keys: KeyDerivation,
}

impl<R: Record> RecordStore<R> {
    /// Empty store drawing identifiers from the process-wide sequence
    pub fn new() -> Self {
        Self::with_parts(Vec::new(), StoreConfig::default(), IdSequence::shared())
    }

    /// Store preloaded with seed records, treated as already persisted.
    ///
    /// The seed is taken by value; the store owns its copy.
    pub fn from_seed<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = (String, RecordWrapper<R>)>,
    {
        Self::with_parts(seed, StoreConfig::default(), IdSequence::shared())
    }

    pub fn with_parts<I>(seed: I, config: StoreConfig, ids: IdSequence) -> Self
    where
        I: IntoIterator<Item = (String, RecordWrapper<R>)>,
    {
        let mut entries = Entries::new();
        for (key, wrapper) in seed {
            entries.insert(key, wrapper);
        }

        if !entries.is_empty() {
            info!(
                records = entries.len(),
                kind = %config.record_kind,
                "record store seeded"
            );
        }

        Self {
            entries: RwLock::new(entries),
            ids,
            read_keys: KeyDerivation::recording_with_prefix(config.recording_prefix.clone()),
            mutate_keys: KeyDerivation::Raw,
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Key derivation used by `get`
    pub fn read_keys(&self) -> &KeyDerivation {
        &self.read_keys
    }

    /// Key derivation used by `update` and `delete`
    pub fn mutate_keys(&self) -> &KeyDerivation {
        &self.mutate_keys
    }

    /// Store a new record under a freshly generated identifier.
    pub async fn create(&self, definition: R::Definition) -> R {
        let mut entries = self.entries.write().await;

        // Seeds may use the generated naming scheme; skip anything already taken.
        let identifier = loop {
            let candidate = format!("{}{}", self.config.id_prefix, self.ids.next_value());
            if !entries.contains(&candidate) {
                break candidate;
            }
        };

        let record = R::from_definition(identifier.clone(), definition);
        entries.insert(identifier.clone(), RecordWrapper::new(record.clone()));

        debug!(id = %identifier, "record created");
        record
    }

    /// Fetch the current value of the referenced record.
    pub async fn get(&self, reference: &ObjRef) -> Result<R> {
        let entries = self.entries.read().await;

        if entries.is_empty() {
            warn!(reference = %reference, "get on empty store");
            return Err(StoreError::not_found(format!(
                "No {} recordings",
                self.config.record_kind
            )));
        }

        let key = self.read_keys.resolve(reference);
        match entries.get(&key) {
            Some(wrapper) => {
                debug!(key = %key, "record found");
                Ok(wrapper.obj.clone())
            }
            None => {
                warn!(key = %key, "record not found");
                Err(self.missing(reference.value()))
            }
        }
    }

    /// List records, optionally ordered, windowed by limit and offset.
    ///
    /// Without an ordering key records come back in insertion order. Sorting is
    /// stable, so ties keep that order too.
    pub async fn list(&self, options: Option<&QueryOptions>) -> RecordingPager<R> {
        let options = options.cloned().unwrap_or_default();
        let (limit, offset) = options.window(self.config.default_limit);

        let entries = self.entries.read().await;
        if entries.is_empty() {
            return RecordingPager::empty(limit, offset);
        }

        let mut records: Vec<R> = entries
            .slots
            .values()
            .map(|wrapper| wrapper.obj.clone())
            .collect();
        drop(entries);

        if let Some(order_by) = options.order_by {
            records.sort_by(comparator::<R>(order_by));
        }

        debug!(
            total = records.len(),
            limit,
            offset,
            order_by = ?options.order_by,
            "records listed"
        );
        RecordingPager::new(records, limit, offset)
    }

    /// Replace an existing record verbatim. Never inserts.
    pub async fn update(&self, record: R) -> Result<R> {
        let key = self.mutate_keys.derive(record.identifier());
        let mut entries = self.entries.write().await;

        match entries.get_mut(&key) {
            Some(wrapper) => {
                wrapper.obj = record.clone();
                debug!(key = %key, "record updated");
                Ok(record)
            }
            None => {
                warn!(key = %key, "update of missing record");
                Err(self.missing(record.identifier()))
            }
        }
    }

    /// Remove the referenced record.
    pub async fn delete(&self, reference: &ObjRef) -> Result<()> {
        let key = self.mutate_keys.resolve(reference);
        let mut entries = self.entries.write().await;

        match entries.remove(&key) {
            Some(_) => {
                debug!(key = %key, "record deleted");
                Ok(())
            }
            None => {
                warn!(key = %key, "delete of missing record");
                Err(self.missing(reference.value()))
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Whether a wrapper exists under this exact storage key
    pub async fn contains_key(&self, key: &str) -> bool {
        self.entries.read().await.contains(key)
    }

    fn missing(&self, id: &str) -> StoreError {
        StoreError::not_found(format!("No {} with ID: {}", self.config.record_kind, id))
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
