//! In-memory [`ObjectStore`] for tests.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use qs_core::{ObjectUri, ProcessError};

use crate::{ListedObject, Location, ObjectStore, StoreError};

/// Store verbs, used to record calls and inject failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Copy,
    Move,
}

#[derive(Debug, Default)]
struct State {
    objects: BTreeMap<ObjectUri, Vec<u8>>,
    calls: Vec<Operation>,
    failing: Vec<Operation>,
}

/// Objects keyed by URI. Local paths are real files.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with `(uri, contents)` pairs.
    #[must_use]
    pub fn with_objects<'a>(objects: impl IntoIterator<Item = (ObjectUri, &'a [u8])>) -> Self {
        let store = Self::new();
        for (uri, body) in objects {
            store.put(uri, body);
        }
        store
    }

    pub fn put(&self, uri: ObjectUri, body: &[u8]) {
        self.lock().objects.insert(uri, body.to_vec());
    }

    #[must_use]
    pub fn get(&self, uri: &ObjectUri) -> Option<Vec<u8>> {
        self.lock().objects.get(uri).cloned()
    }

    #[must_use]
    pub fn contains(&self, uri: &ObjectUri) -> bool {
        self.lock().objects.contains_key(uri)
    }

    /// Every call made so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<Operation> {
        self.lock().calls.clone()
    }

    /// Make every future call of `operation` fail like a CLI error.
    pub fn fail_on(&self, operation: Operation) {
        self.lock().failing.push(operation);
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, operation: Operation) -> Result<MutexGuard<'_, State>, StoreError> {
        let mut state = self.lock();
        state.calls.push(operation);
        if state.failing.contains(&operation) {
            return Err(StoreError::Process(ProcessError::Failed {
                program: "memory-store".to_string(),
                status: Some(1),
                stderr: format!("injected {operation:?} failure"),
            }));
        }
        Ok(state)
    }
}

impl ObjectStore for MemoryStore {
    fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<ListedObject>, StoreError> {
        let state = self.begin(Operation::List)?;
        Ok(state
            .objects
            .iter()
            .filter(|(uri, _)| uri.bucket == bucket && uri.key.starts_with(prefix))
            .map(|(uri, body)| ListedObject {
                key: uri.key.clone(),
                size: u64::try_from(body.len()).ok(),
            })
            .collect())
    }

    fn copy(&self, source: &Location, destination: &Location) -> Result<(), StoreError> {
        let mut state = self.begin(Operation::Copy)?;

        let body = match source {
            Location::Local(path) => std::fs::read(path)?,
            Location::Remote(uri) => state
                .objects
                .get(uri)
                .cloned()
                .ok_or_else(|| StoreError::NotFound(uri.to_string()))?,
        };

        match destination {
            Location::Local(path) => std::fs::write(path, body)?,
            Location::Remote(uri) => {
                state.objects.insert(uri.clone(), body);
            }
        }
        Ok(())
    }

    fn move_object(&self, source: &ObjectUri, destination: &ObjectUri) -> Result<(), StoreError> {
        let mut state = self.begin(Operation::Move)?;
        let body = state
            .objects
            .remove(source)
            .ok_or_else(|| StoreError::NotFound(source.to_string()))?;
        state.objects.insert(destination.clone(), body);
        Ok(())
    }
}
