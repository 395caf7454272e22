use crate::error::Result;
use crate::events::EventLog;
use crate::registry::BookRegistry;
use crate::store::DataStore;

/// Passes `result` through, reporting a failure to the event log first.
pub fn logged<T, L: EventLog>(log: &L, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        log.error(&e.to_string());
    }
    result
}

/// Writes the whole registry back after a mutation.
///
/// On failure the in-memory registry keeps the change and the caller gets the
/// `PersistenceWrite` error, so it can tell the user that disk and memory differ.
pub fn persist<S: DataStore, L: EventLog>(
    store: &mut S,
    log: &L,
    registry: &BookRegistry,
) -> Result<()> {
    logged(log, store.save(registry))
}
