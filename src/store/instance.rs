use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, info};

use super::seed::SEED_EXERCISES;
use super::{SqliteStore, Store};
use crate::error::{Error, Result};

static STORE: OnceLock<SqliteStore> = OnceLock::new();

/// Initializes the process-wide store handle.
///
/// Call once at process start, before any use of [`instance`]. The first
/// call detects whether the database file exists, creates the containing
/// directory tree if not, opens the connection with foreign keys enforced,
/// runs the schema batch, and on a fresh file seeds the exercise catalog.
/// Later calls return the already-initialized handle and ignore `path`.
///
/// A failure at any bootstrap step returns [`Error::Bootstrap`]; nothing
/// can work without a storage handle, so callers are expected to treat it
/// as fatal.
pub fn init<P: AsRef<Path>>(path: P) -> Result<&'static SqliteStore> {
    if let Some(store) = STORE.get() {
        return Ok(store);
    }

    let store = bootstrap(path.as_ref())?;
    Ok(STORE.get_or_init(|| store))
}

/// Returns the process-wide store handle.
///
/// Panics if [`init`] has not completed successfully; initialization order
/// is the caller's contract.
pub fn instance() -> &'static SqliteStore {
    STORE
        .get()
        .expect("store not initialized; call store::init first")
}

fn bootstrap(path: &Path) -> Result<SqliteStore> {
    let first_run = !path.exists();
    if first_run {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| {
                Error::Bootstrap(format!("cannot create {}: {}", dir.display(), e))
            })?;
        }
    }

    let store = SqliteStore::new(path)
        .map_err(|e| Error::Bootstrap(format!("cannot open {}: {}", path.display(), e)))?;
    store
        .initialize()
        .map_err(|e| Error::Bootstrap(format!("schema migration failed: {}", e)))?;

    if first_run {
        debug!("first run, seeding exercise catalog");
        store
            .seed(SEED_EXERCISES)
            .map_err(|e| Error::Bootstrap(format!("catalog seeding failed: {}", e)))?;
        info!("created training database at {}", path.display());
    }

    Ok(store)
}
