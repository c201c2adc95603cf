//! # AcademicHub Binary
//!
//! Assembles config, logging, the configured storage backend and the data
//! layer, seeds demonstration data on first start, and logs a short
//! catalogue summary.

mod seed;

use ah_core::{PersistentStore, SearchCriteria, SortBy, User};
use ah_storage_memory::MemoryKeyValueStore;
use configs::{AppConfig, LoggingConfig, StorageBackend, StorageConfig};
use tracing_subscriber::EnvFilter;

// Feature-gated backend
#[cfg(feature = "storage-local")]
use ah_storage_local::LocalKeyValueStore;

fn init_tracing(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if cfg.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn open_store(cfg: &StorageConfig) -> anyhow::Result<PersistentStore> {
    let store = match cfg.backend {
        StorageBackend::Memory => PersistentStore::new(MemoryKeyValueStore::new()),
        #[cfg(feature = "storage-local")]
        StorageBackend::Local => PersistentStore::new(LocalKeyValueStore::open(&cfg.root)?),
        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => anyhow::bail!("built without the storage-local feature"),
    };
    Ok(store.with_key_prefix(cfg.key_prefix.clone()))
}

fn report(store: &PersistentStore) {
    let users = store.get_all::<User>().len();
    let newest = store.search_resources(&SearchCriteria::default());
    tracing::info!(users, resources = newest.len(), "catalogue loaded");

    for (label, sort_by) in [("top rated", SortBy::Rating), ("most downloaded", SortBy::Downloads)] {
        for hit in store.search_resources(&SearchCriteria::default().sort_by(sort_by)).iter().take(3) {
            tracing::info!(
                list = label,
                title = %hit.resource.title,
                avg_rating = hit.avg_rating,
                reviews = hit.review_count,
                downloads = hit.resource.downloads,
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cfg = AppConfig::load()?;
    init_tracing(&cfg.logging);

    let store = open_store(&cfg.storage)?;
    tracing::info!(backend = ?cfg.storage.backend, "AcademicHub data layer ready");

    if cfg.seed.enabled {
        seed::seed_demo_data(&store);
    }
    report(&store);
    Ok(())
}
