//! Scoped style application with guaranteed restoration.

use crate::apply::apply;
use crate::catalog::{Catalog, SourceLoader};
use crate::error::StyleError;
use crate::expand::expand;
use crate::spec::{Settings, StyleSpec};

/// Applies a specification temporarily, restoring the store on every exit
/// path.
///
/// The store is snapshotted first. With `reset_to` set, the store contents
/// are replaced by that baseline before the overlay goes on. The body runs
/// with the overlaid store; once it returns (or unwinds), the snapshot is
/// put back, exactly once. The net effect on the store is always zero,
/// whether expansion fails, application fails midway, or the body itself
/// fails. Errors pass through unchanged; only the side effect is undone.
///
/// Single-threaded by contract: at most one application may be in flight
/// against a store, and concurrent calls against the same store must be
/// serialized by the caller.
///
/// # Example
///
/// ```rust
/// use stylelib::{scoped, Catalog, FileLoader, Settings, StyleSheet, StyleSpec, Value};
///
/// let mut catalog = Catalog::new();
/// catalog.insert("dark", StyleSheet::new().set("palette", "dark"));
///
/// let mut store = Settings::new();
/// store.insert("palette".to_string(), Value::from("light"));
///
/// let seen = scoped(
///     &StyleSpec::from("dark"),
///     &catalog,
///     &FileLoader,
///     &mut store,
///     None,
///     |store| store["palette"].clone(),
/// )
/// .unwrap();
///
/// assert_eq!(seen, Value::from("dark"));
/// assert_eq!(store["palette"], Value::from("light"));
/// ```
pub fn scoped<R, F>(
    spec: &StyleSpec,
    catalog: &Catalog,
    loader: &dyn SourceLoader,
    store: &mut Settings,
    reset_to: Option<&Settings>,
    body: F,
) -> Result<R, StyleError>
where
    F: FnOnce(&mut Settings) -> R,
{
    let mut guard = RestoreGuard::new(store);
    if let Some(baseline) = reset_to {
        guard.store().clone_from(baseline);
    }
    let sequence = expand(spec, catalog, loader)?;
    apply(&sequence, catalog, loader, guard.store())?;
    Ok(body(guard.store()))
}

/// Puts a snapshot back into the store when dropped, so restoration also
/// covers unwinding out of the body.
struct RestoreGuard<'a> {
    store: &'a mut Settings,
    snapshot: Option<Settings>,
}

impl<'a> RestoreGuard<'a> {
    fn new(store: &'a mut Settings) -> Self {
        let snapshot = store.clone();
        Self {
            store,
            snapshot: Some(snapshot),
        }
    }

    fn store(&mut self) -> &mut Settings {
        self.store
    }
}

impl Drop for RestoreGuard<'_> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            *self.store = snapshot;
        }
    }
}
