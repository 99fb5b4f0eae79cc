//! Application of an expanded sequence onto a settings store.

use crate::catalog::{Catalog, SourceLoader};
use crate::error::StyleError;
use crate::expand::StyleItem;
use crate::spec::Settings;

/// Applies an expanded sequence onto a store, one overlay at a time.
///
/// Each item resolves to a concrete settings mapping at apply time: a
/// catalog lookup for names, the loader for locators, the inline mapping
/// as given. Every key of an overlay overwrites the store's key, creating
/// it if absent. Last writer wins; no overlay ever removes a key.
///
/// # Errors
///
/// The same kinds as expansion. Lookups are validated again here because
/// external sources are loaded lazily, and a failure leaves the store with
/// the overlays applied so far (wrap the call in
/// [`scoped`](crate::scoped) when that must be undone).
pub fn apply(
    sequence: &[StyleItem],
    catalog: &Catalog,
    loader: &dyn SourceLoader,
    store: &mut Settings,
) -> Result<(), StyleError> {
    for item in sequence {
        match item {
            StyleItem::Inline(settings) => overlay(store, settings),
            StyleItem::Name(name) => match catalog.get(name) {
                Some(sheet) => overlay(store, sheet.settings()),
                None => {
                    let settings = loader.load(name)?;
                    overlay(store, &settings);
                }
            },
        }
    }
    Ok(())
}

fn overlay(store: &mut Settings, settings: &Settings) {
    for (key, value) in settings {
        store.insert(key.clone(), value.clone());
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn settings_strategy() -> impl Strategy<Value = Settings> {
        prop::collection::hash_map(
            "[a-z][a-z.]{0,11}",
            any::<i64>().prop_map(crate::spec::Value::from),
            0..8,
        )
    }

    struct NoLoader;

    impl SourceLoader for NoLoader {
        fn load(&self, source: &str) -> Result<Settings, StyleError> {
            Err(StyleError::NotFound {
                name: source.to_string(),
            })
        }
    }

    proptest! {
        #[test]
        fn inline_application_is_idempotent(
            initial in settings_strategy(),
            overlay in settings_strategy(),
        ) {
            let catalog = Catalog::new();
            let once_sequence = vec![StyleItem::Inline(overlay.clone())];
            let twice_sequence = vec![
                StyleItem::Inline(overlay.clone()),
                StyleItem::Inline(overlay),
            ];

            let mut once = initial.clone();
            apply(&once_sequence, &catalog, &NoLoader, &mut once).unwrap();

            let mut twice = initial;
            apply(&twice_sequence, &catalog, &NoLoader, &mut twice).unwrap();

            prop_assert_eq!(once, twice);
        }

        #[test]
        fn later_overlays_win_per_key(
            first in settings_strategy(),
            second in settings_strategy(),
        ) {
            let sequence = vec![
                StyleItem::Inline(first.clone()),
                StyleItem::Inline(second.clone()),
            ];
            let mut store = Settings::new();
            apply(&sequence, &Catalog::new(), &NoLoader, &mut store).unwrap();

            let mut expected: HashMap<String, crate::spec::Value> = first;
            expected.extend(second);
            prop_assert_eq!(store, expected);
        }
    }
}
