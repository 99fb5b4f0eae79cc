//! Expansion of a style specification into a flat application sequence.
//!
//! Expansion turns a nested, self-referential [`StyleSpec`] into the flat,
//! ordered list of overlays to apply. A sheet that declares includes has
//! them spliced in immediately after itself, so an including style precedes
//! the styles it builds on in the emitted order and the later entries win
//! under the applier's left-to-right, last-write-wins fold.
//!
//! The visited set gates only the catalog lookup, never list membership:
//! a name queued by several parents keeps every queued position but is
//! resolved once. Given a fixed catalog and input, the output order is
//! deterministic and finite; an include chain that loops back onto itself
//! is reported as [`StyleError::Cycle`] instead of expanding forever.

use std::collections::HashSet;

use crate::catalog::{Catalog, SourceLoader};
use crate::error::StyleError;
use crate::spec::{Settings, StyleSpec};

/// One resolved entry of an expanded sequence: a single overlay to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleItem {
    /// A catalog style name, or an external locator; resolved again at
    /// apply time.
    Name(String),
    /// An inline overlay, used as given.
    Inline(Settings),
}

/// A queued entry together with the chain of names whose includes put it
/// on the list. The chain is what makes a cycle detectable before the
/// visited set would silently mask it.
struct Queued {
    item: StyleItem,
    chain: Vec<String>,
}

/// Expands a specification into its flat, ordered application sequence.
///
/// Names must be catalog entries or resolvable through `loader`;
/// otherwise expansion fails with [`StyleError::NotFound`] naming the
/// offender. External sources are only probed here and are read again at
/// apply time.
///
/// # Errors
///
/// [`StyleError::NotFound`] for an unresolvable name,
/// [`StyleError::Cycle`] for an include chain that loops back on itself,
/// and the loader's read/parse errors for a source that exists but is
/// unusable.
pub fn expand(
    spec: &StyleSpec,
    catalog: &Catalog,
    loader: &dyn SourceLoader,
) -> Result<Vec<StyleItem>, StyleError> {
    let mut working = queue(spec, &[]);
    let mut visited: HashSet<String> = HashSet::new();

    loop {
        let mut spliced = false;
        let mut index = 0;
        while index < working.len() {
            let name = match &working[index].item {
                StyleItem::Name(name) => name.clone(),
                StyleItem::Inline(_) => {
                    index += 1;
                    continue;
                }
            };

            if working[index].chain.iter().any(|ancestor| *ancestor == name) {
                let mut path = working[index].chain.clone();
                path.push(name);
                return Err(StyleError::Cycle { path });
            }

            if visited.insert(name.clone()) {
                match catalog.get(&name) {
                    Some(sheet) => {
                        if let Some(includes) = sheet.includes() {
                            let mut chain = working[index].chain.clone();
                            chain.push(name);
                            let nested = queue(includes, &chain);
                            if !nested.is_empty() {
                                working.splice(index + 1..index + 1, nested);
                                spliced = true;
                            }
                        }
                    }
                    // Not a catalog style: the locator must at least load.
                    // Its settings are read again when the sequence is
                    // applied.
                    None => {
                        loader.load(&name)?;
                    }
                }
            }
            index += 1;
        }
        if !spliced {
            break;
        }
    }

    Ok(working.into_iter().map(|queued| queued.item).collect())
}

/// Normalizes a spec into a flat run of queued items, dissolving nested
/// sequences.
fn queue(spec: &StyleSpec, chain: &[String]) -> Vec<Queued> {
    match spec {
        StyleSpec::Name(name) => vec![Queued {
            item: StyleItem::Name(name.clone()),
            chain: chain.to_vec(),
        }],
        StyleSpec::Inline(settings) => vec![Queued {
            item: StyleItem::Inline(settings.clone()),
            chain: chain.to_vec(),
        }],
        StyleSpec::Sequence(specs) => specs.iter().flat_map(|spec| queue(spec, chain)).collect(),
    }
}
