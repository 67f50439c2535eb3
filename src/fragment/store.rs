//! Thread-safe registry of fragment sets keyed by reference number.
//!
//! Producers feed parts in any order from any thread and consumers query the
//! grouped sets. Every operation runs under one store-wide lock;
//! parsing and decoding in [`add_raw`](FragmentStore::add_raw) happen before
//! the lock is taken. Entries are never evicted automatically; callers that
//! need expiry remove sets themselves.

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use log::{debug, warn};

use super::{FragmentSet, FragmentStatus};
use crate::{
    encoding::Encoding,
    error::UdhError,
    metrics,
    part::{MessagePart, Reference},
};

type Sets = HashMap<Reference, FragmentSet>;

/// Shared store of [`FragmentSet`]s.
///
/// Wrap in an [`Arc`](std::sync::Arc) to share between producers.
///
/// # Examples
///
/// ```
/// use sms_udh::{Encoding, FragmentStatus, FragmentStore};
/// let store = FragmentStore::new();
/// assert_eq!(
///     store.add_raw("050003A50202746865726521", Encoding::Gsm7),
///     Ok(FragmentStatus::Incomplete)
/// );
/// assert_eq!(
///     store.add_raw("050003A50201486920", Encoding::Gsm7),
///     Ok(FragmentStatus::Complete)
/// );
/// let mut set = store.get(&[0xa5]).expect("reference is known");
/// assert_eq!(set.concatenate_by_part(), "Hi there!");
/// ```
#[derive(Debug, Default)]
pub struct FragmentStore {
    sets: Mutex<Sets>,
}

impl FragmentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    // Every mutation completes before anything that could panic, so a
    // poisoned map is still consistent.
    fn with_sets<R>(&self, f: impl FnOnce(&mut Sets) -> R) -> R {
        let mut sets = self.sets.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut sets)
    }

    /// Insert `part` into the set for its reference, creating the set on
    /// first sight.
    ///
    /// Returns the completion state of that set after insertion.
    ///
    /// # Errors
    ///
    /// Returns [`UdhError::ReferenceMismatch`] if the stored set disagrees
    /// with its own key; the store is left unchanged.
    pub fn add_part(&self, part: MessagePart) -> Result<FragmentStatus, UdhError> {
        let reference = part.reference().clone();
        let outcome = self.with_sets(|sets| -> Result<_, UdhError> {
            let set = sets.entry(reference.clone()).or_default();
            let was_complete = set.is_complete();
            set.add(part)?;
            Ok((was_complete, set.status(), set.len()))
        });

        match outcome {
            Ok((was_complete, status, len)) => {
                debug!("stored part {len} for reference {reference}: {status:?}");
                metrics::inc_parts(metrics::PartOutcome::Accepted);
                if !was_complete && status == FragmentStatus::Complete {
                    metrics::inc_completed_sets();
                }
                Ok(status)
            }
            Err(err) => {
                warn!("rejected part for reference {reference}: {err}");
                metrics::inc_parts(metrics::PartOutcome::Rejected);
                Err(err)
            }
        }
    }

    /// Parse and decode a hex-encoded `short_message`, then store it.
    ///
    /// # Errors
    ///
    /// Returns any error from [`MessagePart::parse`] or
    /// [`add_part`](Self::add_part). Malformed input leaves the store
    /// unchanged.
    pub fn add_raw(&self, input: &str, encoding: Encoding) -> Result<FragmentStatus, UdhError> {
        match MessagePart::parse(input, encoding) {
            Ok(part) => self.add_part(part),
            Err(err) => {
                warn!("dropping malformed {encoding} part: {err}");
                metrics::inc_parts(metrics::PartOutcome::Rejected);
                Err(err)
            }
        }
    }

    /// Return a snapshot of the set for `reference`, sorting the stored set
    /// first.
    #[must_use]
    pub fn get(&self, reference: &[u8]) -> Option<FragmentSet> {
        self.with_sets(|sets| {
            sets.get_mut(reference).map(|set| {
                set.sort();
                set.clone()
            })
        })
    }

    /// Snapshot every stored set, in no particular order and without sorting.
    #[must_use]
    pub fn list_all(&self) -> Vec<FragmentSet> {
        self.with_sets(|sets| sets.values().cloned().collect())
    }

    /// Remove and return the set for `reference`.
    pub fn remove(&self, reference: &[u8]) -> Option<FragmentSet> {
        self.with_sets(|sets| sets.remove(reference))
    }

    /// Number of references currently tracked.
    #[must_use]
    pub fn len(&self) -> usize { self.with_sets(|sets| sets.len()) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.with_sets(|sets| sets.is_empty()) }
}
