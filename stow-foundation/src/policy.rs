// Stow - stow-foundation
// Module: Sorted-container policy engine
// SW-REQ-ID: REQ_POLICY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Policy-driven insert, update and upsert on sorted containers.
//!
//! [`sorted_insert`] locates the run of elements equal to a candidate with a
//! lower-bound search and then applies one [`InsertPolicy`]:
//!
//! | Policy | No match | Match `[first, last]` |
//! |---|---|---|
//! | `Any`, `InsertLast` | insert at lower bound | insert at `last + 1` |
//! | `InsertFirst` | insert at lower bound | insert at `first` |
//! | `UpdateFirst` | `NOT_FOUND` | overwrite `first` |
//! | `UpdateLast` | `NOT_FOUND` | overwrite `last` |
//! | `UpdateAll` | `NOT_FOUND` | overwrite `first..=last` |
//! | `UpsertFirst` | insert at lower bound | overwrite `first` |
//! | `UpsertLast` | insert at lower bound | overwrite `last` |
//! | `InsertUnique` | insert at lower bound | `EXISTS` |
//! | `InsertDuplicate` | `NOT_FOUND` | insert at `last + 1` |
//!
//! Every inserting branch fails `FULL` before touching the container when no
//! slot is free, even if a match exists. The container must already be sorted
//! under the comparator passed in; the engine does not check this.

use core::cmp::Ordering;
use core::fmt;

use stow_error::{Error, Result};

use crate::store::{lower_bound, Slots};

/// How [`sorted_insert`] resolves a candidate against existing matches.
///
/// The discriminants are stable and double as the raw tags accepted by
/// [`InsertPolicy::try_from`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InsertPolicy {
    /// Insert anywhere that keeps the container sorted (after equal elements).
    #[default]
    Any = 0,
    /// Insert before any equal elements.
    InsertFirst = 1,
    /// Insert after any equal elements.
    InsertLast = 2,
    /// Overwrite the first equal element.
    UpdateFirst = 3,
    /// Overwrite the last equal element.
    UpdateLast = 4,
    /// Overwrite every equal element.
    UpdateAll = 5,
    /// Overwrite the first equal element, or insert if there is none.
    UpsertFirst = 6,
    /// Overwrite the last equal element, or insert if there is none.
    UpsertLast = 7,
    /// Insert only if no equal element exists.
    InsertUnique = 8,
    /// Insert only if an equal element already exists.
    InsertDuplicate = 9,
}

impl InsertPolicy {
    /// Every policy in tag order.
    pub const ALL: [Self; 10] = [
        Self::Any,
        Self::InsertFirst,
        Self::InsertLast,
        Self::UpdateFirst,
        Self::UpdateLast,
        Self::UpdateAll,
        Self::UpsertFirst,
        Self::UpsertLast,
        Self::InsertUnique,
        Self::InsertDuplicate,
    ];

    /// Raw tag of this policy.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Short upper-case name, as used in trace output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::InsertFirst => "INSERT_FIRST",
            Self::InsertLast => "INSERT_LAST",
            Self::UpdateFirst => "UPDATE_FIRST",
            Self::UpdateLast => "UPDATE_LAST",
            Self::UpdateAll => "UPDATE_ALL",
            Self::UpsertFirst => "UPSERT_FIRST",
            Self::UpsertLast => "UPSERT_LAST",
            Self::InsertUnique => "INSERT_UNIQUE",
            Self::InsertDuplicate => "INSERT_DUPLICATE",
        }
    }

    /// Whether the policy adds an element when a match exists.
    #[must_use]
    pub const fn inserts_on_match(self) -> bool {
        matches!(
            self,
            Self::Any | Self::InsertFirst | Self::InsertLast | Self::InsertDuplicate
        )
    }

    /// Whether the policy adds an element when no match exists.
    #[must_use]
    pub const fn inserts_on_miss(self) -> bool {
        matches!(
            self,
            Self::Any
                | Self::InsertFirst
                | Self::InsertLast
                | Self::UpsertFirst
                | Self::UpsertLast
                | Self::InsertUnique
        )
    }
}

impl TryFrom<u8> for InsertPolicy {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or_else(|| Error::param("Unknown insertion policy tag"))
    }
}

impl From<InsertPolicy> for u8 {
    fn from(policy: InsertPolicy) -> Self {
        policy.as_u8()
    }
}

impl fmt::Display for InsertPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sorted container the policy engine can drive.
///
/// `Item` is what the comparator sees; `Value` is what the container stores
/// per slot. For value containers they coincide. For reference containers
/// `Value` is `&T` and `Item` is `T`.
pub trait SortedStore {
    /// Element view handed to the comparator.
    type Item: ?Sized;
    /// Stored slot value.
    type Value: Copy;

    /// Number of occupied slots.
    fn count(&self) -> usize;

    /// Total number of slots.
    fn capacity(&self) -> usize;

    /// Element at `index`. Callers guarantee `index < count()`.
    fn element(&self, index: usize) -> &Self::Item;

    /// View a candidate value the way elements are viewed.
    fn value_item(value: &Self::Value) -> &Self::Item;

    /// Shift `[index, count)` right by one and write `value` at `index`.
    ///
    /// # Errors
    ///
    /// `INDEX` if `index > count()`, `FULL` if no slot is free.
    fn insert_at(&mut self, index: usize, value: Self::Value) -> Result<()>;

    /// Overwrite the element at `index`.
    ///
    /// # Errors
    ///
    /// `INDEX` if `index >= count()`.
    fn replace_at(&mut self, index: usize, value: Self::Value) -> Result<()>;
}

/// Where a candidate falls in a sorted container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRegion {
    /// First index whose element is not less than the candidate.
    pub lower_bound: usize,
    /// Inclusive bounds of the run of equal elements, if any.
    pub matches:     Option<(usize, usize)>,
}

impl MatchRegion {
    /// First index whose element is greater than the candidate.
    #[must_use]
    pub fn upper_bound(&self) -> usize {
        match self.matches {
            Some((_, last)) => last + 1,
            None => self.lower_bound,
        }
    }

    /// Number of elements equal to the candidate.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.map_or(0, |(first, last)| last - first + 1)
    }
}

/// Occupied prefix of a [`SortedStore`] seen as searchable slots.
struct Occupied<'s, S: ?Sized>(&'s S);

impl<S: SortedStore + ?Sized> Slots for Occupied<'_, S> {
    type Item = S::Item;

    fn slot_count(&self) -> usize {
        self.0.count()
    }

    fn slot(&self, index: usize) -> &S::Item {
        self.0.element(index)
    }
}

/// Locate `candidate` in `store`.
///
/// The match run always starts at the lower bound, so `first` equals
/// `lower_bound` whenever `matches` is `Some`.
pub fn match_region<S, F>(store: &S, candidate: &S::Value, mut compare: F) -> MatchRegion
where
    S: SortedStore + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let key = S::value_item(candidate);
    let lb = lower_bound(&Occupied(store), key, &mut compare);
    let count = store.count();
    if lb >= count || compare(key, store.element(lb)) != Ordering::Equal {
        return MatchRegion { lower_bound: lb, matches: None };
    }

    let mut last = lb;
    while last + 1 < count && compare(key, store.element(last + 1)) == Ordering::Equal {
        last += 1;
    }
    MatchRegion { lower_bound: lb, matches: Some((lb, last)) }
}

/// Insert, update or upsert `candidate` into a sorted `store` under `policy`.
///
/// On success the container is still sorted under `compare`. On failure it
/// is untouched.
///
/// # Errors
///
/// - `FULL` when the policy needs a new slot and none is free
/// - `NOT_FOUND` for the update policies and `InsertDuplicate` without a match
/// - `EXISTS` for `InsertUnique` with a match
///
/// # Examples
///
/// ```
/// use stow_foundation::{InsertPolicy, StoreVec};
///
/// let mut slots = [0u32; 5];
/// let mut vec = StoreVec::new(&mut slots)?;
/// for v in [10, 20, 20, 30] {
///     vec.push(v)?;
/// }
/// vec.sorted_insert(25, |a, b| a.cmp(b), InsertPolicy::InsertUnique)?;
/// assert_eq!(vec.as_slice(), &[10, 20, 20, 25, 30]);
/// assert!(vec.sorted_insert(26, |a, b| a.cmp(b), InsertPolicy::Any).is_err());
/// # Ok::<(), stow_foundation::Error>(())
/// ```
pub fn sorted_insert<S, F>(
    store: &mut S,
    candidate: S::Value,
    compare: F,
    policy: InsertPolicy,
) -> Result<()>
where
    S: SortedStore + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    trace_scope!(crate::tracing::PolicyTrace::sorted_insert(
        policy.name(),
        store.count(),
        store.capacity()
    ));

    let region = match_region(&*store, &candidate, compare);
    let outcome = match (policy, region.matches) {
        (InsertPolicy::Any | InsertPolicy::InsertLast, _) => {
            insert_checked(store, region.upper_bound(), candidate)
        }
        (InsertPolicy::InsertFirst, _) => insert_checked(store, region.lower_bound, candidate),
        (
            InsertPolicy::UpsertFirst | InsertPolicy::UpsertLast | InsertPolicy::InsertUnique,
            None,
        ) => insert_checked(store, region.lower_bound, candidate),
        (
            InsertPolicy::UpdateFirst
            | InsertPolicy::UpdateLast
            | InsertPolicy::UpdateAll
            | InsertPolicy::InsertDuplicate,
            None,
        ) => Err(Error::not_found("No element matches the candidate")),
        (InsertPolicy::UpdateFirst | InsertPolicy::UpsertFirst, Some((first, _))) => {
            store.replace_at(first, candidate)
        }
        (InsertPolicy::UpdateLast | InsertPolicy::UpsertLast, Some((_, last))) => {
            store.replace_at(last, candidate)
        }
        (InsertPolicy::UpdateAll, Some((first, last))) => {
            (first..=last).try_for_each(|index| store.replace_at(index, candidate))
        }
        (InsertPolicy::InsertUnique, Some(_)) => {
            Err(Error::exists("An equal element is already present"))
        }
        (InsertPolicy::InsertDuplicate, Some((_, last))) => {
            insert_checked(store, last + 1, candidate)
        }
    };

    trace_event!(
        policy = policy.name(),
        lower_bound = region.lower_bound,
        upper_bound = region.upper_bound(),
        matched = region.match_count(),
        ok = outcome.is_ok(),
        "sorted_insert"
    );
    outcome
}

/// Capacity check ahead of any shifting.
fn insert_checked<S>(store: &mut S, index: usize, value: S::Value) -> Result<()>
where
    S: SortedStore + ?Sized,
{
    if store.count() >= store.capacity() {
        return Err(Error::full("No free slot for sorted insertion"));
    }
    store.insert_at(index, value)
}
