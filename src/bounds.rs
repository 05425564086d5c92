// SPDX-License-Identifier: Apache-2.0

//! # Boundary wrappers
//!
//! Lower-bound, upper-bound and membership entry points built on
//! [`fragment_search`]. Two flavors are provided:
//!
//! - [`QarySearch`] carries explicit [`SearchParameters`], fixed when the
//!   searcher is built.
//! - Free functions (`lower_bound::<Q>`, `upper_bound_in::<Q>`, ...) read the
//!   process-wide default threshold for `Q` on every call.
//!
//! The `*_in` / `*_range` variants take a random-access sequence plus explicit
//! `begin`/`end` positions and return a position inside `[begin, end]`. The
//! slice variants search the whole slice and return an index.
//!
//! ## Ordering
//! Wrappers use `PartialOrd`. Lower bound probes `element < query`, upper bound
//! probes `element <= query`. Elements that are unordered with the query
//! (e.g. NaN) make the result unspecified, like any unsorted input.

use log::trace;

use crate::params::{ArityCheck, SearchParameters};
use crate::range::RandomAccess;
use crate::search::fragment_search;

/// Q-ary searcher with a fixed linear threshold.
///
/// # Examples
/// ```rust
/// use qary::QuaternarySearch;
///
/// let a = [3, 3, 3, 7, 7, 7, 7, 12, 12, 16, 16, 16, 16];
/// let searcher = QuaternarySearch::new();
/// assert_eq!(searcher.lower_bound(&a, &7), 3);
/// assert_eq!(searcher.upper_bound(&a, &7), 7);
/// assert!(searcher.contains(&a, &12));
/// assert!(!searcher.contains(&a, &8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QarySearch<const Q: usize> {
    params: SearchParameters,
}

/// Two fragments per step: binary search finished by a linear scan.
pub type BinarySearch = QarySearch<2>;
pub type TernarySearch = QarySearch<3>;
pub type QuaternarySearch = QarySearch<4>;
pub type QuinarySearch = QarySearch<5>;
pub type SenarySearch = QarySearch<6>;

impl<const Q: usize> Default for QarySearch<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const Q: usize> QarySearch<Q> {
    /// Number of fragments per narrowing step.
    pub const ARITY: usize = Q;

    /// Searcher using the current process-wide threshold for `Q`.
    #[inline]
    pub fn new() -> Self {
        Self::with_parameters(SearchParameters::for_arity::<Q>())
    }

    #[inline]
    pub fn with_threshold(to_linear_threshold: usize) -> Self {
        Self::with_parameters(SearchParameters::new(to_linear_threshold))
    }

    #[inline]
    pub fn with_parameters(params: SearchParameters) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = ArityCheck::<Q>::SUPPORTED;
        Self { params }
    }

    #[inline]
    pub fn parameters(&self) -> &SearchParameters {
        &self.params
    }

    // =========================================================================
    //  POSITIONAL ENTRY POINTS
    // =========================================================================

    /// First position in `[begin, end)` where `pred(element, query)` fails,
    /// or `end`.
    #[inline]
    pub fn search_range<R, V, P>(&self, range: &R, begin: usize, end: usize, query: &V, pred: P) -> usize
    where
        R: RandomAccess + ?Sized,
        V: ?Sized,
        P: FnMut(&R::Item, &V) -> bool,
    {
        trace!(
            "{}-ARY SEARCH DISPATCH: begin={}, end={}, to_linear_threshold={}",
            Q,
            begin,
            end,
            self.params.to_linear_threshold
        );
        fragment_search::<Q, _, _, _>(range, begin, end, query, pred, &self.params)
    }

    /// First position in `[begin, end)` whose element is not less than `query`.
    #[inline]
    pub fn lower_bound_range<R>(&self, range: &R, begin: usize, end: usize, query: &R::Item) -> usize
    where
        R: RandomAccess + ?Sized,
        R::Item: PartialOrd,
    {
        trace!(
            "{}-ARY LOWER_BOUND DISPATCH: begin={}, end={}",
            Q,
            begin,
            end
        );
        fragment_search::<Q, _, _, _>(
            range,
            begin,
            end,
            query,
            |element: &R::Item, q: &R::Item| element < q,
            &self.params,
        )
    }

    /// First position in `[begin, end)` whose element is greater than `query`.
    #[inline]
    pub fn upper_bound_range<R>(&self, range: &R, begin: usize, end: usize, query: &R::Item) -> usize
    where
        R: RandomAccess + ?Sized,
        R::Item: PartialOrd,
    {
        trace!(
            "{}-ARY UPPER_BOUND DISPATCH: begin={}, end={}",
            Q,
            begin,
            end
        );
        fragment_search::<Q, _, _, _>(
            range,
            begin,
            end,
            query,
            |element: &R::Item, q: &R::Item| element <= q,
            &self.params,
        )
    }

    /// Whether `[begin, end)` holds an element equivalent to `query`.
    ///
    /// Reuses the lower-bound position: true iff it is not `end` and the
    /// element there is not greater than `query`.
    #[inline]
    pub fn contains_range<R>(&self, range: &R, begin: usize, end: usize, query: &R::Item) -> bool
    where
        R: RandomAccess + ?Sized,
        R::Item: PartialOrd,
    {
        let position = self.lower_bound_range(range, begin, end, query);
        position != end && !(query < range.at(position))
    }

    // =========================================================================
    //  SLICE ENTRY POINTS
    // =========================================================================

    #[inline]
    pub fn search<T, V, P>(&self, arr: &[T], query: &V, pred: P) -> usize
    where
        V: ?Sized,
        P: FnMut(&T, &V) -> bool,
    {
        self.search_range(arr, 0, arr.len(), query, pred)
    }

    #[inline]
    pub fn lower_bound<T: PartialOrd>(&self, arr: &[T], query: &T) -> usize {
        self.lower_bound_range(arr, 0, arr.len(), query)
    }

    #[inline]
    pub fn upper_bound<T: PartialOrd>(&self, arr: &[T], query: &T) -> usize {
        self.upper_bound_range(arr, 0, arr.len(), query)
    }

    #[inline]
    pub fn contains<T: PartialOrd>(&self, arr: &[T], query: &T) -> bool {
        self.contains_range(arr, 0, arr.len(), query)
    }
}

// =============================================================================
//  FREE FUNCTIONS - PROCESS-WIDE DEFAULT THRESHOLD
// =============================================================================

/// Q-ary search with an explicit predicate over a whole slice.
///
/// # Examples
/// ```rust
/// // Descending data searched with a reversed predicate.
/// let a = [9, 7, 7, 4, 1];
/// assert_eq!(qary::search::<3, _, _, _>(&a, &7, |e: &i32, q: &i32| e > q), 1);
/// ```
#[inline]
pub fn search<const Q: usize, T, V, P>(arr: &[T], query: &V, pred: P) -> usize
where
    V: ?Sized,
    P: FnMut(&T, &V) -> bool,
{
    QarySearch::<Q>::new().search(arr, query, pred)
}

/// Index of the first element not less than `query`, or `arr.len()`.
///
/// # Examples
/// ```rust
/// let a = [2, 4, 6, 7, 12, 13, 16, 19, 23, 24, 27, 32, 36];
/// assert_eq!(qary::lower_bound::<5, _>(&a, &20), 8);
/// assert_eq!(qary::lower_bound::<5, _>(&a, &42), a.len());
/// ```
#[inline]
pub fn lower_bound<const Q: usize, T: PartialOrd>(arr: &[T], query: &T) -> usize {
    QarySearch::<Q>::new().lower_bound(arr, query)
}

/// Index of the first element greater than `query`, or `arr.len()`.
#[inline]
pub fn upper_bound<const Q: usize, T: PartialOrd>(arr: &[T], query: &T) -> usize {
    QarySearch::<Q>::new().upper_bound(arr, query)
}

/// Whether `arr` holds an element equivalent to `query`.
#[inline]
pub fn contains<const Q: usize, T: PartialOrd>(arr: &[T], query: &T) -> bool {
    QarySearch::<Q>::new().contains(arr, query)
}

/// Positional [`search`] over `[begin, end)` of `range`.
#[inline]
pub fn search_in<const Q: usize, R, V, P>(range: &R, begin: usize, end: usize, query: &V, pred: P) -> usize
where
    R: RandomAccess + ?Sized,
    V: ?Sized,
    P: FnMut(&R::Item, &V) -> bool,
{
    QarySearch::<Q>::new().search_range(range, begin, end, query, pred)
}

/// Positional [`lower_bound`] over `[begin, end)` of `range`.
///
/// This is the `(begin, end, query) -> position` shape the benchmark harness
/// drives.
#[inline]
pub fn lower_bound_in<const Q: usize, R>(range: &R, begin: usize, end: usize, query: &R::Item) -> usize
where
    R: RandomAccess + ?Sized,
    R::Item: PartialOrd,
{
    QarySearch::<Q>::new().lower_bound_range(range, begin, end, query)
}

/// Positional [`upper_bound`] over `[begin, end)` of `range`.
#[inline]
pub fn upper_bound_in<const Q: usize, R>(range: &R, begin: usize, end: usize, query: &R::Item) -> usize
where
    R: RandomAccess + ?Sized,
    R::Item: PartialOrd,
{
    QarySearch::<Q>::new().upper_bound_range(range, begin, end, query)
}

/// Positional [`contains`] over `[begin, end)` of `range`.
#[inline]
pub fn contains_in<const Q: usize, R>(range: &R, begin: usize, end: usize, query: &R::Item) -> bool
where
    R: RandomAccess + ?Sized,
    R::Item: PartialOrd,
{
    QarySearch::<Q>::new().contains_range(range, begin, end, query)
}
