// SPDX-License-Identifier: Apache-2.0

//! Fragment-partition search core
//!
//! `fragment_search::<Q>` generalizes binary search along its arity: each
//! narrowing step splits the active window into `Q` contiguous fragments and
//! probes the `Q - 1` inner boundaries left to right. Once the window is
//! shorter than the linear threshold the rest is scanned element by element.
//!
//! The result is always the first position in `[begin, end)` whose element
//! does not satisfy `pred(element, query)`, or `end` when there is none.
//!
//! ## Fragment layout
//! `fragment_length = length / Q`. The first `Q - 1` fragments have exactly
//! that length and the last one absorbs `length % Q`. Keep it that way: the
//! position of the probes decides which side of a run of equal elements is
//! explored first.
//!
//! ## Preconditions
//! `[begin, end)` must be partitioned by `pred` (every satisfying element
//! precedes every failing one), which holds for a range sorted with respect to
//! the ordering `pred` is derived from. This is never checked; on an unsorted
//! range the returned position is unspecified but always within `[begin, end]`.

use crate::params::{ArityCheck, SearchParameters};
use crate::range::{RandomAccess, Window};

/// Linear scan of `[begin, end)`: first position whose element fails `pred`.
#[inline]
pub fn linear_scan<R, V, P>(range: &R, begin: usize, end: usize, query: &V, mut pred: P) -> usize
where
    R: RandomAccess + ?Sized,
    V: ?Sized,
    P: FnMut(&R::Item, &V) -> bool,
{
    let mut position = begin;
    while position != end && pred(range.at(position), query) {
        position += 1;
    }
    position
}

/// Receives the work done by the narrowing loop.
///
/// `()` discards everything, so the uncounted path carries no bookkeeping.
trait WorkSink {
    fn step(&mut self);
    fn probe(&mut self);
}

impl WorkSink for () {
    #[inline(always)]
    fn step(&mut self) {}

    #[inline(always)]
    fn probe(&mut self) {}
}

/// One narrowing step over `window`.
///
/// Probes `start + k * fragment_length` for `k = 1..Q`. The first failing
/// probe `k` leaves the fragment right before it,
/// `[start + (k-1) * fragment_length, start + k * fragment_length)`.
/// If all probes pass, the last fragment (with the remainder) is kept.
///
/// Requires `window.length >= Q` so that `fragment_length >= 1`.
#[inline(always)]
fn narrow<const Q: usize, R, V, P, S>(
    range: &R,
    window: &mut Window,
    query: &V,
    pred: &mut P,
    sink: &mut S,
) where
    R: RandomAccess + ?Sized,
    V: ?Sized,
    P: FnMut(&R::Item, &V) -> bool,
    S: WorkSink,
{
    let fragment_length = window.fragment_length(Q);
    debug_assert!(fragment_length > 0);

    sink.step();
    let mut probe = window.start;
    for _ in 1..Q {
        let next = probe + fragment_length;
        sink.probe();
        if !pred(range.at(next), query) {
            window.advance(probe - window.start);
            window.truncate(fragment_length);
            return;
        }
        probe = next;
    }
    // The last fragment
    window.advance((Q - 1) * fragment_length);
}

/// Narrow `[begin, end)` until the window drops below the threshold.
#[inline(always)]
fn narrow_to_threshold<const Q: usize, R, V, P, S>(
    range: &R,
    begin: usize,
    end: usize,
    query: &V,
    pred: &mut P,
    params: &SearchParameters,
    sink: &mut S,
) -> Window
where
    R: RandomAccess + ?Sized,
    V: ?Sized,
    P: FnMut(&R::Item, &V) -> bool,
    S: WorkSink,
{
    #[allow(clippy::let_unit_value)]
    let () = ArityCheck::<Q>::SUPPORTED;
    debug_assert!(end <= range.len());

    let threshold = params.effective_threshold::<Q>();
    let mut window = Window::from_bounds(begin, end);
    while window.length >= threshold {
        narrow::<Q, _, _, _, _>(range, &mut window, query, pred, sink);
    }
    window
}

/// Q-ary search over `[begin, end)` of `range`.
///
/// Returns the first position `p` such that `pred(range.at(p), query)` is
/// false, or `end` if every element satisfies it. An empty range returns
/// `begin`.
///
/// The arity is a const parameter; values outside `2..=6` fail to compile.
///
/// # Examples
/// ```rust
/// use qary::{fragment_search, SearchParameters};
///
/// let a = [2, 4, 6, 7, 12, 13, 16, 19, 23, 24, 27, 32, 36];
/// let params = SearchParameters::for_arity::<3>();
/// let p = fragment_search::<3, _, _, _>(&a[..], 0, a.len(), &19, |e: &i32, q: &i32| e < q, &params);
/// assert_eq!(p, 7);
/// ```
#[inline]
pub fn fragment_search<const Q: usize, R, V, P>(
    range: &R,
    begin: usize,
    end: usize,
    query: &V,
    mut pred: P,
    params: &SearchParameters,
) -> usize
where
    R: RandomAccess + ?Sized,
    V: ?Sized,
    P: FnMut(&R::Item, &V) -> bool,
{
    let window =
        narrow_to_threshold::<Q, _, _, _, _>(range, begin, end, query, &mut pred, params, &mut ());
    linear_scan(range, window.start, window.end(), query, pred)
}

/// Work done by one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Narrowing steps taken before the linear scan.
    pub steps: usize,
    /// Predicate evaluations during narrowing.
    pub probe_evaluations: usize,
    /// Predicate evaluations during the linear scan.
    pub scan_evaluations: usize,
}

impl WorkSink for SearchStats {
    #[inline(always)]
    fn step(&mut self) {
        self.steps += 1;
    }

    #[inline(always)]
    fn probe(&mut self) {
        self.probe_evaluations += 1;
    }
}

impl SearchStats {
    #[inline]
    pub fn total_evaluations(&self) -> usize {
        self.probe_evaluations + self.scan_evaluations
    }
}

/// [`fragment_search`] that also reports how much work it did.
///
/// Used to compare step counts against comparison counts across arities.
pub fn fragment_search_counted<const Q: usize, R, V, P>(
    range: &R,
    begin: usize,
    end: usize,
    query: &V,
    mut pred: P,
    params: &SearchParameters,
) -> (usize, SearchStats)
where
    R: RandomAccess + ?Sized,
    V: ?Sized,
    P: FnMut(&R::Item, &V) -> bool,
{
    let mut stats = SearchStats::default();
    let window =
        narrow_to_threshold::<Q, _, _, _, _>(range, begin, end, query, &mut pred, params, &mut stats);

    let scan_end = window.end();
    let position = linear_scan(range, window.start, scan_end, query, |e, q| {
        stats.scan_evaluations += 1;
        pred(e, q)
    });
    (position, stats)
}
