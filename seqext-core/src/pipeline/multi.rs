//! Combinators over more than one source: concatenation, zipping,
//! cartesian product and one-level flattening.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::foundation::source::Source;

/// Concatenation created by [`Seq::chain`](crate::Seq::chain).
///
/// The second iterable is only converted into an iterator once the first
/// one runs dry.
pub struct Chain<I, U: IntoIterator> {
    front: Option<I>,
    pending: Option<U>,
    back: Option<Source<U::IntoIter>>,
}

impl<I, U: IntoIterator> Chain<I, U> {
    pub(crate) const fn new(front: I, other: U) -> Self {
        Self {
            front: Some(front),
            pending: Some(other),
            back: None,
        }
    }
}

impl<I, U> Iterator for Chain<I, U>
where
    I: Iterator,
    U: IntoIterator<Item = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(front) = self.front.as_mut() {
            if let Some(item) = front.next() {
                return Some(item);
            }
            self.front = None;
        }

        if let Some(other) = self.pending.take() {
            self.back = Some(Source::new(other.into_iter()));
        }
        self.back.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (front_lower, front_upper) = self.front.as_ref().map_or((0, Some(0)), Iterator::size_hint);
        match (&self.back, &self.pending) {
            (Some(back), _) => {
                let (lower, upper) = back.size_hint();
                (
                    front_lower.saturating_add(lower),
                    front_upper.zip(upper).and_then(|(a, b)| a.checked_add(b)),
                )
            }
            // Nothing is known about an iterable that has not been converted yet.
            (None, Some(_)) => (front_lower, None),
            (None, None) => (front_lower, front_upper),
        }
    }
}

impl<I, U> FusedIterator for Chain<I, U>
where
    I: Iterator,
    U: IntoIterator<Item = I::Item>,
{
}

/// Concatenation of many sources, created by
/// [`Seq::chain_all`](crate::Seq::chain_all).
///
/// Sources are pulled from `sources` and converted one at a time, each only
/// after the previous one is exhausted.
pub struct ChainAll<I, S>
where
    S: Iterator,
    S::Item: IntoIterator,
{
    front: Option<I>,
    sources: Source<S>,
    current: Option<Source<<S::Item as IntoIterator>::IntoIter>>,
}

impl<I, S> ChainAll<I, S>
where
    S: Iterator,
    S::Item: IntoIterator,
{
    pub(crate) const fn new(front: I, sources: S) -> Self {
        Self {
            front: Some(front),
            sources: Source::new(sources),
            current: None,
        }
    }
}

impl<I, S> Iterator for ChainAll<I, S>
where
    I: Iterator,
    S: Iterator,
    S::Item: IntoIterator<Item = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(front) = self.front.as_mut() {
            if let Some(item) = front.next() {
                return Some(item);
            }
            self.front = None;
        }

        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(item) = current.next() {
                    return Some(item);
                }
                self.current = None;
            }
            let source = self.sources.next()?;
            self.current = Some(Source::new(source.into_iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let front = self.front.as_ref().map_or(0, |front| front.size_hint().0);
        let current = self.current.as_ref().map_or(0, |current| current.size_hint().0);
        (front.saturating_add(current), None)
    }
}

impl<I, S> FusedIterator for ChainAll<I, S>
where
    I: Iterator,
    S: Iterator,
    S::Item: IntoIterator<Item = I::Item>,
{
}

/// Created by [`Seq::zip`](crate::Seq::zip).
///
/// The left side is pulled first. A left item pulled when the right side
/// turns out to be exhausted is discarded, and neither side is pulled again.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
    done: bool,
}

impl<A, B> Zip<A, B> {
    pub(crate) const fn new(a: A, b: B) -> Self {
        Self { a, b, done: false }
    }
}

impl<A, B> Iterator for Zip<A, B>
where
    A: Iterator,
    B: Iterator,
{
    type Item = (A::Item, B::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let pair = self.a.next().and_then(|x| self.b.next().map(|y| (x, y)));
        self.done = pair.is_none();
        pair
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        zip_size_hint(self.a.size_hint(), self.b.size_hint())
    }
}

impl<A: Iterator, B: Iterator> FusedIterator for Zip<A, B> {}

/// Created by [`Seq::zip_with`](crate::Seq::zip_with).
///
/// Same pulling rules as [`Zip`], with each pair combined through `f`.
#[derive(Debug, Clone)]
pub struct ZipWith<A, B, F> {
    a: A,
    b: B,
    f: F,
    done: bool,
}

impl<A, B, F> ZipWith<A, B, F> {
    pub(crate) const fn new(a: A, b: B, f: F) -> Self {
        Self {
            a,
            b,
            f,
            done: false,
        }
    }
}

impl<A, B, F, C> Iterator for ZipWith<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> C,
{
    type Item = C;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let combined = self
            .a
            .next()
            .and_then(|x| self.b.next().map(|y| (self.f)(x, y)));
        self.done = combined.is_none();
        combined
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        zip_size_hint(self.a.size_hint(), self.b.size_hint())
    }
}

impl<A, B, F, C> FusedIterator for ZipWith<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> C,
{
}

fn zip_size_hint(
    (a_lower, a_upper): (usize, Option<usize>),
    (b_lower, b_upper): (usize, Option<usize>),
) -> (usize, Option<usize>) {
    let upper = match (a_upper, b_upper) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    };
    (a_lower.min(b_lower), upper)
}

/// Cartesian product created by [`Seq::product`](crate::Seq::product).
///
/// The right side lives in a cache buffer that is replayed once per left
/// item; the left side is pulled lazily, one item per full replay.
#[derive(Debug, Clone)]
pub struct Product<I: Iterator, U> {
    left: I,
    right: Vec<U>,
    current: Option<I::Item>,
    index: usize,
}

impl<I: Iterator, U> Product<I, U> {
    pub(crate) const fn new(left: I, right: Vec<U>) -> Self {
        Self {
            left,
            right,
            current: None,
            index: 0,
        }
    }
}

impl<I, U> Iterator for Product<I, U>
where
    I: Iterator,
    I::Item: Clone,
    U: Clone,
{
    type Item = (I::Item, U);

    fn next(&mut self) -> Option<Self::Item> {
        // An empty right side makes the product empty; the left is never touched.
        if self.right.is_empty() {
            return None;
        }

        loop {
            if let Some(item) = &self.current {
                if let Some(right) = self.right.get(self.index) {
                    self.index += 1;
                    return Some((item.clone(), right.clone()));
                }
            }
            self.current = Some(self.left.next()?);
            self.index = 0;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let width = self.right.len();
        if width == 0 {
            return (0, Some(0));
        }

        let rest_of_row = if self.current.is_some() { width - self.index } else { 0 };
        let (lower, upper) = self.left.size_hint();
        let total = |rows: usize| rows.checked_mul(width)?.checked_add(rest_of_row);
        (total(lower).unwrap_or(usize::MAX), upper.and_then(total))
    }
}

impl<I, U> FusedIterator for Product<I, U>
where
    I: FusedIterator,
    I::Item: Clone,
    U: Clone,
{
}

/// Depth-first flattening created by [`Seq::flat_map`](crate::Seq::flat_map).
///
/// Each inner iterator is drained completely before the next upstream item
/// is pulled.
pub struct FlatMap<I, F, U: IntoIterator> {
    iter: I,
    f: F,
    current: Option<Source<U::IntoIter>>,
}

impl<I, F, U: IntoIterator> FlatMap<I, F, U> {
    pub(crate) const fn new(iter: I, f: F) -> Self {
        Self {
            iter,
            f,
            current: None,
        }
    }
}

impl<I, F, U> Iterator for FlatMap<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.current = None;
            }
            let item = self.iter.next()?;
            self.current = Some(Source::new((self.f)(item).into_iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let inner = self.current.as_ref().map_or(0, |inner| inner.size_hint().0);
        (inner, None)
    }
}

impl<I, F, U> FusedIterator for FlatMap<I, F, U>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
}

#[cfg(test)]
mod tests {
    use crate::foundation::factory::{empty, once, range};
    use crate::foundation::source::IntoSeq;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_chain() {
        let mut seq = vec![1, 2, 3].into_seq().chain(vec![4, 5, 6]);
        for expected in 1..=6 {
            assert_eq!(seq.next(), Some(expected));
        }
        assert_eq!(seq.next(), None);

        assert_eq!(Vec::<i32>::new().into_seq().chain(Vec::new()).count(), 0);
        assert_eq!(Vec::<i32>::new().into_seq().chain(once(1)).to_vec(), vec![1]);
    }

    #[test]
    fn test_chain_leaves_arrays_untouched() {
        let left = vec![1, 2];
        let right = vec![3];
        let joined: Vec<i32> = left.iter().into_seq().chain(&right).copied().collect();
        assert_eq!(joined, vec![1, 2, 3]);
        assert_eq!(left, vec![1, 2]);
        assert_eq!(right, vec![3]);
    }

    #[test]
    fn test_chain_converts_other_lazily() {
        struct Tracked<'a>(&'a mut bool);

        impl IntoIterator for Tracked<'_> {
            type Item = i32;
            type IntoIter = core::iter::Once<i32>;

            fn into_iter(self) -> Self::IntoIter {
                *self.0 = true;
                core::iter::once(9)
            }
        }

        let mut converted = false;
        let mut seq = vec![1].into_seq().chain(Tracked(&mut converted));
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), Some(9));
        drop(seq);
        assert!(converted);

        let mut converted = false;
        let mut seq = vec![1].into_seq().chain(Tracked(&mut converted));
        assert_eq!(seq.next(), Some(1));
        drop(seq);
        assert!(!converted);
    }

    #[test]
    fn test_chain_all() {
        let seq = vec![1].into_seq().chain_all(vec![vec![2, 3], vec![], vec![4]]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4]);

        let none: Vec<Vec<i32>> = Vec::new();
        assert_eq!(vec![1, 2].into_seq().chain_all(none).to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_chain_all_over_infinite_sources() {
        let seq = empty::<i64>().chain_all(range(0, None).map(|n| range(n * 10, n * 10 + 2)));
        assert_eq!(seq.take(5).to_vec(), vec![0, 1, 10, 11, 20]);
    }

    #[test]
    fn test_zip() {
        let pairs = vec![1, 2, 3].into_seq().zip(vec![4, 5, 6]).to_vec();
        assert_eq!(pairs, vec![(1, 4), (2, 5), (3, 6)]);

        let mut origin = vec![1, 2, 3, 4].into_seq();
        let mut seq = origin.by_ref().zip(vec![4, 5]);
        assert_eq!(seq.next(), Some((1, 4)));
        assert_eq!(seq.next(), Some((2, 5)));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(origin.next(), Some(4));
        assert_eq!(origin.next(), None);
    }

    #[test]
    fn test_zip_does_not_pull_right_when_left_is_done() {
        let mut right = vec![7, 8].into_seq();
        assert_eq!(vec![1].into_seq().zip(right.by_ref()).to_vec(), vec![(1, 7)]);
        assert_eq!(right.next(), Some(8));
    }

    #[test]
    fn test_zip_with() {
        let sums = vec![1, 2, 3].into_seq().zip_with(vec![4, 5, 6], |a, b| a + b).to_vec();
        assert_eq!(sums, vec![5, 7, 9]);

        let mut origin = vec![1, 2, 3, 4].into_seq();
        let sums = origin.by_ref().zip_with(vec![4, 5], |a, b| a + b).to_vec();
        assert_eq!(sums, vec![5, 7]);
        assert_eq!(origin.to_vec(), vec![4]);
    }

    #[test]
    fn test_zip_size_hint() {
        assert_eq!(range(0, 3).zip(0..5).size_hint(), (3, Some(3)));
        assert_eq!(range(0, None).zip(0..5).size_hint(), (5, Some(5)));
    }

    #[test]
    fn test_product() {
        let pairs = vec![1, 2, 3].into_seq().product(vec![4, 5, 6]).to_vec();
        assert_eq!(
            pairs,
            vec![
                (1, 4),
                (1, 5),
                (1, 6),
                (2, 4),
                (2, 5),
                (2, 6),
                (3, 4),
                (3, 5),
                (3, 6),
            ]
        );
    }

    #[test]
    fn test_product_edge_cases() {
        assert_eq!(vec![1, 2].into_seq().product(Vec::<i32>::new()).count(), 0);
        assert_eq!(Vec::<i32>::new().into_seq().product(vec![1, 2]).count(), 0);

        let mut origin = vec![1, 2].into_seq();
        assert_eq!(origin.by_ref().product(Vec::<i32>::new()).count(), 0);
        assert_eq!(origin.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_product_left_stays_lazy() {
        let first = range(0, None).product(vec!['a', 'b']).take(3).to_vec();
        assert_eq!(first, vec![(0, 'a'), (0, 'b'), (1, 'a')]);

        let mut seq = range(0, 2).product(vec!['a', 'b']);
        assert_eq!(seq.size_hint(), (4, Some(4)));
        seq.next();
        assert_eq!(seq.size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_flat_map() {
        let out = vec![1, 2, 3].into_seq().flat_map(|x| vec![x, x * 2]).to_vec();
        assert_eq!(out, vec![1, 2, 2, 4, 3, 6]);

        assert_eq!(Vec::<i32>::new().into_seq().flat_map(|x| vec![x, x * 2]).count(), 0);
    }

    #[test]
    fn test_flat_map_skips_empty_inner() {
        let out = range(0, 5)
            .flat_map(|x| if x % 2 == 0 { vec![x] } else { Vec::new() })
            .to_vec();
        assert_eq!(out, vec![0, 2, 4]);
    }

    #[test]
    fn test_flat_map_is_depth_first() {
        let mut pulled = 0;
        let mut seq = range(0, None).tap(|_| pulled += 1).flat_map(|x| range(0, x + 2));
        assert_eq!(seq.next(), Some(0));
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), Some(0));
        drop(seq);
        assert_eq!(pulled, 2);
    }
}
