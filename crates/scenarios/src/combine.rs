//! Pairing helpers for combining labeled values.

use std::iter::{FusedIterator, Zip};

use crate::labeled::LabeledValue;

/// Pair up the data and labels of `first` and `second`.
///
/// Free-function form of [`LabeledValue::paired_with`], so it can be passed
/// where a function is expected:
///
/// ```
/// use scenarios::{combine, wrap_labeled};
///
/// let players = vec![wrap_labeled("vega", "claw")];
/// let stages = vec![wrap_labeled("barcelona", "cage")];
/// let matches: Vec<_> = players
///     .into_iter()
///     .zip(stages)
///     .map(|(player, stage)| combine(player, stage))
///     .collect();
/// assert_eq!(matches[0].to_string(), "\"(claw, cage)\"");
/// ```
#[must_use]
pub fn combine<A, B>(first: LabeledValue<A>, second: LabeledValue<B>) -> LabeledValue<(A, B)> {
    first.paired_with(second)
}

/// Lazily pair two sequences of labeled values element-wise with [`combine`].
///
/// Iteration stops at the end of the shorter sequence.
pub fn zip_combined<I, J, A, B>(firsts: I, seconds: J) -> ZipCombined<I::IntoIter, J::IntoIter>
where
    I: IntoIterator<Item = LabeledValue<A>>,
    J: IntoIterator<Item = LabeledValue<B>>,
{
    ZipCombined {
        inner: firsts.into_iter().zip(seconds),
    }
}

/// Iterator returned by [`zip_combined`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipCombined<I, J> {
    inner: Zip<I, J>,
}

impl<I, J, A, B> Iterator for ZipCombined<I, J>
where
    I: Iterator<Item = LabeledValue<A>>,
    J: Iterator<Item = LabeledValue<B>>,
{
    type Item = LabeledValue<(A, B)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(first, second)| combine(first, second))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, J, A, B> ExactSizeIterator for ZipCombined<I, J>
where
    I: ExactSizeIterator<Item = LabeledValue<A>>,
    J: ExactSizeIterator<Item = LabeledValue<B>>,
{
}

impl<I, J, A, B> FusedIterator for ZipCombined<I, J>
where
    I: FusedIterator<Item = LabeledValue<A>>,
    J: FusedIterator<Item = LabeledValue<B>>,
{
}
