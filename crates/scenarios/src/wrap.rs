//! Construction helpers for labeled values.

use std::iter::FusedIterator;

use crate::describe::Describe;
use crate::labeled::LabeledValue;

/// Wrap `value` with an implicit label.
#[must_use]
pub fn wrap<T: Describe>(value: T) -> LabeledValue<T> {
    LabeledValue::new(value)
}

/// Wrap `value` with the explicit `label`.
#[must_use]
pub fn wrap_labeled<T>(value: T, label: impl Into<String>) -> LabeledValue<T> {
    LabeledValue::labeled(value, label)
}

/// Wrap `value` with an explicit label computed from it by `selector`.
///
/// Handy when the value is built inline and has no binding yet:
///
/// ```
/// use scenarios::wrap_with;
///
/// struct Player {
///     name: String,
/// }
///
/// let player = wrap_with(Player { name: "T. Hawk".into() }, |p| p.name.clone());
/// assert_eq!(player.to_string(), "\"T. Hawk\"");
/// ```
#[must_use]
pub fn wrap_with<T, F>(value: T, selector: F) -> LabeledValue<T>
where
    F: FnOnce(&T) -> String,
{
    LabeledValue::labeled_by(value, selector)
}

/// Fallible form of [`wrap_with`].
///
/// # Errors
///
/// Returns the error produced by `selector`, unchanged.
pub fn try_wrap_with<T, E, F>(value: T, selector: F) -> Result<LabeledValue<T>, E>
where
    F: FnOnce(&T) -> Result<String, E>,
{
    let label = selector(&value)?;
    Ok(LabeledValue::labeled(value, label))
}

/// Lazily wrap every element of `values` with a label computed by `selector`.
///
/// Order is preserved and nothing is buffered. The iterator can be restarted
/// by cloning it when the input iterator and the selector are cloneable.
pub fn wrap_all<I, F>(values: I, selector: F) -> WrapAll<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> String,
{
    WrapAll {
        values: values.into_iter(),
        selector,
    }
}

/// Iterator returned by [`wrap_all`] and [`LabelAll::label_all`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct WrapAll<I, F> {
    values: I,
    selector: F,
}

impl<I, F> WrapAll<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> String,
{
    fn label(&mut self, value: I::Item) -> LabeledValue<I::Item> {
        let label = (self.selector)(&value);
        LabeledValue::labeled(value, label)
    }
}

impl<I, F> Iterator for WrapAll<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> String,
{
    type Item = LabeledValue<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.values.next()?;
        Some(self.label(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<I, F> DoubleEndedIterator for WrapAll<I, F>
where
    I: DoubleEndedIterator,
    F: FnMut(&I::Item) -> String,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.values.next_back()?;
        Some(self.label(value))
    }
}

impl<I, F> ExactSizeIterator for WrapAll<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(&I::Item) -> String,
{
}

impl<I, F> FusedIterator for WrapAll<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item) -> String,
{
}

/// Method-call forms of the construction helpers, available on every value.
pub trait AsLabeled: Sized {
    /// Wrap `self` with an implicit label.
    #[must_use]
    fn labeled(self) -> LabeledValue<Self>
    where
        Self: Describe,
    {
        wrap(self)
    }

    /// Wrap `self` with the explicit `label`.
    #[must_use]
    fn labeled_as(self, label: impl Into<String>) -> LabeledValue<Self> {
        wrap_labeled(self, label)
    }

    /// Wrap `self` with an explicit label computed by `selector`.
    #[must_use]
    fn labeled_by<F>(self, selector: F) -> LabeledValue<Self>
    where
        F: FnOnce(&Self) -> String,
    {
        wrap_with(self, selector)
    }
}

impl<T> AsLabeled for T {}

/// Method-call form of [`wrap_all`], available on every [`IntoIterator`].
pub trait LabelAll: IntoIterator + Sized {
    /// Lazily wrap every element with a label computed by `selector`.
    fn label_all<F>(self, selector: F) -> WrapAll<Self::IntoIter, F>
    where
        F: FnMut(&Self::Item) -> String,
    {
        wrap_all(self, selector)
    }
}

impl<I: IntoIterator> LabelAll for I {}
