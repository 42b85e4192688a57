//! The labeled value wrapper.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::describe::Describe;
use crate::label::{Label, LabelMode};

/// Case data paired with the label a test runner should display for it.
///
/// A value is either *explicitly* labeled or *implicitly* labeled. Implicit
/// labels are the [`Describe`] output of the current data, so they follow the
/// data through [`with_transformed_data`](Self::with_transformed_data).
/// Every operation returns a new value; nothing is mutated in place.
///
/// The [`Display`](fmt::Display) output is the effective label wrapped in double
/// quotes, which is what runners show as the argument name.
///
/// ```
/// use scenarios::wrap_labeled;
///
/// let skus = wrap_labeled(vec!["A-1", "B-2"], "only valid skus");
/// assert_eq!(skus.to_string(), "\"only valid skus\"");
/// assert_eq!(skus.into_data(), vec!["A-1", "B-2"]);
/// ```
#[derive(Clone)]
pub struct LabeledValue<T> {
    data: T,
    label: Label<T>,
}

impl<T: Describe> LabeledValue<T> {
    /// Wrap `data` with an implicit label.
    ///
    /// This is the only constructor that needs `T: Describe`; explicitly
    /// labeled values accept any data.
    #[must_use]
    pub fn new(data: T) -> Self {
        Self {
            data,
            label: Label::implicit(),
        }
    }
}

impl<T> LabeledValue<T> {
    /// Wrap `data` with the explicit `label`.
    ///
    /// An empty string is a valid explicit label.
    #[must_use]
    pub fn labeled(data: T, label: impl Into<String>) -> Self {
        Self {
            data,
            label: Label::Explicit(label.into()),
        }
    }

    /// Wrap `data` with an explicit label computed once from the data.
    ///
    /// Later data transformations do not re-run `selector`.
    #[must_use]
    pub fn labeled_by<F>(data: T, selector: F) -> Self
    where
        F: FnOnce(&T) -> String,
    {
        let label = selector(&data);
        Self::labeled(data, label)
    }

    /// Borrow the wrapped data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Unwrap into the wrapped data.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }

    /// Current label mode.
    #[must_use]
    pub const fn mode(&self) -> LabelMode {
        self.label.mode()
    }

    /// The explicit label, if one was provided.
    #[must_use]
    pub fn explicit_label(&self) -> Option<&str> {
        match &self.label {
            Label::Explicit(label) => Some(label.as_str()),
            Label::Implicit { .. } => None,
        }
    }

    /// Replace the label with the explicit `label`, keeping the data.
    #[must_use]
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self::labeled(self.data, label)
    }

    /// Transform the label, keeping the data and the label mode.
    ///
    /// An explicit label becomes `transformation(label)` right away and the
    /// closure is dropped. For an implicit label the closure is stored and runs
    /// against the string form of the data on every render (`Display`, `==`,
    /// `hash`), so it keeps applying after the data changes; a panicking
    /// closure therefore panics at render time. Use
    /// [`with_label_from`](Self::with_label_from) to transform once with a
    /// borrowing or one-shot closure.
    #[must_use]
    pub fn with_transformed_label<F>(self, transformation: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            data: self.data,
            label: self.label.transformed(transformation),
        }
    }

    /// Append `appendage` to the label, separated by a single space.
    #[must_use]
    pub fn with_appended_label(self, appendage: impl Into<String>) -> Self {
        let appendage = appendage.into();
        self.with_transformed_label(move |label| format!("{label} {appendage}"))
    }

    /// Replace the label with one computed now from the effective label.
    ///
    /// `transformation` runs exactly once, here; the result is explicit.
    #[must_use]
    pub fn with_label_from<F>(self, transformation: F) -> Self
    where
        F: FnOnce(&str) -> String,
    {
        let label = transformation(&*self.effective_label());
        Self::labeled(self.data, label)
    }

    /// Transform the data, keeping the label.
    ///
    /// An explicit label is carried over verbatim; an implicit label is derived
    /// from the transformed data.
    #[must_use]
    pub fn with_transformed_data<U, F>(self, transformation: F) -> LabeledValue<U>
    where
        U: Describe,
        F: FnOnce(T) -> U,
    {
        LabeledValue {
            data: transformation(self.data),
            label: self.label.retarget(),
        }
    }

    /// Fallible form of [`with_transformed_data`](Self::with_transformed_data).
    ///
    /// # Errors
    ///
    /// Returns the error produced by `transformation`, unchanged.
    pub fn try_with_transformed_data<U, E, F>(self, transformation: F) -> Result<LabeledValue<U>, E>
    where
        U: Describe,
        F: FnOnce(T) -> Result<U, E>,
    {
        Ok(LabeledValue {
            data: transformation(self.data)?,
            label: self.label.retarget(),
        })
    }

    /// The label shown for this value, without surrounding quotes.
    ///
    /// This is the explicit label when one was provided and otherwise the
    /// (possibly transformed) string form of the data.
    #[must_use]
    pub fn effective_label(&self) -> Cow<'_, str> {
        self.label.resolve(&self.data)
    }

    /// Combine with `other` using selectors for the data and for the label.
    ///
    /// The label selector receives both effective labels; the result is
    /// explicitly labeled.
    #[must_use]
    pub fn combined_with<U, V, D, L>(
        self,
        other: LabeledValue<U>,
        data_selector: D,
        label_selector: L,
    ) -> LabeledValue<V>
    where
        D: FnOnce(T, U) -> V,
        L: FnOnce(&str, &str) -> String,
    {
        let label = label_selector(&*self.effective_label(), &*other.effective_label());
        LabeledValue::labeled(data_selector(self.data, other.data), label)
    }

    /// Pair up data and labels with `other`.
    ///
    /// The data becomes `(self, other)` and the label `(<self>, <other>)`.
    #[must_use]
    pub fn paired_with<U>(self, other: LabeledValue<U>) -> LabeledValue<(T, U)> {
        self.combined_with(
            other,
            |data, other_data| (data, other_data),
            |label, other_label| format!("({label}, {other_label})"),
        )
    }
}

impl<T> AsRef<T> for LabeledValue<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T: Describe> From<T> for LabeledValue<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T> Describe for LabeledValue<T> {
    fn describe(&self) -> String {
        self.effective_label().into_owned()
    }
}

impl<T> fmt::Display for LabeledValue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "\"{}\"", self.effective_label())
    }
}

impl<T: fmt::Debug> fmt::Debug for LabeledValue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LabeledValue")
            .field("data", &self.data)
            .field("label", &self.label)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for LabeledValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.effective_label() == other.effective_label()
    }
}

impl<T: Eq> Eq for LabeledValue<T> {}

impl<T: Hash> Hash for LabeledValue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
        self.effective_label().hash(state);
    }
}

impl<T: Serialize> Serialize for LabeledValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LabeledValue", 3)?;
        state.serialize_field("data", &self.data)?;
        let label = self.effective_label();
        state.serialize_field("label", &*label)?;
        state.serialize_field("mode", &self.mode())?;
        state.end()
    }
}
