//! Label modes and the label state carried by a labeled value.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::describe::Describe;

/// Whether a label was supplied or is derived from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelMode {
    /// No label was ever provided; the label is the string form of the data.
    Implicit,
    /// A label was provided literally or computed once from the data.
    Explicit,
}

impl LabelMode {
    /// Machine-friendly name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Implicit => "implicit",
            Self::Explicit => "explicit",
        }
    }
}

impl fmt::Display for LabelMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

type Step = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Label transformations recorded against an implicit label.
///
/// Steps run in insertion order against the string form of the current data
/// every time the label is rendered.
#[derive(Clone, Default)]
pub(crate) struct Restyle {
    steps: Vec<Step>,
}

impl Restyle {
    pub(crate) fn then(&self, step: Step) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    pub(crate) fn apply(&self, base: String) -> String {
        self.steps.iter().fold(base, |label, step| step(label.as_str()))
    }

    pub(crate) fn len(&self) -> usize {
        self.steps.len()
    }
}

/// Label state of a labeled value carrying data of type `T`.
///
/// The implicit arm keeps the describer chosen when the label was created, so
/// rendering never needs `T: Describe` after construction.
pub(crate) enum Label<T> {
    Implicit {
        describe: fn(&T) -> String,
        restyle: Restyle,
    },
    Explicit(String),
}

impl<T> Label<T> {
    pub(crate) fn implicit() -> Self
    where
        T: Describe,
    {
        Self::Implicit {
            describe: T::describe,
            restyle: Restyle::default(),
        }
    }

    pub(crate) const fn mode(&self) -> LabelMode {
        match self {
            Self::Implicit { .. } => LabelMode::Implicit,
            Self::Explicit(_) => LabelMode::Explicit,
        }
    }

    /// Resolve the effective label for `data`, deriving the implicit one lazily.
    pub(crate) fn resolve(&self, data: &T) -> Cow<'_, str> {
        match self {
            Self::Explicit(label) => Cow::Borrowed(label.as_str()),
            Self::Implicit { describe, restyle } => Cow::Owned(restyle.apply(describe(data))),
        }
    }

    pub(crate) fn transformed<F>(self, transformation: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        match self {
            Self::Explicit(label) => Self::Explicit(transformation(label.as_str())),
            Self::Implicit { describe, restyle } => Self::Implicit {
                describe,
                restyle: restyle.then(Arc::new(transformation)),
            },
        }
    }

    /// Carry the label over to data of type `U`.
    ///
    /// Explicit labels move verbatim; implicit labels switch to the describer
    /// of `U` and keep their recorded transformations.
    pub(crate) fn retarget<U: Describe>(self) -> Label<U> {
        match self {
            Self::Explicit(label) => Label::Explicit(label),
            Self::Implicit { restyle, .. } => Label::Implicit {
                describe: U::describe,
                restyle,
            },
        }
    }
}

impl<T> Clone for Label<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Implicit { describe, restyle } => Self::Implicit {
                describe: *describe,
                restyle: restyle.clone(),
            },
            Self::Explicit(label) => Self::Explicit(label.clone()),
        }
    }
}

impl<T> fmt::Debug for Label<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(label) => formatter.debug_tuple("Explicit").field(label).finish(),
            Self::Implicit { restyle, .. } => formatter
                .debug_struct("Implicit")
                .field("transformations", &restyle.len())
                .finish(),
        }
    }
}
