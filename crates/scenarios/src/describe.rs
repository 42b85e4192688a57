//! String form of case data, used as the implicit label.
//!
//! Sequences render from their elements (`[1, 2, 3]`) rather than from a type
//! name, and absent values (`None`, `()`) render as the empty string.
//!
//! Covered out of the box: primitives and strings, `Option`, references and
//! smart pointers, slices, arrays, `Vec`, `VecDeque`, sets and maps from
//! `std::collections`, and tuples of two to six elements. Hash-based
//! collections list their entries sorted by string form so labels are stable
//! across runs. Other types opt in through
//! [`describe_via_display!`](crate::describe_via_display) or a
//! manual impl.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Produces the string form of a value.
///
/// This is what a [`LabeledValue`](crate::LabeledValue) shows when no
/// explicit label was provided. Types implementing [`Display`](std::fmt::Display)
/// can opt in with [`describe_via_display!`](crate::describe_via_display).
pub trait Describe {
    /// String form of `self`.
    fn describe(&self) -> String;
}

/// Implements [`Describe`] for the listed types by delegating to their
/// [`Display`](std::fmt::Display) output.
///
/// ```
/// use scenarios::{Describe, describe_via_display};
///
/// struct Player(&'static str);
///
/// impl std::fmt::Display for Player {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str(self.0)
///     }
/// }
///
/// describe_via_display!(Player);
///
/// assert_eq!(Player("zangief").describe(), "zangief");
/// ```
#[macro_export]
macro_rules! describe_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Describe for $ty {
                fn describe(&self) -> ::std::string::String {
                    ::std::string::ToString::to_string(self)
                }
            }
        )+
    };
}

describe_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);

impl Describe for () {
    fn describe(&self) -> String {
        String::new()
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe(&self) -> String {
        self.as_ref().map_or_else(String::new, Describe::describe)
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for &mut T {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Rc<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Arc<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<B> Describe for Cow<'_, B>
where
    B: Describe + ToOwned + ?Sized,
{
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: Describe> Describe for [T] {
    fn describe(&self) -> String {
        describe_items(self)
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe(&self) -> String {
        describe_items(self)
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe(&self) -> String {
        describe_items(self)
    }
}

impl<T: Describe> Describe for VecDeque<T> {
    fn describe(&self) -> String {
        describe_items(self)
    }
}

impl<T: Describe> Describe for BTreeSet<T> {
    fn describe(&self) -> String {
        describe_items(self)
    }
}

impl<T: Describe, S> Describe for HashSet<T, S> {
    fn describe(&self) -> String {
        let mut parts: Vec<String> = self.iter().map(Describe::describe).collect();
        parts.sort_unstable();
        format!("[{}]", parts.join(", "))
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn describe(&self) -> String {
        let parts: Vec<String> = self.iter().map(|(key, value)| describe_entry(key, value)).collect();
        format!("{{{}}}", parts.join(", "))
    }
}

impl<K: Describe, V: Describe, S> Describe for HashMap<K, V, S> {
    fn describe(&self) -> String {
        let mut parts: Vec<String> = self.iter().map(|(key, value)| describe_entry(key, value)).collect();
        parts.sort_unstable();
        format!("{{{}}}", parts.join(", "))
    }
}

macro_rules! describe_tuple {
    ($($index:tt : $name:ident),+) => {
        impl<$($name: Describe),+> Describe for ($($name,)+) {
            fn describe(&self) -> String {
                let parts = [$(self.$index.describe()),+];
                format!("({})", parts.join(", "))
            }
        }
    };
}

describe_tuple!(0: A, 1: B);
describe_tuple!(0: A, 1: B, 2: C);
describe_tuple!(0: A, 1: B, 2: C, 3: D);
describe_tuple!(0: A, 1: B, 2: C, 3: D, 4: E);
describe_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F);

fn describe_entry<K: Describe, V: Describe>(key: &K, value: &V) -> String {
    format!("{}: {}", key.describe(), value.describe())
}

fn describe_items<'a, T, I>(items: I) -> String
where
    T: Describe + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let parts: Vec<String> = items.into_iter().map(|item| item.describe()).collect();
    format!("[{}]", parts.join(", "))
}
