//! Assertions over labeled value output.

use scenarios::LabeledValue;

/// Assert that `value` displays as `label` wrapped in double quotes.
///
/// # Panics
///
/// Panics when the display output differs.
#[track_caller]
pub fn assert_label<T>(value: &LabeledValue<T>, label: &str) {
    let expected = format!("\"{label}\"");
    let actual = value.to_string();
    assert!(
        actual == expected,
        "labeled value should display as {expected}, got {actual}"
    );
}

/// Assert that `values` display as `labels`, in order.
///
/// # Panics
///
/// Panics when the number of values or any display output differs.
#[track_caller]
pub fn assert_labels<'a, T, I>(values: I, labels: &[&str])
where
    T: 'a,
    I: IntoIterator<Item = &'a LabeledValue<T>>,
{
    let actual: Vec<String> = values.into_iter().map(ToString::to_string).collect();
    let expected: Vec<String> = labels.iter().map(|label| format!("\"{label}\"")).collect();
    assert_eq!(actual, expected, "labeled values should display in order");
}
