// Record introspection traits

use std::borrow::Cow;

/// A record whose fields can be inspected for validation.
///
/// Implemented with `#[derive(Describe)]` or by hand. Fields must be
/// returned in declaration order; the dispatcher reports the first failing
/// field in that order.
///
/// ```
/// use fieldcheck_validation::{Describe, FieldEntry};
///
/// struct Pagination {
///     page: String,
///     per_page: u32,
/// }
///
/// impl Describe for Pagination {
///     fn fields(&self) -> Vec<FieldEntry<'_>> {
///         vec![
///             FieldEntry::new("page", &self.page).annotate("validation", "number"),
///             FieldEntry::new("per_page", &self.per_page).annotate("validation", "number"),
///         ]
///     }
/// }
/// ```
pub trait Describe {
    /// Every field of the record, annotated or not
    fn fields(&self) -> Vec<FieldEntry<'_>>;
}

impl<T: Describe + ?Sized> Describe for &T {
    fn fields(&self) -> Vec<FieldEntry<'_>> {
        (**self).fields()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn fields(&self) -> Vec<FieldEntry<'_>> {
        (**self).fields()
    }
}

/// One field of a record as seen by the extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry<'a> {
    name: &'static str,
    value: Cow<'a, str>,
    zero: bool,
    annotations: Vec<(&'static str, &'static str)>,
}

impl<'a> FieldEntry<'a> {
    /// Capture a field's name and rendered value
    pub fn new<V>(name: &'static str, value: &'a V) -> Self
    where
        V: FieldValue + ?Sized,
    {
        Self {
            name,
            value: value.field_value(),
            zero: value.is_zero(),
            annotations: Vec::new(),
        }
    }

    /// Attach a rule under `tag`. A second rule for the same tag replaces the first.
    pub fn annotate(mut self, tag: &'static str, rule: &'static str) -> Self {
        match self.annotations.iter_mut().find(|(t, _)| *t == tag) {
            Some(existing) => existing.1 = rule,
            None => self.annotations.push((tag, rule)),
        }
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value is the zero value of its type
    pub fn is_zero(&self) -> bool {
        self.zero
    }

    /// The rule attached under `tag`, if any
    pub fn rule(&self, tag: &str) -> Option<&'static str> {
        self.annotations
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, rule)| *rule)
    }

    pub fn annotations(&self) -> &[(&'static str, &'static str)] {
        &self.annotations
    }
}

/// String rendering of a field value.
///
/// `is_zero` marks the zero value of the type (`""`, `0`, `false`, `None`);
/// zero-valued fields are never validated.
pub trait FieldValue {
    fn field_value(&self) -> Cow<'_, str>;

    fn is_zero(&self) -> bool {
        self.field_value().is_empty()
    }
}

impl FieldValue for str {
    fn field_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl FieldValue for String {
    fn field_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl FieldValue for Cow<'_, str> {
    fn field_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn field_value(&self) -> Cow<'_, str> {
        (**self).field_value()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Box<T> {
    fn field_value(&self) -> Cow<'_, str> {
        (**self).field_value()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

// `Some(_)` counts as zero only when it renders empty, so `Some(0)` is
// still validated.
impl<T: FieldValue> FieldValue for Option<T> {
    fn field_value(&self) -> Cow<'_, str> {
        match self {
            Some(value) => value.field_value(),
            None => Cow::Borrowed(""),
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            Some(value) => value.field_value().is_empty(),
            None => true,
        }
    }
}

macro_rules! impl_field_value_int {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                fn field_value(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_field_value_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_field_value_float {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                fn field_value(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }

                fn is_zero(&self) -> bool {
                    *self == 0.0
                }
            }
        )*
    };
}

impl_field_value_float!(f32, f64);

impl FieldValue for bool {
    fn field_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

impl FieldValue for char {
    fn field_value(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}
