//! Constraint sets
//!
//! A constraint set is an ordered conjunction of predicates over row fields.
//! It is built fresh for every query and never persisted.

use crate::dataset::{CategoricalField, NumericField};

/// How a categorical predicate treats an empty selection.
///
/// Every call site picks one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptySelection {
    /// Empty list means no filter on this field
    MatchAll,
    /// Empty list excludes every row
    MatchNone,
}

impl EmptySelection {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptySelection::MatchAll => "all",
            EmptySelection::MatchNone => "none",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(EmptySelection::MatchAll),
            "none" => Some(EmptySelection::MatchNone),
            _ => None,
        }
    }
}

/// A single predicate over a row
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// field >= bound
    AtLeast { field: NumericField, bound: f64 },
    /// field <= bound
    AtMost { field: NumericField, bound: f64 },
    /// field is one of the listed labels
    OneOf {
        field: CategoricalField,
        values: Vec<String>,
        on_empty: EmptySelection,
    },
    /// Case-insensitive substring match on the area name
    NameContains(String),
}

impl Predicate {
    pub fn at_least(field: NumericField, bound: f64) -> Self {
        Predicate::AtLeast { field, bound }
    }

    pub fn at_most(field: NumericField, bound: f64) -> Self {
        Predicate::AtMost { field, bound }
    }

    pub fn one_of<I, S>(field: CategoricalField, values: I, on_empty: EmptySelection) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::OneOf {
            field,
            values: values.into_iter().map(Into::into).collect(),
            on_empty,
        }
    }

    pub fn name_contains(text: impl Into<String>) -> Self {
        Predicate::NameContains(text.into())
    }

    /// Operation name for logs
    pub fn op_name(&self) -> &'static str {
        match self {
            Predicate::AtLeast { .. } => "gte",
            Predicate::AtMost { .. } => "lte",
            Predicate::OneOf { .. } => "in",
            Predicate::NameContains(_) => "name_contains",
        }
    }
}

/// Ordered conjunction of predicates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintSet {
    predicates: Vec<Predicate>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a predicate
    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn push(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }

    /// Appends all predicates of `other`, keeping order
    pub fn and(mut self, other: ConstraintSet) -> Self {
        self.predicates.extend(other.predicates);
        self
    }

    /// Adds `lo <= field <= hi`
    pub fn between(self, field: NumericField, lo: f64, hi: f64) -> Self {
        self.with(Predicate::at_least(field, lo))
            .with(Predicate::at_most(field, hi))
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }
}

impl FromIterator<Predicate> for ConstraintSet {
    fn from_iter<T: IntoIterator<Item = Predicate>>(iter: T) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}
