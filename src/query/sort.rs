//! Sort specification

use crate::dataset::NumericField;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Asc),
            "desc" | "descending" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Sort on a single numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: NumericField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: NumericField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: NumericField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse_accepts_long_form() {
        assert_eq!(SortDirection::parse("Descending"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse("sideways"), None);
    }

    #[test]
    fn test_sort_spec() {
        let spec = SortSpec::desc(NumericField::FootfallScore);
        assert_eq!(spec.direction, SortDirection::Desc);
        assert_eq!(spec.field, NumericField::FootfallScore);
    }
}
