// qualgate-core/src/domain/quality/validator.rs

use serde::Serialize;
use std::fmt;
use std::num::IntErrorKind;

use crate::domain::dataset::Record;

/// A single reason for rejecting a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Defect {
    #[serde(rename = "name is missing")]
    NameMissing,
    #[serde(rename = "age is not an integer")]
    AgeNotInteger,
    #[serde(rename = "age must be positive")]
    AgeNotPositive,
}

impl Defect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NameMissing => "name is missing",
            Self::AgeNotInteger => "age is not an integer",
            Self::AgeNotPositive => "age must be positive",
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tagged view over a validation result.
#[derive(Debug, PartialEq, Eq)]
pub enum RowVerdict<'a> {
    Valid,
    Invalid(&'a [Defect]),
}

/// A record paired with every defect found on it. Empty defects means valid.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub record: Record,
    pub defects: Vec<Defect>,
}

impl ValidationResult {
    pub fn verdict(&self) -> RowVerdict<'_> {
        if self.defects.is_empty() {
            RowVerdict::Valid
        } else {
            RowVerdict::Invalid(&self.defects)
        }
    }
}

/// Applies every rule to the row, in order. Never short-circuits.
pub fn validate_row(record: &Record) -> Vec<Defect> {
    let mut defects = Vec::new();

    if record.get("name").is_none_or(str::is_empty) {
        defects.push(Defect::NameMissing);
    }

    // Leading/trailing whitespace and an explicit sign are accepted, like most integer readers.
    // Integers beyond i64 are still integers: only their sign matters.
    match record.get("age").map(|raw| raw.trim().parse::<i64>()) {
        Some(Ok(age)) if age <= 0 => defects.push(Defect::AgeNotPositive),
        Some(Ok(_)) => {}
        Some(Err(err)) => match err.kind() {
            IntErrorKind::PosOverflow => {}
            IntErrorKind::NegOverflow => defects.push(Defect::AgeNotPositive),
            _ => defects.push(Defect::AgeNotInteger),
        },
        None => defects.push(Defect::AgeNotInteger),
    }

    defects
}

/// Consumes the record and wraps it with its defects.
pub fn validate_record(record: Record) -> ValidationResult {
    let defects = validate_row(&record);
    ValidationResult { record, defects }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, age: &str) -> Record {
        Record::from_row(
            &["customer_id", "name", "age", "email", "country"],
            ["1", name, age, "a@b.io", "FR"],
        )
    }

    #[test]
    fn test_valid_row_has_no_defects() {
        assert!(validate_row(&row("Alice", "30")).is_empty());
        assert!(validate_row(&row("Bob", "1")).is_empty());
    }

    #[test]
    fn test_missing_name_regardless_of_age() {
        assert_eq!(validate_row(&row("", "30")), vec![Defect::NameMissing]);
        assert_eq!(
            validate_row(&row("", "abc")),
            vec![Defect::NameMissing, Defect::AgeNotInteger]
        );
        assert_eq!(
            validate_row(&row("", "-4")),
            vec![Defect::NameMissing, Defect::AgeNotPositive]
        );
    }

    #[test]
    fn test_absent_name_field_is_missing() {
        let record = Record::from_row(&["customer_id", "age"], ["1", "22"]);
        assert_eq!(validate_row(&record), vec![Defect::NameMissing]);
    }

    #[test]
    fn test_non_numeric_age_is_not_an_integer() {
        for age in ["abc", "", "12.5", "thirty", "1e3"] {
            let defects = validate_row(&row("Carol", age));
            assert_eq!(defects, vec![Defect::AgeNotInteger], "age = {:?}", age);
            assert!(!defects.contains(&Defect::AgeNotPositive));
        }
    }

    #[test]
    fn test_non_positive_age_must_be_positive() {
        for age in ["0", "-1", "-120", "+0"] {
            let defects = validate_row(&row("Dave", age));
            assert_eq!(defects, vec![Defect::AgeNotPositive], "age = {:?}", age);
            assert!(!defects.contains(&Defect::AgeNotInteger));
        }
    }

    #[test]
    fn test_age_tolerates_surrounding_whitespace_and_sign() {
        assert!(validate_row(&row("Erin", " 42 ")).is_empty());
        assert!(validate_row(&row("Erin", "+42")).is_empty());
    }

    #[test]
    fn test_age_beyond_i64_is_classified_by_sign() {
        assert!(validate_row(&row("Gina", "99999999999999999999")).is_empty());
        assert_eq!(
            validate_row(&row("Gina", "-99999999999999999999")),
            vec![Defect::AgeNotPositive]
        );
        assert_eq!(
            validate_row(&row("Gina", " +99999999999999999999 ")),
            Vec::<Defect>::new()
        );
    }

    #[test]
    fn test_whitespace_only_name_is_present() {
        assert!(validate_row(&row(" ", "42")).is_empty());
    }

    #[test]
    fn test_defect_messages() {
        assert_eq!(Defect::NameMissing.to_string(), "name is missing");
        assert_eq!(Defect::AgeNotInteger.to_string(), "age is not an integer");
        assert_eq!(Defect::AgeNotPositive.to_string(), "age must be positive");
    }

    #[test]
    fn test_verdict_tags_result() {
        let ok = validate_record(row("Frank", "50"));
        assert_eq!(ok.verdict(), RowVerdict::Valid);

        let ko = validate_record(row("", "0"));
        assert_eq!(
            ko.verdict(),
            RowVerdict::Invalid(&[Defect::NameMissing, Defect::AgeNotPositive])
        );
    }
}
