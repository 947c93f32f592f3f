//! False-positive filters applied to recognizer output before anything
//! else sees it.

use std::sync::LazyLock;

use regex::Regex;

/// Financial/legal boilerplate that recognizers keep tagging as entities
/// ("IBAN" as an organization, "Visa" as a person).
const STOPLIST: &[&str] = &["iban", "credit", "card", "visa", "mastercard"];

/// Dense digit runs ("04 1234 5678") — phone numbers misread as dates.
static RE_DENSE_DIGITS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\d{2,} [\d\s]{2,}").ok());

/// True if the lowercased value is boilerplate to drop regardless of label.
pub fn in_stoplist(value: &str) -> bool {
    STOPLIST.contains(&value.to_lowercase().as_str())
}

/// True if a `date`-labeled value is numeric noise rather than a date.
///
/// Three heuristics, in order: dense digit runs (misclassified phone
/// numbers), purely numeric values, and values with four or fewer digits
/// once spaces are ignored (short numeric noise like "1111").
pub fn is_date_noise(value: &str) -> bool {
    if RE_DENSE_DIGITS
        .as_ref()
        .is_some_and(|re| re.is_match(value))
    {
        return true;
    }
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    let digit_count = value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .count();
    digit_count <= 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stoplist_is_case_insensitive() {
        assert!(in_stoplist("IBAN"));
        assert!(in_stoplist("MasterCard"));
        assert!(!in_stoplist("Acme Corp"));
    }

    #[test]
    fn dense_digit_runs_are_noise() {
        assert!(is_date_noise("04 1234 5678"));
        assert!(is_date_noise("1111 1111"));
    }

    #[test]
    fn purely_numeric_values_are_noise() {
        assert!(is_date_noise("19900512"));
    }

    #[test]
    fn short_digit_counts_are_noise() {
        assert!(is_date_noise("2023"));
        assert!(is_date_noise("May 5"));
        assert!(is_date_noise("Jun 2023"));
    }

    #[test]
    fn real_dates_survive() {
        assert!(!is_date_noise("March 3, 2021"));
        assert!(!is_date_noise("12/05/1990"));
    }
}
