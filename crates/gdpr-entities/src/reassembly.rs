//! Person-name reassembly.
//!
//! Recognizers sometimes split one person across adjacent spans when a
//! fragment ends in a lowercase token — typically a nobiliary particle
//! ("Mary-Anne van" + "Merwe"). A heuristic, not a grammar: a name that
//! legitimately ends in a lowercase word with no continuation will be
//! glued to its neighbor.

/// Merge split multi-word names, e.g.
/// `["Mary-Anne van", "Merwe"]` -> `["Mary-Anne van Merwe"]`.
///
/// A fragment whose last whitespace token is entirely lowercase opens (or
/// extends) a pending buffer; the next fragment with a capitalized last
/// token closes it. A buffer still open at the end is emitted as-is.
pub fn merge_person_names(names: Vec<String>) -> Vec<String> {
    let mut merged = Vec::with_capacity(names.len());
    let mut buffer = String::new();

    for name in names {
        if ends_in_lowercase_token(&name) {
            if !buffer.is_empty() {
                buffer.push(' ');
            }
            buffer.push_str(&name);
        } else if buffer.is_empty() {
            merged.push(name);
        } else {
            buffer.push(' ');
            buffer.push_str(&name);
            merged.push(std::mem::take(&mut buffer));
        }
    }

    if !buffer.is_empty() {
        merged.push(buffer);
    }

    merged
}

/// True when the last whitespace-delimited token has at least one letter
/// and every letter in it is lowercase.
fn ends_in_lowercase_token(name: &str) -> bool {
    let Some(token) = name.split_whitespace().next_back() else {
        return false;
    };
    let mut has_alpha = false;
    for c in token.chars() {
        if c.is_alphabetic() {
            if !c.is_lowercase() {
                return false;
            }
            has_alpha = true;
        }
    }
    has_alpha
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge(names: &[&str]) -> Vec<String> {
        merge_person_names(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn split_surname_is_merged() {
        assert_eq!(
            merge(&["Mary-Anne van", "Merwe"]),
            vec!["Mary-Anne van Merwe"]
        );
    }

    #[test]
    fn complete_name_passes_through() {
        assert_eq!(merge(&["John Smith"]), vec!["John Smith"]);
    }

    #[test]
    fn all_fragments_collapse_into_one() {
        assert_eq!(merge(&["van", "der", "Berg"]), vec!["van der Berg"]);
    }

    #[test]
    fn trailing_open_buffer_is_emitted() {
        assert_eq!(merge(&["Alice Jones", "van"]), vec!["Alice Jones", "van"]);
    }

    #[test]
    fn independent_names_stay_separate() {
        assert_eq!(
            merge(&["John Smith", "Jane Doe"]),
            vec!["John Smith", "Jane Doe"]
        );
    }

    #[test]
    fn numeric_tokens_do_not_open_a_buffer() {
        // No cased characters in the last token -> not a lowercase fragment.
        assert_eq!(merge(&["Smith 42"]), vec!["Smith 42"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(merge(&[]).is_empty());
    }
}
