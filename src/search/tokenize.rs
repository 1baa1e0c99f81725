//! Text tokenization for search indexing.
//!
//! Keyword names ("Open Browser", "Should Be Equal As Numbers") and library
//! labels are both split with the same rule, and so are queries, so a query
//! token can only ever miss because the corpus genuinely lacks it.

/// Minimum token length for indexing. Set to 1 so single-letter keyword
/// words ("X", "Y" coordinates and the like) remain searchable.
const MIN_TOKEN_LENGTH: usize = 1;

/// Splits text into lower-cased tokens on any non-alphanumeric boundary.
///
/// "Should Be Equal" → ["should", "be", "equal"]
/// "SeleniumLibrary.Open Browser" → ["seleniumlibrary", "open", "browser"]
/// "to-base64" → ["to", "base64"]
///
/// Punctuation-only input legitimately yields no tokens.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.len() >= MIN_TOKEN_LENGTH)
        .map(str::to_lowercase)
        .collect()
}

/// Normalizes a raw query the same way indexed text is normalized.
pub(crate) fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("Open Browser", vec!["open", "browser"])]
    #[case("Should Be Equal As Numbers", vec!["should", "be", "equal", "as", "numbers"])]
    #[case("Convert To Base64", vec!["convert", "to", "base64"])]
    #[case("pages/login.resource", vec!["pages", "login", "resource"])]
    #[case("BuiltIn", vec!["builtin"])]
    fn tokenize_splits_and_lowercases(#[case] input: &str, #[case] expected: Vec<&str>) {
        let expected_owned: Vec<String> = expected.iter().map(|s| (*s).to_string()).collect();
        check!(tokenize(input) == expected_owned);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("!!! ---")]
    #[case("\n\t")]
    fn tokenize_pathological_input_is_empty(#[case] input: &str) {
        check!(tokenize(input).is_empty());
    }

    #[test]
    fn query_and_index_tokenization_agree() {
        check!(tokenize("Open Browser") == tokenize(&normalize_query("  OPEN browser  ")));
    }

    #[rstest]
    #[case("  Widget  ", "widget")]
    #[case("WIDGET", "widget")]
    #[case("", "")]
    fn normalize_query_trims_and_lowercases(#[case] input: &str, #[case] expected: &str) {
        check!(normalize_query(input) == expected);
    }
}
