/// Normalize a raw Java language-level token to its canonical form:
/// levels below 10 in legacy dotted form (`1.8`), 10 and above bare
/// (`11`, `17`).
///
/// Tokens already in dotted form pass through unchanged, as does anything
/// that is not an integer; callers may hand in odd values and the
/// permissive pass-through is deliberate.
pub fn normalize_java_version(raw: &str) -> String {
    if raw.starts_with("1.") {
        return raw.to_string();
    }
    match raw.trim().parse::<i64>() {
        Ok(n) if n < 10 => format!("1.{n}"),
        Ok(n) => n.to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("8", "1.8")]
    #[case("6", "1.6")]
    #[case("11", "11")]
    #[case("17", "17")]
    #[case("1.8", "1.8")]
    #[case("1.6", "1.6")]
    #[case("011", "11")]
    #[case(" 8 ", "1.8")]
    #[case("not-a-number", "not-a-number")]
    #[case("${java.version}", "${java.version}")]
    #[case("", "")]
    fn test_normalize_java_version(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_java_version(raw), expected);
    }
}
