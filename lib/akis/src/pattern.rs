/// Match a subscription pattern against a concrete path.
///
/// Two pattern forms are supported:
/// - an exact path: `"auth/state"` matches only `"auth/state"`
/// - a prefix pattern ending in `#`: `"workshops/#"` matches every path
///   under `workshops/` (and `"#"` alone matches everything)
///
/// `/` is the level separator. A prefix pattern does NOT match the bare
/// prefix itself: `"workshops/#"` does not match `"workshops"`.
pub fn pattern_matches(pattern: &str, path: &str) -> bool {
    if pattern == "#" {
        return true;
    }
    if let Some(prefix) = pattern.strip_suffix("/#") {
        return path.starts_with(prefix)
            && path.len() > prefix.len()
            && path.as_bytes()[prefix.len()] == b'/';
    }
    pattern == path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        assert!(pattern_matches("auth/state", "auth/state"));
        assert!(!pattern_matches("auth/state", "auth/terms"));
        assert!(!pattern_matches("auth/state", "auth"));
    }

    #[test]
    fn prefix_match() {
        assert!(pattern_matches("workshops/#", "workshops/view"));
        assert!(pattern_matches("workshops/#", "workshops/deep/nested"));
        assert!(!pattern_matches("workshops/#", "orders/view"));
    }

    #[test]
    fn prefix_does_not_match_bare_prefix() {
        assert!(!pattern_matches("workshops/#", "workshops"));
    }

    #[test]
    fn prefix_does_not_match_similar_sibling() {
        // "auth/#" must not match "authorization/state".
        assert!(!pattern_matches("auth/#", "authorization/state"));
    }

    #[test]
    fn root_wildcard_matches_everything() {
        assert!(pattern_matches("#", "anything"));
        assert!(pattern_matches("#", "a/b/c"));
    }

    #[test]
    fn hash_in_middle_is_literal() {
        // Only a trailing "/#" (or bare "#") is a wildcard.
        assert!(!pattern_matches("a/#/b", "a/x/b"));
        assert!(pattern_matches("a/#/b", "a/#/b"));
    }
}
