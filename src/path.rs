//! Repository path normalization

/// Canonicalize a repository-relative path.
///
/// Backslashes become `/`, runs of slashes collapse to one, and leading and
/// trailing slashes are dropped. `""` and `"///"` both normalize to `""`.
pub fn normalize_path(path: &str) -> String {
    path.split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("src/lib"), "src/lib");
        assert_eq!(normalize_path("/src/lib/"), "src/lib");
        assert_eq!(normalize_path("src\\lib\\mod.rs"), "src/lib/mod.rs");
        assert_eq!(normalize_path("src//lib///mod.rs"), "src/lib/mod.rs");
        assert_eq!(normalize_path("\\\\src\\/lib//"), "src/lib");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("/"), "");
        assert_eq!(normalize_path("////"), "");
        assert_eq!(normalize_path("\\"), "");
    }

    #[test]
    fn test_normalize_keeps_dots_and_spaces() {
        assert_eq!(normalize_path("./src"), "./src");
        assert_eq!(normalize_path("my dir/a b.txt"), "my dir/a b.txt");
    }
}
