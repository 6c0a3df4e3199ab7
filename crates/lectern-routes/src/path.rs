//! Slash helpers and site base path handling.

/// Add a leading `/` if missing.
#[must_use]
pub fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// Add a trailing `/` if missing.
#[must_use]
pub fn ensure_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_owned()
    } else {
        format!("{path}/")
    }
}

/// Remove one leading `/`.
#[must_use]
pub fn strip_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Remove one trailing `/`.
#[must_use]
pub fn strip_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Remove one leading and one trailing `/`.
#[must_use]
pub fn strip_leading_and_trailing_slashes(path: &str) -> &str {
    strip_trailing_slash(strip_leading_slash(path))
}

/// Prefix a page path with the site base, keeping a trailing `/` for the root.
///
/// ```
/// use lectern_routes::path_with_base;
///
/// assert_eq!(path_with_base("/docs", "/guide/"), "/docs/guide/");
/// assert_eq!(path_with_base("/docs/", ""), "/docs/");
/// assert_eq!(path_with_base("/", "guide/"), "/guide/");
/// ```
#[must_use]
pub fn path_with_base(base: &str, path: &str) -> String {
    let base = strip_trailing_slash(base);
    let path = strip_leading_slash(path);
    format!("{base}/{path}")
}

/// Prefix a file path with the site base, without forcing a trailing `/`.
///
/// ```
/// use lectern_routes::file_with_base;
///
/// assert_eq!(file_with_base("/docs", "favicon.svg"), "/docs/favicon.svg");
/// assert_eq!(file_with_base("/docs/", ""), "/docs");
/// ```
#[must_use]
pub fn file_with_base(base: &str, path: &str) -> String {
    let base = strip_trailing_slash(base);
    let path = strip_leading_slash(path);
    if path.is_empty() {
        base.to_owned()
    } else {
        format!("{base}/{path}")
    }
}

/// Check if two pathnames are equal ignoring a trailing `/`.
#[must_use]
pub(crate) fn paths_match(a: &str, b: &str) -> bool {
    strip_trailing_slash(a) == strip_trailing_slash(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_helpers() {
        assert_eq!(ensure_leading_slash("a"), "/a");
        assert_eq!(ensure_leading_slash("/a"), "/a");
        assert_eq!(ensure_trailing_slash("a"), "a/");
        assert_eq!(ensure_trailing_slash("a/"), "a/");
        assert_eq!(strip_leading_slash("//a"), "/a");
        assert_eq!(strip_trailing_slash("a//"), "a/");
        assert_eq!(strip_leading_and_trailing_slashes("/a/b/"), "a/b");
        assert_eq!(strip_leading_and_trailing_slashes("/"), "");
    }

    #[test]
    fn test_path_with_base_root_base() {
        assert_eq!(path_with_base("/", "/"), "/");
        assert_eq!(path_with_base("/", ""), "/");
        assert_eq!(path_with_base("", "/fr/guide/"), "/fr/guide/");
    }

    #[test]
    fn test_path_with_base_nested_base() {
        assert_eq!(path_with_base("/docs", "/"), "/docs/");
        assert_eq!(path_with_base("/docs/", "/fr/"), "/docs/fr/");
    }

    #[test]
    fn test_file_with_base() {
        assert_eq!(file_with_base("/", "logo.svg"), "/logo.svg");
        assert_eq!(file_with_base("/docs", "/logo.svg"), "/docs/logo.svg");
        assert_eq!(file_with_base("/", ""), "");
    }

    #[test]
    fn test_paths_match() {
        assert!(paths_match("/guide/", "/guide"));
        assert!(paths_match("/", ""));
        assert!(!paths_match("/guide/", "/guides/"));
    }
}
