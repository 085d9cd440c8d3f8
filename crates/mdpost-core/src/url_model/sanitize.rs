//! Filename sanitization.

/// Characters that are unsafe in filenames on common filesystems.
const UNSAFE: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Sanitizes a candidate filename by replacing every occurrence of
/// `\ / * ? : " < > |` with `_`. The result never contains a path separator.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if UNSAFE.contains(&c) { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_separators_and_wildcards() {
        assert_eq!(sanitize_filename("a/b*c?.jpg"), "a_b_c_.jpg");
        assert_eq!(sanitize_filename("a\\b.png"), "a_b.png");
    }

    #[test]
    fn replaces_quotes_colons_and_brackets() {
        assert_eq!(sanitize_filename("a:b\"c<d>e|f"), "a_b_c_d_e_f");
    }

    #[test]
    fn preserves_spaces_case_and_unicode() {
        assert_eq!(sanitize_filename("a b.PNG"), "a b.PNG");
        assert_eq!(sanitize_filename("图 片.png"), "图 片.png");
    }

    #[test]
    fn never_contains_path_separator() {
        let out = sanitize_filename("..//..//etc/passwd");
        assert!(!out.contains('/'));
        assert!(!out.contains('\\'));
    }
}
