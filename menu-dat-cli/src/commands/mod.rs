pub(crate) mod config;
pub(crate) mod delete;
pub(crate) mod export;
pub(crate) mod import;
pub(crate) mod init;
pub(crate) mod list;
pub(crate) mod merge;
pub(crate) mod meta;
pub(crate) mod serial;
pub(crate) mod sync_icons;

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_str_limits_width() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a long description", 10), "a long ...");
        assert_eq!(truncate_str("abcdef", 2), "ab");
    }
}
