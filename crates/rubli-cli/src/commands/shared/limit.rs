/// Compute effective limit with precedence: local arg -> global flag -> fallback.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// Top-N size for chart views: `--limit`, then `general.top_n`.
#[must_use]
pub fn top_n(global: Option<u32>, fallback: usize) -> usize {
    global.map_or(fallback, |n| usize::try_from(n).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::{effective_limit, top_n};

    #[test]
    fn local_takes_precedence() {
        assert_eq!(effective_limit(Some(5), Some(10), 20), 5);
    }

    #[test]
    fn global_used_when_local_missing() {
        assert_eq!(effective_limit(None, Some(10), 20), 10);
    }

    #[test]
    fn fallback_used_when_none_set() {
        assert_eq!(effective_limit(None, None, 20), 20);
    }

    #[test]
    fn top_n_prefers_global_limit() {
        assert_eq!(top_n(Some(5), 15), 5);
        assert_eq!(top_n(None, 15), 15);
    }
}
