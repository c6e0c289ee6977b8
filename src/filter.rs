//! Post Search Filter
//!
//! A post matches the query when its name or its locale date string
//! contains the query (case-insensitive), or when the whole query is one
//! of the status tokens and the post has that status.

use crate::dates::DateLocale;
use crate::models::Post;

/// Query tokens that select posts by resolution status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusToken {
    /// `済`
    Resolved,
    /// `未`
    Unresolved,
}

impl StatusToken {
    pub const RESOLVED: &'static str = "済";
    pub const UNRESOLVED: &'static str = "未";

    /// Exact match only; `"済み"` is not a token
    pub fn parse(query: &str) -> Option<Self> {
        match query.trim().to_lowercase().as_str() {
            Self::RESOLVED => Some(StatusToken::Resolved),
            Self::UNRESOLVED => Some(StatusToken::Unresolved),
            _ => None,
        }
    }

    pub fn matches(&self, post: &Post) -> bool {
        match self {
            StatusToken::Resolved => post.resolved,
            StatusToken::Unresolved => !post.resolved,
        }
    }
}

/// Check a single post against an already-lowercased query
fn matches_lowered(post: &Post, query: &str, status: Option<StatusToken>, locale: DateLocale) -> bool {
    if post.lostitem_name.to_lowercase().contains(query) {
        return true;
    }
    let date_match = post
        .find_date
        .is_some_and(|date| locale.format(date).contains(query));
    date_match || status.is_some_and(|token| token.matches(post))
}

/// Filter posts by query, preserving order
pub fn filter_posts(posts: &[Post], query: &str, locale: DateLocale) -> Vec<Post> {
    let lowered = query.to_lowercase();
    let status = StatusToken::parse(query);
    posts
        .iter()
        .filter(|post| matches_lowered(post, &lowered, status, locale))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostId;
    use chrono::NaiveDate;

    fn make_post(id: &str, name: &str, date: Option<(i32, u32, u32)>, resolved: bool) -> Post {
        Post {
            id: PostId::from(id),
            lostitem_name: name.to_string(),
            find_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            resolved,
            hidden: false,
        }
    }

    fn sample() -> Vec<Post> {
        vec![
            make_post("1", "Wallet", Some((2024, 1, 5)), true),
            make_post("2", "Umbrella", Some((2024, 2, 10)), false),
        ]
    }

    fn ids(posts: &[Post]) -> Vec<String> {
        posts.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let posts = sample();
        assert_eq!(filter_posts(&posts, "", DateLocale::Ja), posts);
    }

    #[test]
    fn test_name_substring() {
        assert_eq!(ids(&filter_posts(&sample(), "wal", DateLocale::Ja)), vec!["1"]);
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let posts = vec![make_post("7", "ABCdef", None, false)];
        assert_eq!(ids(&filter_posts(&posts, "abc", DateLocale::Ja)), vec!["7"]);
        assert_eq!(ids(&filter_posts(&posts, "CDE", DateLocale::Ja)), vec!["7"]);
    }

    #[test]
    fn test_status_tokens() {
        assert_eq!(ids(&filter_posts(&sample(), "済", DateLocale::Ja)), vec!["1"]);
        assert_eq!(ids(&filter_posts(&sample(), "未", DateLocale::Ja)), vec!["2"]);
        assert_eq!(ids(&filter_posts(&sample(), " 未 ", DateLocale::Ja)), vec!["2"]);
    }

    #[test]
    fn test_status_tokens_are_exact() {
        assert_eq!(StatusToken::parse("済み"), None);
        assert!(filter_posts(&sample(), "済み", DateLocale::Ja).is_empty());
    }

    #[test]
    fn test_status_token_ignores_name_and_date() {
        let posts = vec![make_post("5", "Keys", None, true)];
        assert_eq!(ids(&filter_posts(&posts, "済", DateLocale::Ja)), vec!["5"]);
        assert!(filter_posts(&posts, "未", DateLocale::Ja).is_empty());
    }

    #[test]
    fn test_date_match_per_locale() {
        assert_eq!(ids(&filter_posts(&sample(), "2024/2", DateLocale::Ja)), vec!["2"]);
        assert_eq!(ids(&filter_posts(&sample(), "1/5/", DateLocale::EnUs)), vec!["1"]);
        assert_eq!(ids(&filter_posts(&sample(), "2024-02-10", DateLocale::Iso)), vec!["2"]);
        assert_eq!(filter_posts(&sample(), "2024", DateLocale::Ja).len(), 2);
    }

    #[test]
    fn test_missing_date_never_matches_date_clause() {
        let posts = vec![make_post("9", "Bag", None, false)];
        assert!(filter_posts(&posts, "2024", DateLocale::Ja).is_empty());
        assert!(filter_posts(&posts, "invalid", DateLocale::Ja).is_empty());
    }

    #[test]
    fn test_filter_is_deterministic() {
        let posts = sample();
        for query in ["", "wal", "済", "2024", "zzz"] {
            assert_eq!(
                filter_posts(&posts, query, DateLocale::Ja),
                filter_posts(&posts, query, DateLocale::Ja)
            );
        }
    }
}
