//! Relative link extraction.
//!
//! Finds Markdown inline links (`[text](target)`) in a document and yields
//! the targets that name co-located files. Anchors, web URLs, and other
//! schemes are dropped, as are `#fragment` suffixes and link titles.

use std::sync::LazyLock;

/// `[text](target)` with no nested brackets or parentheses.
static RE_LINK: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\[[^\]]+\]\(([^)]+)\)").unwrap());

/// Lazily yields the local relative link targets found in `text`.
///
/// `excluded_prefixes` lists the target prefixes that are never local files
/// (see [`DEFAULT_EXCLUDED_LINK_PREFIXES`](crate::config::DEFAULT_EXCLUDED_LINK_PREFIXES)).
/// The iterator borrows its inputs, so scanning the same text again yields
/// the same sequence.
///
/// # Examples
///
/// ```
/// use skill_lint::links::relative_links;
///
/// let text = "See [ref](docs/ref.md#usage \"Ref\") and [site](https://example.com).";
/// let excluded = ["https://".to_string()];
/// let links: Vec<&str> = relative_links(text, &excluded).collect();
/// assert_eq!(links, ["docs/ref.md"]);
/// ```
pub fn relative_links<'a>(
    text: &'a str,
    excluded_prefixes: &'a [String],
) -> impl Iterator<Item = &'a str> + 'a {
    RE_LINK
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(move |m| local_target(m.as_str(), excluded_prefixes))
}

/// Reduces one raw link target to its local path, or `None` if it is not one.
fn local_target<'a>(raw: &'a str, excluded_prefixes: &[String]) -> Option<&'a str> {
    let target = raw.trim();
    if target.is_empty()
        || excluded_prefixes
            .iter()
            .any(|prefix| target.starts_with(prefix.as_str()))
    {
        return None;
    }

    let target = target.split_whitespace().next()?;
    let target = target.split('#').next()?;
    (!target.is_empty()).then_some(target)
}
