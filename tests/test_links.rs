use skill_lint::config::DEFAULT_EXCLUDED_LINK_PREFIXES;
use skill_lint::links::relative_links;

fn default_prefixes() -> Vec<String> {
    DEFAULT_EXCLUDED_LINK_PREFIXES
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn links(text: &str) -> Vec<String> {
    let prefixes = default_prefixes();
    relative_links(text, &prefixes).map(str::to_string).collect()
}

#[test]
fn plain_relative_link_is_yielded() {
    assert_eq!(links("See [ref](reference.md)."), ["reference.md"]);
}

#[test]
fn links_are_yielded_in_document_order() {
    let text = "[b](b.md) then [a](dir/a.md)\nand later [c](../c.md)";
    assert_eq!(links(text), ["b.md", "dir/a.md", "../c.md"]);
}

#[test]
fn excluded_schemes_are_dropped() {
    let text = "[anchor](#usage) [web](http://example.com) [tls](https://example.com/page) \
                [mail](mailto:a@b.c) [phone](tel:+123) [proto](//cdn.example.com/x.js)";
    assert!(links(text).is_empty());
}

#[test]
fn surrounding_whitespace_is_trimmed_before_scheme_check() {
    assert!(links("[web](  https://example.com  )").is_empty());
    assert_eq!(links("[ref](  ref.md  )"), ["ref.md"]);
}

#[test]
fn link_title_is_cut_at_first_whitespace() {
    assert_eq!(links("[x](scripts/run.sh \"Runner\")"), ["scripts/run.sh"]);
}

#[test]
fn fragment_is_cut() {
    assert_eq!(links("[x](guide.md#install)"), ["guide.md"]);
}

#[test]
fn title_then_fragment_order_is_applied() {
    assert_eq!(links("[x](a.md#frag \"b.md\")"), ["a.md"]);
}

#[test]
fn whitespace_only_target_is_dropped() {
    assert!(links("[x](   )").is_empty());
}

#[test]
fn empty_display_text_is_not_a_link() {
    assert!(links("[](ref.md)").is_empty());
}

#[test]
fn bare_parentheses_are_not_links() {
    assert!(links("call(foo.md) and (bar.md)").is_empty());
}

#[test]
fn image_links_count_as_links() {
    assert_eq!(links("![diagram](img/flow.png)"), ["img/flow.png"]);
}

#[test]
fn target_stops_at_first_closing_parenthesis() {
    assert_eq!(links("[x](file_(1).md)"), ["file_(1"]);
}

#[test]
fn scanning_twice_yields_the_same_sequence() {
    let text = "[a](a.md) [b](https://x.y) [c](c.md#top)";
    let prefixes = default_prefixes();
    let first: Vec<&str> = relative_links(text, &prefixes).collect();
    let second: Vec<&str> = relative_links(text, &prefixes).collect();
    assert_eq!(first, second);
    assert_eq!(first, ["a.md", "c.md"]);
}

#[test]
fn custom_prefixes_replace_the_defaults() {
    let prefixes = vec!["ftp://".to_string()];
    let found: Vec<&str> =
        relative_links("[a](ftp://host/x) [b](https://host/y)", &prefixes).collect();
    assert_eq!(found, ["https://host/y"]);
}
