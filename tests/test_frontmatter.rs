use skill_lint::frontmatter::{parse_frontmatter, FrontmatterError};

// ---------------------------------------------------------------------------
// Delimiters
// ---------------------------------------------------------------------------

#[test]
fn empty_document_is_missing_start() {
    assert_eq!(parse_frontmatter(""), Err(FrontmatterError::MissingStart));
}

#[test]
fn body_without_delimiter_is_missing_start() {
    let content = "# Title\n---\nname: x\n---\n";
    assert_eq!(
        parse_frontmatter(content),
        Err(FrontmatterError::MissingStart)
    );
}

#[test]
fn leading_blank_line_is_missing_start() {
    let content = "\n---\nname: x\n---\n";
    assert_eq!(
        parse_frontmatter(content),
        Err(FrontmatterError::MissingStart)
    );
}

#[test]
fn opening_delimiter_tolerates_surrounding_whitespace() {
    let meta = parse_frontmatter("  ---  \nname: x\n---\n").unwrap();
    assert_eq!(meta["name"], "x");
}

#[test]
fn byte_order_mark_before_opening_delimiter_is_ignored() {
    let meta = parse_frontmatter("\u{feff}---\nname: x\n---\n").unwrap();
    assert_eq!(meta["name"], "x");
}

#[test]
fn unclosed_block_is_missing_end() {
    let content = "---\nname: my-skill\n\n# Body\n";
    assert_eq!(parse_frontmatter(content), Err(FrontmatterError::MissingEnd));
}

#[test]
fn lone_opening_delimiter_is_missing_end() {
    assert_eq!(parse_frontmatter("---"), Err(FrontmatterError::MissingEnd));
}

#[test]
fn closing_delimiter_must_match_exactly() {
    let content = "---\nname: x\n --- \n";
    assert_eq!(parse_frontmatter(content), Err(FrontmatterError::MissingEnd));
}

#[test]
fn crlf_line_endings_close_the_block() {
    let meta = parse_frontmatter("---\r\nname: x\r\n---\r\nbody\r\n").unwrap();
    assert_eq!(meta["name"], "x");
}

#[test]
fn cr_only_line_endings_close_the_block() {
    let meta = parse_frontmatter("---\rname: x\r---\r").unwrap();
    assert_eq!(meta["name"], "x");
}

#[test]
fn unicode_line_separator_splits_lines() {
    let meta = parse_frontmatter("---\u{2028}name: x\u{2028}---").unwrap();
    assert_eq!(meta["name"], "x");
}

#[test]
fn error_messages_are_stable() {
    assert_eq!(
        FrontmatterError::MissingStart.to_string(),
        "missing frontmatter start"
    );
    assert_eq!(
        FrontmatterError::MissingEnd.to_string(),
        "missing frontmatter end"
    );
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

#[test]
fn empty_block_yields_empty_metadata() {
    let meta = parse_frontmatter("---\n---\n").unwrap();
    assert!(meta.is_empty());
}

#[test]
fn comments_blank_lines_and_bare_words_produce_no_entries() {
    let content = "---\n# name: commented\n   # indented comment\n\n   \njust words\nname: real\n---\n";
    let meta = parse_frontmatter(content).unwrap();
    assert_eq!(meta.len(), 1);
    assert_eq!(meta["name"], "real");
}

#[test]
fn value_is_split_on_first_colon_only() {
    let meta = parse_frontmatter("---\nhomepage: https://example.com:8080/x\n---\n").unwrap();
    assert_eq!(meta["homepage"], "https://example.com:8080/x");
}

#[test]
fn keys_and_values_are_trimmed() {
    let meta = parse_frontmatter("---\n  name  :   spaced-out   \n---\n").unwrap();
    assert_eq!(meta["name"], "spaced-out");
}

#[test]
fn last_duplicate_key_wins() {
    let meta = parse_frontmatter("---\nname: first\nname: second\n---\n").unwrap();
    assert_eq!(meta["name"], "second");
}

#[test]
fn empty_value_is_kept_as_empty_string() {
    let meta = parse_frontmatter("---\nname:\n---\n").unwrap();
    assert_eq!(meta["name"], "");
}

#[test]
fn lines_after_closing_delimiter_are_not_metadata() {
    let meta = parse_frontmatter("---\nname: x\n---\nauthor: body text\n---\n").unwrap();
    assert!(!meta.contains_key("author"));
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

#[test]
fn double_quoted_value_is_unwrapped() {
    let meta = parse_frontmatter("---\ndescription: \"quoted value\"\n---\n").unwrap();
    assert_eq!(meta["description"], "quoted value");
}

#[test]
fn single_quoted_value_is_unwrapped() {
    let meta = parse_frontmatter("---\nname: 'my-skill'\n---\n").unwrap();
    assert_eq!(meta["name"], "my-skill");
}

#[test]
fn only_one_layer_of_quotes_is_removed() {
    let meta = parse_frontmatter("---\nname: \"'inner'\"\n---\n").unwrap();
    assert_eq!(meta["name"], "'inner'");
}

#[test]
fn mismatched_quotes_are_left_alone() {
    let meta = parse_frontmatter("---\nname: \"half'\n---\n").unwrap();
    assert_eq!(meta["name"], "\"half'");
}

#[test]
fn lone_quote_is_left_alone() {
    let meta = parse_frontmatter("---\nname: \"\n---\n").unwrap();
    assert_eq!(meta["name"], "\"");
}

#[test]
fn empty_quotes_yield_empty_value() {
    let meta = parse_frontmatter("---\nname: \"\"\n---\n").unwrap();
    assert_eq!(meta["name"], "");
}
