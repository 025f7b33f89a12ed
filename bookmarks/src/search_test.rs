use super::*;

fn work_tree() -> Vec<BookmarkNode> {
    vec![
        BookmarkNode::folder(
            "10",
            "Work",
            Some("1"),
            vec![
                BookmarkNode::bookmark("11", "Docs", Some("10"), "https://docs.example.com"),
                BookmarkNode::bookmark("12", "Notes", Some("10"), "https://notes.example.com"),
            ],
        ),
        BookmarkNode::bookmark("20", "News", Some("1"), "https://news.example.org"),
    ]
}

fn ids(view: &TreeView<'_>) -> Vec<String> {
    match view {
        TreeView::Nodes(nodes) => nodes.iter().map(|n| n.id.clone()).collect(),
        TreeView::NoResults => Vec::new(),
    }
}

#[test]
fn empty_query_shows_every_top_level_node() {
    let tree = work_tree();
    let view = filter_level(&tree, &SearchQuery::new(""));
    assert_eq!(ids(&view), vec!["10", "20"]);
}

#[test]
fn empty_query_over_empty_level_is_not_no_results() {
    let view = filter_level(&[], &SearchQuery::new(""));
    assert_eq!(view, TreeView::Nodes(Vec::new()));
}

#[test]
fn folder_visible_through_matching_descendant_and_siblings_hidden() {
    let tree = work_tree();
    let query = SearchQuery::new("doc");
    assert_eq!(ids(&filter_level(&tree, &query)), vec!["10"]);

    let work_children = tree[0].children().unwrap();
    assert_eq!(ids(&filter_level(work_children, &query)), vec!["11"]);
}

#[test]
fn matching_is_case_insensitive_on_title() {
    let tree = work_tree();
    assert_eq!(ids(&filter_level(&tree, &SearchQuery::new("NEWS"))), vec!["20"]);
}

#[test]
fn bookmark_matches_on_url() {
    let tree = work_tree();
    assert_eq!(ids(&filter_level(&tree, &SearchQuery::new("example.org"))), vec!["20"]);
}

#[test]
fn folder_url_is_never_consulted() {
    let folder = BookmarkNode::folder("1", "Empty", None, Vec::new());
    assert!(!is_visible(&folder, &SearchQuery::new("http")));
}

#[test]
fn no_match_yields_no_results() {
    let tree = work_tree();
    assert_eq!(filter_level(&tree, &SearchQuery::new("zzz")), TreeView::NoResults);
}

#[test]
fn matching_folder_title_keeps_folder_but_filters_children() {
    let tree = work_tree();
    let query = SearchQuery::new("work");
    assert_eq!(ids(&filter_level(&tree, &query)), vec!["10"]);
    assert_eq!(filter_level(tree[0].children().unwrap(), &query), TreeView::NoResults);
}

#[test]
fn deep_match_keeps_ancestor_chain() {
    let tree = vec![BookmarkNode::folder(
        "1",
        "A",
        None,
        vec![BookmarkNode::folder(
            "2",
            "B",
            Some("1"),
            vec![BookmarkNode::bookmark("3", "Target", Some("2"), "https://t.example")],
        )],
    )];
    assert!(is_visible(&tree[0], &SearchQuery::new("target")));
}

#[test]
fn query_inactive_only_when_empty() {
    assert!(!SearchQuery::new("").is_active());
    assert!(SearchQuery::new(" ").is_active());
}

#[test]
fn query_text_is_lowercased_once() {
    let query = SearchQuery::new("RuSt");
    assert_eq!(query.as_str(), "rust");
    assert!(query.is_active());
    assert!(!SearchQuery::new("").is_active());
}
