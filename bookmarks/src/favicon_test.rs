use super::*;

fn source() -> FaviconSource {
    FaviconSource::default()
}

// =============================================================
// favicon_candidates
// =============================================================

#[test]
fn candidates_follow_service_then_host_paths() {
    let list = favicon_candidates("https://example.com/some/page?q=1", &source());
    assert_eq!(
        list,
        vec![
            "https://www.google.com/s2/favicons?domain=example.com&sz=32",
            "https://example.com/favicon.ico",
            "https://example.com/favicon.png",
            "https://www.example.com/favicon.ico",
        ]
    );
}

#[test]
fn candidates_keep_scheme_and_drop_port() {
    let list = favicon_candidates("http://intranet.local:8080/x", &source());
    assert_eq!(list[1], "http://intranet.local/favicon.ico");
    assert_eq!(list[3], "http://www.intranet.local/favicon.ico");
}

#[test]
fn malformed_url_has_no_candidates() {
    assert!(favicon_candidates("not a url", &source()).is_empty());
    assert!(favicon_candidates("", &source()).is_empty());
}

#[test]
fn hostless_url_has_no_candidates() {
    assert!(favicon_candidates("javascript:void(0)", &source()).is_empty());
}

#[test]
fn custom_service_template_is_substituted() {
    let custom = FaviconSource {
        service_url: "https://icons.example/{host}/{size}.png".to_owned(),
        size: 64,
    };
    let list = favicon_candidates("https://rust-lang.org", &custom);
    assert_eq!(list[0], "https://icons.example/rust-lang.org/64.png");
}

// =============================================================
// FaviconChain
// =============================================================

#[test]
fn chain_starts_on_first_candidate() {
    let chain = FaviconChain::for_url("https://example.com", &source());
    assert_eq!(chain.cursor(), FaviconCursor::Loading { index: 0 });
    assert_eq!(
        chain.current_src(),
        Some("https://www.google.com/s2/favicons?domain=example.com&sz=32")
    );
}

#[test]
fn chain_without_candidates_is_fallback() {
    let chain = FaviconChain::for_url("::bad::", &source());
    assert!(chain.is_fallback());
    assert!(chain.current_src().is_none());
}

#[test]
fn errors_advance_then_exhaust_to_fallback() {
    let mut chain = FaviconChain::for_url("https://example.com", &source());
    for expected in 1..4 {
        chain.on_error();
        assert_eq!(chain.cursor(), FaviconCursor::Loading { index: expected });
    }
    chain.on_error();
    assert!(chain.is_fallback());
}

#[test]
fn fallback_is_terminal() {
    let mut chain = FaviconChain::new(vec!["a".to_owned()]);
    chain.on_error();
    assert!(chain.is_fallback());
    chain.on_load();
    chain.on_error();
    assert!(chain.is_fallback());
    assert!(chain.current_src().is_none());
}

#[test]
fn load_marks_current_candidate_loaded() {
    let mut chain = FaviconChain::new(vec!["a".to_owned(), "b".to_owned()]);
    chain.on_error();
    chain.on_load();
    assert_eq!(chain.cursor(), FaviconCursor::Loaded { index: 1 });
    assert_eq!(chain.current_src(), Some("b"));
}
