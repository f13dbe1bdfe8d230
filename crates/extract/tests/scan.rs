// ABOUTME: Integration tests for the scan pipeline against mocked HTTP servers.
// ABOUTME: Covers end-to-end extraction, counting invariants, and fetch short-circuiting.

use httpmock::prelude::*;
use pagescope_extract::Client;
use pretty_assertions::assert_eq;

fn local_client() -> Client {
    Client::builder().allow_private_networks(true).build()
}

#[tokio::test]
async fn end_to_end_minimal_document() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/page");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .header("date", "Sat, 30 Aug 2026 10:00:00 GMT")
            .body("<html><head><title>T</title></head><body><h1>H</h1><p>P</p></body></html>");
    });

    let client = local_client();
    let url = server.url("/page");
    let record = client.scan(&url).await.expect("scan should succeed");
    mock.assert();

    assert_eq!(record.metadata.url, url);
    assert_eq!(record.metadata.title, "T");
    assert_eq!(record.metadata.timestamp, "Sat, 30 Aug 2026 10:00:00 GMT");

    assert_eq!(record.content.headings, vec!["H".to_string()]);
    assert_eq!(record.content.paragraphs, vec!["P".to_string()]);
    assert_eq!(record.content.statistics.paragraph_count, 1);
    assert_eq!(record.content.statistics.heading_count, 1);
    assert_eq!(record.content.statistics.block_count, 0);

    assert!(record.media.images.is_empty());

    let layout = record.theme.layout;
    assert!(!layout.has_header);
    assert!(!layout.has_footer);
    assert!(!layout.has_sidebar);
    assert!(!layout.responsive_elements);
    assert!(!layout.grid_system);

    assert_eq!(record.theme.style_elements.links, 0);
    assert_eq!(record.theme.style_elements.buttons, 0);
}

#[tokio::test]
async fn fetch_failure_short_circuits_without_record() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/down");
        then.status(503).body("maintenance");
    });

    let client = local_client();
    let err = client
        .scan(&server.url("/down"))
        .await
        .expect_err("5xx must surface as a typed error");
    mock.assert();
    assert!(err.is_fetch());
}

#[tokio::test]
async fn connection_refused_is_a_typed_fetch_error() {
    let client = local_client();
    let err = client
        .scan("http://127.0.0.1:1/unreachable")
        .await
        .expect_err("connection refused must fail");
    assert!(err.is_fetch() || err.is_timeout());
}

#[test]
fn counting_invariant_holds_through_scan_html() {
    let client = local_client();
    let record = client
        .scan_html(
            "<html><body><p></p><p>Hello</p></body></html>",
            "https://example.com",
        )
        .unwrap();
    assert_eq!(record.content.statistics.paragraph_count, 2);
    assert_eq!(record.content.paragraphs, vec!["Hello".to_string()]);
}

#[test]
fn image_resolution_through_scan_html() {
    let client = local_client();
    let record = client
        .scan_html(
            r#"<html><body><img src="/a.png" alt="x"><img alt="skipped"></body></html>"#,
            "https://ex.com/",
        )
        .unwrap();
    assert_eq!(record.media.images.len(), 1);
    assert_eq!(record.media.images[0].url, "https://ex.com/a.png");
    assert_eq!(record.media.images[0].alt, "x");
}

#[test]
fn dual_sourced_button_count_through_scan_html() {
    let client = local_client();
    let record = client
        .scan_html(
            r#"<html><head><style>.btn{color:#fff}</style></head>
            <body><button class="btn">Go</button></body></html>"#,
            "https://example.com",
        )
        .unwrap();
    assert_eq!(record.theme.style_elements.buttons, 2);
    assert!(record.theme.colors.accent_colors.contains("#fff"));
}

#[test]
fn inline_style_joins_both_color_sets_through_scan_html() {
    let client = local_client();
    let record = client
        .scan_html(
            r#"<html><body><div style="background-color:red;color:blue">x</div></body></html>"#,
            "https://example.com",
        )
        .unwrap();
    let style = "background-color:red;color:blue";
    assert!(record.theme.colors.background_colors.contains(style));
    assert!(record.theme.colors.text_colors.contains(style));
}

#[tokio::test]
async fn full_featured_page_scans_consistently() {
    let server = MockServer::start();
    let body = r#"<!DOCTYPE html>
<html>
<head>
  <title>Shop</title>
  <meta name="viewport" content="width=device-width">
  <style>
    body { font-family: Helvetica, Arial; font-size: 16px; color: #333; }
    .accent { background: rgba(255, 0, 0, 0.9); }
  </style>
</head>
<body>
  <header class="site-header">Top</header>
  <div class="grid">
    <div class="card"><h2>Deal</h2><p>Save now</p>
      <a href="/buy"><button class="btn primary">Buy</button></a>
    </div>
    <div class="card"><p></p><img src="/promo.jpg" alt="promo"></div>
  </div>
  <footer>Bottom</footer>
</body>
</html>"#;
    server.mock(|when, then| {
        when.method(GET).path("/shop");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(body);
    });

    let client = local_client();
    let url = server.url("/shop");
    let record = client.scan(&url).await.unwrap();

    assert_eq!(record.metadata.title, "Shop");
    assert_eq!(record.content.statistics.paragraph_count, 2);
    assert_eq!(record.content.paragraphs, vec!["Save now".to_string()]);
    assert_eq!(record.content.headings, vec!["Deal".to_string()]);
    assert_eq!(record.content.statistics.block_count, 3);

    assert_eq!(record.media.images.len(), 1);
    // Simplified join against the page URL itself, not the site root.
    assert_eq!(record.media.images[0].url, format!("{}/promo.jpg", url));

    assert!(record.theme.layout.has_header);
    assert!(record.theme.layout.has_footer);
    assert!(record.theme.layout.responsive_elements);
    assert!(record.theme.layout.grid_system);
    assert!(!record.theme.layout.has_sidebar);

    assert!(record.theme.colors.accent_colors.contains("#333"));
    assert!(record
        .theme
        .colors
        .accent_colors
        .contains("rgba(255, 0, 0, 0.9)"));
    assert!(record.theme.fonts.families.contains("Helvetica, Arial"));
    assert!(record.theme.fonts.sizes.contains("16px"));

    // <button class="btn primary"> counts once per source.
    assert_eq!(record.theme.style_elements.buttons, 2);
    assert_eq!(record.theme.style_elements.links, 1);
    assert_eq!(record.theme.style_elements.cards, 2);
    assert_eq!(record.theme.style_elements.forms, 0);

    // Serialization is stable across repeated renders.
    assert_eq!(
        record.to_json_pretty().unwrap(),
        record.to_json_pretty().unwrap()
    );
}
