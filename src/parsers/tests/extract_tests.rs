use crate::parsers::{
    PageExtractor, default_extractor, extract_page_data, get_first_paragraph, get_h1, get_images,
    get_urls,
};
use crate::results::PageData;
use url::Url;

#[cfg(test)]
mod helper_tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://blog.example.com").unwrap()
    }

    #[test]
    fn test_get_h1() {
        assert_eq!(get_h1("<html><body><h1>Test Title</h1></body></html>"), "Test Title");
        assert_eq!(get_h1("<html><body><h2>Test Title</h2></body></html>"), "");
    }

    #[test]
    fn test_get_first_paragraph() {
        let html = "<p>Outside paragraph.</p><main><p>Main paragraph.</p></main>";
        assert_eq!(get_first_paragraph(html), "Main paragraph.");
    }

    #[test]
    fn test_get_urls_absolute() {
        let html = r#"<html><body><a href="https://blog.example.com"><span>Blog</span></a></body></html>"#;
        assert_eq!(get_urls(html, &base()), vec!["https://blog.example.com"]);
    }

    #[test]
    fn test_get_urls_relative() {
        let html = r#"<html><body><a href="/blog"><span>Blog</span></a></body></html>"#;
        assert_eq!(get_urls(html, &base()), vec!["https://blog.example.com/blog"]);
    }

    #[test]
    fn test_get_urls_skips_anchors_without_href() {
        let html = r#"<a name="top">Top</a><a href="   ">Blank</a><a href="/kept">Kept</a>"#;
        assert_eq!(get_urls(html, &base()), vec!["https://blog.example.com/kept"]);
    }

    #[test]
    fn test_get_images_absolute() {
        let html = r#"<html><body><img src="https://blog.example.com/logo.png" alt="Logo"></body></html>"#;
        assert_eq!(get_images(html, &base()), vec!["https://blog.example.com/logo.png"]);
    }

    #[test]
    fn test_get_images_relative() {
        let html = r#"<html><body><img src="/logo.png" alt="Logo"></body></html>"#;
        assert_eq!(get_images(html, &base()), vec!["https://blog.example.com/logo.png"]);
    }

    #[test]
    fn test_get_images_multiple() {
        let html = r#"<html><body>
            <img src="/logo.png" alt="Logo">
            <img alt="no source">
            <img src="">
            <img src="https://cdn.example.com/banner.jpg">
        </body></html>"#;
        assert_eq!(
            get_images(html, &base()),
            vec![
                "https://blog.example.com/logo.png",
                "https://cdn.example.com/banner.jpg",
            ]
        );
    }

    #[test]
    fn test_get_images_skips_malformed_source() {
        let html = r#"<img src="http://[::1"><img src="/ok.png">"#;
        assert_eq!(get_images(html, &base()), vec!["https://blog.example.com/ok.png"]);
    }
}

#[cfg(test)]
mod page_data_tests {
    use super::*;

    fn page(
        url: &str,
        h1: &str,
        first_paragraph: &str,
        links: &[&str],
        images: &[&str],
    ) -> PageData {
        PageData::new(
            url.to_string(),
            h1.to_string(),
            first_paragraph.to_string(),
            links.iter().map(|s| s.to_string()).collect(),
            images.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_extract_page_data() {
        let cases = [
            (
                "basic: h1, main paragraph, relative link and img",
                "https://blog.example.com",
                r#"
<html>
  <body>
    <h1>Hello World</h1>
    <main><p>First paragraph inside main.</p></main>
    <a href="/about">About</a>
    <img src="/logo.png" alt="Logo">
  </body>
</html>"#,
                page(
                    "https://blog.example.com",
                    "Hello World",
                    "First paragraph inside main.",
                    &["https://blog.example.com/about"],
                    &["https://blog.example.com/logo.png"],
                ),
            ),
            (
                "fallback paragraph when no main",
                "https://blog.example.com",
                r#"
<html>
  <body>
    <h1>Title</h1>
    <p>Outside paragraph wins.</p>
    <a href="/x">x</a>
    <img src="/img.png">
  </body>
</html>"#,
                page(
                    "https://blog.example.com",
                    "Title",
                    "Outside paragraph wins.",
                    &["https://blog.example.com/x"],
                    &["https://blog.example.com/img.png"],
                ),
            ),
            (
                "malformed HTML still parsed; absolute link and image",
                "https://blog.example.com",
                r#"
<html body>
  <h1>Messy</h1>
  <a href="https://other.com/path">Other</a>
  <img src="https://cdn.example.com/banner.jpg">
</html body>"#,
                page(
                    "https://blog.example.com",
                    "Messy",
                    "",
                    &["https://other.com/path"],
                    &["https://cdn.example.com/banner.jpg"],
                ),
            ),
            (
                "no h1 and no paragraph",
                "https://blog.example.com",
                r#"
<html>
  <body>
    <a href="/only-link">Only link</a>
    <img src="/only.png">
  </body>
</html>"#,
                page(
                    "https://blog.example.com",
                    "",
                    "",
                    &["https://blog.example.com/only-link"],
                    &["https://blog.example.com/only.png"],
                ),
            ),
            (
                "multiple links and images preserve order",
                "https://blog.example.com",
                r#"
<html><body>
  <h1>t</h1>
  <main><p>p</p></main>
  <a href="/a1">a1</a>
  <a href="https://x.dev/a2">a2</a>
  <img src="/i1.png">
  <img src="https://x.dev/i2.png">
</body></html>"#,
                page(
                    "https://blog.example.com",
                    "t",
                    "p",
                    &["https://blog.example.com/a1", "https://x.dev/a2"],
                    &["https://blog.example.com/i1.png", "https://x.dev/i2.png"],
                ),
            ),
            (
                "invalid base URL gives empty links and images",
                r":\\invalidBaseURL",
                r#"
<html>
  <body>
    <h1>Title</h1>
    <p>Paragraph</p>
    <a href="/path">path</a>
    <img src="/logo.png">
  </body>
</html>"#,
                page(r":\\invalidBaseURL", "Title", "Paragraph", &[], &[]),
            ),
        ];

        for (name, page_url, html, expected) in cases {
            let actual = extract_page_data(html, page_url);
            assert_eq!(actual, expected, "case: {}", name);
        }
    }

    #[test]
    fn test_source_url_passed_through_unchanged() {
        let url = "HTTPS://Blog.Example.com/a/../b?x=1#frag";
        let data = extract_page_data(r#"<a href="c">c</a>"#, url);
        assert_eq!(data.url, url);
        assert_eq!(data.outgoing_links, vec!["https://blog.example.com/c"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let html = r#"<a href="/same">1</a><a href="https://blog.example.com/same">2</a>"#;
        let data = extract_page_data(html, "https://blog.example.com/");
        assert_eq!(
            data.outgoing_links,
            vec!["https://blog.example.com/same", "https://blog.example.com/same"]
        );
    }

    #[test]
    fn test_empty_document() {
        let data = extract_page_data("", "https://blog.example.com/");
        let expected = PageData::without_references(
            "https://blog.example.com/".to_string(),
            String::new(),
            String::new(),
        );
        assert_eq!(data, expected);
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let html = r#"<h1>t</h1><main><p>p</p></main><a href="/a">a</a><img src="/i.png">"#;
        let first = extract_page_data(html, "https://blog.example.com");
        for _ in 0..3 {
            assert_eq!(extract_page_data(html, "https://blog.example.com"), first);
        }
    }

    #[test]
    fn test_default_extractor_is_shared() {
        assert!(std::ptr::eq(default_extractor(), default_extractor()));

        let html = r#"<h1>t</h1><main><p>p</p></main><a href="/a">a</a><img src="/i.png">"#;
        assert_eq!(
            extract_page_data(html, "https://blog.example.com"),
            PageExtractor::default().extract(html, "https://blog.example.com")
        );
    }

    #[test]
    fn test_extractor_usable_across_threads() {
        let handles = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let html = format!(r#"<h1>Page {}</h1><a href="/p/{}">next</a>"#, i, i);
                    extract_page_data(&html, "https://blog.example.com")
                })
            })
            .collect::<Vec<_>>();

        for (i, handle) in handles.into_iter().enumerate() {
            let data = handle.join().unwrap();
            assert_eq!(data.h1, format!("Page {}", i));
            assert_eq!(
                data.outgoing_links,
                vec![format!("https://blog.example.com/p/{}", i)]
            );
        }
    }

    #[test]
    fn test_serializes_to_json() {
        let data = extract_page_data("<h1>t</h1>", "https://blog.example.com");
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["h1"], "t");
        assert_eq!(json["outgoing_links"], serde_json::json!([]));

        let back: PageData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }
}
