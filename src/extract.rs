use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("title").expect("Failed to parse title selector")
});

static DESCRIPTION_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("Failed to parse description selector")
});

static KEYWORDS_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[name="keywords"]"#).expect("Failed to parse keywords selector")
});

static HEADING_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h1, h2").expect("Failed to parse heading selector")
});

// Elements whose text never renders.
const HIDDEN_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

// Content roots in priority order.
static CONTENT_SELECTORS: Lazy<[Selector; 3]> = Lazy::new(|| {
    ["main", "article", "body"]
        .map(|tag| Selector::parse(tag).expect("Failed to parse content selector"))
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub headers: Vec<String>,
}

/// Metadata plus the not-yet-normalized content text of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    pub metadata: PageMetadata,
    pub content: String,
}

/// Parses `html` leniently and pulls out metadata and the main content text.
pub fn extract_page(html: &str) -> ExtractedPage {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let metadata = PageMetadata {
        title,
        meta_description: meta_content(&document, &DESCRIPTION_SELECTOR),
        meta_keywords: meta_content(&document, &KEYWORDS_SELECTOR),
        headers: document
            .select(&HEADING_SELECTOR)
            .map(|heading| visible_strings(heading).collect::<String>().trim().to_string())
            .collect(),
    };

    let content = CONTENT_SELECTORS
        .iter()
        .find_map(|selector| document.select(selector).next())
        .map(visible_text)
        .unwrap_or_default();

    ExtractedPage { metadata, content }
}

fn meta_content(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

/// Text nodes under `root` that have no hidden ancestor, in document order.
fn visible_strings<'a>(root: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    root.descendants()
        .filter(|node| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| HIDDEN_TAGS.iter().any(|tag| *tag == element.name()))
            })
        })
        .filter_map(|node| node.value().as_text().map(|text| &**text))
}

/// Every visible text node under `root`, trimmed, one per line.
fn visible_text(root: ElementRef<'_>) -> String {
    visible_strings(root)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_without_title_or_meta() {
        let page = extract_page("<html><body><main><h1>T</h1><p>Body</p></main></body></html>");

        assert_eq!(page.metadata.title, "");
        assert_eq!(page.metadata.meta_description, "");
        assert_eq!(page.metadata.meta_keywords, "");
        assert_eq!(page.metadata.headers, vec!["T"]);
        assert!(page.content.contains("Body"));
    }

    #[test]
    fn test_metadata_fields() {
        let html = r#"<html><head>
            <title>  Example Page  </title>
            <meta name="description" content="A short description">
            <meta name="keywords" content="rust, scraping">
            <meta name="description" content="second description is ignored">
        </head><body><p>x</p></body></html>"#;
        let page = extract_page(html);

        assert_eq!(page.metadata.title, "Example Page");
        assert_eq!(page.metadata.meta_description, "A short description");
        assert_eq!(page.metadata.meta_keywords, "rust, scraping");
    }

    #[test]
    fn test_meta_without_content_attribute() {
        let page = extract_page(r#"<head><meta name="description"></head><body></body>"#);
        assert_eq!(page.metadata.meta_description, "");
    }

    #[test]
    fn test_headers_in_document_order_with_nested_tags() {
        let html = "<body><h2>First</h2><h3>skipped</h3><h1> Second <em>part</em> </h1><h2></h2></body>";
        let page = extract_page(html);
        assert_eq!(page.metadata.headers, vec!["First", "Second part", ""]);
    }

    #[test]
    fn test_content_prefers_main_over_article_and_body() {
        let html = "<body><nav>menu</nav><article>story</article><main>primary</main></body>";
        assert_eq!(extract_page(html).content, "primary");
    }

    #[test]
    fn test_content_falls_back_to_article() {
        let html = "<body><nav>menu</nav><article><p>one</p><p>two</p></article></body>";
        assert_eq!(extract_page(html).content, "one\ntwo");
    }

    #[test]
    fn test_content_falls_back_to_body() {
        let html = "<body><div>alpha</div>\n\n<div> beta </div></body>";
        assert_eq!(extract_page(html).content, "alpha\nbeta");
    }

    #[test]
    fn test_content_skips_script_and_style() {
        let html = "<body><script>var x = 1;</script><style>p{}</style><p>shown</p></body>";
        assert_eq!(extract_page(html).content, "shown");
    }

    #[test]
    fn test_content_skips_noscript_fallback_markup() {
        let html = r#"<body><noscript><iframe src="https://gtm.test/ns.html" style="display:none"></iframe></noscript><p>Real text</p></body>"#;
        let page = extract_page(html);

        assert_eq!(page.content, "Real text");
        assert_eq!(crate::clean::clean_text(&page.content), vec!["Real text"]);
    }

    #[test]
    fn test_content_skips_text_nested_under_hidden_elements() {
        let html = "<body><template><p>later</p></template><noscript><p>enable js</p></noscript><p>kept</p></body>";
        assert_eq!(extract_page(html).content, "kept");
    }

    #[test]
    fn test_headers_skip_inline_script() {
        let page = extract_page("<body><h1>Title<script>track()</script></h1><h2><style>h2{}</style> Sub </h2></body>");
        assert_eq!(page.metadata.headers, vec!["Title", "Sub"]);
    }

    #[test]
    fn test_tolerates_broken_markup() {
        let page = extract_page("<body><h1>Unclosed <p>text</div></span>");
        assert_eq!(page.metadata.headers, vec!["Unclosed text"]);
        assert_eq!(page.content, "Unclosed\ntext");
    }

    #[test]
    fn test_empty_document() {
        let page = extract_page("");
        assert_eq!(page, ExtractedPage::default());
    }
}
