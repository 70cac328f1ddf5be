//! Directory listing parsing — turns the origin's index page into a date catalog.

use scraper::{ElementRef, Html};

use crate::types::{DateCatalog, MenuDate, ParseError};

/// Collect the `href` of every anchor that points at a file.
///
/// Links starting with `?` (sort/filter links) and links ending with `/`
/// (sub-directories) are skipped. Order follows the document.
pub fn extract_file_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "a")
        .filter_map(|el| el.value().attr("href"))
        .filter(|href| is_file_link(href))
        .map(str::to_string)
        .collect()
}

fn is_file_link(href: &str) -> bool {
    !href.starts_with('?') && !href.ends_with('/')
}

/// The date text of a file link: everything before the first `.`.
fn date_text(href: &str) -> &str {
    href.split('.').next().unwrap_or(href)
}

/// Parse a directory listing into the dates it advertises.
///
/// Fails on the first file link whose name is not a canonical date.
pub fn parse_listing(html: &str) -> Result<DateCatalog, ParseError> {
    extract_file_links(html)
        .into_iter()
        .map(|href| match MenuDate::parse(date_text(&href)) {
            Ok(date) => Ok(date),
            Err(source) => Err(ParseError::LinkDate { href, source }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(hrefs: &[&str]) -> String {
        let rows: String = hrefs
            .iter()
            .map(|h| format!("<tr><td><a href=\"{h}\">{h}</a></td></tr>\n"))
            .collect();
        format!(
            "<!DOCTYPE html><html><head><title>Index of /json</title></head>\
             <body><h1>Index of /json</h1><table>\n{rows}</table></body></html>"
        )
    }

    #[test]
    fn test_filters_sort_links_and_directories() {
        let html = listing(&["?sort=name", "?C=M;O=D", "subdir/", "../", "2024-05-01.json"]);
        assert_eq!(extract_file_links(&html), vec!["2024-05-01.json"]);

        let dates = parse_listing(&html).unwrap();
        assert_eq!(dates, vec![MenuDate::parse("2024-05-01").unwrap()]);
    }

    #[test]
    fn test_preserves_document_order() {
        let html = listing(&["2024-05-03.json", "2024-05-01.json", "2024-05-02.json"]);
        let dates: Vec<String> = parse_listing(&html)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(dates, vec!["2024-05-03", "2024-05-01", "2024-05-02"]);
    }

    #[test]
    fn test_nested_anchors_are_found() {
        let html = "<html><body><div><p><span><a href=\"2020-07-10.json\">x</a></span></p></div>\
                    <a name=\"top\">no href</a></body></html>";
        assert_eq!(extract_file_links(html), vec!["2020-07-10.json"]);
    }

    #[test]
    fn test_leading_segment_before_first_dot() {
        let html = listing(&["2024-05-01.json.bak"]);
        let dates = parse_listing(&html).unwrap();
        assert_eq!(dates[0].to_string(), "2024-05-01");
    }

    #[test]
    fn test_malformed_link_aborts_discovery() {
        let html = listing(&["2024-05-01.json", "bad-name.json", "2024-05-02.json"]);
        match parse_listing(&html) {
            Err(ParseError::LinkDate { href, .. }) => assert_eq!(href, "bad-name.json"),
            other => panic!("expected link date error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_listing() {
        let html = listing(&["?sort=name", "archive/"]);
        assert!(parse_listing(&html).unwrap().is_empty());
        assert!(parse_listing("").unwrap().is_empty());
    }
}
