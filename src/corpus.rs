//! Corpus ingestion: build a [`Graph`] from a directory of HTML pages.
//!
//! This is the data-loading collaborator in front of the ranking core. Each
//! `.html` file becomes a node named after the file, linked to every page its
//! anchor tags reference; the graph constructor drops self-links and links
//! that leave the corpus.

use crate::graph::Graph;
use crate::Result;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const HREF_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

/// Parse every `.html` file directly under `dir` into a link graph.
///
/// Pages are interned in filename order, so node ids are stable for a given
/// corpus regardless of directory listing order.
pub fn load_corpus(dir: &Path) -> Result<Graph> {
    // The pattern is a literal; compilation cannot fail.
    let href = Regex::new(HREF_PATTERN).unwrap();

    let mut pages: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let contents = fs::read_to_string(&path)?;
        let links = href
            .captures_iter(&contents)
            .map(|c| c[1].to_owned())
            .collect();
        pages.insert(name.to_owned(), links);
    }

    Ok(Graph::from_links(pages.iter().map(|(page, links)| {
        (page.as_str(), links.iter().map(String::as_str))
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_page(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn links_are_extracted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        write_page(
            dir.path(),
            "one.html",
            r#"<html><a href="two.html">two</a> <a href="https://example.com/x">out</a></html>"#,
        );
        write_page(
            dir.path(),
            "two.html",
            r#"<a class="nav" href="one.html">back</a><a href="two.html">self</a>"#,
        );
        write_page(dir.path(), "notes.txt", "not a page");

        let g = load_corpus(dir.path()).unwrap();
        assert_eq!(g.labels(), &["one.html", "two.html"]);
        assert_eq!(g.out_links(0), &[1]);
        // Self-link dropped; only the back-link survives.
        assert_eq!(g.out_links(1), &[0]);
    }

    #[test]
    fn page_without_links_is_a_sink() {
        let dir = tempfile::tempdir().unwrap();
        write_page(dir.path(), "lonely.html", "<html>nothing here</html>");
        let g = load_corpus(dir.path()).unwrap();
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.out_degree(0), 0);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("absent");
        assert!(load_corpus(&gone).is_err());
    }
}
