//! Active navigation link highlighting.

/// Page assumed when the path has no file name.
pub const HOME_PAGE: &str = "index.html";

/// Last segment of a URL path, or [`HOME_PAGE`] for a directory path.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => HOME_PAGE,
    }
}

/// Indices of the links to mark active for `page` and `hash` (`""` or
/// `"#section"`).
///
/// A link matches when its path equals the page and either its fragment
/// equals the hash or both are absent. On the home page with no match, the
/// plain `index.html` link is marked instead.
pub fn active_links<S: AsRef<str>>(hrefs: &[S], page: &str, hash: &str) -> Vec<usize> {
    let mut active: Vec<usize> = hrefs
        .iter()
        .enumerate()
        .filter(|(_, href)| link_matches(href.as_ref(), page, hash))
        .map(|(i, _)| i)
        .collect();

    if active.is_empty() && page == HOME_PAGE {
        active.extend(hrefs.iter().position(|href| href.as_ref() == HOME_PAGE));
    }
    active
}

/// Whether the section dropdown toggle should be highlighted.
pub fn section_active(page: &str) -> bool {
    page.starts_with("week")
}

fn link_matches(href: &str, page: &str, hash: &str) -> bool {
    let (path, fragment) = match href.split_once('#') {
        Some((path, fragment)) => (path, fragment),
        None => (href, ""),
    };
    if path != page {
        return false;
    }
    if fragment.is_empty() {
        hash.is_empty()
    } else {
        hash.strip_prefix('#') == Some(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_page() {
        assert_eq!(current_page("/site/week1.html"), "week1.html");
        assert_eq!(current_page("/site/"), "index.html");
        assert_eq!(current_page(""), "index.html");
        assert_eq!(current_page("about.html"), "about.html");
    }

    #[test]
    fn test_hash_must_match() {
        let hrefs = ["index.html", "index.html#projects", "week1.html"];
        assert_eq!(active_links(&hrefs, "index.html", ""), vec![0]);
        assert_eq!(active_links(&hrefs, "index.html", "#projects"), vec![1]);
        assert_eq!(active_links(&hrefs, "week1.html", ""), vec![2]);
        assert!(active_links(&hrefs, "week1.html", "#top").is_empty());
    }

    #[test]
    fn test_home_fallback() {
        let hrefs = ["week1.html", "index.html#about", "index.html"];
        // Unknown hash on the home page still highlights home
        assert_eq!(active_links(&hrefs, "index.html", "#contact"), vec![2]);
        assert!(active_links(&["week1.html"], "index.html", "#contact").is_empty());
    }

    #[test]
    fn test_section_active() {
        assert!(section_active("week3.html"));
        assert!(!section_active("index.html"));
    }
}
