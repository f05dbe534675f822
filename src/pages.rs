// Embedded at compile time; the list is not configurable at runtime.
const DEFAULT_URLS: &str = include_str!("../default_urls.txt");

/// Parses a URL list: one entry per line, blank lines and `#` comments skipped.
pub fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn default_urls() -> Vec<String> {
    parse_url_list(DEFAULT_URLS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_list_has_eleven_urls() {
        let urls = default_urls();
        assert_eq!(urls.len(), 11);
        assert!(urls.iter().all(|u| url::Url::parse(u).is_ok()));
    }

    #[test]
    fn embedded_list_keeps_language_order() {
        let urls = default_urls();
        let langs: Vec<&str> = urls
            .iter()
            .map(|u| u.trim_start_matches("https://").split('.').next().unwrap())
            .collect();
        assert_eq!(
            langs,
            ["de", "en", "da", "es", "fr", "it", "nl", "pl", "ru", "zh", "pt"]
        );
        assert_eq!(
            urls[0],
            "https://de.wikipedia.org/wiki/Technische_Universit%C3%A4t_Dresden"
        );
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let urls = parse_url_list(
            "# header\n\n  https://a.example/  \n#https://b.example/\nhttps://c.example/\n",
        );
        assert_eq!(urls, ["https://a.example/", "https://c.example/"]);
    }
}
