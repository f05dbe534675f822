use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

use crate::counter::PageCounts;
use crate::stats::{top_k, CountMap, LongestPage, TopEntry};

/// Renders entries as `[k1=c1, k2=c2]`.
pub fn format_entries<K: Display>(entries: &[TopEntry<K>]) -> String {
    let items: Vec<String> = entries.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

pub fn print_running<W: Write>(out: &mut W, url: &str) -> io::Result<()> {
    writeln!(out, "Running {}", url)
}

pub fn print_page_summary<W: Write>(
    out: &mut W,
    counts: &PageCounts,
    top: usize,
) -> io::Result<()> {
    writeln!(out, "Number of unique chars: {}", counts.chars.len())?;
    writeln!(out, "Most used chars {}", format_entries(&top_k(&counts.chars, top)))?;
    writeln!(out, "Number of unique words: {}", counts.words.len())?;
    writeln!(out, "Most used words {}", format_entries(&top_k(&counts.words, top)))
}

pub fn print_longest_page<W: Write>(out: &mut W, longest: &LongestPage) -> io::Result<()> {
    match &longest.url {
        Some(url) => writeln!(out, "Longest page {}", url),
        None => writeln!(out, "Longest page none"),
    }
}

pub fn print_global_summary<W: Write>(
    out: &mut W,
    chars: &CountMap<char>,
    words: &CountMap<String>,
    top: usize,
) -> io::Result<()> {
    writeln!(out, "Global most used chars {}", format_entries(&top_k(chars, top)))?;
    writeln!(out, "Global most used words {}", format_entries(&top_k(words, top)))
}

pub fn print_elapsed<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "Elapsed: {}ms", elapsed.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::count_page;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn entries_render_as_bracketed_list() {
        let entries = vec![
            TopEntry { key: "aa".to_string(), count: 2 },
            TopEntry { key: "bb".to_string(), count: 1 },
        ];
        assert_eq!(format_entries(&entries), "[aa=2, bb=1]");
        assert_eq!(format_entries::<char>(&[]), "[]");
    }

    #[test]
    fn page_summary_lines() {
        let counts = count_page("aa bb aa");
        let text = render(|out| print_page_summary(out, &counts, 2));
        assert_eq!(
            text,
            "Number of unique chars: 3\n\
             Most used chars [a=4,  =2]\n\
             Number of unique words: 2\n\
             Most used words [aa=2, bb=1]\n"
        );
    }

    #[test]
    fn longest_page_line() {
        let mut longest = LongestPage::default();
        assert_eq!(render(|out| print_longest_page(out, &longest)), "Longest page none\n");
        longest.observe("https://a.example/", 10);
        assert_eq!(
            render(|out| print_longest_page(out, &longest)),
            "Longest page https://a.example/\n"
        );
    }

    #[test]
    fn elapsed_line() {
        let text = render(|out| print_elapsed(out, Duration::from_millis(1234)));
        assert_eq!(text, "Elapsed: 1234ms\n");
    }
}
