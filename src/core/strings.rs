use unicode_segmentation::UnicodeSegmentation;

pub fn title_case(s: &str) -> String {
    s.split_word_bounds()
        .map(|w| {
            let mut g = w.graphemes(true);
            match g.next() {
                Some(first) => format!("{}{}", first.to_uppercase(), g.as_str().to_lowercase()),
                None => String::new(),
            }
        })
        .collect()
}

/// Strip trailing whitespace from captured command output
pub fn trim_output(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).trim_end().to_string()
}
