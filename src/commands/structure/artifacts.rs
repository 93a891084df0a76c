use super::*;

/// Drops form feeds left by the extractor at page breaks and trims the line.
pub(super) fn clean_line(raw: &str) -> String {
    raw.replace(FORM_FEED, "").trim().to_string()
}

impl SectionParser {
    /// Lines carrying no content: blanks, extractor placeholders for embedded
    /// objects, and running page numbers in arabic or roman form.
    pub(super) fn is_artifact(&self, line: &str) -> bool {
        let line = line.trim();
        line.is_empty()
            || self.placeholder.is_match(line)
            || self.page_number.is_match(line)
            || self.roman_page.is_match(line)
    }
}
