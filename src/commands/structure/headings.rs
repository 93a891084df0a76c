use super::*;

impl SectionParser {
    pub(super) fn locate_headings<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Heading> {
        lines
            .iter()
            .enumerate()
            .filter_map(|(position, raw_line)| {
                let line = clean_line(raw_line.as_ref());
                if !self.heading.is_match(&line) {
                    return None;
                }
                // Table-of-contents entries repeat the heading with dot leaders.
                if self.toc_leader.is_match(&line) {
                    return None;
                }
                Some(Heading {
                    position,
                    title: line,
                })
            })
            .collect()
    }
}
