use super::*;

pub(super) struct SectionParser {
    pub(super) heading: Regex,
    pub(super) toc_leader: Regex,
    pub(super) placeholder: Regex,
    pub(super) page_number: Regex,
    pub(super) roman_page: Regex,
    pub(super) merge_threshold_chars: usize,
}

/// A label switch triggered by line content rather than by an explicit label line.
struct ReclassifyRule {
    name: &'static str,
    applies: fn(line: &str, current: &str) -> bool,
    target: &'static str,
    consumes_line: bool,
}

/// Evaluated top to bottom; the first rule that applies wins.
const RECLASSIFY_RULES: [ReclassifyRule; 2] = [
    ReclassifyRule {
        name: "embedded_reading_passage",
        applies: |line, _| line.contains(READING_MARKER),
        target: LABEL_FURTHER_READING,
        consumes_line: true,
    },
    // Equations rendered as images leave procedure text under the equations label.
    ReclassifyRule {
        name: "procedure_after_equations",
        applies: |line, current| current == LABEL_EQUATIONS && looks_like_procedure_step(line),
        target: LABEL_PROCEDURE,
        consumes_line: false,
    },
];

fn looks_like_procedure_step(line: &str) -> bool {
    line.contains(EXPERIMENT_KEYWORD)
        && PROCEDURE_KEYWORDS
            .iter()
            .any(|keyword| line.contains(keyword))
}

impl SectionParser {
    pub(super) fn new(config: &StructureConfig) -> Result<Self> {
        Ok(Self {
            heading: Regex::new(HEADING_PATTERN).context("failed to compile heading regex")?,
            toc_leader: Regex::new(TOC_LEADER_PATTERN)
                .context("failed to compile table-of-contents leader regex")?,
            placeholder: Regex::new(PLACEHOLDER_PATTERN)
                .context("failed to compile extraction placeholder regex")?,
            page_number: Regex::new(PAGE_NUMBER_PATTERN)
                .context("failed to compile page number regex")?,
            roman_page: Regex::new(ROMAN_PAGE_PATTERN)
                .context("failed to compile roman page number regex")?,
            merge_threshold_chars: config.merge_threshold_chars,
        })
    }

    /// One section per accepted heading, in document order.
    pub(super) fn structure_document<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Section> {
        let headings = self.locate_headings(lines);
        self.sections_for_headings(lines, &headings)
    }

    /// Each heading owns the lines up to the next heading, or to the end of
    /// the document for the last one.
    pub(super) fn sections_for_headings<S: AsRef<str>>(
        &self,
        lines: &[S],
        headings: &[Heading],
    ) -> Vec<Section> {
        let mut sections = Vec::with_capacity(headings.len());

        for (index, heading) in headings.iter().enumerate() {
            let end = headings
                .get(index + 1)
                .map(|next| next.position)
                .unwrap_or(lines.len());
            let start = (heading.position + 1).min(end);

            let blocks = self.parse_section(&lines[start..end]);
            debug!(
                title = %heading.title,
                line_start = start,
                line_end = end,
                block_count = blocks.len(),
                item_count = blocks.item_count(),
                "parsed section"
            );

            sections.push(Section {
                title: heading.title.clone(),
                blocks,
            });
        }

        sections
    }

    pub(super) fn parse_section<S: AsRef<str>>(&self, lines: &[S]) -> Blocks {
        let mut blocks = Blocks::new();
        let mut current = LABEL_KEY_POINTS;
        blocks.ensure(current);

        for raw_line in lines {
            let line = clean_line(raw_line.as_ref());
            if self.is_artifact(&line) {
                continue;
            }

            if let Some(label) = KNOWN_LABELS.iter().copied().find(|label| *label == line) {
                current = label;
                blocks.ensure(current);
                continue;
            }

            if let Some(rule) = RECLASSIFY_RULES
                .iter()
                .find(|rule| (rule.applies)(&line, current))
            {
                debug!(rule = rule.name, from = current, to = rule.target, "reclassified label");
                current = rule.target;
                blocks.ensure(current);
                if rule.consumes_line {
                    continue;
                }
            }

            let text = collapse_whitespace(&line);
            if text.is_empty() {
                continue;
            }

            if starts_with_bullet(&text) {
                let stripped = strip_bullets(&text);
                if !stripped.is_empty() {
                    blocks.ensure(current).push(stripped.to_string());
                }
                continue;
            }

            append_item(blocks.ensure(current), &text, self.merge_threshold_chars);
        }

        blocks.drop_empty();
        blocks
    }
}
