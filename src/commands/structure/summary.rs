use super::*;

/// Blocks in reading order: the preferred labels first, then any other label
/// in first-seen order. Empty blocks are skipped.
pub(super) fn ordered_blocks(section: &Section) -> Vec<(&str, &[String])> {
    let mut ordered = PREFERRED_BLOCK_ORDER
        .iter()
        .filter_map(|label| {
            section
                .blocks
                .get(label)
                .filter(|items| !items.is_empty())
                .map(|items| (*label, items))
        })
        .collect::<Vec<(&str, &[String])>>();

    for (label, items) in section.blocks.iter() {
        let preferred = PREFERRED_BLOCK_ORDER
            .iter()
            .any(|preferred| *preferred == label);
        if preferred || items.is_empty() {
            continue;
        }
        ordered.push((label, items));
    }

    ordered
}

pub(super) fn short_tip(section: &Section, max_chars: usize) -> String {
    let first_item = TIP_SOURCE_LABELS.iter().find_map(|label| {
        section
            .blocks
            .get(label)
            .and_then(|items| items.first())
    });

    match first_item {
        Some(item) => truncate_chars(&collapse_whitespace(item), max_chars),
        None => TIP_FALLBACK.to_string(),
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let head = text.chars().take(max_chars).collect::<String>();
    format!("{}…", head.trim_end())
}

pub(super) fn normalize_title(title: &str) -> String {
    collapse_whitespace(title)
}

pub(super) fn page_filename(index: usize) -> String {
    format!("exp-{index:02}.html")
}

/// Navigation entries for the page layer; indices are 1-based.
pub(super) fn build_section_index(
    sections: &[Section],
    config: &StructureConfig,
) -> Vec<SectionIndexEntry> {
    let count = sections.len();

    sections
        .iter()
        .enumerate()
        .map(|(offset, section)| {
            let index = offset + 1;
            SectionIndexEntry {
                index,
                title: normalize_title(&section.title),
                filename: page_filename(index),
                short_tip: short_tip(section, config.tip_max_chars),
                block_labels: ordered_blocks(section)
                    .into_iter()
                    .map(|(label, _)| label.to_string())
                    .collect(),
                item_count: section.blocks.item_count(),
                prev: (index > 1).then(|| index - 1),
                next: (index < count).then(|| index + 1),
            }
        })
        .collect()
}
