use super::*;

pub(super) fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Appends `text` as a new item, or joins it onto the previous item when that
/// item is short and does not end a sentence. Wrapped lines in extracted text
/// carry no paragraph break, so a short unterminated item is most likely cut
/// mid-sentence.
pub(super) fn append_item(items: &mut Vec<String>, text: &str, merge_threshold_chars: usize) {
    let text = collapse_whitespace(text);
    if text.is_empty() {
        return;
    }

    if let Some(previous) = items.last_mut() {
        if should_merge_into(previous, merge_threshold_chars) {
            previous.push(' ');
            previous.push_str(&text);
            return;
        }
    }

    items.push(text);
}

fn should_merge_into(previous: &str, merge_threshold_chars: usize) -> bool {
    let ends_sentence = previous
        .chars()
        .last()
        .map(|character| SENTENCE_TERMINATORS.contains(&character))
        .unwrap_or(false);

    previous.chars().count() < merge_threshold_chars && !ends_sentence
}

pub(super) fn starts_with_bullet(text: &str) -> bool {
    text.chars()
        .next()
        .map(|character| BULLET_GLYPHS.contains(&character))
        .unwrap_or(false)
}

/// Removes the leading run of bullet glyphs, then trims.
pub(super) fn strip_bullets(text: &str) -> &str {
    text.trim_start_matches(|character: char| BULLET_GLYPHS.contains(&character))
        .trim()
}
