//! Fixed vocabulary of the study-notes source: section labels, glyphs and
//! the patterns the extracted text is matched against.

pub(super) const LABEL_REAGENTS: &str = "试剂选择";
pub(super) const LABEL_PRINCIPLE: &str = "实验原理";
pub(super) const LABEL_EQUATIONS: &str = "化学方程式";
pub(super) const LABEL_APPARATUS: &str = "实验仪器";
pub(super) const LABEL_PROCEDURE: &str = "实验操作";
pub(super) const LABEL_PHENOMENA: &str = "实验现象";
pub(super) const LABEL_CONCLUSION: &str = "实验结论";
pub(super) const LABEL_ERROR_ANALYSIS: &str = "误差分析";
pub(super) const LABEL_PRECAUTIONS: &str = "注意事项";
pub(super) const LABEL_CAUSE_ANALYSIS: &str = "原因分析";
pub(super) const LABEL_VERIFICATION: &str = "检验";
pub(super) const LABEL_FULLNESS_CHECK: &str = "验满";

/// Catch-all label for content seen before any explicit label.
pub(super) const LABEL_KEY_POINTS: &str = "要点";
/// Override label for embedded reading passages, which carry no header.
pub(super) const LABEL_FURTHER_READING: &str = "拓展阅读";

pub(super) const KNOWN_LABELS: [&str; 12] = [
    LABEL_REAGENTS,
    LABEL_PRINCIPLE,
    LABEL_EQUATIONS,
    LABEL_APPARATUS,
    LABEL_PROCEDURE,
    LABEL_PHENOMENA,
    LABEL_CONCLUSION,
    LABEL_ERROR_ANALYSIS,
    LABEL_PRECAUTIONS,
    LABEL_CAUSE_ANALYSIS,
    LABEL_VERIFICATION,
    LABEL_FULLNESS_CHECK,
];

pub(super) const PREFERRED_BLOCK_ORDER: [&str; 14] = [
    LABEL_KEY_POINTS,
    LABEL_REAGENTS,
    LABEL_PRINCIPLE,
    LABEL_EQUATIONS,
    LABEL_APPARATUS,
    LABEL_PROCEDURE,
    LABEL_PHENOMENA,
    LABEL_CONCLUSION,
    LABEL_VERIFICATION,
    LABEL_FULLNESS_CHECK,
    LABEL_PRECAUTIONS,
    LABEL_ERROR_ANALYSIS,
    LABEL_CAUSE_ANALYSIS,
    LABEL_FURTHER_READING,
];

/// Blocks searched, in order, for a one-line summary of a section.
pub(super) const TIP_SOURCE_LABELS: [&str; 4] = [
    LABEL_KEY_POINTS,
    LABEL_PRINCIPLE,
    LABEL_PHENOMENA,
    LABEL_PRECAUTIONS,
];

pub(super) const TIP_FALLBACK: &str = "点击进入页面查看：原理、操作、现象、结论、误差与注意事项。";

/// The Lavoisier experiment passage.
pub(super) const READING_MARKER: &str = "拉瓦锡实验";

pub(super) const EXPERIMENT_KEYWORD: &str = "实验";
pub(super) const PROCEDURE_KEYWORDS: [&str; 4] = ["步骤", "操作", "依次", "连接"];

pub(super) const BULLET_GLYPHS: [char; 8] = ['➢', '◆', '⚫', '❖', '•', '-', '﹣', '●'];

pub(super) const SENTENCE_TERMINATORS: [char; 8] = ['.', '。', ';', '；', ':', '：', '?', '？'];

pub(super) const FORM_FEED: char = '\u{000C}';

pub(super) const HEADING_PATTERN: &str = r"^(实验[一二三四五六七八九十]+、|拓展[一二三]、)";
pub(super) const TOC_LEADER_PATTERN: &str = r"\.{5,}";
pub(super) const PLACEHOLDER_PATTERN: &str = r"^\{#\{.*\}#\}$";
pub(super) const PAGE_NUMBER_PATTERN: &str = r"^\d+$";
pub(super) const ROMAN_PAGE_PATTERN: &str = r"^[IVXLC]+$";
