//! Transient notation model and the inline markup vocabulary it renders to.

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ChargeSign {
    Positive,
    Negative,
}

impl ChargeSign {
    pub(super) fn from_char(character: char) -> Option<Self> {
        match character {
            '+' => Some(Self::Positive),
            '-' => Some(Self::Negative),
            _ => None,
        }
    }

    pub(super) fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "+",
            Self::Negative => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Charge {
    /// Empty for a single charge (`Cl-`).
    pub(super) magnitude: String,
    pub(super) sign: ChargeSign,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ChemicalSpecies {
    pub(super) coefficient: Option<String>,
    pub(super) base: String,
    pub(super) charge: Option<Charge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ReactionOperator {
    Arrow,
    Reversible,
    Equals,
}

impl ReactionOperator {
    pub(super) fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph {
            ARROW => Some(Self::Arrow),
            REVERSIBLE_ARROW => Some(Self::Reversible),
            EQUALS => Some(Self::Equals),
            _ => None,
        }
    }

    pub(super) fn glyph(self) -> &'static str {
        match self {
            Self::Arrow => ARROW,
            Self::Reversible => REVERSIBLE_ARROW,
            Self::Equals => EQUALS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ChemicalEquation {
    pub(super) left: Vec<String>,
    pub(super) operator: Option<ReactionOperator>,
    pub(super) right: Vec<String>,
    pub(super) condition: Option<String>,
}

pub(super) const PLUS: &str = "+";
pub(super) const ARROW: &str = "→";
pub(super) const REVERSIBLE_ARROW: &str = "⇌";
pub(super) const EQUALS: &str = "=";

/// Tokens passed through literally; everything else is a species.
pub(super) const OPERATOR_GLYPHS: [&str; 4] = [PLUS, EQUALS, ARROW, REVERSIBLE_ARROW];

/// Surface spellings replaced before tokenizing. Reversible forms go first
/// since `<->` contains `->`.
pub(super) const SURFACE_ARROWS: [(&str, &str); 3] = [
    ("<->", REVERSIBLE_ARROW),
    ("<=>", REVERSIBLE_ARROW),
    ("->", ARROW),
];

pub(super) fn is_operator_glyph(token: &str) -> bool {
    OPERATOR_GLYPHS.iter().any(|glyph| *glyph == token)
}

pub(super) fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

pub(super) fn subscript(digits: &str) -> String {
    format!("<sub>{}</sub>", escape(digits))
}

pub(super) fn superscript(text: &str) -> String {
    format!("<sup>{}</sup>", escape(text))
}

/// Condition text stacked over the reaction connector; `text_markup` is
/// already escaped.
pub(super) fn condition_markup(text_markup: &str) -> String {
    format!(
        "<span class=\"chem-cond\"><span class=\"chem-cond-text\">{text_markup}</span><span class=\"chem-cond-line\"></span></span>"
    )
}
