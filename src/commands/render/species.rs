use super::*;

pub(super) struct NotationRenderer {
    pub(super) coefficient: Regex,
    pub(super) caret_charge: Regex,
    pub(super) bare_charge: Regex,
    pub(super) atom_count: Regex,
    pub(super) condition: Regex,
}

impl NotationRenderer {
    pub(super) fn new() -> Result<Self> {
        Ok(Self {
            coefficient: Regex::new(r"^(\d+)(.*)$")
                .context("failed to compile coefficient regex")?,
            caret_charge: Regex::new(r"^(.*)\^(\d*)([+-])$")
                .context("failed to compile caret charge regex")?,
            bare_charge: Regex::new(r"^(.*?)(\d*)([+-])$")
                .context("failed to compile bare charge regex")?,
            atom_count: Regex::new(r"[A-Za-z)\]](\d+)")
                .context("failed to compile atom count regex")?,
            condition: Regex::new(r"=\[([^\]]+)\]=")
                .context("failed to compile reaction condition regex")?,
        })
    }

    /// Splits a token into coefficient, base formula and ionic charge.
    ///
    /// A caret charge (`SO4^2-`) may carry any digits. A bare trailing sign
    /// (`Mg2+`) only counts as a charge while the rest still contains a
    /// letter, so `+` or `2-` on their own stay literal.
    pub(super) fn parse_species(&self, token: &str) -> ChemicalSpecies {
        let (coefficient, rest) = match self.coefficient.captures(token) {
            Some(captures) => (
                captures.get(1).map(|value| value.as_str().to_string()),
                captures.get(2).map(|value| value.as_str()).unwrap_or_default(),
            ),
            None => (None, token),
        };

        if let Some((base, charge)) = self.split_charge(&self.caret_charge, rest, false) {
            return ChemicalSpecies {
                coefficient,
                base,
                charge: Some(charge),
            };
        }
        if let Some((base, charge)) = self.split_charge(&self.bare_charge, rest, true) {
            return ChemicalSpecies {
                coefficient,
                base,
                charge: Some(charge),
            };
        }

        ChemicalSpecies {
            coefficient,
            base: rest.to_string(),
            charge: None,
        }
    }

    fn split_charge(
        &self,
        pattern: &Regex,
        text: &str,
        base_needs_letter: bool,
    ) -> Option<(String, Charge)> {
        let captures = pattern.captures(text)?;
        let base = captures.get(1)?.as_str();
        if base_needs_letter && !base.chars().any(char::is_alphabetic) {
            return None;
        }

        let magnitude = captures.get(2)?.as_str().to_string();
        let sign = captures
            .get(3)?
            .as_str()
            .chars()
            .next()
            .and_then(ChargeSign::from_char)?;

        Some((base.to_string(), Charge { magnitude, sign }))
    }

    pub(super) fn render_species(&self, token: &str) -> String {
        if token.is_empty() {
            return String::new();
        }

        if let Some(inner) = wrapped_in_parentheses(token) {
            return format!("({})", self.render_species(inner));
        }

        let species = self.parse_species(token);
        let mut markup = String::new();
        if let Some(coefficient) = &species.coefficient {
            markup.push_str(&escape(coefficient));
        }
        markup.push_str(&self.render_atom_counts(&species.base));
        if let Some(charge) = &species.charge {
            markup.push_str(&superscript(&format!(
                "{}{}",
                charge.magnitude,
                charge.sign.as_str()
            )));
        }
        markup
    }

    /// Digits right after a letter or closing bracket are atom counts.
    fn render_atom_counts(&self, base: &str) -> String {
        let mut markup = String::new();
        let mut last = 0usize;

        for captures in self.atom_count.captures_iter(base) {
            let Some(digits) = captures.get(1) else {
                continue;
            };
            markup.push_str(&escape(&base[last..digits.start()]));
            markup.push_str(&subscript(digits.as_str()));
            last = digits.end();
        }
        markup.push_str(&escape(&base[last..]));

        markup
    }
}

/// Inner text when the whole token is one parenthesized group, as in `(OH)`
/// but not `(NH4)2SO4`.
fn wrapped_in_parentheses(token: &str) -> Option<&str> {
    let inner = token.strip_prefix('(')?.strip_suffix(')')?;
    if inner.is_empty() {
        return None;
    }

    let mut depth = 0usize;
    for character in inner.chars() {
        match character {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    (depth == 0).then_some(inner)
}
