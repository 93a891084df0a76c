use super::*;

impl NotationRenderer {
    pub(super) fn parse_equation(&self, text: &str) -> ChemicalEquation {
        if let Some(captures) = self.condition.captures(text) {
            if let (Some(segment), Some(condition)) = (captures.get(0), captures.get(1)) {
                let condition = condition.as_str().trim();
                if !condition.is_empty() {
                    return ChemicalEquation {
                        left: tokenize(&text[..segment.start()]),
                        operator: Some(ReactionOperator::Equals),
                        right: tokenize(&text[segment.end()..]),
                        condition: Some(condition.to_string()),
                    };
                }
            }
        }

        let tokens = tokenize(&replace_surface_arrows(text));
        match tokens
            .iter()
            .position(|token| ReactionOperator::from_glyph(token).is_some())
        {
            Some(index) => ChemicalEquation {
                left: tokens[..index].to_vec(),
                operator: ReactionOperator::from_glyph(&tokens[index]),
                right: tokens[index + 1..].to_vec(),
                condition: None,
            },
            None => ChemicalEquation {
                left: tokens,
                operator: None,
                right: Vec::new(),
                condition: None,
            },
        }
    }

    pub(super) fn render_equation(&self, text: &str) -> String {
        let equation = self.parse_equation(text);

        let connector = match (&equation.condition, equation.operator) {
            (Some(condition), _) => condition_markup(&self.render_tokens(&tokenize(condition))),
            (None, Some(operator)) => escape(operator.glyph()).into_owned(),
            (None, None) => String::new(),
        };

        [
            self.render_tokens(&equation.left),
            connector,
            self.render_tokens(&equation.right),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<String>>()
        .join(" ")
    }

    fn render_tokens(&self, tokens: &[String]) -> String {
        tokens
            .iter()
            .map(|token| {
                if is_operator_glyph(token) {
                    escape(token).into_owned()
                } else {
                    self.render_species(token)
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

fn replace_surface_arrows(text: &str) -> String {
    SURFACE_ARROWS
        .iter()
        .fold(text.to_string(), |acc, (surface, glyph)| {
            acc.replace(surface, glyph)
        })
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(ToOwned::to_owned).collect()
}
