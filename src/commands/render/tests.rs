use std::path::PathBuf;

use super::run::render_notation;
use super::*;

fn renderer() -> NotationRenderer {
    NotationRenderer::new().expect("renderer compiles")
}

#[test]
fn coefficient_stays_literal_and_atom_counts_are_subscripted() {
    assert_eq!(renderer().render_species("2H2O"), "2H<sub>2</sub>O");
    assert_eq!(
        renderer().render_species("C6H12O6"),
        "C<sub>6</sub>H<sub>12</sub>O<sub>6</sub>"
    );
}

#[test]
fn caret_charge_is_superscripted_after_subscripts() {
    assert_eq!(
        renderer().render_species("SO4^2-"),
        "SO<sub>4</sub><sup>2-</sup>"
    );
    assert_eq!(
        renderer().render_species("NH4^+"),
        "NH<sub>4</sub><sup>+</sup>"
    );
}

#[test]
fn bare_trailing_charge_wins_over_subscript() {
    assert_eq!(renderer().render_species("Mg2+"), "Mg<sup>2+</sup>");
    assert_eq!(renderer().render_species("Ca2+"), "Ca<sup>2+</sup>");
    assert_eq!(renderer().render_species("Cl-"), "Cl<sup>-</sup>");
    assert_eq!(renderer().render_species("2Na+"), "2Na<sup>+</sup>");
}

#[test]
fn parse_species_exposes_parts() {
    let species = renderer().parse_species("3Fe3+");
    assert_eq!(
        species,
        ChemicalSpecies {
            coefficient: Some("3".to_string()),
            base: "Fe".to_string(),
            charge: Some(Charge {
                magnitude: "3".to_string(),
                sign: ChargeSign::Positive,
            }),
        }
    );

    let species = renderer().parse_species("H2O");
    assert_eq!(species.coefficient, None);
    assert_eq!(species.base, "H2O");
    assert_eq!(species.charge, None);
}

#[test]
fn sign_without_letters_is_not_a_charge() {
    assert_eq!(renderer().render_species("+"), "+");
    assert_eq!(renderer().render_species("2-"), "2-");
    assert_eq!(renderer().parse_species("2-").charge, None);
}

#[test]
fn parenthesized_group_is_rendered_inside_literal_parentheses() {
    assert_eq!(renderer().render_species("(OH)"), "(OH)");
    assert_eq!(renderer().render_species("(NH4)"), "(NH<sub>4</sub>)");
    assert_eq!(
        renderer().render_species("Ca(OH)2"),
        "Ca(OH)<sub>2</sub>"
    );
    assert_eq!(renderer().render_species("()"), "()");
}

#[test]
fn gas_mark_stays_literal() {
    assert_eq!(renderer().render_species("O2↑"), "O<sub>2</sub>↑");
    assert_eq!(renderer().render_species("CaCO3↓"), "CaCO<sub>3</sub>↓");
}

#[test]
fn empty_token_renders_nothing() {
    assert_eq!(renderer().render_species(""), "");
}

#[test]
fn literal_text_is_escaped_once() {
    assert_eq!(renderer().render_species("<b>"), "&lt;b&gt;");
    assert_eq!(renderer().render_species("A&B2"), "A&amp;B<sub>2</sub>");
    assert_eq!(renderer().render_equation("A < B"), "A &lt; B");
}

#[test]
fn condition_segment_renders_over_connector() {
    let markup = renderer().render_equation("2H2O2 =[MnO2]= 2H2O + O2↑");

    assert_eq!(
        markup,
        "2H<sub>2</sub>O<sub>2</sub> \
         <span class=\"chem-cond\"><span class=\"chem-cond-text\">MnO<sub>2</sub></span><span class=\"chem-cond-line\"></span></span> \
         2H<sub>2</sub>O + O<sub>2</sub>↑"
    );
}

#[test]
fn parse_equation_splits_around_condition() {
    let equation = renderer().parse_equation("2KMnO4 =[加热]= K2MnO4 + MnO2 + O2↑");

    assert_eq!(equation.left, vec!["2KMnO4"]);
    assert_eq!(equation.operator, Some(ReactionOperator::Equals));
    assert_eq!(equation.condition.as_deref(), Some("加热"));
    assert_eq!(equation.right, vec!["K2MnO4", "+", "MnO2", "+", "O2↑"]);
}

#[test]
fn surface_arrows_become_glyphs() {
    assert_eq!(
        renderer().render_equation("C + O2 -> CO2"),
        "C + O<sub>2</sub> → CO<sub>2</sub>"
    );
    assert_eq!(
        renderer().render_equation("N2 + 3H2 <=> 2NH3"),
        "N<sub>2</sub> + 3H<sub>2</sub> ⇌ 2NH<sub>3</sub>"
    );
    assert_eq!(
        renderer().parse_equation("H2 + I2 <-> 2HI").operator,
        Some(ReactionOperator::Reversible)
    );
}

#[test]
fn plain_equals_equation_keeps_operator() {
    let equation = renderer().parse_equation("CaCO3  =  CaO + CO2↑");
    assert_eq!(equation.operator, Some(ReactionOperator::Equals));
    assert_eq!(equation.condition, None);

    assert_eq!(
        renderer().render_equation("CaCO3  =  CaO + CO2↑"),
        "CaCO<sub>3</sub> = CaO + CO<sub>2</sub>↑"
    );
}

#[test]
fn text_without_operator_renders_as_species_list() {
    let equation = renderer().parse_equation("Fe3+ 溶液");
    assert_eq!(equation.operator, None);
    assert!(equation.right.is_empty());

    assert_eq!(renderer().render_equation("Fe3+ 溶液"), "Fe<sup>3+</sup> 溶液");
    assert_eq!(renderer().render_equation("   "), "");
}

#[test]
fn empty_condition_brackets_fall_back_to_literal_text() {
    assert_eq!(renderer().render_equation("A =[]= B"), "A =[]= B");
}

#[test]
fn blank_condition_falls_back_to_literal_text() {
    let renderer = renderer();
    assert_eq!(renderer.render_equation("A =[ ]= B"), "A =[ ]= B");
    assert_eq!(renderer.parse_equation("A =[ ]= B").condition, None);
}

#[test]
fn render_notation_dispatches_on_mode() {
    let renderer = renderer();
    assert_eq!(
        render_notation(&renderer, NotationMode::Species, " SO4^2- "),
        "SO<sub>4</sub><sup>2-</sup>"
    );
    assert_eq!(
        render_notation(&renderer, NotationMode::Equation, "C + O2 -> CO2"),
        "C + O<sub>2</sub> → CO<sub>2</sub>"
    );
}

#[test]
fn run_rejects_missing_or_conflicting_inputs() {
    let neither = RenderArgs {
        mode: NotationMode::Equation,
        text: None,
        input: None,
    };
    assert!(run(neither).is_err());

    let both = RenderArgs {
        mode: NotationMode::Equation,
        text: Some("H2O".to_string()),
        input: Some(PathBuf::from("equations.txt")),
    };
    assert!(run(both).is_err());
}

#[test]
fn run_reports_unreadable_input_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let args = RenderArgs {
        mode: NotationMode::Species,
        text: None,
        input: Some(dir.path().join("missing.txt")),
    };
    assert!(run(args).is_err());
}

#[test]
fn run_renders_every_non_empty_line_of_input_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("notation.txt");
    fs::write(&input, "C + O2 -> CO2\n\n  2H2O  \n").expect("write input");

    let args = RenderArgs {
        mode: NotationMode::Equation,
        text: None,
        input: Some(input),
    };
    run(args).expect("render succeeds");
}
