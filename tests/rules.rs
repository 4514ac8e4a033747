use deducer::{
    config::Config,
    context::Context,
    rules::{Application, Rule},
};

/// The deductions of `rule` applied to the premises at `indices`, written with their explanations.
fn produced(text: &str, rule: Rule, indices: &[usize]) -> Option<Vec<String>> {
    let mut ctx = Context::from_text(text, Config::default()).unwrap();
    let premises = ctx.premises().to_vec();
    let axioms = indices.iter().map(|index| premises[*index]).collect::<Vec<_>>();

    match ctx.apply_rule(rule, &axioms).unwrap() {
        Application::Produced(deductions) => Some(
            deductions
                .iter()
                .map(|deduction| format!("{} # {}", ctx.write(deduction.expression), deduction.explanation))
                .collect(),
        ),
        _ => None,
    }
}

mod unary {
    use super::*;

    #[test]
    fn simplification() {
        assert_eq!(
            produced("p ∧ q", Rule::Simplification, &[0]),
            Some(vec![
                "p # Simplification: 1".to_string(),
                "q # Simplification: 1".to_string()
            ])
        );

        assert_eq!(produced("p ∨ q", Rule::Simplification, &[0]), None);
    }

    #[test]
    fn biconditional_elimination() {
        assert_eq!(
            produced("p ↔ q", Rule::BiconditionalElimination, &[0]),
            Some(vec![
                "p → q # Biconditional Elimination: 1".to_string(),
                "q → p # Biconditional Elimination: 1".to_string()
            ])
        );
    }

    #[test]
    fn evaluation_waits_for_values() {
        let mut ctx = Context::from_text("p → q", Config::default()).unwrap();
        let premise = ctx.premises()[0];

        assert!(matches!(
            ctx.apply_rule(Rule::AntecedentEvaluation, &[premise]),
            Ok(Application::Deferred)
        ));
        assert!(matches!(
            ctx.apply_rule(Rule::ConsequentEvaluation, &[premise]),
            Ok(Application::Deferred)
        ));
    }

    #[test]
    fn arity() {
        let mut ctx = Context::from_text("p → q\np", Config::default()).unwrap();
        let premise = ctx.premises()[0];

        assert!(matches!(
            ctx.apply_rule(Rule::ModusPonens, &[premise]),
            Ok(Application::Inapplicable)
        ));
    }
}

mod binary {
    use super::*;

    #[test]
    fn modus_ponens() {
        assert_eq!(
            produced("p → q\np", Rule::ModusPonens, &[0, 1]),
            Some(vec!["q # Modus Ponens: 1, 2".to_string()])
        );

        assert_eq!(
            produced("p ∧ q → r\nq ∧ p", Rule::ModusPonens, &[1, 0]),
            Some(vec!["r # Modus Ponens: 2, 1".to_string()])
        );

        assert_eq!(produced("p → q\nq", Rule::ModusPonens, &[0, 1]), None);
    }

    #[test]
    fn modus_tollens() {
        assert_eq!(
            produced("p → q\n¬q", Rule::ModusTollens, &[0, 1]),
            Some(vec!["¬p # Modus Tollens: 1, 2".to_string()])
        );

        assert_eq!(
            produced("¬p → q\n¬q", Rule::ModusTollens, &[0, 1]),
            Some(vec!["¬¬p # Modus Tollens: 1, 2".to_string()])
        );
    }

    #[test]
    fn modus_tollens_stripped() {
        let mut config = Config::default();
        config.strip_double_negation.value = true;
        let mut ctx = Context::from_text("¬p → q\n¬q", config).unwrap();
        let premises = ctx.premises().to_vec();

        let Ok(Application::Produced(deductions)) = ctx.apply_rule(Rule::ModusTollens, &premises) else {
            panic!("modus tollens should apply");
        };
        assert_eq!(ctx.write(deductions[0].expression), "p");
    }

    #[test]
    fn hypothetical_syllogism() {
        assert_eq!(
            produced("p → q\nq → r", Rule::HypotheticalSyllogism, &[0, 1]),
            Some(vec!["p → r # Hypothetical Syllogism: 1, 2".to_string()])
        );

        assert_eq!(
            produced("q → r\np → q", Rule::HypotheticalSyllogism, &[0, 1]),
            Some(vec!["p → r # Hypothetical Syllogism: 1, 2".to_string()])
        );
    }

    #[test]
    fn negation_introduction() {
        assert_eq!(
            produced("p → q\np → ¬q", Rule::NegationIntroduction, &[0, 1]),
            Some(vec!["¬p # Negation Introduction: 1, 2".to_string()])
        );

        assert_eq!(produced("p → q\nr → ¬q", Rule::NegationIntroduction, &[0, 1]), None);
    }

    #[test]
    fn disjunctive_syllogism_needs_interest() {
        assert_eq!(produced("p ∨ q\n¬p", Rule::DisjunctiveSyllogism, &[0, 1]), None);
    }
}

mod ternary {
    use super::*;

    #[test]
    fn constructive_dilemma() {
        assert_eq!(
            produced("p → r\nq → s\np ∨ q", Rule::ConstructiveDilemma, &[0, 1, 2]),
            Some(vec!["r ∨ s # Constructive Dilemma: 1, 2, 3".to_string()])
        );
    }

    #[test]
    fn disjunction_elimination() {
        assert_eq!(
            produced("p → r\nq → r\nq ∨ p", Rule::ConstructiveDilemma, &[0, 1, 2]),
            Some(vec!["r # Disjunction Elimination: 1, 2, 3".to_string()])
        );
    }

    #[test]
    fn destructive_dilemma() {
        assert_eq!(
            produced("p → r\nq → s\n¬r ∨ ¬s", Rule::DestructiveDilemma, &[0, 1, 2]),
            Some(vec!["¬p ∨ ¬q # Destructive Dilemma: 1, 2, 3".to_string()])
        );

        assert_eq!(
            produced("¬r ∨ ¬s\np → r\nq → s", Rule::DestructiveDilemma, &[0, 1, 2]),
            Some(vec!["¬p ∨ ¬q # Destructive Dilemma: 2, 3, 1".to_string()])
        );
    }

    #[test]
    fn destructive_dilemma_with_one_consequent() {
        assert_eq!(
            produced("p → r\nq → r\n¬r", Rule::DestructiveDilemma, &[0, 1, 2]),
            None
        );
    }
}
