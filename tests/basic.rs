use deducer::{config::Config, context::Context, reports::Report, structures::step::Step};

fn run(text: &str, config: Config) -> (Context, Vec<Step>) {
    let mut ctx = Context::from_text(text, config).expect("premises parse");
    let mut steps = Vec::default();
    while let Some(step) = ctx.step() {
        steps.push(step);
    }
    (ctx, steps)
}

fn written(steps: &[Step]) -> Vec<String> {
    steps.iter().map(|step| step.to_string()).collect()
}

mod basic {
    use super::*;

    #[test]
    fn modus_ponens_to_fixed_point() {
        let mut ctx = Context::from_text("p\np → q", Config::default()).unwrap();

        assert_eq!(
            ctx.step(),
            Some(Step::Deduced {
                id: 5,
                text: "q".to_string(),
                explanation: "Antecedent of 2 evaluates as True: 1".to_string()
            })
        );
        assert_eq!(ctx.step(), None);
        assert_eq!(ctx.step(), None);

        assert_eq!(ctx.report(), Report::FixedPoint);
        assert_eq!(ctx.variable_value("q"), Some(true));
    }

    #[test]
    fn disjunctive_syllogism() {
        let (ctx, steps) = run("p ∨ q\n¬p", Config::default());

        assert_eq!(written(&steps), vec!["q # Disjunctive Syllogism: 1, 2"]);
        assert_eq!(ctx.report(), Report::FixedPoint);
        assert_eq!(ctx.variable_value("p"), Some(false));
        assert_eq!(ctx.variable_value("q"), Some(true));
    }

    #[test]
    fn nothing_to_deduce() {
        let (ctx, steps) = run("p\nq", Config::default());

        assert!(steps.is_empty());
        assert_eq!(ctx.report(), Report::FixedPoint);
    }

    #[test]
    fn inconsistent_premises() {
        let mut ctx = Context::from_text("p\n¬p", Config::default()).unwrap();

        let first = ctx.step().unwrap();
        assert!(first.is_error());
        assert_eq!(first.text(), "Inconsistent axioms: 2 / 1");

        assert_eq!(ctx.step(), None);
        assert_eq!(ctx.report(), Report::Inconsistent);
    }

    #[test]
    fn inconsistent_deduction() {
        let (ctx, steps) = run("p → q\np\n¬q", Config::default());

        assert_eq!(
            written(&steps),
            vec![
                "¬p # Consequent of 1 evaluates as False: 3",
                "# Inconsistent axioms: 6 / 2"
            ]
        );
        assert_eq!(ctx.report(), Report::Inconsistent);
    }

    #[test]
    fn inconsistent_expression() {
        let (ctx, steps) = run("¬(p → q)\n(p → q) → r\nq", Config::default());

        assert_eq!(
            written(&steps),
            vec!["# Inconsistent expression: p → q evaluated as False because of 1 but now evaluates as True"]
        );
        assert_eq!(ctx.report(), Report::Inconsistent);
    }

    #[test]
    fn inconsistent_expression_after_deduction() {
        let mut ctx = Context::from_text("¬(p → q)\n((p → q) ∨ u) → r\ns → q\ns", Config::default()).unwrap();

        assert_eq!(
            ctx.step().map(|step| step.to_string()),
            Some("q # Antecedent of 3 evaluates as True: 4".to_string())
        );

        let error = ctx.step().unwrap();
        assert!(error.is_error());
        assert_eq!(
            error.text(),
            "Inconsistent expression: p → q evaluated as False because of 1 but now evaluates as True"
        );

        assert_eq!(ctx.step(), None);
        assert_eq!(ctx.report(), Report::Inconsistent);
    }

    #[test]
    fn biconditional_premise() {
        let (ctx, steps) = run("p ↔ q\np", Config::default());

        assert_eq!(
            written(&steps[..3]),
            vec![
                "p → q # Biconditional Elimination: 1",
                "q → p # Biconditional Elimination: 1",
                "q # Antecedent of 5 evaluates as True: 2",
            ]
        );

        assert!(steps.iter().all(|step| !step.text().contains('↔')));
        assert_eq!(ctx.report(), Report::FixedPoint);
    }

    #[test]
    fn chained_deductions() {
        let (ctx, steps) = run("p ∨ q\n¬p\nq → r", Config::default());

        assert_eq!(
            written(&steps),
            vec![
                "q # Disjunctive Syllogism: 1, 2",
                "r # Antecedent of 3 evaluates as True: 6"
            ]
        );

        assert_eq!(ctx.premises_of(8), vec![1, 2, 3]);
        assert_eq!(ctx.premises_of(6), vec![1, 2]);
        assert_eq!(ctx.premises_of(3), vec![3]);
    }
}

mod config {
    use super::*;

    #[test]
    fn variable_limit() {
        let text = "a ∧ b ∧ c ∧ d ∧ e ∧ f ∧ g ∧ h ∧ i ∧ j ∧ k ∧ l ∧ m ∧ n ∧ o ∧ p ∧ q";
        let mut ctx = Context::from_text(text, Config::default()).unwrap();

        let step = ctx.step().unwrap();
        assert!(step.is_error());
        assert_eq!(step.text(), "Expression uses more than 16 variables (17).");
        assert_eq!(ctx.report(), Report::Inconsistent);
    }

    #[test]
    fn lower_variable_limit() {
        let mut config = Config::default();
        assert!(config.variable_limit.set(2));

        let (_, steps) = run("p ∧ q ∧ r", config);
        assert_eq!(written(&steps), vec!["# Expression uses more than 2 variables (3)."]);
    }

    #[test]
    fn tautologies() {
        let (_, steps) = run("p → q\nq → p", Config::default());
        assert_eq!(written(&steps), vec!["p → p # Hypothetical Syllogism: 1, 2"]);

        let mut config = Config::default();
        config.skip_tautologies.value = true;

        let (ctx, steps) = run("p → q\nq → p", config);
        assert!(steps.is_empty());
        assert_eq!(ctx.counters.tautologies, 1);
    }

    #[test]
    fn double_negation() {
        let (_, steps) = run("¬p → q\n¬q", Config::default());
        assert_eq!(written(&steps), vec!["¬¬p # Consequent of 1 evaluates as False: 2"]);

        let mut config = Config::default();
        config.strip_double_negation.value = true;

        let (_, steps) = run("¬p → q\n¬q", config);
        assert_eq!(written(&steps), vec!["p # Consequent of 1 evaluates as False: 2"]);
    }
}
