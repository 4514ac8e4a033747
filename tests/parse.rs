use deducer::{config::Config, context::Context, types::err::ErrorKind};

fn written(text: &str) -> Vec<String> {
    let ctx = Context::from_text(text, Config::default()).unwrap();
    ctx.premises()
        .iter()
        .map(|premise| ctx.write(premise.expression))
        .collect()
}

fn error(text: &str) -> String {
    match Context::from_text(text, Config::default()) {
        Err(e) => e.to_string(),
        Ok(_) => panic!("an error was expected"),
    }
}

mod parse {
    use super::*;

    #[test]
    fn spellings() {
        assert_eq!(
            written("p & q\np . q\np ∧ q\np | q\np v q\np ∨ q\n~p\n-p\n¬p"),
            vec!["p ∧ q", "p ∧ q", "p ∧ q", "p ∨ q", "p ∨ q", "p ∨ q", "¬p", "¬p", "¬p"]
        );

        assert_eq!(written("p > q\np ⊃ q\np = q"), vec!["p → q", "p → q", "p ↔ q"]);
    }

    #[test]
    fn written_text_reads_back() {
        let text = "a & b | c > d\n[a v b] & {c > d}\n~(a & b)\na > b > c\na = b | c";
        let once = written(text);
        assert_eq!(written(&once.join("\n")), once);
    }

    #[test]
    fn comments_and_blank_lines() {
        let ctx = Context::from_text("# premises\n\np # first\n\n\nq\n", Config::default()).unwrap();
        let ids = ctx.premises().iter().map(|premise| premise.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![3, 6]);
    }

    #[test]
    fn empty() {
        let mut ctx = Context::from_text("# nothing here\n", Config::default()).unwrap();
        assert!(ctx.premises().is_empty());
        assert_eq!(ctx.step(), None);
    }

    #[test]
    fn read_once() {
        let mut ctx = Context::from_text("p", Config::default()).unwrap();
        assert_eq!(ctx.read_premises("q"), Err(ErrorKind::InvalidState));
    }

    #[test]
    fn error_positions() {
        assert_eq!(
            error("p\n\n¬a ∧ &"),
            "Unexpected operator. Variable, negation or ( expected. (Ln 3, Col 6)"
        );

        assert_eq!(
            error("p ∧"),
            "Unexpected end of code. Variable, negation or ( expected. (Ln 1, Col 4)"
        );

        assert_eq!(error("a b"), "End of line expected. (Ln 1, Col 3)");
    }
}
