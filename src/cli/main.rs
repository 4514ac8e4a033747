#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;
use crossterm::style::Stylize;

use deducer::{context::Context, reports::Report, structures::step::Step};

mod args;

use args::{config_from_args, Args};

fn main() {
    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        return;
    }

    #[cfg(feature = "log")]
    init_logging(args.log_level);

    let config = config_from_args(&args);

    let Some(path) = &args.file else {
        println!("A file of premises is required");
        std::process::exit(1);
    };

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            println!("{} {path:?}: {e}", "Failed to read".red());
            std::process::exit(1);
        }
    };

    let mut the_context = match Context::from_text(&text, config) {
        Ok(context) => context,
        Err(e) => {
            println!("{} {e}", "Parse error:".red());
            std::process::exit(1);
        }
    };

    for premise in the_context.premises() {
        println!("{}", the_context.write(premise.expression));
    }
    println!("{}", "────────────".dark_grey());

    let mut count = 0;
    loop {
        if args.limit.is_some_and(|limit| count >= limit) {
            break;
        }

        let Some(step) = the_context.step() else {
            if the_context.report() == Report::FixedPoint {
                println!("{}", "I could not deduct anything else".italic());
            }
            break;
        };
        count += 1;

        match step {
            Step::Deduced {
                id,
                text,
                explanation,
            } => {
                print!("{} {}", text.bold(), format!("# {explanation}").dark_grey());
                if args.premises {
                    let premises = the_context
                        .premises_of(id)
                        .iter()
                        .map(|premise| premise.to_string())
                        .collect::<Vec<_>>();
                    print!("{}", format!(" [{}]", premises.join(", ")).dark_grey());
                }
                println!();
            }

            Step::Error { text } => {
                println!("{}", format!("# Oops… {text}").red());
            }
        }
    }

    if the_context.report() == Report::Inconsistent {
        std::process::exit(2);
    }
}

#[cfg(feature = "log")]
fn init_logging(level: log::LevelFilter) {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level));

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                println!("Failed to start logging: {e}");
            }
        }
        Err(e) => println!("Failed to configure logging: {e}"),
    }
}
