use indicatif::{ProgressBar, ProgressStyle};
use miette::{IntoDiagnostic, NamedSource, Result};
use peano::eval::Policy;
use std::{path::PathBuf, time::Duration};

use argh::FromArgs;

#[derive(FromArgs)]
/// Evaluate a program over unary natural numbers
struct Args {
    #[argh(positional)]
    path: Option<PathBuf>,

    #[argh(option, description = "program source", short = 'c')]
    code: Option<String>,

    #[argh(switch, description = "treat undefined variables and functions as errors")]
    strict: bool,

    #[argh(switch, description = "print the token stream instead of evaluating")]
    tokens: bool,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    let policy = if args.strict {
        Policy::Strict
    } else {
        Policy::Lenient
    };

    if args.path.is_none() && args.code.is_none() {
        println!("no program file given");
        return Ok(());
    }

    if let Some(path) = args.path {
        let source = std::fs::read_to_string(&path).into_diagnostic()?;
        let name = path.display().to_string();
        run(&name, source, policy, args.tokens)?;
    }

    if let Some(source) = args.code {
        run("<code>", source, policy, args.tokens)?;
    }

    Ok(())
}

fn run(name: &str, source: String, policy: Policy, tokens: bool) -> Result<()> {
    if tokens {
        return print_tokens(name, source);
    }

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg:.magenta}")
            .into_diagnostic()?
            .tick_strings(&["⢎ ", "⠎⠁", "⠊⠑", "⠈⠱", " ⡱", "⢀⡰", "⢄⡠", "⢆⡀", ""]),
    );
    pb.set_message(format!("Running {name}..."));

    let result = peano::run_with(&source, policy);
    pb.finish_and_clear();

    match result {
        Ok(Some(value)) => println!("The result is {value}"),
        Ok(None) => println!("the program has no final expression"),
        Err(err) => {
            return Err(miette::Report::new(err).with_source_code(NamedSource::new(name, source)));
        }
    }

    Ok(())
}

fn print_tokens(name: &str, source: String) -> Result<()> {
    for token in peano::lexer::Tokens::new(&source) {
        match token {
            Ok(token) => println!("{:>5}..{:<5} {}", token.span.start, token.span.end, token.kind),
            Err(err) => {
                return Err(
                    miette::Report::new(err).with_source_code(NamedSource::new(name, source.clone()))
                );
            }
        }
    }

    Ok(())
}
