use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use std::path::PathBuf;
use std::{fs::read_to_string, process::ExitCode};

#[derive(Debug, Parser)]
#[clap(name = "rill", version)]
pub struct CLArgs {
    #[clap(subcommand)]
    pub routine: RillCommand,
}

#[derive(Debug, Subcommand)]
pub enum RillCommand {
    /// Print the tokenized lines of a program.
    Tokenize {
        path: PathBuf,
        #[clap(long = "format", value_enum, default_value = "basic")]
        format: TokenFormat,
    },
    /// Print the parsed statements of a program.
    Parse {
        path: PathBuf,
        #[clap(long = "format", value_enum, default_value = "sexpr")]
        format: AstFormat,
    },
    /// Run a program and print its final environment.
    Run { path: PathBuf },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum TokenFormat {
    Debug,
    Basic,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum AstFormat {
    Debug,
    #[clap(name = "sexpr")]
    SExpr,
}

fn main() -> ExitCode {
    rill_main().expect("Encountered an error!")
}

fn rill_main() -> Result<ExitCode> {
    color_eyre::install().expect("Can't fail at first call!");
    let args = CLArgs::parse();
    match args.routine {
        RillCommand::Tokenize { path, format } => {
            let src = read_to_string(path)?;
            tokenize(&src, &format);
        }
        RillCommand::Parse { path, format } => {
            let src = read_to_string(&path)?;
            if !parse(&src, &path.to_string_lossy(), &format) {
                return Ok(ExitCode::from(65));
            }
        }
        RillCommand::Run { path } => {
            let src = read_to_string(&path)?;
            return run(&src, &path.to_string_lossy());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn tokenize(src: &str, format: &TokenFormat) {
    use rill::lexer::formatter::{BasicFormatter, DebugFormatter, TokenFormatter};
    use rill::lexer::tokenize;

    let formatter: Box<dyn TokenFormatter> = match format {
        TokenFormat::Debug => Box::new(DebugFormatter),
        TokenFormat::Basic => Box::new(BasicFormatter),
    };
    for line in tokenize(src) {
        println!("{}", formatter.format(&line));
    }
}

fn parse(src: &str, path: &str, format: &AstFormat) -> bool {
    use rill::parser::formatter::{
        DebugFormatter, PrettyFormatter, SExpressionFormatter, StatementFormatter,
    };
    use rill::parser::Parser;

    let formatter: Box<dyn StatementFormatter> = match format {
        AstFormat::Debug => Box::new(DebugFormatter),
        AstFormat::SExpr => Box::new(SExpressionFormatter),
    };
    match Parser::new(src).parse() {
        Ok(program) => {
            for statement in program.iter() {
                println!("{}", formatter.format(statement));
            }
            true
        }
        Err(error) => {
            let reporter = PrettyFormatter::new(src, path);
            eprint!("{}", reporter.format_error(&error));
            false
        }
    }
}

fn run(src: &str, path: &str) -> Result<ExitCode> {
    use rill::interpreter::formatter::{BasicFormatter, PrettyFormatter, ValueFormatter};
    use rill::interpreter::{interpret, Completion, InterpretError};
    use rill::parser::formatter::{
        PrettyFormatter as ParserPrettyFormatter, StatementFormatter,
    };

    match interpret(src) {
        Ok(Completion::Finished(environment)) => {
            print!("{}", BasicFormatter.format_environment(&environment));
            Ok(ExitCode::SUCCESS)
        }
        Ok(Completion::Returned(value)) => {
            println!("{}", BasicFormatter.format(&value));
            Ok(ExitCode::SUCCESS)
        }
        Err(InterpretError::Parser(error)) => {
            eprint!(
                "{}",
                ParserPrettyFormatter::new(src, path).format_error(&error)
            );
            Ok(ExitCode::from(65))
        }
        Err(InterpretError::Runtime(error)) => {
            eprint!("{}", PrettyFormatter::new(src, path).format_error(&error));
            Ok(ExitCode::from(70))
        }
    }
}
