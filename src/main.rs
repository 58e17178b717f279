mod error;
mod input;

use clap::Parser;
use condq::query::check_entries;
use condq::{ArrayStyle, ConditionBuilder, SkipCategory, SkipWhen};
use error::CliError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

const ENV_LOG: &str = "CONDQ_LOG";

#[derive(Parser)]
#[command(name = "condq", about = "Render structured filter expressions")]
struct Cli {
    #[arg(
        long,
        value_enum,
        env = "CONDQ_ARRAY_STYLE",
        default_value_t = ArrayStyle::Parens,
        help = "How array values are wrapped"
    )]
    array_style: ArrayStyle,

    #[arg(long, value_enum, help = "Keep conditions whose value falls in this category")]
    keep: Vec<SkipCategory>,

    #[arg(long, help = "Also drop conditions whose value is an empty object")]
    skip_empty_objects: bool,

    #[arg(long, help = "Print the normalized structured form instead of the expression")]
    json: bool,

    #[arg(long, help = "Check operator/value pairs and fail on mismatches")]
    check: bool,

    #[arg(help = "Structured filter as JSON or YAML; read from stdin when omitted")]
    file: Option<PathBuf>,
}

impl Cli {
    fn skip_overrides(&self) -> SkipWhen {
        let overrides = if self.skip_empty_objects {
            SkipWhen::default().set(SkipCategory::EmptyObject, true)
        } else {
            SkipWhen::default()
        };
        self.keep
            .iter()
            .fold(overrides, |acc, category| acc.set(*category, false))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging() {
    let filter = std::env::var(ENV_LOG)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_env_filter(filter)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let source = input::read_source(cli.file.as_deref())?;
    let entries = input::parse_entries(&source)?;
    debug!(entries = entries.len(), "loaded structured filter");

    let mut builder = ConditionBuilder::new();
    builder.skip_when(cli.skip_overrides()).replay(entries);

    if cli.check {
        let problems = check_entries(builder.entries());
        for problem in &problems {
            eprintln!("{}: {}", problem.field, problem.error);
        }
        if !problems.is_empty() {
            return Ok(ExitCode::from(1));
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&builder)?);
    } else {
        println!("{}", builder.render(cli.array_style));
    }

    Ok(ExitCode::from(0))
}
