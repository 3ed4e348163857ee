//! Prints sample inputs together with their ascending and descending quicksort results.

use std::process::ExitCode;

use clap::Parser;

use quicksort_rs::demo::{self, DemoError, Order};

#[derive(Parser, Debug)]
#[command(name = "quicksort_demo")]
#[command(about = "Sort integers with a Lomuto partition quicksort", long_about = None)]
struct Cli {
    /// Comma or whitespace separated integers to sort instead of the built-in samples
    #[arg(long, value_name = "LIST", conflicts_with = "absent")]
    values: Option<String>,

    /// Run on an absent input, printed as `null`
    #[arg(long)]
    absent: bool,

    /// Sorted forms to print
    #[arg(long, value_enum, default_value_t = Order::Both)]
    order: Order,
}

fn run(cli: &Cli) -> Result<String, DemoError> {
    if cli.absent {
        return Ok(demo::render_case("absent input", None, cli.order));
    }

    match &cli.values {
        Some(list) => {
            let values = demo::parse_values(list)?;
            Ok(demo::render_case("input", Some(values.as_slice()), cli.order))
        }
        None => Ok(demo::render_samples(cli.order)),
    }
}

fn main() -> ExitCode {
    // Initialize structured logging with env-based filter, defaulting to info
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
