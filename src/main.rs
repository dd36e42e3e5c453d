use clap::Parser;
use seraph_dispatch::config::{DispatchConfig, OutputFormat};
use seraph_dispatch::{DispatchError, Dispatcher};
use std::io::Write;
use tracing::{debug, error, trace};
use tracing_subscriber::EnvFilter;

/// Invoke a registered function by name
#[derive(Parser)]
#[command(name = "seraph-dispatch")]
#[command(
    about = "Invoke a registered function by name with JSON-encoded arguments",
    long_about = None,
    after_help = "Arguments are double-encoded: to pass (1, \"x\") use '[\"1\", \"\\\"x\\\"\"]'"
)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format for the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// List every registered callable and exit
    #[arg(long)]
    list: bool,

    /// <NAMESPACE> <CALLABLE> <ARGUMENTS>
    #[arg(value_name = "INPUT", trailing_var_arg = true, allow_hyphen_values = true)]
    inputs: Vec<String>,
}

impl Cli {
    fn config(&self) -> DispatchConfig {
        DispatchConfig {
            format: self.format,
            verbosity: self.verbose,
            list: self.list,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.show_target())
        .with_thread_ids(config.show_source_location())
        .with_line_number(config.show_source_location())
        .init();

    debug!("Dispatcher started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(&cli.inputs, &config) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        let code = e
            .downcast_ref::<DispatchError>()
            .map(DispatchError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(inputs: &[String], config: &DispatchConfig) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::with_defaults();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if config.list {
        for entry in dispatcher.registry().catalog() {
            writeln!(out, "{entry}")?;
        }
        return Ok(());
    }

    match config.format {
        OutputFormat::Text => dispatcher.run(inputs, &mut out)?,
        OutputFormat::Json => {
            let result = dispatcher.evaluate(inputs);
            let report = seraph_dispatch::dispatcher::InvocationReport::new(inputs, &result);
            serde_json::to_writer(&mut out, &report)?;
            out.flush()?;
            result?;
        }
    }

    Ok(())
}
