use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use schedsim::io::{loader, report};
use schedsim::kernel::{Driver, SchedulingAlgorithm};

#[derive(Parser, Debug)]
#[command(author, version, about = "Single-CPU scheduling simulator with first-fit memory placement", long_about = None)]
struct Cli {
    /// Process definition file, one `PID,ArrivalTime,BurstTime,Memory` record per line.
    #[arg(long, default_value = "processes.txt")]
    input: PathBuf,

    /// Installed memory, in MB.
    #[arg(long, default_value_t = 1024)]
    memory: usize,

    /// Scheduling policy. Prompts interactively when omitted.
    #[arg(long, value_enum)]
    policy: Option<Policy>,

    /// Override log level (e.g. info, debug, trace).
    #[arg(long, env = "SCHEDSIM_LOG_LEVEL")]
    log_level: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    Fcfs,
    Sjf,
}

impl From<Policy> for SchedulingAlgorithm {
    fn from(policy: Policy) -> SchedulingAlgorithm {
        match policy {
            Policy::Fcfs => SchedulingAlgorithm::Fcfs,
            Policy::Sjf => SchedulingAlgorithm::Sjf,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_deref().unwrap_or("info")));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let specs = loader::load_processes(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    println!("Loaded {} processes.", specs.len());
    println!("Memory: {} MB", cli.memory);

    let scheduling_alg = match cli.policy {
        Some(policy) => policy.into(),
        None => prompt_for_policy()?,
    };

    let mut driver = Driver::new(specs, cli.memory, scheduling_alg)?;

    let name = match scheduling_alg {
        SchedulingAlgorithm::Fcfs => "FCFS",
        SchedulingAlgorithm::Sjf => "SJF",
    };
    println!("--- Running {} ---", name);

    driver.run();
    report::print_metrics(driver.get_completed());

    println!("--- Simulation Complete ---");

    Ok(())
}

fn prompt_for_policy() -> anyhow::Result<SchedulingAlgorithm> {
    loop {
        print!("Enter scheduling algorithm (fcfs / sjf): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            anyhow::bail!("no scheduling algorithm selected");
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "fcfs" => return Ok(SchedulingAlgorithm::Fcfs),
            "sjf" => return Ok(SchedulingAlgorithm::Sjf),
            _ => println!("Invalid choice."),
        }
    }
}
