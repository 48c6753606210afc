use thiserror::Error;

/// Shared error type for loading input and configuring a run.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no valid process records in input")]
    NoProcesses,

    #[error("process {pid} demands {demand} units but only {total} are installed")]
    UnschedulableProcess {
        pid: String,
        demand: usize,
        total: usize,
    },
}
