use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use super::ProcessSpec;

use crate::error::SimulationError;

/// Reads process definitions from a file, one record per line:
/// `PID,ArrivalTime,BurstTime,Memory`. Blank lines and lines starting
/// with `#` are ignored; malformed records are skipped with a warning.
pub fn load_processes(path: &Path) -> Result<Vec<ProcessSpec>, SimulationError> {
    let file = File::open(path)?;
    parse_records(BufReader::new(file))
}

pub fn parse_records(reader: impl BufRead) -> Result<Vec<ProcessSpec>, SimulationError> {
    let mut specs = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_record(line) {
            Some(spec) => specs.push(spec),
            None => warn!(line = line_num + 1, "skipping malformed process record"),
        }
    }

    if specs.is_empty() {
        return Err(SimulationError::NoProcesses);
    }

    Ok(specs)
}

fn parse_record(line: &str) -> Option<ProcessSpec> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    if fields.len() != 4 {
        return None;
    }

    let pid = fields[0];
    let arrival_time: u64 = fields[1].parse().ok()?;
    let burst_time: u64 = fields[2].parse().ok()?;
    let memory_demand: usize = fields[3].parse().ok()?;

    if pid.is_empty() || burst_time == 0 || memory_demand == 0 {
        return None;
    }

    Some(ProcessSpec {
        pid: pid.to_owned(),
        arrival_time,
        burst_time,
        memory_demand,
    })
}
