use crate::kernel::ProcessControlBlock;

/// Prints the per-process statistics table, ordered by pid, followed by the
/// average waiting and turnaround times.
pub fn print_metrics(completed: &[ProcessControlBlock]) {
    if completed.is_empty() {
        println!("No completed processes.");
        return;
    }

    let mut rows: Vec<&ProcessControlBlock> = completed.iter().collect();
    rows.sort_by(|a, b| a.get_pid().cmp(b.get_pid()));

    println!();
    println!("PID    | Arrival | Burst | Completion | Waiting | Turnaround");
    println!("-------|---------|-------|------------|---------|-----------");
    for pcb in rows {
        println!(
            "{:<6} | {:<7} | {:<5} | {:<10} | {:<7} | {}",
            pcb.get_pid(),
            pcb.get_arrival_time(),
            pcb.get_burst_time(),
            pcb.get_completion_time().unwrap_or_default(),
            pcb.get_waiting_time().unwrap_or_default(),
            pcb.get_turnaround_time().unwrap_or_default(),
        );
    }

    if let Some((avg_waiting, avg_turnaround)) = average_times(completed) {
        println!();
        println!("Avg Waiting Time: {:.2}", avg_waiting);
        println!("Avg Turnaround Time: {:.2}", avg_turnaround);
    }
}

/// Arithmetic means of waiting and turnaround time across all completed
/// processes. `None` when the collection is empty.
pub fn average_times(completed: &[ProcessControlBlock]) -> Option<(f64, f64)> {
    if completed.is_empty() {
        return None;
    }

    let total_waiting: u64 = completed.iter().filter_map(|p| p.get_waiting_time()).sum();
    let total_turnaround: u64 = completed
        .iter()
        .filter_map(|p| p.get_turnaround_time())
        .sum();
    let count = completed.len() as f64;

    Some((total_waiting as f64 / count, total_turnaround as f64 / count))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::io::ProcessSpec;

    fn completed_pcb(pid: &str, arrival: u64, burst: u64, completion: u64) -> ProcessControlBlock {
        let mut pcb = ProcessControlBlock::new(ProcessSpec {
            pid: pid.to_owned(),
            arrival_time: arrival,
            burst_time: burst,
            memory_demand: 10,
        });
        pcb.mark_ready();
        pcb.mark_running(completion - burst, 0);
        pcb.mark_completed(completion);
        pcb
    }

    #[test]
    fn test_report_average_times() {
        let completed = vec![
            completed_pcb("P1", 0, 5, 5),
            completed_pcb("P2", 1, 3, 8),
            completed_pcb("P3", 2, 8, 16),
        ];

        let (avg_waiting, avg_turnaround) = average_times(&completed).unwrap();

        assert!((avg_waiting - 10.0 / 3.0).abs() < 1e-9);
        assert!((avg_turnaround - 26.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_average_times_empty() {
        assert_eq!(average_times(&[]), None);
    }
}
