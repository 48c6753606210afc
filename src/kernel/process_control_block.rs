use crate::io::ProcessSpec;

/// Process queue status.
/// Provides information on the current state of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessState {
    New,
    Ready,
    Running,
    Completed,
}

/// The process control block. Holds the static process descriptors and the
/// timing/placement statistics accumulated over the run.
#[derive(Clone, Debug)]
pub struct ProcessControlBlock {
    pub state: ProcessState,

    pid: String,
    arrival_time: u64,
    burst_time: u64,
    memory_demand: usize,

    start_time: Option<u64>,
    completion_time: Option<u64>,
    memory_address: Option<usize>,
}

impl ProcessControlBlock {
    pub fn new(spec: ProcessSpec) -> ProcessControlBlock {
        ProcessControlBlock {
            state: ProcessState::New,
            pid: spec.pid,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            memory_demand: spec.memory_demand,
            start_time: None,
            completion_time: None,
            memory_address: None,
        }
    }

    pub fn get_pid(&self) -> &str {
        &self.pid
    }

    pub fn get_arrival_time(&self) -> u64 {
        self.arrival_time
    }

    pub fn get_burst_time(&self) -> u64 {
        self.burst_time
    }

    pub fn get_memory_demand(&self) -> usize {
        self.memory_demand
    }

    pub fn get_start_time(&self) -> Option<u64> {
        self.start_time
    }

    pub fn get_completion_time(&self) -> Option<u64> {
        self.completion_time
    }

    pub fn get_memory_address(&self) -> Option<usize> {
        self.memory_address
    }

    pub fn mark_ready(&mut self) {
        self.state = ProcessState::Ready;
    }

    pub fn mark_running(&mut self, start_time: u64, memory_address: usize) {
        self.state = ProcessState::Running;
        self.start_time = Some(start_time);
        self.memory_address = Some(memory_address);
    }

    pub fn mark_completed(&mut self, completion_time: u64) {
        self.state = ProcessState::Completed;
        self.completion_time = Some(completion_time);
    }

    /// Whether the process has consumed its full burst by `now`.
    pub fn is_burst_complete(&self, now: u64) -> bool {
        match self.start_time {
            Some(start) => now >= start + self.burst_time,
            None => false,
        }
    }

    pub fn get_turnaround_time(&self) -> Option<u64> {
        self.completion_time
            .map(|completion| completion - self.arrival_time)
    }

    pub fn get_waiting_time(&self) -> Option<u64> {
        self.get_turnaround_time()
            .map(|turnaround| turnaround - self.burst_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(pid: &str, arrival: u64, burst: u64, memory: usize) -> ProcessSpec {
        ProcessSpec {
            pid: pid.to_owned(),
            arrival_time: arrival,
            burst_time: burst,
            memory_demand: memory,
        }
    }

    #[test]
    fn test_pcb_new_starts_unset() {
        let pcb = ProcessControlBlock::new(spec("P1", 2, 5, 100));

        assert_eq!(pcb.state, ProcessState::New);
        assert_eq!(pcb.get_start_time(), None);
        assert_eq!(pcb.get_completion_time(), None);
        assert_eq!(pcb.get_memory_address(), None);
        assert_eq!(pcb.get_turnaround_time(), None);
        assert_eq!(pcb.get_waiting_time(), None);
    }

    #[test]
    fn test_pcb_metrics_after_completion() {
        let mut pcb = ProcessControlBlock::new(spec("P2", 1, 3, 50));
        pcb.mark_ready();
        pcb.mark_running(5, 0);
        pcb.mark_completed(8);

        assert_eq!(pcb.state, ProcessState::Completed);
        assert_eq!(pcb.get_turnaround_time(), Some(7));
        assert_eq!(pcb.get_waiting_time(), Some(4));
    }

    #[test]
    fn test_pcb_is_burst_complete() {
        let mut pcb = ProcessControlBlock::new(spec("P1", 0, 5, 100));

        assert!(!pcb.is_burst_complete(10));

        pcb.mark_running(3, 0);

        assert!(!pcb.is_burst_complete(7));
        assert!(pcb.is_burst_complete(8));
    }
}
