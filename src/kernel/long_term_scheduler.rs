use std::collections::VecDeque;

use super::ProcessControlBlock;

/// Admits processes into the system as the clock reaches their arrival
/// times. The queue is kept in ascending arrival order; equal arrivals keep
/// their input order.
pub struct LongTermScheduler {
    arrival_queue: VecDeque<ProcessControlBlock>,
}

impl LongTermScheduler {
    pub fn new(mut processes: Vec<ProcessControlBlock>) -> LongTermScheduler {
        processes.sort_by_key(|pcb| pcb.get_arrival_time());

        LongTermScheduler {
            arrival_queue: processes.into(),
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.arrival_queue.is_empty()
    }

    /// Drains every process whose arrival time has been reached, marked
    /// ready, in arrival order.
    pub fn admit_arrived(&mut self, now: u64) -> Vec<ProcessControlBlock> {
        let mut admitted = Vec::new();

        while self
            .arrival_queue
            .front()
            .map_or(false, |pcb| pcb.get_arrival_time() <= now)
        {
            if let Some(mut pcb) = self.arrival_queue.pop_front() {
                pcb.mark_ready();
                admitted.push(pcb);
            }
        }

        admitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::io::ProcessSpec;
    use crate::kernel::ProcessState;

    fn pcb(pid: &str, arrival: u64) -> ProcessControlBlock {
        ProcessControlBlock::new(ProcessSpec {
            pid: pid.to_owned(),
            arrival_time: arrival,
            burst_time: 1,
            memory_demand: 1,
        })
    }

    #[test]
    fn test_long_term_scheduler_admits_in_arrival_order() {
        let mut lts = LongTermScheduler::new(vec![pcb("P3", 4), pcb("P1", 0), pcb("P2", 2)]);

        let admitted = lts.admit_arrived(2);
        let pids: Vec<&str> = admitted.iter().map(|p| p.get_pid()).collect();

        assert_eq!(pids, vec!["P1", "P2"]);
        assert!(lts.has_pending());
    }

    #[test]
    fn test_long_term_scheduler_equal_arrivals_keep_input_order() {
        let mut lts = LongTermScheduler::new(vec![pcb("B", 1), pcb("A", 1), pcb("C", 0)]);

        let admitted = lts.admit_arrived(1);
        let pids: Vec<&str> = admitted.iter().map(|p| p.get_pid()).collect();

        assert_eq!(pids, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_long_term_scheduler_admits_nothing_before_arrival() {
        let mut lts = LongTermScheduler::new(vec![pcb("P1", 5)]);

        assert!(lts.admit_arrived(4).is_empty());
        assert!(lts.has_pending());
    }

    #[test]
    fn test_long_term_scheduler_marks_admitted_ready() {
        let mut lts = LongTermScheduler::new(vec![pcb("P1", 0)]);

        let admitted = lts.admit_arrived(0);

        assert_eq!(admitted[0].state, ProcessState::Ready);
        assert!(!lts.has_pending());
    }
}
