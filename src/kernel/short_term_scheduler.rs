use std::collections::VecDeque;

use super::{Memory, ProcessControlBlock};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulingAlgorithm {
    Fcfs,
    Sjf,
}

/// Maintains the ready queue and picks the next process to run.
///
/// Neither algorithm preempts: a dispatched process keeps the CPU for its
/// whole burst. Under SJF the ready queue is stably re-sorted by burst time
/// before each dispatch attempt, so ties keep their arrival order.
pub struct ShortTermScheduler {
    ready_queue: VecDeque<ProcessControlBlock>,
    scheduling_alg: SchedulingAlgorithm,
}

impl ShortTermScheduler {
    pub fn new(scheduling_alg: SchedulingAlgorithm) -> ShortTermScheduler {
        ShortTermScheduler {
            ready_queue: VecDeque::new(),
            scheduling_alg,
        }
    }

    pub fn schedule_process(&mut self, pcb: ProcessControlBlock) {
        self.ready_queue.push_back(pcb);
    }

    pub fn has_ready(&self) -> bool {
        !self.ready_queue.is_empty()
    }

    /// Dispatches the highest-priority ready process that fits in memory.
    ///
    /// Candidates are scanned in policy order and the first successful
    /// allocation wins; candidates that do not fit stay in the ready queue
    /// for a later tick. Returns `None` when no ready process fits.
    pub fn dispatch_next(&mut self, memory: &mut Memory, now: u64) -> Option<ProcessControlBlock> {
        if self.scheduling_alg == SchedulingAlgorithm::Sjf {
            self.ready_queue
                .make_contiguous()
                .sort_by_key(|pcb| pcb.get_burst_time());
        }

        for i in 0..self.ready_queue.len() {
            let demand = self.ready_queue[i].get_memory_demand();

            if let Some(address) = memory.allocate(demand) {
                if let Some(mut pcb) = self.ready_queue.remove(i) {
                    pcb.mark_running(now, address);
                    return Some(pcb);
                }
            }
        }

        None
    }
}
