use tracing::info;

use super::*;

use crate::error::SimulationError;
use crate::io::ProcessSpec;

/// Drives the simulation: owns the clock, the memory region, both
/// schedulers, the running slot, and the completed-process collection.
///
/// Each tick admits arrivals, dispatches onto an idle CPU, advances the
/// clock, then checks the running process for completion. Dispatch is
/// non-preemptive; at most one process runs at a time.
pub struct Driver {
    memory: Memory,
    lts: LongTermScheduler,
    sts: ShortTermScheduler,
    running: Option<ProcessControlBlock>,
    completed: Vec<ProcessControlBlock>,
    trace: Vec<TraceEvent>,
    clock: u64,
}

impl Driver {
    /// Builds a driver over validated process descriptors.
    ///
    /// Fails when any descriptor demands more memory than is installed;
    /// such a process could never be dispatched and the run would never
    /// terminate.
    pub fn new(
        specs: Vec<ProcessSpec>,
        total_memory: usize,
        scheduling_alg: SchedulingAlgorithm,
    ) -> Result<Driver, SimulationError> {
        for spec in &specs {
            if spec.memory_demand > total_memory {
                return Err(SimulationError::UnschedulableProcess {
                    pid: spec.pid.clone(),
                    demand: spec.memory_demand,
                    total: total_memory,
                });
            }
        }

        let processes = specs.into_iter().map(ProcessControlBlock::new).collect();

        Ok(Driver {
            memory: Memory::new(total_memory),
            lts: LongTermScheduler::new(processes),
            sts: ShortTermScheduler::new(scheduling_alg),
            running: None,
            completed: Vec::new(),
            trace: Vec::new(),
            clock: 0,
        })
    }

    /// Runs the clock loop until every process has completed.
    pub fn run(&mut self) {
        while self.lts.has_pending() || self.sts.has_ready() || self.running.is_some() {
            self.admit_arrivals();

            if self.running.is_none() {
                self.dispatch();
            }

            self.clock += 1;

            self.check_completion();
        }
    }

    fn admit_arrivals(&mut self) {
        for pcb in self.lts.admit_arrived(self.clock) {
            info!(tick = self.clock, pid = pcb.get_pid(), "process arrived");
            self.trace.push(TraceEvent::Arrival {
                tick: self.clock,
                pid: pcb.get_pid().to_owned(),
            });
            self.sts.schedule_process(pcb);
        }
    }

    fn dispatch(&mut self) {
        if let Some(pcb) = self.sts.dispatch_next(&mut self.memory, self.clock) {
            if let Some(address) = pcb.get_memory_address() {
                info!(
                    tick = self.clock,
                    pid = pcb.get_pid(),
                    address,
                    size = pcb.get_memory_demand(),
                    "process dispatched"
                );
                self.trace.push(TraceEvent::Dispatch {
                    tick: self.clock,
                    pid: pcb.get_pid().to_owned(),
                    address,
                    size: pcb.get_memory_demand(),
                });
            }
            self.running = Some(pcb);
        }
    }

    fn check_completion(&mut self) {
        let due = self
            .running
            .as_ref()
            .map_or(false, |pcb| pcb.is_burst_complete(self.clock));
        if !due {
            return;
        }

        if let Some(mut pcb) = self.running.take() {
            pcb.mark_completed(self.clock);

            if let Some(address) = pcb.get_memory_address() {
                self.memory.release(address, pcb.get_memory_demand());
            }

            info!(tick = self.clock, pid = pcb.get_pid(), "process completed");
            self.trace.push(TraceEvent::Completion {
                tick: self.clock,
                pid: pcb.get_pid().to_owned(),
            });
            self.completed.push(pcb);
        }
    }

    pub fn get_completed(&self) -> &[ProcessControlBlock] {
        &self.completed
    }

    pub fn get_trace(&self) -> &[TraceEvent] {
        &self.trace
    }

    pub fn get_clock(&self) -> u64 {
        self.clock
    }

    pub fn get_memory(&self) -> &Memory {
        &self.memory
    }
}
