mod long_term_scheduler;
mod memory;
mod process_control_block;
mod short_term_scheduler;
mod trace;

pub mod driver;

pub use driver::Driver;
pub use long_term_scheduler::LongTermScheduler;
pub use memory::{Memory, MemoryBlock};
pub use process_control_block::{ProcessControlBlock, ProcessState};
pub use short_term_scheduler::{SchedulingAlgorithm, ShortTermScheduler};
pub use trace::TraceEvent;
