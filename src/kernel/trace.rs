/// Notable simulation events and the tick at which each occurred. Collected
/// by the driver as the machine-readable counterpart of its log output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    Arrival {
        tick: u64,
        pid: String,
    },
    /// A ready process was granted memory and the CPU.
    Dispatch {
        tick: u64,
        pid: String,
        address: usize,
        size: usize,
    },
    /// The running process finished its burst and its memory was released.
    Completion {
        tick: u64,
        pid: String,
    },
}
