/// Process descriptor as parsed from the input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessSpec {
    pub pid: String,
    pub arrival_time: u64,
    pub burst_time: u64,
    pub memory_demand: usize,
}
