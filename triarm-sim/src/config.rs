use triarm::{Config, Configurable, GlobalConfig};

#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Number of targets to seek before exiting; 0 runs forever.
    pub targets: usize,
    /// Randomize the start pose.
    pub randomize_start: bool,
    /// Runtime configuration.
    pub runtime: Config,
}

impl Configurable for SimConfig {
    fn global(&self) -> &GlobalConfig {
        &self.runtime.global
    }
}
