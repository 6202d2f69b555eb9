use simplerisc_core::config::Config;
use simplerisc_core::core::control::ControlUnit;
use simplerisc_core::{CpuStatus, ExecutionState, RunReport, SimStats, Simulator};

/// Owns a simulator together with one execution state, for stepping programs
/// cycle by cycle or running them to completion.
pub struct TestContext {
    pub sim: Simulator,
    pub state: ExecutionState,
    pub stats: SimStats,
}

impl TestContext {
    /// Loads `program` into a default-configured machine.
    pub fn new(program: &[u32]) -> Self {
        Self::with_config(Config::default(), program)
    }

    pub fn with_config(config: Config, program: &[u32]) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();

        let mut config = config;
        config.general.trace_instructions = true;
        let sim = Simulator::new(config);
        let state = sim.load_program(program).expect("program does not fit in memory");
        Self { sim, state, stats: SimStats::default() }
    }

    pub fn set_reg(&mut self, reg: usize, val: i32) {
        self.state.regs_mut().write(reg, val);
    }

    pub fn get_reg(&self, reg: usize) -> i32 {
        self.state.reg(reg)
    }

    /// Executes a single cycle.
    pub fn step(&mut self) -> CpuStatus {
        ControlUnit::new(true).step(&mut self.state, &mut self.stats)
    }

    /// Executes `n` cycles.
    pub fn run(&mut self, n: usize) {
        for _ in 0..n {
            let _ = self.step();
        }
    }

    /// Runs the loaded state to a terminal condition through the simulator.
    pub fn run_to_end(self, max_cycles: u64) -> RunReport {
        self.sim.run(self.state, max_cycles)
    }
}
