//! SimpleRisc simulator CLI.
//!
//! This binary provides a single entry point for the simulator. It performs:
//! 1. **Run:** Load a text or binary program image and run it to completion.
//! 2. **Disassemble:** Print an image as address, word and mnemonic.
//! 3. **Factorial:** Run the built-in recursive factorial program.
//!
//! Exit status: 0 when the program halts, 1 on a fault or a usage error, 2 when
//! the cycle limit is reached.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use simplerisc_core::config::Config;
use simplerisc_core::isa::abi::REG_RESULT;
use simplerisc_core::isa::disasm::disassemble;
use simplerisc_core::sim::loader;
use simplerisc_core::sim::programs::factorial_program;
use simplerisc_core::{RunReport, Simulator, TerminalReason};

const EXIT_FAULT: i32 = 1;
const EXIT_CYCLE_LIMIT: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "SimpleRisc instruction-set simulator",
    long_about = "Run, disassemble or demo SimpleRisc programs.\n\nImages are text (one hex or binary word per line, `;`/`#`/`//` comments) or raw little-endian `.bin` files.\n\nExamples:\n  sim run programs/factorial.hex\n  sim run prog.bin --max-cycles 5000 --trace\n  sim disasm programs/factorial.hex\n  sim factorial 12"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image until it halts, faults or hits the cycle limit.
    Run {
        /// Program image (text, or raw words with a `.bin` extension).
        image: PathBuf,

        /// Cycle bound; overrides the configuration.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Log every retired instruction.
        #[arg(long)]
        trace: bool,
    },

    /// Disassemble a program image.
    Disasm {
        /// Program image to disassemble.
        image: PathBuf,
    },

    /// Run the built-in recursive factorial program.
    Factorial {
        /// Argument passed in r0.
        #[arg(default_value_t = 10)]
        n: i16,

        /// Log every retired instruction.
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Run { image, max_cycles, config, trace } => {
            cmd_run(&image, max_cycles, config.as_deref(), trace)
        }
        Commands::Disasm { image } => cmd_disasm(&image),
        Commands::Factorial { n, trace } => cmd_factorial(n, trace),
    };
    process::exit(code);
}

/// Installs the stderr log subscriber. Instruction tracing forces `trace` level;
/// otherwise `RUST_LOG` applies, defaulting to `warn`.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn cmd_run(image: &Path, max_cycles: Option<u64>, config: Option<&Path>, trace: bool) -> i32 {
    let mut config = match config {
        Some(path) => Config::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: {}: {}", path.display(), e);
            process::exit(EXIT_FAULT);
        }),
        None => Config::default(),
    };
    config.general.trace_instructions |= trace;
    if let Some(limit) = max_cycles {
        config.general.max_cycles = limit;
    }
    init_tracing(config.general.trace_instructions);

    let words = loader::load_image(image).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {}: {}", image.display(), e);
        process::exit(EXIT_FAULT);
    });

    let sim = Simulator::new(config);
    let config = sim.config();
    println!("[*] Running {} ({} words)", image.display(), words.len());
    println!(
        "    Start PC: {:#010x}  Memory: {} KiB  Max cycles: {}",
        config.general.start_pc,
        config.memory.size_bytes / 1024,
        config.general.max_cycles
    );
    println!();

    execute(sim, &words)
}

fn cmd_disasm(image: &Path) -> i32 {
    init_tracing(false);

    let words = loader::load_image(image).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {}: {}", image.display(), e);
        process::exit(EXIT_FAULT);
    });
    for (i, word) in words.iter().enumerate() {
        println!("{:#010x}:  {:08x}  {}", i * 4, word, disassemble(*word));
    }
    0
}

fn cmd_factorial(n: i16, trace: bool) -> i32 {
    init_tracing(trace);

    let words = factorial_program(n).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not assemble factorial program: {e}");
        process::exit(EXIT_FAULT);
    });

    let mut config = Config::default();
    config.general.trace_instructions = trace;

    println!("[*] factorial({n})");
    println!();
    execute(Simulator::new(config), &words)
}

/// Loads and runs `words`, prints the outcome and returns the exit status.
fn execute(sim: Simulator, words: &[u32]) -> i32 {
    let report = sim.run_program(words).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: program does not fit in memory: {e}");
        process::exit(EXIT_FAULT);
    });
    print_report(&report)
}

fn print_report(report: &RunReport) -> i32 {
    match report.reason {
        TerminalReason::Halted => {
            println!("[*] Halted after {} cycles", report.cycles);
            report.state.dump();
            let r1 = report.state.reg(REG_RESULT);
            println!();
            println!(">>> r1 = {r1} ({r1:#010x})");
            println!();
            report.stats.print();
            0
        }
        TerminalReason::Faulted(fault) => {
            eprintln!("\n[!] FAULT: {}", fault.kind);
            eprintln!("    pc    = {:#010x}", fault.pc);
            eprintln!("    cycle = {}", fault.cycle);
            report.state.dump();
            report.stats.print();
            EXIT_FAULT
        }
        TerminalReason::CycleLimitExceeded { limit } => {
            eprintln!(
                "\n[!] Cycle limit of {limit} reached without halting (pc = {:#010x})",
                report.state.pc()
            );
            report.stats.print();
            EXIT_CYCLE_LIMIT
        }
    }
}
