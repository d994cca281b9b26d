use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use mini6502::config::{parse_address, parse_number, DEFAULT_IMAGE};
use mini6502::{Emulator, EmulatorConfig, PortMode, RunOutcome};

/// Run a raw 6502 binary image. Bytes stored to the output port are printed.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Binary image to load
    #[arg(default_value = DEFAULT_IMAGE)]
    image: PathBuf,

    /// Address the image is loaded at
    #[arg(long, default_value = "0", value_parser = parse_address)]
    load_address: u16,

    /// Address written to the reset vector (0xFFFC) before starting
    #[arg(long, default_value = "0", value_parser = parse_address)]
    entry: u16,

    /// Start from the reset vector stored in the image instead of --entry
    #[arg(long, conflicts_with = "entry")]
    keep_vector: bool,

    /// Address of the memory-mapped output port
    #[arg(long, default_value = "0xC000", value_parser = parse_address)]
    port: u16,

    /// Whether writes to the port also land in memory
    #[arg(long, value_enum, default_value_t = PortModeArg::WriteOnly)]
    port_mode: PortModeArg,

    /// Stop after this many instructions
    #[arg(long, value_parser = parse_number)]
    max_steps: Option<u64>,

    /// Print a trace line per instruction to stderr
    #[arg(short, long)]
    trace: bool,

    /// Log loader and reset details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum PortModeArg {
    WriteOnly,
    WriteThrough,
}

impl From<PortModeArg> for PortMode {
    fn from(arg: PortModeArg) -> Self {
        match arg {
            PortModeArg::WriteOnly => PortMode::WriteOnly,
            PortModeArg::WriteThrough => PortMode::WriteThrough,
        }
    }
}

impl Args {
    fn config(&self) -> EmulatorConfig {
        EmulatorConfig {
            image: self.image.clone(),
            load_address: self.load_address,
            entry: self.entry,
            keep_vector: self.keep_vector,
            port_address: self.port,
            port_mode: self.port_mode.into(),
            max_steps: self.max_steps,
            trace: self.trace,
        }
    }

    fn log_level(&self) -> LevelFilter {
        if self.trace {
            LevelFilter::Trace
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

fn write_to_stdout(byte: u8) {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(&[byte]) {
        log::warn!("output port write failed: {}", e);
    }
}

fn run(args: &Args) -> anyhow::Result<RunOutcome> {
    let config = args.config();
    let mut emulator = Emulator::from_config(config, write_to_stdout)
        .with_context(|| format!("failed to load {}", args.image.display()))?;

    let outcome = emulator.run();
    std::io::stdout().flush().context("flushing program output")?;

    let outcome = outcome.context("emulation stopped")?;
    log::debug!("{:?}", outcome);
    Ok(outcome)
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    SimpleLogger::new()
        .with_level(args.log_level())
        .init()
        .context("installing logger")?;

    match run(&args)? {
        RunOutcome::Halted { .. } => Ok(ExitCode::SUCCESS),
        RunOutcome::StepLimit { instructions } => {
            log::warn!("stopped after {} instructions without reaching BRK", instructions);
            Ok(ExitCode::from(2))
        }
    }
}
