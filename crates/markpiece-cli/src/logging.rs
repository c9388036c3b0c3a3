//! Stderr logging flags shared by every markpiece subcommand.

/// Logging arg group.
///
/// Training progress logs at info, per-merge detail at debug; the flags
/// here select how much of that reaches stderr.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Suppress all log output.
    #[clap(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl LogArgs {
    fn level(&self) -> stderrlog::LogLevelNum {
        match self.verbose {
            0 => stderrlog::LogLevelNum::Info,
            1 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        }
    }

    /// Initialize stderr logging for this process.
    pub fn setup_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.level())
            .init()?;

        Ok(())
    }
}
