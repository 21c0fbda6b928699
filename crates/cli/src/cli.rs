use clap::Parser;

/// Interactive single-printer job scheduler.
///
/// Reads commands line by line (`add`, `execute`, `block`, `unblock`,
/// `done`, `view`, ...) and prints the queue state after every change.
#[derive(Parser, Debug)]
#[command(name = "spool", about = "Interactive single-printer job scheduler")]
pub struct CliArgs {
    /// Path to config file (default: ~/.config/spool/config.toml)
    #[arg(long)]
    pub config: Option<String>,

    /// Owner recorded on submitted jobs (overrides SPOOL_OWNER and config file)
    #[arg(long)]
    pub owner: Option<String>,

    /// Leave the printer idle after block/done instead of dispatching the next job.
    ///
    /// Departs from the standard scheduling contract, where a freed slot is
    /// refilled from the ready queue straight away. Use `execute` to step by hand.
    #[arg(long)]
    pub no_auto_fill: bool,

    /// Number of schedule events kept for the `history` command
    #[arg(long)]
    pub history: Option<usize>,

    /// Disable the startup banner (useful when piping commands in)
    #[arg(long)]
    pub quiet: bool,
}
