use anyhow::Result;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use spool_core::{Job, Owner};
use spool_scheduler::{QueueSnapshot, ScheduleEvent, SchedulerMetrics, Vacancy};
use std::io::{self, Write};

use crate::command::HELP_LINES;
use crate::dispatch::Reply;

/// Color scheme for terminal output.
struct Colors;

impl Colors {
    const PROMPT: Color = Color::Green;
    const SUCCESS: Color = Color::Green;
    const BLOCKED: Color = Color::Yellow;
    const QUEUE: Color = Color::Blue;
    const ERROR: Color = Color::Red;
    const DIM: Color = Color::DarkGrey;
    const HEADER: Color = Color::Magenta;
}

/// Manages terminal I/O for the printer console.
#[derive(Default)]
pub struct Terminal;

impl Terminal {
    /// Create a new terminal handler.
    pub fn new() -> Self {
        Self
    }

    /// Print the startup banner.
    pub fn print_banner(&self, owner: &Owner, auto_fill: bool) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::HEADER),
            Print("Welcome to Printer OS."),
            ResetColor,
            Print(" Type help to check available commands.\n"),
            SetForegroundColor(Colors::DIM),
            Print(format!(
                "Owner: {} | Auto-fill: {}\n",
                owner,
                if auto_fill { "on" } else { "off" }
            )),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Read a line of user input with prompt.
    /// Returns None at end of input.
    pub fn read_input(&self, prompt: &str) -> Result<Option<String>> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::PROMPT),
            Print(prompt),
            ResetColor,
        )?;
        stdout.flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            execute!(stdout, Print("\n"))?;
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// Render the result of a command.
    pub fn render(&self, reply: &Reply) -> Result<()> {
        match reply {
            Reply::Added { snapshot, .. } => {
                self.print_colored(Colors::SUCCESS, "Process added to the ready queue.")?;
                self.print_snapshot(snapshot)
            }
            Reply::Executing { job, snapshot } => {
                self.print_colored(Colors::QUEUE, &format!("Process executing: {}", job.name))?;
                self.print_snapshot(snapshot)
            }
            Reply::Blocked { vacancy, snapshot } => {
                self.print_colored(
                    Colors::BLOCKED,
                    &format!("Process blocked: {}", vacancy.released.name),
                )?;
                self.print_auto_fill(vacancy)?;
                self.print_snapshot(snapshot)
            }
            Reply::Unblocked { jobs, snapshot } => {
                let names: Vec<&str> = jobs.iter().map(|j| j.name.as_str()).collect();
                self.print_colored(
                    Colors::SUCCESS,
                    &format!("Process unblocked: {}", names.join(", ")),
                )?;
                self.print_snapshot(snapshot)
            }
            Reply::Finished { vacancy, snapshot } => {
                self.print_colored(
                    Colors::SUCCESS,
                    &format!("Process finished: {}", vacancy.released.name),
                )?;
                self.print_auto_fill(vacancy)?;
                self.print_snapshot(snapshot)
            }
            Reply::Found(job) => self.print_job(job),
            Reply::NotFound(id) => self.print_error(&format!("Process {} not found.", id)),
            Reply::Queues { snapshot, json } => {
                if *json {
                    self.print_info(&snapshot.to_json()?)
                } else {
                    self.print_snapshot(snapshot)
                }
            }
            Reply::History(events) => self.print_history(events),
            Reply::Stats(metrics) => self.print_stats(metrics),
            Reply::Help => self.print_help(),
            Reply::Exit => self.print_info("Exiting..."),
        }
    }

    fn print_auto_fill(&self, vacancy: &Vacancy) -> Result<()> {
        if let Some(next) = &vacancy.dispatched {
            self.print_colored(Colors::QUEUE, &format!("Process executing: {}", next.name))?;
        }
        Ok(())
    }

    /// Print the three queue lines.
    pub fn print_snapshot(&self, snapshot: &QueueSnapshot) -> Result<()> {
        self.print_colored(Colors::QUEUE, &snapshot.to_string())
    }

    /// Print the details of one job.
    pub fn print_job(&self, job: &Job) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::SUCCESS),
            Print(format!("Process ID: {}\n", job.id)),
            ResetColor,
            Print(format!("Name: {}\n", job.name)),
            Print(format!("Priority: {}\n", job.priority)),
            Print(format!("Owner: {}\n", job.owner)),
            Print(format!("Estimated Time: {}\n", job.estimated_duration)),
            Print(format!("Status: {}\n", job.status_label())),
        )?;
        stdout.flush()?;
        Ok(())
    }

    pub fn print_history(&self, events: &[ScheduleEvent]) -> Result<()> {
        if events.is_empty() {
            return self.print_info("No scheduling events yet.");
        }
        let mut stdout = io::stdout();
        execute!(stdout, SetForegroundColor(Colors::HEADER), Print("History:\n"), ResetColor)?;
        for event in events {
            execute!(stdout, Print(format!("  {}\n", event)))?;
        }
        stdout.flush()?;
        Ok(())
    }

    pub fn print_stats(&self, m: &SchedulerMetrics) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::HEADER),
            Print("Scheduler stats:\n"),
            ResetColor,
            Print(format!("  {:<18} {}\n", "submitted", m.jobs_submitted)),
            Print(format!(
                "  {:<18} {} ({} auto-fill)\n",
                "dispatched", m.jobs_dispatched, m.auto_fill_dispatches
            )),
            Print(format!("  {:<18} {}\n", "blocked", m.jobs_blocked)),
            Print(format!("  {:<18} {}\n", "unblocked", m.jobs_unblocked)),
            Print(format!("  {:<18} {}\n", "completed", m.jobs_completed)),
            Print(format!("  {:<18} {}\n", "work completed", m.work_completed)),
        )?;
        stdout.flush()?;
        Ok(())
    }

    pub fn print_help(&self) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, Print("Available commands:\n"))?;
        for line in HELP_LINES {
            execute!(stdout, Print(format!("  {}\n", line)))?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Print an error message.
    pub fn print_error(&self, msg: &str) -> Result<()> {
        self.print_colored(Colors::ERROR, msg)
    }

    /// Print an info message.
    pub fn print_info(&self, msg: &str) -> Result<()> {
        self.print_colored(Colors::DIM, msg)
    }

    fn print_colored(&self, color: Color, msg: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(color),
            Print(format!("{}\n", msg)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use spool_scheduler::Scheduler;

    use super::*;

    #[test]
    fn renders_every_reply() {
        let term = Terminal::new();
        let mut s = Scheduler::default();
        let job = s.submit("memo", 1, 2, Owner::default()).unwrap();
        let snapshot = s.snapshot();
        let executing = s.dispatch_next().unwrap();
        let vacancy = s.block().unwrap();

        let replies = vec![
            Reply::Added { job: job.clone(), snapshot: snapshot.clone() },
            Reply::Executing { job: executing, snapshot: s.snapshot() },
            Reply::Blocked { vacancy: vacancy.clone(), snapshot: s.snapshot() },
            Reply::Unblocked { jobs: vec![job.clone()], snapshot: s.snapshot() },
            Reply::Finished { vacancy, snapshot: s.snapshot() },
            Reply::Found(job),
            Reply::NotFound(9),
            Reply::Queues { snapshot: snapshot.clone(), json: true },
            Reply::Queues { snapshot, json: false },
            Reply::History(s.history().cloned().collect()),
            Reply::History(Vec::new()),
            Reply::Stats(s.metrics().clone()),
            Reply::Help,
            Reply::Exit,
        ];
        for reply in &replies {
            term.render(reply).unwrap();
        }
    }
}
