//! SoulPHYA line-mode host.
//!
//! Reads command lines from stdin, prints styled output to stdout and
//! delivers delayed output while waiting for input. On EOF any remaining
//! delayed output is flushed before the terminal shuts down.
//!
//! Usage: `soulphya [--config PATH] [--json]`. The config path may also be
//! given through `SOULPHYA_CONFIG`.

mod console;
mod hooks;

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use anyhow::{Context, Result, bail};

use soulphya_terminal::Terminal;
use soulphya_types::clock::{Clock, SystemClock};
use soulphya_types::config::TerminalConfig;
use soulphya_types::output::OutputSink;

use console::ConsoleSink;
use hooks::ConsoleHooks;

/// Longest wait between polls for delayed output.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How long to keep delivering delayed output after stdin closes.
const DRAIN_LIMIT_MS: u64 = 10_000;

struct Args {
    config: Option<PathBuf>,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: std::env::var_os("SOULPHYA_CONFIG").map(PathBuf::from),
        json: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            },
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => TerminalConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TerminalConfig::default(),
    };
    log::info!("Starting SoulPHYA terminal as {}@{}", config.user, config.hostname);

    let mut term = Terminal::new(&config, ConsoleSink::new(args.json), SystemClock::new())
        .with_hooks(ConsoleHooks::default());
    term.boot();

    // Stdin is read on its own thread so delayed output keeps flowing while
    // the user is idle.
    let (tx, rx) = mpsc::channel::<String>();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                },
                Err(e) => {
                    log::error!("stdin read failed: {e}");
                    break;
                },
            }
        }
    });

    loop {
        match rx.recv_timeout(wait_for_next(&term)) {
            Ok(line) => {
                term.execute(&line);
            },
            Err(RecvTimeoutError::Timeout) => {},
            Err(RecvTimeoutError::Disconnected) => break,
        }
        term.tick();
    }

    // EOF: let outstanding delayed output land before tearing down.
    drain_pending(&mut term, DRAIN_LIMIT_MS, |_, ms| {
        std::thread::sleep(Duration::from_millis(ms));
    });
    term.shutdown();
    Ok(())
}

/// Deliver delayed output that falls due within `limit_ms` from now, waiting
/// for it with `wait`. Returns how many lines were delivered; anything due
/// later is left for `shutdown` to drop.
fn drain_pending<S: OutputSink, C: Clock>(
    term: &mut Terminal<S, C>,
    limit_ms: u64,
    mut wait: impl FnMut(&C, u64),
) -> usize {
    let deadline = term.clock().monotonic_ms().saturating_add(limit_ms);
    let mut delivered = 0;
    while let Some(due) = term.next_due_ms()
        && due <= deadline
    {
        let now = term.clock().monotonic_ms();
        wait(term.clock(), due.saturating_sub(now));
        delivered += term.tick();
    }
    delivered
}

/// Time until the next scheduled line, capped at the poll interval.
fn wait_for_next(term: &Terminal<ConsoleSink, SystemClock>) -> Duration {
    match term.next_due_ms() {
        Some(due) => {
            let now = term.clock().monotonic_ms();
            Duration::from_millis(due.saturating_sub(now)).min(POLL_INTERVAL)
        },
        None => POLL_INTERVAL,
    }
}
