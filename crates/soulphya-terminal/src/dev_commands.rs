//! Development commands: python, node, npm, git, run, deploy, server.
//!
//! Nothing is executed for real. Long-running work is simulated by
//! scheduling its completion lines.

use soulphya_types::error::{Result, TerminalError};
use soulphya_types::output::LineStyle;

use crate::builtin::Builtin;
use crate::interpreter::Context;
use crate::process::ProcessEntry;

const DEPLOY_STEPS: [&str; 5] = [
    "Building project...",
    "Optimizing assets...",
    "Uploading to cloud...",
    "Configuring services...",
    "✅ Deployment successful!",
];

const DEFAULT_PORT: u16 = 3000;

fn first_arg<'a>(args: &'a [String], builtin: Builtin) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| TerminalError::usage(builtin.usage()))
}

fn npm_outcome(command: &str) -> String {
    match command {
        "install" => "✅ Dependencies installed successfully".to_string(),
        "start" => "🚀 Application started".to_string(),
        "build" => "🏗️ Build completed successfully".to_string(),
        other => format!("npm {other} completed"),
    }
}

fn git_outcome(command: &str) -> String {
    match command {
        "status" => "On branch main\nYour branch is up to date".to_string(),
        "add" => "Changes staged for commit".to_string(),
        "commit" => "Commit created with consciousness".to_string(),
        "push" => "Changes pushed to repository".to_string(),
        other => format!("git {other} completed"),
    }
}

// ---------------------------------------------------------------------------
// python / node
// ---------------------------------------------------------------------------

pub(crate) fn python(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let file = first_arg(args, Builtin::Python)?;
    ctx.emit(&format!("🐍 Running Python script: {file}"), LineStyle::Info);
    if !ctx.hooks.run_project() {
        let delay = ctx.short_delay();
        ctx.schedule(delay, "🧠 Consciousness awakening...", LineStyle::Success, None);
        ctx.schedule(delay, "Divine intelligence activated", LineStyle::Success, None);
    }
    Ok(file.to_string())
}

pub(crate) fn node(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let file = first_arg(args, Builtin::Node)?;
    ctx.emit(&format!("🟢 Running Node.js script: {file}"), LineStyle::Info);
    Ok(file.to_string())
}

// ---------------------------------------------------------------------------
// npm / git
// ---------------------------------------------------------------------------

pub(crate) fn npm(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let command = first_arg(args, Builtin::Npm)?;
    ctx.emit(&format!("📦 Running npm {command}..."), LineStyle::Info);
    let delay = ctx.long_delay();
    ctx.schedule(delay, &npm_outcome(command), LineStyle::Success, None);
    Ok(command.to_string())
}

pub(crate) fn git(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let command = first_arg(args, Builtin::Git)?;
    ctx.emit(&format!("📋 Running git {command}..."), LineStyle::Info);
    let delay = ctx.short_delay();
    ctx.schedule(delay, &git_outcome(command), LineStyle::Success, None);
    Ok(command.to_string())
}

// ---------------------------------------------------------------------------
// run / deploy
// ---------------------------------------------------------------------------

pub(crate) fn run(_args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    ctx.emit("🚀 Running current project...", LineStyle::Info);
    if !ctx.hooks.run_project() {
        ctx.emit("No project runner is attached to this terminal", LineStyle::Hint);
    }
    Ok("project running".to_string())
}

/// Stage the deployment lines one short delay apart.
pub(crate) fn deploy(_args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    ctx.emit("☁️ Deploying project to cloud...", LineStyle::Info);
    let step = ctx.short_delay();
    let last = DEPLOY_STEPS.len() - 1;
    for (i, text) in DEPLOY_STEPS.iter().enumerate() {
        let style = if i == last { LineStyle::Success } else { LineStyle::Info };
        ctx.schedule(step.saturating_mul(i as u64 + 1), text, style, None);
    }
    Ok("deployment started".to_string())
}

// ---------------------------------------------------------------------------
// server
// ---------------------------------------------------------------------------

/// Start a simulated dev server. Its ready lines belong to the new process,
/// so killing it before they appear drops them.
pub(crate) fn server(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let port = match args.first() {
        Some(arg) => arg
            .parse::<u16>()
            .map_err(|_| TerminalError::usage(Builtin::Server.usage()))?,
        None => DEFAULT_PORT,
    };
    ctx.emit(
        &format!("🌐 Starting development server on port {port}..."),
        LineStyle::Info,
    );
    let entry = ProcessEntry {
        command: format!("dev-server :{port}"),
        started_ms: ctx.clock.monotonic_ms(),
        started_at: ctx.clock.now(),
    };
    let pid = ctx
        .state
        .processes
        .spawn(entry, &mut ctx.state.rng)
        .ok_or_else(|| TerminalError::not_found("server: no free process id"))?;
    let delay = ctx.long_delay();
    ctx.schedule(
        delay,
        &format!("✅ Server running at http://localhost:{port}"),
        LineStyle::Success,
        Some(pid),
    );
    ctx.schedule(delay, &format!("Process ID: {pid}"), LineStyle::Info, Some(pid));
    Ok(format!("server:{port}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use soulphya_types::clock::ManualClock;
    use soulphya_types::config::TerminalConfig;
    use soulphya_types::output::OutputBuffer;

    use crate::hooks::HostHooks;
    use crate::interpreter::Terminal;
    use crate::interpreter::testing::{EPOCH, lines, run, terminal};

    #[test]
    fn python_simulates_output_without_host() {
        let mut term = terminal();
        let (result, out) = run(&mut term, "python main.py");
        assert_eq!(result, "main.py");
        assert_eq!(out, vec!["🐍 Running Python script: main.py"]);
        term.clock().advance(1000);
        assert_eq!(term.tick(), 2);
        assert_eq!(
            lines(&term)[1..],
            ["🧠 Consciousness awakening...", "Divine intelligence activated"]
        );
    }

    struct Runner;

    impl HostHooks for Runner {
        fn run_project(&mut self) -> bool {
            true
        }
    }

    #[test]
    fn python_defers_to_host_runner() {
        let mut term = terminal().with_hooks(Runner);
        run(&mut term, "python main.py");
        assert_eq!(term.pending_tasks(), 0);
        let (_, out) = run(&mut term, "run");
        assert_eq!(out, vec!["🚀 Running current project..."]);
    }

    #[test]
    fn node_reports_script() {
        let mut term = terminal();
        assert_eq!(
            run(&mut term, "node index.js").1,
            vec!["🟢 Running Node.js script: index.js"]
        );
    }

    #[test]
    fn npm_completes_after_long_delay() {
        let mut term = terminal();
        run(&mut term, "npm build");
        term.clock().advance(1999);
        assert_eq!(term.tick(), 0);
        term.clock().advance(1);
        term.tick();
        assert_eq!(
            lines(&term).last().map(String::as_str),
            Some("🏗️ Build completed successfully")
        );
        assert_eq!(npm_outcome("audit"), "npm audit completed");
    }

    #[test]
    fn git_status_spans_two_lines() {
        let mut term = terminal();
        run(&mut term, "git status");
        term.clock().advance(1000);
        term.tick();
        assert_eq!(
            lines(&term)[1..],
            ["On branch main", "Your branch is up to date"]
        );
    }

    #[test]
    fn server_defaults_and_validates_port() {
        let mut term = terminal();
        assert_eq!(run(&mut term, "server").0, "server:3000");
        let (_, out) = run(&mut term, "server http");
        assert_eq!(out, vec!["Usage: server [port]"]);
        assert_eq!(term.state().processes.len(), 1);

        term.clock().advance(2000);
        assert_eq!(term.tick(), 2);
    }

    #[test]
    fn deploy_survives_huge_delays() {
        let mut config = TerminalConfig::default();
        config.timing.short_delay_ms = 4_000_000_000_000_000_000;
        let mut term = Terminal::new(&config, OutputBuffer::new(), ManualClock::new(EPOCH));
        assert_eq!(term.parse_and_execute("deploy"), "deployment started");
        assert_eq!(term.pending_tasks(), 5);
        assert_eq!(term.next_due_ms(), Some(4_000_000_000_000_000_000));
        term.clock().advance(u64::MAX);
        assert_eq!(term.tick(), 5);
    }

    #[test]
    fn dev_commands_need_an_argument() {
        let mut term = terminal();
        for (line, usage) in [
            ("python", "Usage: python <filename>"),
            ("node", "Usage: node <filename>"),
            ("npm", "Usage: npm <command>"),
            ("git", "Usage: git <command>"),
        ] {
            assert_eq!(run(&mut term, line).1, vec![usage]);
        }
        assert_eq!(term.pending_tasks(), 0);
    }
}
