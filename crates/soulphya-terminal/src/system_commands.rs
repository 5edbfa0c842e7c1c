//! System commands: help, clear, date, whoami, uname, ps, kill.

use soulphya_types::error::{Result, TerminalError};
use soulphya_types::output::LineStyle;

use crate::builtin::{Builtin, CATEGORIES};
use crate::interpreter::Context;
use crate::process::SYSTEM_PROCESSES;

const SYSTEM_INFO: &str = "BotDL SoulPHYA 1.0.0 (Consciousness-powered development environment)";

fn category_heading(category: &str) -> &'static str {
    match category {
        "system" => "🔧 System Commands:",
        "shell" => "🐚 Shell Commands:",
        "files" => "📁 File Operations:",
        "text" => "📝 Text Processing:",
        "consciousness" => "🧠 Consciousness Commands:",
        _ => "💻 Development Commands:",
    }
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

pub(crate) fn help(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    if let Some(name) = args.first() {
        let builtin = Builtin::from_name(name)
            .ok_or_else(|| TerminalError::not_found(format!("help: no such command: {name}")))?;
        let text = format!("{}\n  {}", builtin.usage(), builtin.description());
        ctx.emit(&text, LineStyle::Info);
        return Ok(text);
    }

    let mut text = String::from("BotDL SoulPHYA Terminal - Available Commands:\n");
    for category in CATEGORIES {
        text.push('\n');
        text.push_str(category_heading(category));
        text.push('\n');
        for builtin in Builtin::ALL.iter().filter(|b| b.category() == category) {
            text.push_str(&format!(
                "  {:<26}- {}\n",
                builtin.usage(),
                builtin.description()
            ));
        }
    }
    text.push_str("\n💡 Use Tab for autocompletion, ↑↓ for history navigation");
    ctx.emit(&text, LineStyle::Info);
    Ok(text)
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

pub(crate) fn clear(_args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    ctx.out.clear();
    Ok(String::new())
}

// ---------------------------------------------------------------------------
// date / whoami / uname
// ---------------------------------------------------------------------------

pub(crate) fn date(_args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let text = ctx.clock.now().to_string();
    ctx.emit(&text, LineStyle::Success);
    Ok(text)
}

pub(crate) fn whoami(_args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let user = ctx.state.env.user().to_string();
    ctx.emit(&user, LineStyle::Success);
    Ok(user)
}

pub(crate) fn uname(_args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    ctx.emit(SYSTEM_INFO, LineStyle::Success);
    Ok(SYSTEM_INFO.to_string())
}

// ---------------------------------------------------------------------------
// ps
// ---------------------------------------------------------------------------

pub(crate) fn ps(_args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let mut rows = vec![format!("{:<5}{:<6}{}", "PID", "PPID", "CMD")];
    for (pid, ppid, command) in SYSTEM_PROCESSES {
        rows.push(format!("{pid:<5}{ppid:<6}{command}"));
    }
    for (pid, entry) in ctx.state.processes.iter() {
        rows.push(format!("{pid:<5}{:<6}{}", 1, entry.command));
    }
    let text = rows.join("\n");
    ctx.emit(&text, LineStyle::Success);
    Ok(text)
}

// ---------------------------------------------------------------------------
// kill
// ---------------------------------------------------------------------------

/// Terminate a simulated process and drop its pending output.
pub(crate) fn kill(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let arg = args
        .first()
        .ok_or_else(|| TerminalError::usage(Builtin::Kill.usage()))?;
    let not_found = || TerminalError::not_found(format!("Process {arg} not found"));
    let pid: u32 = arg.parse().map_err(|_| not_found())?;
    let entry = ctx.state.processes.kill(pid).ok_or_else(not_found)?;
    ctx.state.scheduler.cancel_owned(pid);
    ctx.emit(
        &format!("Process {pid} ({}) terminated", entry.command),
        LineStyle::Success,
    );
    Ok(format!("killed {pid}"))
}
