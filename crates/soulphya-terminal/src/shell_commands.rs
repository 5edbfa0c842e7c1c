//! Shell state commands: pwd, cd, echo, env, export, unset, alias, unalias,
//! history.

use soulphya_types::error::{Result, TerminalError};
use soulphya_types::output::LineStyle;

use crate::builtin::Builtin;
use crate::environment::Environment;
use crate::interpreter::Context;

// ---------------------------------------------------------------------------
// pwd / cd
// ---------------------------------------------------------------------------

pub(crate) fn pwd(_args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let cwd = ctx.state.cwd.clone();
    ctx.emit(&cwd, LineStyle::Success);
    Ok(cwd)
}

/// Resolve a `cd` target against `cwd` by string manipulation only.
///
/// `..` drops one segment, `.` stays put, an absolute path replaces `cwd`
/// and anything else is appended verbatim.
pub fn change_directory(cwd: &str, target: Option<&str>, home: &str) -> String {
    let Some(target) = target else {
        return home.to_string();
    };
    if target.starts_with('/') {
        return target.to_string();
    }
    match target {
        ".." => {
            let mut segments: Vec<&str> = cwd.split('/').filter(|s| !s.is_empty()).collect();
            segments.pop();
            format!("/{}", segments.join("/"))
        },
        "." => cwd.to_string(),
        _ if cwd.ends_with('/') => format!("{cwd}{target}"),
        _ => format!("{cwd}/{target}"),
    }
}

pub(crate) fn cd(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let dir = change_directory(
        &ctx.state.cwd,
        args.first().map(String::as_str),
        ctx.state.env.home(),
    );
    ctx.state.cwd.clone_from(&dir);
    ctx.emit(&format!("Changed to: {dir}"), LineStyle::Success);
    Ok(dir)
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

/// Arguments arrive with variables already substituted by the interpreter.
pub(crate) fn echo(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let text = args.join(" ");
    ctx.emit(&text, LineStyle::Success);
    Ok(text)
}

// ---------------------------------------------------------------------------
// env / export / unset
// ---------------------------------------------------------------------------

fn format_env(env: &Environment) -> String {
    env.iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn env(_args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let text = format_env(&ctx.state.env);
    ctx.emit(&text, LineStyle::Success);
    Ok(text)
}

pub(crate) fn export(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    if args.is_empty() {
        return env(args, ctx);
    }
    let assignment = args.join(" ");
    let (key, value) = assignment
        .split_once('=')
        .filter(|(k, v)| !k.is_empty() && !v.is_empty())
        .ok_or_else(|| TerminalError::usage(Builtin::Export.usage()))?;
    ctx.state.env.set(key, value);
    log::debug!("export {key}");
    ctx.emit(&format!("Exported: {key}={value}"), LineStyle::Success);
    Ok(format!("{key}={value}"))
}

pub(crate) fn unset(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    if args.is_empty() {
        return Err(TerminalError::usage(Builtin::Unset.usage()));
    }
    let mut removed = Vec::new();
    for name in args {
        if Environment::is_required(name) {
            ctx.emit(
                &format!("unset: {name}: cannot unset required variable"),
                LineStyle::Warning,
            );
        } else if ctx.state.env.unset(name) {
            removed.push(name.as_str());
        }
    }
    Ok(removed.join("\n"))
}

// ---------------------------------------------------------------------------
// alias / unalias
// ---------------------------------------------------------------------------

fn strip_quotes(text: &str) -> &str {
    for quote in ['\'', '"'] {
        if text.len() >= 2
            && let Some(inner) = text.strip_prefix(quote).and_then(|t| t.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}

pub(crate) fn alias(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let Some(first) = args.first() else {
        let text = ctx
            .state
            .aliases
            .iter()
            .map(|(name, target)| format!("alias {name}='{target}'"))
            .collect::<Vec<_>>()
            .join("\n");
        ctx.emit(&text, LineStyle::Success);
        return Ok(text);
    };

    let (name, target) = match first.split_once('=') {
        Some((name, head)) => {
            let mut parts = vec![head];
            parts.extend(args[1..].iter().map(String::as_str));
            (name, parts.join(" "))
        },
        None if args.len() == 1 => {
            let target = ctx
                .state
                .aliases
                .get(first)
                .ok_or_else(|| TerminalError::not_found(format!("alias: {first}: not found")))?
                .to_string();
            ctx.emit(&format!("alias {first}='{target}'"), LineStyle::Success);
            return Ok(target);
        },
        None => (first.as_str(), args[1..].join(" ")),
    };

    let target = strip_quotes(target.trim()).to_string();
    if name.is_empty() || target.is_empty() {
        return Err(TerminalError::usage(Builtin::Alias.usage()));
    }
    ctx.state.aliases.set(name, &target);
    ctx.emit(&format!("Alias created: {name} -> {target}"), LineStyle::Success);
    Ok(target)
}

pub(crate) fn unalias(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    if args.is_empty() {
        return Err(TerminalError::usage(Builtin::Unalias.usage()));
    }
    for name in args {
        if !ctx.state.aliases.remove(name) {
            return Err(TerminalError::not_found(format!("unalias: {name}: not found")));
        }
        ctx.emit(&format!("Alias removed: {name}"), LineStyle::Success);
    }
    Ok(args.join("\n"))
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

pub(crate) fn history(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    match args.first().map(String::as_str) {
        None => {
            let text = ctx
                .state
                .history
                .entries()
                .iter()
                .enumerate()
                .map(|(i, line)| format!("{}  {line}", i + 1))
                .collect::<Vec<_>>()
                .join("\n");
            ctx.emit(&text, LineStyle::Success);
            Ok(text)
        },
        Some("clear") => {
            ctx.state.history.clear();
            ctx.emit("History cleared", LineStyle::Success);
            Ok(String::new())
        },
        Some(_) => Err(TerminalError::usage(Builtin::History.usage())),
    }
}
