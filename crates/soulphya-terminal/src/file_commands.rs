//! File commands over the simulated project listing: ls, cat, touch, mkdir,
//! rm, cp, mv, find.

use soulphya_types::error::{Result, TerminalError};
use soulphya_types::output::LineStyle;

use crate::builtin::Builtin;
use crate::files::{DIR_SIZE, FileEntry};
use crate::interpreter::Context;

/// Pseudo-entries shown by `ls -a`: (name, modified).
const DOT_ENTRIES: [(&str, &str); 2] = [(".", "2025-01-08 14:30"), ("..", "2025-01-08 14:00")];

fn no_such_file(command: &str, name: &str) -> TerminalError {
    TerminalError::not_found(format!("{command}: {name}: No such file or directory"))
}

fn long_row(user: &str, is_dir: bool, size: usize, modified: &str, name: &str) -> String {
    let perms = if is_dir { "drwxr-xr-x" } else { "-rw-r--r--" };
    format!("{perms}  1 {user} {user} {size:>8} {modified} {name}")
}

fn now_short(ctx: &Context<'_>) -> String {
    ctx.clock.now().short()
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

pub(crate) fn ls(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let flags: String = args
        .iter()
        .filter_map(|a| a.strip_prefix('-'))
        .collect();
    let show_hidden = flags.contains('a');
    let long = flags.contains('l');
    let user = ctx.state.env.user().to_string();

    let entries: Vec<&FileEntry> = ctx
        .state
        .files
        .iter()
        .filter(|e| show_hidden || !e.is_hidden())
        .collect();

    let text = if long {
        let mut rows = Vec::new();
        if show_hidden {
            for (name, modified) in DOT_ENTRIES {
                rows.push(long_row(&user, true, DIR_SIZE, modified, name));
            }
        }
        for e in &entries {
            rows.push(long_row(&user, e.is_dir(), e.size(), &e.modified, &e.name));
        }
        rows.join("\n")
    } else {
        let mut names: Vec<&str> = Vec::new();
        if show_hidden {
            names.extend(DOT_ENTRIES.iter().map(|(name, _)| *name));
        }
        names.extend(entries.iter().map(|e| e.name.as_str()));
        names.join("  ")
    };
    ctx.emit(&text, LineStyle::Success);
    Ok(text)
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

pub(crate) fn cat(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let name = args
        .first()
        .ok_or_else(|| TerminalError::usage(Builtin::Cat.usage()))?;
    let entry = ctx
        .state
        .files
        .get(name)
        .ok_or_else(|| no_such_file("cat", name))?;
    if entry.is_dir() {
        return Err(TerminalError::not_found(format!("cat: {name}: Is a directory")));
    }
    let contents = entry.contents.clone();
    ctx.emit(&contents, LineStyle::FileContent);
    Ok(contents)
}

// ---------------------------------------------------------------------------
// touch / mkdir
// ---------------------------------------------------------------------------

pub(crate) fn touch(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let name = args
        .first()
        .ok_or_else(|| TerminalError::usage(Builtin::Touch.usage()))?;
    let now = now_short(ctx);
    if ctx.state.files.touch(name, &now) {
        ctx.hooks.save_file(name, "");
        ctx.emit(&format!("Created file: {name}"), LineStyle::Success);
    } else {
        ctx.emit(&format!("Updated timestamp: {name}"), LineStyle::Success);
    }
    Ok(name.clone())
}

pub(crate) fn mkdir(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let name = args
        .first()
        .ok_or_else(|| TerminalError::usage(Builtin::Mkdir.usage()))?;
    let now = now_short(ctx);
    if !ctx.state.files.mkdir(name, &now) {
        ctx.emit(
            &format!("mkdir: cannot create directory '{name}': File exists"),
            LineStyle::Warning,
        );
        return Ok(String::new());
    }
    ctx.emit(&format!("Created directory: {name}"), LineStyle::Success);
    Ok(name.clone())
}

// ---------------------------------------------------------------------------
// rm / cp / mv
// ---------------------------------------------------------------------------

pub(crate) fn rm(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let name = args
        .first()
        .ok_or_else(|| TerminalError::usage(Builtin::Rm.usage()))?;
    ctx.state
        .files
        .remove(name)
        .ok_or_else(|| no_such_file("rm", name))?;
    ctx.emit(&format!("Removed: {name}"), LineStyle::Success);
    Ok(name.clone())
}

fn source_and_dest(args: &[String], builtin: Builtin) -> Result<(&str, &str)> {
    match args {
        [src, dst, ..] => Ok((src.as_str(), dst.as_str())),
        _ => Err(TerminalError::usage(builtin.usage())),
    }
}

pub(crate) fn cp(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let (src, dst) = source_and_dest(args, Builtin::Cp)?;
    let now = now_short(ctx);
    if !ctx.state.files.copy(src, dst, &now) {
        return Err(no_such_file("cp", src));
    }
    ctx.emit(&format!("Copied {src} to {dst}"), LineStyle::Success);
    Ok(format!("{src} -> {dst}"))
}

pub(crate) fn mv(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let (src, dst) = source_and_dest(args, Builtin::Mv)?;
    if !ctx.state.files.rename(src, dst) {
        return Err(no_such_file("mv", src));
    }
    ctx.emit(&format!("Moved {src} to {dst}"), LineStyle::Success);
    Ok(format!("{src} -> {dst}"))
}

// ---------------------------------------------------------------------------
// find
// ---------------------------------------------------------------------------

pub(crate) fn find(args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    let pattern = args
        .first()
        .ok_or_else(|| TerminalError::usage(Builtin::Find.usage()))?;
    let text = ctx.state.files.find(pattern).join("\n");
    ctx.emit(&text, LineStyle::Success);
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use soulphya_types::output::LineStyle;

    use crate::hooks::HostHooks;
    use crate::interpreter::testing::{run, terminal};

    #[test]
    fn ls_short_hides_dotfiles() {
        let mut term = terminal();
        assert_eq!(
            run(&mut term, "ls").0,
            "main.py  README.md  package.json  node_modules"
        );
        assert_eq!(
            run(&mut term, "ls -a").0,
            ".  ..  main.py  README.md  package.json  .gitignore  node_modules"
        );
    }

    #[test]
    fn ls_long_format() {
        let mut term = terminal();
        let (_, out) = run(&mut term, "ll");
        assert_eq!(out.len(), 7);
        assert_eq!(out[0], "drwxr-xr-x  1 soulphya soulphya     4096 2025-01-08 14:30 .");
        assert!(out[2].starts_with("-rw-r--r--  1 soulphya soulphya"));
        assert!(out[2].ends_with("2025-01-08 14:25 main.py"));
        assert!(out[6].ends_with("node_modules"));
    }

    #[test]
    fn cat_emits_file_content_block() {
        let mut term = terminal();
        let (text, out) = run(&mut term, "cat main.py");
        assert!(text.starts_with("#!/usr/bin/env python3"));
        assert_eq!(out.len(), text.lines().count());
        assert!(term.sink().lines().iter().all(|l| l.style == LineStyle::FileContent));
    }

    #[test]
    fn cat_misses() {
        let mut term = terminal();
        let (_, out) = run(&mut term, "cat nope.txt");
        assert_eq!(out, vec!["cat: nope.txt: No such file or directory"]);
        let (_, out) = run(&mut term, "cat node_modules");
        assert_eq!(out, vec!["cat: node_modules: Is a directory"]);
    }

    #[derive(Clone, Default)]
    struct SavedFiles(Rc<RefCell<Vec<String>>>);

    impl HostHooks for SavedFiles {
        fn save_file(&mut self, name: &str, _contents: &str) -> bool {
            self.0.borrow_mut().push(name.to_string());
            true
        }
    }

    #[test]
    fn touch_creates_and_saves_through_host() {
        let saved = SavedFiles::default();
        let mut term = terminal().with_hooks(saved.clone());
        let (_, out) = run(&mut term, "touch notes.md");
        assert_eq!(out, vec!["Created file: notes.md"]);
        assert_eq!(*saved.0.borrow(), vec!["notes.md".to_string()]);
        assert!(term.state().files.contains("notes.md"));
        assert_eq!(term.state().files.get("notes.md").unwrap().modified, "2025-01-08 14:30");

        let (_, out) = run(&mut term, "touch notes.md");
        assert_eq!(out, vec!["Updated timestamp: notes.md"]);
        assert_eq!(saved.0.borrow().len(), 1);
    }

    #[test]
    fn mkdir_then_duplicate() {
        let mut term = terminal();
        assert_eq!(run(&mut term, "mkdir src").1, vec!["Created directory: src"]);
        let (result, out) = run(&mut term, "mkdir src");
        assert_eq!(result, "");
        assert_eq!(out, vec!["mkdir: cannot create directory 'src': File exists"]);
        assert_eq!(term.sink().lines()[0].style, LineStyle::Warning);
    }

    #[test]
    fn rm_cp_mv() {
        let mut term = terminal();
        assert_eq!(run(&mut term, "cp main.py app.py").0, "main.py -> app.py");
        assert_eq!(run(&mut term, "mv app.py core.py").1, vec!["Moved app.py to core.py"]);
        assert!(term.state().files.contains("core.py"));
        assert_eq!(run(&mut term, "rm core.py").1, vec!["Removed: core.py"]);
        assert_eq!(
            run(&mut term, "rm core.py").1,
            vec!["rm: core.py: No such file or directory"]
        );
        assert_eq!(
            run(&mut term, "cp ghost x").1,
            vec!["cp: ghost: No such file or directory"]
        );
        assert_eq!(run(&mut term, "mv only").1, vec!["Usage: mv <source> <destination>"]);
    }

    #[test]
    fn find_lists_matches() {
        let mut term = terminal();
        assert_eq!(run(&mut term, "find .json").0, "./package.json");
        let (result, out) = run(&mut term, "find zzz");
        assert_eq!(result, "");
        assert!(out.is_empty());
    }
}
