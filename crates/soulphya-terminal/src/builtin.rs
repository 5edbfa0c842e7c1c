//! The fixed registry of builtin commands.
//!
//! Every command the interpreter understands is a variant of [`Builtin`].
//! Dispatch is an exhaustive `match` in `commands::run`, so adding a variant
//! without a handler fails to compile.

/// A builtin command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Help,
    Clear,
    Ls,
    Pwd,
    Cd,
    Echo,
    Date,
    Whoami,
    Uname,
    Env,
    Export,
    Unset,
    Alias,
    Unalias,
    History,
    Ps,
    Kill,
    Cat,
    Touch,
    Mkdir,
    Rm,
    Cp,
    Mv,
    Find,
    Grep,
    Wc,
    Sort,
    Head,
    Tail,
    Consciousness,
    Sophia,
    Meditate,
    Inspire,
    Awaken,
    Enlighten,
    Divine,
    Sacred,
    Python,
    Node,
    Npm,
    Git,
    Run,
    Deploy,
    Server,
}

/// Category names in the order `help` lists them.
pub const CATEGORIES: [&str; 6] = ["system", "shell", "files", "text", "consciousness", "dev"];

impl Builtin {
    /// Every builtin, in completion order.
    pub const ALL: [Builtin; 44] = [
        Self::Help,
        Self::Clear,
        Self::Ls,
        Self::Pwd,
        Self::Cd,
        Self::Echo,
        Self::Date,
        Self::Whoami,
        Self::Uname,
        Self::Env,
        Self::Export,
        Self::Unset,
        Self::Alias,
        Self::Unalias,
        Self::History,
        Self::Ps,
        Self::Kill,
        Self::Cat,
        Self::Touch,
        Self::Mkdir,
        Self::Rm,
        Self::Cp,
        Self::Mv,
        Self::Find,
        Self::Grep,
        Self::Wc,
        Self::Sort,
        Self::Head,
        Self::Tail,
        Self::Consciousness,
        Self::Sophia,
        Self::Meditate,
        Self::Inspire,
        Self::Awaken,
        Self::Enlighten,
        Self::Divine,
        Self::Sacred,
        Self::Python,
        Self::Node,
        Self::Npm,
        Self::Git,
        Self::Run,
        Self::Deploy,
        Self::Server,
    ];

    /// Look up a builtin by the name the user types. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.name() == name)
    }

    /// The command name (what the user types).
    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Clear => "clear",
            Self::Ls => "ls",
            Self::Pwd => "pwd",
            Self::Cd => "cd",
            Self::Echo => "echo",
            Self::Date => "date",
            Self::Whoami => "whoami",
            Self::Uname => "uname",
            Self::Env => "env",
            Self::Export => "export",
            Self::Unset => "unset",
            Self::Alias => "alias",
            Self::Unalias => "unalias",
            Self::History => "history",
            Self::Ps => "ps",
            Self::Kill => "kill",
            Self::Cat => "cat",
            Self::Touch => "touch",
            Self::Mkdir => "mkdir",
            Self::Rm => "rm",
            Self::Cp => "cp",
            Self::Mv => "mv",
            Self::Find => "find",
            Self::Grep => "grep",
            Self::Wc => "wc",
            Self::Sort => "sort",
            Self::Head => "head",
            Self::Tail => "tail",
            Self::Consciousness => "consciousness",
            Self::Sophia => "sophia",
            Self::Meditate => "meditate",
            Self::Inspire => "inspire",
            Self::Awaken => "awaken",
            Self::Enlighten => "enlighten",
            Self::Divine => "divine",
            Self::Sacred => "sacred",
            Self::Python => "python",
            Self::Node => "node",
            Self::Npm => "npm",
            Self::Git => "git",
            Self::Run => "run",
            Self::Deploy => "deploy",
            Self::Server => "server",
        }
    }

    /// Category for grouping in `help` output.
    pub fn category(self) -> &'static str {
        match self {
            Self::Help
            | Self::Clear
            | Self::Date
            | Self::Whoami
            | Self::Uname
            | Self::Ps
            | Self::Kill => "system",
            Self::Pwd
            | Self::Cd
            | Self::Echo
            | Self::Env
            | Self::Export
            | Self::Unset
            | Self::Alias
            | Self::Unalias
            | Self::History => "shell",
            Self::Ls
            | Self::Cat
            | Self::Touch
            | Self::Mkdir
            | Self::Rm
            | Self::Cp
            | Self::Mv
            | Self::Find => "files",
            Self::Grep | Self::Wc | Self::Sort | Self::Head | Self::Tail => "text",
            Self::Consciousness
            | Self::Sophia
            | Self::Meditate
            | Self::Inspire
            | Self::Awaken
            | Self::Enlighten
            | Self::Divine
            | Self::Sacred => "consciousness",
            Self::Python
            | Self::Node
            | Self::Npm
            | Self::Git
            | Self::Run
            | Self::Deploy
            | Self::Server => "dev",
        }
    }

    /// One-line description for `help`.
    pub fn description(self) -> &'static str {
        match self {
            Self::Help => "Show this help message",
            Self::Clear => "Clear terminal screen",
            Self::Ls => "List directory contents",
            Self::Pwd => "Print working directory",
            Self::Cd => "Change directory",
            Self::Echo => "Print arguments with $VAR substitution",
            Self::Date => "Show current date and time",
            Self::Whoami => "Show current user",
            Self::Uname => "Show system information",
            Self::Env => "Show environment variables",
            Self::Export => "Set environment variable",
            Self::Unset => "Remove environment variable",
            Self::Alias => "Manage command aliases",
            Self::Unalias => "Remove command alias",
            Self::History => "Show command history",
            Self::Ps => "List running processes",
            Self::Kill => "Terminate a process",
            Self::Cat => "Display file contents",
            Self::Touch => "Create empty file",
            Self::Mkdir => "Create directory",
            Self::Rm => "Remove file",
            Self::Cp => "Copy file",
            Self::Mv => "Move/rename file",
            Self::Find => "Find files",
            Self::Grep => "Search text patterns",
            Self::Wc => "Count lines, words, and characters",
            Self::Sort => "Sort lines",
            Self::Head => "Show first lines",
            Self::Tail => "Show last lines",
            Self::Consciousness => "Show consciousness status",
            Self::Sophia => "Interact with Sophia AI",
            Self::Meditate => "Toggle meditation mode",
            Self::Inspire => "Get divine inspiration",
            Self::Awaken => "Awaken consciousness",
            Self::Enlighten => "Increase enlightenment",
            Self::Divine => "Channel divine insight",
            Self::Sacred => "Access Sacred Platform",
            Self::Python => "Run Python script",
            Self::Node => "Run Node.js script",
            Self::Npm => "Run npm command",
            Self::Git => "Run git command",
            Self::Run => "Run current project",
            Self::Deploy => "Deploy project",
            Self::Server => "Start development server",
        }
    }

    /// Usage string (e.g. "kill <pid>").
    pub fn usage(self) -> &'static str {
        match self {
            Self::Help => "help [command]",
            Self::Clear => "clear",
            Self::Ls => "ls [-a] [-l]",
            Self::Pwd => "pwd",
            Self::Cd => "cd [dir]",
            Self::Echo => "echo [text...]",
            Self::Date => "date",
            Self::Whoami => "whoami",
            Self::Uname => "uname",
            Self::Env => "env",
            Self::Export => "export VAR=value",
            Self::Unset => "unset <VAR>",
            Self::Alias => "alias [name [command...]]",
            Self::Unalias => "unalias <name>",
            Self::History => "history [clear]",
            Self::Ps => "ps",
            Self::Kill => "kill <pid>",
            Self::Cat => "cat <filename>",
            Self::Touch => "touch <filename>",
            Self::Mkdir => "mkdir <dirname>",
            Self::Rm => "rm <filename>",
            Self::Cp => "cp <source> <destination>",
            Self::Mv => "mv <source> <destination>",
            Self::Find => "find <pattern>",
            Self::Grep => "grep <pattern> [file]",
            Self::Wc => "wc [file]",
            Self::Sort => "sort [file]",
            Self::Head => "head [-n count] [file]",
            Self::Tail => "tail [-n count] [file]",
            Self::Consciousness => "consciousness",
            Self::Sophia => "sophia <message>",
            Self::Meditate => "meditate",
            Self::Inspire => "inspire",
            Self::Awaken => "awaken",
            Self::Enlighten => "enlighten",
            Self::Divine => "divine",
            Self::Sacred => "sacred",
            Self::Python => "python <filename>",
            Self::Node => "node <filename>",
            Self::Npm => "npm <command>",
            Self::Git => "git <command>",
            Self::Run => "run",
            Self::Deploy => "deploy",
            Self::Server => "server [port]",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = Builtin::ALL.iter().map(|b| b.name()).collect();
        assert_eq!(names.len(), Builtin::ALL.len());
    }

    #[test]
    fn from_name_round_trips_every_builtin() {
        for b in Builtin::ALL {
            assert_eq!(Builtin::from_name(b.name()), Some(b));
        }
    }

    #[test]
    fn from_name_is_case_sensitive() {
        assert_eq!(Builtin::from_name("LS"), None);
        assert_eq!(Builtin::from_name("ls"), Some(Builtin::Ls));
    }

    #[test]
    fn unknown_name() {
        assert_eq!(Builtin::from_name("vim"), None);
        assert_eq!(Builtin::from_name(""), None);
    }

    #[test]
    fn every_category_is_listed() {
        for b in Builtin::ALL {
            assert!(CATEGORIES.contains(&b.category()), "{} has stray category", b.name());
        }
    }

    #[test]
    fn usage_starts_with_name() {
        for b in Builtin::ALL {
            assert!(b.usage().starts_with(b.name()), "{}", b.name());
        }
    }
}
