//! Interpreter state, pipeline execution and the `Terminal` host object.
//!
//! A command line is split on unquoted `|` into stages. Each stage is
//! tokenized, alias-expanded once, has `$NAME` references substituted outside
//! single quotes and is dispatched to its builtin; the text a stage returns
//! is the piped input of the next one.

use soulphya_types::clock::Clock;
use soulphya_types::config::{TerminalConfig, TimingConfig};
use soulphya_types::error::{Result, TerminalError};
use soulphya_types::input::KeyInput;
use soulphya_types::output::{LineStyle, OutputSink};

use crate::alias::AliasTable;
use crate::builtin::Builtin;
use crate::commands;
use crate::completion::{self, Completion};
use crate::environment::Environment;
use crate::files::FileStore;
use crate::history::History;
use crate::hooks::{HostHooks, NoHooks};
use crate::process::ProcessTable;
use crate::prompt::render_prompt;
use crate::rng::Rng;
use crate::scheduler::{Scheduler, TaskId};

/// Hint shown after an unknown command.
pub const UNKNOWN_COMMAND_HINT: &str =
    "💡 Try 'help' to see available commands or ask Sophia AI for assistance";

const BANNER: [(&str, LineStyle); 4] = [
    ("🧠 BotDL SoulPHYA Terminal v1.0", LineStyle::Welcome),
    ("Consciousness-powered development environment", LineStyle::Info),
    ("Sophia AI integration: ACTIVE", LineStyle::Success),
    (
        "Type 'help' for available commands or 'consciousness' for awakening status",
        LineStyle::Hint,
    ),
];

/// Everything a session remembers between commands.
#[derive(Debug)]
pub struct ShellState {
    pub env: Environment,
    pub aliases: AliasTable,
    pub history: History,
    pub processes: ProcessTable,
    pub files: FileStore,
    pub scheduler: Scheduler,
    /// Current working directory. Purely cosmetic.
    pub cwd: String,
    pub hostname: String,
    pub timing: TimingConfig,
    /// Progress raised by `enlighten`, 0.0..=1.0.
    pub enlightenment: f64,
    pub meditating: bool,
    pub rng: Rng,
}

impl ShellState {
    /// Fresh session state. The working directory starts at `$HOME`.
    pub fn new(config: &TerminalConfig, env: Environment, seed: u64) -> Self {
        let mut aliases = AliasTable::with_defaults();
        for (name, target) in &config.aliases {
            aliases.set(name, target);
        }
        let cwd = env.home().to_string();
        Self {
            env,
            aliases,
            history: History::new(config.history_limit),
            processes: ProcessTable::new(),
            files: FileStore::with_samples(),
            scheduler: Scheduler::new(),
            cwd,
            hostname: config.hostname.clone(),
            timing: config.timing.clone(),
            enlightenment: 0.0,
            meditating: false,
            rng: Rng::new(seed),
        }
    }

    /// The prompt for the current user, directory and consciousness level.
    pub fn prompt(&self) -> String {
        render_prompt(
            self.env.user(),
            &self.hostname,
            &self.cwd,
            self.env.home(),
            self.env.consciousness_level(),
        )
    }
}

/// What a builtin handler gets to work with.
pub struct Context<'a> {
    pub state: &'a mut ShellState,
    pub out: &'a mut dyn OutputSink,
    pub clock: &'a dyn Clock,
    pub hooks: &'a mut dyn HostHooks,
    /// Output of the previous pipeline stage. `None` for the first stage.
    pub stdin: Option<&'a str>,
}

impl Context<'_> {
    /// Write `text` to the sink, one line per `\n`.
    pub fn emit(&mut self, text: &str, style: LineStyle) {
        emit_text(self.out, text, style);
    }

    /// Queue a line for later delivery by [`Terminal::tick`].
    pub fn schedule(
        &mut self,
        delay_ms: u64,
        text: &str,
        style: LineStyle,
        owner: Option<u32>,
    ) -> TaskId {
        let now = self.clock.monotonic_ms();
        self.state
            .scheduler
            .schedule(now, delay_ms, text, style, owner)
    }

    pub fn short_delay(&self) -> u64 {
        self.state.timing.short_delay_ms
    }

    pub fn long_delay(&self) -> u64 {
        self.state.timing.long_delay_ms
    }
}

/// Split `text` into sink lines. Trailing newlines are dropped and empty
/// text emits nothing.
pub(crate) fn emit_text(out: &mut dyn OutputSink, text: &str, style: LineStyle) {
    let text = text.trim_end_matches('\n');
    if text.is_empty() {
        return;
    }
    for line in text.split('\n') {
        out.append(line, style);
    }
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

/// A terminal session: interpreter state plus its output sink, clock and
/// host hooks.
///
/// Dropping the terminal cancels any delayed output still pending.
pub struct Terminal<S: OutputSink, C: Clock> {
    state: ShellState,
    sink: S,
    clock: C,
    hooks: Box<dyn HostHooks>,
    input: String,
}

impl<S: OutputSink, C: Clock> Terminal<S, C> {
    /// Create a terminal with the environment derived from `config`.
    pub fn new(config: &TerminalConfig, sink: S, clock: C) -> Self {
        let env = Environment::from_config(config);
        Self::from_parts(config, env, sink, clock)
    }

    /// Create a terminal around an existing environment.
    pub fn from_parts(config: &TerminalConfig, env: Environment, sink: S, clock: C) -> Self {
        let seed = seed_from_clock(&clock);
        Self {
            state: ShellState::new(config, env, seed),
            sink,
            clock,
            hooks: Box::new(NoHooks),
            input: String::new(),
        }
    }

    /// Attach host hooks.
    pub fn with_hooks(mut self, hooks: impl HostHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    /// Reseed the random source used for canned responses and pids.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.state.rng = Rng::new(seed);
        self
    }

    /// Print the welcome banner and the first prompt.
    pub fn boot(&mut self) {
        log::info!("Terminal ready for {}", self.state.env.user());
        for (text, style) in BANNER {
            self.sink.append(text, style);
        }
        self.sink.append("", LineStyle::Normal);
        let prompt = self.prompt();
        self.sink.set_prompt(&prompt);
    }

    pub fn prompt(&self) -> String {
        self.state.prompt()
    }

    /// Run one submitted line: record it in history, echo it after the
    /// prompt, execute it and re-render the prompt.
    ///
    /// Blank input is ignored. Returns the final stage's text.
    pub fn execute(&mut self, line: &str) -> String {
        if line.trim().is_empty() {
            return String::new();
        }
        self.state.history.push(line);
        let echoed = format!("{}{line}", self.prompt());
        self.sink.append(&echoed, LineStyle::Command);
        let output = self.parse_and_execute(line);
        let prompt = self.prompt();
        self.sink.set_prompt(&prompt);
        output
    }

    /// Execute a command line without touching history or echoing it.
    ///
    /// Errors are reported as output lines; a failing stage passes empty
    /// text downstream. Returns the final stage's text.
    pub fn parse_and_execute(&mut self, line: &str) -> String {
        if line.trim().is_empty() {
            return String::new();
        }
        let mut piped: Option<String> = None;
        for stage in split_pipes(line) {
            let output = match self.run_stage(&stage, piped.as_deref()) {
                Ok(text) => text,
                Err(e) => {
                    self.report(&e);
                    String::new()
                },
            };
            piped = Some(output);
        }
        piped.unwrap_or_default()
    }

    fn run_stage(&mut self, stage: &str, stdin: Option<&str>) -> Result<String> {
        if stage.is_empty() {
            return Err(TerminalError::Parse("empty command in pipeline".to_string()));
        }
        let words = self.state.aliases.resolve(lex(stage)?)?;
        let tokens: Vec<String> = words.iter().map(|w| w.expand(&self.state.env)).collect();
        match tokens.split_first() {
            Some((command, args)) => self.dispatch(command, args, stdin),
            None => Ok(String::new()),
        }
    }

    /// Run one builtin by name.
    pub fn dispatch(&mut self, command: &str, args: &[String], stdin: Option<&str>) -> Result<String> {
        let Some(builtin) = Builtin::from_name(command) else {
            log::warn!("Unknown command: {command}");
            return Err(TerminalError::UnknownCommand(command.to_string()));
        };
        log::debug!("dispatch {} {args:?}", builtin.name());
        let mut ctx = Context {
            state: &mut self.state,
            out: &mut self.sink,
            clock: &self.clock,
            hooks: &mut *self.hooks,
            stdin,
        };
        commands::run(builtin, args, &mut ctx)
    }

    fn report(&mut self, err: &TerminalError) {
        emit_text(&mut self.sink, &err.to_string(), LineStyle::Error);
        if matches!(err, TerminalError::UnknownCommand(_)) {
            self.sink.append(UNKNOWN_COMMAND_HINT, LineStyle::Hint);
        }
    }

    // -- Input line --

    /// Recall the previous history entry into the input line.
    pub fn history_previous(&mut self) -> Option<String> {
        let entry = self.state.history.previous()?.to_string();
        self.input.clone_from(&entry);
        Some(entry)
    }

    /// Recall the next history entry into the input line.
    pub fn history_next(&mut self) -> Option<String> {
        let entry = self.state.history.next()?.to_string();
        self.input.clone_from(&entry);
        Some(entry)
    }

    /// Complete a partial command name. A unique match replaces the input
    /// line; several matches are listed as an info line.
    pub fn complete(&mut self, partial: &str) -> Completion {
        let result = completion::complete(partial);
        match &result {
            Completion::Unique(line) => self.input.clone_from(line),
            Completion::Ambiguous(names) => self.sink.append(&names.join("  "), LineStyle::Info),
            Completion::NoMatch => {},
        }
        result
    }

    /// Feed one key event to the input line.
    pub fn handle_key(&mut self, key: KeyInput) {
        match key {
            KeyInput::Enter => {
                let line = std::mem::take(&mut self.input);
                self.execute(&line);
            },
            KeyInput::Up => {
                self.history_previous();
            },
            KeyInput::Down => {
                self.history_next();
            },
            KeyInput::Tab => {
                let partial = self.input.clone();
                self.complete(&partial);
            },
            KeyInput::Interrupt => self.interrupt(),
            KeyInput::Char(c) => self.input.push(c),
            KeyInput::Backspace => {
                self.input.pop();
            },
        }
    }

    /// Current contents of the input line.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Ctrl+C: drop pending delayed output and clear the input line.
    pub fn interrupt(&mut self) {
        self.sink.append("^C", LineStyle::Command);
        self.sink.append("Process interrupted", LineStyle::Warning);
        self.state.scheduler.cancel_all();
        self.input.clear();
    }

    // -- Delayed output --

    /// Deliver every scheduled line that is due. Returns how many were
    /// delivered.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.monotonic_ms();
        let due = self.state.scheduler.drain_due(now);
        for task in &due {
            emit_text(&mut self.sink, &task.text, task.style);
        }
        due.len()
    }

    pub fn pending_tasks(&self) -> usize {
        self.state.scheduler.pending()
    }

    /// Monotonic time at which the next scheduled line falls due.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.state.scheduler.next_due()
    }

    /// Cancel everything still pending. The session stays usable.
    pub fn shutdown(&mut self) {
        let dropped = self.state.scheduler.cancel_all();
        log::info!("Terminal shut down ({dropped} pending line(s) dropped)");
    }

    // -- Accessors --

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    pub fn env(&self) -> &Environment {
        &self.state.env
    }

    pub fn cwd(&self) -> &str {
        &self.state.cwd
    }

    pub fn history(&self) -> &History {
        &self.state.history
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<S: OutputSink, C: Clock> Drop for Terminal<S, C> {
    fn drop(&mut self) {
        self.state.scheduler.cancel_all();
    }
}

fn seed_from_clock(clock: &dyn Clock) -> u64 {
    let t = clock.now();
    let days = (u64::from(t.year) * 12 + u64::from(t.month)) * 31 + u64::from(t.day);
    let secs = days * 86_400
        + u64::from(t.hour) * 3600
        + u64::from(t.minute) * 60
        + u64::from(t.second);
    secs ^ clock.monotonic_ms().rotate_left(32)
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// One token as typed, kept as runs of text that either take `$NAME`
/// expansion or are literal (single-quoted or backslash-escaped).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    runs: Vec<(String, bool)>,
}

impl Word {
    fn push(&mut self, ch: char, literal: bool) {
        match self.runs.last_mut() {
            Some((text, lit)) if *lit == literal => text.push(ch),
            _ => self.runs.push((ch.to_string(), literal)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The token with quotes removed and nothing expanded.
    pub fn text(&self) -> String {
        self.runs.iter().map(|(text, _)| text.as_str()).collect()
    }

    /// The token with variables substituted outside literal runs.
    pub fn expand(&self, env: &Environment) -> String {
        self.runs
            .iter()
            .map(|(text, literal)| if *literal { text.clone() } else { env.expand(text) })
            .collect()
    }
}

/// Split a command stage into tokens.
///
/// Single quotes are literal, double quotes group (with `\"`, `\\` and `\$`
/// escapes), and a bare backslash escapes the next character.
pub fn tokenize(input: &str) -> Result<Vec<String>> {
    Ok(lex(input)?.iter().map(Word::text).collect())
}

/// Like [`tokenize`], but keeps track of which parts of each token are
/// literal so `$NAME` inside single quotes survives expansion.
pub fn lex(input: &str) -> Result<Vec<Word>> {
    let mut words = Vec::new();
    let mut current = Word::default();
    let mut chars = input.chars().peekable();
    let mut in_single = false;
    let mut in_double = false;

    while let Some(ch) = chars.next() {
        if in_single {
            if ch == '\'' {
                in_single = false;
            } else {
                current.push(ch, true);
            }
        } else if in_double {
            if ch == '"' {
                in_double = false;
            } else if ch == '\\'
                && let Some(&next) = chars.peek()
                && matches!(next, '"' | '\\' | '$')
            {
                current.push(next, true);
                chars.next();
            } else {
                current.push(ch, false);
            }
        } else {
            match ch {
                '\'' => in_single = true,
                '"' => in_double = true,
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next, true);
                    }
                },
                c if c.is_whitespace() => {
                    if !current.is_empty() {
                        words.push(std::mem::take(&mut current));
                    }
                },
                _ => current.push(ch, false),
            }
        }
    }

    if in_single {
        return Err(TerminalError::Parse("unterminated single quote".to_string()));
    }
    if in_double {
        return Err(TerminalError::Parse("unterminated double quote".to_string()));
    }
    if !current.is_empty() {
        words.push(current);
    }
    Ok(words)
}

// ---------------------------------------------------------------------------
// Pipe splitting
// ---------------------------------------------------------------------------

/// Split a line on every unquoted `|` into trimmed stages.
///
/// Quotes are kept in the stages for the tokenizer. Empty stages are kept
/// so the caller can report them.
pub fn split_pipes(input: &str) -> Vec<String> {
    let mut stages = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars();
    let mut in_single = false;
    let mut in_double = false;

    while let Some(ch) = chars.next() {
        if in_single {
            current.push(ch);
            if ch == '\'' {
                in_single = false;
            }
            continue;
        }
        if in_double {
            current.push(ch);
            if ch == '"' {
                in_double = false;
            } else if ch == '\\'
                && let Some(next) = chars.next()
            {
                current.push(next);
            }
            continue;
        }

        match ch {
            '\'' => {
                in_single = true;
                current.push(ch);
            },
            '"' => {
                in_double = true;
                current.push(ch);
            },
            '\\' => {
                current.push(ch);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            },
            '|' => {
                stages.push(current.trim().to_string());
                current.clear();
            },
            _ => current.push(ch),
        }
    }

    stages.push(current.trim().to_string());
    stages
}
