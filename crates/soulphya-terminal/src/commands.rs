//! Builtin dispatch table.

use soulphya_types::error::Result;

use crate::builtin::Builtin;
use crate::interpreter::Context;
use crate::{
    dev_commands as dev, file_commands as file, shell_commands as shell,
    spirit_commands as spirit, system_commands as system, text_commands as text,
};

/// Run `builtin` with its arguments. Returns the text handed to the next
/// pipeline stage.
pub(crate) fn run(builtin: Builtin, args: &[String], ctx: &mut Context<'_>) -> Result<String> {
    match builtin {
        Builtin::Help => system::help(args, ctx),
        Builtin::Clear => system::clear(args, ctx),
        Builtin::Date => system::date(args, ctx),
        Builtin::Whoami => system::whoami(args, ctx),
        Builtin::Uname => system::uname(args, ctx),
        Builtin::Ps => system::ps(args, ctx),
        Builtin::Kill => system::kill(args, ctx),

        Builtin::Pwd => shell::pwd(args, ctx),
        Builtin::Cd => shell::cd(args, ctx),
        Builtin::Echo => shell::echo(args, ctx),
        Builtin::Env => shell::env(args, ctx),
        Builtin::Export => shell::export(args, ctx),
        Builtin::Unset => shell::unset(args, ctx),
        Builtin::Alias => shell::alias(args, ctx),
        Builtin::Unalias => shell::unalias(args, ctx),
        Builtin::History => shell::history(args, ctx),

        Builtin::Ls => file::ls(args, ctx),
        Builtin::Cat => file::cat(args, ctx),
        Builtin::Touch => file::touch(args, ctx),
        Builtin::Mkdir => file::mkdir(args, ctx),
        Builtin::Rm => file::rm(args, ctx),
        Builtin::Cp => file::cp(args, ctx),
        Builtin::Mv => file::mv(args, ctx),
        Builtin::Find => file::find(args, ctx),

        Builtin::Grep => text::grep(args, ctx),
        Builtin::Wc => text::wc(args, ctx),
        Builtin::Sort => text::sort(args, ctx),
        Builtin::Head => text::head(args, ctx),
        Builtin::Tail => text::tail(args, ctx),

        Builtin::Consciousness => spirit::consciousness(args, ctx),
        Builtin::Sophia => spirit::sophia(args, ctx),
        Builtin::Meditate => spirit::meditate(args, ctx),
        Builtin::Inspire => spirit::inspire(args, ctx),
        Builtin::Awaken => spirit::awaken(args, ctx),
        Builtin::Enlighten => spirit::enlighten(args, ctx),
        Builtin::Divine => spirit::divine(args, ctx),
        Builtin::Sacred => spirit::sacred(args, ctx),

        Builtin::Python => dev::python(args, ctx),
        Builtin::Node => dev::node(args, ctx),
        Builtin::Npm => dev::npm(args, ctx),
        Builtin::Git => dev::git(args, ctx),
        Builtin::Run => dev::run(args, ctx),
        Builtin::Deploy => dev::deploy(args, ctx),
        Builtin::Server => dev::server(args, ctx),
    }
}
