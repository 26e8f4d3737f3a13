use anyhow::anyhow;
use std::io::Write;

use crate::{CmdError, CmdResult, Command, Context};

// Built-in help: lists registrations, or renders one command's detail lines
pub(crate) struct HelpCmd;

impl Command for HelpCmd {
    fn name(&self) -> Vec<String> {
        vec!["help".into(), "-h".into(), "--help".into()]
    }

    fn help(&self) -> Vec<String> {
        vec![
            "Show this help".into(),
            "help|-h|--help     Show abstracts for all commands.".into(),
            "help <COMMAND>     Show help detail for <COMMAND>.".into(),
            "help help          Show this help.".into(),
        ]
    }

    fn exec(&self, ctx: &mut Context<'_>, args: &[String]) -> CmdResult {
        // No target: one line per registered command with a real primary name
        let Some(target) = args.get(3) else {
            for cmd in ctx.registry.commands() {
                match cmd.name().first() {
                    Some(primary) if !primary.is_empty() => {
                        let summary = cmd.help().into_iter().next().unwrap_or_default();
                        let _ = writeln!(ctx.diag, "{primary}\t{summary}");
                    }
                    _ => {}
                }
            }
            return Ok(0);
        };

        // An unknown target renders the unsupported placeholder instead of
        // failing; help reports success once it has decided what to print
        let help = match ctx.registry.lookup(target) {
            Some(cmd) => cmd.help(),
            None => UnspCmd.help(),
        };
        for line in help.iter().skip(1) {
            let _ = writeln!(ctx.diag, "{line}");
        }

        Ok(0)
    }
}

// Fallback when the vector carries no command name at index 2
pub(crate) struct MispCmd;

impl Command for MispCmd {
    fn name(&self) -> Vec<String> {
        vec![String::new()]
    }

    fn help(&self) -> Vec<String> {
        vec![String::new()]
    }

    fn exec(&self, _ctx: &mut Context<'_>, _args: &[String]) -> CmdResult {
        Err(CmdError::new(
            1,
            anyhow!("Missing parameters, type -h for help"),
        ))
    }
}

// Fallback when the name at index 2 resolves to nothing
pub(crate) struct UnspCmd;

impl Command for UnspCmd {
    fn name(&self) -> Vec<String> {
        vec![String::new()]
    }

    fn help(&self) -> Vec<String> {
        vec![String::new()]
    }

    fn exec(&self, _ctx: &mut Context<'_>, args: &[String]) -> CmdResult {
        let name = args.get(2).map(String::as_str).unwrap_or_default();
        Err(CmdError::new(
            2,
            anyhow!("Unsupported command or help target('{name}'), type -h for help"),
        ))
    }
}
