use std::collections::HashMap;
use std::io::{self, Write};
use thiserror::Error;

mod builtin;

use builtin::{HelpCmd, MispCmd, UnspCmd};

// Failed command outcome: the process exit code plus the error to report
#[derive(Debug, Error)]
#[error("{error}")]
pub struct CmdError {
    code: i32,
    error: anyhow::Error,
}

impl CmdError {
    #[must_use]
    pub fn new(code: i32, error: anyhow::Error) -> Self {
        Self { code, error }
    }

    /// Exit code the hosting process should terminate with.
    #[must_use]
    pub fn code(&self) -> i32 {
        self.code
    }

    #[must_use]
    pub fn error(&self) -> &anyhow::Error {
        &self.error
    }
}

// What a command invocation produces: Ok carries the exit code of a
// successful run, Err carries the code plus the error to report
pub type CmdResult = Result<i32, CmdError>;

/// Shared state handed to every command invocation.
pub struct Context<'a> {
    /// The registry the dispatch came from, for commands that enumerate
    /// or resolve other commands (help does both).
    pub registry: &'a Registry,
    /// Diagnostic sink. Production dispatch wires this to stderr.
    pub diag: &'a mut dyn Write,
}

/// A registrable unit of behavior.
///
/// `name` returns the primary name first and any aliases after it. For
/// example a `check` command also reachable as `--check` and `-c`:
///
/// ```
/// # use cmdreg::{CmdResult, Command, Context};
/// # struct CheckCmd;
/// # impl Command for CheckCmd {
/// fn name(&self) -> Vec<String> {
///     vec!["check".into(), "--check".into(), "-c".into()]
/// }
/// # fn help(&self) -> Vec<String> { vec![String::new()] }
/// # fn exec(&self, _: &mut Context<'_>, _: &[String]) -> CmdResult { Ok(0) }
/// # }
/// ```
///
/// `help` returns the one-line abstract first and the detail lines after it.
/// `exec` runs the command against the full argument vector.
pub trait Command {
    /// Names this command answers to, primary name first. An empty list
    /// makes the command unregistrable.
    fn name(&self) -> Vec<String>;

    /// Help text: abstract first, detail lines after.
    fn help(&self) -> Vec<String>;

    /// Run the command. `args` is the full argument vector as handed to
    /// [`Registry::exec`]; command-specific arguments start at index 3.
    fn exec(&self, ctx: &mut Context<'_>, args: &[String]) -> CmdResult;
}

// Registered commands plus the name lookup index
pub struct Registry {
    commands: Vec<Box<dyn Command>>,
    index: HashMap<String, usize>, // name -> slot in the commands vector
    help: HelpCmd,
    unsp: UnspCmd,
    misp: MispCmd,
}

impl Registry {
    // Constructor for creating an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
            help: HelpCmd,
            unsp: UnspCmd,
            misp: MispCmd,
        }
    }

    /// Drop every registration and rebuild the built-in commands.
    ///
    /// References obtained from [`Registry::lookup`] before the call are
    /// invalidated; callers must not retain them across a clear.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.index.clear();
        self.help = HelpCmd;
        self.unsp = UnspCmd;
        self.misp = MispCmd;
    }

    /// Register a command under every name it declares.
    ///
    /// The command is appended to the enumeration order exactly once and the
    /// index gains one entry per declared name. A command declaring no names
    /// is skipped silently, and a name that is already taken is overwritten
    /// silently (last registration wins); the earlier command stays in the
    /// enumeration order but is no longer reachable under that name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let names = cmd.name();
        if names.is_empty() {
            return;
        }

        let slot = self.commands.len();
        self.commands.push(cmd);
        for name in names {
            self.index.insert(name, slot);
        }
    }

    // Resolve a name or alias to the registered command
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.index.get(name).map(|&slot| self.commands[slot].as_ref())
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|cmd| cmd.as_ref())
    }

    /// Number of registered commands, counting repeat registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Dispatch an argument vector, writing diagnostics to stderr.
    ///
    /// The command name is read from `args[2]`; index 0 holds the program
    /// name and index 1 the program name or an intermediate path, per the
    /// hosting convention. The invoked command sees the full vector.
    ///
    /// # Errors
    ///
    /// Returns whatever the invoked command returns, unchanged. The built-in
    /// fallbacks report exit 1 (no command name supplied) and exit 2 (name
    /// not registered).
    pub fn exec(&self, args: &[String]) -> CmdResult {
        self.exec_to(args, &mut io::stderr())
    }

    /// Dispatch with an explicit diagnostic sink; [`Registry::exec`] with
    /// the stream made injectable so tests can capture it.
    ///
    /// # Errors
    ///
    /// Same contract as [`Registry::exec`].
    pub fn exec_to(&self, args: &[String], diag: &mut dyn Write) -> CmdResult {
        let mut ctx = Context {
            registry: self,
            diag,
        };

        let Some(name) = args.get(2) else {
            return self.misp.exec(&mut ctx, args);
        };

        // Help aliases win over registrations sharing the same name
        if self.help.name().iter().any(|alias| alias == name) {
            return self.help.exec(&mut ctx, args);
        }

        match self.lookup(name) {
            Some(cmd) => cmd.exec(&mut ctx, args),
            None => self.unsp.exec(&mut ctx, args),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
