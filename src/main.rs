use std::env;
use std::process::exit;

use cmdreg::{CmdResult, Command, Context, Registry};

// Demo command: print the trailing arguments back, one per line
struct EchoCmd;

impl Command for EchoCmd {
    fn name(&self) -> Vec<String> {
        vec!["echo".into(), "-e".into()]
    }

    fn help(&self) -> Vec<String> {
        vec![
            "Print arguments back".into(),
            "echo|-e <WORD>...    Print each word on its own line.".into(),
        ]
    }

    fn exec(&self, _ctx: &mut Context<'_>, args: &[String]) -> CmdResult {
        for word in args.iter().skip(3) {
            println!("{word}");
        }
        Ok(0)
    }
}

// Demo command: print the crate version
struct VersionCmd;

impl Command for VersionCmd {
    fn name(&self) -> Vec<String> {
        vec!["version".into(), "-V".into(), "--version".into()]
    }

    fn help(&self) -> Vec<String> {
        vec![
            "Show the cmdreg version".into(),
            "version|-V|--version    Print the version and exit.".into(),
        ]
    }

    fn exec(&self, _ctx: &mut Context<'_>, _args: &[String]) -> CmdResult {
        println!("cmdreg {}", env!("CARGO_PKG_VERSION"));
        Ok(0)
    }
}

fn main() {
    // Register the demo commands
    let mut registry = Registry::new();
    registry.register(Box::new(EchoCmd));
    registry.register(Box::new(VersionCmd));

    // The dispatcher reads the command name from index 2; repeat the program
    // name at index 1 so `cmdreg echo hi` lines up with that convention
    let mut args: Vec<String> = env::args().collect();
    if let Some(program) = args.first().cloned() {
        args.insert(1, program);
    }

    // Dispatch and surface the outcome as the process exit status
    match registry.exec(&args) {
        Ok(code) => exit(code),
        Err(err) => {
            eprintln!("{err}");
            exit(err.code());
        }
    }
}
