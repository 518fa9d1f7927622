//! Command line arguments for the demo REPL binary

use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// History depth
    /// Optional. Maximum number of events retained. Defaults to the
    /// BANGLINE_HISTORY_DEPTH environment variable, then to 15.
    #[clap(short = 'd', long, help = "history depth")]
    depth: Option<usize>,

    /// Prompt template
    /// Optional. A literal `%!` is replaced with the next event number.
    #[clap(short = 'p', long, default_value = "%!> ", help = "prompt template")]
    prompt: String,

    /// Verbose mode
    /// Optional. Print verbose messages.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    depth: Option<usize>,
    prompt: String,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self {
            depth: args.depth,
            prompt: args.prompt,
            verbose: args.verbose,
        }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self {
            depth: args.depth,
            prompt: args.prompt,
            verbose: args.verbose,
        }
    }

    pub fn depth(&self) -> Option<usize> {
        self.depth
    }

    pub fn prompt(&self) -> &String {
        &self.prompt
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
