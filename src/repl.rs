use std::{
    fs,
    io::{self, BufRead, Write},
    ops::ControlFlow,
    path::PathBuf,
};

use crate::{
    color::{Palette, colors},
    interpreter::evaluator::core::Context,
    script::run_script,
};

/// Text printed by the `help` command.
pub const HELP: &str = "\
Enter an expression to evaluate it, or one of these commands:
  help           show this message
  list           show all variables and functions
  reset          forget all variables and functions
  clear          clear the screen
  debug          toggle debug logging
  run <file>     evaluate a file line by line
  quit, exit, q  leave the calculator

Expressions use integers, single-letter variables and + - * / % ( ).
  A = 2          assign (the assignment yields the value)
  S[x] -> x * x  define a one-parameter function
  S <- 5         call a function";

/// One line of REPL input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `quit`, `exit` or `q`.
    Quit,
    /// `clear`
    Clear,
    /// `reset`
    Reset,
    /// `help`
    Help,
    /// `list`
    List,
    /// `debug`
    Debug,
    /// `run <file>`
    Run(PathBuf),
    /// A blank line.
    Empty,
    /// Anything else, handed to the calculator.
    Evaluate(String),
}

impl Command {
    /// Classifies a line of input. Command words are matched exactly after
    /// trimming, so `Q` is still the variable `Q`.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            "" => Self::Empty,
            "quit" | "exit" | "q" => Self::Quit,
            "clear" => Self::Clear,
            "reset" => Self::Reset,
            "help" => Self::Help,
            "list" => Self::List,
            "debug" => Self::Debug,
            _ => match trimmed.strip_prefix("run ") {
                Some(path) if !path.trim().is_empty() => Self::Run(PathBuf::from(path.trim())),
                _ => Self::Evaluate(trimmed.to_string()),
            },
        }
    }
}

/// An interactive session over a reader/writer pair.
///
/// The session owns its [`Context`]. `on_debug` is invoked with the new state
/// whenever the `debug` command toggles logging, so the host can adjust its
/// subscriber. Output is plain unless a colored [`Palette`] is set with
/// [`Repl::with_palette`].
pub struct Repl<F> {
    context:  Context,
    debug:    bool,
    on_debug: F,
    palette:  Palette,
}

impl<F: FnMut(bool)> Repl<F> {
    /// Creates a session around `context`.
    pub const fn new(context: Context, debug: bool, on_debug: F) -> Self {
        Self { context,
               debug,
               on_debug,
               palette: Palette::plain() }
    }

    /// Sets the palette used for prompts, results and errors.
    #[must_use]
    pub const fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// The session's evaluation context.
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        let palette = self.palette;
        writeln!(output,
                 "{}",
                 palette.paint(colors::NOTICE, "Enter an expression to evaluate (or 'help', 'quit'):"))?;

        for line in input.lines() {
            let command = Command::parse(&line?);
            if self.execute(command, output)?.is_break() {
                break;
            }
        }

        writeln!(output, "{}", palette.paint(colors::NOTICE, "Exiting the program."))
    }

    /// Executes a single command.
    ///
    /// Returns `ControlFlow::Break` when the session should end.
    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<ControlFlow<()>> {
        match command {
            Command::Quit => return Ok(ControlFlow::Break(())),
            Command::Empty => {},
            Command::Clear => write!(output, "\x1B[2J\x1B[1;1H")?,
            Command::Reset => {
                self.context.reset();
                writeln!(output, "Environment reset.")?;
            },
            Command::Help => writeln!(output, "{HELP}")?,
            Command::List => self.list(output)?,
            Command::Debug => {
                self.debug = !self.debug;
                (self.on_debug)(self.debug);
                let state = if self.debug { "on" } else { "off" };
                writeln!(output, "Debug logging {state}.")?;
            },
            Command::Run(path) => match fs::read_to_string(&path) {
                Ok(source) => match run_script(&source, &mut self.context) {
                    Ok(Some(value)) => self.result(output, value)?,
                    Ok(None) => writeln!(output, "Done.")?,
                    Err(e) => self.error(output, e)?,
                },
                Err(e) => self.error(output, format_args!("cannot read '{}': {e}", path.display()))?,
            },
            Command::Evaluate(line) => match self.context.evaluate(&line) {
                Ok(Some(value)) => self.result(output, value)?,
                Ok(None) => writeln!(output, "Defined.")?,
                Err(e) => self.error(output, e)?,
            },
        }

        Ok(ControlFlow::Continue(()))
    }

    fn result<W: Write>(&self, output: &mut W, value: i64) -> io::Result<()> {
        writeln!(output,
                 "{}{}",
                 self.palette.paint(colors::SUCCESS, "Result: "),
                 self.palette.paint(colors::INFO, value))
    }

    fn error<W: Write>(&self, output: &mut W, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(output,
                 "{}{}",
                 self.palette.paint(colors::ERROR, "Error: "),
                 self.palette.paint(colors::INFO, message))
    }

    /// Prints every variable and function.
    fn list<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let variables = self.context.variables();
        let functions = self.context.functions();

        if variables.is_empty() && functions.is_empty() {
            return writeln!(output, "Nothing defined.");
        }
        for (name, value) in variables {
            writeln!(output, "{name} = {value}")?;
        }
        for def in functions {
            writeln!(output, "{def}")?;
        }
        Ok(())
    }
}
