use endzeit_common::TextSpeed;
use endzeit_runtime::{tick, Runtime, Typewriter, View};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Choose(usize),
    Restart,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed {
            "" => Command::Empty,
            "q" | "quit" => Command::Quit,
            "r" | "restart" => Command::Restart,
            _ => match trimmed.parse::<usize>() {
                Ok(choice) => Command::Choose(choice),
                Err(_) => Command::Unknown(trimmed.to_string()),
            },
        }
    }
}

/// Source of the player's commands.
pub trait Input {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError>;
}

impl Input for DefaultEditor {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        let line = rustyline::Editor::readline(self, prompt)?;
        if !line.trim().is_empty() {
            self.add_history_entry(line.as_str())?;
        }
        Ok(line)
    }
}

/// Interactive front end: types out the current section, lists its
/// choices and reads the player's commands line by line.
pub struct Console<I, W> {
    runtime: Runtime,
    input: I,
    output: W,
    speed: TextSpeed,
    animate: bool,
}

impl Console<DefaultEditor, io::Stdout> {
    pub fn start(runtime: Runtime, speed: TextSpeed, animate: bool) -> Result<(), ReadlineError> {
        let editor = DefaultEditor::new()?;
        let mut console = Console::new(runtime, editor, io::stdout(), speed, animate);
        console.run()
    }
}

impl<I, W> Console<I, W>
where
    I: Input,
    W: Write,
{
    pub fn new(runtime: Runtime, input: I, output: W, speed: TextSpeed, animate: bool) -> Self {
        Self {
            runtime,
            input,
            output,
            speed,
            animate,
        }
    }

    /// Runs until the player quits or the input ends.
    pub fn run(&mut self) -> Result<(), ReadlineError> {
        loop {
            let view = self.runtime.current_view();
            self.show_view(&view)?;

            loop {
                let Some(line) = self.prompt("> ")? else {
                    return Ok(());
                };

                match Command::parse(&line) {
                    Command::Choose(choice) => match self.runtime.choose_option(choice) {
                        Ok(_) => break,
                        Err(err) => writeln!(self.output, "{}", err)?,
                    },
                    Command::Restart => {
                        if self.confirm_restart()? {
                            self.runtime.reset();
                            break;
                        }
                    }
                    Command::Quit => return Ok(()),
                    Command::Empty => {}
                    Command::Unknown(command) => writeln!(
                        self.output,
                        "Unknown command: {}. Use option numbers, r to restart or q to quit",
                        command
                    )?,
                }
            }
        }
    }

    fn show_view(&mut self, view: &View) -> Result<(), ReadlineError> {
        writeln!(self.output)?;
        writeln!(self.output, "== {} ==", view.name.trim())?;
        self.type_text(&view.text)?;
        if !view.text.is_empty() && !view.text.ends_with('\n') {
            writeln!(self.output)?;
        }

        for (num, choice) in view.choices.iter().enumerate() {
            writeln!(self.output, "  {}. {}", num + 1, choice.label)?;
        }
        if view.is_terminal {
            writeln!(self.output, "  r. Restart the game")?;
        }
        Ok(())
    }

    fn type_text(&mut self, text: &str) -> io::Result<()> {
        let mut typewriter = Typewriter::new(text);
        if !self.animate {
            return write!(self.output, "{}", typewriter.finish());
        }

        let mut shown = 0;
        for revealed in typewriter {
            write!(self.output, "{}", &revealed[shown..])?;
            self.output.flush()?;
            shown = revealed.len();
            std::thread::sleep(tick(self.speed));
        }
        Ok(())
    }

    /// Asks before throwing the current adventure away; anything but yes
    /// keeps playing.
    fn confirm_restart(&mut self) -> Result<bool, ReadlineError> {
        let answer = self.prompt("Restart your adventure from the beginning? (y/N) ")?;
        Ok(matches!(
            answer.as_deref().map(|a| a.trim().to_lowercase()).as_deref(),
            Some("y" | "yes" | "j" | "ja")
        ))
    }

    /// End of input and Ctrl-C both end the game.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, ReadlineError> {
        self.output.flush()?;

        match self.input.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
                writeln!(self.output)?;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
