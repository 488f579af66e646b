use std::io::{self, BufRead, Write};

pub struct Prompter<I, W> {
    input: I,
    pub out: W,
}

impl<I: BufRead, W: Write> Prompter<I, W> {
    pub fn new(input: I, out: W) -> Self {
        Self { input, out }
    }

    /// Prints `question` and reads one line. `None` means input is exhausted.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.out, "{question}: ")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
