use mig_core::SnapshotFolder;
use mig_core::fsutil::ensure_dir;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Line-based prompts that re-ask until the answer is valid.
pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut s = String::new();
        if self.input.read_line(&mut s)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid answer was given",
            ));
        }
        Ok(s.trim().to_owned())
    }

    fn complain(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "  ! {msg}")
    }

    /// Returns `initial` when it already names a directory, else asks for one.
    pub fn directory(&mut self, message: &str, initial: Option<PathBuf>) -> io::Result<PathBuf> {
        let mut candidate = initial;
        loop {
            if let Some(p) = candidate.take() {
                match ensure_dir(&p) {
                    Ok(()) => return Ok(p),
                    Err(e) => self.complain(&e.to_string())?,
                }
            }
            write!(self.out, "{message} ")?;
            self.out.flush()?;
            let line = self.read_line()?;
            if line.is_empty() {
                self.complain("Enter a value.")?;
                continue;
            }
            candidate = Some(PathBuf::from(line));
        }
    }

    /// Lists `points` and asks for an index into it.
    pub fn restore_point(&mut self, points: &[SnapshotFolder]) -> io::Result<usize> {
        writeln!(self.out, "Restore Points Found: {}", points.len())?;
        writeln!(self.out, "Select a point to restore from:")?;
        for (i, p) in points.iter().enumerate() {
            writeln!(self.out, "[{i}] {}", p.path.display())?;
        }
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;
            match self.read_line()?.parse::<usize>() {
                Err(_) => self.complain("You must select a number.")?,
                Ok(i) if i >= points.len() => self.complain("Select a valid option.")?,
                Ok(i) => return Ok(i),
            }
        }
    }
}
