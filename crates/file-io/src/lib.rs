// STD Dependencies -----------------------------------------------------------
use std::fmt;
use std::path::{Path, PathBuf};
use std::io::Error as IOError;


// External Dependencies ------------------------------------------------------
use colored::Colorize;


// Modules --------------------------------------------------------------------
mod disk;
pub mod mocks;
pub use self::disk::DiskIO;


// Generic Traits -------------------------------------------------------------
#[derive(Debug)]
pub struct FileError {
    pub io: IOError,
    pub path: PathBuf
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\": {}", self.path.display(), self.io)
    }
}

pub struct Logger {
    silent: bool,
    output: Vec<String>
}

impl Logger {

    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            silent: false,
            output: Vec::new()
        }
    }

    pub fn format_error<S: Into<String>>(s: S) -> String {
        format!("       {} {}", "Error".bright_red(), s.into())
    }

    pub fn set_silent(&mut self) {
        self.silent = true;
    }

    pub fn warning<S: Into<String>>(&mut self, s: S) {
        if !self.silent {
            self.output.push(format!("     {} {}", "Warning".bright_yellow(), s.into()));
        }
    }

    pub fn info<S: Into<String>>(&mut self, s: S) {
        if !self.silent {
            self.output.push(format!("        {} {}", "Info".bright_blue(), s.into()));
        }
    }

    pub fn status<S: Into<String>, U: Into<String>>(&mut self, s: S, m: U) {
        if !self.silent {
            self.output.push(format!("{: >12} {}", s.into().bright_green(), m.into()));
        }
    }

    pub fn flush(&mut self) {
        if !self.output.is_empty() {
            // Binary data may be written to stdout, keep status lines apart
            eprintln!("{}", self);
        }
        self.output.clear();
    }

    pub fn error<S: Into<String>>(&mut self, s: S) {
        self.flush();
        eprintln!("{}", s.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.output
    }
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.output.join("\n"))
    }
}

pub trait FileReader {

    fn read_file(&self, path: &Path) -> Result<String, FileError>;

    fn read_binary_file(&self, path: &Path) -> Result<Vec<u8>, FileError>;

    fn exists(&self, path: &Path) -> bool;

    fn resolve_path(base: &Path, child: &Path) -> PathBuf where Self: Sized {
        if child.is_absolute() {
            child.to_path_buf()

        } else {
            base.join(child)
        }
    }

}

pub trait FileWriter {
    fn write_binary_file(&mut self, path: &Path, data: Vec<u8>) -> Result<(), FileError>;
}
