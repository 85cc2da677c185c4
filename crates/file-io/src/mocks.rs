// STD Dependencies -----------------------------------------------------------
use std::collections::HashMap;
use std::io::{Error as IOError, ErrorKind};
use std::path::{Path, PathBuf};


// Internal Dependencies ------------------------------------------------------
use crate::{FileError, FileReader, FileWriter};


// In-Memory File IO ----------------------------------------------------------
#[derive(Debug, Default)]
pub struct MockFileReader {
    pub base: PathBuf,
    files: HashMap<PathBuf, String>,
    binary_files: HashMap<PathBuf, Vec<u8>>
}

impl MockFileReader {
    pub fn add_file<S: Into<String>>(&mut self, path: S, content: S) {
        self.files.insert(PathBuf::from(path.into()), content.into());
    }

    pub fn add_binary_file<S: Into<String>>(&mut self, path: S, bytes: Vec<u8>) {
        self.binary_files.insert(PathBuf::from(path.into()), bytes);
    }

    pub fn get_binary_file<S: Into<String>>(&mut self, path: S) -> Option<Vec<u8>> {
        self.binary_files.remove(&PathBuf::from(path.into()))
    }

    fn not_found(path: &Path) -> FileError {
        FileError {
            io: IOError::new(ErrorKind::NotFound, "No Mock file provided"),
            path: path.to_path_buf()
        }
    }
}

impl FileReader for MockFileReader {
    fn read_file(&self, path: &Path) -> Result<String, FileError> {
        let path = Self::resolve_path(&self.base, path);
        self.files.get(&path).cloned().ok_or_else(|| Self::not_found(&path))
    }

    fn read_binary_file(&self, path: &Path) -> Result<Vec<u8>, FileError> {
        let path = Self::resolve_path(&self.base, path);
        self.binary_files.get(&path).cloned().ok_or_else(|| Self::not_found(&path))
    }

    fn exists(&self, path: &Path) -> bool {
        let path = Self::resolve_path(&self.base, path);
        self.files.contains_key(&path) || self.binary_files.contains_key(&path)
    }
}

impl FileWriter for MockFileReader {
    fn write_binary_file(&mut self, path: &Path, data: Vec<u8>) -> Result<(), FileError> {
        self.binary_files.insert(Self::resolve_path(&self.base, path), data);
        Ok(())
    }
}
