// STD Dependencies -----------------------------------------------------------
use std::env;
use std::fs::{self, File};
use std::io::{Error as IOError, Read, Write};
use std::path::{Path, PathBuf};


// Internal Dependencies ------------------------------------------------------
use crate::{FileError, FileReader, FileWriter};


// Concrete File IO Implementation --------------------------------------------
#[derive(Debug)]
pub struct DiskIO {
    base: PathBuf
}

impl DiskIO {

    pub fn from_current_dir() -> Result<Self, IOError> {
        Ok(Self {
            base: env::current_dir()?
        })
    }

    fn read_file_inner(&self, full_path: &Path) -> Result<String, IOError> {
        let mut file = File::open(full_path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(contents)
    }

    fn read_binary_file_inner(&self, full_path: &Path) -> Result<Vec<u8>, IOError> {
        let mut file = File::open(full_path)?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;
        Ok(contents)
    }

    fn write_binary_file_inner(&self, full_path: &Path, data: &[u8]) -> Result<(), IOError> {
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(full_path)?;
        file.write_all(data)?;
        Ok(())
    }
}

impl FileReader for DiskIO {
    fn read_file(&self, path: &Path) -> Result<String, FileError> {
        let path = Self::resolve_path(&self.base, path);
        self.read_file_inner(&path).map_err(|io| FileError { io, path })
    }

    fn read_binary_file(&self, path: &Path) -> Result<Vec<u8>, FileError> {
        let path = Self::resolve_path(&self.base, path);
        self.read_binary_file_inner(&path).map_err(|io| FileError { io, path })
    }

    fn exists(&self, path: &Path) -> bool {
        Self::resolve_path(&self.base, path).is_file()
    }
}

impl FileWriter for DiskIO {
    fn write_binary_file(&mut self, path: &Path, data: Vec<u8>) -> Result<(), FileError> {
        let path = Self::resolve_path(&self.base, path);
        self.write_binary_file_inner(&path, &data).map_err(|io| FileError { io, path })
    }
}
