use std::fs::{self, File};
use std::io::{BufWriter, Write};

use crate::errors::IoError;
use crate::utils::{create_directories_if_needed, file_exists, read_file};

/* This trait allow us to persist manager state as plain text, one record per
line. A manager loads its previous data when the file exists and starts
empty otherwise. Saving is always explicit: nothing is written unless the
caller asks for it. */
pub trait Persistable: Sized {
    const PATH: &'static str;

    fn new(path: Option<String>) -> Result<Self, IoError> {
        let path = path.unwrap_or(Self::PATH.to_string());
        let manager = Self::default_new(path);
        manager.load()?;
        return Ok(manager);
    }

    /* Truncate and rewrite the whole file, in collection order */
    fn save(&self) -> Result<(), IoError> {
        let path = self.get_path();
        create_directories_if_needed(path);
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for line in self.serialize_lines() {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }

    /* Replace the in-memory state with the file content. The state is
    cleared before reading, so a failed read leaves it empty. A missing file
    is not an error, it just means there is nothing to load yet. Lines that
    do not parse are skipped. */
    fn load(&self) -> Result<(), IoError> {
        self.clear();
        if !file_exists(self.get_path()) {
            return Ok(());
        }
        let contents = read_file(self.get_path())?;
        self.load_lines(contents.lines());
        Ok(())
    }

    fn delete(&self) -> Result<(), IoError> {
        let path = self.get_path();
        if file_exists(path) {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /* Get the saved path or return the default */
    fn get_path(&self) -> &str;

    /* default value (new value): an empty collection at the given path */
    fn default_new(path: String) -> Self;

    fn serialize_lines(&self) -> Vec<String>;

    fn load_lines<'a>(&self, lines: impl Iterator<Item = &'a str>);

    fn clear(&self);
}
