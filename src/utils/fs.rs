use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use crate::utils::error::BoxResult;

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let mut file = fs::File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Write a string to a file, replacing its previous contents
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}
