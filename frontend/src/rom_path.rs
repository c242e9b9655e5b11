//! Cartridge image loading: flat `.gb`/`.gbc` files, or the first ROM
//! found inside a `.zip` archive.

use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum RomFileError {
    Io(std::io::Error),
    Zip(zip::result::ZipError),
    /// The archive contained no `.gb`/`.gbc` member.
    NoRomInArchive,
}

impl std::fmt::Display for RomFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Zip(e) => write!(f, "archive error: {e}"),
            Self::NoRomInArchive => write!(f, "no .gb/.gbc file inside the archive"),
        }
    }
}

impl std::error::Error for RomFileError {}

impl From<std::io::Error> for RomFileError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<zip::result::ZipError> for RomFileError {
    fn from(e: zip::result::ZipError) -> Self {
        Self::Zip(e)
    }
}

pub fn load_rom_bytes(path: &Path) -> Result<Vec<u8>, RomFileError> {
    let is_zip = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
    if is_zip {
        load_from_zip(path)
    } else {
        Ok(std::fs::read(path)?)
    }
}

fn load_from_zip(path: &Path) -> Result<Vec<u8>, RomFileError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_ascii_lowercase();
        if name.ends_with(".gb") || name.ends_with(".gbc") {
            let mut data = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut data)?;
            return Ok(data);
        }
    }

    Err(RomFileError::NoRomInArchive)
}
