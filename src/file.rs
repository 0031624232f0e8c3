// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use image::{ImageFormat, RgbaImage};

use crate::config::consts::{PAGE_FILE_EXT, PAGE_FILE_STEM};
use crate::error::{Error, Result};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::write(dir, "path exists but is not a directory"));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::write(dir, e))?;
    }
    Ok(())
}

/// `<dir>/disruptions_page_<n>.png`, `index` 1-based.
pub fn page_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(join!(PAGE_FILE_STEM, &index.to_string(), ".", PAGE_FILE_EXT))
}

/// Write one page as PNG. The image is consumed and freed on return.
pub fn save_page(img: RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| Error::write(path, e))
}

/// Page images already present in `dir`, sorted by page number.
pub fn list_pages(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pages: Vec<(usize, PathBuf)> = fs::read_dir(dir)
        .map_err(|e| Error::Input(format!("cannot list {}: {e}", dir.display())))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter_map(|p| {
            let name = p.file_name()?.to_str()?;
            let n = name
                .strip_prefix(PAGE_FILE_STEM)?
                .strip_suffix(&join!(".", PAGE_FILE_EXT))?
                .parse()
                .ok()?;
            Some((n, p))
        })
        .collect();
    pages.sort_by_key(|(n, _)| *n);
    Ok(pages.into_iter().map(|(_, p)| p).collect())
}
