use crate::errors::{AppError, AppResult};
use crate::export::confirm;
use crate::store::audit;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the backing file to `dest_file`, optionally zipped.
    ///
    /// Works on the raw bytes, so a malformed store can be saved before a reset.
    /// Returns the final path, or `None` when the user declined to overwrite.
    pub fn backup(
        store: &Path,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let dest = expand_tilde(dest_file);

        // 1️⃣ Check store exists
        if !store.exists() {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Store not found: {}", store.display()),
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.clone()
        };

        // Copying a file onto itself truncates it before the first byte is read
        if is_same_file(store, &final_target)? {
            return Err(AppError::Other(format!(
                "backup destination '{}' is the store itself",
                final_target.display()
            )));
        }

        // 3️⃣ If destination exists → ask confirmation
        if final_target.exists() && !force {
            warning(format!("The file '{}' already exists.", final_target.display()));
            if !confirm("Do you want to overwrite it? [y/N]: ")? {
                warning("Backup cancelled by user.");
                return Ok(None);
            }
        }

        // 4️⃣ Copy or compress
        let final_path = if compress {
            compress_backup(store, &final_target)?
        } else {
            fs::copy(store, &final_target)?;
            final_target
        };
        success(format!("Backup created: {}", final_path.display()));

        // 5️⃣ Audit log
        audit::ttlog_quiet(
            store,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// True when `dest` resolves to the same file as `store`.
///
/// Both sides are resolved through the filesystem, so `..`, `.` and symlinks
/// in either path do not hide an alias. `dest` need not exist yet.
fn is_same_file(store: &Path, dest: &Path) -> AppResult<bool> {
    let store = fs::canonicalize(store)?;

    let dest = if dest.exists() {
        fs::canonicalize(dest)?
    } else {
        let parent = match dest.parent() {
            Some(p) if !p.as_os_str().is_empty() => fs::canonicalize(p)?,
            _ => std::env::current_dir()?,
        };
        match dest.file_name() {
            Some(name) => parent.join(name),
            None => return Ok(false),
        }
    };

    Ok(store == dest)
}

/// Write `src` as the single entry of a deflated zip at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "store.xlsx".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("📦 Compressed: {}", zip_path.display()));

    Ok(zip_path.to_path_buf())
}
