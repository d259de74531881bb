//! Opening the hero's action links.
//!
//! Mail and web links are handed to the platform opener, so external pages
//! load in the user's browser with no handle back into this process.
//! Downloads copy a file from the site root into the user's download
//! directory.

use std::{
    ffi::OsStr,
    fs::{self, File, OpenOptions},
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::content::{LinkTarget, SiteContent};

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("asset {} is missing from the site root", .0.display())]
    MissingAsset(PathBuf),

    #[error("no download directory is available on this system")]
    NoDownloadDir,

    #[error("no free file name for {} in the download directory", .0.display())]
    NoFreeName(PathBuf),

    #[error("failed to open {uri}: {source}")]
    Open {
        uri: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// What activating a link did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opened {
    Uri(String),
    Downloaded(PathBuf),
}

/// Resolve a download path against the site root and check it exists
pub fn resolve_asset(site_root: &Path, path: &Path) -> Result<PathBuf, LinkError> {
    let resolved = site_root.join(path);
    if resolved.is_file() {
        Ok(resolved)
    } else {
        Err(LinkError::MissingAsset(resolved))
    }
}

/// Numbered copies tried before giving up on a name
const MAX_SUFFIX: u32 = 999;

/// Copy a site asset into `dest_dir` and return where it landed.
///
/// Existing files are never replaced: a taken `resume.pdf` becomes
/// `resume (1).pdf`, then `resume (2).pdf`, and so on.
pub fn download(site_root: &Path, path: &Path, dest_dir: &Path) -> Result<PathBuf, LinkError> {
    let source = resolve_asset(site_root, path)?;
    let file_name = source
        .file_name()
        .ok_or_else(|| LinkError::MissingAsset(source.clone()))?;
    fs::create_dir_all(dest_dir)?;

    let (dest, mut file) = create_unused(dest_dir, file_name)?;
    io::copy(&mut File::open(&source)?, &mut file)?;
    Ok(dest)
}

fn create_unused(dir: &Path, file_name: &OsStr) -> Result<(PathBuf, File), LinkError> {
    let name = Path::new(file_name);
    let stem = name.file_stem().unwrap_or(file_name).to_string_lossy();
    let extension = name.extension().map(OsStr::to_string_lossy);

    for n in 0..=MAX_SUFFIX {
        let candidate = match (n, &extension) {
            (0, _) => dir.join(file_name),
            (n, Some(ext)) => dir.join(format!("{stem} ({n}).{ext}")),
            (n, None) => dir.join(format!("{stem} ({n})")),
        };
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(file) => return Ok((candidate, file)),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(err.into()),
        }
    }
    Err(LinkError::NoFreeName(dir.join(file_name)))
}

/// Follow a link the way the page's anchors do
pub fn activate(target: &LinkTarget, site_root: &Path) -> Result<Opened, LinkError> {
    match target {
        LinkTarget::Download(path) => {
            let dest_dir = dirs::download_dir().ok_or(LinkError::NoDownloadDir)?;
            let dest = download(site_root, path, &dest_dir)?;
            tracing::info!(dest = %dest.display(), "downloaded asset");
            Ok(Opened::Downloaded(dest))
        }
        LinkTarget::Email(_) | LinkTarget::External(_) => {
            let uri = target.uri().unwrap_or_default();
            open::that_detached(&uri).map_err(|source| LinkError::Open {
                uri: uri.clone(),
                source,
            })?;
            tracing::info!(%uri, external = target.is_external(), "opened link");
            Ok(Opened::Uri(uri))
        }
    }
}

/// Check that every download link points at an existing file
pub fn check_assets(content: &SiteContent, site_root: &Path) -> Vec<LinkError> {
    content
        .downloads()
        .filter_map(|link| match &link.target {
            LinkTarget::Download(path) => resolve_asset(site_root, path).err(),
            _ => None,
        })
        .collect()
}
