use crate::{convert_document, error::ConvertError, extract_title};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder replaced with the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Placeholder replaced with the converted page body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        source: ConvertError,
    },
}

/// Read a file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files in the content directory
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "content directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Fills the template placeholders and rewrites root-relative links.
///
/// `href="/` and `src="/` become `href="{base_path}` and `src="{base_path}`,
/// so a site can be served from a sub-path. `base_path` should end with `/`.
pub fn render_template(template: &str, title: &str, content: &str, base_path: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
        .replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

/// Generates one HTML page from a markdown file.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    base_path: &str,
) -> Result<(), IoError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from_path.display(),
        dest_path.display(),
        template_path.display()
    );

    let markdown = read_file(from_path)?;
    let template = read_file(template_path)?;

    let convert_error = |source| IoError::Convert {
        path: from_path.to_path_buf(),
        source,
    };
    let content = convert_document(&markdown).map_err(convert_error)?;
    let title = extract_title(&markdown).map_err(convert_error)?;

    let page = render_template(&template, &title, &content, base_path);
    write_file(dest_path, &page)
}

/// Generates an HTML page for every markdown file below `content_root`.
///
/// The directory layout is mirrored under `dest_root` with `.md` replaced by
/// `.html`. Returns the written pages in order.
pub fn generate_pages_recursive(
    content_root: &Path,
    template_path: &Path,
    dest_root: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, IoError> {
    let mut written = Vec::new();

    for from_path in scan_markdown_files(content_root)? {
        let dest_path = dest_path_for(content_root, &from_path, dest_root)?;
        generate_page(&from_path, template_path, &dest_path, base_path)?;
        written.push(dest_path);
    }

    Ok(written)
}

/// Maps `content_root/a/b.md` to `dest_root/a/b.html`.
fn dest_path_for(
    content_root: &Path,
    from_path: &Path,
    dest_root: &Path,
) -> Result<PathBuf, IoError> {
    let relative = from_path
        .strip_prefix(content_root)
        .ok()
        .and_then(|p| RelativePathBuf::from_path(p).ok())
        .ok_or_else(|| {
            IoError::InvalidContentDir(format!(
                "{} is not inside {}",
                from_path.display(),
                content_root.display()
            ))
        })?;
    Ok(html_path(&relative).to_path(dest_root))
}

fn html_path(relative: &RelativePath) -> RelativePathBuf {
    relative.with_extension("html")
}

/// Deletes the output directory if present and recreates it empty.
pub fn reset_public_dir(public_dir: &Path) -> Result<(), IoError> {
    if public_dir.exists() {
        log::info!("Deleting public directory: {}", public_dir.display());
        fs::remove_dir_all(public_dir).map_err(IoError::Io)?;
    }
    fs::create_dir_all(public_dir).map_err(IoError::Io)
}

/// Copies the static tree into the output directory.
///
/// A missing static directory is logged and skipped. Returns the number of
/// files copied.
pub fn copy_static(static_dir: &Path, public_dir: &Path) -> Result<usize, IoError> {
    if !static_dir.is_dir() {
        log::warn!("Static directory does not exist: {}", static_dir.display());
        return Ok(0);
    }

    let copied = copy_directory_recursive(static_dir, public_dir)?;
    log::info!(
        "Copied {copied} static files from {} to {}",
        static_dir.display(),
        public_dir.display()
    );
    Ok(copied)
}

fn copy_directory_recursive(from: &Path, to: &Path) -> Result<usize, IoError> {
    fs::create_dir_all(to).map_err(IoError::Io)?;
    let mut copied = 0;

    for entry in fs::read_dir(from).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();
        let target = to.join(entry.file_name());

        if path.is_dir() {
            copied += copy_directory_recursive(&path, &target)?;
        } else {
            log::debug!("Copying {} to {}", path.display(), target.display());
            fs::copy(&path, &target).map_err(IoError::Io)?;
            copied += 1;
        }
    }

    Ok(copied)
}
