use crate::error::ExtractError;
use crate::models::ExtractOptions;
use crate::rendering::ImageSource;
use crate::services::ColorExtractor;
use futures_util::stream::{self, StreamExt};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A file the batch could not process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
    pub file: String,
    pub error: String,
}

/// Outcome of a batch run over one directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// File name -> dominant hex color, `None` when nothing countable remained
    pub colors: BTreeMap<String, Option<String>>,
    /// Files that failed to read or decode; absent from `colors`
    pub failures: Vec<BatchFailure>,
    /// Number of matching files found
    pub scanned: usize,
}

impl BatchReport {
    pub fn to_json(&self) -> Result<String, ExtractError> {
        Ok(serde_json::to_string_pretty(&self.colors)?)
    }

    /// Write the file name -> color mapping as pretty JSON.
    pub async fn write_json(&self, path: &Path) -> Result<(), ExtractError> {
        let mut json = self.to_json()?;
        json.push('\n');
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

/// Extracts the dominant color of every matching image in a directory.
pub struct BatchRunner {
    extractor: ColorExtractor,
    options: Arc<ExtractOptions>,
    extensions: Vec<String>,
    jobs: usize,
}

impl BatchRunner {
    pub fn new(extractor: ColorExtractor, options: ExtractOptions) -> Self {
        Self {
            extractor,
            options: Arc::new(options),
            extensions: vec!["png".to_string()],
            jobs: 1,
        }
    }

    /// Extensions to pick up, matched case-insensitively. A leading dot is
    /// ignored.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    /// Maximum concurrent extractions, at least one.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
    }

    /// Regular files directly inside `root` with a matching extension,
    /// sorted by path. Subdirectories are not entered.
    pub fn find_images(&self, root: &Path) -> Result<Vec<PathBuf>, ExtractError> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(root)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(root = %root.display(), error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();
            if is_matching_file(&path, entry.file_type(), |p| self.matches(p)) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Process every matching file in `root`.
    ///
    /// Only a failure to list the directory is an error. Per-file failures
    /// are logged and recorded in the report.
    pub async fn run(&self, root: &Path) -> Result<BatchReport, ExtractError> {
        let files = self.find_images(root)?;
        tracing::info!(
            root = %root.display(),
            files = files.len(),
            jobs = self.jobs,
            "Starting batch extraction"
        );

        let results: Vec<(String, Result<Option<String>, ExtractError>)> =
            stream::iter(files.iter().cloned())
                .map(|path| {
                    let extractor = self.extractor.clone();
                    let options = self.options.clone();
                    async move {
                        let name = file_name(&path);
                        let result = extractor
                            .dominant_async(ImageSource::Path(path), options)
                            .await
                            .map(|color| color.map(|c| c.hex().to_string()));
                        (name, result)
                    }
                })
                .buffer_unordered(self.jobs)
                .collect()
                .await;

        let mut report = BatchReport {
            scanned: files.len(),
            ..Default::default()
        };

        for (name, result) in results {
            match result {
                Ok(color) => {
                    tracing::debug!(file = %name, color = ?color, "Extracted dominant color");
                    report.colors.insert(name, color);
                }
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "Failed to extract colors, skipping");
                    report.failures.push(BatchFailure {
                        file: name,
                        error: e.to_string(),
                    });
                }
            }
        }
        report.failures.sort_by(|a, b| a.file.cmp(&b.file));

        tracing::info!(
            scanned = report.scanned,
            extracted = report.colors.len(),
            failed = report.failures.len(),
            "Batch extraction finished"
        );

        Ok(report)
    }
}

/// `true` for a regular file accepted by `matches`. An entry whose type
/// cannot be read is logged and skipped.
fn is_matching_file(
    path: &Path,
    file_type: std::io::Result<std::fs::FileType>,
    matches: impl Fn(&Path) -> bool,
) -> bool {
    match file_type {
        Ok(file_type) => file_type.is_file() && matches(path),
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "Skipping entry with unreadable file type");
            false
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, rgba: [u8; 4]) {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, 2, 2);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&rgba.repeat(4)).unwrap();
        }
        std::fs::write(dir.join(name), buf).unwrap();
    }

    fn runner() -> BatchRunner {
        BatchRunner::new(
            ColorExtractor::new(),
            ExtractOptions::default().with_scale(1.0),
        )
    }

    #[test]
    fn test_find_images_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        write_png(dir.path(), "b.png", [1, 2, 3, 255]);
        write_png(dir.path(), "a.PNG", [1, 2, 3, 255]);
        std::fs::write(dir.path().join("notes.txt"), "hi").unwrap();
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();

        let files = runner().find_images(dir.path()).unwrap();
        let names: Vec<String> = files.iter().map(|p| file_name(p)).collect();
        assert_eq!(names, vec!["a.PNG", "b.png"]);
    }

    #[test]
    fn test_with_extensions_normalizes() {
        let runner = runner().with_extensions([".SVG", "png"]);
        assert!(runner.matches(Path::new("x.svg")));
        assert!(runner.matches(Path::new("x.Png")));
        assert!(!runner.matches(Path::new("x.jpg")));
        assert!(!runner.matches(Path::new("png")));
    }

    #[test]
    fn test_entry_with_unreadable_type_is_skipped() {
        let runner = runner();
        let failed = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(!is_matching_file(Path::new("x.png"), failed, |p| runner.matches(p)));
    }

    #[test]
    fn test_entry_type_decides_match() {
        let dir = TempDir::new().unwrap();
        write_png(dir.path(), "real.png", [1, 2, 3, 255]);
        std::fs::create_dir(dir.path().join("dir.png")).unwrap();
        let runner = runner();

        let file = dir.path().join("real.png");
        let file_type = std::fs::metadata(&file).map(|m| m.file_type());
        assert!(is_matching_file(&file, file_type, |p| runner.matches(p)));

        let folder = dir.path().join("dir.png");
        let folder_type = std::fs::metadata(&folder).map(|m| m.file_type());
        assert!(!is_matching_file(&folder, folder_type, |p| runner.matches(p)));
    }

    #[test]
    fn test_find_images_missing_root_is_error() {
        let result = runner().find_images(Path::new("/definitely/missing/dir"));
        assert!(matches!(result, Err(ExtractError::Io(_))));
    }

    #[tokio::test]
    async fn test_run_maps_files_to_dominant_colors() {
        let dir = TempDir::new().unwrap();
        write_png(dir.path(), "red.png", [255, 0, 0, 255]);
        write_png(dir.path(), "white.png", [255, 255, 255, 255]);
        std::fs::write(dir.path().join("broken.png"), b"garbage").unwrap();

        let report = runner().with_jobs(2).run(dir.path()).await.unwrap();

        assert_eq!(report.scanned, 3);
        assert_eq!(
            report.colors,
            BTreeMap::from([
                ("red.png".to_string(), Some("#ff0000".to_string())),
                ("white.png".to_string(), None),
            ])
        );
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].file, "broken.png");
    }

    #[tokio::test]
    async fn test_write_json() {
        let dir = TempDir::new().unwrap();
        let report = BatchReport {
            colors: BTreeMap::from([
                ("a.png".to_string(), Some("#123456".to_string())),
                ("b.png".to_string(), None),
            ]),
            failures: Vec::new(),
            scanned: 2,
        };

        let out = dir.path().join("colors.json");
        report.write_json(&out).await.unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(
            written,
            serde_json::json!({"a.png": "#123456", "b.png": null})
        );
    }
}
