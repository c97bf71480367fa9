//! Directory-tree conversion.

use mathsharp::xmcd::binary;
use mathsharp::{EmitOptions, ParseError, WarningKind};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Worksheet file extension.
pub const EXTENSION: &str = "xmcd";

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Translate(#[from] mathsharp::Error),
    #[error("attachments: {0}")]
    Binary(#[from] ParseError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory below the root receiving the generated tree.
    pub output_subdir: String,
    /// Extension of generated files.
    pub extension: String,
    pub namespace: Option<String>,
    pub binaries: bool,
    pub quiet: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            output_subdir: "Net".to_string(),
            extension: "cs".to_string(),
            namespace: None,
            binaries: true,
            quiet: false,
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct Summary {
    pub translated: usize,
    pub failed: usize,
    pub attachments: usize,
    /// Kinds reported by any successfully translated worksheet.
    pub unimplemented: BTreeSet<String>,
}

/// Every worksheet below `root` in sorted order, skipping `skip`.
pub fn discover(root: &Path, skip: &Path) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    visit(root, skip, &mut found)?;
    Ok(found)
}

fn visit(dir: &Path, skip: &Path, found: &mut Vec<PathBuf>) -> io::Result<()> {
    // Symlinked directories are not followed
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.and_then(|e| Ok((e.path(), e.file_type()?.is_dir()))))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();

    for (path, is_dir) in entries {
        if is_dir {
            if path != skip {
                visit(&path, skip, found)?;
            }
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(EXTENSION))
        {
            found.push(path);
        }
    }
    Ok(())
}

/// Where the outputs for `file` go: its parent directory mirrored below
/// `<root>/<output_subdir>`.
pub fn output_dir(root: &Path, file: &Path, output_subdir: &str) -> PathBuf {
    let relative = file
        .parent()
        .and_then(|parent| parent.strip_prefix(root).ok())
        .unwrap_or(Path::new(""));
    root.join(output_subdir).join(relative)
}

/// Translate every worksheet below `root`.
///
/// A worksheet that fails is reported and skipped; it leaves no output
/// and contributes no diagnostics.
pub fn convert(root: &Path, options: &BatchOptions) -> io::Result<Summary> {
    let out_root = root.join(&options.output_subdir);
    let mut summary = Summary::default();

    for file in discover(root, &out_root)? {
        let dst = output_dir(root, &file, &options.output_subdir);
        match convert_one(&file, &dst, options) {
            Ok(done) => {
                summary.translated += 1;
                summary.attachments += done.attachments;
                summary.unimplemented.extend(done.unimplemented);
            }
            Err(e) => {
                eprintln!("error: {}: {e}", file.display());
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

struct Converted {
    attachments: usize,
    unimplemented: Vec<String>,
}

fn convert_one(file: &Path, dst: &Path, options: &BatchOptions) -> Result<Converted, BatchError> {
    let mut emit_options = EmitOptions::for_document(file);
    if let Some(namespace) = &options.namespace {
        emit_options = emit_options.with_namespace(namespace.clone());
    }

    let input = fs::read_to_string(file)?;
    let parsed = mathsharp::xmcd::parse(&input).map_err(mathsharp::Error::from)?;
    // Decode before writing so a bad attachment leaves nothing behind
    let resources = if options.binaries {
        binary::collect(&parsed.value)?
    } else {
        Vec::new()
    };
    let result =
        mathsharp::translate_document(parsed, &emit_options).map_err(mathsharp::Error::from)?;

    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    fs::create_dir_all(dst)?;
    fs::write(
        dst.join(format!("{stem}.{}", options.extension)),
        &result.value,
    )?;
    let attachments = binary::write(dst, &stem, &resources)?;

    let mut unimplemented = Vec::new();
    for warning in result.warnings {
        match warning.kind {
            WarningKind::UnimplementedNode(kind) => unimplemented.push(kind),
            _ if !options.quiet => eprintln!("warning: {}: {}", file.display(), warning.message),
            _ => {}
        }
    }

    Ok(Converted {
        attachments,
        unimplemented,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK: &str = r#"<worksheet xmlns="http://schemas.mathsoft.com/worksheet30"
        xmlns:ml="http://schemas.mathsoft.com/math30">
      <regions><region><math>
        <ml:define><ml:id>x</ml:id><ml:real>1</ml:real></ml:define>
      </math></region></regions>
      <binaryContent><item item-id="2">aGVsbG8=</item></binaryContent>
    </worksheet>"#;

    const BROKEN: &str = r#"<worksheet xmlns="http://schemas.mathsoft.com/worksheet30"
        xmlns:ml="http://schemas.mathsoft.com/math30">
      <regions><region><math>
        <ml:define><ml:id>x</ml:id><ml:real>1</ml:real><ml:real>2</ml:real></ml:define>
      </math></region></regions>
    </worksheet>"#;

    const BAD_ATTACHMENT: &str = r#"<worksheet xmlns="http://schemas.mathsoft.com/worksheet30"
        xmlns:ml="http://schemas.mathsoft.com/math30">
      <regions><region><math>
        <ml:define><ml:id>x</ml:id><ml:real>1</ml:real></ml:define>
      </math></region></regions>
      <binaryContent><item item-id="2">!!bad!!</item></binaryContent>
    </worksheet>"#;

    fn quiet() -> BatchOptions {
        BatchOptions {
            quiet: true,
            ..BatchOptions::default()
        }
    }

    #[test]
    fn test_discover_sorted_and_skips_output() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("b/deep")).unwrap();
        fs::create_dir_all(root.join("Net/old")).unwrap();
        fs::write(root.join("b/deep/z.xmcd"), OK).unwrap();
        fs::write(root.join("a.XMCD"), OK).unwrap();
        fs::write(root.join("b/notes.txt"), "").unwrap();
        fs::write(root.join("Net/old/stale.xmcd"), OK).unwrap();

        let found = discover(root, &root.join("Net")).unwrap();
        let relative: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            relative,
            [PathBuf::from("a.XMCD"), PathBuf::from("b/deep/z.xmcd")]
        );
    }

    #[test]
    fn test_output_dir_mirrors_tree() {
        let root = Path::new("/work");
        assert_eq!(
            output_dir(root, Path::new("/work/beams/steel/i.xmcd"), "Net"),
            PathBuf::from("/work/Net/beams/steel")
        );
        assert_eq!(
            output_dir(root, Path::new("/work/top.xmcd"), "Out"),
            PathBuf::from("/work/Out")
        );
    }

    #[test]
    fn test_convert_tree() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("frames")).unwrap();
        fs::write(root.join("frames/portal.xmcd"), OK).unwrap();
        fs::write(root.join("frames/broken.xmcd"), BROKEN).unwrap();

        let summary = convert(root, &quiet()).unwrap();
        assert_eq!(summary.translated, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.attachments, 1);
        assert_eq!(
            summary.unimplemented.iter().collect::<Vec<_>>(),
            ["id", "real"]
        );

        let cs = fs::read_to_string(root.join("Net/frames/portal.cs")).unwrap();
        assert!(cs.contains("public class portal"));
        assert!(cs.contains("public double x = 1;"));
        assert!(root.join("Net/frames/bin/portal/item2.png").exists());
        assert!(!root.join("Net/frames/broken.cs").exists());
    }

    #[test]
    fn test_bad_attachment_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("gusset.xmcd"), BAD_ATTACHMENT).unwrap();

        let summary = convert(root, &quiet()).unwrap();
        assert_eq!(summary.translated, 0);
        assert_eq!(summary.failed, 1);
        assert!(summary.unimplemented.is_empty());
        assert!(!root.join("Net/gusset.cs").exists());
        assert!(!root.join("Net/bin").exists());
    }

    #[test]
    fn test_bad_attachment_ignored_without_binaries() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("gusset.xmcd"), BAD_ATTACHMENT).unwrap();

        let options = BatchOptions {
            binaries: false,
            ..quiet()
        };
        let summary = convert(root, &options).unwrap();
        assert_eq!(summary.translated, 1);
        assert!(root.join("Net/gusset.cs").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_does_not_follow_symlinked_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("sheets")).unwrap();
        fs::write(root.join("sheets/a.xmcd"), OK).unwrap();
        std::os::unix::fs::symlink(root, root.join("sheets/loop")).unwrap();

        let found = discover(root, &root.join("Net")).unwrap();
        assert_eq!(found, [root.join("sheets/a.xmcd")]);
    }

    #[test]
    fn test_convert_options() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("sheet.xmcd"), OK).unwrap();

        let options = BatchOptions {
            output_subdir: "Gen".into(),
            extension: "g.cs".into(),
            namespace: Some("Calc".into()),
            binaries: false,
            quiet: true,
        };
        let summary = convert(root, &options).unwrap();
        assert_eq!(summary.translated, 1);
        assert_eq!(summary.attachments, 0);

        let cs = fs::read_to_string(root.join("Gen/sheet.g.cs")).unwrap();
        assert!(cs.contains("namespace Calc"));
        assert!(!root.join("Gen/bin").exists());

        // A second run must not pick up its own output tree
        let again = convert(root, &options).unwrap();
        assert_eq!(again.translated, 1);
    }
}
