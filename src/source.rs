use std::path::{Path, PathBuf};

/// Resolve the question file from a path argument: either the file itself,
/// or a directory containing exactly one `.txt` file.
pub fn resolve_source(path_arg: &str) -> Result<PathBuf, String> {
    let path = Path::new(path_arg).to_path_buf();
    let path = if path.is_relative() {
        std::env::current_dir()
            .map_err(|e| format!("Cannot get cwd: {}", e))?
            .join(path)
    } else {
        path
    };

    if path.is_file() {
        Ok(path)
    } else if path.is_dir() {
        find_question_file(&path)
    } else {
        Err(format!("Path not found: {}", path.display()))
    }
}

fn find_question_file(dir: &Path) -> Result<PathBuf, String> {
    let mut txt_files: Vec<PathBuf> = Vec::new();

    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Cannot read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading entry: {}", e))?;
        let path = entry.path();
        if path.is_file() && path.extension().map_or(false, |e| e == "txt") {
            txt_files.push(path);
        }
    }

    match txt_files.len() {
        0 => Err(format!("No .txt question files found in {}", dir.display())),
        1 => Ok(txt_files.remove(0)),
        _ => {
            txt_files.sort();
            let names: Vec<String> = txt_files
                .iter()
                .map(|p| format!("  - {}", p.file_name().unwrap_or_default().to_string_lossy()))
                .collect();
            Err(format!(
                "Multiple .txt files found. Specify which one:\n{}",
                names.join("\n")
            ))
        }
    }
}
