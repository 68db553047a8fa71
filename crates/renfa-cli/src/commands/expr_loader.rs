use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

/// Where the expression text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprSource {
    Inline(String),
    File(PathBuf),
    Stdin,
    /// Ask on the terminal; reads one line.
    Prompt,
}

impl ExprSource {
    /// Inline text wins over a file; `-` as the file means stdin.
    pub fn new(path: Option<PathBuf>, text: Option<String>) -> Self {
        if let Some(text) = text {
            return ExprSource::Inline(text);
        }
        match path {
            Some(path) if path.as_os_str() == "-" => ExprSource::Stdin,
            Some(path) => ExprSource::File(path),
            None => ExprSource::Prompt,
        }
    }
}

pub fn load_expression(source: &ExprSource) -> Result<String, String> {
    match source {
        ExprSource::Inline(text) => Ok(text.clone()),
        ExprSource::File(path) => load_file(path),
        ExprSource::Stdin => load_stdin(),
        ExprSource::Prompt => prompt(),
    }
}

fn load_file(path: &Path) -> Result<String, String> {
    log::debug!("reading expression from '{}'", path.display());
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}

fn load_stdin() -> Result<String, String> {
    log::debug!("reading expression from stdin");
    io::read_to_string(io::stdin()).map_err(|e| format!("failed to read stdin: {}", e))
}

fn prompt() -> Result<String, String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let mut stderr = io::stderr();
        write!(stderr, "Regular expression: ")
            .and_then(|_| stderr.flush())
            .map_err(|e| format!("failed to write prompt: {}", e))?;
    }

    read_line(stdin.lock())
}

pub(crate) fn read_line(mut reader: impl BufRead) -> Result<String, String> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| format!("failed to read expression: {}", e))?;
    if read == 0 {
        return Err(
            "expression is required: use positional argument, -f/--file, or type it at the prompt"
                .to_string(),
        );
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
