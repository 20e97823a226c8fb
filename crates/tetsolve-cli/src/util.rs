use std::{
    fs::File,
    io::{self, BufReader, BufWriter, StdoutLock, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;

/// Destination of a command's result.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File(BufWriter<File>, PathBuf),
}

impl Output {
    /// Opens `path`, or stdout when no path is given.
    pub fn from_output_path(path: Option<PathBuf>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None => Ok(Self::Stdout(io::stdout().lock())),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self::File(BufWriter::new(file), path))
    }

    /// Pretty-printed JSON followed by a newline.
    pub fn save_json<T>(value: &T, path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut json = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
        json.push('\n');

        let mut output = Self::from_output_path(path)?;
        output
            .write_all(json.as_bytes())
            .and_then(|()| output.flush())
            .with_context(|| format!("Failed to write JSON to {}", output.label()))
    }

    pub fn label(&self) -> String {
        match self {
            Self::Stdout(_) => "stdout".to_owned(),
            Self::File(_, path) => path.display().to_string(),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(writer) => writer.write(buf),
            Self::File(writer, _) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(writer) => writer.flush(),
            Self::File(writer, _) => writer.flush(),
        }
    }
}

pub fn open_input_file<P>(file_kind: &str, path: P) -> anyhow::Result<BufReader<File>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {file_kind} file: {}", path.display()))?;
    Ok(BufReader::new(file))
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = open_input_file(file_kind, path)?;
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {file_kind} JSON file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tetsolve_engine::SolverConfig;

    use super::*;

    #[test]
    fn test_save_json_round_trips_through_file() {
        let dir = std::env::temp_dir().join(format!("tetsolve-util-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");

        let config = SolverConfig {
            width: 9,
            buffer_size: 2,
        };
        Output::save_json(&config, Some(path.clone())).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("}\n"), "{text:?}");
        let read: SolverConfig = read_json_file("solver config", &path).unwrap();
        assert_eq!(read, config);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_json_file_names_its_kind() {
        let err = read_json_file::<SolverConfig, _>("solver config", "does/not/exist.json")
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to open solver config file"));
    }
}
