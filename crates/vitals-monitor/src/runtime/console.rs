use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Opens the console stream: stdout, or a file opened for append.
pub fn open_console(output: Option<&Path>) -> io::Result<Box<dyn Write + Send>> {
    match output {
        None => Ok(Box::new(io::stdout())),
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}
