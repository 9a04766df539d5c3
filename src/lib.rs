pub mod docx;
mod error;
pub mod model;
mod validate;
pub mod whitepaper;

pub use error::Error;
pub use validate::validate;

use std::io::Write;
use std::path::Path;
use std::time::Instant;

pub const DEFAULT_OUTPUT_PATH: &str = "/home/z/my-project/upload/ZIMBEAT_Whitepaper.docx";

/// Build, validate and serialize the whitepaper. No disk I/O.
pub fn generate_whitepaper() -> Result<Vec<u8>, Error> {
    let t0 = Instant::now();

    let doc = whitepaper::whitepaper();
    let t_build = t0.elapsed();

    let bytes = docx::write(&doc)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: build={:.1}ms, serialize={:.1}ms, total={:.1}ms (output {} bytes)",
        t_build.as_secs_f64() * 1000.0,
        (t_total - t_build).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(bytes)
}

fn io_error_with_path(e: std::io::Error, path: &Path) -> Error {
    Error::Io(std::io::Error::new(
        e.kind(),
        format!("{}: {}", e, path.display()),
    ))
}

/// Write to a uniquely named temporary file next to `path`, sync it and
/// rename it over `path`, so the target is either the complete new file or
/// untouched.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".zimbeat-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| io_error_with_path(e, path))?;
    log::debug!("Writing {} via {}", path.display(), tmp.path().display());

    tmp.write_all(bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| io_error_with_path(e, path))?;

    if let Err(e) = tmp.persist(path) {
        let tmp_path = e.file.path().to_path_buf();
        if let Err(cleanup) = e.file.close() {
            log::warn!(
                "Failed to remove temporary file {}: {cleanup}",
                tmp_path.display()
            );
        }
        return Err(io_error_with_path(e.error, path));
    }
    Ok(())
}

/// Generate the whitepaper and write it to `path`, overwriting any existing file.
pub fn write_whitepaper(path: &Path) -> Result<(), Error> {
    let t0 = Instant::now();

    let bytes = generate_whitepaper()?;
    let t_generate = t0.elapsed();

    write_atomic(path, &bytes)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: generate={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_generate.as_secs_f64() * 1000.0,
        (t_total - t_generate).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(())
}
