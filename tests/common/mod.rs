//! Shared test utilities and fixture builders

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a small document file to act as conversion input
pub fn create_input_file(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, b"dummy document body").unwrap();
    path
}

/// Path where a fake converter records the arguments it was called
/// with, one per line. The file only exists once a process was spawned.
pub fn record_path(dir: &TempDir) -> PathBuf {
    dir.path().join("invocation.txt")
}

/// Write an executable shell script standing in for unoconv. It appends
/// every argument to `record`, prints a fixed line on each stream, and
/// exits with `exit_code`.
#[cfg(unix)]
pub fn fake_converter(dir: &TempDir, record: &Path, exit_code: i32) -> PathBuf {
    write_script(
        dir,
        "fake-unoconv",
        &format!(
            "#!/bin/sh\n\
             for arg in \"$@\"; do printf '%s\\n' \"$arg\" >> \"{record}\"; done\n\
             echo 'converter stdout line'\n\
             echo 'converter stderr line' >&2\n\
             exit {code}\n",
            record = record.display(),
            code = exit_code
        ),
    )
}

/// Fake converter that sleeps before exiting cleanly, for timeout tests
#[cfg(unix)]
pub fn slow_converter(dir: &TempDir, seconds: u64) -> PathBuf {
    write_script(
        dir,
        "slow-unoconv",
        &format!("#!/bin/sh\nsleep {}\nexit 0\n", seconds),
    )
}

#[cfg(unix)]
fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

/// Read back the argument vector a fake converter recorded
pub fn recorded_args(record: &Path) -> Vec<String> {
    fs::read_to_string(record)
        .unwrap()
        .lines()
        .map(|line| line.to_string())
        .collect()
}
