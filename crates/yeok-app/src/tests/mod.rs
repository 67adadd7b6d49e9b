use std::io::Cursor;
use std::path::Path;

use tempfile::TempDir;
use yeok_config::Config;
use yeok_core::Session;

use crate::commands::new_session;
use crate::shell::Shell;


/// Config rooted in a fresh temp dir
pub(crate) fn test_config(dictionary: &str) -> (Config, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.dictionary.path = temp_dir.path().join(dictionary);
    config.history.path = temp_dir.path().join("translation_history.txt");
    (config, temp_dir)
}

/// Feed `script` to a shell and collect what it printed
pub(crate) fn run_script(config: &Config, script: &str) -> (String, Session) {
    let mut out = Vec::new();
    let session = Shell::new(
        new_session(config).unwrap(),
        config.clone(),
        Cursor::new(script.as_bytes()),
        &mut out,
    )
    .run()
    .unwrap();
    (String::from_utf8(out).unwrap(), session)
}

pub(crate) fn write_file(path: &Path, contents: &str) {
    std::fs::write(path, contents).unwrap();
}
