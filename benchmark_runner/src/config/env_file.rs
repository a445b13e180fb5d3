//!
//! The `.env`-style configuration file loader.
//!

use std::path::Path;

///
/// Loads `KEY=VALUE` lines from a `.env`-style file into the process
/// environment. Variables that are already set keep their value, so the
/// shell environment always wins over the file.
///
pub fn load<P>(path: P) -> anyhow::Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|error| anyhow::anyhow!("Environment file {path:?} reading: {error}"))?;

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = line.split_once('=').ok_or_else(|| {
            anyhow::anyhow!("Environment file {path:?} line {}: expected KEY=VALUE", index + 1)
        })?;
        let key = key.trim();
        let value = value.trim().trim_matches('"').trim_matches('\'');

        if std::env::var_os(key).is_none() {
            std::env::set_var(key, value);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn file_values_do_not_override_the_environment() {
        let directory = std::env::temp_dir();
        let path = directory.join("benchmark_runner_env_file_test.env");
        std::fs::write(
            path.as_path(),
            "# comment\n\nENV_FILE_TEST_UNSET=from_file\nENV_FILE_TEST_PRESET=\"from_file\"\n",
        )
        .expect("Test file writing");

        std::env::set_var("ENV_FILE_TEST_PRESET", "from_environment");
        super::load(path.as_path()).expect("Environment file loading");

        assert_eq!(
            std::env::var("ENV_FILE_TEST_UNSET").expect("Always set"),
            "from_file"
        );
        assert_eq!(
            std::env::var("ENV_FILE_TEST_PRESET").expect("Always set"),
            "from_environment"
        );

        std::fs::remove_file(path).expect("Test file removal");
    }

    #[test]
    fn malformed_lines_are_rejected() {
        let directory = std::env::temp_dir();
        let path = directory.join("benchmark_runner_env_file_malformed.env");
        std::fs::write(path.as_path(), "NOT A PAIR\n").expect("Test file writing");

        assert!(super::load(path.as_path()).is_err());

        std::fs::remove_file(path).expect("Test file removal");
    }
}
