use std::fs::File;
use std::io::prelude::*;
use std::path::PathBuf;
use std::process::Command;

use endzeit_common::TestCase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail {
        expected: Option<String>,
        actual: String,
    },
}

pub struct TestRunner {
    runtime_path: PathBuf,
}

struct TempFileGuard {
    path: PathBuf,
    dir: PathBuf,
}

impl TempFileGuard {
    fn new(path: PathBuf, dir: PathBuf) -> Self {
        Self { path, dir }
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
        let _ = std::fs::remove_dir(&self.dir);
    }
}

impl TestRunner {
    pub fn from_path(path: PathBuf) -> Self {
        TestRunner { runtime_path: path }
    }

    pub fn run(&self, test_case: TestCase) -> TestResult {
        // The story file is named after the test so warnings are stable
        let file_stem = test_case
            .path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let unique = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let temp_dir = std::env::temp_dir().join(format!(
            "endzeit-compat-{}-{}",
            std::process::id(),
            unique
        ));
        let temp_path = temp_dir.join(format!("{}.story", file_stem));

        if let Err(err) = Self::write_story(&temp_dir, &temp_path, &test_case.script) {
            return TestResult::Fail {
                expected: None,
                actual: format!("Error writing story file: {}", err),
            };
        }
        let _temp_guard = TempFileGuard::new(temp_path.clone(), temp_dir);

        // Run the binary with the story file and the input from the test case
        match Command::new(&self.runtime_path)
            .arg("run")
            .arg(&temp_path)
            .arg(test_case.input_commands())
            .output()
        {
            Ok(result) => {
                let output = String::from_utf8_lossy(&result.stdout).to_string();
                let output_trimmed = output.trim_end_matches(['\r', '\n']);
                let expected_trimmed = test_case.result.trim_end_matches(['\r', '\n']);

                if expected_trimmed == output_trimmed {
                    TestResult::Pass
                } else {
                    TestResult::Fail {
                        expected: Some(test_case.result),
                        actual: output,
                    }
                }
            }
            Err(err) => TestResult::Fail {
                expected: None,
                actual: format!("Error running test: {}", err),
            },
        }
    }

    fn write_story(dir: &PathBuf, path: &PathBuf, script: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(dir)?;
        let mut file = File::create(path)?;
        writeln!(file, "{}", script)
    }
}
