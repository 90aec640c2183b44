use std::time::Instant;

use anyhow::{bail, Result};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "tests")]
pub struct Flags {
    /// If specified, only run fixtures with names containing this substring.
    #[structopt(long = "filter")]
    filter: Option<String>,

    /// Where to find the fixture polygons. Defaults to this crate's input directory.
    #[structopt(long = "input-dir")]
    input_dir: Option<String>,
}

impl Flags {
    pub fn input_dir(&self) -> String {
        self.input_dir.clone().unwrap_or_else(default_input_dir)
    }
}

pub fn default_input_dir() -> String {
    format!("{}/input", env!("CARGO_MANIFEST_DIR"))
}

pub struct TestRunner {
    results: Vec<TestResult>,
    flags: Flags,
    started_at: Instant,
}

struct TestResult {
    test_name: String,
    duration_ms: f64,
    error: Option<String>,
}

impl TestRunner {
    pub fn new(flags: Flags) -> TestRunner {
        TestRunner {
            results: Vec::new(),
            flags,
            started_at: Instant::now(),
        }
    }

    pub fn run<F: FnOnce() -> Result<()>>(&mut self, test_name: &str, test: F) {
        if let Some(ref filter) = self.flags.filter {
            if !test_name.contains(filter) {
                return;
            }
        }

        let started = Instant::now();
        let error = test().err().map(|err| format!("{:#}", err));
        let result = TestResult {
            test_name: test_name.to_string(),
            duration_ms: started.elapsed().as_secs_f64() * 1000.0,
            error,
        };
        match result.error {
            Some(ref err) => println!(
                "- {} ({:.2}ms): FAIL\n    {}",
                result.test_name, result.duration_ms, err
            ),
            None => println!("- {} ({:.2}ms): PASS", result.test_name, result.duration_ms),
        }
        self.results.push(result);
    }

    pub fn done(self) -> Result<()> {
        let failed: Vec<&str> = self
            .results
            .iter()
            .filter(|r| r.error.is_some())
            .map(|r| r.test_name.as_str())
            .collect();
        println!(
            "\n{} tests, {} failed, {:.2}s total",
            self.results.len(),
            failed.len(),
            self.started_at.elapsed().as_secs_f64()
        );
        if !failed.is_empty() {
            bail!("Failed: {}", failed.join(", "));
        }
        Ok(())
    }
}
