//! Runs every polygon under `input/` through the triangulator and checks the result.

mod logger;
mod properties;
mod runner;

use anyhow::Result;
use structopt::StructOpt;

fn main() -> Result<()> {
    logger::setup();

    let flags = runner::Flags::from_args();
    let input_dir = flags.input_dir();
    let mut t = runner::TestRunner::new(flags);
    for fixture in fixtures::load_all(&input_dir)? {
        t.run(&fixture.name.clone(), move || fixtures::check(&fixture));
    }
    t.done()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fixtures() {
        let fixtures = fixtures::load_all(&runner::default_input_dir()).unwrap();
        assert!(fixtures.len() >= 10);
        for fixture in fixtures {
            if let Err(err) = fixtures::check(&fixture) {
                panic!("{}: {:#}", fixture.name, err);
            }
        }
    }
}
