//! `refract`: time every analyzer strategy.

use std::io::{self, IsTerminal, Write};

use refractc::bench::{exit_code, Bench};
use refractc::config::{BenchConfig, Command, USAGE};

fn main() {
    let config = match BenchConfig::from_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    refractc::init_tracing();

    let bench = Bench::new(&config);
    if config.show_source {
        eprintln!("{}", bench.generated_source());
    }

    let outcomes = bench.run();

    let mut stdout = io::stdout().lock();
    for millis in outcomes.iter().filter_map(|outcome| outcome.millis()) {
        let _ = writeln!(stdout, "{millis}");
    }
    let _ = stdout.flush();

    let code = exit_code(&outcomes);
    if code != 0 {
        let stderr = io::stderr();
        let colors = stderr.is_terminal();
        let _ = bench.report(&outcomes, stderr.lock(), colors);
    }
    std::process::exit(code);
}
