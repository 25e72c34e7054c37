use std::io::BufRead;

use lparse_calc::{Calculator, Config, Error};

fn main() {
    if let Err(err) = main_err() {
        eprintln!("error: {err}");
    }
}

fn main_err() -> Result<(), std::io::Error> {
    let left_assoc = std::env::args().any(|arg| arg == "--left");
    let mut config = Config::default();
    if left_assoc {
        config = config.left_assoc();
    }
    let calculator = Calculator::new(config);

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match calculator.evaluate(&line) {
            Ok(value) => println!("{value}"),
            Err(Error::Syntax(err)) => {
                eprintln!("error: {err}");
                eprintln!("  {line}");
                eprintln!("  {:>1$}", "^", err.offset + 1);
            }
            Err(err) => eprintln!("error: {err}"),
        }
    }

    Ok(())
}
