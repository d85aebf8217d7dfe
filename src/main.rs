// src/main.rs

use resizewalk::{cli, logging, run};

fn main() {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("resizewalk error: {err:?}");
        std::process::exit(1);
    }

    match run(args) {
        Ok(outcome) if outcome.success => {}
        Ok(_) => std::process::exit(1),
        Err(err) => {
            eprintln!("resizewalk error: {err:?}");
            std::process::exit(1);
        }
    }
}
