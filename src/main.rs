mod cli;
mod config;
mod console;
mod script;

use std::process;
use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use cli::Cli;
use config::BuilderConfig;
use script::{Runner, Script};

fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("unknown log level '{}', using info", level);
        LevelFilter::Info
    });
    if let Err(e) = TermLogger::init(
        filter,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("logger setup failed: {}", e);
    }
}

fn main() {
    let args = Cli::parse();

    let mut cfg = match BuilderConfig::load(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("config error: {}", e);
            process::exit(2);
        }
    };
    cfg.apply_cli_overrides(&args);
    init_logging(&cfg.log.level);

    let script = match Script::load(&args.script) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{}", e);
            process::exit(2);
        }
    };
    let mut runner = match Runner::new(&cfg) {
        Ok(r) => r,
        Err(e) => {
            log::error!("world setup failed: {}", e);
            process::exit(2);
        }
    };
    log::info!(
        "running {} step(s) from {}",
        script.steps.len(),
        args.script.display()
    );

    match runner.run(&script) {
        Ok(report) => {
            log::info!(
                "{} step(s) done, {} particle(s) emitted",
                report.steps,
                report.particles
            );
            for s in &report.sessions {
                log::info!(
                    "  {}: {} undo, {} redo",
                    s.name,
                    s.undo_depth,
                    s.redo_depth
                );
            }
        }
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    }
}
