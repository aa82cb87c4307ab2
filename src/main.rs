//! Command-line entry point for the AI Act risk assessment.
//!
//! Runs the questionnaire interactively on the terminal, or replays the
//! answers file named by `AI_ACT_ASSESSMENT__INPUT__ANSWERS_FILE`.

use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ai_act_assessment::adapters::{
    AnswersFile, ConsoleDriver, ConsoleRenderer, DriverOutcome, SystemClock,
};
use ai_act_assessment::application::AssessmentSession;
use ai_act_assessment::config::{AppConfig, LoggingConfig};
use ai_act_assessment::ports::Clock;

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration: {}", err);
        return ExitCode::FAILURE;
    }

    init_tracing(&config.logging);

    let clock = Arc::new(SystemClock);
    let sink = Arc::new(ConsoleRenderer::stdout(config.output.format, clock.now()));
    let mut session = AssessmentSession::with_notice_ttl(sink, clock, config.notices.ttl_secs);

    match &config.input.answers_file {
        Some(path) => run_answers_file(path, &mut session),
        None => run_interactive(&mut session),
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = logging
        .env_filter()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }
}

fn run_answers_file(path: &Path, session: &mut AssessmentSession) -> ExitCode {
    let answers = match AnswersFile::load(path) {
        Ok(answers) => answers,
        Err(err) => {
            error!(path = %path.display(), error = %err, "Cannot use answers file");
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    session.start();
    match answers.run(session) {
        Ok(Some(_)) => ExitCode::SUCCESS,
        Ok(None) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_interactive(session: &mut AssessmentSession) -> ExitCode {
    let stdin = io::stdin();
    let mut driver = ConsoleDriver::new(stdin.lock(), io::stdout());

    match driver.run(session) {
        Ok(DriverOutcome::Completed(result)) => {
            info!(tier = result.tier.token(), "Assessment finished");
            ExitCode::SUCCESS
        }
        Ok(DriverOutcome::Quit) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Interactive session failed");
            ExitCode::FAILURE
        }
    }
}
