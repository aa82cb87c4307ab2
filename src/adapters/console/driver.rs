//! Interactive questionnaire on a line-based terminal.
//!
//! Each step asks its questions one line at a time. Choices accept either
//! the option token or its 1-based number. At any prompt `back`, `restart`
//! and `quit` navigate instead of answering; end of input counts as `quit`.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::application::AssessmentSession;
use crate::domain::classification::RiskResult;
use crate::domain::foundation::ValidationError;
use crate::domain::questionnaire::{
    AiSystemType, AutonomyLevel, InputEvent, Sector, Service, Step,
};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// How an interactive run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverOutcome {
    /// The user left from the result step.
    Completed(RiskResult),
    /// The user left before reaching a result.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nav {
    Back,
    Restart,
    Quit,
}

enum Reply<T> {
    Value(T),
    Blank,
    Nav(Nav),
}

/// A closed option list offered at a prompt.
trait Choice: Copy + FromStr<Err = ValidationError> + 'static {
    const OPTIONS: &'static [Self];
    const FIELD: &'static str;

    fn token(&self) -> &'static str;
    fn label(&self) -> &'static str;

    fn parse_choice(raw: &str) -> Result<Self, ValidationError> {
        match raw.parse::<usize>() {
            Ok(number) => number
                .checked_sub(1)
                .and_then(|idx| Self::OPTIONS.get(idx))
                .copied()
                .ok_or_else(|| ValidationError::invalid_token(Self::FIELD, raw)),
            Err(_) => raw.parse(),
        }
    }
}

macro_rules! impl_choice {
    ($($name:ty),+ $(,)?) => {
        $(
            impl Choice for $name {
                const OPTIONS: &'static [Self] = <$name>::ALL;
                const FIELD: &'static str = <$name>::FIELD;

                fn token(&self) -> &'static str {
                    <$name>::token(self)
                }

                fn label(&self) -> &'static str {
                    <$name>::label(self)
                }
            }
        )+
    };
}

impl_choice!(Sector, Service, AiSystemType, AutonomyLevel);

/// Runs an [`AssessmentSession`] from a reader, writing prompts to a writer.
///
/// Progress, notices and the result go through the session's sink; the
/// driver only writes the questions.
pub struct ConsoleDriver<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> ConsoleDriver<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Returns the prompt writer.
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self, session: &mut AssessmentSession) -> Result<DriverOutcome, DriverError> {
        session.start();
        loop {
            session.tick();
            let step = session.current_step();
            let nav = match step {
                Step::OrganizationProfile => self.organization_profile(session)?,
                Step::ServiceInventory => self.service_inventory(session)?,
                Step::SystemCharacteristics => self.system_characteristics(session)?,
                Step::Result => self.result_menu()?,
            };

            match nav {
                None => {
                    if let Err(err) = session.submit(step) {
                        debug!(step = step.number(), code = %err.code(), "Console submit refused");
                    }
                }
                Some(Nav::Back) => {
                    if let Err(err) = session.back(step) {
                        writeln!(self.out, "{}", err)?;
                    }
                }
                Some(Nav::Restart) => session.restart(),
                Some(Nav::Quit) => {
                    return Ok(match session.result() {
                        Some(result) => DriverOutcome::Completed(*result),
                        None => DriverOutcome::Quit,
                    });
                }
            }
        }
    }

    fn organization_profile(&mut self, session: &mut AssessmentSession) -> Result<Option<Nav>, DriverError> {
        write!(self.out, "Organization size (e.g. micro, sme, large)\n> ")?;
        self.out.flush()?;
        match self.read_reply()? {
            Reply::Nav(nav) => return Ok(Some(nav)),
            Reply::Blank => session.record_input(InputEvent::OrganizationSize(None)),
            Reply::Value(raw) => session.record_input(InputEvent::organization_size(&raw)),
        }

        match self.ask_one::<Sector>("Primary sector")? {
            Reply::Nav(nav) => Ok(Some(nav)),
            Reply::Value(sector) => {
                session.record_input(InputEvent::Sector(sector));
                Ok(None)
            }
            Reply::Blank => Ok(None),
        }
    }

    fn service_inventory(&mut self, session: &mut AssessmentSession) -> Result<Option<Nav>, DriverError> {
        loop {
            self.list_options::<Service>("AI services in use (comma separated, blank for none)")?;
            let raw = match self.read_reply()? {
                Reply::Nav(nav) => return Ok(Some(nav)),
                Reply::Blank => String::new(),
                Reply::Value(raw) => raw,
            };

            let parsed: Result<BTreeSet<Service>, ValidationError> = raw
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(Service::parse_choice)
                .collect();

            match parsed {
                Ok(selected) => {
                    for service in Service::ALL {
                        session.record_input(InputEvent::service(*service, selected.contains(service)));
                    }
                    return Ok(None);
                }
                Err(err) => writeln!(self.out, "{}", err)?,
            }
        }
    }

    fn system_characteristics(&mut self, session: &mut AssessmentSession) -> Result<Option<Nav>, DriverError> {
        match self.ask_one::<AiSystemType>("AI system category")? {
            Reply::Nav(nav) => return Ok(Some(nav)),
            Reply::Value(kind) => session.record_input(InputEvent::AiSystemType(kind)),
            Reply::Blank => {}
        }

        match self.ask_one::<AutonomyLevel>("Decision-making autonomy")? {
            Reply::Nav(nav) => Ok(Some(nav)),
            Reply::Value(level) => {
                session.record_input(InputEvent::AutonomyLevel(level));
                Ok(None)
            }
            Reply::Blank => Ok(None),
        }
    }

    fn result_menu(&mut self) -> Result<Option<Nav>, DriverError> {
        write!(self.out, "Type back, restart or quit\n> ")?;
        self.out.flush()?;
        match self.read_reply()? {
            Reply::Nav(nav) => Ok(Some(nav)),
            Reply::Blank | Reply::Value(_) => Ok(None),
        }
    }

    /// Asks until the answer is a valid option, blank or a navigation word.
    fn ask_one<T: Choice>(&mut self, question: &str) -> Result<Reply<T>, DriverError> {
        loop {
            self.list_options::<T>(question)?;
            match self.read_reply()? {
                Reply::Nav(nav) => return Ok(Reply::Nav(nav)),
                Reply::Blank => return Ok(Reply::Blank),
                Reply::Value(raw) => match T::parse_choice(&raw) {
                    Ok(value) => return Ok(Reply::Value(value)),
                    Err(err) => writeln!(self.out, "{}", err)?,
                },
            }
        }
    }

    fn list_options<T: Choice>(&mut self, question: &str) -> Result<(), DriverError> {
        writeln!(self.out, "{}", question)?;
        for (idx, option) in T::OPTIONS.iter().enumerate() {
            writeln!(self.out, "  {}. {} ({})", idx + 1, option.label(), option.token())?;
        }
        write!(self.out, "> ")?;
        self.out.flush()?;
        Ok(())
    }

    fn read_reply(&mut self) -> Result<Reply<String>, DriverError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Reply::Nav(Nav::Quit));
        }
        let line = line.trim();
        Ok(match line.to_ascii_lowercase().as_str() {
            "" => Reply::Blank,
            "back" => Reply::Nav(Nav::Back),
            "restart" => Reply::Nav(Nav::Restart),
            "quit" | "exit" => Reply::Nav(Nav::Quit),
            _ => Reply::Value(line.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{ManualClock, RecordingSink};
    use crate::domain::classification::RiskTier;
    use crate::domain::foundation::Timestamp;
    use std::io::Cursor;
    use std::sync::Arc;

    fn drive(script: &str) -> (DriverOutcome, AssessmentSession, Arc<RecordingSink>, String) {
        let sink = Arc::new(RecordingSink::new());
        let clock = Arc::new(ManualClock::new(Timestamp::from_unix_secs(1_700_000_000)));
        let mut session = AssessmentSession::new(sink.clone(), clock);
        let mut driver = ConsoleDriver::new(Cursor::new(script.to_string()), Vec::new());

        let outcome = driver.run(&mut session).unwrap();
        let prompts = String::from_utf8(driver.into_output()).unwrap();
        (outcome, session, sink, prompts)
    }

    #[test]
    fn tokens_reach_the_result() {
        let (outcome, session, sink, _) = drive(
            "sme\nfinance\nbiometric, data-analytics\nspecialized\nautomated\nquit\n",
        );

        match outcome {
            DriverOutcome::Completed(result) => assert_eq!(result.tier, RiskTier::High),
            DriverOutcome::Quit => panic!("expected a result"),
        }
        assert_eq!(session.current_step(), Step::Result);
        assert_eq!(sink.results().len(), 1);
    }

    #[test]
    fn option_numbers_are_accepted() {
        // sector 10 = other, ai type 1 = none, autonomy 1 = advisory
        let (outcome, session, _, _) = drive("large\n10\n\n1\n1\n");

        assert!(matches!(outcome, DriverOutcome::Completed(_)));
        assert_eq!(session.answers().sector(), Some(Sector::Other));
        assert_eq!(session.answers().ai_system_type(), Some(AiSystemType::None));
    }

    #[test]
    fn invalid_choice_is_asked_again() {
        let (_, session, _, prompts) = drive("sme\nmining\n99\nretail\nquit\n");

        assert!(prompts.contains("Field 'sector' does not accept 'mining'"));
        assert!(prompts.contains("Field 'sector' does not accept '99'"));
        assert_eq!(session.current_step(), Step::ServiceInventory);
    }

    #[test]
    fn missing_answer_keeps_the_step_and_raises_notice() {
        let (outcome, session, sink, _) = drive("sme\n\nquit\n");

        assert_eq!(outcome, DriverOutcome::Quit);
        assert_eq!(session.current_step(), Step::OrganizationProfile);
        assert_eq!(
            sink.notices(),
            vec![Some("Please select your primary sector.".to_string())]
        );
    }

    #[test]
    fn back_returns_to_previous_step_with_answers_kept() {
        let (_, session, _, _) = drive("sme\nfinance\nback\nquit\n");

        assert_eq!(session.current_step(), Step::OrganizationProfile);
        assert_eq!(session.answers().sector(), Some(Sector::Finance));
    }

    #[test]
    fn back_on_first_step_is_reported() {
        let (_, _, _, prompts) = drive("back\nquit\n");
        assert!(prompts.contains("Already at the first step"));
    }

    #[test]
    fn restart_from_result_clears_answers() {
        let (outcome, session, _, _) = drive("sme\nlegal\n\ngeneral\nadvisory\nrestart\n");

        assert_eq!(outcome, DriverOutcome::Quit);
        assert_eq!(session.current_step(), Step::OrganizationProfile);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn unknown_service_is_asked_again() {
        let (_, session, _, prompts) = drive("sme\nfinance\nteleport\n2\nquit\n");

        assert!(prompts.contains("Field 'services' does not accept 'teleport'"));
        assert_eq!(session.current_step(), Step::SystemCharacteristics);
        assert!(session.answers().services().contains(&Service::AutomatedDecision));
    }
}
