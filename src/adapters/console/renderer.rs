//! Console presentation sink.
//!
//! Renders progress and notices as plain text and the result in the
//! configured format (text, JSON or YAML). With a machine-readable format
//! only the result goes to the main output; notices go to the notice
//! writer (standard error by default) and progress is not shown.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;
use std::sync::Mutex;

use super::countdown::Countdown;
use crate::config::OutputFormat;
use crate::domain::classification::{regulatory_deadline, ContentBundle, RiskResult, RiskTier};
use crate::domain::foundation::Timestamp;
use crate::domain::questionnaire::{ProgressIndicator, ProgressStatus, Step, ValidationNotice};
use crate::ports::{PresentationSink, SinkError};

/// Machine-readable result document.
#[derive(Debug, Serialize)]
pub struct ResultReport {
    pub tier: RiskTier,
    pub tier_label: &'static str,
    pub category: &'static str,
    pub rule: &'static str,
    pub content: &'static ContentBundle,
    pub deadline: NaiveDate,
    pub countdown: Option<String>,
}

impl ResultReport {
    pub fn new(result: &RiskResult, deadline: NaiveDate, now: Timestamp) -> Self {
        Self {
            tier: result.tier,
            tier_label: result.tier.display_name(),
            category: result.category_label(),
            rule: result.rule,
            content: result.content,
            deadline,
            countdown: Countdown::until(deadline, now).map(|c| c.to_string()),
        }
    }
}

/// Writes assessment output to a terminal or any other writer.
pub struct ConsoleRenderer {
    out: Mutex<Box<dyn Write + Send>>,
    notices: Mutex<Box<dyn Write + Send>>,
    format: OutputFormat,
    now: Timestamp,
    deadline: NaiveDate,
}

impl ConsoleRenderer {
    /// Creates a renderer; `now` is the instant the countdown is measured from.
    pub fn new(out: Box<dyn Write + Send>, format: OutputFormat, now: Timestamp) -> Self {
        Self {
            out: Mutex::new(out),
            notices: Mutex::new(Box::new(std::io::stderr())),
            format,
            now,
            deadline: regulatory_deadline(),
        }
    }

    /// Renderer on standard output.
    pub fn stdout(format: OutputFormat, now: Timestamp) -> Self {
        Self::new(Box::new(std::io::stdout()), format, now)
    }

    /// Replaces the writer used for notices in JSON and YAML mode.
    pub fn with_notice_output(mut self, notices: Box<dyn Write + Send>) -> Self {
        self.notices = Mutex::new(notices);
        self
    }

    fn write(&self, text: &str) -> Result<(), SinkError> {
        write_locked(&self.out, text)
    }

    fn render_progress(progress: &ProgressIndicator) -> String {
        let current = progress.current();
        let mut text = format!(
            "Step {} of {}: {}\n",
            current.number(),
            Step::COUNT,
            current.title()
        );
        for (step, status) in progress.step_statuses() {
            let marker = match status {
                ProgressStatus::Completed => "[x]",
                ProgressStatus::Active => "[>]",
                ProgressStatus::Upcoming => "[ ]",
            };
            let _ = write!(text, "{} {} ", marker, step.number());
        }
        text.push('\n');
        text
    }

    fn render_text(report: &ResultReport) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "Risk level: {}", report.tier_label);
        let _ = writeln!(text, "Category:   {}", report.category);
        let _ = writeln!(text);
        let _ = writeln!(text, "What this means legally");
        let _ = writeln!(text, "  {}", report.content.legal_text);
        let _ = writeln!(text);
        let _ = writeln!(text, "Your obligations");
        for (idx, obligation) in report.content.obligations.iter().enumerate() {
            let _ = writeln!(text, "  {}. {}", idx + 1, obligation);
        }
        let _ = writeln!(text);
        let _ = writeln!(text, "Governance exposure");
        let _ = writeln!(text, "  {}", report.content.governance_text);
        let _ = writeln!(text);
        let _ = writeln!(text, "Strategic recommendation");
        let _ = writeln!(text, "  {}", report.content.strategic_text);
        let _ = writeln!(text);
        match &report.countdown {
            Some(countdown) => {
                let _ = writeln!(text, "Deadline {}: {}", report.deadline, countdown);
            }
            None => {
                let _ = writeln!(text, "Deadline {} has passed", report.deadline);
            }
        }
        text
    }
}

impl PresentationSink for ConsoleRenderer {
    fn show_progress(&self, progress: &ProgressIndicator) -> Result<(), SinkError> {
        match self.format {
            OutputFormat::Text => self.write(&Self::render_progress(progress)),
            OutputFormat::Json | OutputFormat::Yaml => Ok(()),
        }
    }

    fn show_notice(&self, notice: Option<&ValidationNotice>) -> Result<(), SinkError> {
        let Some(notice) = notice else {
            return Ok(());
        };
        let line = format!("! {}\n", notice.message);
        match self.format {
            OutputFormat::Text => self.write(&line),
            OutputFormat::Json | OutputFormat::Yaml => write_locked(&self.notices, &line),
        }
    }

    fn show_result(&self, result: &RiskResult) -> Result<(), SinkError> {
        let report = ResultReport::new(result, self.deadline, self.now);
        let rendered = match self.format {
            OutputFormat::Text => Self::render_text(&report),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&report).map_err(SinkError::encode)?;
                json.push('\n');
                json
            }
            OutputFormat::Yaml => serde_yaml::to_string(&report).map_err(SinkError::encode)?,
        };
        self.write(&rendered)
    }

    fn scroll_to_top(&self) -> Result<(), SinkError> {
        match self.format {
            OutputFormat::Text => self.write("\n"),
            OutputFormat::Json | OutputFormat::Yaml => Ok(()),
        }
    }
}

fn write_locked(target: &Mutex<Box<dyn Write + Send>>, text: &str) -> Result<(), SinkError> {
    let mut out = target
        .lock()
        .map_err(|_| SinkError::Unavailable("console output lock poisoned".to_string()))?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::{RiskClassifier, SystemProfile};
    use crate::domain::questionnaire::{AiSystemType, AutonomyLevel, NoticeBoard, Service};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn renderer(format: OutputFormat) -> (ConsoleRenderer, SharedBuffer) {
        let (renderer, out, _) = renderer_with_notices(format);
        (renderer, out)
    }

    fn renderer_with_notices(format: OutputFormat) -> (ConsoleRenderer, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::default();
        let notices = SharedBuffer::default();
        // 2026-01-01T00:00:00Z
        let now = Timestamp::from_unix_secs(1_767_225_600);
        let renderer = ConsoleRenderer::new(Box::new(out.clone()), format, now)
            .with_notice_output(Box::new(notices.clone()));
        (renderer, out, notices)
    }

    fn sector_notice() -> ValidationNotice {
        let mut board = NoticeBoard::default();
        board
            .raise("Please select your primary sector.", Timestamp::now())
            .clone()
    }

    fn high_risk() -> RiskResult {
        RiskClassifier::classify(&SystemProfile::new(
            AiSystemType::Specialized,
            AutonomyLevel::Automated,
            [Service::Biometric],
        ))
    }

    #[test]
    fn text_result_lists_numbered_obligations_and_countdown() {
        let (renderer, buffer) = renderer(OutputFormat::Text);
        renderer.show_result(&high_risk()).unwrap();

        let out = buffer.contents();
        assert!(out.starts_with("Risk level: High Risk\nCategory:   High-Risk AI System\n"));
        assert!(out.contains("  1. Conformity assessment mandatory prior to deployment"));
        assert!(out.contains("  7. Log retention minimum 6 months"));
        assert!(out.contains("Deadline 2026-08-02: 7 months and 3 days remaining"));
    }

    #[test]
    fn json_result_is_machine_readable() {
        let (renderer, buffer) = renderer(OutputFormat::Json);
        renderer.show_result(&high_risk()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(value["tier"], "high");
        assert_eq!(value["category"], "High-Risk AI System");
        assert_eq!(value["content"]["obligations"].as_array().unwrap().len(), 7);
        assert_eq!(value["deadline"], "2026-08-02");
    }

    #[test]
    fn yaml_result_round_trips_as_yaml() {
        let (renderer, buffer) = renderer(OutputFormat::Yaml);
        renderer.show_result(&high_risk()).unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&buffer.contents()).unwrap();
        assert_eq!(value["tier_label"].as_str(), Some("High Risk"));
    }

    #[test]
    fn progress_is_text_only() {
        let (text, text_buffer) = renderer(OutputFormat::Text);
        text.show_progress(&ProgressIndicator::at(Step::ServiceInventory)).unwrap();
        assert_eq!(
            text_buffer.contents(),
            "Step 2 of 4: AI services in use\n[x] 1 [>] 2 [ ] 3 [ ] 4 \n"
        );

        let (json, json_buffer) = renderer(OutputFormat::Json);
        json.show_progress(&ProgressIndicator::at(Step::ServiceInventory)).unwrap();
        json.scroll_to_top().unwrap();
        assert!(json_buffer.contents().is_empty());
    }

    #[test]
    fn text_notices_share_the_main_output() {
        let (renderer, out, notices) = renderer_with_notices(OutputFormat::Text);
        renderer.show_notice(Some(&sector_notice())).unwrap();
        renderer.show_notice(None).unwrap();

        assert_eq!(out.contents(), "! Please select your primary sector.\n");
        assert!(notices.contents().is_empty());
    }

    #[test]
    fn machine_readable_output_keeps_notices_separate() {
        for format in [OutputFormat::Json, OutputFormat::Yaml] {
            let (renderer, out, notices) = renderer_with_notices(format);
            renderer.show_notice(Some(&sector_notice())).unwrap();
            renderer.show_result(&high_risk()).unwrap();

            assert_eq!(notices.contents(), "! Please select your primary sector.\n");
            assert!(!out.contents().contains("! Please select"));
        }

        let (renderer, out, _) = renderer_with_notices(OutputFormat::Json);
        renderer.show_notice(Some(&sector_notice())).unwrap();
        renderer.show_result(&high_risk()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out.contents()).unwrap();
        assert_eq!(value["tier"], "high");
    }
}
