//! Downloadable plain-text health report

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::clinical::SummaryView;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    #[default]
    Summary,
    Weekly,
    Monthly,
    Quarterly,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Summary => "summary",
            ReportKind::Weekly => "weekly",
            ReportKind::Monthly => "monthly",
            ReportKind::Quarterly => "quarterly",
        }
    }

    /// Period length used when none is given explicitly.
    pub fn default_days(&self) -> u32 {
        match self {
            ReportKind::Weekly => 7,
            ReportKind::Summary | ReportKind::Monthly => 30,
            ReportKind::Quarterly => 90,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "summary" => Ok(ReportKind::Summary),
            "weekly" => Ok(ReportKind::Weekly),
            "monthly" => Ok(ReportKind::Monthly),
            "quarterly" => Ok(ReportKind::Quarterly),
            other => Err(format!(
                "unknown report kind '{}' (expected summary, weekly, monthly or quarterly)",
                other
            )),
        }
    }
}

/// Render the report around a clinical summary.
pub fn render_text(summary: &SummaryView, days: u32, kind: ReportKind, now: DateTime<Utc>) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut sections = Vec::new();

    sections.push(format!(
        "HEALTHVOICE - HEALTH REPORT\n\
         Generated: {}\n\
         Report Period: {} days\n\
         Report Type: {}",
        now.format("%Y-%m-%d %H:%M:%S UTC"),
        days,
        kind.as_str().to_uppercase()
    ));
    sections.push(rule.clone());
    sections.push(summary.summary.clone());
    sections.push(rule.clone());
    sections.push(format!(
        "REPORT STATISTICS\n\
         - Total Health Logs: {}\n\
         - Period: {} days\n\
         - Generated At: {}",
        summary.total_logs,
        summary.period_days,
        summary.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    sections.push(rule);
    sections.push(
        "This report was generated by HealthVoice - Voice-First Health Tracking\n\
         For medical advice, please consult with your healthcare provider."
            .to_string(),
    );

    let mut report = sections.join("\n\n");
    report.push('\n');
    report
}

pub fn file_name(now: DateTime<Utc>) -> String {
    format!("healthvoice_report_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clinical::{self, NO_LOGS_SUMMARY};
    use crate::testutil::record_at;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 9, 5, 30).unwrap()
    }

    #[test]
    fn test_render_empty_summary() {
        let summary = clinical::build(&[], 30, now());
        let report = render_text(&summary, 30, ReportKind::Summary, now());
        let rule = "=".repeat(60);
        let expected = format!(
            "HEALTHVOICE - HEALTH REPORT\n\
             Generated: 2025-06-15 09:05:30 UTC\n\
             Report Period: 30 days\n\
             Report Type: SUMMARY\n\
             \n{rule}\n\
             \n{NO_LOGS_SUMMARY}\n\
             \n{rule}\n\
             \nREPORT STATISTICS\n\
             - Total Health Logs: 0\n\
             - Period: 30 days\n\
             - Generated At: 2025-06-15T09:05:30Z\n\
             \n{rule}\n\
             \nThis report was generated by HealthVoice - Voice-First Health Tracking\n\
             For medical advice, please consult with your healthcare provider.\n"
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_embeds_summary_body() {
        let records = vec![record_at("fever and a cough", now())];
        let summary = clinical::build(&records, 7, now());
        let report = render_text(&summary, 7, ReportKind::Weekly, now());
        assert!(report.contains("Report Type: WEEKLY"));
        assert!(report.contains(&summary.summary));
        assert!(report.contains("- Total Health Logs: 1"));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Monthly".parse::<ReportKind>(), Ok(ReportKind::Monthly));
        assert_eq!("quarterly".parse::<ReportKind>(), Ok(ReportKind::Quarterly));
        assert!("yearly".parse::<ReportKind>().is_err());
        assert_eq!(ReportKind::Weekly.default_days(), 7);
        assert_eq!(ReportKind::default(), ReportKind::Summary);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(now()), "healthvoice_report_20250615_090530.txt");
    }
}
