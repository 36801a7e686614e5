//! Request-level operations: record a note, then read it back through the
//! aggregated views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use healthvoice_core::{summarize, Analysis, Config, Extractor};
use healthvoice_store::{HealthLogRecord, LogQuery, LogStore, NewHealthLog};

use crate::clinical::{self, SummaryView};
use crate::error::ServiceError;
use crate::insights::{self, InsightsView};
use crate::overview::{self, OverviewView};
use crate::trends::{self, TrendsView};

/// Outcome of recording a note
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoggedNote {
    pub log_id: String,
    pub summary: String,
    pub analysis: Analysis,
}

pub struct HealthService<S> {
    store: S,
    config: Config,
    extractor: Extractor,
}

impl<S: LogStore> HealthService<S> {
    pub fn new(store: S, config: Config) -> Self {
        let extractor = Extractor::from_config(&config);
        Self {
            store,
            config,
            extractor,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn extract(&self, text: &str) -> Result<Analysis, ServiceError> {
        Ok(self.extractor.analyze(text)?)
    }

    pub fn summarize(&self, analysis: &Analysis) -> String {
        summarize(analysis)
    }

    /// Extract, summarize and persist one note. Nothing is stored when the
    /// text is rejected.
    pub fn record_note(&self, prompt: &str, owner_id: Option<&str>) -> Result<LoggedNote, ServiceError> {
        self.record_note_at(prompt, owner_id, Utc::now())
    }

    pub fn record_note_at(
        &self,
        prompt: &str,
        owner_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<LoggedNote, ServiceError> {
        let analysis = self.extractor.analyze_at(prompt, now)?;
        let summary = summarize(&analysis);
        let log_id = self.store.insert(NewHealthLog {
            prompt: prompt.to_string(),
            analysis: analysis.clone(),
            summary: summary.clone(),
            timestamp: Some(now),
            owner_id: owner_id.map(String::from),
        })?;
        Ok(LoggedNote {
            log_id,
            summary,
            analysis,
        })
    }

    pub fn overview(&self, owner_id: Option<&str>) -> Result<OverviewView, ServiceError> {
        self.overview_at(owner_id, Utc::now())
    }

    pub fn overview_at(&self, owner_id: Option<&str>, now: DateTime<Utc>) -> Result<OverviewView, ServiceError> {
        let today = self.store.query_today(owner_id, now)?;
        let recent = self.window(self.config.consistency_days, owner_id, now)?;
        Ok(overview::build(&today, &recent, now))
    }

    pub fn insights(&self, days: u32, owner_id: Option<&str>) -> Result<InsightsView, ServiceError> {
        self.insights_at(days, owner_id, Utc::now())
    }

    pub fn insights_at(
        &self,
        days: u32,
        owner_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<InsightsView, ServiceError> {
        let records = self.window(days, owner_id, now)?;
        Ok(insights::build(&records, days, now))
    }

    pub fn clinical_summary(&self, days: u32, owner_id: Option<&str>) -> Result<SummaryView, ServiceError> {
        self.clinical_summary_at(days, owner_id, Utc::now())
    }

    pub fn clinical_summary_at(
        &self,
        days: u32,
        owner_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<SummaryView, ServiceError> {
        let records = self.window(days, owner_id, now)?;
        Ok(clinical::build(&records, days, now))
    }

    pub fn trends(&self, days: u32, owner_id: Option<&str>) -> Result<TrendsView, ServiceError> {
        self.trends_at(days, owner_id, Utc::now())
    }

    pub fn trends_at(
        &self,
        days: u32,
        owner_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<TrendsView, ServiceError> {
        let records = self.window(days, owner_id, now)?;
        Ok(trends::build(&records, days, now))
    }

    /// Stored records newest first: the last `days` days when given,
    /// otherwise everything.
    pub fn history(
        &self,
        days: Option<u32>,
        owner_id: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<HealthLogRecord>, ServiceError> {
        let records = match days {
            Some(days) => {
                let mut query = LogQuery::last_days(days, Utc::now()).owner(owner_id);
                query.limit = limit;
                self.store.query(&query)?
            }
            None => self.store.all(owner_id, limit)?,
        };
        Ok(records)
    }

    fn window(
        &self,
        days: u32,
        owner_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<HealthLogRecord>, ServiceError> {
        let query = LogQuery::last_days(days, now)
            .owner(owner_id)
            .limit(self.config.query_limit);
        Ok(self.store.query(&query)?)
    }
}
