//! CLI session
//!
//! One session per process: a data source loaded at open, a handler and the
//! session counters. SESSION_START and SESSION_END bracket the requests.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::api::{ApiHandler, HandlerSettings};
use crate::dataset::DataSource;
use crate::observability::{log_event_with_fields, Event, MetricsSnapshot};

use super::errors::CliResult;

pub struct Session<S: DataSource> {
    id: Uuid,
    started_at: DateTime<Utc>,
    command: &'static str,
    handler: ApiHandler<S>,
}

impl<S: DataSource> Session<S> {
    /// Loads the table eagerly so a missing dataset fails before any request
    pub fn open(source: S, settings: HandlerSettings, command: &'static str) -> CliResult<Self> {
        let rows = source.table()?.len().to_string();

        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            command,
            handler: ApiHandler::new(source, settings),
        };

        let id = session.id.to_string();
        let started = session.started_at.to_rfc3339();
        log_event_with_fields(
            Event::SessionStart,
            &[
                ("command", command),
                ("rows", rows.as_str()),
                ("session_id", id.as_str()),
                ("started_at", started.as_str()),
            ],
        );

        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn handler(&self) -> &ApiHandler<S> {
        &self.handler
    }

    /// Logs SESSION_END with the final counters
    pub fn close(self) -> MetricsSnapshot {
        let snapshot = self.handler.metrics().snapshot();
        let id = self.id.to_string();
        let duration_ms = (Utc::now() - self.started_at).num_milliseconds().to_string();

        let counters = snapshot.fields();
        let mut fields: Vec<(&str, &str)> = vec![
            ("command", self.command),
            ("duration_ms", duration_ms.as_str()),
            ("session_id", id.as_str()),
        ];
        fields.extend(counters.iter().map(|(k, v)| (*k, v.as_str())));

        log_event_with_fields(Event::SessionEnd, &fields);
        snapshot
    }
}
