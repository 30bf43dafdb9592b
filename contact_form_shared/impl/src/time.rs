use chrono::{DateTime, Utc};
use contact_form_shared_contracts::time::TimeService;

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[tracing::instrument(level = "trace", skip(self))]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
