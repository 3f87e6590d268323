use chrono::{DateTime, Utc};
use skyglider_di::Build;
use skyglider_shared_contracts::time::TimeService;
use skyglider_utils::trace_instrument;

#[derive(Debug, Clone, Copy, Build)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[trace_instrument(skip(self))]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
