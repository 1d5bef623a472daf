use askama::Template;

use crate::models::AttendanceRecord;
use crate::report::ChartBar;
use super::PageContext;

#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate {
    pub ctx: PageContext,
    pub bars: Vec<ChartBar>,
    pub records: Vec<AttendanceRecord>,
}
