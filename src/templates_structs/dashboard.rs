use askama::Template;

use crate::report::ChartBar;
use super::PageContext;

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub people: usize,
    pub events: usize,
    pub reports_generated: u32,
    /// Attended seats over possible seats, as a whole percentage.
    pub attendance_rate: u32,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub greeting: String,
    pub stats: DashboardStats,
    pub monthly: Vec<ChartBar>,
}
