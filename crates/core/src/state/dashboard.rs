//! Dashboard view state and its transitions.
//!
//! `DashboardState` owns everything the screen shows: the generated runs
//! and summaries, the selected date, the current page, the sort order and
//! the theme. All mutations go through the named methods below, so a date
//! change replaces runs, summaries and page in one step.

use super::store::PreferenceStore;
use super::theme::{load_theme, save_theme};
use crate::mock::{generate_daily_summary, generate_runs};
use crate::view::{compare_daily, page_count, paginate, sort_runs, ComparisonRow, PageInfo};
use chrono::{Days, NaiveDate};
use df_protocol::{
    DailySourceSummary, DashboardConfig, PipelineRun, SortDirection, SortKey, Theme,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Session state of the dashboard.
///
/// Generic over the random source so tests can inject a seeded generator.
pub struct DashboardState<R: Rng = StdRng> {
    rng: R,
    run_count: usize,
    page_size: usize,
    sla_threshold_ms: u64,
    selected_date: NaiveDate,
    current_page: usize,
    sort_key: Option<SortKey>,
    sort_direction: SortDirection,
    theme: Theme,
    runs: Vec<PipelineRun>,
    summaries: Vec<DailySourceSummary>,
    store: Box<dyn PreferenceStore>,
}

impl DashboardState<StdRng> {
    /// Build the state from configuration.
    ///
    /// Uses the configured seed when present, OS entropy otherwise.
    pub fn from_config(
        config: &DashboardConfig,
        date: NaiveDate,
        store: Box<dyn PreferenceStore>,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, date, store, rng)
    }
}

impl<R: Rng> DashboardState<R> {
    /// Create the state, reading the theme from `store` and generating data
    /// for `date`.
    pub fn new(
        config: &DashboardConfig,
        date: NaiveDate,
        store: Box<dyn PreferenceStore>,
        rng: R,
    ) -> Self {
        let theme = load_theme(store.as_ref());
        let mut state = Self {
            rng,
            run_count: config.run_count,
            page_size: config.page_size,
            sla_threshold_ms: config.sla_threshold_ms(),
            selected_date: date,
            current_page: 1,
            sort_key: None,
            sort_direction: SortDirection::Ascending,
            theme,
            runs: Vec::new(),
            summaries: Vec::new(),
            store,
        };
        state.regenerate();
        state
    }

    fn regenerate(&mut self) {
        self.runs = generate_runs(
            &mut self.rng,
            self.run_count,
            self.selected_date,
            self.sla_threshold_ms,
        );
        self.summaries = generate_daily_summary(&mut self.rng, self.selected_date);
        self.current_page = 1;
        debug!(
            date = %self.selected_date,
            runs = self.runs.len(),
            "regenerated mock data"
        );
    }

    // --- Transitions ---

    /// Select a new date. Regenerates all data and returns to page 1.
    ///
    /// Selecting the date that is already shown is a no-op.
    pub fn set_selected_date(&mut self, date: NaiveDate) {
        if date == self.selected_date {
            return;
        }
        self.selected_date = date;
        self.regenerate();
    }

    /// Select a date given as `YYYY-MM-DD`.
    pub fn set_selected_date_str(&mut self, value: &str) -> Result<(), chrono::ParseError> {
        let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")?;
        self.set_selected_date(date);
        Ok(())
    }

    /// Move the selected date by `days` calendar days.
    pub fn shift_date(&mut self, days: i64) {
        let shifted = if days >= 0 {
            self.selected_date.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.selected_date.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = shifted {
            self.set_selected_date(date);
        }
    }

    /// Column-header behaviour: the active key flips direction, a new key
    /// starts ascending. The current page is kept.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == Some(key) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = Some(key);
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Set key and direction explicitly. `None` restores generation order.
    pub fn set_sort(&mut self, key: Option<SortKey>, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
    }

    /// Go to `page`, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.page_count().max(1));
    }

    pub fn next_page(&mut self) {
        if self.page_info().has_next() {
            self.current_page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page_info().has_previous() {
            self.current_page -= 1;
        }
    }

    pub fn first_page(&mut self) {
        self.set_page(1);
    }

    pub fn last_page(&mut self) {
        self.set_page(self.page_count());
    }

    /// Change the theme and persist it.
    ///
    /// A storage failure is logged; the in-session theme still changes.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = save_theme(self.store.as_mut(), theme) {
            warn!(error = %e, "failed to persist theme");
        }
        info!(theme = %theme, "theme changed");
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    // --- Queries ---

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn runs(&self) -> &[PipelineRun] {
        &self.runs
    }

    pub fn summaries(&self) -> &[DailySourceSummary] {
        &self.summaries
    }

    pub fn page_count(&self) -> usize {
        page_count(self.runs.len(), self.page_size)
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.current_page, self.page_count())
    }

    /// All runs in the current sort order.
    pub fn sorted_runs(&self) -> Vec<&PipelineRun> {
        sort_runs(&self.runs, self.sort_key, self.sort_direction)
    }

    /// Runs on the current page, in the current sort order.
    pub fn page_runs(&self) -> Vec<&PipelineRun> {
        let sorted = self.sorted_runs();
        paginate(&sorted, self.current_page, self.page_size).to_vec()
    }

    pub fn comparison(&self) -> Vec<ComparisonRow> {
        compare_daily(&self.summaries)
    }

    /// Hand back the preference store, e.g. to reopen the session.
    pub fn into_store(self) -> Box<dyn PreferenceStore> {
        self.store
    }
}
