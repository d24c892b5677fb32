//! Incremental aggregation of paged expense results into date groups.
//!
//! The expense list renders groups: under a date-based sort, all expenses of
//! one calendar day share a group header; under any other sort every expense
//! stands alone. Pages arrive one at a time from the server, so a later page
//! can contribute expenses to a day an earlier page already started — those
//! are merged into the existing group instead of opening a duplicate header.

use crate::api::ApiError;
use crate::list::SearchCriteria;
use crate::models::{Expense, ExpensePage};
use crate::notify::Notifier;
use chrono::NaiveDate;

/// Asynchronous source of expense pages
#[allow(async_fn_in_trait)]
pub trait ExpenseSource {
    async fn fetch_page(&self, criteria: &SearchCriteria) -> Result<ExpensePage, ApiError>;
}

impl<S: ExpenseSource> ExpenseSource for &S {
    async fn fetch_page(&self, criteria: &SearchCriteria) -> Result<ExpensePage, ApiError> {
        (**self).fetch_page(criteria).await
    }
}

/// Expenses sharing one list header.
///
/// Under a date sort the group holds every loaded expense of that day; under
/// any other sort it holds exactly one expense. Within a group, expenses are
/// always name-sorted ascending (case-insensitive), whatever the active sort.
#[derive(Debug, Clone)]
pub struct ExpenseGroup {
    pub date: NaiveDate,
    pub expenses: Vec<Expense>,
}

/// Accumulated result of the loads since the last reset
#[derive(Debug, Clone, Default)]
pub struct AggregationState {
    pub groups: Vec<ExpenseGroup>,
    /// True once the final page of the current search has been loaded
    pub last: bool,
    /// True while a page fetch is in flight
    pub loading: bool,
}

/// Folds successive pages of one search into grouped list state.
///
/// Single logical thread of control: callers must let one load's future
/// resolve before issuing the next, or responses interleave. There is no
/// cancellation; a reset issued while a fetch is in flight can still see the
/// stale page land afterwards.
pub struct PagedGroupAggregator<S, N> {
    source: S,
    notifier: N,
    state: AggregationState,
}

impl<S: ExpenseSource, N: Notifier> PagedGroupAggregator<S, N> {
    pub fn new(source: S, notifier: N) -> Self {
        Self {
            source,
            notifier,
            state: AggregationState::default(),
        }
    }

    pub fn state(&self) -> &AggregationState {
        &self.state
    }

    pub fn groups(&self) -> &[ExpenseGroup] {
        &self.state.groups
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn is_last_page(&self) -> bool {
        self.state.last
    }

    /// Start a fresh search: page cursor back to zero, groups rebuilt from
    /// the first page. Also used for explicit refresh.
    pub async fn reset_and_reload(&mut self, criteria: &mut SearchCriteria) {
        criteria.reset_page();
        self.state.last = false;
        self.load_page(criteria, true).await;
    }

    /// Load the next page into the current groups. No-op once the last page
    /// has been reached.
    pub async fn advance_page(&mut self, criteria: &mut SearchCriteria) {
        if self.state.last {
            log::warn!("advance_page called after the last page; ignoring");
            return;
        }
        criteria.next_page();
        self.load_page(criteria, false).await;
    }

    /// Fetch one page and fold it into the state.
    ///
    /// Resolution of the returned future is the completion signal: after
    /// awaiting, the caller may re-enable its scroll trigger (unless `last`).
    /// On a failed fetch the state is left at its last-known-good value and
    /// the failure goes to the notifier once.
    pub async fn load_page(&mut self, criteria: &SearchCriteria, first_page: bool) {
        self.state.loading = true;
        log::debug!(
            "Loading expense page {} (size {}, sort {})",
            criteria.page,
            criteria.size,
            criteria.sort.as_query()
        );

        let page = match self.source.fetch_page(criteria).await {
            Ok(page) => page,
            Err(e) => {
                self.state.loading = false;
                log::error!("Failed to load expense page {}: {}", criteria.page, e);
                self.notifier
                    .report_error("Could not load expenses", &anyhow::Error::from(e));
                return;
            }
        };

        self.state.last = page.last;
        if first_page || self.state.groups.is_empty() {
            self.state.groups.clear();
        }

        let by_date = criteria.sort.groups_by_date();
        for candidate in partition(page.content, by_date) {
            let existing = if by_date {
                self.state
                    .groups
                    .iter()
                    .position(|g| g.date == candidate.date)
            } else {
                None
            };
            match existing {
                Some(i) => {
                    let group = &mut self.state.groups[i];
                    group.expenses.extend(candidate.expenses);
                    sort_by_name(&mut group.expenses);
                }
                None => self.state.groups.push(candidate),
            }
        }

        self.state.loading = false;
    }
}

/// Partition one page of records into candidate groups, preserving the order
/// the server produced them in. Keyed by date under a date sort, by record
/// identity otherwise (one group per record).
fn partition(records: Vec<Expense>, by_date: bool) -> Vec<ExpenseGroup> {
    let mut groups: Vec<ExpenseGroup> = Vec::new();

    for expense in records {
        let slot = if by_date {
            groups.iter().position(|g| g.date == expense.date)
        } else {
            None
        };
        match slot {
            Some(i) => groups[i].expenses.push(expense),
            None => groups.push(ExpenseGroup {
                date: expense.date,
                expenses: vec![expense],
            }),
        }
    }

    for group in &mut groups {
        sort_by_name(&mut group.expenses);
    }
    groups
}

/// Name order within a group is always ascending, case-insensitive
fn sort_by_name(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}
