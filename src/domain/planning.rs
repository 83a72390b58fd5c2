//! Day cells of the weekly planning board.
//!
//! A day cell is a drop target for schedule items. Its presentation depends on
//! two independent inputs: whether the day is today and whether a dragged item
//! currently hovers over it. Both are supplied from outside; the cell never
//! changes state on its own.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::domain::types::{DateKey, TypeConstraintError};

/// Presentation state of a single day cell.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RenderState {
    Idle,
    Hovered,
    Today,
    TodayHovered,
}

impl RenderState {
    pub const fn is_today(self) -> bool {
        matches!(self, RenderState::Today | RenderState::TodayHovered)
    }

    pub const fn is_hovered(self) -> bool {
        matches!(self, RenderState::Hovered | RenderState::TodayHovered)
    }

    /// CSS modifier classes used by the planning template.
    pub const fn css_class(self) -> &'static str {
        match self {
            RenderState::Idle => "day",
            RenderState::Hovered => "day day--hover",
            RenderState::Today => "day day--today",
            RenderState::TodayHovered => "day day--today day--hover",
        }
    }
}

/// Computes the presentation state of the cell for `date`.
pub fn render_state(date: NaiveDate, today: NaiveDate, hovered: bool) -> RenderState {
    match (date == today, hovered) {
        (false, false) => RenderState::Idle,
        (false, true) => RenderState::Hovered,
        (true, false) => RenderState::Today,
        (true, true) => RenderState::TodayHovered,
    }
}

/// One calendar day accepting dropped schedule items.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct DropTarget {
    pub key: DateKey,
    pub state: RenderState,
}

impl DropTarget {
    pub fn new(date: NaiveDate, today: NaiveDate, hovered: bool) -> Self {
        Self {
            key: DateKey::from(date),
            state: render_state(date, today, hovered),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.key.date()
    }

    pub fn is_today(&self) -> bool {
        self.state.is_today()
    }

    pub fn is_hovered(&self) -> bool {
        self.state.is_hovered()
    }
}

/// The Monday-first week containing `anchor`.
///
/// Fails when part of that week lies outside the representable calendar.
pub fn week_of(anchor: NaiveDate) -> Result<[NaiveDate; 7], TypeConstraintError> {
    let out_of_range = || TypeConstraintError::DateOutOfRange(anchor.to_string());
    let monday = anchor
        .checked_sub_days(Days::new(u64::from(anchor.weekday().num_days_from_monday())))
        .ok_or_else(out_of_range)?;

    let mut days = [monday; 7];
    for offset in 1..days.len() {
        days[offset] = days[offset - 1].succ_opt().ok_or_else(out_of_range)?;
    }
    Ok(days)
}
