//! Weekly planning board views.

use serde::{Deserialize, Serialize};

use crate::domain::planning::DropTarget;
use crate::domain::types::DateKey;
use crate::dto::dossier::DossierCard;

/// Query string of the planning page.
#[derive(Debug, Default, Deserialize)]
pub struct PlanningQuery {
    /// Any day of the week to display, `YYYY-MM-DD`. Defaults to today.
    pub week: Option<String>,
    /// Day currently hovered by a dragged item, as reported by the board.
    pub hover: Option<String>,
    pub garage_id: Option<i32>,
}

/// A day column: the drop target and the cards scheduled on it.
#[derive(Debug, Serialize)]
pub struct PlanningDay {
    pub target: DropTarget,
    pub css_class: &'static str,
    pub cards: Vec<DossierCard>,
}

#[derive(Debug, Serialize)]
pub struct PlanningPageData {
    pub days: Vec<PlanningDay>,
    pub previous_week: DateKey,
    pub next_week: DateKey,
}
