//! Weekly planning board.

use chrono::{Days, NaiveDate};

use crate::domain::dossier::{Dossier, DossierListItem};
use crate::domain::planning::{DropTarget, week_of};
use crate::domain::types::{DateKey, GarageId, TypeConstraintError};
use crate::dto::dossier::DossierCard;
use crate::dto::planning::{PlanningDay, PlanningPageData, PlanningQuery};
use crate::forms::planning::{DropForm, DropPayload};
use crate::repository::errors::RepositoryError;
use crate::repository::{DossierListQuery, DossierReader, DossierWriter};
use crate::services::dossier::list_dossiers;
use crate::services::{ServiceError, ServiceResult};

/// Builds the seven day cells of the requested week with their cards.
pub fn load_week<R>(repo: &R, query: PlanningQuery, today: NaiveDate) -> ServiceResult<PlanningPageData>
where
    R: DossierReader + ?Sized,
{
    let anchor = match query.week.as_deref() {
        Some(raw) => DateKey::parse(raw)?.date(),
        None => today,
    };
    let hovered = query.hover.as_deref().map(DateKey::parse).transpose()?;

    let days = week_of(anchor)?;
    let previous_week = shift_week(days[0], |d| d.checked_sub_days(Days::new(7)))?;
    let next_week = shift_week(days[0], |d| d.checked_add_days(Days::new(7)))?;
    let mut list_query = DossierListQuery::new().scheduled_between(days[0], days[6]);
    if let Some(garage_id) = query.garage_id {
        list_query = list_query.garage(GarageId::new(garage_id)?);
    }

    let items = list_dossiers(repo, &list_query)?;

    let columns = days
        .iter()
        .map(|&date| {
            let target = DropTarget::new(date, today, hovered == Some(DateKey::from(date)));
            PlanningDay {
                css_class: target.state.css_class(),
                cards: cards_on(&items, date),
                target,
            }
        })
        .collect();

    Ok(PlanningPageData {
        days: columns,
        previous_week,
        next_week,
    })
}

fn shift_week(
    monday: NaiveDate,
    shift: impl FnOnce(NaiveDate) -> Option<NaiveDate>,
) -> Result<DateKey, TypeConstraintError> {
    shift(monday)
        .map(DateKey::from)
        .ok_or_else(|| TypeConstraintError::DateOutOfRange(monday.to_string()))
}

fn cards_on(items: &[DossierListItem], date: NaiveDate) -> Vec<DossierCard> {
    items
        .iter()
        .filter(|item| item.scheduled_on == Some(date))
        .filter_map(DossierCard::from_item)
        .collect()
}

/// Moves a dossier to the day it was dropped on.
pub fn drop_dossier<R>(repo: &R, form: DropForm) -> ServiceResult<Dossier>
where
    R: DossierWriter + ?Sized,
{
    let payload = DropPayload::try_from(form).map_err(|err| {
        log::error!("Invalid drop payload: {err}");
        ServiceError::Form(err.to_string())
    })?;

    repo.schedule_dossier(payload.dossier_id, Some(payload.day.date()))
        .map_err(|err| match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            err => {
                log::error!("Failed to schedule dossier {}: {err}", payload.dossier_id);
                ServiceError::from(err)
            }
        })
}
