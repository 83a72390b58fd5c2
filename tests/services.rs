use chrono::NaiveDate;
use diesel::prelude::*;

use garage_desk::domain::dossier::{DossierStatus, NewDossier};
use garage_desk::domain::planning::RenderState;
use garage_desk::dto::planning::PlanningQuery;
use garage_desk::forms::planning::DropForm;
use garage_desk::repository::{DossierListQuery, DossierWriter};
use garage_desk::schema::dossiers;
use garage_desk::services::ServiceError;
use garage_desk::services::client::list_clients;
use garage_desk::services::dossier::{delete_dossier, list_dossier_cards, list_dossiers};
use garage_desk::services::planning::{drop_dossier, load_week};

mod common;

#[test]
fn test_list_dossiers_is_flat_and_most_recent_first() {
    let test_db = common::TestDb::new("test_list_dossiers_is_flat_and_most_recent_first.db");
    let repo = test_db.repo();
    let fixture = common::seed(&repo, "Garage du Centre", "Alice");

    let t1 = repo
        .create_dossier(
            &NewDossier::new(fixture.vehicle.id, "first visit", DossierStatus::Done, Some(60.0))
                .created_at(common::at(1, 10)),
        )
        .unwrap();
    let t2 = repo
        .create_dossier(
            &NewDossier::new(fixture.vehicle.id, "second visit", DossierStatus::InProgress, None)
                .created_at(common::at(8, 10)),
        )
        .unwrap();

    let items = list_dossiers(&repo, &DossierListQuery::new()).unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, t2.id);
    assert_eq!(items[1].id, t1.id);
    assert_eq!(items[0].status, DossierStatus::InProgress);
    assert_eq!(items[1].estimated_price, Some(60.0));
    for item in &items {
        assert_eq!(item.vehicle.as_ref(), Some(&fixture.vehicle));
        assert_eq!(item.client.as_ref(), Some(&fixture.client));
    }
}

#[test]
fn test_dossier_without_vehicle_lists_with_null_relations() {
    let test_db = common::TestDb::new("test_dossier_without_vehicle_lists_with_null_relations.db");
    let repo = test_db.repo();
    let fixture = common::seed(&repo, "Garage du Centre", "Alice");

    let complete = repo
        .create_dossier(
            &NewDossier::new(fixture.vehicle.id, "complete", DossierStatus::Pending, None)
                .created_at(common::at(2, 9)),
        )
        .unwrap();
    let orphan = repo
        .create_dossier(
            &NewDossier::new(fixture.vehicle.id, "orphan", DossierStatus::Pending, None)
                .created_at(common::at(3, 9)),
        )
        .unwrap();

    let mut conn = test_db.pool().get().unwrap();
    diesel::update(dossiers::table.find(orphan.id.get()))
        .set(dossiers::vehicle_id.eq(None::<i32>))
        .execute(&mut conn)
        .unwrap();

    let items = list_dossiers(&repo, &DossierListQuery::new()).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, orphan.id);
    assert_eq!(items[0].vehicle, None);
    assert_eq!(items[0].client, None);
    assert_eq!(items[1].id, complete.id);

    let page = list_dossier_cards(&repo, &DossierListQuery::new()).unwrap();
    assert_eq!(page.cards.len(), 1);
    assert_eq!(page.cards[0].id, complete.id);
    assert_eq!(page.cards[0].client_name, "Alice");
    assert_eq!(page.incomplete, 1);
}

#[test]
fn test_unknown_status_is_listed_as_pending() {
    let test_db = common::TestDb::new("test_unknown_status_is_listed_as_pending.db");
    let repo = test_db.repo();
    let fixture = common::seed(&repo, "Garage du Centre", "Alice");

    let dossier = repo
        .create_dossier(&NewDossier::new(
            fixture.vehicle.id,
            "imported",
            DossierStatus::Done,
            None,
        ))
        .unwrap();

    let mut conn = test_db.pool().get().unwrap();
    diesel::update(dossiers::table.find(dossier.id.get()))
        .set(dossiers::status.eq("waiting_parts"))
        .execute(&mut conn)
        .unwrap();

    let items = list_dossiers(&repo, &DossierListQuery::new()).unwrap();
    assert_eq!(items[0].status, DossierStatus::Pending);
}

#[test]
fn test_deleted_dossier_is_no_longer_listed() {
    let test_db = common::TestDb::new("test_deleted_dossier_is_no_longer_listed.db");
    let repo = test_db.repo();
    let fixture = common::seed(&repo, "Garage du Centre", "Alice");

    let gone = repo
        .create_dossier(&NewDossier::new(fixture.vehicle.id, "gone", DossierStatus::Done, None))
        .unwrap();
    let kept = repo
        .create_dossier(&NewDossier::new(fixture.vehicle.id, "kept", DossierStatus::Done, None))
        .unwrap();

    assert!(delete_dossier(&repo, gone.id).unwrap());

    let ids: Vec<_> = list_dossiers(&repo, &DossierListQuery::new())
        .unwrap()
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(ids, vec![kept.id]);
}

#[test]
fn test_clients_carry_derived_stats() {
    let test_db = common::TestDb::new("test_clients_carry_derived_stats.db");
    let repo = test_db.repo();
    let fixture = common::seed(&repo, "Garage du Centre", "Alice");

    repo.create_dossier(
        &NewDossier::new(fixture.vehicle.id, "a", DossierStatus::Done, None)
            .created_at(common::at(4, 16)),
    )
    .unwrap();
    repo.create_dossier(
        &NewDossier::new(fixture.vehicle.id, "b", DossierStatus::Done, None)
            .created_at(common::at(9, 11)),
    )
    .unwrap();

    let clients = list_clients(&repo, fixture.garage.id).unwrap();

    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].client.name, "Alice");
    assert_eq!(clients[0].stats.dossier_count, 2);
    assert_eq!(clients[0].stats.last_activity, Some(common::at(9, 11)));
}

#[test]
fn test_dropped_dossier_appears_on_that_day() {
    let test_db = common::TestDb::new("test_dropped_dossier_appears_on_that_day.db");
    let repo = test_db.repo();
    let fixture = common::seed(&repo, "Garage du Centre", "Alice");

    let dossier = repo
        .create_dossier(&NewDossier::new(
            fixture.vehicle.id,
            "suspension",
            DossierStatus::InProgress,
            None,
        ))
        .unwrap();

    drop_dossier(
        &repo,
        DropForm {
            dossier_id: dossier.id.get(),
            date: "2026-03-12".to_string(),
        },
    )
    .unwrap();

    let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    let week = load_week(
        &repo,
        PlanningQuery {
            week: Some("2026-03-12".to_string()),
            hover: None,
            garage_id: Some(fixture.garage.id.get()),
        },
        today,
    )
    .unwrap();

    assert_eq!(week.days[0].target.key.to_string(), "2026-03-09");
    assert_eq!(week.days[1].target.state, RenderState::Today);
    let thursday = &week.days[3];
    assert_eq!(thursday.target.state, RenderState::Idle);
    assert_eq!(thursday.cards.len(), 1);
    assert_eq!(thursday.cards[0].id, dossier.id);
    assert_eq!(thursday.cards[0].vehicle_label, "Renault Clio (AB-123-CD)");
    assert!(week.days.iter().enumerate().all(|(i, d)| i == 3 || d.cards.is_empty()));
}

#[test]
fn test_drop_succeeds_for_dossier_with_unknown_status() {
    let test_db = common::TestDb::new("test_drop_succeeds_for_dossier_with_unknown_status.db");
    let repo = test_db.repo();
    let fixture = common::seed(&repo, "Garage du Centre", "Alice");

    let dossier = repo
        .create_dossier(&NewDossier::new(
            fixture.vehicle.id,
            "imported",
            DossierStatus::Done,
            None,
        ))
        .unwrap();

    let mut conn = test_db.pool().get().unwrap();
    diesel::update(dossiers::table.find(dossier.id.get()))
        .set(dossiers::status.eq("waiting_parts"))
        .execute(&mut conn)
        .unwrap();

    let moved = drop_dossier(
        &repo,
        DropForm {
            dossier_id: dossier.id.get(),
            date: "2026-03-13".to_string(),
        },
    )
    .expect("drop commits and reports success");

    assert_eq!(moved.id, dossier.id);
    assert_eq!(moved.status, DossierStatus::Pending);
    assert_eq!(moved.scheduled_on, NaiveDate::from_ymd_opt(2026, 3, 13));
}

#[test]
fn test_week_at_the_edge_of_the_calendar_is_rejected() {
    let test_db = common::TestDb::new("test_week_at_the_edge_of_the_calendar_is_rejected.db");
    let repo = test_db.repo();

    let result = load_week(
        &repo,
        PlanningQuery {
            week: Some(NaiveDate::MIN.format("%Y-%m-%d").to_string()),
            hover: None,
            garage_id: None,
        },
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
    );

    assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
}
