use std::sync::Arc;
use chrono::NaiveDate;
use super::*;
use crate::db::MemoryStorage;
use crate::store::DEFAULT_STORAGE_KEY;

fn employee(id: &str, name: &str, gender: Gender, is_active: bool) -> Employee {
    Employee {
        id: id.to_string(),
        full_name: name.to_string(),
        gender,
        date_of_birth: NaiveDate::from_ymd_opt(1988, 6, 15).expect("date"),
        profile_image: None,
        state: "Goa".to_string(),
        is_active,
    }
}

fn seeded(employees: &[Employee]) -> RecordStore {
    let store = RecordStore::new(Arc::new(MemoryStorage::new()), DEFAULT_STORAGE_KEY);
    for emp in employees {
        store.create(emp.clone()).expect("create");
    }
    store
}

fn sample() -> Vec<Employee> {
    vec![
        employee("1", "Anita Sharma", Gender::Female, true),
        employee("2", "Ravi Kumar", Gender::Male, false),
        employee("3", "Sam Rivera", Gender::Other, true),
        employee("4", "Karan Shah", Gender::Male, true),
    ]
}

fn ids(view: &RosterView) -> Vec<&str> {
    view.visible().iter().map(|emp| emp.id.as_str()).collect()
}

#[test]
fn default_filter_shows_everything() {
    let store = seeded(&sample());
    let view = RosterView::load(&store, RosterFilter::default());
    assert_eq!(ids(&view), vec!["1", "2", "3", "4"]);
}

#[test]
fn search_is_case_insensitive_substring_of_name() {
    let store = seeded(&sample());
    let mut view = RosterView::load(&store, RosterFilter::default());

    view.set_search_term("SHA");
    assert_eq!(ids(&view), vec!["1", "4"]);

    view.set_search_term("");
    assert_eq!(view.visible().len(), 4);
}

#[test]
fn status_filter_active_yields_only_active() {
    let store = seeded(&[
        employee("on", "Meera Nair", Gender::Female, true),
        employee("off", "Arjun Das", Gender::Male, false),
    ]);
    let mut view = RosterView::load(&store, RosterFilter::default());

    view.set_status_filter(StatusFilter::Active);
    assert_eq!(ids(&view), vec!["on"]);

    view.set_status_filter(StatusFilter::Inactive);
    assert_eq!(ids(&view), vec!["off"]);
}

#[test]
fn gender_and_search_must_both_match() {
    let store = seeded(&[
        employee("on", "Meera Nair", Gender::Female, true),
        employee("off", "Arjun Das", Gender::Male, false),
    ]);
    let mut view = RosterView::load(&store, RosterFilter::default());

    view.set_gender_filter(GenderFilter::Male);
    view.set_search_term("meera");
    assert!(view.visible().is_empty());
}

#[test]
fn derived_view_equals_independent_conjunction_for_all_combinations() {
    let employees = sample();
    let store = seeded(&employees);
    let genders = [
        GenderFilter::All,
        GenderFilter::Male,
        GenderFilter::Female,
        GenderFilter::Other,
    ];
    let statuses = [StatusFilter::All, StatusFilter::Active, StatusFilter::Inactive];

    for term in ["", "a", "SHA", "zzz"] {
        for gender in genders {
            for status in statuses {
                // Apply the setters in reverse order to show order does not matter.
                let mut view = RosterView::load(&store, RosterFilter::default());
                view.set_status_filter(status);
                view.set_gender_filter(gender);
                view.set_search_term(term);

                let expected: Vec<&Employee> = employees
                    .iter()
                    .filter(|emp| {
                        emp.full_name.to_lowercase().contains(&term.to_lowercase())
                    })
                    .filter(|emp| gender.matches(emp.gender))
                    .filter(|emp| status.matches(emp.is_active))
                    .collect();
                let actual: Vec<&Employee> = view.visible().iter().collect();
                assert_eq!(actual, expected, "{term:?} {gender:?} {status:?}");
            }
        }
    }
}

#[test]
fn mutations_through_view_reload_from_store() {
    let store = seeded(&sample());
    let mut view = RosterView::load(&store, RosterFilter {
        status: StatusFilter::Active,
        ..RosterFilter::default()
    });
    assert_eq!(ids(&view), vec!["1", "3", "4"]);

    assert_eq!(view.toggle_active(&store, "1").expect("toggle"), Some(false));
    assert_eq!(ids(&view), vec!["3", "4"]);

    assert!(view.delete(&store, "3").expect("delete"));
    assert_eq!(ids(&view), vec!["4"]);
    assert_eq!(view.employees(), store.list().as_slice());
}

#[test]
fn reload_picks_up_writes_made_elsewhere() {
    let store = seeded(&sample());
    let mut view = RosterView::load(&store, RosterFilter::default());
    store
        .create(employee("5", "Lata Iyer", Gender::Female, true))
        .expect("create");
    assert_eq!(view.visible().len(), 4);

    view.reload(&store);
    assert_eq!(view.visible().len(), 5);
}

#[test]
fn summary_counts_whole_roster_regardless_of_filter() {
    let store = seeded(&sample());
    let view = RosterView::load(&store, RosterFilter {
        search_term: "ravi".into(),
        ..RosterFilter::default()
    });
    assert_eq!(view.visible().len(), 1);
    assert_eq!(view.summary(), Summary { total: 4, active: 3, inactive: 1 });
}

#[test]
fn filter_deserializes_from_query_values() {
    let filter: RosterFilter =
        serde_json::from_str(r#"{"searchTerm":"ra","gender":"Male","status":"inactive"}"#)
            .expect("filter");
    assert_eq!(filter.gender, GenderFilter::Male);
    assert_eq!(filter.status, StatusFilter::Inactive);

    let filter: RosterFilter = serde_json::from_str(r#"{"gender":"all"}"#).expect("filter");
    assert_eq!(filter, RosterFilter::default());
}

#[test]
fn printed_roster_lists_visible_rows_and_totals() {
    let store = seeded(&sample());
    let view = RosterView::load(&store, RosterFilter {
        gender: GenderFilter::Male,
        ..RosterFilter::default()
    });

    let printed = print::render_roster(&view);
    assert!(printed.starts_with("Employee List\n"));
    assert!(printed.contains("Ravi Kumar"));
    assert!(printed.contains("Karan Shah"));
    assert!(!printed.contains("Anita Sharma"));
    assert!(printed.contains("15 Jun 1988"));
    assert!(printed.contains("Inactive"));
    assert!(printed.contains("Showing 2 of 4 employees (3 active, 1 inactive)"));
}

#[test]
fn printed_roster_notes_empty_view() {
    let store = seeded(&[]);
    let view = RosterView::load(&store, RosterFilter::default());
    let printed = print::render_roster(&view);
    assert!(printed.contains("No employees found"));
    assert!(printed.contains("Showing 0 of 0 employees"));
}
