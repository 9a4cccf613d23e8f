//! Integration tests for restoring the log across restarts.

use tempfile::TempDir;
use workoutmap::geolocation::FixedPosition;
use workoutmap::storage::{FileStore, KeyValueStore, PersistenceGateway};
use workoutmap::workouts::{Coords, WorkoutInput};
use workoutmap::SubmitOutcome;

use super::view_mock::{app_with, assert_views_in_sync};

const HOME: Coords = Coords {
    lat: 51.5007,
    lng: -0.1246,
};

fn file_gateway(dir: &TempDir) -> PersistenceGateway {
    PersistenceGateway::with_default_key(Box::new(FileStore::new(dir.path())))
}

#[test]
fn test_restart_restores_log() {
    let dir = TempDir::new().unwrap();
    let mut created = Vec::new();

    {
        let mut app = app_with(file_gateway(&dir));
        app.init_map(&mut FixedPosition::new(Some(HOME))).unwrap();

        let inputs = [
            WorkoutInput::Running {
                distance: 5.2,
                duration: 28.0,
                cadence: 182.0,
            },
            WorkoutInput::Cycling {
                distance: 42.0,
                duration: 95.0,
                elevation_gain: -30.0,
            },
        ];
        for (i, input) in inputs.iter().enumerate() {
            app.map_clicked(Coords::new(51.5 + i as f64 / 100.0, -0.12));
            match app.submit(input).unwrap() {
                SubmitOutcome::Created(workout) => created.push(workout),
                other => panic!("unexpected outcome {:?}", other),
            }
        }
        app.toggle_sort();
    }

    let mut app = app_with(file_gateway(&dir));
    // List is rendered straight from storage, before any map exists
    assert_eq!(app.view().list().entries.len(), 2);
    assert_eq!(app.view().map().placed_total, 0);

    app.init_map(&mut FixedPosition::new(Some(HOME))).unwrap();
    assert_views_in_sync(&app);
    // Loading with markers fits the map to them
    assert_eq!(app.view().map().fits.len(), 1);

    // Sorted descending before the restart
    let ids: Vec<&str> = app.workouts().iter().map(|w| w.id()).collect();
    assert_eq!(ids, vec![created[1].id(), created[0].id()]);

    for restored in app.workouts() {
        let original = created.iter().find(|w| w.id() == restored.id()).unwrap();
        assert_eq!(restored.coords(), original.coords());
        assert_eq!(restored.details(), original.details());
        assert_eq!(restored.pace(), original.pace());
        assert_eq!(restored.speed(), original.speed());
        assert_eq!(restored.description(), original.description());
    }
}

#[test]
fn test_corrupt_slot_starts_empty() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path());
    store.set("workouts", "{\"truncated\": [").unwrap();

    let mut app = app_with(file_gateway(&dir));
    assert!(app.workouts().is_empty());

    // Next save replaces the corrupt content
    app.map_clicked(HOME);
    app.submit(&WorkoutInput::Running {
        distance: 3.0,
        duration: 20.0,
        cadence: 170.0,
    })
    .unwrap();

    let reloaded = file_gateway(&dir).load();
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn test_bad_records_are_skipped() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path());
    store
        .set(
            "workouts",
            r#"[
                {"id":"a","date":"2024-04-05T12:00:00Z","coords":[51.5,-0.12],"distance":5,"duration":30,"type":"running","cadence":180},
                {"id":"b","date":"2024-04-06T12:00:00Z","coords":[51.5,-0.12],"distance":0,"duration":30,"type":"running","cadence":180},
                {"id":"c","date":"2024-04-07T12:00:00Z","coords":[51.5,-0.12],"distance":10,"duration":40,"type":"swimming"},
                {"id":"d","date":"2024-04-08T12:00:00Z","coords":[51.5,-0.12],"distance":20,"duration":60,"type":"cycling","elevationGain":150}
            ]"#,
        )
        .unwrap();

    let app = app_with(file_gateway(&dir));

    let ids: Vec<&str> = app.workouts().iter().map(|w| w.id()).collect();
    assert_eq!(ids, vec!["a", "d"]);
    assert_eq!(app.workouts()[0].description(), "Running on April 5");
    assert_eq!(app.workouts()[1].speed(), Some(20.0));
}
