//! Unit tests for saving and loading the workout collection.

use tempfile::TempDir;
use workoutmap::storage::{FileStore, KeyValueStore, MemoryStore, PersistenceGateway};
use workoutmap::workouts::{Coords, Workout, WorkoutDetails};

fn sample_log() -> Vec<Workout> {
    vec![
        Workout::running(Coords::new(39.9208, 32.8541), 5.0, 30.0, 180.0).unwrap(),
        Workout::cycling(Coords::new(39.8869, 32.8567), 20.0, 60.0, 400.0).unwrap(),
        Workout::cycling(Coords::new(39.9011, 32.7602), 8.4, 31.0, -12.0).unwrap(),
        Workout::running(Coords::new(39.9334, 32.8597), 12.2, 71.5, 164.0).unwrap(),
    ]
}

fn assert_same_log(loaded: &[Workout], saved: &[Workout]) {
    assert_eq!(loaded.len(), saved.len());
    for (l, s) in loaded.iter().zip(saved) {
        assert_eq!(l.id(), s.id());
        assert_eq!(l.workout_type(), s.workout_type());
        assert_eq!(l.coords(), s.coords());
        assert_eq!(l.distance(), s.distance());
        assert_eq!(l.duration(), s.duration());
        assert_eq!(l.details(), s.details());
        assert_eq!(l.pace(), s.pace());
        assert_eq!(l.speed(), s.speed());
        assert_eq!(l.description(), s.description());
    }
}

#[test]
fn test_round_trip_in_memory() {
    let log = sample_log();
    let mut gateway = PersistenceGateway::with_default_key(Box::new(MemoryStore::new()));

    gateway.save(&log).unwrap();
    assert_same_log(&gateway.load(), &log);
}

#[test]
fn test_round_trip_through_files() {
    let dir = TempDir::new().unwrap();
    let log = sample_log();

    {
        let mut gateway =
            PersistenceGateway::with_default_key(Box::new(FileStore::new(dir.path())));
        gateway.save(&log).unwrap();
    }

    // A fresh gateway stands in for a restart
    let gateway = PersistenceGateway::with_default_key(Box::new(FileStore::new(dir.path())));
    assert_same_log(&gateway.load(), &log);
}

#[test]
fn test_save_overwrites() {
    let log = sample_log();
    let mut gateway = PersistenceGateway::with_default_key(Box::new(MemoryStore::new()));

    gateway.save(&log).unwrap();
    gateway.save(&log[..1]).unwrap();

    assert_eq!(gateway.load().len(), 1);
}

#[test]
fn test_empty_save_is_empty_array() {
    let mut gateway = PersistenceGateway::with_default_key(Box::new(MemoryStore::new()));
    gateway.save(&sample_log()).unwrap();
    gateway.save(&[]).unwrap();

    assert_eq!(gateway.raw().unwrap().as_deref(), Some("[]"));
    assert!(gateway.load().is_empty());
}

#[test]
fn test_reset_removes_slot() {
    let mut gateway = PersistenceGateway::new(Box::new(MemoryStore::new()), "log");
    gateway.save(&sample_log()).unwrap();

    gateway.reset().unwrap();
    assert_eq!(gateway.raw().unwrap(), None);
    assert!(gateway.load().is_empty());
}

#[test]
fn test_loads_browser_written_records() {
    let mut store = MemoryStore::new();
    store
        .set(
            "workouts",
            r#"[{"date":"2023-06-14T12:02:11.381Z","id":"6762131381","clicks":0,"coords":[39.92,32.85],"distance":3.2,"duration":21,"type":"running","cadence":176,"pace":6.5625,"description":"Running on June 14"},{"date":"2023-06-15T12:40:02.004Z","id":"6811202004","clicks":0,"coords":[39.88,32.9],"distance":31,"duration":84,"type":"cycling","elevationGain":0,"speed":22.142857142857142,"description":"Cycling on June 15"}]"#,
        )
        .unwrap();

    let loaded = PersistenceGateway::with_default_key(Box::new(store)).load();
    assert_eq!(loaded.len(), 2);

    assert_eq!(loaded[0].id(), "6762131381");
    assert_eq!(loaded[0].pace(), Some(21.0 / 3.2));
    assert_eq!(loaded[0].description(), "Running on June 14");

    assert_eq!(
        *loaded[1].details(),
        WorkoutDetails::Cycling {
            elevation_gain: 0.0
        }
    );
    assert_eq!(loaded[1].speed(), Some(31.0 / (84.0 / 60.0)));
}

#[test]
fn test_separate_keys_do_not_collide() {
    let dir = TempDir::new().unwrap();
    let log = sample_log();

    let mut first = PersistenceGateway::new(Box::new(FileStore::new(dir.path())), "alpha");
    first.save(&log).unwrap();

    let second = PersistenceGateway::new(Box::new(FileStore::new(dir.path())), "beta");
    assert!(second.load().is_empty());
    assert_eq!(first.load().len(), log.len());
}

#[test]
fn test_duplicate_ids_keep_first_record() {
    let mut store = MemoryStore::new();
    store
        .set(
            "workouts",
            r#"[
                {"id":"1","date":"2024-04-05T12:00:00Z","coords":[39.92,32.85],"distance":5,"duration":30,"type":"running","cadence":180},
                {"id":"2","date":"2024-04-06T12:00:00Z","coords":[39.92,32.85],"distance":20,"duration":60,"type":"cycling","elevationGain":100},
                {"id":"1","date":"2024-04-07T12:00:00Z","coords":[39.92,32.85],"distance":9,"duration":50,"type":"running","cadence":170}
            ]"#,
        )
        .unwrap();

    let loaded = PersistenceGateway::with_default_key(Box::new(store)).load();

    let ids: Vec<&str> = loaded.iter().map(Workout::id).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(loaded[0].distance(), 5.0);
}
