//! Unit tests for workout construction and derived metrics.

use chrono::{Datelike, Utc};
use workoutmap::workouts::{
    Coords, RecordDetails, Workout, WorkoutDetails, WorkoutError, WorkoutInput, WorkoutRecord,
    WorkoutType,
};

fn park() -> Coords {
    Coords::new(39.9208, 32.8541)
}

#[test]
fn test_running_pace_from_inputs() {
    let workout = Workout::running(park(), 5.0, 30.0, 180.0).unwrap();

    assert_eq!(workout.pace(), Some(6.0));
    assert_eq!(workout.distance(), 5.0);
    assert_eq!(workout.duration(), 30.0);
    assert_eq!(workout.coords(), park());
    assert_eq!(workout.clicks(), 0);
    assert_eq!(*workout.details(), WorkoutDetails::Running { cadence: 180.0 });
}

#[test]
fn test_cycling_speed_from_inputs() {
    let workout = Workout::cycling(park(), 20.0, 60.0, 400.0).unwrap();

    assert_eq!(workout.speed(), Some(20.0));
    assert_eq!(workout.workout_type(), WorkoutType::Cycling);
}

#[test]
fn test_invalid_inputs_rejected() {
    let cases = [
        WorkoutInput::Running {
            distance: 5.0,
            duration: 0.0,
            cadence: 180.0,
        },
        WorkoutInput::Running {
            distance: -1.0,
            duration: 30.0,
            cadence: 180.0,
        },
        WorkoutInput::Cycling {
            distance: 20.0,
            duration: 0.0,
            elevation_gain: 100.0,
        },
        WorkoutInput::Cycling {
            distance: -1.0,
            duration: 60.0,
            elevation_gain: 100.0,
        },
        WorkoutInput::Running {
            distance: f64::INFINITY,
            duration: 30.0,
            cadence: 180.0,
        },
        WorkoutInput::Cycling {
            distance: 20.0,
            duration: f64::NAN,
            elevation_gain: 0.0,
        },
    ];

    for input in cases {
        let result = Workout::from_input(park(), &input);
        assert!(
            matches!(result, Err(WorkoutError::Validation(_))),
            "{:?} should be rejected",
            input
        );
    }
}

#[test]
fn test_description_uses_creation_date() {
    let workout = Workout::running(park(), 5.0, 30.0, 180.0).unwrap();
    let date = workout.date();

    let expected = format!("Running on {} {}", date.format("%B"), date.day());
    assert_eq!(workout.description(), expected);
    assert!(date <= Utc::now());
}

#[test]
fn test_ids_are_unique() {
    let a = Workout::running(park(), 5.0, 30.0, 180.0).unwrap();
    let b = Workout::running(park(), 5.0, 30.0, 180.0).unwrap();
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_with_id_keeps_everything_else() {
    let workout = Workout::cycling(park(), 12.0, 45.0, 80.0).unwrap();
    let renamed = workout.clone().with_id("1712311200");

    assert_eq!(renamed.id(), "1712311200");
    assert_eq!(renamed.distance(), workout.distance());
    assert_eq!(renamed.speed(), workout.speed());
}

#[test]
fn test_rehydrate_recomputes_derived_values() {
    let raw = r#"{
        "date": "2024-04-05T12:30:00.000Z",
        "id": "1712305800",
        "clicks": 3,
        "coords": [39.9208, 32.8541],
        "distance": 5,
        "duration": 30,
        "type": "running",
        "cadence": 180,
        "pace": 99.9,
        "description": "Cycling on January 1"
    }"#;
    let record: WorkoutRecord = serde_json::from_str(raw).unwrap();

    let workout = Workout::rehydrate(record).unwrap();
    assert_eq!(workout.id(), "1712305800");
    assert_eq!(workout.pace(), Some(6.0));
    assert_eq!(workout.description(), "Running on April 5");
    assert_eq!(workout.clicks(), 3);
    assert_eq!(workout.coords(), park());
}

#[test]
fn test_rehydrate_rejects_invalid_record() {
    let record = WorkoutRecord {
        id: "bad".to_string(),
        date: Utc::now(),
        coords: [0.0, 0.0],
        distance: 5.0,
        duration: 30.0,
        description: None,
        clicks: 0,
        details: RecordDetails::Running {
            cadence: 0.0,
            pace: None,
        },
    };

    assert!(matches!(
        Workout::rehydrate(record),
        Err(WorkoutError::InvalidRecord(_))
    ));
}

#[test]
fn test_record_carries_derived_metric() {
    let workout = Workout::cycling(park(), 20.0, 60.0, 400.0).unwrap();
    let value = serde_json::to_value(workout.to_record()).unwrap();

    assert_eq!(value["type"], "cycling");
    assert_eq!(value["elevationGain"], 400.0);
    assert_eq!(value["speed"], 20.0);
    assert_eq!(value["coords"][0], 39.9208);
    assert_eq!(value["description"], workout.description());
    assert!(value.get("pace").is_none());
}

#[test]
fn test_prefill_from_workout() {
    let workout = Workout::running(park(), 8.0, 44.0, 172.0).unwrap();
    assert_eq!(
        WorkoutInput::from(&workout),
        WorkoutInput::Running {
            distance: 8.0,
            duration: 44.0,
            cadence: 172.0,
        }
    );
}
