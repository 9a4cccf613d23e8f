//! Workout types and enums.
//!
//! A workout is a common record of shared fields plus a variant payload
//! (`WorkoutDetails`) that carries the running or cycling specific input.
//! Derived metrics are computed from the inputs on demand.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Message shown to the user when a submitted form does not validate.
pub const VALIDATION_MESSAGE: &str = "Inputs have to be positive numbers!";

/// A map location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coords {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<Coords> for [f64; 2] {
    fn from(coords: Coords) -> Self {
        [coords.lat, coords.lng]
    }
}

impl std::fmt::Display for Coords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Kind of workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Running,
    Cycling,
}

impl WorkoutType {
    /// Capitalized name used in descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }

    /// Icon shown next to the workout in the list and on its marker.
    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃‍♂️",
            WorkoutType::Cycling => "🚴‍♀️",
        }
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutType::Running => write!(f, "running"),
            WorkoutType::Cycling => write!(f, "cycling"),
        }
    }
}

impl std::str::FromStr for WorkoutType {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "running" => Ok(WorkoutType::Running),
            "cycling" => Ok(WorkoutType::Cycling),
            other => Err(WorkoutError::UnknownType(other.to_string())),
        }
    }
}

/// Variant-specific workout input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDetails {
    /// Steps per minute
    Running { cadence: f64 },
    /// Meters climbed, may be zero or negative
    Cycling { elevation_gain: f64 },
}

impl WorkoutDetails {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            WorkoutDetails::Running { .. } => WorkoutType::Running,
            WorkoutDetails::Cycling { .. } => WorkoutType::Cycling,
        }
    }
}

/// Values submitted through the workout form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutInput {
    Running {
        distance: f64,
        duration: f64,
        cadence: f64,
    },
    Cycling {
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    },
}

impl WorkoutInput {
    /// Build an input from raw form text.
    ///
    /// Numbers are coerced the way a browser number field does it: empty text
    /// becomes 0 and anything unparsable becomes NaN. Both are then rejected by
    /// workout validation rather than here.
    pub fn from_form(
        workout_type: &str,
        distance: &str,
        duration: &str,
        extra: &str,
    ) -> Result<Self, WorkoutError> {
        let workout_type: WorkoutType = workout_type.parse()?;
        let distance = coerce_number(distance);
        let duration = coerce_number(duration);
        let extra = coerce_number(extra);

        Ok(match workout_type {
            WorkoutType::Running => WorkoutInput::Running {
                distance,
                duration,
                cadence: extra,
            },
            WorkoutType::Cycling => WorkoutInput::Cycling {
                distance,
                duration,
                elevation_gain: extra,
            },
        })
    }

    pub fn workout_type(&self) -> WorkoutType {
        match self {
            WorkoutInput::Running { .. } => WorkoutType::Running,
            WorkoutInput::Cycling { .. } => WorkoutType::Cycling,
        }
    }

    pub fn distance(&self) -> f64 {
        match self {
            WorkoutInput::Running { distance, .. } | WorkoutInput::Cycling { distance, .. } => {
                *distance
            }
        }
    }

    pub fn duration(&self) -> f64 {
        match self {
            WorkoutInput::Running { duration, .. } | WorkoutInput::Cycling { duration, .. } => {
                *duration
            }
        }
    }
}

impl From<&Workout> for WorkoutInput {
    fn from(workout: &Workout) -> Self {
        match workout.details {
            WorkoutDetails::Running { cadence } => WorkoutInput::Running {
                distance: workout.distance,
                duration: workout.duration,
                cadence,
            },
            WorkoutDetails::Cycling { elevation_gain } => WorkoutInput::Cycling {
                distance: workout.distance,
                duration: workout.duration,
                elevation_gain,
            },
        }
    }
}

fn coerce_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// A logged workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: String,
    date: DateTime<Utc>,
    coords: Coords,
    distance: f64,
    duration: f64,
    description: String,
    clicks: u32,
    details: WorkoutDetails,
}

impl Workout {
    /// Create a running workout.
    pub fn running(
        coords: Coords,
        distance: f64,
        duration: f64,
        cadence: f64,
    ) -> Result<Self, WorkoutError> {
        validate(&[distance, duration, cadence], &[distance, duration, cadence])?;
        Ok(Self::build(
            Uuid::new_v4().to_string(),
            Utc::now(),
            coords,
            distance,
            duration,
            0,
            WorkoutDetails::Running { cadence },
        ))
    }

    /// Create a cycling workout.
    pub fn cycling(
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Result<Self, WorkoutError> {
        validate(&[distance, duration, elevation_gain], &[distance, duration])?;
        Ok(Self::build(
            Uuid::new_v4().to_string(),
            Utc::now(),
            coords,
            distance,
            duration,
            0,
            WorkoutDetails::Cycling { elevation_gain },
        ))
    }

    /// Create a workout of whichever variant the input describes.
    pub fn from_input(coords: Coords, input: &WorkoutInput) -> Result<Self, WorkoutError> {
        match *input {
            WorkoutInput::Running {
                distance,
                duration,
                cadence,
            } => Self::running(coords, distance, duration, cadence),
            WorkoutInput::Cycling {
                distance,
                duration,
                elevation_gain,
            } => Self::cycling(coords, distance, duration, elevation_gain),
        }
    }

    /// Rebuild a workout from a stored record.
    ///
    /// Derived values in the record are ignored and recomputed.
    pub fn rehydrate(record: WorkoutRecord) -> Result<Self, WorkoutError> {
        let details = match record.details {
            RecordDetails::Running { cadence, .. } => {
                validate(
                    &[record.distance, record.duration, cadence],
                    &[record.distance, record.duration, cadence],
                )
                .map_err(|e| WorkoutError::InvalidRecord(format!("{}: {}", record.id, e)))?;
                WorkoutDetails::Running { cadence }
            }
            RecordDetails::Cycling { elevation_gain, .. } => {
                validate(
                    &[record.distance, record.duration, elevation_gain],
                    &[record.distance, record.duration],
                )
                .map_err(|e| WorkoutError::InvalidRecord(format!("{}: {}", record.id, e)))?;
                WorkoutDetails::Cycling { elevation_gain }
            }
        };

        if record.id.is_empty() {
            return Err(WorkoutError::InvalidRecord("missing id".to_string()));
        }

        Ok(Self::build(
            record.id,
            record.date,
            Coords::from(record.coords),
            record.distance,
            record.duration,
            record.clicks,
            details,
        ))
    }

    fn build(
        id: String,
        date: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        clicks: u32,
        details: WorkoutDetails,
    ) -> Self {
        Self {
            id,
            date,
            coords,
            distance,
            duration,
            description: describe(details.workout_type(), &date),
            clicks,
            details,
        }
    }

    /// Replace the generated id, used when an edit rebuilds an existing entry.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Convert to the plain record written to storage.
    pub fn to_record(&self) -> WorkoutRecord {
        let details = match self.details {
            WorkoutDetails::Running { cadence } => RecordDetails::Running {
                cadence,
                pace: self.pace(),
            },
            WorkoutDetails::Cycling { elevation_gain } => RecordDetails::Cycling {
                elevation_gain,
                speed: self.speed(),
            },
        };

        WorkoutRecord {
            id: self.id.clone(),
            date: self.date,
            coords: self.coords.into(),
            distance: self.distance,
            duration: self.duration,
            description: Some(self.description.clone()),
            clicks: self.clicks,
            details,
        }
    }

    /// Register a click on the workout.
    pub fn click(&mut self) {
        self.clicks = self.clicks.saturating_add(1);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    /// Distance in kilometers.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Duration in minutes.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    pub fn workout_type(&self) -> WorkoutType {
        self.details.workout_type()
    }

    /// Pace in min/km, running only.
    pub fn pace(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { .. } => Some(self.duration / self.distance),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    /// Speed in km/h, cycling only.
    pub fn speed(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { .. } => None,
            WorkoutDetails::Cycling { .. } => Some(self.distance / (self.duration / 60.0)),
        }
    }
}

/// `finite` must all be finite numbers, `positive` must all be above zero.
fn validate(finite: &[f64], positive: &[f64]) -> Result<(), WorkoutError> {
    if finite.iter().all(|v| v.is_finite()) && positive.iter().all(|v| *v > 0.0) {
        Ok(())
    } else {
        Err(WorkoutError::Validation(VALIDATION_MESSAGE.to_string()))
    }
}

/// Description on the local calendar day; dates are stored in UTC.
fn describe(workout_type: WorkoutType, date: &DateTime<Utc>) -> String {
    describe_in(workout_type, date, &Local)
}

fn describe_in<Tz: TimeZone>(workout_type: WorkoutType, date: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{} on {}",
        workout_type.label(),
        date.with_timezone(zone).format("%B %-d")
    )
}

/// Workout as written to the storage slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub coords: [f64; 2],
    pub distance: f64,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub clicks: u32,
    #[serde(flatten)]
    pub details: RecordDetails,
}

/// Variant payload of a stored record, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RecordDetails {
    Running {
        cadence: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pace: Option<f64>,
    },
    Cycling {
        #[serde(rename = "elevationGain")]
        elevation_gain: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        speed: Option<f64>,
    },
}

/// Errors related to workout construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorkoutError {
    /// Non-finite or non-positive numeric input
    #[error("{0}")]
    Validation(String),

    /// Form named a workout type that does not exist
    #[error("Unknown workout type: {0}")]
    UnknownType(String),

    /// Stored record could not be turned back into a workout
    #[error("Invalid workout record: {0}")]
    InvalidRecord(String),
}
