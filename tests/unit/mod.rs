//! Unit test modules.

mod persistence_test;
mod workout_model_test;
