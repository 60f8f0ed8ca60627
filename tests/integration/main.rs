//! Integration tests

mod classifier_test;
mod e2e_test;
mod schedule_test;
