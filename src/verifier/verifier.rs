use std::fmt;
use std::fmt::Debug;

use crate::schedule::AssignedCourse;

/// Checks a single course of a schedule against one constraint.
pub trait Verifier {
    type Error: fmt::Display + Debug + Sync + Send + 'static;

    fn verify(&self, course: &AssignedCourse) -> Result<(), Self::Error>;
}
