//! This module contains clustering algorithms used to group geographic points.

pub mod grid;
pub mod seeded;
