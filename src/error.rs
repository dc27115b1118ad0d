/*
 * Error Module
 *
 * This module defines the error type for precondition violations. A violated
 * precondition aborts the operation at the call boundary before any state is
 * mutated. Expected-empty conditions (lookup misses, no neighbors in range,
 * zero entities) are never errors and are returned as empty results instead.
 */

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("cell size must be positive, got {0}")]
    InvalidCellSize(f32),

    #[error("time step must be non-negative, got {0}")]
    NegativeTimeStep(f32),

    #[error("invalid simulation parameter: {what}")]
    InvalidParams { what: String },
}
