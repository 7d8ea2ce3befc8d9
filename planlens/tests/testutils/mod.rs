//! Test utilities for PlanLens integration tests
//!
//! Sample operators mirroring the shapes real planners produce: leaf routes,
//! unary wrappers and binary joins with named inputs.

#![allow(dead_code)]

pub mod operators;
