//! Modules layer - Infrastructure components shared by features
//!
//! Contains storage backends that are not tied to a single feature.

pub mod storage;
