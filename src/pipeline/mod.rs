//! The filtering/clustering pipeline, one module per stage.

pub mod domain;
pub mod evaluate;
pub mod noise;
pub mod self_reference;
pub mod similarity;
pub mod tokens;
