//! Pipeline Stages

pub mod concatenate;
pub mod import;
pub mod preprocess;
pub mod split;
pub mod train;
