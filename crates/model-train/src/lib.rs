//! Model Training for CO2 Emission Prediction
//!
//! One-hot encoding of the categorical columns, a seeded train/test
//! split, and a least-squares regression on the encoded features.

mod encode;
mod error;
mod split;
mod train;

pub use encode::encode_one_hot;
pub use error::TrainError;
pub use split::{split_dataset, SplitConfig, TrainTestSplit};
pub use train::{train_model, Evaluation, Scores, TrainedModel};
