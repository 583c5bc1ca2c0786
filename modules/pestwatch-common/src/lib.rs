pub mod types;
pub mod dataset;
pub mod display;
pub mod config;
pub mod error;

pub use types::*;
pub use dataset::{HotelDirectory, HotelFilter};
pub use config::Config;
pub use error::PestwatchError;
