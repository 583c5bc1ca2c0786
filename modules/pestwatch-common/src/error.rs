use thiserror::Error;

#[derive(Error, Debug)]
pub enum PestwatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset error: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("Duplicate hotel id in dataset: {id}")]
    DuplicateHotelId { id: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
