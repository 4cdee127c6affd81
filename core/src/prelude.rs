/// Common error type for table rendering.
#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("write failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type TableResult<T> = Result<T, TableError>;
