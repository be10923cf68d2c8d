use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("params are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("params must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

pub type Result<T> = std::result::Result<T, ParamsError>;
