use crate::error::StandupError;

pub type StandupResult<T> = Result<T, StandupError>;
