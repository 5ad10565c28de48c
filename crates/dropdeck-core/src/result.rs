use crate::error::DropdeckError;

pub type DropdeckResult<T> = Result<T, DropdeckError>;
