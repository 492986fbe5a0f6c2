pub(crate) mod courses;
pub(crate) mod error;
pub(crate) mod institutions;
pub(crate) mod search;

pub(crate) use error::ErrorResponse;
