use thiserror::Error;

use crate::model::{BandScoreError, ParseIdError, TestError, UserError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Test(#[from] TestError),
    #[error(transparent)]
    BandScore(#[from] BandScoreError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
