use rubli_client::ClientError;

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("a review needs a judgment: valid or dismissed")]
    MissingJudgment,

    #[error("a review is already being submitted")]
    AlreadySubmitting,

    #[error(transparent)]
    Client(#[from] ClientError),
}
