use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Search(#[from] venthatgrant_search::SearchError),

    #[error(transparent)]
    Store(#[from] venthatgrant_store::StoreError),

    #[error(transparent)]
    Assist(#[from] venthatgrant_assist::AssistError),

    #[error("grant {0} is not among the displayed results")]
    GrantNotDisplayed(i64),

    #[error("grant {0} is not among the search results")]
    UnknownResult(i64),
}
