use serde::Serialize;

use crate::metadata::ArticleRecord;

/// Published articles, newest first.
#[derive(Serialize, Debug, Default)]
#[serde(transparent)]
pub(crate) struct Manifest {
    pub articles: Vec<ArticleRecord>,
}

/// What a run produced, for the completion message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Summary {
    pub written: usize,
    pub drafts: usize,
}
