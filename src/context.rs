use std::path::PathBuf;

#[derive(Debug, Clone)]
pub(crate) struct Context {
    pub article_dir: PathBuf,
    pub output_path: PathBuf,

    /// Treat malformed front matter as fatal instead of skipping it.
    pub strict: bool,
}

impl Context {
    pub fn new(article_dir: PathBuf, output_path: PathBuf, strict: bool) -> Self {
        Self {
            article_dir,
            output_path,
            strict,
        }
    }
}
