use std::{borrow::Cow, path::Path};

use log::{debug, warn};

use crate::{
    context::Context,
    error::{ManifestError, Result},
    metadata::ArticleRecord,
    output::save_manifest,
};

use self::{
    data::Manifest,
    frontmatter::{extract_front_matter, parse_front_matter},
    utils::{is_sortable_date, sort_article},
};

mod data;
mod frontmatter;
mod utils;

pub(crate) use data::Summary;

/// Names of the markdown files directly inside `article_dir`, sorted.
fn list_articles(article_dir: &Path) -> Result<Vec<String>> {
    let mut names = vec![];
    for entry in std::fs::read_dir(article_dir).map_err(|e| ManifestError::fs(article_dir, e))? {
        let entry = entry.map_err(|e| ManifestError::fs(article_dir, e))?;
        let name = match entry.file_name().into_string() {
            Ok(name) if name.ends_with(".md") => name,
            Ok(_) => continue,
            Err(name) => {
                debug!("Skipping non UTF-8 file name {name:?}");
                continue;
            }
        };

        // follows symlinks, so linked articles are picked up
        let meta = std::fs::metadata(entry.path()).map_err(|e| ManifestError::fs(entry.path(), e))?;
        if meta.is_file() {
            names.push(name);
        }
    }
    names.sort();

    Ok(names)
}

fn preprocess_file(ctx: &Context, file_name: &str) -> Result<ArticleRecord> {
    let path = ctx.article_dir.join(file_name);
    debug!("Reading {path:?}");
    let bytes = std::fs::read(&path).map_err(|e| ManifestError::fs(&path, e))?;
    let content = String::from_utf8_lossy(&bytes);

    let mut problems = vec![];
    if let Cow::Owned(_) = content {
        problems.push("invalid UTF-8 replaced with U+FFFD".to_string());
    }
    let block = extract_front_matter(&content).unwrap_or_else(|| {
        problems.push("no `---` delimited front matter block".to_string());
        ""
    });
    let front_matter = parse_front_matter(block);
    for line in front_matter.skipped.iter() {
        problems.push(format!("line without `:`: {line:?}"));
    }

    let mut record = ArticleRecord::new(front_matter.fields);
    if let Some(date) = record.date() {
        if !is_sortable_date(date) {
            problems.push(format!("date {date:?} is not in YYYY-MM-DD form"));
        }
    }

    if !problems.is_empty() {
        if ctx.strict {
            return Err(ManifestError::InvalidFrontMatter {
                path,
                reason: problems.join("; "),
            });
        }
        for problem in problems.iter() {
            warn!("{path:?}: {problem}");
        }
    }

    record.attach_slug(file_name);
    Ok(record)
}

/// Drops drafts and orders the rest newest first. Returns the number of
/// drafts dropped alongside the manifest.
fn assemble(records: Vec<ArticleRecord>) -> (Manifest, usize) {
    let total = records.len();
    let mut articles: Vec<ArticleRecord> = records
        .into_iter()
        .filter(|record| {
            if record.is_draft() {
                debug!("Skipping draft {:?}", record.slug());
            }
            !record.is_draft()
        })
        .collect();
    let drafts = total - articles.len();

    // stable: equal dates keep listing order
    articles.sort_by(sort_article);

    (Manifest { articles }, drafts)
}

pub(crate) fn generate(ctx: &Context) -> Result<Summary> {
    let mut records = vec![];
    for file_name in list_articles(&ctx.article_dir)? {
        records.push(preprocess_file(ctx, &file_name)?);
    }

    let (manifest, drafts) = assemble(records);
    // serialize fully before touching the output file
    let json = serde_json::to_string_pretty(&manifest)?;
    save_manifest(&ctx.output_path, &json)?;

    Ok(Summary {
        written: manifest.articles.len(),
        drafts,
    })
}
