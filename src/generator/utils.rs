use std::{borrow::Borrow, cmp::Ordering};

use chrono::NaiveDate;

use crate::metadata::ArticleRecord;

/// Newest first. Dates are compared as plain strings, so they have to be
/// zero-padded (`YYYY-MM-DD`) to order correctly. Missing dates sort last.
pub(super) fn sort_article<T: Borrow<ArticleRecord>>(a: &T, b: &T) -> Ordering {
    let a_date = a.borrow().date().unwrap_or("");
    let b_date = b.borrow().date().unwrap_or("");
    b_date.cmp(a_date)
}

pub(super) fn is_sortable_date(date: &str) -> bool {
    date.len() == 10 && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}
