//! Lazy row iteration across pages.

use std::iter::FusedIterator;

use crate::{
    types::{Response, Row},
    Error,
};

/// Pulls rows page by page from a fetch function, starting at page 1.
///
/// Each call to the fetch function is one request. Rows of a page are yielded
/// in order before the next page is requested, and iteration stops after the
/// page whose number reaches `total_pages`. The first error is yielded once
/// and ends the iteration; nothing is retried.
pub struct Paginator<F> {
    fetch: F,
    next_page: u32,
    rows: std::vec::IntoIter<Row>,
    finished: bool,
    pages_fetched: u32,
}

impl<F> Paginator<F>
where
    F: FnMut(u32) -> Result<Response, Error>,
{
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            next_page: 1,
            rows: Vec::new().into_iter(),
            finished: false,
            pages_fetched: 0,
        }
    }

    /// Number of fetches issued so far.
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }
}

impl<F> Iterator for Paginator<F>
where
    F: FnMut(u32) -> Result<Response, Error>,
{
    type Item = Result<Row, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(row) = self.rows.next() {
                return Some(Ok(row));
            }
            if self.finished {
                return None;
            }

            let page = self.next_page;
            self.pages_fetched += 1;
            match (self.fetch)(page) {
                Ok(resp) => {
                    tracing::debug!(
                        "Fetched {} page {}/{} ({} rows)",
                        resp.kind(),
                        page,
                        resp.total_pages(),
                        resp.len()
                    );
                    if page >= resp.total_pages() {
                        self.finished = true;
                    } else {
                        self.next_page += 1;
                    }
                    self.rows = resp.into_rows().into_iter();
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<F> FusedIterator for Paginator<F> where F: FnMut(u32) -> Result<Response, Error> {}
