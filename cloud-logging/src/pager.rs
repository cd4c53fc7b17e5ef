//! Pull based iteration over list RPCs.
//!
//! A [`Pager`] holds the last request it sent. After each page it copies the
//! response's `next_page_token` into that request, and it stops once a page
//! comes back with an empty token. Pages without items but with a token do
//! not end the iteration.
use crate::call::CallOptions;
use crate::connection::Connection;
use crate::error::Result;
use crate::internal_logging::logging_debug;
use crate::rpc::PagedRpc;
use crate::transport::{DefaultTransport, Transport};
use futures_core::Stream;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Pages of a list RPC. The first page is fetched when the pager is created.
pub struct Pager<R: PagedRpc, T = DefaultTransport> {
    connection: Connection<T>,
    request: R::Request,
    options: CallOptions,
    prefetched: Option<R::Response>,
    done: bool,
}

impl<R: PagedRpc, T> fmt::Debug for Pager<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("method", &R::METHOD)
            .field("request", &self.request)
            .field("prefetched", &self.prefetched.is_some())
            .field("done", &self.done)
            .finish()
    }
}

impl<R: PagedRpc, T: Transport> Pager<R, T> {
    pub(crate) async fn start(
        connection: Connection<T>,
        request: R::Request,
        options: CallOptions,
    ) -> Result<Self> {
        let mut pager = Pager {
            connection,
            request,
            options,
            prefetched: None,
            done: false,
        };
        let first = pager.fetch().await?;
        pager.prefetched = Some(first);
        Ok(pager)
    }

    async fn fetch(&mut self) -> Result<R::Response> {
        let response = match self
            .connection
            .invoke::<R>(self.request.clone(), &self.options)
            .await
        {
            Ok(response) => response,
            Err(err) => {
                self.done = true;
                return Err(err);
            }
        };
        let token = R::next_page_token(&response);
        logging_debug!(
            name: "Pager.PageFetched",
            method = R::METHOD,
            has_next = !token.is_empty(),
        );
        if token.is_empty() {
            self.done = true;
        } else {
            R::set_page_token(&mut self.request, token.to_string());
        }
        Ok(response)
    }

    /// Whether [`next_page`](Self::next_page) can return another page.
    pub fn has_next_page(&self) -> bool {
        self.prefetched.is_some() || !self.done
    }

    /// The next raw response, `None` once the last page was returned. An
    /// error ends the iteration.
    pub async fn next_page(&mut self) -> Option<Result<R::Response>> {
        if let Some(page) = self.prefetched.take() {
            return Some(Ok(page));
        }
        if self.done {
            return None;
        }
        Some(self.fetch().await)
    }

    /// Iterates over the items of every page instead of the pages.
    pub fn items(self) -> ItemPager<R, T> {
        ItemPager {
            pages: self,
            buffer: VecDeque::new(),
        }
    }

    pub fn into_stream(self) -> impl Stream<Item = Result<R::Response>> + Send + Unpin {
        Box::pin(futures_util::stream::unfold(self, |mut pager| async move {
            pager.next_page().await.map(|page| (page, pager))
        }))
    }
}

/// Items of a list RPC, fetched a page at a time.
pub struct ItemPager<R: PagedRpc, T = DefaultTransport> {
    pages: Pager<R, T>,
    buffer: VecDeque<R::Item>,
}

impl<R: PagedRpc, T> fmt::Debug for ItemPager<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemPager")
            .field("pages", &self.pages)
            .field("buffered", &self.buffer.len())
            .finish()
    }
}

impl<R: PagedRpc, T: Transport> ItemPager<R, T> {
    /// The next item, fetching pages as needed.
    pub async fn next(&mut self) -> Option<Result<R::Item>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(item));
            }
            match self.pages.next_page().await? {
                Ok(page) => self.buffer.extend(R::into_items(page)),
                Err(err) => return Some(Err(err)),
            }
        }
    }

    /// Collects every remaining item, stopping at the first error.
    pub async fn try_collect(mut self) -> Result<Vec<R::Item>> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await {
            items.push(item?);
        }
        Ok(items)
    }

    pub fn into_stream(self) -> impl Stream<Item = Result<R::Item>> + Send + Unpin {
        Box::pin(futures_util::stream::unfold(self, |mut items| async move {
            items.next().await.map(|item| (item, items))
        }))
    }
}

/// [`Pager`] for the blocking clients. Iterates over pages.
pub struct BlockingPager<R: PagedRpc, T = DefaultTransport> {
    pager: Pager<R, T>,
    runtime: Arc<Runtime>,
}

impl<R: PagedRpc, T> fmt::Debug for BlockingPager<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingPager")
            .field("pager", &self.pager)
            .finish_non_exhaustive()
    }
}

impl<R: PagedRpc, T: Transport> BlockingPager<R, T> {
    pub(crate) fn new(pager: Pager<R, T>, runtime: Arc<Runtime>) -> Self {
        BlockingPager { pager, runtime }
    }

    pub fn has_next_page(&self) -> bool {
        self.pager.has_next_page()
    }

    /// Iterates over the items of every page instead of the pages.
    pub fn items(self) -> BlockingItems<R, T> {
        BlockingItems {
            items: self.pager.items(),
            runtime: self.runtime,
        }
    }
}

impl<R: PagedRpc, T: Transport> Iterator for BlockingPager<R, T> {
    type Item = Result<R::Response>;

    fn next(&mut self) -> Option<Self::Item> {
        self.runtime.block_on(self.pager.next_page())
    }
}

/// Items of a list RPC for the blocking clients.
pub struct BlockingItems<R: PagedRpc, T = DefaultTransport> {
    items: ItemPager<R, T>,
    runtime: Arc<Runtime>,
}

impl<R: PagedRpc, T> fmt::Debug for BlockingItems<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingItems")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<R: PagedRpc, T: Transport> Iterator for BlockingItems<R, T> {
    type Item = Result<R::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.runtime.block_on(self.items.next())
    }
}
