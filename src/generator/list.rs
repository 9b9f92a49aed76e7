//! Paginated list pages.

use crate::{
    config::Mode,
    graph::types::Post,
    page::{PageContext, PageDescriptor, PageRegistrar, Template},
};

/// Posts per list page.
pub const PAGE_SIZE: usize = 5;

/// Register one list page per chunk of `PAGE_SIZE` posts.
///
/// Page 0 lives at `/`, every later page at `/pages/{n}` with 1-based `n`.
/// The context carries the window (`limit`/`skip`), the mode's status
/// filter for the template's own post query, and pagination counters.
/// Returns the number of pages registered: `ceil(posts / PAGE_SIZE)`.
pub fn create_list_pages(
    posts: &[Post],
    mode: Mode,
    registrar: &mut impl PageRegistrar,
) -> usize {
    let num_pages = posts.len().div_ceil(PAGE_SIZE);

    for i in 0..num_pages {
        let path = if i == 0 {
            "/".to_owned()
        } else {
            format!("/pages/{}", i + 1)
        };

        registrar.register(PageDescriptor {
            path,
            component: Template::BlogList,
            context: PageContext::List {
                limit: PAGE_SIZE,
                skip: i * PAGE_SIZE,
                status: mode.list_status_filter().to_owned(),
                num_pages,
                current_page: i + 1,
            },
        });
    }

    num_pages
}
