//! Individual post pages.

use crate::{
    graph::types::Post,
    page::{PageContext, PageDescriptor, PageRegistrar, PostRef, Template},
};

/// Register one page per post, each aware of its chronological neighbors.
///
/// The sequence arrives sorted descending by date, so for index `k`:
/// `previous` (the older post) is element `k + 1`, absent at the end of the
/// sequence; `next` (the newer post) is element `k - 1`, absent at the
/// start. The naming is a contract with the post template; do not flip it
/// to array order.
///
/// Returns the number of pages registered.
pub fn create_post_pages(posts: &[Post], registrar: &mut impl PageRegistrar) -> usize {
    for (index, post) in posts.iter().enumerate() {
        let previous = posts.get(index + 1).map(PostRef::from);
        let next = if index == 0 {
            None
        } else {
            posts.get(index - 1).map(PostRef::from)
        };

        registrar.register(PageDescriptor {
            path: post.slug.clone(),
            component: Template::BlogPost,
            context: PageContext::Post {
                author: post.author.clone(),
                slug: post.slug.clone(),
                previous,
                next,
            },
        });
    }

    posts.len()
}
