//! Category pages.

use crate::{
    graph::types::Category,
    page::{PageContext, PageDescriptor, PageRegistrar, Template},
};

/// Path prefix for category pages. Kept without a leading slash; the URL
/// convention is `category/{key}`.
pub const CATEGORY_PATH_PREFIX: &str = "category/";

/// Register one page per category record.
///
/// Returns the number of pages registered.
pub fn create_category_pages(
    categories: &[Category],
    registrar: &mut impl PageRegistrar,
) -> usize {
    for category in categories {
        registrar.register(PageDescriptor {
            path: format!("{CATEGORY_PATH_PREFIX}{}", category.key),
            component: Template::Category,
            context: PageContext::Category {
                category: category.key.clone(),
            },
        });
    }

    categories.len()
}
