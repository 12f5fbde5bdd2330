//! Pagination of the sorted run list.
//!
//! Pages are 1-based. The page-link window shows at most five numbered
//! pages around the current one, plus links to the first and last page
//! separated by ellipses when the window does not reach them.

use serde::Serialize;

/// Rows per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

const MAX_PAGE_LINKS: usize = 5;

/// Number of pages needed for `len` items.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Slice of `items` shown on 1-based `page`. Empty when out of range.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// One entry of the page-link bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageItem {
    /// A link to a page number.
    Page(usize),
    /// A non-interactive gap marker.
    Ellipsis,
}

/// Current position within the paged list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current: usize,
    pub page_count: usize,
}

impl PageInfo {
    pub fn new(current: usize, page_count: usize) -> Self {
        Self {
            current,
            page_count,
        }
    }

    /// Whether "Previous" is enabled.
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Whether "Next" is enabled.
    pub fn has_next(&self) -> bool {
        self.current < self.page_count
    }

    /// Page-link bar for the current position.
    pub fn window(&self) -> Vec<PageItem> {
        let half = MAX_PAGE_LINKS / 2;
        let mut start = self.current.saturating_sub(half).max(1);
        let end = self.page_count.min(start + MAX_PAGE_LINKS - 1);

        if (end + 1).saturating_sub(start) < MAX_PAGE_LINKS {
            start = (end + 1).saturating_sub(MAX_PAGE_LINKS).max(1);
        }

        let mut items = Vec::with_capacity(MAX_PAGE_LINKS + 4);

        if start > 1 {
            items.push(PageItem::Page(1));
            if start > 2 {
                items.push(PageItem::Ellipsis);
            }
        }

        items.extend((start..=end).map(PageItem::Page));

        if end < self.page_count {
            if end + 1 < self.page_count {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page(self.page_count));
        }

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(150, 10), 15);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_first_and_last_page_slices() {
        let items: Vec<usize> = (0..23).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 2, 10), &items[10..20]);
        assert_eq!(paginate(&items, 3, 10), &[20, 21, 22]);
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, 0, 10).is_empty());
    }

    #[test]
    fn test_last_page_holds_one_to_ten_items() {
        for len in 1..=95usize {
            let items: Vec<usize> = (0..len).collect();
            let last = paginate(&items, page_count(len, 10), 10);
            assert!((1..=10).contains(&last.len()), "len {len}");
            assert_eq!(*last.last().unwrap(), len - 1);
        }
    }

    #[test]
    fn test_window_at_start() {
        let info = PageInfo::new(1, 15);
        assert_eq!(
            info.window(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(15)]
        );
        assert!(!info.has_previous());
        assert!(info.has_next());
    }

    #[test]
    fn test_window_in_middle() {
        let info = PageInfo::new(8, 15);
        assert_eq!(
            info.window(),
            vec![
                Page(1),
                Ellipsis,
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                Page(10),
                Ellipsis,
                Page(15)
            ]
        );
    }

    #[test]
    fn test_window_at_end() {
        let info = PageInfo::new(15, 15);
        assert_eq!(
            info.window(),
            vec![Page(1), Ellipsis, Page(11), Page(12), Page(13), Page(14), Page(15)]
        );
        assert!(info.has_previous());
        assert!(!info.has_next());
    }

    #[test]
    fn test_window_without_ellipsis_next_to_boundary() {
        assert_eq!(
            PageInfo::new(4, 7).window(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
    }

    #[test]
    fn test_window_with_few_pages() {
        assert_eq!(PageInfo::new(2, 3).window(), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(PageInfo::new(1, 1).window(), vec![Page(1)]);
        assert!(PageInfo::new(1, 0).window().is_empty());
    }
}
