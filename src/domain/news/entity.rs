// src/domain/news/entity.rs

/// A single news item as reported by an upstream source. Never mutated once
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub author: String,
    pub published: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
}

impl PageInfo {
    pub const fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// Accumulator for merging several sources: no pages yet, positioned at
    /// the requested page.
    pub const fn starting_at(current_page: u32) -> Self {
        Self::new(current_page, 0)
    }

    pub const fn add_pages(&mut self, other: Self) {
        self.total_pages = self.total_pages.saturating_add(other.total_pages);
    }
}

/// Articles plus pagination returned by one source, or by several sources
/// once merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsPage {
    pub articles: Vec<Article>,
    pub page: PageInfo,
}

impl NewsPage {
    pub const fn new(articles: Vec<Article>, page: PageInfo) -> Self {
        Self { articles, page }
    }

    pub const fn empty(current_page: u32) -> Self {
        Self::new(Vec::new(), PageInfo::starting_at(current_page))
    }

    /// Appends another page's articles and sums its page count into ours.
    pub fn absorb(&mut self, other: Self) {
        self.articles.extend(other.articles);
        self.page.add_pages(other.page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            title: title.into(),
            author: "author".into(),
            published: "2024-01-01".into(),
            content: "content".into(),
        }
    }

    #[test]
    fn absorb_concatenates_and_sums_total_pages() {
        let mut merged = NewsPage::empty(1);
        merged.absorb(NewsPage::new(vec![article("a")], PageInfo::new(1, 3)));
        merged.absorb(NewsPage::new(
            vec![article("b"), article("c")],
            PageInfo::new(1, 4),
        ));

        assert_eq!(merged.articles.len(), 3);
        assert_eq!(merged.page, PageInfo::new(1, 7));
    }

    #[test]
    fn add_pages_saturates() {
        let mut page = PageInfo::new(1, u32::MAX - 1);
        page.add_pages(PageInfo::new(1, 5));
        assert_eq!(page.total_pages, u32::MAX);
    }

    #[test]
    fn empty_page_has_no_totals() {
        let page = NewsPage::empty(4);
        assert!(page.articles.is_empty());
        assert_eq!(page.page, PageInfo::new(4, 0));
    }
}
