use crate::application::RequestContext;
use crate::domain::news::{Article, NewsPage, PageInfo};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub title: String,
    pub author: String,
    pub published: String,
    pub content: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            title: article.title,
            author: article.author,
            published: article.published,
            content: article.content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationDto {
    pub current_page: u32,
    pub total_pages: u32,
}

impl From<PageInfo> for PaginationDto {
    fn from(page: PageInfo) -> Self {
        Self {
            current_page: page.current_page,
            total_pages: page.total_pages,
        }
    }
}

/// Response envelope of every news read. `request_id` is always the id
/// attached at ingress.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsFeedDto {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub news: Vec<ArticleDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDto>,
}

impl NewsFeedDto {
    pub fn new(ctx: &RequestContext, page: NewsPage) -> Self {
        Self {
            request_id: ctx.request_id().as_str().to_string(),
            news: page.articles.into_iter().map(ArticleDto::from).collect(),
            pagination: Some(page.page.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RequestId;

    #[test]
    fn envelope_uses_wire_field_names() {
        let ctx = RequestContext::new(RequestId::from_header("req-1").unwrap());
        let page = NewsPage::new(
            vec![Article {
                title: "t".into(),
                author: "a".into(),
                published: "p".into(),
                content: "c".into(),
            }],
            PageInfo::new(1, 2),
        );

        let json = serde_json::to_value(NewsFeedDto::new(&ctx, page)).unwrap();
        assert_eq!(json["requestId"], "req-1");
        assert_eq!(json["news"][0]["published"], "p");
        assert_eq!(json["pagination"]["current_page"], 1);
        assert_eq!(json["pagination"]["total_pages"], 2);
    }
}
