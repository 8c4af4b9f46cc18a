pub mod comments;
pub mod news;

pub use comments::CommentDto;
pub use news::{ArticleDto, NewsFeedDto, PaginationDto};
