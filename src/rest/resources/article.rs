//! Blog articles.
//!
//! Articles belong to a blog, so most calls take a `blog_id`:
//! `blogs/{blog_id}/articles.json`. Tags can be listed shop-wide or for one
//! blog.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{Article, ArticleService, ArticleTagOptions};
//!
//! let articles = client.articles();
//! let created = articles
//!     .create(241_253_187, &Article {
//!         title: Some("Launch day".to_string()),
//!         body_html: Some("<p>We are live.</p>".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let popular = articles
//!     .list_tags(Some(&ArticleTagOptions { popular: Some(true), limit: Some(5) }))
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpError, RestClient};
use crate::rest::envelope::unwrap_envelope;
use crate::rest::flexible::{self, EmptyRecord};
use crate::rest::resources::common::{CountOptions, ListOptions};
use crate::rest::{pagination, to_query, RestResource};

/// The featured image of an article.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ArticleImage {
    /// Image URL; on create, the image is fetched from here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Width in pixels.
    #[serde(skip_serializing)]
    pub width: Option<i64>,

    /// Height in pixels.
    #[serde(skip_serializing)]
    pub height: Option<i64>,

    /// When the image was added.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A metafield sent or returned inline with an article.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ArticleMetafield {
    /// The metafield key.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,

    /// The stored value.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    /// The value type.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub metafield_type: String,

    /// The namespace.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
}

impl EmptyRecord for ArticleMetafield {
    fn is_empty_record(&self) -> bool {
        self.key.is_empty()
            && self.value.is_empty()
            && self.metafield_type.is_empty()
            && self.namespace.is_empty()
    }
}

/// A blog post.
///
/// # Read-Only Fields
///
/// `user_id`, `created_at`, `updated_at` and `admin_graphql_api_id` are
/// never sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Article {
    /// The unique identifier of the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The owning blog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_id: Option<u64>,

    /// Title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// URL handle, generated from the title when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Article body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// Excerpt shown in listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_html: Option<String>,

    /// Displayed author name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// Liquid template suffix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// Featured image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ArticleImage>,

    /// Whether the article is visible; only used on create and update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    /// Publication time; a future time schedules the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// Inline metafields. The API sends either one object or an array.
    #[serde(
        default,
        deserialize_with = "flexible::one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub metafields: Vec<ArticleMetafield>,

    /// The staff account that wrote the article.
    #[serde(skip_serializing)]
    pub user_id: Option<u64>,

    /// When the article was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the article was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The admin GraphQL API ID.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Article {
    const NAME: &'static str = "article";
    const PLURAL: &'static str = "articles";
}

/// Filters for listing and counting articles.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ArticleListOptions {
    /// Paging, ID and time filters.
    #[serde(flatten)]
    pub list: ListOptions,

    /// `published`, `unpublished` or `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,

    /// Only articles published at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    /// Only articles published at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,

    /// Only the article with this handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Only articles with this tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Only articles by this author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Filters for the tag listings.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ArticleTagOptions {
    /// Maximum number of tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Sort by popularity, most used first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
}

/// Article operations.
#[allow(async_fn_in_trait)]
pub trait ArticleService {
    /// Lists the articles of a blog.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn list(&self, blog_id: u64, options: Option<&ArticleListOptions>) -> Result<Vec<Article>, HttpError>;

    /// Creates an article in a blog.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with status 422 on validation failure.
    async fn create(&self, blog_id: u64, article: &Article) -> Result<Article, HttpError>;

    /// Fetches one article.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with status 404 if it does not exist.
    async fn get(&self, blog_id: u64, article_id: u64) -> Result<Article, HttpError>;

    /// Updates an article.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn update(&self, blog_id: u64, article_id: u64, article: &Article) -> Result<Article, HttpError>;

    /// Deletes an article.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn delete(&self, blog_id: u64, article_id: u64) -> Result<(), HttpError>;

    /// Counts the articles of a blog.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn count(&self, blog_id: u64, options: Option<&CountOptions>) -> Result<u64, HttpError>;

    /// Lists the tags used by articles across all blogs.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn list_tags(&self, options: Option<&ArticleTagOptions>) -> Result<Vec<String>, HttpError>;

    /// Lists the tags used by articles in one blog.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn list_blog_tags(
        &self,
        blog_id: u64,
        options: Option<&ArticleTagOptions>,
    ) -> Result<Vec<String>, HttpError>;
}

/// [`ArticleService`] backed by a [`RestClient`].
#[derive(Debug, Clone, Copy)]
pub struct ArticleServiceOp<'a> {
    client: &'a RestClient,
}

impl<'a> ArticleServiceOp<'a> {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    async fn tags(&self, path: &str, options: Option<&ArticleTagOptions>) -> Result<Vec<String>, HttpError> {
        let response = self.client.get_response(path, to_query(options)?).await?;
        Ok(unwrap_envelope(response.body, "tags")?)
    }
}

fn articles_path(blog_id: u64) -> String {
    format!("blogs/{blog_id}/articles")
}

fn article_path(blog_id: u64, article_id: u64) -> String {
    format!("blogs/{blog_id}/articles/{article_id}")
}

impl ArticleService for ArticleServiceOp<'_> {
    async fn list(&self, blog_id: u64, options: Option<&ArticleListOptions>) -> Result<Vec<Article>, HttpError> {
        let page = Article::fetch_page(self.client, &articles_path(blog_id), to_query(options)?).await?;
        Ok(page.items)
    }

    async fn create(&self, blog_id: u64, article: &Article) -> Result<Article, HttpError> {
        article.create_at(self.client, &articles_path(blog_id)).await
    }

    async fn get(&self, blog_id: u64, article_id: u64) -> Result<Article, HttpError> {
        Article::fetch(self.client, &article_path(blog_id, article_id), None).await
    }

    async fn update(&self, blog_id: u64, article_id: u64, article: &Article) -> Result<Article, HttpError> {
        article.update_at(self.client, &article_path(blog_id, article_id)).await
    }

    async fn delete(&self, blog_id: u64, article_id: u64) -> Result<(), HttpError> {
        self.client.delete(&article_path(blog_id, article_id)).await
    }

    async fn count(&self, blog_id: u64, options: Option<&CountOptions>) -> Result<u64, HttpError> {
        let path = format!("{}/count", articles_path(blog_id));
        pagination::count(self.client, &path, to_query(options)?).await
    }

    async fn list_tags(&self, options: Option<&ArticleTagOptions>) -> Result<Vec<String>, HttpError> {
        self.tags("articles/tags", options).await
    }

    async fn list_blog_tags(
        &self,
        blog_id: u64,
        options: Option<&ArticleTagOptions>,
    ) -> Result<Vec<String>, HttpError> {
        self.tags(&format!("{}/tags", articles_path(blog_id)), options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::serialize_to_query;
    use serde_json::json;

    #[test]
    fn test_paths() {
        assert_eq!(articles_path(241), "blogs/241/articles");
        assert_eq!(article_path(241, 134), "blogs/241/articles/134");
    }

    #[test]
    fn test_article_deserialization() {
        let article: Article = serde_json::from_value(json!({
            "id": 134_645_308,
            "blog_id": 241_253_187,
            "title": "get on the train now",
            "author": "dennis",
            "tags": "Mystery",
            "image": {"src": "https://cdn.example.com/a.jpg", "width": 123, "height": 456},
            "published_at": "2008-07-31T20:00:00-04:00",
            "user_id": 799_407_056,
            "metafields": {"key": "new", "value": "newvalue", "type": "single_line_text_field", "namespace": "global"}
        }))
        .unwrap();

        assert_eq!(article.id, Some(134_645_308));
        assert_eq!(article.image.as_ref().and_then(|i| i.width), Some(123));
        assert_eq!(article.metafields.len(), 1);
        assert_eq!(article.metafields[0].namespace, "global");
    }

    #[test]
    fn test_article_metafields_shapes() {
        let article: Article = serde_json::from_value(json!({"metafields": {}})).unwrap();
        assert!(article.metafields.is_empty());

        let article: Article = serde_json::from_value(json!({"metafields": null})).unwrap();
        assert!(article.metafields.is_empty());

        let article: Article = serde_json::from_value(json!({
            "metafields": [{"key": "a", "value": "1"}, {"key": "b", "value": "2"}]
        }))
        .unwrap();
        assert_eq!(article.metafields.len(), 2);
    }

    #[test]
    fn test_read_only_fields_are_not_sent() {
        let article = Article {
            title: Some("Hello".to_string()),
            user_id: Some(1),
            image: Some(ArticleImage {
                src: Some("https://cdn.example.com/a.jpg".to_string()),
                width: Some(10),
                ..Default::default()
            }),
            ..Default::default()
        };
        let body = serde_json::to_value(&article).unwrap();
        assert_eq!(
            body,
            json!({"title": "Hello", "image": {"src": "https://cdn.example.com/a.jpg"}})
        );
    }

    #[test]
    fn test_list_options_flatten() {
        let options = ArticleListOptions {
            list: ListOptions {
                limit: Some(10),
                ..Default::default()
            },
            published_status: Some("published".to_string()),
            ..Default::default()
        };
        let query = serialize_to_query(&options).unwrap();
        assert_eq!(query.len(), 2);
        assert_eq!(query["limit"], "10");
        assert_eq!(query["published_status"], "published");
    }
}
