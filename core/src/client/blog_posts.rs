//! Client for the blog posts resource.
//!
//! Reads are public (the blog page lists posts without credentials); create,
//! update and delete go through the admin endpoints.

use crate::client::{check_status, json_headers, normalize_base_url, parse_record};
use crate::envelope;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{BlogPost, BlogPostPatch, NewBlogPost};

/// Stateless client for `/blog_posts` and `/admin/blog_posts`.
#[derive(Debug, Clone)]
pub struct BlogPostsClient {
    base_url: String,
}

impl BlogPostsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/blog_posts", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/blog_posts/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &NewBlogPost) -> Result<HttpRequest, ApiError> {
        let body = envelope::wrap("blog_post", input)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/admin/blog_posts", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update(&self, id: i64, patch: &BlogPostPatch) -> Result<HttpRequest, ApiError> {
        let body = envelope::wrap("blog_post", patch)?;
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/admin/blog_posts/{id}", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/admin/blog_posts/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<BlogPost>, ApiError> {
        check_status(&response, 200)?;
        envelope::unwrap_list("blog_posts", &response.body)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<BlogPost, ApiError> {
        check_status(&response, 200)?;
        parse_record(&response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<BlogPost, ApiError> {
        check_status(&response, 201)?;
        parse_record(&response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<BlogPost, ApiError> {
        check_status(&response, 200)?;
        parse_record(&response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}
