//! In-memory mock of the Garden of Ancients backend.
//!
//! Mirrors the remote Rails API closely enough for the client core's
//! integration tests: enveloped write payloads, integer booking statuses,
//! server-assigned ids and timestamps, and list endpoints that nest their
//! arrays under the plural resource key. Password reset codes are echoed in
//! the response body so tests can complete the flow without an email inbox.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub number_of_people: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// 0 pending, 1 confirmed, 2 completed, 3 cancelled.
    pub status: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewBooking {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub number_of_people: u32,
    #[serde(default)]
    pub special_requests: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BookingPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub service: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub number_of_people: Option<u32>,
    pub special_requests: Option<String>,
    pub status: Option<u8>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub author: String,
    pub blog_topic: String,
    pub content: String,
    pub category: String,
    pub blog_picture: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewBlogPost {
    pub author: String,
    pub blog_topic: String,
    pub content: String,
    pub category: String,
    pub blog_picture: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct BlogPostPatch {
    pub author: Option<String>,
    pub blog_topic: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub blog_picture: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewContact {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

// Envelope parameter types, one per resource key.

#[derive(Debug, Deserialize)]
pub struct BookingParams {
    pub booking: NewBooking,
}

#[derive(Debug, Deserialize)]
pub struct BookingPatchParams {
    pub booking: BookingPatch,
}

#[derive(Debug, Deserialize)]
pub struct BlogPostParams {
    pub blog_post: NewBlogPost,
}

#[derive(Debug, Deserialize)]
pub struct BlogPostPatchParams {
    pub blog_post: BlogPostPatch,
}

#[derive(Debug, Deserialize)]
pub struct ContactParams {
    pub contact: NewContact,
}

#[derive(Debug, Deserialize)]
pub struct SubscriberParams {
    pub subscriber: SubscriberEmail,
}

#[derive(Debug, Deserialize)]
pub struct SubscriberEmail {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordResetRequestParams {
    pub admin: AdminEmail,
}

#[derive(Debug, Deserialize)]
pub struct AdminEmail {
    pub email: String,
}

/// Flat body of `PUT /admin/password`; this endpoint takes no envelope.
#[derive(Debug, Deserialize)]
pub struct PasswordResetParams {
    pub email: String,
    pub code: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Default)]
pub struct Store {
    bookings: HashMap<i64, Booking>,
    blog_posts: HashMap<i64, BlogPost>,
    contacts: HashMap<i64, Contact>,
    subscribers: Vec<String>,
    reset_codes: HashMap<String, String>,
    next_id: i64,
    next_code: u32,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn next_reset_code(&mut self) -> String {
        self.next_code += 1;
        format!("C{:05}", self.next_code)
    }
}

pub type Db = Arc<RwLock<Store>>;

type ErrorResponse = (StatusCode, Json<Value>);

fn not_found() -> ErrorResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"})))
}

fn unprocessable(message: &str) -> ErrorResponse {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({"error": message})),
    )
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/bookings", get(list_bookings_public).post(create_booking))
        .route("/admin/bookings", get(list_bookings_admin))
        .route(
            "/admin/bookings/{id}",
            get(get_booking).patch(update_booking).delete(delete_booking),
        )
        .route("/blog_posts", get(list_blog_posts))
        .route("/blog_posts/{id}", get(get_blog_post))
        .route("/admin/blog_posts", post(create_blog_post))
        .route(
            "/admin/blog_posts/{id}",
            patch(update_blog_post).delete(delete_blog_post),
        )
        .route("/contacts", post(create_contact))
        .route("/admin/contacts", get(list_contacts))
        .route(
            "/admin/contacts/{id}",
            get(get_contact).delete(delete_contact),
        )
        .route("/subscribers", post(create_subscriber))
        .route("/admin/passwords", post(request_password_reset))
        .route("/admin/password", put(confirm_password_reset))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn sorted_by_id<T: Clone>(map: &HashMap<i64, T>) -> Vec<T> {
    let mut ids: Vec<&i64> = map.keys().collect();
    ids.sort();
    ids.into_iter().map(|id| map[id].clone()).collect()
}

// --- bookings ---

async fn list_bookings_public(State(db): State<Db>) -> Json<Vec<Booking>> {
    let store = db.read().await;
    Json(sorted_by_id(&store.bookings))
}

async fn list_bookings_admin(State(db): State<Db>) -> Json<Value> {
    let store = db.read().await;
    Json(json!({ "bookings": sorted_by_id(&store.bookings) }))
}

async fn create_booking(
    State(db): State<Db>,
    Json(params): Json<BookingParams>,
) -> (StatusCode, Json<Booking>) {
    let mut store = db.write().await;
    let now = Utc::now();
    let input = params.booking;
    let booking = Booking {
        id: store.next_id(),
        full_name: input.full_name,
        email: input.email,
        phone_number: input.phone_number,
        service: input.service,
        date: input.date,
        time: input.time,
        number_of_people: input.number_of_people,
        special_requests: input.special_requests,
        status: 0,
        created_at: now,
        updated_at: now,
    };
    store.bookings.insert(booking.id, booking.clone());
    (StatusCode::CREATED, Json(booking))
}

async fn get_booking(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Booking>, ErrorResponse> {
    let store = db.read().await;
    store
        .bookings
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(not_found)
}

async fn update_booking(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(params): Json<BookingPatchParams>,
) -> Result<Json<Booking>, ErrorResponse> {
    let patch = params.booking;
    if matches!(patch.status, Some(s) if s > 3) {
        return Err(unprocessable("Status must be between 0 and 3"));
    }
    let mut store = db.write().await;
    let booking = store.bookings.get_mut(&id).ok_or_else(not_found)?;
    if let Some(full_name) = patch.full_name {
        booking.full_name = full_name;
    }
    if let Some(email) = patch.email {
        booking.email = email;
    }
    if let Some(phone_number) = patch.phone_number {
        booking.phone_number = phone_number;
    }
    if let Some(service) = patch.service {
        booking.service = service;
    }
    if let Some(date) = patch.date {
        booking.date = date;
    }
    if let Some(time) = patch.time {
        booking.time = time;
    }
    if let Some(number_of_people) = patch.number_of_people {
        booking.number_of_people = number_of_people;
    }
    if let Some(special_requests) = patch.special_requests {
        booking.special_requests = Some(special_requests);
    }
    if let Some(status) = patch.status {
        booking.status = status;
    }
    booking.updated_at = Utc::now();
    Ok(Json(booking.clone()))
}

async fn delete_booking(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ErrorResponse> {
    let mut store = db.write().await;
    store
        .bookings
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(not_found)
}

// --- blog posts ---

async fn list_blog_posts(State(db): State<Db>) -> Json<Value> {
    let store = db.read().await;
    Json(json!({ "blog_posts": sorted_by_id(&store.blog_posts) }))
}

async fn get_blog_post(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<BlogPost>, ErrorResponse> {
    let store = db.read().await;
    store
        .blog_posts
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(not_found)
}

async fn create_blog_post(
    State(db): State<Db>,
    Json(params): Json<BlogPostParams>,
) -> (StatusCode, Json<BlogPost>) {
    let mut store = db.write().await;
    let now = Utc::now();
    let input = params.blog_post;
    let post = BlogPost {
        id: store.next_id(),
        author: input.author,
        blog_topic: input.blog_topic,
        content: input.content,
        category: input.category,
        blog_picture: input.blog_picture,
        created_at: now,
        updated_at: now,
    };
    store.blog_posts.insert(post.id, post.clone());
    (StatusCode::CREATED, Json(post))
}

async fn update_blog_post(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(params): Json<BlogPostPatchParams>,
) -> Result<Json<BlogPost>, ErrorResponse> {
    let mut store = db.write().await;
    let post = store.blog_posts.get_mut(&id).ok_or_else(not_found)?;
    let patch = params.blog_post;
    if let Some(author) = patch.author {
        post.author = author;
    }
    if let Some(blog_topic) = patch.blog_topic {
        post.blog_topic = blog_topic;
    }
    if let Some(content) = patch.content {
        post.content = content;
    }
    if let Some(category) = patch.category {
        post.category = category;
    }
    if let Some(blog_picture) = patch.blog_picture {
        post.blog_picture = blog_picture;
    }
    post.updated_at = Utc::now();
    Ok(Json(post.clone()))
}

async fn delete_blog_post(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ErrorResponse> {
    let mut store = db.write().await;
    store
        .blog_posts
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(not_found)
}

// --- contacts ---

async fn create_contact(
    State(db): State<Db>,
    Json(params): Json<ContactParams>,
) -> (StatusCode, Json<Contact>) {
    let mut store = db.write().await;
    let now = Utc::now();
    let input = params.contact;
    let contact = Contact {
        id: store.next_id(),
        full_name: input.full_name,
        email: input.email,
        phone_number: input.phone_number,
        organization: input.organization,
        subject: input.subject,
        message: input.message,
        created_at: now,
        updated_at: now,
    };
    store.contacts.insert(contact.id, contact.clone());
    (StatusCode::CREATED, Json(contact))
}

async fn list_contacts(State(db): State<Db>) -> Json<Value> {
    let store = db.read().await;
    Json(json!({ "contacts": sorted_by_id(&store.contacts) }))
}

async fn get_contact(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Contact>, ErrorResponse> {
    let store = db.read().await;
    store
        .contacts
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(not_found)
}

async fn delete_contact(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ErrorResponse> {
    let mut store = db.write().await;
    store
        .contacts
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(not_found)
}

// --- subscribers ---

async fn create_subscriber(
    State(db): State<Db>,
    Json(params): Json<SubscriberParams>,
) -> Result<(StatusCode, Json<Value>), ErrorResponse> {
    let email = params.subscriber.email;
    if !email.contains('@') {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"errors": ["Email is invalid"]})),
        ));
    }
    let mut store = db.write().await;
    if store.subscribers.contains(&email) {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"errors": ["Email has already been taken"]})),
        ));
    }
    store.subscribers.push(email.clone());
    Ok((
        StatusCode::CREATED,
        Json(json!({"subscriber": {"email": email}})),
    ))
}

// --- password reset ---

async fn request_password_reset(
    State(db): State<Db>,
    Json(params): Json<PasswordResetRequestParams>,
) -> Json<Value> {
    let mut store = db.write().await;
    let code = store.next_reset_code();
    let email = params.admin.email;
    store.reset_codes.insert(email.clone(), code.clone());
    tracing::info!(%email, "issued password reset code");
    // The code rides along in the body so tests can finish the flow.
    Json(json!({"message": "Reset instructions sent", "code": code}))
}

async fn confirm_password_reset(
    State(db): State<Db>,
    Json(params): Json<PasswordResetParams>,
) -> Result<Json<Value>, ErrorResponse> {
    if params.password != params.password_confirmation {
        return Err(unprocessable("Password confirmation doesn't match"));
    }
    let mut store = db.write().await;
    match store.reset_codes.get(&params.email) {
        Some(code) if *code == params.code => {
            store.reset_codes.remove(&params.email);
            Ok(Json(json!({"message": "Password updated"})))
        }
        _ => Err(unprocessable("Invalid or expired reset code")),
    }
}
