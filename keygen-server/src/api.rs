use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, ResponseError, get, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use keygen_core::site::{meta_description, page_title, render_sitemap, sitemap, title_to_slug};
use keygen_core::{GenerateError, Generated, GenerationOptions, GeneratorDescriptor, Producer};

/// Read-only state shared by every worker.
pub struct AppState {
	pub producer: Producer,
	pub base_url: String,
}

/// Struct representing query parameters for the `/v1/generate/{id}` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	length: Option<i64>,
	count: Option<usize>,
}

#[derive(Serialize)]
struct GenerateResponse {
	id: String,
	values: Vec<String>,
}

/// Descriptor as exposed over HTTP, with its page metadata.
#[derive(Serialize)]
struct GeneratorView<'a> {
	#[serde(flatten)]
	descriptor: &'a GeneratorDescriptor,
	path: &'static str,
	slug: String,
	page_title: String,
	meta_description: String,
}

impl<'a> From<&'a GeneratorDescriptor> for GeneratorView<'a> {
	fn from(descriptor: &'a GeneratorDescriptor) -> Self {
		Self {
			descriptor,
			path: descriptor.path(),
			slug: title_to_slug(&descriptor.title),
			page_title: page_title(&descriptor.title),
			meta_description: meta_description(&descriptor.title, &descriptor.description),
		}
	}
}

/// Errors returned by the API, always as a JSON `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("generator not found: {0}")]
	NotFound(String),

	#[error(transparent)]
	Generate(#[from] GenerateError),
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::NotFound(_) | ApiError::Generate(GenerateError::UnsupportedGenerator(_)) => StatusCode::NOT_FOUND,
			ApiError::Generate(GenerateError::InvalidOption { .. }) => StatusCode::BAD_REQUEST,
			ApiError::Generate(GenerateError::WeakEntropy(_)) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		if self.status_code().is_server_error() {
			log::error!("{self}");
		}
		HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
	}
}

/// HTTP GET endpoint `/v1/generators`
///
/// Lists every generator in catalog order.
#[get("/v1/generators")]
async fn list_generators(data: web::Data<AppState>) -> impl Responder {
	let views: Vec<GeneratorView> = data.producer.catalog().list().iter().map(GeneratorView::from).collect();
	HttpResponse::Ok().json(views)
}

#[get("/v1/generators/primary")]
async fn get_primary(data: web::Data<AppState>) -> impl Responder {
	HttpResponse::Ok().json(GeneratorView::from(data.producer.catalog().primary()))
}

#[get("/v1/generators/{id}")]
async fn get_generator(data: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
	let id = path.into_inner();
	match data.producer.catalog().get(&id) {
		Some(descriptor) => Ok(HttpResponse::Ok().json(GeneratorView::from(descriptor))),
		None => Err(ApiError::NotFound(id)),
	}
}

/// HTTP GET endpoint `/v1/generate/{id}`
///
/// Generates `count` values (default 1, at most `MAX_COUNT`) with an optional `length`.
#[get("/v1/generate/{id}")]
async fn generate(
	data: web::Data<AppState>,
	path: web::Path<String>,
	query: web::Query<GenerateParams>,
) -> Result<HttpResponse, ApiError> {
	let id = path.into_inner();
	let count = query.count.unwrap_or(1);
	let options = query.length.map(GenerationOptions::with_length);
	let values = data
		.producer
		.generate_many(&id, options.as_ref(), count)?
		.into_iter()
		.map(Generated::into_value)
		.collect();

	Ok(HttpResponse::Ok().json(GenerateResponse { id, values }))
}

#[get("/v1/paths/{id}")]
async fn get_path(data: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
	let id = path.into_inner();
	match data.producer.catalog().path_for(&id) {
		Some(page) => Ok(HttpResponse::Ok().json(json!({ "id": id, "path": page }))),
		None => Err(ApiError::NotFound(id)),
	}
}

#[get("/sitemap.xml")]
async fn get_sitemap(data: web::Data<AppState>) -> impl Responder {
	let entries = sitemap(&data.base_url, data.producer.catalog());
	HttpResponse::Ok()
		.content_type("application/xml; charset=utf-8")
		.body(render_sitemap(&entries))
}

/// Registers every endpoint. `primary` is registered before `{id}` so it is not shadowed.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(list_generators)
		.service(get_primary)
		.service(get_generator)
		.service(generate)
		.service(get_path)
		.service(get_sitemap);
}
