//! # petstore-client
//!
//! Typed, asynchronous client for the sample pet-store REST service.
//!
//! The crate is organized in three layers:
//! - **[`models`]** - the data types exchanged with the service
//! - **[`ApiClient`]** - the HTTP transport (request building, execution,
//!   response decoding)
//! - **[`apis`]** - one facade per resource group ([`apis::PetApi`],
//!   [`apis::StoreApi`], [`apis::UserApi`]) with two methods per operation: a
//!   value-only form and a `_with_http_info` form that also carries response
//!   status and headers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use http::uri::Scheme;
//! use petstore_client::ApiClient;
//! use petstore_client::apis::{FindPetsByStatusParams, GetPetByIdParams, PetApi};
//! use petstore_client::models::PetStatus;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::builder()
//!     .with_scheme(Scheme::HTTPS)
//!     .with_host("petstore3.swagger.io")
//!     .with_port(443)
//!     .with_base_path("/api/v3")?
//!     .build()?;
//!
//! let pets = PetApi::new(client);
//!
//! // Value-only call form
//! let pet = pets.get_pet_by_id(GetPetByIdParams { pet_id: 5 }, None).await?;
//! println!("found {}", pet.name);
//!
//! // Metadata call form
//! let info = pets
//!     .find_pets_by_status_with_http_info(
//!         FindPetsByStatusParams {
//!             status: vec![PetStatus::Available, PetStatus::Pending],
//!         },
//!         None,
//!     )
//!     .await?;
//! println!("{} pets, status {}", info.data().len(), info.status());
//! # Ok(())
//! # }
//! ```
//!
//! ## Per-call overrides
//!
//! Every operation accepts an optional [`RequestOptions`]: populated fields
//! (base URI, extra headers, authentication, timeout) supersede the
//! client-wide defaults for that single call only.
//!
//! ## Error handling
//!
//! All failures surface as [`ApiClientError`]: network errors, non-success
//! status codes, and decode failures. The facades never retry, wrap, or
//! reinterpret an error; handle failures at the call site.

pub mod apis;
mod client;
pub mod models;

pub use client::{
    ApiCall, ApiClient, ApiClientBuilder, ApiClientError, Authentication, AuthenticationError,
    CallBody, CallHeaders, CallPath, CallQuery, CallResult, ExpectedStatusCodes, HttpFile,
    HttpInfo, MultipartForm, Output, ParamStyle, ParamValue, ParameterValue, RequestOptions,
    SecureString,
};
