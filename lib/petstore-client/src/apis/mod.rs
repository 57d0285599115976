//! Resource facades for the pet-store service.
//!
//! Each resource group (pets, store orders, users) exposes a facade with two
//! methods per operation:
//!
//! - `<operation>(params, options)` resolves to the decoded value,
//! - `<operation>_with_http_info(params, options)` resolves to an
//!   [`HttpInfo`](crate::HttpInfo) envelope carrying the value plus response
//!   status and headers.
//!
//! Facades are built either from an [`ApiClient`](crate::ApiClient) (using
//! the default HTTP transport) or from any implementation of the group's ops
//! trait via `with_transport`, which is how tests inject stubs and
//! applications inject custom request/response strategies.

mod pet;
pub use self::pet::{
    AddPetParams, DeletePetParams, FindPetsByStatusParams, FindPetsByTagsParams,
    GetPetByIdParams, PetApi, PetApiOps, PetHttpApi, UpdatePetParams, UpdatePetWithFormParams,
    UploadFileParams,
};

mod store;
pub use self::store::{
    DeleteOrderParams, GetInventoryParams, GetOrderByIdParams, PlaceOrderParams, StoreApi,
    StoreApiOps, StoreHttpApi,
};

mod user;
pub use self::user::{
    CreateUserParams, CreateUsersWithArrayInputParams, CreateUsersWithListInputParams,
    DeleteUserParams, GetUserByNameParams, LoginUserParams, LogoutUserParams, UpdateUserParams,
    UserApi, UserApiOps, UserHttpApi,
};
