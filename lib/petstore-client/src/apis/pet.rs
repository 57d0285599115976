use std::future::Future;

use crate::client::{
    ApiClient, ApiClientError, CallPath, CallQuery, HttpInfo, MultipartForm, ParamValue,
    RequestOptions,
};
use crate::models::{ApiResponse, HttpFile, Pet, PetStatus};

/// Parameters for [`PetApi::add_pet`].
#[derive(Debug, Clone, PartialEq)]
pub struct AddPetParams {
    /// Pet object that needs to be added to the store.
    pub pet: Pet,
}

/// Parameters for [`PetApi::delete_pet`].
#[derive(Debug, Clone, PartialEq)]
pub struct DeletePetParams {
    /// Pet id to delete.
    pub pet_id: i64,
    /// Value for the `api_key` header, when the deployment requires one.
    pub api_key: Option<String>,
}

/// Parameters for [`PetApi::find_pets_by_status`].
#[derive(Debug, Clone, PartialEq)]
pub struct FindPetsByStatusParams {
    /// Status values to filter by.
    pub status: Vec<PetStatus>,
}

/// Parameters for [`PetApi::find_pets_by_tags`].
#[derive(Debug, Clone, PartialEq)]
pub struct FindPetsByTagsParams {
    /// Tags to filter by.
    pub tags: Vec<String>,
}

/// Parameters for [`PetApi::get_pet_by_id`].
#[derive(Debug, Clone, PartialEq)]
pub struct GetPetByIdParams {
    /// ID of pet to return.
    pub pet_id: i64,
}

/// Parameters for [`PetApi::update_pet`].
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePetParams {
    /// Pet object replacing the stored one.
    pub pet: Pet,
}

/// Parameters for [`PetApi::update_pet_with_form`].
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePetWithFormParams {
    /// ID of pet that needs to be updated.
    pub pet_id: i64,
    /// Updated name of the pet.
    pub name: Option<String>,
    /// Updated status of the pet.
    pub status: Option<String>,
}

/// Parameters for [`PetApi::upload_file`].
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFileParams {
    /// ID of pet to update.
    pub pet_id: i64,
    /// Additional data to pass to the server.
    pub additional_metadata: Option<String>,
    /// File to upload.
    pub file: Option<HttpFile>,
}

/// Transport contract for the pet resource group.
///
/// Each method takes the operation's arguments positionally plus optional
/// per-call overrides, and resolves to the full
/// [`HttpInfo`] envelope. [`PetHttpApi`] is the HTTP implementation;
/// alternative strategies (stubs, recorders, middlewares) implement this
/// trait and plug into [`PetApi::with_transport`].
pub trait PetApiOps {
    /// Adds a new pet to the store.
    fn add_pet(
        &self,
        pet: Pet,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<Pet>, ApiClientError>> + Send;

    /// Deletes a pet.
    fn delete_pet(
        &self,
        pet_id: i64,
        api_key: Option<String>,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<()>, ApiClientError>> + Send;

    /// Finds pets by status.
    fn find_pets_by_status(
        &self,
        status: Vec<PetStatus>,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<Vec<Pet>>, ApiClientError>> + Send;

    /// Finds pets by tags.
    fn find_pets_by_tags(
        &self,
        tags: Vec<String>,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<Vec<Pet>>, ApiClientError>> + Send;

    /// Finds a pet by ID.
    fn get_pet_by_id(
        &self,
        pet_id: i64,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<Pet>, ApiClientError>> + Send;

    /// Updates an existing pet.
    fn update_pet(
        &self,
        pet: Pet,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<Pet>, ApiClientError>> + Send;

    /// Updates a pet in the store with form data.
    fn update_pet_with_form(
        &self,
        pet_id: i64,
        name: Option<String>,
        status: Option<String>,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<()>, ApiClientError>> + Send;

    /// Uploads an image for a pet.
    fn upload_file(
        &self,
        pet_id: i64,
        additional_metadata: Option<String>,
        file: Option<HttpFile>,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<ApiResponse>, ApiClientError>> + Send;
}

/// HTTP transport for the pet resource group.
#[derive(Debug, Clone)]
pub struct PetHttpApi {
    client: ApiClient,
}

impl PetHttpApi {
    /// Creates the transport over a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl PetApiOps for PetHttpApi {
    async fn add_pet(
        &self,
        pet: Pet,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<Pet>, ApiClientError> {
        let result = self
            .client
            .post("/pet")
            .json(&pet)?
            .with_options(options)
            .await?;
        result.json_with_info()
    }

    async fn delete_pet(
        &self,
        pet_id: i64,
        api_key: Option<String>,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let path = CallPath::from("/pet/{petId}").add_param("petId", ParamValue::new(pet_id));
        let mut call = self.client.delete(path);
        if let Some(api_key) = api_key {
            call = call.with_header("api_key", api_key);
        }
        let result = call.with_options(options).await?;
        result.empty_with_info()
    }

    async fn find_pets_by_status(
        &self,
        status: Vec<PetStatus>,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<Vec<Pet>>, ApiClientError> {
        let query = CallQuery::new().add_param("status", ParamValue::new(status));
        let result = self
            .client
            .get("/pet/findByStatus")
            .with_query(query)
            .with_options(options)
            .await?;
        result.json_with_info()
    }

    async fn find_pets_by_tags(
        &self,
        tags: Vec<String>,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<Vec<Pet>>, ApiClientError> {
        let query = CallQuery::new().add_param("tags", ParamValue::new(tags));
        let result = self
            .client
            .get("/pet/findByTags")
            .with_query(query)
            .with_options(options)
            .await?;
        result.json_with_info()
    }

    async fn get_pet_by_id(
        &self,
        pet_id: i64,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<Pet>, ApiClientError> {
        let path = CallPath::from("/pet/{petId}").add_param("petId", ParamValue::new(pet_id));
        let result = self.client.get(path).with_options(options).await?;
        result.json_with_info()
    }

    async fn update_pet(
        &self,
        pet: Pet,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<Pet>, ApiClientError> {
        let result = self
            .client
            .put("/pet")
            .json(&pet)?
            .with_options(options)
            .await?;
        result.json_with_info()
    }

    async fn update_pet_with_form(
        &self,
        pet_id: i64,
        name: Option<String>,
        status: Option<String>,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let path = CallPath::from("/pet/{petId}").add_param("petId", ParamValue::new(pet_id));

        // Only the fields that are actually set go on the wire
        let mut fields: Vec<(&str, String)> = Vec::new();
        if let Some(name) = name {
            fields.push(("name", name));
        }
        if let Some(status) = status {
            fields.push(("status", status));
        }

        let result = self
            .client
            .post(path)
            .form(&fields)?
            .with_options(options)
            .await?;
        result.empty_with_info()
    }

    async fn upload_file(
        &self,
        pet_id: i64,
        additional_metadata: Option<String>,
        file: Option<HttpFile>,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<ApiResponse>, ApiClientError> {
        let path = CallPath::from("/pet/{petId}/uploadImage")
            .add_param("petId", ParamValue::new(pet_id));

        let mut form = MultipartForm::new();
        if let Some(additional_metadata) = additional_metadata {
            form = form.add_text("additionalMetadata", additional_metadata);
        }
        if let Some(file) = file {
            form = form.add_file("file", file);
        }

        let result = self
            .client
            .post(path)
            .multipart(form)
            .with_options(options)
            .await?;
        result.json_with_info()
    }
}

/// Facade over the pet operations of the store.
///
/// Every operation comes in two forms: `<operation>` resolves to the decoded
/// value alone, and `<operation>_with_http_info` to an [`HttpInfo`] envelope
/// carrying the value plus response status and headers. Both forms take the
/// operation's parameter record and optional per-call [`RequestOptions`], and
/// observe identical success/failure behavior for the same inputs.
///
/// The facade holds exactly one transport and no per-call state, so a single
/// instance can serve concurrent calls.
///
/// # Example
///
/// ```rust,no_run
/// use petstore_client::ApiClient;
/// use petstore_client::apis::{GetPetByIdParams, PetApi};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder().with_host("petstore.example.com").build()?;
/// let api = PetApi::new(client);
///
/// let pet = api.get_pet_by_id(GetPetByIdParams { pet_id: 5 }, None).await?;
/// println!("found {}", pet.name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PetApi<T = PetHttpApi> {
    api: T,
}

impl PetApi {
    /// Creates the facade with the default HTTP transport.
    pub fn new(client: ApiClient) -> Self {
        Self {
            api: PetHttpApi::new(client),
        }
    }
}

impl<T> PetApi<T>
where
    T: PetApiOps,
{
    /// Creates the facade over a custom transport strategy.
    pub fn with_transport(api: T) -> Self {
        Self { api }
    }

    /// Adds a new pet to the store, returning the stored pet with response metadata.
    pub async fn add_pet_with_http_info(
        &self,
        params: AddPetParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<Pet>, ApiClientError> {
        let AddPetParams { pet } = params;
        self.api.add_pet(pet, options).await
    }

    /// Adds a new pet to the store.
    pub async fn add_pet(
        &self,
        params: AddPetParams,
        options: Option<RequestOptions>,
    ) -> Result<Pet, ApiClientError> {
        self.add_pet_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Deletes a pet, returning the response metadata.
    pub async fn delete_pet_with_http_info(
        &self,
        params: DeletePetParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let DeletePetParams { pet_id, api_key } = params;
        self.api.delete_pet(pet_id, api_key, options).await
    }

    /// Deletes a pet.
    pub async fn delete_pet(
        &self,
        params: DeletePetParams,
        options: Option<RequestOptions>,
    ) -> Result<(), ApiClientError> {
        self.delete_pet_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Finds pets by status, with response metadata.
    ///
    /// Multiple status values can be provided.
    pub async fn find_pets_by_status_with_http_info(
        &self,
        params: FindPetsByStatusParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<Vec<Pet>>, ApiClientError> {
        let FindPetsByStatusParams { status } = params;
        self.api.find_pets_by_status(status, options).await
    }

    /// Finds pets by status.
    ///
    /// Multiple status values can be provided.
    pub async fn find_pets_by_status(
        &self,
        params: FindPetsByStatusParams,
        options: Option<RequestOptions>,
    ) -> Result<Vec<Pet>, ApiClientError> {
        self.find_pets_by_status_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Finds pets by tags, with response metadata.
    pub async fn find_pets_by_tags_with_http_info(
        &self,
        params: FindPetsByTagsParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<Vec<Pet>>, ApiClientError> {
        let FindPetsByTagsParams { tags } = params;
        self.api.find_pets_by_tags(tags, options).await
    }

    /// Finds pets by tags.
    pub async fn find_pets_by_tags(
        &self,
        params: FindPetsByTagsParams,
        options: Option<RequestOptions>,
    ) -> Result<Vec<Pet>, ApiClientError> {
        self.find_pets_by_tags_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Finds a pet by ID, with response metadata.
    pub async fn get_pet_by_id_with_http_info(
        &self,
        params: GetPetByIdParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<Pet>, ApiClientError> {
        let GetPetByIdParams { pet_id } = params;
        self.api.get_pet_by_id(pet_id, options).await
    }

    /// Finds a pet by ID.
    pub async fn get_pet_by_id(
        &self,
        params: GetPetByIdParams,
        options: Option<RequestOptions>,
    ) -> Result<Pet, ApiClientError> {
        self.get_pet_by_id_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Updates an existing pet, returning the stored pet with response metadata.
    pub async fn update_pet_with_http_info(
        &self,
        params: UpdatePetParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<Pet>, ApiClientError> {
        let UpdatePetParams { pet } = params;
        self.api.update_pet(pet, options).await
    }

    /// Updates an existing pet.
    pub async fn update_pet(
        &self,
        params: UpdatePetParams,
        options: Option<RequestOptions>,
    ) -> Result<Pet, ApiClientError> {
        self.update_pet_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Updates a pet in the store with form data, returning the response metadata.
    pub async fn update_pet_with_form_with_http_info(
        &self,
        params: UpdatePetWithFormParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let UpdatePetWithFormParams {
            pet_id,
            name,
            status,
        } = params;
        self.api
            .update_pet_with_form(pet_id, name, status, options)
            .await
    }

    /// Updates a pet in the store with form data.
    pub async fn update_pet_with_form(
        &self,
        params: UpdatePetWithFormParams,
        options: Option<RequestOptions>,
    ) -> Result<(), ApiClientError> {
        self.update_pet_with_form_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Uploads an image for a pet, with response metadata.
    pub async fn upload_file_with_http_info(
        &self,
        params: UploadFileParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<ApiResponse>, ApiClientError> {
        let UploadFileParams {
            pet_id,
            additional_metadata,
            file,
        } = params;
        self.api
            .upload_file(pet_id, additional_metadata, file, options)
            .await
    }

    /// Uploads an image for a pet.
    pub async fn upload_file(
        &self,
        params: UploadFileParams,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse, ApiClientError> {
        self.upload_file_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }
}
