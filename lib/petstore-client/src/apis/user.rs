use std::future::Future;

use crate::client::{
    ApiClient, ApiClientError, CallPath, CallQuery, HttpInfo, ParamValue, RequestOptions,
};
use crate::models::User;

/// Parameters for [`UserApi::create_user`].
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserParams {
    /// Created user object.
    pub user: User,
}

/// Parameters for [`UserApi::create_users_with_array_input`].
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUsersWithArrayInputParams {
    /// List of user objects.
    pub user: Vec<User>,
}

/// Parameters for [`UserApi::create_users_with_list_input`].
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUsersWithListInputParams {
    /// List of user objects.
    pub user: Vec<User>,
}

/// Parameters for [`UserApi::delete_user`].
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteUserParams {
    /// The name of the user to delete.
    pub username: String,
}

/// Parameters for [`UserApi::get_user_by_name`].
#[derive(Debug, Clone, PartialEq)]
pub struct GetUserByNameParams {
    /// The name of the user to fetch.
    pub username: String,
}

/// Parameters for [`UserApi::login_user`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoginUserParams {
    /// The user name for login.
    pub username: String,
    /// The password for login, in clear text.
    pub password: String,
}

/// Parameters for [`UserApi::logout_user`].
///
/// The operation takes no inputs; see
/// [`GetInventoryParams`](super::GetInventoryParams) for the empty-record
/// convention.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogoutUserParams {}

/// Parameters for [`UserApi::update_user`].
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateUserParams {
    /// The name of the user to update.
    pub username: String,
    /// Updated user object.
    pub user: User,
}

/// Transport contract for the user resource group.
///
/// See [`PetApiOps`](super::PetApiOps) for the conventions shared by all
/// resource transports.
pub trait UserApiOps {
    /// Creates a user.
    fn create_user(
        &self,
        user: User,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<()>, ApiClientError>> + Send;

    /// Creates a list of users from an array input.
    fn create_users_with_array_input(
        &self,
        user: Vec<User>,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<()>, ApiClientError>> + Send;

    /// Creates a list of users from a list input.
    fn create_users_with_list_input(
        &self,
        user: Vec<User>,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<()>, ApiClientError>> + Send;

    /// Deletes a user.
    fn delete_user(
        &self,
        username: String,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<()>, ApiClientError>> + Send;

    /// Fetches a user by user name.
    fn get_user_by_name(
        &self,
        username: String,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<User>, ApiClientError>> + Send;

    /// Logs a user into the system, resolving to the session token.
    fn login_user(
        &self,
        username: String,
        password: String,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<String>, ApiClientError>> + Send;

    /// Logs out the currently logged-in user session.
    fn logout_user(
        &self,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<()>, ApiClientError>> + Send;

    /// Updates a user.
    fn update_user(
        &self,
        username: String,
        user: User,
        options: Option<RequestOptions>,
    ) -> impl Future<Output = Result<HttpInfo<()>, ApiClientError>> + Send;
}

/// HTTP transport for the user resource group.
#[derive(Debug, Clone)]
pub struct UserHttpApi {
    client: ApiClient,
}

impl UserHttpApi {
    /// Creates the transport over a shared [`ApiClient`].
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl UserApiOps for UserHttpApi {
    async fn create_user(
        &self,
        user: User,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let result = self
            .client
            .post("/user")
            .json(&user)?
            .with_options(options)
            .await?;
        result.empty_with_info()
    }

    async fn create_users_with_array_input(
        &self,
        user: Vec<User>,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let result = self
            .client
            .post("/user/createWithArray")
            .json(&user)?
            .with_options(options)
            .await?;
        result.empty_with_info()
    }

    async fn create_users_with_list_input(
        &self,
        user: Vec<User>,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let result = self
            .client
            .post("/user/createWithList")
            .json(&user)?
            .with_options(options)
            .await?;
        result.empty_with_info()
    }

    async fn delete_user(
        &self,
        username: String,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let path =
            CallPath::from("/user/{username}").add_param("username", ParamValue::new(username));
        let result = self.client.delete(path).with_options(options).await?;
        result.empty_with_info()
    }

    async fn get_user_by_name(
        &self,
        username: String,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<User>, ApiClientError> {
        let path =
            CallPath::from("/user/{username}").add_param("username", ParamValue::new(username));
        let result = self.client.get(path).with_options(options).await?;
        result.json_with_info()
    }

    async fn login_user(
        &self,
        username: String,
        password: String,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<String>, ApiClientError> {
        let query = CallQuery::new()
            .add_param("username", ParamValue::new(username))
            .add_param("password", ParamValue::new(password));
        let result = self
            .client
            .get("/user/login")
            .with_query(query)
            .with_options(options)
            .await?;
        // The service returns the session token as a JSON string
        result.json_with_info()
    }

    async fn logout_user(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let result = self
            .client
            .get("/user/logout")
            .with_options(options)
            .await?;
        result.empty_with_info()
    }

    async fn update_user(
        &self,
        username: String,
        user: User,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let path =
            CallPath::from("/user/{username}").add_param("username", ParamValue::new(username));
        let result = self
            .client
            .put(path)
            .json(&user)?
            .with_options(options)
            .await?;
        result.empty_with_info()
    }
}

/// Facade over the user operations.
///
/// Follows the same two-call-shape convention as [`PetApi`](super::PetApi):
/// a value-only method and a `_with_http_info` sibling per operation.
#[derive(Debug, Clone)]
pub struct UserApi<T = UserHttpApi> {
    api: T,
}

impl UserApi {
    /// Creates the facade with the default HTTP transport.
    pub fn new(client: ApiClient) -> Self {
        Self {
            api: UserHttpApi::new(client),
        }
    }
}

impl<T> UserApi<T>
where
    T: UserApiOps,
{
    /// Creates the facade over a custom transport strategy.
    pub fn with_transport(api: T) -> Self {
        Self { api }
    }

    /// Creates a user, returning the response metadata.
    ///
    /// This can only be done by the logged-in user.
    pub async fn create_user_with_http_info(
        &self,
        params: CreateUserParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let CreateUserParams { user } = params;
        self.api.create_user(user, options).await
    }

    /// Creates a user.
    ///
    /// This can only be done by the logged-in user.
    pub async fn create_user(
        &self,
        params: CreateUserParams,
        options: Option<RequestOptions>,
    ) -> Result<(), ApiClientError> {
        self.create_user_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Creates a list of users from an array input, with response metadata.
    pub async fn create_users_with_array_input_with_http_info(
        &self,
        params: CreateUsersWithArrayInputParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let CreateUsersWithArrayInputParams { user } = params;
        self.api.create_users_with_array_input(user, options).await
    }

    /// Creates a list of users from an array input.
    pub async fn create_users_with_array_input(
        &self,
        params: CreateUsersWithArrayInputParams,
        options: Option<RequestOptions>,
    ) -> Result<(), ApiClientError> {
        self.create_users_with_array_input_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Creates a list of users from a list input, with response metadata.
    pub async fn create_users_with_list_input_with_http_info(
        &self,
        params: CreateUsersWithListInputParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let CreateUsersWithListInputParams { user } = params;
        self.api.create_users_with_list_input(user, options).await
    }

    /// Creates a list of users from a list input.
    pub async fn create_users_with_list_input(
        &self,
        params: CreateUsersWithListInputParams,
        options: Option<RequestOptions>,
    ) -> Result<(), ApiClientError> {
        self.create_users_with_list_input_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Deletes a user, returning the response metadata.
    ///
    /// This can only be done by the logged-in user.
    pub async fn delete_user_with_http_info(
        &self,
        params: DeleteUserParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let DeleteUserParams { username } = params;
        self.api.delete_user(username, options).await
    }

    /// Deletes a user.
    ///
    /// This can only be done by the logged-in user.
    pub async fn delete_user(
        &self,
        params: DeleteUserParams,
        options: Option<RequestOptions>,
    ) -> Result<(), ApiClientError> {
        self.delete_user_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Fetches a user by user name, with response metadata.
    pub async fn get_user_by_name_with_http_info(
        &self,
        params: GetUserByNameParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<User>, ApiClientError> {
        let GetUserByNameParams { username } = params;
        self.api.get_user_by_name(username, options).await
    }

    /// Fetches a user by user name.
    pub async fn get_user_by_name(
        &self,
        params: GetUserByNameParams,
        options: Option<RequestOptions>,
    ) -> Result<User, ApiClientError> {
        self.get_user_by_name_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Logs a user into the system, resolving to the session token with
    /// response metadata.
    pub async fn login_user_with_http_info(
        &self,
        params: LoginUserParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<String>, ApiClientError> {
        let LoginUserParams { username, password } = params;
        self.api.login_user(username, password, options).await
    }

    /// Logs a user into the system, resolving to the session token.
    pub async fn login_user(
        &self,
        params: LoginUserParams,
        options: Option<RequestOptions>,
    ) -> Result<String, ApiClientError> {
        self.login_user_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Logs out the currently logged-in user session, with response metadata.
    pub async fn logout_user_with_http_info(
        &self,
        params: Option<LogoutUserParams>,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let LogoutUserParams {} = params.unwrap_or_default();
        self.api.logout_user(options).await
    }

    /// Logs out the currently logged-in user session.
    pub async fn logout_user(
        &self,
        params: Option<LogoutUserParams>,
        options: Option<RequestOptions>,
    ) -> Result<(), ApiClientError> {
        self.logout_user_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }

    /// Updates a user, returning the response metadata.
    ///
    /// This can only be done by the logged-in user.
    pub async fn update_user_with_http_info(
        &self,
        params: UpdateUserParams,
        options: Option<RequestOptions>,
    ) -> Result<HttpInfo<()>, ApiClientError> {
        let UpdateUserParams { username, user } = params;
        self.api.update_user(username, user, options).await
    }

    /// Updates a user.
    ///
    /// This can only be done by the logged-in user.
    pub async fn update_user(
        &self,
        params: UpdateUserParams,
        options: Option<RequestOptions>,
    ) -> Result<(), ApiClientError> {
        self.update_user_with_http_info(params, options)
            .await
            .map(HttpInfo::into_data)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use http::{HeaderMap, StatusCode};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Recorded {
        CreateUser { user: User },
        CreateUsersWithArrayInput { user: Vec<User> },
        CreateUsersWithListInput { user: Vec<User> },
        DeleteUser { username: String },
        GetUserByName { username: String },
        LoginUser { username: String, password: String },
        LogoutUser,
        UpdateUser { username: String, user: User },
    }

    #[derive(Debug, Default)]
    struct RecordingUserApi {
        calls: Mutex<Vec<Recorded>>,
    }

    impl RecordingUserApi {
        fn record(&self, call: Recorded) {
            self.calls.lock().expect("not poisoned").push(call);
        }

        fn calls(&self) -> Vec<Recorded> {
            self.calls.lock().expect("not poisoned").clone()
        }
    }

    impl UserApiOps for RecordingUserApi {
        async fn create_user(
            &self,
            user: User,
            _options: Option<RequestOptions>,
        ) -> Result<HttpInfo<()>, ApiClientError> {
            self.record(Recorded::CreateUser { user });
            Ok(HttpInfo::new(StatusCode::OK, HeaderMap::new(), ()))
        }

        async fn create_users_with_array_input(
            &self,
            user: Vec<User>,
            _options: Option<RequestOptions>,
        ) -> Result<HttpInfo<()>, ApiClientError> {
            self.record(Recorded::CreateUsersWithArrayInput { user });
            Ok(HttpInfo::new(StatusCode::OK, HeaderMap::new(), ()))
        }

        async fn create_users_with_list_input(
            &self,
            user: Vec<User>,
            _options: Option<RequestOptions>,
        ) -> Result<HttpInfo<()>, ApiClientError> {
            self.record(Recorded::CreateUsersWithListInput { user });
            Ok(HttpInfo::new(StatusCode::OK, HeaderMap::new(), ()))
        }

        async fn delete_user(
            &self,
            username: String,
            _options: Option<RequestOptions>,
        ) -> Result<HttpInfo<()>, ApiClientError> {
            self.record(Recorded::DeleteUser { username });
            Ok(HttpInfo::new(StatusCode::OK, HeaderMap::new(), ()))
        }

        async fn get_user_by_name(
            &self,
            username: String,
            _options: Option<RequestOptions>,
        ) -> Result<HttpInfo<User>, ApiClientError> {
            self.record(Recorded::GetUserByName {
                username: username.clone(),
            });
            let user = User {
                username: Some(username),
                ..User::default()
            };
            Ok(HttpInfo::new(StatusCode::OK, HeaderMap::new(), user))
        }

        async fn login_user(
            &self,
            username: String,
            password: String,
            _options: Option<RequestOptions>,
        ) -> Result<HttpInfo<String>, ApiClientError> {
            self.record(Recorded::LoginUser { username, password });
            Ok(HttpInfo::new(
                StatusCode::OK,
                HeaderMap::new(),
                "logged in user session:12345".to_string(),
            ))
        }

        async fn logout_user(
            &self,
            _options: Option<RequestOptions>,
        ) -> Result<HttpInfo<()>, ApiClientError> {
            self.record(Recorded::LogoutUser);
            Ok(HttpInfo::new(StatusCode::OK, HeaderMap::new(), ()))
        }

        async fn update_user(
            &self,
            username: String,
            user: User,
            _options: Option<RequestOptions>,
        ) -> Result<HttpInfo<()>, ApiClientError> {
            self.record(Recorded::UpdateUser { username, user });
            Ok(HttpInfo::new(StatusCode::OK, HeaderMap::new(), ()))
        }
    }

    #[tokio::test]
    async fn test_login_user_forwards_credentials_positionally() {
        let api = UserApi::with_transport(RecordingUserApi::default());

        let session = api
            .login_user(
                LoginUserParams {
                    username: "user1".to_string(),
                    password: "XXXXXXXXXXX".to_string(),
                },
                None,
            )
            .await
            .expect("stubbed success");

        assert_eq!(session, "logged in user session:12345");
        assert_eq!(
            api.api.calls(),
            vec![Recorded::LoginUser {
                username: "user1".to_string(),
                password: "XXXXXXXXXXX".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_logout_user_with_omitted_record() {
        let api = UserApi::with_transport(RecordingUserApi::default());

        api.logout_user(None, None).await.expect("stubbed success");
        api.logout_user(Some(LogoutUserParams::default()), None)
            .await
            .expect("stubbed success");

        assert_eq!(
            api.api.calls(),
            vec![Recorded::LogoutUser, Recorded::LogoutUser]
        );
    }

    #[tokio::test]
    async fn test_update_user_forwards_username_and_body() {
        let api = UserApi::with_transport(RecordingUserApi::default());
        let user = User {
            email: Some("user1@example.com".to_string()),
            ..User::default()
        };

        api.update_user(
            UpdateUserParams {
                username: "user1".to_string(),
                user: user.clone(),
            },
            None,
        )
        .await
        .expect("stubbed success");

        assert_eq!(
            api.api.calls(),
            vec![Recorded::UpdateUser {
                username: "user1".to_string(),
                user
            }]
        );
    }

    #[tokio::test]
    async fn test_create_users_with_list_input_forwards_all_users() {
        let api = UserApi::with_transport(RecordingUserApi::default());
        let users = vec![
            User {
                username: Some("a".to_string()),
                ..User::default()
            },
            User {
                username: Some("b".to_string()),
                ..User::default()
            },
        ];

        api.create_users_with_list_input(
            CreateUsersWithListInputParams {
                user: users.clone(),
            },
            None,
        )
        .await
        .expect("stubbed success");

        assert_eq!(
            api.api.calls(),
            vec![Recorded::CreateUsersWithListInput { user: users }]
        );
    }
}
