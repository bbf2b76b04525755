use dioxus_logger::tracing;
use serde::Deserialize;
use serde_json::json;

use crate::server::{
    error::provision::ProvisionError, model::panel::RemoteUser,
    service::pterodactyl::PterodactylClient,
};

/// Single user object in API responses: `{"object": "user", "attributes": {...}}`.
#[derive(Debug, Deserialize)]
struct UserObject {
    attributes: UserAttributes,
}

#[derive(Debug, Deserialize)]
struct UserAttributes {
    id: i64,
}

/// List envelope returned by the filtered user lookup.
#[derive(Debug, Deserialize)]
struct UserList {
    data: Vec<UserObject>,
}

/// Tagged result of a user creation attempt.
///
/// A 422 answer is not an error at this level: it signals a username/email
/// collision that the caller may be able to recover from.
#[derive(Debug)]
pub enum CreateUserResult {
    /// User created; remote id captured.
    Created(i64),
    /// The API answered 422, indicating the username or email is taken.
    Conflict,
}

impl PterodactylClient<'_> {
    /// Creates a panel user on the remote deployment.
    ///
    /// # Arguments
    /// - `username` - Login name; also used as the account's first name
    /// - `email` - Account email address
    /// - `password` - Plaintext password forwarded to the panel
    ///
    /// # Returns
    /// - `Ok(CreateUserResult::Created(id))` - Account created
    /// - `Ok(CreateUserResult::Conflict)` - 422 collision on username or email
    /// - `Err(ProvisionError::Upstream)` - Any other failure status, passed through
    /// - `Err(ProvisionError::Transport)` - Transport-level failure
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<CreateUserResult, ProvisionError> {
        let response = self
            .http_client
            .post(format!("{}/api/application/users", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .json(&json!({
                "email": email,
                "username": username,
                "first_name": username,
                "last_name": "User",
                "password": password,
            }))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNPROCESSABLE_ENTITY {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Panel user creation conflict: {}", body);
            return Ok(CreateUserResult::Conflict);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Panel user creation failed ({}): {}", status, body);
            return Err(ProvisionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let user = response.json::<UserObject>().await?;
        tracing::info!("Panel user created with remote id {}", user.attributes.id);

        Ok(CreateUserResult::Created(user.attributes.id))
    }

    /// Looks up a remote user by email address.
    ///
    /// # Arguments
    /// - `email` - Email address to filter on
    ///
    /// # Returns
    /// - `Ok(Some(id))` - An account with that email exists
    /// - `Ok(None)` - No account found
    /// - `Err(ProvisionError::AccountLookupFailed)` - The lookup call failed
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<i64>, ProvisionError> {
        let response = self
            .http_client
            .get(format!("{}/api/application/users", self.base_url))
            .query(&[("filter[email]", email)])
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|_| ProvisionError::AccountLookupFailed)?;

        if !response.status().is_success() {
            return Err(ProvisionError::AccountLookupFailed);
        }

        let list = response
            .json::<UserList>()
            .await
            .map_err(|_| ProvisionError::AccountLookupFailed)?;

        Ok(list.data.first().map(|user| user.attributes.id))
    }

    /// Resolves a usable remote user id, recovering from collisions.
    ///
    /// Encodes the recovery policy for the user step: try to create, and on a
    /// 422 collision fall back to the email lookup. An account that exists but
    /// cannot be found by email belongs to someone else, so the collision is
    /// surfaced as `AccountInUse`.
    ///
    /// # Returns
    /// - `Ok(RemoteUser::Created(id))` - Fresh account created
    /// - `Ok(RemoteUser::Existing(id))` - Collision recovered via email lookup
    /// - `Err(ProvisionError::AccountInUse)` - Collision, no account discoverable
    /// - `Err(ProvisionError)` - Lookup failure, upstream error, or transport error
    pub async fn resolve_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RemoteUser, ProvisionError> {
        match self.create_user(username, email, password).await? {
            CreateUserResult::Created(id) => Ok(RemoteUser::Created(id)),
            CreateUserResult::Conflict => match self.find_user_by_email(email).await? {
                Some(id) => {
                    tracing::info!("Reusing existing panel account with remote id {}", id);
                    Ok(RemoteUser::Existing(id))
                }
                None => Err(ProvisionError::AccountInUse),
            },
        }
    }
}
