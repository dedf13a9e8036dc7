//! Submit an ordered list of update actions against a resource.

use std::marker::PhantomData;

use serde::Serialize;

use crate::clients::{HttpMethod, HttpRequest, HttpResponse};
use crate::model::{KeyIdentifiable, Updatable};
use crate::response::{map_single, ApiError};

use super::{ApiRequest, QueryParams, Target};

/// A `POST {endpoint}/{id}` (or `{endpoint}/key={key}`) request carrying a
/// `{"version": n, "actions": [...]}` body.
///
/// Actions are applied by the server in the order they were added. The
/// version is the caller's last observed version; on a mismatch the server
/// answers 409 and the result is an [`ApiError`] for which
/// [`ApiError::is_concurrent_modification`] returns `true`. The client
/// never retries that case itself: the caller decides whether to re-fetch
/// and re-apply.
///
/// # Example
///
/// ```rust
/// use commerce_api::model::{Customer, CustomerUpdateAction};
/// use commerce_api::request::{ApiRequest, UpdateRequest};
///
/// let request = UpdateRequest::<Customer>::of("c1", 3)
///     .with_action(CustomerUpdateAction::SetFirstName {
///         first_name: Some("Jane".to_string()),
///     });
/// let body = request.http_request().unwrap().body.unwrap();
/// assert_eq!(
///     body,
///     serde_json::json!({
///         "version": 3,
///         "actions": [{"action": "setFirstName", "firstName": "Jane"}]
///     })
/// );
/// ```
#[derive(Debug, Clone)]
pub struct UpdateRequest<T: Updatable> {
    target: Target,
    version: u64,
    actions: Vec<T::UpdateAction>,
    params: QueryParams,
    _marker: PhantomData<fn() -> T>,
}

#[derive(Serialize)]
struct UpdatePayload<'a, A: Serialize> {
    version: u64,
    actions: &'a [A],
}

impl<T: Updatable> UpdateRequest<T> {
    /// Updates the resource with the given id at the given observed version.
    #[must_use]
    pub fn of(id: impl Into<String>, version: u64) -> Self {
        Self::new(Target::Id(id.into()), version)
    }

    fn new(target: Target, version: u64) -> Self {
        Self {
            target,
            version,
            actions: Vec::new(),
            params: QueryParams::new(),
            _marker: PhantomData,
        }
    }

    /// Appends one action; order is preserved on the wire.
    #[must_use]
    pub fn with_action(mut self, action: T::UpdateAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Appends several actions in iteration order.
    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = T::UpdateAction>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Adds a reference-expansion path to apply to the updated resource;
    /// repeatable.
    #[must_use]
    pub fn expand(mut self, path: impl Into<String>) -> Self {
        self.params.add("expand", path.into(), false);
        self
    }
}

impl<T: Updatable + KeyIdentifiable> UpdateRequest<T> {
    /// Updates the resource with the given secondary key.
    #[must_use]
    pub fn of_key(key: impl Into<String>, version: u64) -> Self {
        Self::new(Target::Key(key.into()), version)
    }
}

impl<T: Updatable> ApiRequest for UpdateRequest<T> {
    type Output = T;

    fn http_request(&self) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_value(UpdatePayload {
            version: self.version,
            actions: &self.actions,
        })?;
        let request = HttpRequest::builder(HttpMethod::Post, self.target.path(T::ENDPOINT))
            .query(self.params.clone())
            .body(body)
            .build()
            .map_err(crate::clients::HttpError::from)?;
        Ok(request)
    }

    fn map_response(response: &HttpResponse) -> Result<Self::Output, ApiError> {
        map_single(response)
    }
}
