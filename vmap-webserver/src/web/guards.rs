use rocket::{
    self,
    request::{FromRequest, Outcome, Request},
    State,
};

use super::{api::ApiError, jwt};
use vmap_core::usecases::Error as ParameterError;

type Result<T> = std::result::Result<T, ApiError>;

pub struct Version(pub &'static str);

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// The authenticated user, if any.
#[derive(Debug)]
pub struct Auth {
    user_id: Option<String>,
}

impl Auth {
    pub fn user_id(&self) -> Result<&str> {
        self.user_id
            .as_deref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    fn bearer_tokens_from_header<'r>(request: &'r Request) -> Vec<&'r str> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .collect()
    }

    async fn user_id_from_jwt_in_header(request: &Request<'_>) -> Option<String> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        Self::bearer_tokens_from_header(request)
            .into_iter()
            .filter_map(|token| {
                jwt_state
                    .validate_token_and_get_user_id(token)
                    .inspect_err(|err| debug!("Invalid bearer token: {err}"))
                    .ok()
            })
            .find(|user_id| !user_id.trim().is_empty())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let user_id = Self::user_id_from_jwt_in_header(request).await;
        Outcome::Success(Self { user_id })
    }
}
