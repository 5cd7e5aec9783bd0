// demos/storefront_app/src/web/extractors.rs

use actix_web::{web, FromRequest, HttpRequest};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

/// Carts belong to whoever presents the bearer token. A token issued by
/// `/login` maps to its email; any other token is taken as the user id
/// unless the mock requires tokens, in which case it is rejected. Requests
/// without one share the `guest` cart unless a token is required.
#[derive(Debug)]
pub struct SessionUser {
  pub user_id: String,
}

pub const GUEST_USER: &str = "guest";

impl FromRequest for SessionUser {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let token = req
      .headers()
      .get("Authorization")
      .and_then(|value| value.to_str().ok())
      .and_then(|value| value.strip_prefix("Bearer "))
      .map(str::trim)
      .filter(|token| !token.is_empty());

    let state = req.app_data::<web::Data<AppState>>();
    let require_token = state.map(|state| state.config.require_token).unwrap_or(false);
    let issued_to = token.and_then(|token| state.and_then(|state| state.auth.user_for(token)));

    let result = match (token, issued_to) {
      (Some(_), Some(email)) => Ok(SessionUser { user_id: email }),
      (Some(_), None) if require_token => {
        warn!("SessionUser extractor: unknown bearer token.");
        Err(AppError::Auth("Invalid or expired token".to_string()))
      }
      (Some(token), None) => Ok(SessionUser {
        user_id: token.to_string(),
      }),
      (None, _) if require_token => {
        warn!("SessionUser extractor: missing bearer token.");
        Err(AppError::Auth("Authentication required: no token provided".to_string()))
      }
      (None, _) => Ok(SessionUser {
        user_id: GUEST_USER.to_string(),
      }),
    };
    futures_util::future::ready(result)
  }
}

impl SessionUser {
  /// Catalog edits are never open to the shared guest cart's user.
  pub fn require_signed_in(&self) -> Result<(), AppError> {
    if self.user_id == GUEST_USER {
      return Err(AppError::Auth("Authentication required".to_string()));
    }
    Ok(())
  }
}
