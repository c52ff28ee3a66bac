use crate::features::auth::model::AuthenticatedUser;

use axum::{extract::Request, middleware::Next, Router};

pub fn create_test_user(account_id: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        account_id: account_id.to_string(),
        sub: format!("sub-{}", account_id),
        email: Some(format!("{}@example.com", account_id)),
    }
}

/// Stand-in for the JWT middleware: every request is authenticated as `user`
pub fn with_test_user(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
        },
    ))
}

