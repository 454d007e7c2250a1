use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    username: Option<String>,
    access_expires_at: Option<String>,
    access_expired: Option<bool>,
    can_refresh: bool,
    api: String,
    state_file: String,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session();
    let expiry = session.access_expiry();
    let now = chrono::Utc::now();

    let status = AuthStatusResponse {
        authenticated: session.is_authenticated(),
        username: session.user().map(|user| user.username),
        access_expires_at: expiry.map(|at| at.to_rfc3339()),
        access_expired: expiry.map(|at| at <= now),
        can_refresh: session.refresh_token().is_some(),
        api: ctx.store.client().base_url().to_string(),
        state_file: ctx.state_file.display().to_string(),
    };

    output(&status, flags.format)
}
