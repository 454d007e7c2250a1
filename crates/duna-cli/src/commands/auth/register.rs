use duna_core::responses::RegisteredUser;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthRegisterArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthRegisterResponse {
    registered: RegisteredUser,
    next: &'static str,
}

pub async fn handle(args: &AuthRegisterArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registered = ctx
        .session()
        .register(&args.username, &args.email, &args.password, &args.confirm)
        .await?;

    output(
        &AuthRegisterResponse {
            registered,
            next: "run `duna auth login` to start a session",
        },
        flags.format,
    )
}
