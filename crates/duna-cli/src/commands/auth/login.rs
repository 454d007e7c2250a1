use std::io::BufRead;

use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    username: String,
}

pub async fn handle(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => read_password(flags.quiet)?,
    };

    let identity = ctx.session().login(&args.username, &password).await?;
    tracing::info!(username = %identity.username, "logged in");

    output(
        &AuthLoginResponse {
            authenticated: true,
            username: identity.username,
        },
        flags.format,
    )
}

fn read_password(quiet: bool) -> anyhow::Result<String> {
    if !quiet {
        eprint!("password: ");
    }
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        anyhow::bail!("no password given, pass --password or pipe it on stdin");
    }
    Ok(password)
}
