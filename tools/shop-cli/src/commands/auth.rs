//! Sign in, register and sign out.

use anyhow::{Context as _, Result};
use dialoguer::{Input, Password};
use shop_auth::User;

use super::{LoginArgs, RegisterArgs};
use crate::context::Context;

/// Run the login command.
pub async fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let email = match args.email {
        Some(email) => email,
        None => Input::<String>::new().with_prompt("Email").interact_text()?,
    };
    let password = match args.password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let cache = ctx.open_cache()?;
    let mut session = ctx.auth_session(&cache);

    let spinner = ctx.output.spinner("Signing in...");
    let result = session.login(&email, &password).await;
    spinner.finish_and_clear();

    let user = result.context("Sign-in failed")?;
    report(user, "Signed in", ctx);
    Ok(())
}

/// Run the register command.
pub async fn register(args: RegisterArgs, ctx: &Context) -> Result<()> {
    let name = match args.name {
        Some(name) => name,
        None => Input::<String>::new().with_prompt("Full name").interact_text()?,
    };
    let email = match args.email {
        Some(email) => email,
        None => Input::<String>::new().with_prompt("Email").interact_text()?,
    };
    let password = match args.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let cache = ctx.open_cache()?;
    let mut session = ctx.auth_session(&cache);

    let spinner = ctx.output.spinner("Creating account...");
    let result = session.register(&name, &email, &password).await;
    spinner.finish_and_clear();

    let user = result.context("Registration failed")?;
    report(user, "Account created; signed in", ctx);
    Ok(())
}

/// Run the logout command.
pub async fn logout(ctx: &Context) -> Result<()> {
    let cache = ctx.open_cache()?;
    let mut session = ctx.auth_session(&cache);
    let was = session.user().map(|u| u.name.clone());
    session.logout()?;

    if ctx.output.is_json() {
        ctx.output.json(session.state());
        return Ok(());
    }
    match was {
        Some(name) => ctx.output.success(&format!("Signed out {}", name)),
        None => ctx.output.info("Not signed in"),
    }
    Ok(())
}

/// Run the whoami command.
pub async fn whoami(ctx: &Context) -> Result<()> {
    let cache = ctx.open_cache()?;
    let session = ctx.auth_session(&cache);

    if ctx.output.is_json() {
        ctx.output.json(session.state());
        return Ok(());
    }
    match session.user() {
        Some(user) => {
            ctx.output.header(&user.name);
            ctx.output.kv("ID", user.id.as_str());
            ctx.output.kv("Email", &user.email);
            ctx.output.kv("Role", user.role.as_str());
        }
        None => ctx
            .output
            .info("Not signed in. Use `shop login` or `shop register`."),
    }
    Ok(())
}

fn report(user: &User, verb: &str, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(user);
        return;
    }
    ctx.output
        .success(&format!("{} as {} ({})", verb, user.name, user.role));
}
