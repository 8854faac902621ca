use anyhow::{bail, Result};

use crate::context::AppContext;
use crate::navigation::Route;
use crate::storage::{CHAT_ID_KEY, CHAT_TITLE_KEY, TOKEN_KEY, USER_ID_KEY};

/// Record the signed-in user and their token, then move on to chat creation
pub fn login(ctx: &mut AppContext, user_id: &str, token: &str) -> Result<()> {
    let user_id = user_id.trim();
    let token = token.trim();

    if user_id.is_empty() {
        bail!("User id must not be empty");
    }
    if token.is_empty() {
        bail!("Token must not be empty");
    }

    ctx.storage.set(USER_ID_KEY, user_id)?;
    ctx.storage.set(TOKEN_KEY, token)?;
    ctx.session.set_user_id(user_id);

    log::info!("signed in as {}", user_id);
    ctx.navigator.navigate(Route::Create);
    Ok(())
}

/// Forget the session and every stored identifier
pub fn logout(ctx: &mut AppContext) -> Result<()> {
    ctx.session.clear_user();
    for key in [TOKEN_KEY, USER_ID_KEY, CHAT_ID_KEY, CHAT_TITLE_KEY] {
        ctx.storage.remove(key)?;
    }

    log::info!("signed out");
    ctx.navigator.navigate(Route::Login);
    Ok(())
}
