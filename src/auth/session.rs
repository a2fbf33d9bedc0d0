use actix_session::Session;

const USER_ID_KEY: &str = "user_id";
const USERNAME_KEY: &str = "username";
const FLASH_KEY: &str = "flash";

/// Store the signed-in leader in the cookie session.
pub fn sign_in(session: &Session, user_id: i64, username: &str) {
    session.renew();
    let _ = session.insert(USER_ID_KEY, user_id);
    let _ = session.insert(USERNAME_KEY, username);
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert(FLASH_KEY, message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}
