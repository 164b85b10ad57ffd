use serde::Deserialize;

/// Query parameters accepted by the listing page. `error_tab` survives a
/// failed login or registration redirect so the page can reopen the
/// right tab.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub error_tab: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
}
