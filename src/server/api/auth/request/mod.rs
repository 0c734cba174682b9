use serde::Deserialize;

/// Request body for the signup endpoint.
#[derive(Deserialize, Debug)]
pub struct Signup {
    /// Desired display name.
    pub username: String,
    /// Email address to register.
    pub email: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
}

/// Request body for the login endpoint.
#[derive(Deserialize, Debug)]
pub struct Login {
    /// Registered email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Request body for picking an account role.
#[derive(Deserialize, Debug)]
pub struct RoleSelection {
    /// Either `customer` or `owner`.
    pub role: String,
}
