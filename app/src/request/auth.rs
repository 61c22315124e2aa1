//! Auth requests.

/// `auth/login`
#[derive(Debug, Clone)]
pub struct LoginReq {
    pub email: String,
    pub password: String,
}

impl LoginReq {
    pub const PATH: &'static str = "auth/login";
}

/// `auth/signup`
#[derive(Debug, Clone)]
pub struct SignupReq {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl SignupReq {
    pub const PATH: &'static str = "auth/signup";
}

/// `auth/logout`
#[derive(Debug, Clone)]
pub struct LogoutReq;

impl LogoutReq {
    pub const PATH: &'static str = "auth/logout";
}
