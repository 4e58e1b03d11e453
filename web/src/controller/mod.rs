pub(crate) mod health_check_controller;
pub(crate) mod social_login_controller;
