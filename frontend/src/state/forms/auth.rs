use shared::{LoginRequest, RegisterRequest, ResetPasswordRequest};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, String> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return Err("Please enter your username and password".to_string());
        }
        Ok(LoginRequest {
            username: username.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub(crate) fn check_email(email: &str) -> Result<(), String> {
    let valid = email
        .split_once('@')
        .map(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.starts_with('.'))
        .unwrap_or(false);
    if valid {
        Ok(())
    } else {
        Err("Please enter a valid email address".to_string())
    }
}

fn check_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, String> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err("Username is required".to_string());
        }
        let email = self.email.trim();
        check_email(email)?;
        check_password(&self.password)?;
        Ok(RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetPasswordForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub fn validate(&self) -> Result<ResetPasswordRequest, String> {
        let email = self.email.trim();
        check_email(email)?;
        check_password(&self.password)?;
        if self.password != self.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        Ok(ResetPasswordRequest {
            email: email.to_string(),
            password: self.password.clone(),
            password_confirmation: self.confirm_password.clone(),
        })
    }
}
