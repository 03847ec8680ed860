use async_trait::async_trait;

use crate::errors::AppError;

/// Coarse capability tier; anything unrecognized reads as `Viewer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    Staff,
    #[default]
    Viewer,
}

// Pure data, injected wherever a page needs a decision; nothing global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub edit: bool,
    pub view_financial: bool,
    pub view_report: bool,
}

impl Role {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("admin") => Role::Admin,
            Some("staff") => Role::Staff,
            _ => Role::Viewer,
        }
    }

    pub fn capabilities(self) -> Capabilities {
        match self {
            Role::Admin => Capabilities {
                edit: true,
                view_financial: true,
                view_report: true,
            },
            Role::Staff => Capabilities {
                edit: true,
                view_financial: false,
                view_report: true,
            },
            Role::Viewer => Capabilities {
                edit: false,
                view_financial: false,
                view_report: false,
            },
        }
    }
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> anyhow::Result<()>;
    async fn sign_out(&self) -> anyhow::Result<()>;
}

/// Sign-in for the administrative surface: only the configured account is
/// allowed through, any other credential that authenticates is signed out
/// again immediately.
pub async fn admin_sign_in(
    auth: &dyn AuthProvider,
    admin_email: &str,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    auth.sign_in(email, password)
        .await
        .map_err(AppError::Network)?;

    if !email.trim().eq_ignore_ascii_case(admin_email.trim()) {
        if let Err(err) = auth.sign_out().await {
            tracing::warn!("sign-out after rejected login failed: {err:#}");
        }
        return Err(AppError::Unauthorized);
    }

    Ok(())
}
