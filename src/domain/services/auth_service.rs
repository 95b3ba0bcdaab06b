use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::domain::{
    models::{
        auth::AuthOutcome,
        record::{DeviceId, EMAIL_VERIFIED_KEY, SESSION_KEYS, USER_EMAIL_KEY, USER_NAME_KEY, USER_ROLE_KEY},
        session::{Role, SessionFlags},
    },
    ports::RecordStore,
};
use crate::error::AppError;

/// Prototype accounts. Compared literally, nothing is hashed.
pub const DEMO_ACCOUNTS: [(&str, &str, Role); 2] = [
    ("admin@ies.edu", "admin", Role::Admin),
    ("student@ies.edu", "student", Role::Student),
];

/// The fixed verification code of the simulated email flow.
pub const DEMO_OTP: &str = "123456";
pub const OTP_LENGTH: usize = 6;

/// Details carried from the sign-up form into the OTP step.
#[derive(Debug, Clone)]
pub struct OtpSubmission {
    pub otp: String,
    pub email: String,
    pub role: Role,
    pub name: Option<String>,
}

pub struct AuthService {
    store: Arc<dyn RecordStore>,
    signin_delay: Duration,
    otp_delay: Duration,
}

impl AuthService {
    pub fn new(store: Arc<dyn RecordStore>, signin_delay: Duration, otp_delay: Duration) -> Self {
        Self { store, signin_delay, otp_delay }
    }

    pub async fn sign_in(&self, device: DeviceId, email: &str, password: &str) -> Result<AuthOutcome, AppError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::Validation("Email and password are required".into()));
        }

        sleep(self.signin_delay).await;

        let Some(role) = DEMO_ACCOUNTS
            .iter()
            .find(|(known_email, known_password, _)| *known_email == email && *known_password == password)
            .map(|(_, _, role)| *role)
        else {
            warn!(%device, "Sign in rejected");
            return Err(AppError::InvalidCredentials);
        };

        self.store.put_many(vec![
            (device.key(USER_ROLE_KEY), role.as_str().as_bytes().to_vec()),
            (device.key(USER_EMAIL_KEY), email.as_bytes().to_vec()),
        ]).await?;

        info!(%device, %role, "Signed in");
        let greeting = match role {
            Role::Admin => "Welcome back, Admin!",
            Role::Student => "Welcome back, Student!",
        };
        Ok(AuthOutcome::new(role, email.to_string(), greeting))
    }

    /// Checks the code and, on a match, marks the device as signed in and verified.
    /// Failed attempts leave no trace and may be retried without limit.
    pub async fn verify_otp(&self, device: DeviceId, submission: OtpSubmission) -> Result<AuthOutcome, AppError> {
        if submission.otp.is_empty() {
            return Err(AppError::Validation("Please enter OTP".into()));
        }
        if submission.otp.chars().count() != OTP_LENGTH {
            return Err(AppError::Validation(format!("OTP must be {} characters", OTP_LENGTH)));
        }

        sleep(self.otp_delay).await;

        if submission.otp != DEMO_OTP {
            warn!(%device, "OTP rejected");
            return Err(AppError::InvalidOtp);
        }

        let name = submission.name.unwrap_or_default();
        self.store.put_many(vec![
            (device.key(USER_ROLE_KEY), submission.role.as_str().as_bytes().to_vec()),
            (device.key(USER_EMAIL_KEY), submission.email.as_bytes().to_vec()),
            (device.key(USER_NAME_KEY), name.into_bytes()),
            (device.key(EMAIL_VERIFIED_KEY), b"true".to_vec()),
        ]).await?;

        info!(%device, role = %submission.role, "Email verified");
        Ok(AuthOutcome::new(submission.role, submission.email, "Email verified successfully"))
    }

    pub fn resend_otp_notice(&self) -> String {
        format!("Demo OTP: {} (This would be sent via email in a real app)", DEMO_OTP)
    }

    pub async fn sign_out(&self, device: DeviceId) -> Result<(), AppError> {
        self.store
            .delete_many(SESSION_KEYS.iter().map(|key| device.key(key)).collect())
            .await?;
        info!(%device, "Signed out");
        Ok(())
    }

    /// Session flags as currently stored for `device`. Unreadable values count as absent.
    pub async fn session(&self, device: DeviceId) -> Result<SessionFlags, AppError> {
        let role = self.read_flag(device, USER_ROLE_KEY).await?.and_then(|raw| raw.parse().ok());
        let email_verified = self.read_flag(device, EMAIL_VERIFIED_KEY).await?.as_deref() == Some("true");

        Ok(SessionFlags {
            user_role: role,
            user_email: self.read_flag(device, USER_EMAIL_KEY).await?,
            user_name: self.read_flag(device, USER_NAME_KEY).await?,
            email_verified,
        })
    }

    /// `Some(flags)` when the stored role is exactly `required`.
    pub async fn require_role(&self, device: DeviceId, required: Role) -> Result<Option<SessionFlags>, AppError> {
        let flags = self.session(device).await?;
        if flags.user_role == Some(required) {
            Ok(Some(flags))
        } else {
            Ok(None)
        }
    }

    async fn read_flag(&self, device: DeviceId, key: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .store
            .get(&device.key(key))
            .await?
            .and_then(|raw| String::from_utf8(raw).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::memory_record_store::MemoryRecordStore;

    fn service() -> (Arc<dyn RecordStore>, AuthService) {
        let store: Arc<dyn RecordStore> = Arc::new(MemoryRecordStore::new());
        let service = AuthService::new(store.clone(), Duration::ZERO, Duration::ZERO);
        (store, service)
    }

    fn submission(otp: &str, role: Role) -> OtpSubmission {
        OtpSubmission {
            otp: otp.to_string(),
            email: "new@ies.edu".to_string(),
            role,
            name: Some("Asha".to_string()),
        }
    }

    #[tokio::test]
    async fn test_admin_sign_in_sets_role() {
        let (_, service) = service();
        let device = DeviceId::new();

        let outcome = service.sign_in(device, "admin@ies.edu", "admin").await.unwrap();
        assert_eq!(outcome.role, Role::Admin);
        assert_eq!(outcome.redirect, "/admin/dashboard");

        let flags = service.session(device).await.unwrap();
        assert_eq!(flags.user_role, Some(Role::Admin));
        assert_eq!(flags.user_email.as_deref(), Some("admin@ies.edu"));
        assert!(!flags.email_verified);
    }

    #[tokio::test]
    async fn test_wrong_password_leaves_store_untouched() {
        let (store, service) = service();
        let device = DeviceId::new();

        let err = service.sign_in(device, "student@ies.edu", "admin").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
        assert!(store.get(&device.key(USER_ROLE_KEY)).await.unwrap().is_none());
        assert!(store.get(&device.key(USER_EMAIL_KEY)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_otp_match_sets_all_flags() {
        let (_, service) = service();
        let device = DeviceId::new();

        let outcome = service.verify_otp(device, submission(DEMO_OTP, Role::Student)).await.unwrap();
        assert_eq!(outcome.redirect, "/student/dashboard");

        let flags = service.session(device).await.unwrap();
        assert_eq!(flags.user_role, Some(Role::Student));
        assert_eq!(flags.user_name.as_deref(), Some("Asha"));
        assert!(flags.email_verified);
    }

    #[tokio::test]
    async fn test_otp_mismatch_allows_retry() {
        let (store, service) = service();
        let device = DeviceId::new();

        for _ in 0..5 {
            let err = service.verify_otp(device, submission("654321", Role::Admin)).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidOtp));
        }
        assert!(store.get(&device.key(EMAIL_VERIFIED_KEY)).await.unwrap().is_none());

        let outcome = service.verify_otp(device, submission(DEMO_OTP, Role::Admin)).await.unwrap();
        assert_eq!(outcome.redirect, "/admin/dashboard");
    }

    #[tokio::test]
    async fn test_otp_length_is_validated() {
        let (_, service) = service();
        let device = DeviceId::new();

        assert!(matches!(
            service.verify_otp(device, submission("", Role::Student)).await,
            Err(AppError::Validation(msg)) if msg == "Please enter OTP"
        ));
        assert!(matches!(
            service.verify_otp(device, submission("12345", Role::Student)).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_sign_out_clears_flags_and_gate() {
        let (_, service) = service();
        let device = DeviceId::new();

        service.sign_in(device, "student@ies.edu", "student").await.unwrap();
        assert!(service.require_role(device, Role::Student).await.unwrap().is_some());
        assert!(service.require_role(device, Role::Admin).await.unwrap().is_none());

        service.sign_out(device).await.unwrap();
        assert_eq!(service.session(device).await.unwrap(), SessionFlags::default());
        assert!(service.require_role(device, Role::Student).await.unwrap().is_none());
    }
}
