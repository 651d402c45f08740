// ===== Share Token Service =====
// Signed, expiring QR payloads: `<claims_b64>.<signature_b64>` with an
// HMAC-SHA256 signature over the encoded claims. Anyone can decode the
// payload; only the server can mint a signature that verifies.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

use crate::models::{EmergencySummary, ProfileError, ShareCode, ShareTokenClaims};

type HmacSha256 = Hmac<Sha256>;

pub struct ShareTokenService {
    secret: String,
    ttl_minutes: i64,
}

impl ShareTokenService {
    pub fn new(secret: impl Into<String>, ttl_minutes: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_minutes,
        }
    }

    pub fn issue(&self, summary: EmergencySummary) -> Result<ShareCode, ProfileError> {
        if self.secret.is_empty() {
            return Err(ProfileError::SecretNotConfigured);
        }

        let expires_at = Utc::now() + Duration::minutes(self.ttl_minutes);
        let claims = ShareTokenClaims {
            summary,
            exp: expires_at.timestamp(),
        };

        let claims_json = serde_json::to_vec(&claims).map_err(|_| ProfileError::InvalidToken)?;
        let claims_b64 = URL_SAFE_NO_PAD.encode(claims_json);

        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|_| ProfileError::InvalidToken)?;
        mac.update(claims_b64.as_bytes());
        let signature_b64 = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(ShareCode {
            token: format!("{}.{}", claims_b64, signature_b64),
            expires_at,
        })
    }

    pub fn resolve(&self, token: &str) -> Result<EmergencySummary, ProfileError> {
        // An empty key would let anyone mint a verifiable signature.
        if self.secret.is_empty() {
            return Err(ProfileError::SecretNotConfigured);
        }

        let (claims_b64, signature_b64) = match token.split_once('.') {
            Some(parts) => parts,
            None => {
                debug!("share token missing signature separator");
                return Err(ProfileError::InvalidToken);
            }
        };

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| ProfileError::InvalidToken)?;

        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|_| ProfileError::InvalidToken)?;
        mac.update(claims_b64.as_bytes());
        if mac.verify_slice(&signature).is_err() {
            debug!("share token signature verification failed");
            return Err(ProfileError::InvalidToken);
        }

        let claims_json = URL_SAFE_NO_PAD
            .decode(claims_b64)
            .map_err(|_| ProfileError::InvalidToken)?;
        let claims: ShareTokenClaims =
            serde_json::from_slice(&claims_json).map_err(|_| ProfileError::InvalidToken)?;

        if claims.exp < Utc::now().timestamp() {
            debug!("share token expired at {}", claims.exp);
            return Err(ProfileError::ExpiredToken);
        }

        Ok(claims.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> EmergencySummary {
        EmergencySummary {
            patient_id: "patient-1".to_string(),
            full_name: "Asha Verma".to_string(),
            blood_group: Some("O+".to_string()),
            allergies: vec!["Penicillin".to_string()],
            chronic_conditions: vec![],
            medications: vec!["Metformin".to_string()],
            emergency_contact_name: Some("Ravi Verma".to_string()),
            emergency_contact_phone: Some("9876543210".to_string()),
        }
    }

    #[test]
    fn issued_tokens_resolve_to_the_same_summary() {
        let service = ShareTokenService::new("test-secret", 60);
        let code = service.issue(summary()).unwrap();

        let resolved = service.resolve(&code.token).unwrap();
        assert_eq!(resolved, summary());
    }

    #[test]
    fn tampered_payloads_are_rejected() {
        let service = ShareTokenService::new("test-secret", 60);
        let code = service.issue(summary()).unwrap();

        let (claims_b64, signature_b64) = code.token.split_once('.').unwrap();
        let mut other = summary();
        other.blood_group = Some("AB+".to_string());
        let forged_claims = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(&ShareTokenClaims {
                summary: other,
                exp: Utc::now().timestamp() + 3600,
            })
            .unwrap(),
        );
        let forged = format!("{}.{}", forged_claims, signature_b64);
        assert!(matches!(
            service.resolve(&forged),
            Err(ProfileError::InvalidToken)
        ));

        // Original still fine.
        assert!(service
            .resolve(&format!("{}.{}", claims_b64, signature_b64))
            .is_ok());
    }

    #[test]
    fn tokens_from_another_secret_are_rejected() {
        let issuing = ShareTokenService::new("secret-a", 60);
        let resolving = ShareTokenService::new("secret-b", 60);
        let code = issuing.issue(summary()).unwrap();

        assert!(matches!(
            resolving.resolve(&code.token),
            Err(ProfileError::InvalidToken)
        ));
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let service = ShareTokenService::new("test-secret", -5);
        let code = service.issue(summary()).unwrap();

        assert!(matches!(
            service.resolve(&code.token),
            Err(ProfileError::ExpiredToken)
        ));
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        let service = ShareTokenService::new("test-secret", 60);
        for bad in ["", "no-dot-here", "a.b", "!!!.???"] {
            assert!(matches!(
                service.resolve(bad),
                Err(ProfileError::InvalidToken)
            ));
        }
    }

    #[test]
    fn unset_secret_refuses_to_issue_or_resolve() {
        let service = ShareTokenService::new("", 60);
        assert!(matches!(
            service.issue(summary()),
            Err(ProfileError::SecretNotConfigured)
        ));

        // A token signed offline with the empty key must not get through
        // either.
        let claims = ShareTokenClaims {
            summary: summary(),
            exp: Utc::now().timestamp() + 3600,
        };
        let claims_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());
        let mut mac = HmacSha256::new_from_slice(b"").unwrap();
        mac.update(claims_b64.as_bytes());
        let signature_b64 = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        let forged = format!("{}.{}", claims_b64, signature_b64);

        assert!(matches!(
            service.resolve(&forged),
            Err(ProfileError::SecretNotConfigured)
        ));
    }
}
