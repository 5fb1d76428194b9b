//! AWS Signature Version 4 signing for Product Advertising API requests.
//!
//! Signing is a pure function of the request body, credentials, and a caller
//! supplied timestamp, so the same inputs always produce the same signature.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const TERMINATOR: &str = "aws4_request";

/// Names of the signed headers, in canonical order. Order is load-bearing:
/// the provider reconstructs this exact block to verify the signature, so it
/// is hard-coded rather than derived from any map.
const SIGNED_HEADERS: &str = "content-encoding;content-type;host;x-amz-date;x-amz-target";

pub const CONTENT_ENCODING: &str = "amz-1.0";
pub const CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Per-request signing inputs, derived from configuration plus the current
/// instant. Never persisted.
#[derive(Debug)]
pub struct SigningContext<'a> {
    pub access_key_id: &'a str,
    pub secret_key: &'a str,
    pub region: &'a str,
    pub service: &'a str,
    pub host: &'a str,
    pub path: &'a str,
    pub target: &'a str,
    pub timestamp: DateTime<Utc>,
}

/// Output of a signing pass: the Authorization header value and the date
/// header it was computed against.
#[derive(Debug, Clone)]
pub struct Signature {
    pub authorization: String,
    pub amz_date: String,
}

/// Signs a POST body for the search endpoint.
pub fn sign(ctx: &SigningContext<'_>, body: &str) -> Signature {
    let amz_date = ctx.timestamp.format("%Y%m%dT%H%M%SZ").to_string();
    let date_stamp = &amz_date[..8];

    let canonical_headers = format!(
        "content-encoding:{}\ncontent-type:{}\nhost:{}\nx-amz-date:{}\nx-amz-target:{}\n",
        CONTENT_ENCODING, CONTENT_TYPE, ctx.host, amz_date, ctx.target
    );
    let payload_hash = hex_sha256(body.as_bytes());

    // Method, path, empty query string, canonical headers, signed header
    // list, payload hash. The canonical header block already ends in a
    // newline, giving the blank line the verifier expects.
    let canonical_request = format!(
        "POST\n{}\n\n{}\n{}\n{}",
        ctx.path, canonical_headers, SIGNED_HEADERS, payload_hash
    );

    let scope = format!("{}/{}/{}/{}", date_stamp, ctx.region, ctx.service, TERMINATOR);
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        amz_date,
        scope,
        hex_sha256(canonical_request.as_bytes())
    );

    let key = signing_key(ctx.secret_key, date_stamp, ctx.region, ctx.service);
    let signature = hex_hmac_sha256(&key, string_to_sign.as_bytes());

    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        ALGORITHM, ctx.access_key_id, scope, SIGNED_HEADERS, signature
    );

    Signature { authorization, amz_date }
}

/// Derives the date/region/service-scoped signing key by chained HMAC.
fn signing_key(secret_key: &str, date_stamp: &str, region: &str, service: &str) -> Vec<u8> {
    let k_date = hmac_sha256(format!("AWS4{}", secret_key).as_bytes(), date_stamp.as_bytes());
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, service.as_bytes());
    hmac_sha256(&k_service, TERMINATOR.as_bytes())
}

/// Hex encoded SHA256 hash.
fn hex_sha256(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content).as_slice())
}

/// HMAC with SHA256 hash.
fn hmac_sha256(key: &[u8], content: &[u8]) -> Vec<u8> {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

/// Hex encoded HMAC with SHA256 hash.
fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_ctx(timestamp: DateTime<Utc>) -> SigningContext<'static> {
        SigningContext {
            access_key_id: "AKIDEXAMPLE",
            secret_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            region: "us-east-1",
            service: "ProductAdvertisingAPI",
            host: "webservices.amazon.com",
            path: "/paapi5/searchitems",
            target: "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.SearchItems",
            timestamp,
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 3, 13, 7, 20, 4).unwrap()
    }

    fn extract_signature(authorization: &str) -> &str {
        authorization.split("Signature=").nth(1).unwrap()
    }

    #[test]
    fn test_date_header_format() {
        let sig = sign(&make_ctx(fixed_time()), "{}");
        assert_eq!(sig.amz_date, "20220313T072004Z");
    }

    #[test]
    fn test_authorization_structure() {
        let sig = sign(&make_ctx(fixed_time()), "{}");
        assert!(sig.authorization.starts_with(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20220313/us-east-1/ProductAdvertisingAPI/aws4_request, \
             SignedHeaders=content-encoding;content-type;host;x-amz-date;x-amz-target, Signature="
        ));
        // Signature is a 64-char hex digest
        let hex = extract_signature(&sig.authorization);
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_signing_is_deterministic() {
        let ctx = make_ctx(fixed_time());
        let a = sign(&ctx, r#"{"Keywords":"headphones"}"#);
        let b = sign(&ctx, r#"{"Keywords":"headphones"}"#);
        assert_eq!(a.authorization, b.authorization);
        assert_eq!(a.amz_date, b.amz_date);
    }

    #[test]
    fn test_body_changes_signature() {
        let ctx = make_ctx(fixed_time());
        let a = sign(&ctx, r#"{"Keywords":"headphones"}"#);
        let b = sign(&ctx, r#"{"Keywords":"speakers"}"#);
        assert_ne!(
            extract_signature(&a.authorization),
            extract_signature(&b.authorization)
        );
        // The date header is unaffected by the body.
        assert_eq!(a.amz_date, b.amz_date);
    }

    #[test]
    fn test_timestamp_changes_date_and_signature() {
        let a = sign(&make_ctx(fixed_time()), "{}");
        let later = Utc.with_ymd_and_hms(2022, 3, 13, 7, 20, 5).unwrap();
        let b = sign(&make_ctx(later), "{}");
        assert_ne!(a.amz_date, b.amz_date);
        assert_ne!(
            extract_signature(&a.authorization),
            extract_signature(&b.authorization)
        );
    }

    #[test]
    fn test_target_changes_signature() {
        let ctx = make_ctx(fixed_time());
        let a = sign(&ctx, "{}");
        let mut other = make_ctx(fixed_time());
        other.target = "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.GetItems";
        let b = sign(&other, "{}");
        assert_ne!(
            extract_signature(&a.authorization),
            extract_signature(&b.authorization)
        );
    }

    #[test]
    fn test_access_key_leaves_signature_unchanged() {
        // The access key only scopes the Credential field; the signature
        // itself is keyed by the secret.
        let a = sign(&make_ctx(fixed_time()), "{}");
        let mut other = make_ctx(fixed_time());
        other.access_key_id = "AKIDOTHER";
        let b = sign(&other, "{}");
        assert_eq!(
            extract_signature(&a.authorization),
            extract_signature(&b.authorization)
        );
        assert!(b.authorization.contains("Credential=AKIDOTHER/"));
    }

    #[test]
    fn test_secret_key_changes_signature() {
        let a = sign(&make_ctx(fixed_time()), "{}");
        let mut other = make_ctx(fixed_time());
        other.secret_key = "different-secret";
        let b = sign(&other, "{}");
        assert_ne!(
            extract_signature(&a.authorization),
            extract_signature(&b.authorization)
        );
    }

    #[test]
    fn test_signing_key_chain_depends_on_all_inputs() {
        let base = signing_key("secret", "20220313", "us-east-1", "ProductAdvertisingAPI");
        assert_ne!(base, signing_key("other", "20220313", "us-east-1", "ProductAdvertisingAPI"));
        assert_ne!(base, signing_key("secret", "20220314", "us-east-1", "ProductAdvertisingAPI"));
        assert_ne!(base, signing_key("secret", "20220313", "eu-west-1", "ProductAdvertisingAPI"));
        assert_ne!(base, signing_key("secret", "20220313", "us-east-1", "OtherService"));
    }

    #[test]
    fn test_hex_sha256_known_value() {
        // SHA-256 of the empty string.
        assert_eq!(
            hex_sha256(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
