//! RS256 서명 키 로딩
//!
//! 키 쌍은 서버 시작 시 한 번만 읽습니다. 형식이 잘못되었거나 개인키/공개키가
//! 서로 맞지 않으면 [`AppError::ConfigError`]로 시작을 중단합니다.
//!
//! 지원 형식:
//! - 개인키: PKCS#8 (`PRIVATE KEY`) 또는 PKCS#1 (`RSA PRIVATE KEY`)
//! - 공개키: SPKI (`PUBLIC KEY`) 또는 PKCS#1 (`RSA PUBLIC KEY`)

use std::fs;
use std::path::Path;
use base64::{engine::general_purpose, Engine as _};
use rsa::{
    pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey},
    pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePublicKey, LineEnding},
    RsaPrivateKey, RsaPublicKey,
};
use crate::config::{Environment, JwtKeySource};
use crate::errors::{AppError, AppResult};

/// 자동 생성 키 길이
const GENERATED_KEY_BITS: usize = 2048;

/// 검증을 마친 PEM 키 쌍
#[derive(Clone)]
pub struct JwtKeyPair {
    pub private_pem: String,
    pub public_pem: String,
}

impl std::fmt::Debug for JwtKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeyPair")
            .field("private_pem", &"<redacted>")
            .field("public_pem", &self.public_pem)
            .finish()
    }
}

/// 설정된 출처에서 키 쌍을 읽고 검증합니다.
///
/// 파일 출처에서 키 파일이 없으면 개발/테스트 환경에서만 새 키 쌍을 생성합니다.
pub fn load_key_pair(source: &JwtKeySource, environment: &Environment) -> AppResult<JwtKeyPair> {
    let pair = match source {
        JwtKeySource::Inline { private_key_b64, public_key_b64 } => JwtKeyPair {
            private_pem: decode_inline(private_key_b64, "JWT_PRIVATE_KEY")?,
            public_pem: decode_inline(public_key_b64, "JWT_PUBLIC_KEY")?,
        },
        JwtKeySource::Files { private_key_path, public_key_path } => {
            load_from_files(private_key_path, public_key_path, environment)?
        }
    };

    validate_key_pair(&pair)?;
    log::info!("🔑 JWT RS256 키 로딩 완료");
    Ok(pair)
}

fn decode_inline(encoded: &str, name: &str) -> AppResult<String> {
    let bytes = general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| AppError::ConfigError(format!("{} is not valid base64: {}", name, e)))?;

    String::from_utf8(bytes)
        .map_err(|_| AppError::ConfigError(format!("{} is not a UTF-8 PEM document", name)))
}

fn load_from_files(
    private_key_path: &str,
    public_key_path: &str,
    environment: &Environment,
) -> AppResult<JwtKeyPair> {
    let missing = !Path::new(private_key_path).exists() || !Path::new(public_key_path).exists();

    if missing {
        if !environment.allows_dev_fallbacks() {
            return Err(AppError::ConfigError(format!(
                "JWT key files not found: {}, {}",
                private_key_path, public_key_path
            )));
        }

        log::info!("🔑 JWT 키 파일이 없어 새 RSA 키 쌍을 생성합니다...");
        generate_key_files(private_key_path, public_key_path)?;
    }

    let private_pem = fs::read_to_string(private_key_path).map_err(|e| {
        AppError::ConfigError(format!("failed to read private key '{}': {}", private_key_path, e))
    })?;
    let public_pem = fs::read_to_string(public_key_path).map_err(|e| {
        AppError::ConfigError(format!("failed to read public key '{}': {}", public_key_path, e))
    })?;

    Ok(JwtKeyPair { private_pem, public_pem })
}

fn parse_private_key(pem: &str) -> AppResult<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|e| AppError::ConfigError(format!("malformed JWT private key: {}", e)))
}

fn parse_public_key(pem: &str) -> AppResult<RsaPublicKey> {
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|e| AppError::ConfigError(format!("malformed JWT public key: {}", e)))
}

/// 두 키가 파싱되고 같은 쌍인지 확인합니다.
fn validate_key_pair(pair: &JwtKeyPair) -> AppResult<()> {
    let private_key = parse_private_key(&pair.private_pem)?;
    let public_key = parse_public_key(&pair.public_pem)?;

    if private_key.to_public_key() != public_key {
        return Err(AppError::ConfigError(
            "JWT public key does not match the private key".to_string(),
        ));
    }

    Ok(())
}

fn generation_error(error: impl std::fmt::Display) -> AppError {
    AppError::ConfigError(format!("RSA key generation failed: {}", error))
}

/// 개발용 RSA 키 쌍을 생성해 PEM 파일로 저장합니다.
fn generate_key_files(private_key_path: &str, public_key_path: &str) -> AppResult<()> {
    for path in [private_key_path, public_key_path] {
        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent).map_err(generation_error)?;
        }
    }

    let private_key = RsaPrivateKey::new(&mut rsa::rand_core::OsRng, GENERATED_KEY_BITS)
        .map_err(generation_error)?;
    let public_key = private_key.to_public_key();

    let private_pem = private_key.to_pkcs1_pem(LineEnding::LF).map_err(generation_error)?;
    fs::write(private_key_path, private_pem.as_bytes()).map_err(generation_error)?;

    let public_pem = public_key.to_public_key_pem(LineEnding::LF).map_err(generation_error)?;
    fs::write(public_key_path, public_pem.as_bytes()).map_err(generation_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(private_key_path, fs::Permissions::from_mode(0o600))
            .map_err(generation_error)?;
        fs::set_permissions(public_key_path, fs::Permissions::from_mode(0o644))
            .map_err(generation_error)?;
    }

    log::info!("📁 Private key saved: {}", private_key_path);
    log::info!("📁 Public key saved: {}", public_key_path);
    Ok(())
}
