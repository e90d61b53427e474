// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::AuthSettings;
use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, ParamsBuilder, Version};
use rand::RngCore;

/// 不可用密码的标记，任何输入都无法与之匹配
pub const UNUSABLE_PASSWORD: &str = "!";

const SALT_LEN: usize = 16;

/// Argon2id 密码哈希器
///
/// 生成 PHC 格式的字符串（`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`），
/// 校验时使用哈希中记录的参数，因此调整成本参数不会影响已有密码。
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// 根据认证配置中的成本参数创建哈希器
    ///
    /// # 参数
    ///
    /// * `settings` - 认证配置
    ///
    /// # 返回值
    ///
    /// * `Ok(PasswordHasher)` - 参数合法
    /// * `Err(argon2::Error)` - 成本参数超出 Argon2 允许的范围
    pub fn new(settings: &AuthSettings) -> Result<Self, argon2::Error> {
        let params = ParamsBuilder::new()
            .m_cost(settings.argon2_m_cost)
            .t_cost(settings.argon2_t_cost)
            .p_cost(settings.argon2_p_cost)
            .build()?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// 生成密码哈希
    pub fn hash(&self, raw: &str) -> Result<String, PasswordHashError> {
        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt);
        let salt = SaltString::encode_b64(&salt)?;

        Ok(self.argon2.hash_password(raw.as_bytes(), &salt)?.to_string())
    }

    /// 校验明文密码是否与存储的哈希匹配
    ///
    /// 无法解析的哈希（包括 [`UNUSABLE_PASSWORD`]）一律视为不匹配。
    pub fn verify(&self, raw: &str, encoded: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(encoded) else {
            return false;
        };
        self.argon2.verify_password(raw.as_bytes(), &parsed).is_ok()
    }
}
