use secrecy::Secret;

/// Account credential, either as submitted by the user or as produced by a
/// [`PasswordHasher`](crate::PasswordHasher).
///
/// Both variants keep their contents behind [`Secret`] so neither leaks
/// through `Debug` output or tracing fields.
#[derive(Debug, Clone)]
pub enum Password {
    Plaintext(Secret<String>),
    Hashed(Secret<String>),
}

impl Password {
    pub fn plaintext(password: impl Into<String>) -> Self {
        Self::Plaintext(Secret::new(password.into()))
    }

    pub fn hashed(hash: impl Into<String>) -> Self {
        Self::Hashed(Secret::new(hash.into()))
    }

    pub fn is_hashed(&self) -> bool {
        matches!(self, Self::Hashed(_))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        match self {
            Self::Plaintext(secret) | Self::Hashed(secret) => secret,
        }
    }
}
