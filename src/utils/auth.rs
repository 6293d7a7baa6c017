use bcrypt::BcryptError;

// Matches the work factor the rest of the deployment was provisioned for.
const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password with bcrypt and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, BCRYPT_COST)
}

pub fn verify_password(stored_hash: &str, password: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(password, stored_hash)
}
