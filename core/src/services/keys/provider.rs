//! Key provider contract and implementations

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tp_shared::KeyConfig;

use crate::errors::{DomainError, TokenError};

use super::key_pair::KeyPair;

/// Source of the process-wide signing key pair
///
/// Implementations are shared between the signer and the verifier and must
/// hand out the same material until a new pair is generated.
pub trait KeyProvider: Send + Sync {
    /// Returns the current key pair
    fn key_pair(&self) -> Result<Arc<KeyPair>, DomainError>;

    /// Generates a new pair and makes it the current one
    fn generate_and_persist(&self) -> Result<(), DomainError>;
}

impl<T: KeyProvider + ?Sized> KeyProvider for Arc<T> {
    fn key_pair(&self) -> Result<Arc<KeyPair>, DomainError> {
        (**self).key_pair()
    }

    fn generate_and_persist(&self) -> Result<(), DomainError> {
        (**self).generate_and_persist()
    }
}

/// Key provider backed by a PEM private key file and an authorized-key
/// public key file
pub struct FileKeyProvider {
    private_key_path: PathBuf,
    public_key_path: PathBuf,
    bits: usize,
    cache: RwLock<Option<Arc<KeyPair>>>,
    // bumped by every generation; a load started earlier must not be cached
    generation: AtomicU64,
}

impl std::fmt::Debug for FileKeyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileKeyProvider")
            .field("private_key_path", &self.private_key_path)
            .field("public_key_path", &self.public_key_path)
            .field("bits", &self.bits)
            .finish()
    }
}

impl FileKeyProvider {
    pub fn new(private_key_path: impl Into<PathBuf>, public_key_path: impl Into<PathBuf>) -> Self {
        Self {
            private_key_path: private_key_path.into(),
            public_key_path: public_key_path.into(),
            bits: KeyConfig::default().bits,
            cache: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &KeyConfig) -> Self {
        Self::new(config.private_key_path.clone(), config.public_key_path.clone()).with_bits(config.bits)
    }

    /// Set the modulus size used by [`KeyProvider::generate_and_persist`]
    pub fn with_bits(mut self, bits: usize) -> Self {
        self.bits = bits;
        self
    }

    /// Returns the paths to the key files
    pub fn key_paths(&self) -> (&Path, &Path) {
        (&self.private_key_path, &self.public_key_path)
    }

    fn load(&self) -> Result<KeyPair, DomainError> {
        let private_pem = read_or_create(&self.private_key_path)?;
        let public_authorized = read_or_create(&self.public_key_path)?;
        KeyPair::from_encoded(&private_pem, &public_authorized)
    }

    fn cached(&self) -> Option<Arc<KeyPair>> {
        self.cache
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub(super) fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Caches `pair` unless a generation happened after `generation` was read
    pub(super) fn cache_if_current(&self, generation: u64, pair: Arc<KeyPair>) -> bool {
        let mut cache = self
            .cache
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.current_generation() != generation {
            return false;
        }
        *cache = Some(pair);
        true
    }
}

impl KeyProvider for FileKeyProvider {
    fn key_pair(&self) -> Result<Arc<KeyPair>, DomainError> {
        if let Some(pair) = self.cached() {
            return Ok(pair);
        }

        let generation = self.current_generation();
        let pair = Arc::new(self.load()?);
        tracing::debug!(
            private_key = %self.private_key_path.display(),
            public_key = %self.public_key_path.display(),
            bits = pair.bits(),
            "Loaded signing key pair"
        );
        if !self.cache_if_current(generation, pair.clone()) {
            tracing::debug!("Key pair replaced during load; not cached");
        }
        Ok(pair)
    }

    fn generate_and_persist(&self) -> Result<(), DomainError> {
        let pair = KeyPair::generate(self.bits)?;
        write_private(&self.private_key_path, pair.private_pem())?;
        write_private(&self.public_key_path, pair.public_authorized())?;
        {
            let mut cache = self
                .cache
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            self.generation.fetch_add(1, Ordering::AcqRel);
            *cache = None;
        }

        tracing::info!(
            private_key = %self.private_key_path.display(),
            public_key = %self.public_key_path.display(),
            bits = self.bits,
            "Generated new signing key pair"
        );
        Ok(())
    }
}

/// Key provider holding a fixed pair in memory
#[derive(Debug)]
pub struct StaticKeyProvider {
    pair: RwLock<Arc<KeyPair>>,
    bits: usize,
}

impl StaticKeyProvider {
    pub fn new(pair: KeyPair) -> Self {
        Self::from_shared(Arc::new(pair))
    }

    pub fn from_shared(pair: Arc<KeyPair>) -> Self {
        let bits = pair.bits();
        Self {
            pair: RwLock::new(pair),
            bits,
        }
    }
}

impl KeyProvider for StaticKeyProvider {
    fn key_pair(&self) -> Result<Arc<KeyPair>, DomainError> {
        Ok(self
            .pair
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn generate_and_persist(&self) -> Result<(), DomainError> {
        let pair = Arc::new(KeyPair::generate(self.bits)?);
        *self
            .pair
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = pair;
        Ok(())
    }
}

fn key_io_error(path: &Path, action: &str, err: std::io::Error) -> DomainError {
    TokenError::key_unavailable(format!("failed to {action} {}: {err}", path.display())).into()
}

fn owner_only(options: &mut OpenOptions) -> &mut OpenOptions {
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options
}

/// Reads `path` in full. A missing file is created empty with owner-only
/// permissions; existing files only need to be readable.
fn read_or_create(path: &Path) -> Result<Vec<u8>, DomainError> {
    match fs::read(path) {
        Ok(contents) => return Ok(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(key_io_error(path, "read", e)),
    }

    let mut file = owner_only(OpenOptions::new().read(true).write(true).create(true))
        .open(path)
        .map_err(|e| key_io_error(path, "create", e))?;
    let mut contents = Vec::new();
    file.read_to_end(&mut contents)
        .map_err(|e| key_io_error(path, "read", e))?;
    Ok(contents)
}

fn write_private(path: &Path, contents: &[u8]) -> Result<(), DomainError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| key_io_error(parent, "create", e))?;
    }

    let mut file = owner_only(OpenOptions::new().write(true).create(true).truncate(true))
        .open(path)
        .map_err(|e| key_io_error(path, "open", e))?;

    // mode only applies on creation
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))
            .map_err(|e| key_io_error(path, "restrict", e))?;
    }

    file.write_all(contents)
        .and_then(|_| file.sync_all())
        .map_err(|e| key_io_error(path, "write", e))
}
