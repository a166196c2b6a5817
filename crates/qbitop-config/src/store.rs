//! `QbConfig`: load/mutate/save facade over the daemon's configuration file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose};
use rand::RngCore;
use sha2::Sha512;
use tracing::debug;

use crate::document::ConfDocument;
use crate::error::{ConfigError, ConfigResult};

/// Salt length dictated by the daemon's password verifier.
const SALT_LEN: usize = 16;
/// PBKDF2 iteration count dictated by the daemon's password verifier.
const PBKDF2_ITERATIONS: u32 = 100_000;
/// SHA-512 native output length.
const DIGEST_LEN: usize = 64;

const SECTION_LEGAL: &str = "LegalNotice";
const SECTION_META: &str = "Meta";
const SECTION_PREFERENCES: &str = "Preferences";
const SECTION_BITTORRENT: &str = "BitTorrent";

const KEY_ACCEPTED: &str = "Accepted";
const KEY_MIGRATION_VERSION: &str = "MigrationVersion";
const KEY_WEBUI_ADDRESS: &str = r"WebUI\Address";
const KEY_WEBUI_PORT: &str = r"WebUI\Port";
const KEY_WEBUI_USERNAME: &str = r"WebUI\Username";
const KEY_WEBUI_PASSWORD: &str = r"WebUI\Password_PBKDF2";
const KEY_KEEP_PARTIAL_EXT: &str = r"Session\AddExtensionToIncompleteFiles";
const KEY_DEFAULT_SAVE_PATH: &str = r"Session\DefaultSavePath";
const KEY_INTERFACE: &str = r"Session\Interface";
const KEY_INTERFACE_NAME: &str = r"Session\InterfaceName";

/// Default save path handed to the daemon for completed downloads.
const DEFAULT_SAVE_PATH: &str = "/srv";

/// Configuration store for the daemon's `qBittorrent.conf`.
///
/// Loading a missing file yields an empty document; setters mutate in
/// memory; [`QbConfig::save`] rewrites the whole backing file.
#[derive(Debug, Clone)]
pub struct QbConfig {
    path: PathBuf,
    document: ConfDocument,
}

impl QbConfig {
    /// Load the configuration file at `path`, treating a missing file as an
    /// empty document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the existing file is malformed
    /// and [`ConfigError::Io`] when it exists but cannot be read.
    pub fn load(path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let path = path.into();
        let document = match fs::read_to_string(&path) {
            Ok(raw) => ConfDocument::parse(&path, &raw)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file absent; starting empty");
                ConfDocument::new()
            }
            Err(err) => return Err(ConfigError::io("load.read", &path, err)),
        };
        Ok(Self { path, document })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// In-memory document, mainly for inspection in tests.
    #[must_use]
    pub const fn document(&self) -> &ConfDocument {
        &self.document
    }

    /// Generic setter; see [`ConfDocument::set`] for the ordering rules.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.document.set(section, key, value);
    }

    /// Apply the fixed bootstrap values expected on a fresh install.
    pub fn setup(&mut self) {
        self.set(SECTION_LEGAL, KEY_ACCEPTED, "true");
        self.set(SECTION_META, KEY_MIGRATION_VERSION, "3");
        self.set(SECTION_PREFERENCES, KEY_WEBUI_ADDRESS, "*");
        self.set(SECTION_BITTORRENT, KEY_KEEP_PARTIAL_EXT, "true");
        self.set(SECTION_BITTORRENT, KEY_DEFAULT_SAVE_PATH, DEFAULT_SAVE_PATH);
    }

    /// Set the WebUI listen port.
    pub fn set_web_port(&mut self, port: u16) {
        self.set(SECTION_PREFERENCES, KEY_WEBUI_PORT, &port.to_string());
    }

    /// Set the WebUI login username.
    pub fn set_web_username(&mut self, username: &str) {
        self.set(SECTION_PREFERENCES, KEY_WEBUI_USERNAME, username);
    }

    /// Set the WebUI password digest.
    ///
    /// The stored value is `@ByteArray(<b64 salt>:<b64 digest>)` where the
    /// digest is PBKDF2-HMAC-SHA512 over the UTF-8 password with a fresh
    /// 16-byte random salt and 100 000 iterations. Each call draws a new
    /// salt, so repeated calls with the same password store different
    /// values; the daemon only requires validity, never equality.
    pub fn set_web_password(&mut self, password: &str) {
        let value = password_digest(password);
        self.set(SECTION_PREFERENCES, KEY_WEBUI_PASSWORD, &value);
    }

    /// Bind the session to `interface`, setting both the interface id and
    /// its display name to the same literal.
    pub fn set_bittorrent_interface(&mut self, interface: &str) {
        self.set(SECTION_BITTORRENT, KEY_INTERFACE, interface);
        self.set(SECTION_BITTORRENT, KEY_INTERFACE_NAME, interface);
    }

    /// Serialize the full document back to the backing path, truncating any
    /// previous content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be written.
    pub fn save(&self) -> ConfigResult<()> {
        fs::write(&self.path, self.document.render())
            .map_err(|err| ConfigError::io("save.write", &self.path, err))
    }
}

fn password_digest(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);

    let mut digest = [0u8; DIGEST_LEN];
    pbkdf2::pbkdf2_hmac::<Sha512>(
        password.as_bytes(),
        &salt,
        PBKDF2_ITERATIONS,
        &mut digest,
    );

    format!(
        "@ByteArray({}:{})",
        general_purpose::STANDARD.encode(salt),
        general_purpose::STANDARD.encode(digest)
    )
}
