use std::fmt;

use super::template::SubstitutionMap;

/// Release values for one package-manager manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestKind {
    /// Homebrew formula with per-platform archive hashes.
    Homebrew { version: String, hash_mac: String, hash_mac_arm: String, hash_linux: String },
    /// Scoop manifest for the 64-bit Windows archive.
    Scoop { version64: String, hash_64: String },
}

impl ManifestKind {
    /// Build a Homebrew manifest. The version is kept verbatim; hashes are trimmed.
    pub fn homebrew(
        version: impl Into<String>,
        hash_mac: &str,
        hash_mac_arm: &str,
        hash_linux: &str,
    ) -> Self {
        ManifestKind::Homebrew {
            version: version.into(),
            hash_mac: hash_mac.trim().to_string(),
            hash_mac_arm: hash_mac_arm.trim().to_string(),
            hash_linux: hash_linux.trim().to_string(),
        }
    }

    /// Build a Scoop manifest. A leading `v` tag prefix is dropped from the version.
    pub fn scoop(version: &str, hash_64: &str) -> Self {
        ManifestKind::Scoop {
            version64: strip_tag_prefix(version).to_string(),
            hash_64: hash_64.trim().to_string(),
        }
    }

    /// Placeholder names this manifest fills in.
    pub fn placeholder_names(&self) -> &'static [&'static str] {
        match self {
            ManifestKind::Homebrew { .. } => &["version", "hash_mac", "hash_mac_arm", "hash_linux"],
            ManifestKind::Scoop { .. } => &["version64", "hash_64"],
        }
    }

    /// Substitution map pairing each placeholder name with its value.
    pub fn substitutions(&self) -> SubstitutionMap {
        let values = match self {
            ManifestKind::Homebrew { version, hash_mac, hash_mac_arm, hash_linux } => {
                vec![version, hash_mac, hash_mac_arm, hash_linux]
            }
            ManifestKind::Scoop { version64, hash_64 } => vec![version64, hash_64],
        };
        self.placeholder_names().iter().copied().zip(values.into_iter().cloned()).collect()
    }

    /// Version as it will be substituted.
    pub fn version(&self) -> &str {
        match self {
            ManifestKind::Homebrew { version, .. } => version,
            ManifestKind::Scoop { version64, .. } => version64,
        }
    }

    /// Labeled hash values, in build-log order.
    pub fn labeled_hashes(&self) -> Vec<(&'static str, &str)> {
        match self {
            ManifestKind::Homebrew { hash_mac, hash_mac_arm, hash_linux, .. } => vec![
                ("MAC HASH", hash_mac.as_str()),
                ("MAC ARM HASH", hash_mac_arm.as_str()),
                ("LINUX HASH", hash_linux.as_str()),
            ],
            ManifestKind::Scoop { hash_64, .. } => vec![("HASH", hash_64.as_str())],
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestKind::Homebrew { .. } => write!(f, "homebrew"),
            ManifestKind::Scoop { .. } => write!(f, "scoop"),
        }
    }
}

fn strip_tag_prefix(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}
