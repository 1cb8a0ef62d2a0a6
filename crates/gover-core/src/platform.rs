//! Host platform detection, mapped to the release index's OS/arch naming.

/// Host OS and architecture in the release index's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

/// Detect the host platform from `std::env::consts`. Unknown values pass
/// through unchanged so the index lookup fails with "no matching file"
/// rather than a wrong guess.
pub fn host() -> Platform {
    Platform {
        os: index_os(std::env::consts::OS).to_string(),
        arch: index_arch(std::env::consts::ARCH).to_string(),
    }
}

fn index_os(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

fn index_arch(arch: &str) -> &str {
    match arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        "powerpc64" => "ppc64",
        "s390x" => "s390x",
        other => other,
    }
}

/// Artifact kind to prefer: installers on windows/darwin, archives elsewhere.
pub fn preferred_kind(os: &str) -> &'static str {
    if os == "windows" || os == "darwin" {
        "installer"
    } else {
        "archive"
    }
}

/// Shell command that installs a downloaded archive on Linux-like hosts.
/// `None` where an installer artifact is used instead.
pub fn install_hint(os: &str, filename: &str) -> Option<String> {
    if os == "windows" || os == "darwin" {
        return None;
    }
    Some(format!(
        "sudo -- sh -c \"rm -rf /usr/local/go && tar -C /usr/local -xzf {}\"",
        filename
    ))
}
