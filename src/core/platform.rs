// ─── Platform Identifier ───
// Maps host OS / CPU identifiers onto the closed vocabulary used in native
// bundle names.

/// Recognized OS tokens, in match order. First substring match wins.
const KNOWN_OS: [&str; 3] = ["win", "mac", "linux"];

/// Canonical OS token for a raw OS name.
///
/// Unrecognized names come back lower-cased and unchanged; whether that is
/// acceptable is decided by the bundle resolver, not here.
pub fn canonical_os(raw: &str) -> String {
    let name = raw.to_lowercase();
    for token in KNOWN_OS {
        if name.contains(token) {
            return token.to_string();
        }
    }
    name
}

/// Canonical architecture token for a raw architecture name.
///
/// Unrecognized architectures pass through raw and participate in bundle
/// naming as-is.
pub fn canonical_arch(raw: &str) -> String {
    match raw {
        "i386" | "x86" => "x86".to_string(),
        "amd64" | "x86-64" | "x86_64" => "x86_64".to_string(),
        other => other.to_string(),
    }
}

pub fn is_known_os(token: &str) -> bool {
    KNOWN_OS.contains(&token)
}

/// Host OS name as reported by the runtime (`linux`, `macos`, `windows`, ...).
pub fn host_os() -> String {
    std::env::consts::OS.to_string()
}

/// Host CPU architecture as reported by the runtime (`x86_64`, `aarch64`, ...).
pub fn host_arch() -> String {
    std::env::consts::ARCH.to_string()
}
