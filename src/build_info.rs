//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string, e.g. `skyflap 0.1.0 (2026-10-17, a1b2c3d)`.
pub fn version_line() -> String {
    format!(
        "skyflap {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
