use crate::registry::errors::RegistryError;

/// Validate that an address is safe to use as a file stem in the registry directory.
///
/// Hyprland addresses look like `0x55d1c0a0e2f0`; anything outside
/// `[A-Za-z0-9_-]` could escape the directory or clash with temp files.
pub fn validate_address(address: &str) -> Result<(), RegistryError> {
    let invalid = |reason| RegistryError::InvalidAddress {
        address: address.to_string(),
        reason,
    };

    if address.is_empty() {
        return Err(invalid("cannot be empty"));
    }
    if address.starts_with('.') {
        return Err(invalid("must not start with '.'"));
    }
    if !address
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid("only ASCII letters, digits, '-' and '_' are allowed"));
    }
    Ok(())
}
