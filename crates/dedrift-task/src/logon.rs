//! Logon-type resolution.

use std::collections::HashSet;

use crate::error::TaskError;
use crate::types::LogonType;

/// Accounts the scheduler signs in without a password.
const WELL_KNOWN_ACCOUNTS: [&str; 8] = [
    "SYSTEM",
    "NT AUTHORITY\\SYSTEM",
    "LOCAL SERVICE",
    "NT AUTHORITY\\LOCAL SERVICE",
    "NETWORK SERVICE",
    "NT AUTHORITY\\NETWORK SERVICE",
    "USERS",
    "BUILTIN\\USERS",
];

/// The set of well-known service-account names, matched case-insensitively.
///
/// `Default` carries the Windows built-ins; callers with additional managed
/// accounts supply their own list.
#[derive(Debug, Clone)]
pub struct ServiceAccounts(HashSet<String>);

impl ServiceAccounts {
    /// Build a set from caller-supplied account names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            names
                .into_iter()
                .map(|name| name.into().to_uppercase())
                .collect(),
        )
    }

    /// Whether `user` names a service account, ignoring case.
    pub fn contains(&self, user: &str) -> bool {
        self.0.contains(&user.to_uppercase())
    }
}

impl Default for ServiceAccounts {
    fn default() -> Self {
        Self::new(WELL_KNOWN_ACCOUNTS)
    }
}

/// Decide the authentication mode a task must run under.
///
/// Service accounts need no password. Everyone else must supply one; the
/// interactive flag then picks between the interactive token and the stored
/// password.
pub fn resolve_logon_type(
    user: &str,
    password: Option<&str>,
    interactive_enabled: bool,
    accounts: &ServiceAccounts,
) -> Result<LogonType, TaskError> {
    if accounts.contains(user) {
        return Ok(LogonType::ServiceAccount);
    }

    if password.is_none() {
        return Err(TaskError::MissingPassword {
            user: user.to_string(),
        });
    }

    Ok(if interactive_enabled {
        LogonType::InteractiveTokenOrPassword
    } else {
        LogonType::Password
    })
}
