//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the storefront.
///
/// A closed variant type instead of a free-form string flag: every
/// capability an endpoint relies on is an explicit predicate here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Store administrator: manages catalog, orders, coupons, settings,
    /// and may read the security log.
    Admin,
    /// Shopper: browses the catalog, submits reviews, places orders.
    Customer,
}

impl Role {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role may create, update, or delete catalog entries.
    pub fn can_manage_catalog(&self) -> bool {
        self.is_admin()
    }

    /// Check if this role may read the security event log.
    pub fn can_view_security_log(&self) -> bool {
        self.is_admin()
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = stride_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "customer" => Ok(Self::Customer),
            _ => Err(stride_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: admin, customer"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities() {
        assert!(Role::Admin.can_manage_catalog());
        assert!(Role::Admin.can_view_security_log());
        assert!(!Role::Customer.can_manage_catalog());
        assert!(!Role::Customer.can_view_security_log());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("CUSTOMER".parse::<Role>().unwrap(), Role::Customer);
        assert!("manager".parse::<Role>().is_err());
    }
}
