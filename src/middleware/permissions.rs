//! Políticas de acceso por recurso
//!
//! Cada recurso declara una política y los controllers la evalúan con
//! `authorize` antes de tocar datos. El staff administra el catálogo
//! completo; los usuarios comunes leen el catálogo y operan solo sobre
//! sus propias órdenes y tickets.

use uuid::Uuid;

use crate::middleware::auth::AuthenticatedUser;
use crate::utils::errors::AppError;

/// Política de acceso de un recurso
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Solo el staff, para lecturas y escrituras
    StaffOnly,
    /// Lectura pública (incluso anónima); solo el staff escribe
    ReadOnlyOrStaff,
    /// El dueño del recurso o el staff
    OwnerOrStaff,
    /// Estrictamente el dueño; el staff no cuenta
    OwnerOnly,
}

/// Tipo de operación que se intenta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Read,
    Write,
}

/// Evaluar una política contra el usuario de la request.
///
/// `owner` es el dueño del recurso concreto cuando la política lo
/// necesita; las políticas de catálogo lo ignoran.
pub fn authorize(
    policy: AccessPolicy,
    kind: AccessKind,
    user: Option<&AuthenticatedUser>,
    owner: Option<Uuid>,
) -> Result<(), AppError> {
    // Las lecturas de catálogo son públicas, incluso sin token
    if policy == AccessPolicy::ReadOnlyOrStaff && kind == AccessKind::Read {
        return Ok(());
    }

    let user = user.ok_or_else(|| {
        AppError::Unauthorized("Authentication credentials were not provided.".to_string())
    })?;

    let allowed = match policy {
        AccessPolicy::StaffOnly => user.is_staff,
        AccessPolicy::ReadOnlyOrStaff => user.is_staff,
        AccessPolicy::OwnerOrStaff => user.is_staff || owner == Some(user.user_id),
        AccessPolicy::OwnerOnly => owner == Some(user.user_id),
    };

    if allowed {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You do not have permission to perform this action.".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "admin@test.com".to_string(),
            is_staff: true,
        }
    }

    fn regular() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "user@test.com".to_string(),
            is_staff: false,
        }
    }

    #[test]
    fn test_anonymous_reads_public_catalog() {
        assert!(authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Read, None, None).is_ok());
    }

    #[test]
    fn test_anonymous_writes_unauthorized() {
        let err = authorize(AccessPolicy::ReadOnlyOrStaff, AccessKind::Write, None, None)
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_staff_only_rejects_regular_users() {
        let user = regular();
        let err = authorize(
            AccessPolicy::StaffOnly,
            AccessKind::Read,
            Some(&user),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn test_read_only_or_staff_rejects_regular_writes() {
        let user = regular();
        let admin = staff();
        assert!(authorize(
            AccessPolicy::ReadOnlyOrStaff,
            AccessKind::Write,
            Some(&user),
            None
        )
        .is_err());
        assert!(authorize(
            AccessPolicy::ReadOnlyOrStaff,
            AccessKind::Write,
            Some(&admin),
            None
        )
        .is_ok());
    }

    #[test]
    fn test_owner_or_staff() {
        let user = regular();
        let admin = staff();

        assert!(authorize(
            AccessPolicy::OwnerOrStaff,
            AccessKind::Write,
            Some(&user),
            Some(user.user_id)
        )
        .is_ok());
        assert!(authorize(
            AccessPolicy::OwnerOrStaff,
            AccessKind::Write,
            Some(&admin),
            Some(user.user_id)
        )
        .is_ok());
        assert!(authorize(
            AccessPolicy::OwnerOrStaff,
            AccessKind::Write,
            Some(&user),
            Some(Uuid::new_v4())
        )
        .is_err());
    }

    #[test]
    fn test_owner_only_denies_staff() {
        let admin = staff();
        let owner = Uuid::new_v4();

        let err = authorize(
            AccessPolicy::OwnerOnly,
            AccessKind::Write,
            Some(&admin),
            Some(owner),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
