//! URL templates for gateway resources.
//!
//! Every template is `{base}/{version}/...` joined literally with single
//! slashes. The base URL is used verbatim: a trailing slash on it is not
//! collapsed.

use crate::error::RequestError;
use crate::resources::SERVICE_PATH;

/// Strategy for composing a resource URL.
///
/// Templates with an identifier placeholder name it, so that a missing
/// identifier can be reported precisely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlPattern {
    /// The command endpoint: `{base}/{version}/service.cgi`.
    Service {
        /// Service version.
        version: &'static str,
    },

    /// A collection: `{base}/{version}/{resource}`.
    Entity {
        /// API version.
        version: &'static str,
        /// Collection name.
        resource: &'static str,
    },

    /// A resource addressed by one identifier: `{base}/{version}/{resource}/{id}`.
    ParamEntity {
        /// API version.
        version: &'static str,
        /// Collection name.
        resource: &'static str,
        /// Name of the identifier placeholder.
        placeholder: &'static str,
    },

    /// A resource nested under a parent:
    /// `{base}/{version}/{parent}/{parentId}/{child}`.
    DependentEntity {
        /// API version.
        version: &'static str,
        /// Parent collection name.
        parent: &'static str,
        /// Name of the parent identifier placeholder.
        placeholder: &'static str,
        /// Child collection name.
        child: &'static str,
    },
}

impl UrlPattern {
    /// Returns the identifier placeholder name, if the template has one.
    #[must_use]
    pub const fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Service { .. } | Self::Entity { .. } => None,
            Self::ParamEntity { placeholder, .. } | Self::DependentEntity { placeholder, .. } => {
                Some(placeholder)
            }
        }
    }

    /// Composes the URL for `base`, filling the placeholder with `id`.
    ///
    /// Templates without a placeholder ignore `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingIdentifier`] if the template has a
    /// placeholder and `id` is absent or empty.
    pub fn build(&self, base: &str, id: Option<&str>) -> Result<String, RequestError> {
        match *self {
            Self::Service { version } => Ok(format!("{base}/{version}/{SERVICE_PATH}")),
            Self::Entity { version, resource } => Ok(format!("{base}/{version}/{resource}")),
            Self::ParamEntity {
                version,
                resource,
                placeholder,
            } => {
                let id = non_empty(id, placeholder)?;
                Ok(format!("{base}/{version}/{resource}/{id}"))
            }
            Self::DependentEntity {
                version,
                parent,
                placeholder,
                child,
            } => {
                let id = non_empty(id, placeholder)?;
                Ok(format!("{base}/{version}/{parent}/{id}/{child}"))
            }
        }
    }
}

fn non_empty<'a>(id: Option<&'a str>, placeholder: &'static str) -> Result<&'a str, RequestError> {
    id.filter(|id| !id.is_empty())
        .ok_or(RequestError::MissingIdentifier(placeholder))
}
