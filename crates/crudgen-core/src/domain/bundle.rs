//! Data-bundle construction: naming bundle + archetype → [`RenderData`].
//!
//! One unified bundle is built per artifact family; templates consume the
//! subset of keys they need. Keys are spelled the way the templates spell
//! them (`Domain`, `domain`, `isPaginated`), not in Rust convention.

use crate::domain::archetype::ControllerArchetype;
use crate::domain::naming::NamingBundle;
use crate::domain::render_data::RenderData;

/// Bundle handed to every backend template (controller, test, docs).
pub fn backend_bundle(naming: &NamingBundle, archetype: ControllerArchetype) -> RenderData {
    let controller_name = archetype.controller_identifier(naming.domain());
    let service_name = controller_name.replace("Controller", "Service");
    let shape = archetype.shape();

    RenderData::new()
        .with("Domain", naming.domain())
        .with("domain", naming.domain_lower())
        .with("domains", naming.domain_plural())
        .with("package", naming.package_name())
        .with("method", archetype.method().as_str())
        .with("methodLower", archetype.method().as_lower())
        .with("methodName", archetype.method_name(naming.domain()))
        .with("controllerName", controller_name)
        .with("serviceName", service_name)
        .with("endpoint", archetype.endpoint(naming))
        .with("description", archetype.description())
        .with("isPlural", shape.plural)
        .with("isPaginated", shape.is_paginated())
}

/// Bundle handed to the frontend page and composable templates.
pub fn frontend_bundle(naming: &NamingBundle) -> RenderData {
    RenderData::new()
        .with("Domain", naming.domain())
        .with("domain", naming.domain_lower())
        .with("domains", naming.domain_plural())
        .with("package", naming.package_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naming() -> NamingBundle {
        NamingBundle::derive("billing.invoice").unwrap()
    }

    #[test]
    fn backend_bundle_for_list_archetype() {
        let data = backend_bundle(&naming(), ControllerArchetype::GetAll);

        assert_eq!(data.get_str("Domain"), Some("Invoice"));
        assert_eq!(data.get_str("domain"), Some("invoice"));
        assert_eq!(data.get_str("domains"), Some("invoices"));
        assert_eq!(data.get_str("package"), Some("billing.invoice"));
        assert_eq!(data.get_str("method"), Some("GET"));
        assert_eq!(data.get_str("methodLower"), Some("get"));
        assert_eq!(data.get_str("methodName"), Some("getAllInvoice"));
        assert_eq!(data.get_str("controllerName"), Some("GetInvoicesController"));
        assert_eq!(data.get_str("serviceName"), Some("GetInvoicesService"));
        assert_eq!(data.get_str("endpoint"), Some("/invoices"));
        assert_eq!(data.get_bool("isPlural"), Some(true));
        assert_eq!(data.get_bool("isPaginated"), Some(true));
    }

    #[test]
    fn backend_bundle_for_simple_archetype() {
        let data = backend_bundle(&naming(), ControllerArchetype::Update);

        assert_eq!(data.get_str("method"), Some("PUT"));
        assert_eq!(
            data.get_str("controllerName"),
            Some("UpdateInvoiceController")
        );
        assert_eq!(data.get_str("serviceName"), Some("UpdateInvoiceService"));
        assert_eq!(data.get_str("endpoint"), Some("/invoice"));
        assert_eq!(data.get_bool("isPlural"), Some(false));
        assert_eq!(data.get_bool("isPaginated"), Some(false));
    }

    #[test]
    fn frontend_bundle_keys() {
        let data = frontend_bundle(&naming());
        assert_eq!(data.get_str("Domain"), Some("Invoice"));
        assert_eq!(data.get_str("domains"), Some("invoices"));
        assert_eq!(data.len(), 4);
    }
}
