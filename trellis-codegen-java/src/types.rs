//! Java constructs per entry kind.

use trellis_ir::EntryKind;

/// Java-specific naming for an entry kind.
pub trait JavaKind {
    /// Base class of the accessor classes of this kind.
    fn superclass(&self) -> &'static str;

    /// Marker interface of classes that own a default accessor.
    fn supplier_interface(&self) -> &'static str;

    /// Prefix of the fields holding nested accessor instances.
    fn field_prefix(&self) -> &'static str;

    /// Constructor parameter list.
    fn constructor_params(&self) -> &'static str;

    /// Constructor arguments, forwarded to `super` and to nested instances.
    fn constructor_args(&self) -> &'static str;

    /// Return type of a leaf getter.
    fn provider_type(&self) -> &'static str;

    /// Factory method a leaf getter delegates to.
    fn factory_method(&self) -> &'static str;
}

impl JavaKind for EntryKind {
    fn superclass(&self) -> &'static str {
        match self {
            EntryKind::Library => "SubDependencyFactory",
            EntryKind::Version => "VersionFactory",
            EntryKind::Bundle => "BundleFactory",
            EntryKind::Plugin => "PluginFactory",
        }
    }

    fn supplier_interface(&self) -> &'static str {
        match self {
            EntryKind::Library => "DependencyNotationSupplier",
            EntryKind::Version => "VersionNotationSupplier",
            EntryKind::Bundle => "BundleNotationSupplier",
            EntryKind::Plugin => "PluginNotationSupplier",
        }
    }

    fn field_prefix(&self) -> &'static str {
        match self {
            EntryKind::Library => "lacc",
            EntryKind::Version => "vacc",
            EntryKind::Bundle => "bacc",
            EntryKind::Plugin => "pacc",
        }
    }

    fn constructor_params(&self) -> &'static str {
        match self {
            EntryKind::Library => "AbstractExternalDependencyFactory owner",
            EntryKind::Version | EntryKind::Plugin => {
                "ProviderFactory providers, DefaultVersionCatalog config"
            }
            EntryKind::Bundle => {
                "ObjectFactory objects, ProviderFactory providers, DefaultVersionCatalog config, ImmutableAttributesFactory attributesFactory, CapabilityNotationParser capabilityNotationParser"
            }
        }
    }

    fn constructor_args(&self) -> &'static str {
        match self {
            EntryKind::Library => "owner",
            EntryKind::Version | EntryKind::Plugin => "providers, config",
            EntryKind::Bundle => {
                "objects, providers, config, attributesFactory, capabilityNotationParser"
            }
        }
    }

    fn provider_type(&self) -> &'static str {
        match self {
            EntryKind::Library => "Provider<MinimalExternalModuleDependency>",
            EntryKind::Version => "Provider<String>",
            EntryKind::Bundle => "Provider<ExternalModuleDependencyBundle>",
            EntryKind::Plugin => "Provider<PluginDependency>",
        }
    }

    fn factory_method(&self) -> &'static str {
        match self {
            EntryKind::Library => "create",
            EntryKind::Version => "getVersion",
            EntryKind::Bundle => "createBundle",
            EntryKind::Plugin => "createPlugin",
        }
    }
}

/// Field holding the instance of a nested accessor class (`laccForAndroidxLibraryAccessors`).
pub(crate) fn field_name(kind: EntryKind, class_name: &str) -> String {
    format!("{}For{}", kind.field_prefix(), class_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name() {
        assert_eq!(
            field_name(EntryKind::Library, "AndroidxLibraryAccessors"),
            "laccForAndroidxLibraryAccessors"
        );
        assert_eq!(
            field_name(EntryKind::Bundle, "BundleAccessors"),
            "baccForBundleAccessors"
        );
    }

    #[test]
    fn test_constructor_args_match_params() {
        for kind in EntryKind::ALL {
            let names: Vec<_> = kind
                .constructor_params()
                .split(", ")
                .filter_map(|param| param.split_whitespace().last())
                .collect();
            assert_eq!(names.join(", "), kind.constructor_args());
        }
    }
}
