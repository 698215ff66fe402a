//! Java source rendering of an accessor model.

use trellis_codegen::builder::CodeBuilder;
use trellis_ir::{AccessorClass, AccessorModel, CatalogEntry, ClassRef, EntryKind, Method, MethodTarget};

use crate::types::{JavaKind, field_name};

const IMPORTS: &[&str] = &[
    "org.gradle.api.NonNullApi",
    "org.gradle.api.artifacts.MinimalExternalModuleDependency",
    "org.gradle.plugin.use.PluginDependency",
    "org.gradle.api.artifacts.ExternalModuleDependencyBundle",
    "org.gradle.api.artifacts.MutableVersionConstraint",
    "org.gradle.api.provider.Provider",
    "org.gradle.api.model.ObjectFactory",
    "org.gradle.api.provider.ProviderFactory",
    "org.gradle.api.internal.catalog.AbstractExternalDependencyFactory",
    "org.gradle.api.internal.catalog.DefaultVersionCatalog",
    "java.util.Map",
    "org.gradle.api.internal.attributes.ImmutableAttributesFactory",
    "org.gradle.api.internal.artifacts.dsl.CapabilityNotationParser",
    "javax.inject.Inject",
];

const ROOT_CONSTRUCTOR_PARAMS: &str = "DefaultVersionCatalog config, ProviderFactory providers, ObjectFactory objects, ImmutableAttributesFactory attributesFactory, CapabilityNotationParser capabilityNotationParser";
const ROOT_CONSTRUCTOR_ARGS: &str =
    "config, providers, objects, attributesFactory, capabilityNotationParser";

/// Render the whole accessor file: package, imports, and the catalog root
/// class with every other class nested inside.
pub(crate) fn render_file(model: &AccessorModel, package: &str) -> String {
    let mut b = CodeBuilder::java();

    b.push_line(&format!("package {};", package)).push_blank();
    for import in IMPORTS {
        b.push_line(&format!("import {};", import));
    }
    b.push_blank();

    b.push_javadoc(&format!(
        "A catalog of dependencies accessible via the {{@code {}}} extension.",
        model.catalog
    ));
    b.push_line("@NonNullApi");
    b.push_line(&format!(
        "public class {} extends AbstractExternalDependencyFactory {{",
        model.root
    ));
    b.push_indent().push_blank();

    if let Some(root) = model.root_class() {
        b.push_line("private final AbstractExternalDependencyFactory owner = this;");
        render_fields(&mut b, root);
        b.push_blank();

        b.push_line("@Inject");
        b.push_line(&format!("public {}({}) {{", root.name, ROOT_CONSTRUCTOR_PARAMS));
        b.push_indent()
            .push_line(&format!("super({});", ROOT_CONSTRUCTOR_ARGS))
            .push_dedent()
            .push_line("}")
            .push_blank();

        for method in &root.methods {
            render_method(&mut b, &model.catalog, method);
        }
    }

    for class in model.classes.iter().filter(|c| c.name != model.root) {
        render_class(&mut b, &model.catalog, class);
        b.push_blank();
    }

    b.push_dedent().push_line("}");
    b.build()
}

/// Render one nested accessor class at the builder's current indentation.
pub(crate) fn render_class(b: &mut CodeBuilder, catalog: &str, class: &AccessorClass) {
    let kind = class.kind;
    let implements = if class.default_accessor().is_some() {
        format!(" implements {}", kind.supplier_interface())
    } else {
        String::new()
    };

    b.push_line(&format!(
        "public static class {} extends {}{} {{",
        class.name,
        kind.superclass(),
        implements
    ));
    b.push_indent();

    render_fields(b, class);
    b.push_blank();
    b.push_line(&format!(
        "public {}({}) {{ super({}); }}",
        class.name,
        kind.constructor_params(),
        kind.constructor_args()
    ));
    b.push_blank();

    for method in &class.methods {
        render_method(b, catalog, method);
    }

    b.push_dedent().push_line("}");
}

fn render_fields(b: &mut CodeBuilder, class: &AccessorClass) {
    for class_ref in class.group_methods().filter_map(Method::class_ref) {
        b.push_line(&format!(
            "private final {} {} = new {}({});",
            class_ref.name,
            field_name(class_ref.kind, &class_ref.name),
            class_ref.name,
            class_ref.kind.constructor_args()
        ));
    }
}

fn render_method(b: &mut CodeBuilder, catalog: &str, method: &Method) {
    match &method.target {
        MethodTarget::Leaf(entry) => {
            b.push_javadoc(&leaf_doc(entry, catalog));
            let signature = format!("public {} {}()", entry.kind.provider_type(), method.name);
            let call = format!(
                "return {}(\"{}\");",
                entry.kind.factory_method(),
                escape_string(&entry.alias)
            );
            if entry.kind == EntryKind::Library {
                b.push_line(&format!("{} {{", signature))
                    .push_indent()
                    .push_line(&call)
                    .push_dedent()
                    .push_line("}");
            } else {
                b.push_line(&format!("{} {{ {} }}", signature, call));
            }
        }
        MethodTarget::Group(class_ref) => {
            b.push_javadoc(&group_doc(class_ref));
            b.push_line(&format!("public {} {}() {{", class_ref.name, method.name))
                .push_indent()
                .push_line(&format!(
                    "return {};",
                    field_name(class_ref.kind, &class_ref.name)
                ))
                .push_dedent()
                .push_line("}");
        }
    }
    b.push_blank();
}

fn group_doc(class_ref: &ClassRef) -> String {
    let path = class_ref.path.join(".");
    let location = match (class_ref.kind, path.is_empty()) {
        (EntryKind::Library, _) => path,
        (kind, true) => kind.plural().to_string(),
        (kind, false) => format!("{}.{}", kind.plural(), path),
    };
    format!(
        "Group of {} at <b>{}</b>",
        class_ref.kind.plural(),
        escape_doc(&location)
    )
}

fn leaf_doc(entry: &CatalogEntry, catalog: &str) -> String {
    let mut lines = Vec::new();

    match entry.kind {
        EntryKind::Library => {
            lines.push(format!(
                "Dependency provider for <b>{}</b> with <b>{}</b> coordinates and",
                escape_doc(entry.local_name()),
                escape_doc(&entry.coordinate)
            ));
            lines.push(version_clause(entry));
        }
        EntryKind::Plugin => {
            lines.push(format!(
                "Plugin provider for <b>{}</b> with plugin id <b>{}</b> and",
                escape_doc(&entry.alias),
                escape_doc(&entry.coordinate)
            ));
            lines.push(version_clause(entry));
        }
        EntryKind::Version => {
            lines.push(format!(
                "Version alias <b>{}</b> with value <b>{}</b>",
                escape_doc(&entry.alias),
                escape_doc(entry.literal_value.as_deref().unwrap_or_default())
            ));
            lines.push("<p>".to_string());
            lines.push("If the version is a rich version and cannot be represented as a".to_string());
            lines.push("single version string, an empty string is returned.".to_string());
        }
        EntryKind::Bundle => {
            lines.push(format!(
                "Dependency bundle provider for <b>{}</b> which contains the following dependencies:",
                escape_doc(&entry.alias)
            ));
            lines.push("<ul>".to_string());
            for member in entry.coordinate.split(',').map(str::trim).filter(|m| !m.is_empty()) {
                lines.push(format!("    <li>{}</li>", escape_doc(member)));
            }
            lines.push("</ul>".to_string());
        }
    }

    lines.push("<p>".to_string());
    lines.push(format!(
        "This {} was declared in catalog {}",
        declared_noun(entry.kind),
        catalog
    ));
    lines.join("\n")
}

fn version_clause(entry: &CatalogEntry) -> String {
    match (&entry.version_ref, &entry.literal_value) {
        (Some(version_ref), _) => format!("with version reference <b>{}</b>", escape_doc(version_ref)),
        (None, Some(value)) => format!("with version <b>{}</b>", escape_doc(value)),
        (None, None) => "with <b>no version specified</b>".to_string(),
    }
}

fn declared_noun(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Library => "dependency",
        EntryKind::Version => "version",
        EntryKind::Bundle => "bundle",
        EntryKind::Plugin => "plugin",
    }
}

/// Keep user text from terminating the surrounding comment.
fn escape_doc(s: &str) -> String {
    s.replace("*/", "*&#47;")
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use trellis_codegen::{NameResolver, build_model};

    use super::*;

    fn model(entries: &[CatalogEntry]) -> AccessorModel {
        build_model("libs", &NameResolver::resolve(entries).unwrap()).unwrap()
    }

    fn class(model: &AccessorModel, name: &str) -> String {
        let mut b = CodeBuilder::java();
        render_class(&mut b, &model.catalog, model.class(name).unwrap());
        b.build()
    }

    #[test]
    fn test_render_default_accessor_class() {
        let model = model(&[
            CatalogEntry::library("androidx.ui", "androidx.compose.ui:ui"),
            CatalogEntry::library("androidx.ui.graphics", "androidx.compose.ui:ui-graphics")
                .with_version_ref("compose"),
        ]);

        insta::assert_snapshot!(class(&model, "AndroidxUiLibraryAccessors"), @r#"
        public static class AndroidxUiLibraryAccessors extends SubDependencyFactory implements DependencyNotationSupplier {

            public AndroidxUiLibraryAccessors(AbstractExternalDependencyFactory owner) { super(owner); }

            /**
             * Dependency provider for <b>ui</b> with <b>androidx.compose.ui:ui</b> coordinates and
             * with <b>no version specified</b>
             * <p>
             * This dependency was declared in catalog libs
             */
            public Provider<MinimalExternalModuleDependency> asProvider() {
                return create("androidx.ui");
            }

            /**
             * Dependency provider for <b>graphics</b> with <b>androidx.compose.ui:ui-graphics</b> coordinates and
             * with version reference <b>compose</b>
             * <p>
             * This dependency was declared in catalog libs
             */
            public Provider<MinimalExternalModuleDependency> getGraphics() {
                return create("androidx.ui.graphics");
            }

        }
        "#);
    }

    #[test]
    fn test_render_group_fields() {
        let model = model(&[
            CatalogEntry::plugin("kotlin.jvm", "org.jetbrains.kotlin.jvm").with_version_ref("kotlin"),
        ]);

        insta::assert_snapshot!(class(&model, "PluginAccessors"), @r"
        public static class PluginAccessors extends PluginFactory {
            private final KotlinPluginAccessors paccForKotlinPluginAccessors = new KotlinPluginAccessors(providers, config);

            public PluginAccessors(ProviderFactory providers, DefaultVersionCatalog config) { super(providers, config); }

            /**
             * Group of plugins at <b>plugins.kotlin</b>
             */
            public KotlinPluginAccessors getKotlin() {
                return paccForKotlinPluginAccessors;
            }

        }
        ");
    }

    #[test]
    fn test_render_version_one_liner() {
        let model = model(&[CatalogEntry::version("compose.plugin", "1.6.11")]);
        let rendered = class(&model, "ComposeVersionAccessors");

        assert!(rendered.contains(" * Version alias <b>compose.plugin</b> with value <b>1.6.11</b>\n"));
        assert!(rendered.contains(
            "public Provider<String> getPlugin() { return getVersion(\"compose.plugin\"); }\n"
        ));
    }

    #[test]
    fn test_render_bundle_members() {
        let model = model(&[CatalogEntry::bundle("compose", &["androidx.ui", "androidx.ui.graphics"])]);
        let rendered = class(&model, "BundleAccessors");

        assert!(rendered.contains(" *     <li>androidx.ui</li>\n"));
        assert!(rendered.contains(" *     <li>androidx.ui.graphics</li>\n"));
        assert!(rendered.contains("return createBundle(\"compose\");"));
    }

    #[test]
    fn test_group_doc_paths() {
        let library = ClassRef {
            name: "AndroidxUiLibraryAccessors".into(),
            kind: EntryKind::Library,
            path: vec!["androidx".into(), "ui".into()],
        };
        assert_eq!(
            group_doc(&library),
            "Group of libraries at <b>androidx.ui</b>"
        );

        let versions = ClassRef {
            name: "VersionAccessors".into(),
            kind: EntryKind::Version,
            path: Vec::new(),
        };
        assert_eq!(
            group_doc(&versions),
            "Group of versions at <b>versions</b>"
        );
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_doc("a*/b"), "a*&#47;b");
        assert_eq!(escape_string(r#"a"b\c"#), r#"a\"b\\c"#);
        assert_eq!(escape_string("a\nb\r\tc"), r"a\nb\r\tc");
        assert_eq!(escape_string("a\u{1}b"), r"a\u0001b");
    }
}
