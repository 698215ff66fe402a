use trellis_codegen::{Error, NameResolver, pipeline::Pipeline};
use trellis_ir::{CatalogEntry, CatalogSnapshot, EntryKind, MethodTarget, ReturnKind};

fn sample_catalog() -> CatalogSnapshot {
    CatalogSnapshot::new(
        "libs",
        vec![
            CatalogEntry::version("agp", "8.5.0"),
            CatalogEntry::version("compose", "1.6.8"),
            CatalogEntry::version("compose.plugin", "1.6.11"),
            CatalogEntry::version("junitVersion", "4.13.2"),
            CatalogEntry::library("androidx.core.ktx", "androidx.core:core-ktx"),
            CatalogEntry::library("androidx.ui", "androidx.compose.ui:ui").with_version_ref("compose"),
            CatalogEntry::library("androidx.ui.graphics", "androidx.compose.ui:ui-graphics")
                .with_version_ref("compose"),
            CatalogEntry::library("androidx.ui.test.junit4", "androidx.compose.ui:ui-test-junit4")
                .with_version_ref("compose"),
            CatalogEntry::library("androidx.ui.test.manifest", "androidx.compose.ui:ui-test-manifest")
                .with_version_ref("compose"),
            CatalogEntry::library("junit", "junit:junit").with_version_ref("junitVersion"),
            CatalogEntry::bundle("compose", &["androidx.ui", "androidx.ui.graphics"]),
            CatalogEntry::plugin("android.application", "com.android.application")
                .with_version_ref("agp"),
            CatalogEntry::plugin("compose.compiler", "org.jetbrains.kotlin.plugin.compose"),
        ],
    )
}

#[test]
fn test_pipeline_builds_complete_model() {
    let mut ctx = Pipeline::new().run(sample_catalog()).unwrap();
    assert!(!ctx.has_warnings());

    let model = ctx.take_model().unwrap();
    let names: Vec<_> = model.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "AndroidxCoreLibraryAccessors",
            "AndroidxUiTestLibraryAccessors",
            "AndroidxUiLibraryAccessors",
            "AndroidxLibraryAccessors",
            "ComposeVersionAccessors",
            "VersionAccessors",
            "BundleAccessors",
            "AndroidPluginAccessors",
            "ComposePluginAccessors",
            "PluginAccessors",
            "LibrariesForLibs",
        ]
    );
}

#[test]
fn test_compose_plugin_version_getter() {
    let mut ctx = Pipeline::new().run(sample_catalog()).unwrap();
    let model = ctx.take_model().unwrap();

    let compose = model.class("ComposeVersionAccessors").unwrap();
    let plugin = compose.method("getPlugin").unwrap();
    assert_eq!(plugin.return_kind, ReturnKind::Version);
    assert_eq!(
        plugin.entry().and_then(|e| e.literal_value.as_deref()),
        Some("1.6.11")
    );
    assert_eq!(
        compose.default_accessor().map(|m| m.name.as_str()),
        Some("asProvider")
    );

    let versions = model.class("VersionAccessors").unwrap();
    let names: Vec<_> = versions.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["getAgp", "getJunitVersion", "getCompose"]);
}

#[test]
fn test_nested_test_group() {
    let resolved = NameResolver::resolve(&sample_catalog().entries).unwrap();
    let ui = resolved
        .libraries
        .child("androidx")
        .and_then(|g| g.child("ui"))
        .unwrap();

    assert_eq!(
        ui.default.as_ref().map(|l| l.entry.alias.as_str()),
        Some("androidx.ui")
    );
    assert_eq!(ui.leaves.keys().collect::<Vec<_>>(), vec!["graphics"]);
    let test = ui.child("test").unwrap();
    assert_eq!(
        test.leaves.keys().collect::<Vec<_>>(),
        vec!["junit4", "manifest"]
    );
}

#[test]
fn test_catalog_root_exposes_namespaces() {
    let mut ctx = Pipeline::new().run(sample_catalog()).unwrap();
    let model = ctx.take_model().unwrap();
    let root = model.root_class().unwrap();

    let names: Vec<_> = root.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["getJunit", "getAndroidx", "getVersions", "getBundles", "getPlugins"]
    );
    assert!(matches!(
        &root.method("getPlugins").unwrap().target,
        MethodTarget::Group(class) if class.name == "PluginAccessors"
    ));
    assert_eq!(model.classes_of(EntryKind::Bundle).count(), 1);
}

#[test]
fn test_ambiguous_catalog_fails_with_diagnostic() {
    let mut snapshot = sample_catalog();
    snapshot
        .entries
        .push(CatalogEntry::library("androidx.UI.graphics", "androidx.compose.ui:ui-graphics-legacy"));

    let err = NameResolver::resolve(&snapshot.entries).unwrap_err();
    assert!(matches!(*err, Error::AmbiguousKey { .. }));

    let mut ctx = trellis_codegen::pipeline::CompilationContext::new(snapshot);
    assert!(Pipeline::new().run_in(&mut ctx).is_err());
    assert_eq!(ctx.error_count(), 1);
    assert_eq!(ctx.warning_count(), 1, "case-variant lint should warn first");
}
