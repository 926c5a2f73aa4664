use crate::document::{PomDocument, XmlElement};
use crate::resolver::resolve_property;
use crate::version::normalize_java_version;

/// artifactId of the plugin that owns source/target level configuration.
pub const COMPILER_PLUGIN: &str = "maven-compiler-plugin";

/// Find the declared Java language level, already normalized.
///
/// Declaration sites are searched in priority order, first hit wins:
/// 1. properties (`maven.compiler.source`, else `java.version`),
/// 2. the compiler plugin under `build/plugins`,
/// 3. the compiler plugin under `build/pluginManagement/plugins`,
/// 4. each profile's own `build/plugins`, in document order.
///
/// Candidates pass through property resolution before normalization.
pub fn locate_java_version(doc: &PomDocument) -> Option<String> {
    let root = doc.root();
    let properties = root.find_child("properties");

    let raw = version_from_properties(properties)
        .or_else(|| version_from_build(root, properties))
        .or_else(|| version_from_profiles(root, properties))?;
    Some(normalize_java_version(&raw))
}

fn version_from_properties(properties: Option<&XmlElement>) -> Option<String> {
    let properties = properties?;
    let declared = properties
        .find_child("maven.compiler.source")
        .or_else(|| properties.find_child("java.version"))?;
    resolve_property(declared.text().as_deref(), Some(properties))
}

fn version_from_build(root: &XmlElement, properties: Option<&XmlElement>) -> Option<String> {
    let build = root.find_child("build")?;

    if let Some(found) = build
        .find_child("plugins")
        .and_then(|plugins| version_from_plugin_container(plugins, properties))
    {
        return Some(found);
    }

    build
        .find_child("pluginManagement")
        .and_then(|management| management.find_child("plugins"))
        .and_then(|plugins| version_from_plugin_container(plugins, properties))
}

fn version_from_profiles(root: &XmlElement, properties: Option<&XmlElement>) -> Option<String> {
    let profiles = root.find_child("profiles")?;
    for profile in profiles.find_all("profile") {
        let found = profile
            .find_child("build")
            .and_then(|build| build.find_child("plugins"))
            .and_then(|plugins| version_from_plugin_container(plugins, properties));
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Search one `plugins` container for the compiler plugin's declared
/// level, preferring `source` over `target`.
fn version_from_plugin_container(
    plugins: &XmlElement,
    properties: Option<&XmlElement>,
) -> Option<String> {
    for plugin in plugins.find_all("plugin") {
        let artifact_id = plugin.find_child("artifactId").and_then(XmlElement::text);
        if artifact_id.as_deref() != Some(COMPILER_PLUGIN) {
            continue;
        }
        if let Some(configuration) = plugin.find_child("configuration") {
            if let Some(source) = configuration.find_child("source") {
                return resolve_property(source.text().as_deref(), properties);
            }
            if let Some(target) = configuration.find_child("target") {
                return resolve_property(target.text().as_deref(), properties);
            }
        }
    }
    None
}
