use crate::document::{PomDocument, XmlElement};
use crate::locator::COMPILER_PLUGIN;
use crate::version::normalize_java_version;

/// Write a normalized Java level into every declaration site that exists.
///
/// Missing sites are never created: properties get `maven.compiler.source`
/// if present, else `java.version` if present; every compiler plugin under
/// `build/plugins` and `build/pluginManagement/plugins` gets `source` and
/// `target` updated where each field exists.
///
/// Profile-scoped plugin configuration is read by the locator but never
/// written here.
pub fn apply_java_version(doc: &mut PomDocument, new_version: &str) {
    let new_version = normalize_java_version(new_version);
    let root = doc.root_mut();

    if let Some(properties) = root.find_child_mut("properties") {
        if let Some(source) = properties.find_child_mut("maven.compiler.source") {
            source.set_text(&new_version);
        } else if let Some(java) = properties.find_child_mut("java.version") {
            java.set_text(&new_version);
        }
    }

    if let Some(build) = root.find_child_mut("build") {
        if let Some(plugins) = build.find_child_mut("plugins") {
            set_in_plugin_container(plugins, &new_version);
        }
        if let Some(plugins) = build
            .find_child_mut("pluginManagement")
            .and_then(|management| management.find_child_mut("plugins"))
        {
            set_in_plugin_container(plugins, &new_version);
        }
    }
}

fn set_in_plugin_container(plugins: &mut XmlElement, new_version: &str) {
    for plugin in plugins.find_all_mut("plugin") {
        let is_compiler = plugin
            .find_child("artifactId")
            .and_then(XmlElement::text)
            .is_some_and(|id| id == COMPILER_PLUGIN);
        if !is_compiler {
            continue;
        }
        if let Some(configuration) = plugin.find_child_mut("configuration") {
            if let Some(source) = configuration.find_child_mut("source") {
                source.set_text(new_version);
            }
            if let Some(target) = configuration.find_child_mut("target") {
                target.set_text(new_version);
            }
        }
    }
}
