//! Names of generated artifacts
//!
//! Proxy classes live in a single generated package and are named after the
//! fully-qualified entity name with `.` replaced by `_`, so two entities with
//! the same simple name in different packages never collide.

/// Package holding all generated proxies.
pub const GENERATED_PACKAGE: &str = "io.realm";

pub const PROXY_SUFFIX: &str = "RealmProxy";

pub const INTERFACE_SUFFIX: &str = "RealmProxyInterface";

/// Module class generated when no module is declared.
pub const DEFAULT_MODULE_CLASS_NAME: &str = "DefaultRealmModule";

fn mangle(qualified_name: &str) -> String {
    qualified_name.replace('.', "_")
}

/// Simple name of the proxy class for an entity.
pub fn proxy_class_name(qualified_name: &str) -> String {
    format!("{}{}", mangle(qualified_name), PROXY_SUFFIX)
}

/// Simple name of the proxy interface for an entity.
pub fn proxy_interface_name(qualified_name: &str) -> String {
    format!("{}{}", mangle(qualified_name), INTERFACE_SUFFIX)
}

/// Fully-qualified proxy class name.
pub fn qualified_proxy_class_name(qualified_name: &str) -> String {
    format!("{}.{}", GENERATED_PACKAGE, proxy_class_name(qualified_name))
}

/// Fully-qualified default module name.
pub fn default_module_name() -> String {
    format!("{}.{}", GENERATED_PACKAGE, DEFAULT_MODULE_CLASS_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_names() {
        assert_eq!(proxy_class_name("com.example.Dog"), "com_example_DogRealmProxy");
        assert_eq!(
            proxy_interface_name("com.example.Dog"),
            "com_example_DogRealmProxyInterface"
        );
        assert_eq!(
            qualified_proxy_class_name("com.example.Dog"),
            "io.realm.com_example_DogRealmProxy"
        );
    }

    #[test]
    fn test_default_package_class() {
        assert_eq!(proxy_class_name("Dog"), "DogRealmProxy");
    }

    #[test]
    fn test_same_simple_name_does_not_collide() {
        assert_ne!(proxy_class_name("a.Dog"), proxy_class_name("b.Dog"));
    }

    #[test]
    fn test_default_module() {
        assert_eq!(default_module_name(), "io.realm.DefaultRealmModule");
    }
}
