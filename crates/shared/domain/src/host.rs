/// The host type a flag-set compiles against.
///
/// Both reserved-name predicates are opaque collaborators owned by the host
/// framework; the compiler only consults them, it never redefines what a
/// reserved name is.
pub trait HostType {
    /// Host type name, used in conflict messages.
    fn type_name(&self) -> &str;

    /// True if `name` collides with the host's built-in instance surface.
    fn is_reserved_instance_name(&self, name: &str) -> bool;

    /// True if `name` collides with the host's class-level surface, including
    /// any query/relation-builder surface the host exposes.
    fn is_reserved_class_name(&self, name: &str) -> bool;
}

/// A host type with a fixed set of reserved names, convenient for tests and
/// for hosts that can enumerate their surface up front.
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    name: String,
    reserved_instance: Vec<String>,
    reserved_class: Vec<String>,
}

impl StaticHost {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), reserved_instance: Vec::new(), reserved_class: Vec::new() }
    }

    #[must_use]
    pub fn with_reserved_instance_names(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.reserved_instance.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_reserved_class_names(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.reserved_class.extend(names.into_iter().map(Into::into));
        self
    }
}

impl HostType for StaticHost {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn is_reserved_instance_name(&self, name: &str) -> bool {
        self.reserved_instance.iter().any(|n| n == name)
    }

    fn is_reserved_class_name(&self, name: &str) -> bool {
        self.reserved_class.iter().any(|n| n == name)
    }
}
