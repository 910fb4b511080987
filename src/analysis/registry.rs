// Name-keyed registry of class nodes, built incrementally while scanning

use crate::parser::ClassDeclaration;
use std::collections::BTreeMap;

/// One class, either declared or only referenced as a parent so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    pub name: String,
    /// Name after `extends`, verbatim
    pub parent: Option<String>,
    /// Classes that extend this one, in discovery order
    pub children: Vec<String>,
    /// False for placeholders that no declaration has filled in yet
    pub declared: bool,
}

impl ClassNode {
    fn new_declared(name: &str, parent: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            parent,
            children: Vec::new(),
            declared: true,
        }
    }

    fn placeholder(name: &str, first_child: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            children: vec![first_child.to_string()],
            declared: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        !self.declared
    }

    fn add_child(&mut self, child: &str) {
        if !self.children.iter().any(|c| c == child) {
            self.children.push(child.to_string());
        }
    }
}

/// All classes seen so far, at most one node per name
#[derive(Debug, Default, Clone)]
pub struct ClassRegistry {
    nodes: BTreeMap<String, ClassNode>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration.
    ///
    /// An existing node keeps its children and only has its parent replaced,
    /// so the last declaration seen wins. The class is then linked under its
    /// parent, creating a placeholder for a parent not seen yet.
    pub fn record(&mut self, decl: ClassDeclaration) {
        let ClassDeclaration { name, parent } = decl;

        let previous_parent = match self.nodes.get_mut(&name) {
            Some(node) => {
                node.declared = true;
                std::mem::replace(&mut node.parent, parent.clone())
            }
            None => {
                self.nodes
                    .insert(name.clone(), ClassNode::new_declared(&name, parent.clone()));
                None
            }
        };

        if let Some(old) = previous_parent.filter(|old| Some(old) != parent.as_ref()) {
            if let Some(old_node) = self.nodes.get_mut(&old) {
                old_node.children.retain(|c| c != &name);
            }
        }

        if let Some(parent) = parent {
            match self.nodes.get_mut(&parent) {
                Some(parent_node) => parent_node.add_child(&name),
                None => {
                    self.nodes
                        .insert(parent.clone(), ClassNode::placeholder(&parent, &name));
                }
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ClassNode> {
        self.nodes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = &ClassNode> {
        self.nodes.values()
    }

    /// Number of parent links
    pub fn edge_count(&self) -> usize {
        self.nodes.values().filter(|n| n.parent.is_some()).count()
    }

    /// Names referenced as a parent but never declared
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .values()
            .filter(|n| n.is_placeholder())
            .map(|n| n.name.as_str())
    }

    /// Classes without a parent
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .values()
            .filter(|n| n.parent.is_none())
            .map(|n| n.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(name: &str, parent: Option<&str>) -> ClassDeclaration {
        ClassDeclaration::new(name, parent)
    }

    #[test]
    fn test_empty_registry() {
        let registry = ClassRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.edge_count(), 0);
    }

    #[test]
    fn test_record_creates_child_and_placeholder_parent() {
        let mut registry = ClassRegistry::new();
        registry.record(decl("Foo", Some("Bar")));

        let foo = registry.get("Foo").unwrap();
        assert_eq!(foo.parent.as_deref(), Some("Bar"));
        assert!(foo.declared);

        let bar = registry.get("Bar").unwrap();
        assert!(bar.is_placeholder());
        assert_eq!(bar.parent, None);
        assert_eq!(bar.children, vec!["Foo"]);
        assert_eq!(registry.placeholders().collect::<Vec<_>>(), vec!["Bar"]);
    }

    #[test]
    fn test_forward_reference_is_merged() {
        let mut registry = ClassRegistry::new();
        registry.record(decl("Child", Some("Middle")));
        registry.record(decl("Middle", Some("Root")));

        let middle = registry.get("Middle").unwrap();
        assert!(middle.declared);
        assert_eq!(middle.parent.as_deref(), Some("Root"));
        assert_eq!(middle.children, vec!["Child"]);
        assert_eq!(registry.get("Root").unwrap().children, vec!["Middle"]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.edge_count(), 2);
    }

    #[test]
    fn test_existing_parent_gets_child_appended() {
        let mut registry = ClassRegistry::new();
        registry.record(decl("Base", None));
        registry.record(decl("A", Some("Base")));
        registry.record(decl("B", Some("Base")));

        assert_eq!(registry.get("Base").unwrap().children, vec!["A", "B"]);
        assert!(registry.get("Base").unwrap().declared);
    }

    #[test]
    fn test_redeclaration_last_parent_wins() {
        let mut registry = ClassRegistry::new();
        registry.record(decl("X", Some("First")));
        registry.record(decl("X", Some("Second")));

        assert_eq!(registry.get("X").unwrap().parent.as_deref(), Some("Second"));
        assert!(registry.get("First").unwrap().children.is_empty());
        assert_eq!(registry.get("Second").unwrap().children, vec!["X"]);
        assert_eq!(registry.edge_count(), 1);
    }

    #[test]
    fn test_redeclaration_keeps_children() {
        let mut registry = ClassRegistry::new();
        registry.record(decl("Base", None));
        registry.record(decl("Derived", Some("Base")));
        registry.record(decl("Base", Some("Top")));

        let base = registry.get("Base").unwrap();
        assert_eq!(base.children, vec!["Derived"]);
        assert_eq!(base.parent.as_deref(), Some("Top"));
    }

    #[test]
    fn test_redeclaration_without_parent_clears_parent() {
        let mut registry = ClassRegistry::new();
        registry.record(decl("X", Some("P")));
        registry.record(decl("X", None));

        assert_eq!(registry.get("X").unwrap().parent, None);
        assert!(registry.get("P").unwrap().children.is_empty());
        assert_eq!(registry.edge_count(), 0);
    }

    #[test]
    fn test_same_declaration_twice_no_duplicate_child() {
        let mut registry = ClassRegistry::new();
        registry.record(decl("X", Some("P")));
        registry.record(decl("X", Some("P")));

        assert_eq!(registry.get("P").unwrap().children, vec!["X"]);
    }

    #[test]
    fn test_dotted_and_plain_parents_stay_separate() {
        let mut registry = ClassRegistry::new();
        registry.record(decl("A", Some("Expr")));
        registry.record(decl("B", Some("Java.Expr")));

        assert!(registry.contains("Expr"));
        assert!(registry.contains("Java.Expr"));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_self_extension_is_recorded() {
        let mut registry = ClassRegistry::new();
        registry.record(decl("Loop", Some("Loop")));

        let node = registry.get("Loop").unwrap();
        assert_eq!(node.parent.as_deref(), Some("Loop"));
        assert_eq!(node.children, vec!["Loop"]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iter_and_roots_sorted() {
        let mut registry = ClassRegistry::new();
        registry.record(decl("Zeta", Some("Alpha")));
        registry.record(decl("Mid", None));

        let names: Vec<&str> = registry.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
        assert_eq!(registry.roots().collect::<Vec<_>>(), vec!["Alpha", "Mid"]);
    }
}
