use std::collections::BTreeSet;

use tally_data::Contact;

/// Membership lookup: is this contact a user of the app? Injected
/// so the hardcoded stub can give way to a real directory service.
pub trait UserRegistry {
    fn is_registered(&self, contact: &Contact) -> bool;
}

/// Registry backed by a fixed set of display names.
#[derive(Debug, Default, Clone)]
pub struct StaticRegistry {
    names: BTreeSet<String>,
}

impl StaticRegistry {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        StaticRegistry {
            names: names.into_iter().collect(),
        }
    }
}

impl UserRegistry for StaticRegistry {
    fn is_registered(&self, contact: &Contact) -> bool {
        self.names.contains(&contact.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_registry() {
        let registry = StaticRegistry::new(["Bo".to_string()]);

        let bo = Contact {
            name: "Bo".to_string(),
            ..Default::default()
        };
        let dee = Contact {
            name: "Dee".to_string(),
            ..Default::default()
        };
        assert!(registry.is_registered(&bo));
        assert!(!registry.is_registered(&dee));
        assert!(!StaticRegistry::default().is_registered(&bo));
    }
}
