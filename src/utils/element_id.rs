use gpui::{ElementId, SharedString};

pub trait ElementIdExt {
    /// Derives a child id, used to key per-element state such as transitions.
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), suffix.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixed_ids_are_distinct() {
        let id = ElementId::from("product-card");

        assert_ne!(id.with_suffix("state:pressed"), id.with_suffix("state:hover"));
        assert_eq!(id.with_suffix("state:pressed"), id.with_suffix("state:pressed"));
    }
}
