use crate::domain::{Context, Controller};
use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

/// Builds the controller of one domain, `None` signals that the factory can't produce one.
pub trait ControllerFactory {
    fn create(context: &Context) -> Option<Box<dyn Controller>>;
}

pub type FactoryFn = fn(&Context) -> Option<Box<dyn Controller>>;

static FACTORY_REGISTRY: LazyLock<RwLock<HashMap<String, FactoryFn>>> = LazyLock::new(|| RwLock::new(HashMap::new()));

pub fn register_factory<T: ControllerFactory>(name: &str) {
    FACTORY_REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name.to_owned(), T::create);
}

pub fn factory(name: &str) -> Option<FactoryFn> {
    FACTORY_REGISTRY.read().unwrap_or_else(PoisonError::into_inner).get(name).copied()
}

pub fn known_factories() -> Vec<String> {
    let registry = FACTORY_REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    let mut names: Vec<String> = registry.keys().cloned().collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use controller_macros::register_factory;
    use std::any::Any;

    #[derive(Debug, Clone)]
    struct WishlistController;

    impl Controller for WishlistController {
        fn box_clone(&self) -> Box<dyn Controller> {
            Box::new(self.clone())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[register_factory]
    struct WishlistFactory;

    impl ControllerFactory for WishlistFactory {
        fn create(_context: &Context) -> Option<Box<dyn Controller>> {
            Some(Box::new(WishlistController))
        }
    }

    struct CouponFactory;

    impl ControllerFactory for CouponFactory {
        fn create(_context: &Context) -> Option<Box<dyn Controller>> {
            None
        }
    }

    #[test]
    fn macro_registers_factory_before_main() {
        let create = factory("WishlistFactory").expect("WishlistFactory should be registered");
        let controller = create(&Context::default()).unwrap();

        assert!(controller.as_any().is::<WishlistController>());
        assert!(known_factories().contains(&"WishlistFactory".to_string()));
    }

    #[test]
    fn registers_factory_by_name() {
        register_factory::<CouponFactory>("CouponFactory");

        let create = factory("CouponFactory").unwrap();
        assert!(create(&Context::default()).is_none());
    }

    #[test]
    fn unknown_factory_is_none() {
        assert!(factory("UnknownFactory").is_none());
    }

    #[test]
    fn known_factories_are_sorted() {
        let names = known_factories();
        let mut sorted = names.clone();
        sorted.sort();

        assert_eq!(names, sorted);
    }
}
