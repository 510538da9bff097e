use std::any::Any;
use std::fmt::Debug;

/// A frontend controller for one area of the shop, e.g. the catalog or the basket.
pub trait Controller: Debug + Send + Sync {
    /// Returns an independent copy, changes to it must not be visible through `self`.
    fn box_clone(&self) -> Box<dyn Controller>;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl Clone for Box<dyn Controller> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}
