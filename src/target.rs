use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Trait for objects with independently addressable named numeric properties.
///
/// Any type the host wants to animate implements this once. A `None` read
/// is treated as 0.0 when a tween snapshots its start values, so animating
/// a property the target does not know about is not an error.
pub trait Animatable {
    /// Read the current value of a property, if the target has it
    fn get(&self, property: &str) -> Option<f64>;

    /// Write a new value for a property
    fn set(&mut self, property: &str, value: f64);
}

/// Shared handle to an animatable target.
///
/// Targets are owned by the host and borrowed by every tween animating
/// them; the scheduler never takes exclusive ownership.
pub type SharedTarget = Rc<RefCell<dyn Animatable>>;

/// Wrap an animatable value into a [`SharedTarget`] handle
pub fn shared<T: Animatable + 'static>(target: T) -> SharedTarget {
    Rc::new(RefCell::new(target))
}

// Loose property bags work out of the box.
impl Animatable for HashMap<String, f64> {
    fn get(&self, property: &str) -> Option<f64> {
        self.get(property).copied()
    }

    fn set(&mut self, property: &str, value: f64) {
        self.insert(property.to_owned(), value);
    }
}

/// A getter/setter pair overriding direct [`Animatable`] access for one tween.
///
/// Lets a tween animate derived quantities (a scale factor applied to two
/// raw fields, a clamped channel) without the target growing extra
/// properties for them.
pub struct Accessors {
    get: Box<dyn Fn(&dyn Animatable, &str) -> Option<f64>>,
    set: Box<dyn FnMut(&mut dyn Animatable, &str, f64)>,
}

impl Accessors {
    pub fn new<G, S>(get: G, set: S) -> Self
    where
        G: Fn(&dyn Animatable, &str) -> Option<f64> + 'static,
        S: FnMut(&mut dyn Animatable, &str, f64) + 'static,
    {
        Self {
            get: Box::new(get),
            set: Box::new(set),
        }
    }

    pub(crate) fn read(&self, target: &dyn Animatable, property: &str) -> Option<f64> {
        (self.get)(target, property)
    }

    pub(crate) fn write(&mut self, target: &mut dyn Animatable, property: &str, value: f64) {
        (self.set)(target, property, value)
    }
}
