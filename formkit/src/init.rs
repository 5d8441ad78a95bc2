use log::debug;

/// Page initializers, run once in registration order.
#[derive(Default)]
pub struct Initializers {
    pending: Vec<Box<dyn FnOnce()>>,
}

impl Initializers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, initializer: impl FnOnce() + 'static) {
        self.pending.push(Box::new(initializer));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Runs and drains every registered initializer.
    pub fn run(&mut self) {
        debug!("Running {} page initializers", self.pending.len());
        for initializer in self.pending.drain(..) {
            initializer();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn runs_in_order_once() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut initializers = Initializers::new();
        for i in 0..3 {
            let order = order.clone();
            initializers.register(move || order.borrow_mut().push(i));
        }
        assert_eq!(initializers.len(), 3);

        initializers.run();
        initializers.run();

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        assert!(initializers.is_empty());
    }
}
