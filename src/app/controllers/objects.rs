use crate::app::infrastructure::error::{AppError, Result};

/// Produces the text to embed for an inserted object
pub type ObjectHandler = Box<dyn FnMut() -> String>;

/// Registry of named "Insert > Object" handlers, kept in registration order
#[derive(Default)]
pub struct ObjectInsertionController {
    handlers: Vec<(String, ObjectHandler)>,
}

impl ObjectInsertionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `name` with `handler`, replacing an existing entry in place
    pub fn register_handler<F>(&mut self, name: &str, handler: F)
    where
        F: FnMut() -> String + 'static,
    {
        match self.handlers.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = Box::new(handler),
            None => self.handlers.push((name.to_string(), Box::new(handler))),
        }
    }

    pub fn unregister_handler(&mut self, name: &str) {
        self.handlers.retain(|(n, _)| n != name);
    }

    pub fn available_objects(&self) -> Vec<&str> {
        self.handlers.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Run the handler registered under `name`
    pub fn insert(&mut self, name: &str) -> Result<String> {
        let (_, handler) = self
            .handlers
            .iter_mut()
            .find(|(n, _)| n == name)
            .ok_or_else(|| AppError::UnknownObject(name.to_string()))?;
        Ok(handler())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_executes_registered_handler() {
        let mut controller = ObjectInsertionController::new();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        controller.register_handler("Sample", move || {
            counter.set(counter.get() + 1);
            "result".to_string()
        });

        assert_eq!(controller.available_objects(), vec!["Sample"]);
        assert_eq!(controller.insert("Sample").unwrap(), "result");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_registration_order_and_replacement() {
        let mut controller = ObjectInsertionController::new();
        controller.register_handler("Date", || "2024-01-01".to_string());
        controller.register_handler("Rule", || "----".to_string());
        controller.register_handler("Date", || "today".to_string());

        assert_eq!(controller.available_objects(), vec!["Date", "Rule"]);
        assert_eq!(controller.insert("Date").unwrap(), "today");
    }

    #[test]
    fn test_unregister() {
        let mut controller = ObjectInsertionController::new();
        controller.register_handler("Rule", || "----".to_string());
        controller.unregister_handler("Rule");
        controller.unregister_handler("Missing");
        assert!(controller.available_objects().is_empty());
    }

    #[test]
    fn test_unknown_object() {
        let mut controller = ObjectInsertionController::new();
        assert!(matches!(controller.insert("Chart"), Err(AppError::UnknownObject(name)) if name == "Chart"));
    }
}
