use std::rc::Rc;

use crate::interpreter::{
    environment::Environment,
    evaluator::core::{Context, EvalResult},
    value::{
        core::Value,
        object::{Class, Instance, get_attribute},
    },
};

impl Context<'_> {
    /// Reads attribute `name` from `target`.
    ///
    /// Only instances have attributes; reading from anything else yields
    /// [`Value::Absent`].
    #[must_use]
    pub fn get_attr(target: &Value, name: &str) -> Value {
        match target {
            Value::Instance(instance) => get_attribute(instance, name),
            _ => Value::Absent,
        }
    }

    /// Writes attribute `name` on `target` and returns the written value.
    ///
    /// Writing to anything but an instance has no effect and yields
    /// [`Value::Absent`].
    pub fn set_attr(target: &Value, name: &str, value: Value, line: usize) -> Value {
        if let Value::Instance(instance) = target {
            instance.set_field(name, value.clone());
            return value;
        }

        log::debug!("ignoring write of '{name}' on a {} at line {line}", target.type_name());
        Value::Absent
    }

    /// Creates an instance of `class`.
    ///
    /// If the class defines `init`, it is called with the new instance
    /// prepended to `args`; its return value is discarded.
    pub(crate) fn instantiate(&mut self,
                              class: &Rc<Class>,
                              args: Vec<Value>,
                              line: usize,
                              env: &Environment)
                              -> EvalResult<Value> {
        let instance = Rc::new(Instance::new(Rc::clone(class)));

        if let Some(init) = class.method("init") {
            let mut init_args = Vec::with_capacity(args.len() + 1);
            init_args.push(Value::Instance(Rc::clone(&instance)));
            init_args.extend(args);

            self.invoke(&init, &class.closure, init_args, line, env)?;
        }

        Ok(Value::Instance(instance))
    }
}
