use std::rc::Rc;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult, Flow, STACK_GROW_SIZE, STACK_RED_ZONE},
        value::{
            core::Value,
            object::{Class, Function},
        },
    },
};

impl Context<'_> {
    /// Evaluates a single statement.
    ///
    /// Conditionals and loops run their bodies in `env` itself; only function
    /// calls introduce a new scope.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `env`: The current scope.
    ///
    /// # Returns
    /// [`Flow::Returning`] if a `return` was executed, otherwise
    /// [`Flow::Plain`] with the statement's value.
    pub fn eval_statement(&mut self, statement: &Statement, env: &Environment) -> EvalResult<Flow> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
            self.eval_statement_inner(statement, env)
        })
    }

    fn eval_statement_inner(&mut self,
                            statement: &Statement,
                            env: &Environment)
                            -> EvalResult<Flow> {
        match statement {
            Statement::Say { expr, .. } => {
                let value = self.eval(expr, env)?;
                self.emit(&value.to_string());
                Ok(Flow::Plain(value))
            },
            Statement::Expression { expr, .. } => Ok(Flow::Plain(self.eval(expr, env)?)),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval(condition, env)?.is_truthy() {
                    self.eval_block(then_branch, env)
                } else if let Some(else_branch) = else_branch {
                    self.eval_block(else_branch, env)
                } else {
                    Ok(Flow::Plain(Value::Absent))
                }
            },
            Statement::While { condition, body, .. } => {
                while self.eval(condition, env)?.is_truthy() {
                    if let returning @ Flow::Returning(_) = self.eval_block(body, env)? {
                        return Ok(returning);
                    }
                }
                Ok(Flow::Plain(Value::Absent))
            },
            Statement::Repeat { count, body, line } => self.eval_repeat(count, body, *line, env),
            Statement::Function(def) => {
                log::debug!("defining function '{}' on line {}", def.name, def.line);
                let function = Value::Function(Rc::new(Function::new(Rc::clone(def), env.clone())));
                env.define(&def.name, function.clone());
                Ok(Flow::Plain(function))
            },
            Statement::Class(def) => {
                log::debug!("defining class '{}' with {} methods", def.name, def.methods.len());
                let class = Value::Class(Rc::new(Class::new(def, env.clone())));
                env.define(&def.name, class.clone());
                Ok(Flow::Plain(class))
            },
            Statement::Return { value, .. } => Ok(Flow::Returning(self.eval(value, env)?)),
        }
    }

    /// Evaluates a sequence of statements in `env`.
    ///
    /// Stops at the first [`Flow::Returning`] and passes it on. Otherwise the
    /// value of the last statement is returned, or `Absent` for an empty
    /// block.
    pub fn eval_block(&mut self, statements: &[Statement], env: &Environment) -> EvalResult<Flow> {
        let mut last = Value::Absent;

        for statement in statements {
            match self.eval_statement(statement, env)? {
                Flow::Plain(value) => last = value,
                returning @ Flow::Returning(_) => return Ok(returning),
            }
        }

        Ok(Flow::Plain(last))
    }

    /// Evaluates `repeat <count> times ... end`.
    ///
    /// The count is evaluated once. The body runs while a counter starting at
    /// zero is below the count, so `repeat 2.5 times` runs three times and a
    /// count of zero or less never runs the body.
    ///
    /// # Errors
    /// Returns [`RuntimeError::ExpectedNumber`] if the count is not a number.
    fn eval_repeat(&mut self,
                   count: &Expr,
                   body: &[Statement],
                   line: usize,
                   env: &Environment)
                   -> EvalResult<Flow> {
        let count = match self.eval(count, env)? {
            Value::Number(n) => n,
            other => {
                return Err(RuntimeError::ExpectedNumber { context: format!("repeat count, found {}",
                                                                           other.type_name()),
                                                          line });
            },
        };

        let mut iteration = 0.0;
        while iteration < count {
            if let returning @ Flow::Returning(_) = self.eval_block(body, env)? {
                return Ok(returning);
            }
            iteration += 1.0;
        }

        Ok(Flow::Plain(Value::Absent))
    }
}
